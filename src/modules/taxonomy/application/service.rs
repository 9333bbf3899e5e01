use std::sync::Arc;
use uuid::Uuid;

use crate::modules::taxonomy::domain::{Category, CategoryListing, CategoryRepository};
use crate::shared::errors::{VocabError, VocabResult};
use crate::shared::utils::Validator;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> VocabResult<Category> {
        Validator::validate_category_name(&name)?;

        let mut category = Category::new(name);
        if let Some(desc) = description {
            category = category.with_description(desc);
        }

        let saved = self.category_repo.insert(&category).await?;
        log::info!("category '{}' created", saved.name);
        Ok(saved)
    }

    pub async fn find_by_slug(&self, slug: &str) -> VocabResult<Category> {
        self.category_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| VocabError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Categories with at least one approved entry, for the browse sidebar.
    pub async fn browse(&self) -> VocabResult<Vec<CategoryListing>> {
        self.category_repo.list_with_counts().await
    }

    /// Deleting a category never deletes entries; they keep existing with
    /// no category.
    pub async fn delete(&self, id: &Uuid) -> VocabResult<()> {
        self.category_repo.delete(id).await?;
        log::info!("category {} deleted", id);
        Ok(())
    }
}
