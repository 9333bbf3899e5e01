use regex::Regex;

use crate::shared::errors::VocabError;

pub const WORD_MAX_CHARS: usize = 100;
pub const TAG_MAX_CHARS: usize = 50;
pub const CATEGORY_NAME_MAX_CHARS: usize = 100;
pub const COMMENT_MIN_CHARS: usize = 3;
pub const COMMENT_MAX_CHARS: usize = 1000;

pub struct Validator;

impl Validator {
    pub fn validate_word(word: &str) -> Result<(), VocabError> {
        if word.trim().is_empty() {
            return Err(VocabError::ValidationError(
                "Word cannot be empty".to_string(),
            ));
        }
        if word.chars().count() > WORD_MAX_CHARS {
            return Err(VocabError::ValidationError(format!(
                "Word too long (max {} characters)",
                WORD_MAX_CHARS
            )));
        }
        Ok(())
    }

    pub fn validate_translation(translation: &str) -> Result<(), VocabError> {
        if translation.trim().is_empty() {
            return Err(VocabError::ValidationError(
                "Translation cannot be empty".to_string(),
            ));
        }
        if translation.chars().count() > WORD_MAX_CHARS {
            return Err(VocabError::ValidationError(format!(
                "Translation too long (max {} characters)",
                WORD_MAX_CHARS
            )));
        }
        Ok(())
    }

    /// Expects an already-normalized (trimmed, lowercased) tag name.
    pub fn validate_tag_name(name: &str) -> Result<(), VocabError> {
        if name.is_empty() {
            return Err(VocabError::ValidationError(
                "Tag name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > TAG_MAX_CHARS {
            return Err(VocabError::ValidationError(format!(
                "Tag name too long (max {} characters)",
                TAG_MAX_CHARS
            )));
        }
        Ok(())
    }

    pub fn validate_category_name(name: &str) -> Result<(), VocabError> {
        if name.is_empty() {
            return Err(VocabError::ValidationError(
                "Category name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > CATEGORY_NAME_MAX_CHARS {
            return Err(VocabError::ValidationError(format!(
                "Category name too long (max {} characters)",
                CATEGORY_NAME_MAX_CHARS
            )));
        }

        // Check for valid characters (alphanumeric, spaces, and some special characters)
        let re = Regex::new(r"^[a-zA-Z0-9\s\-_&']+$").unwrap();
        if !re.is_match(name) {
            return Err(VocabError::ValidationError(
                "Category name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Trims the content and enforces the length window; returns the trimmed
    /// text that should be persisted.
    pub fn validate_comment_content(content: &str) -> Result<String, VocabError> {
        let trimmed = content.trim();
        let len = trimmed.chars().count();
        if len < COMMENT_MIN_CHARS {
            return Err(VocabError::InvalidComment(format!(
                "Comment must be at least {} characters",
                COMMENT_MIN_CHARS
            )));
        }
        if len > COMMENT_MAX_CHARS {
            return Err(VocabError::InvalidComment(format!(
                "Comment cannot exceed {} characters",
                COMMENT_MAX_CHARS
            )));
        }
        Ok(trimmed.to_string())
    }
}
