use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;
use uuid::Uuid;

use crate::modules::media::domain::{MediaKind, MediaRef, MediaStore};
use crate::shared::errors::{VocabError, VocabResult};

/// Filesystem-backed media store. Assets live under a root directory in
/// kind-segregated subdirectories; the issued ref is the path relative to
/// the root (e.g. `audio/3f0e….mp3`).
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> VocabResult<Self> {
        let root = root.into();
        for sub in ["audio", "images"] {
            fs::create_dir_all(root.join(sub)).map_err(|e| {
                VocabError::InternalError(format!("Failed to create media directory: {}", e))
            })?;
        }
        Ok(Self { root })
    }

    fn subdir(kind: MediaKind) -> &'static str {
        match kind {
            MediaKind::Audio => "audio",
            MediaKind::Image => "images",
        }
    }

    fn resolve(&self, media_ref: &MediaRef) -> VocabResult<PathBuf> {
        let rel = Path::new(media_ref.as_str());
        // Refs are issued by this store and never contain parent components;
        // anything else did not come from us.
        if rel.components().any(|c| !matches!(c, std::path::Component::Normal(_))) {
            return Err(VocabError::ReleaseFailed(format!(
                "Ref '{}' does not belong to this store",
                media_ref
            )));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn store(&self, kind: MediaKind, bytes: &[u8], format: &str) -> VocabResult<MediaRef> {
        kind.validate(bytes.len(), format)?;

        let fmt = MediaKind::normalize_format(format);
        let rel = format!("{}/{}.{}", Self::subdir(kind), Uuid::new_v4(), fmt);
        let path = self.root.join(&rel);
        let tmp = path.with_extension(format!("{}.tmp", fmt));
        let data = bytes.to_vec();

        task::spawn_blocking(move || -> VocabResult<()> {
            // Write to a sibling temp file, then rename: a crash mid-write
            // cannot leave a half-written asset behind the final name.
            fs::write(&tmp, &data)
                .and_then(|_| fs::rename(&tmp, &path))
                .map_err(|e| {
                    let _ = fs::remove_file(&tmp);
                    VocabError::InternalError(format!("Failed to persist media asset: {}", e))
                })
        })
        .await??;

        log::debug!("stored {} asset as {}", kind, rel);
        Ok(MediaRef::new(rel))
    }

    async fn release(&self, media_ref: &MediaRef) -> VocabResult<()> {
        let path = self.resolve(media_ref)?;
        let rel = media_ref.as_str().to_string();

        task::spawn_blocking(move || -> VocabResult<()> {
            fs::remove_file(&path)
                .map_err(|e| VocabError::ReleaseFailed(format!("{}: {}", rel, e)))
        })
        .await??;

        log::debug!("released media asset {}", media_ref);
        Ok(())
    }
}
