use async_trait::async_trait;

use crate::modules::media::domain::{MediaKind, MediaRef};
use crate::shared::errors::VocabResult;

/// Contract for the physical storage backing audio/image assets. The rest of
/// the crate never touches storage directly; it holds `MediaRef`s and moves
/// them through this trait.
///
/// Callers replacing an asset must release the previous ref only after the
/// new one is durably associated with its entry.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist one asset. Size and format constraints are checked before any
    /// byte is written; a rejected upload leaves storage untouched.
    async fn store(&self, kind: MediaKind, bytes: &[u8], format: &str) -> VocabResult<MediaRef>;

    /// Delete the physical asset behind `media_ref`. Failures surface as
    /// `ReleaseFailed`; callers treat them as non-fatal and report the
    /// orphaned ref instead of aborting their own operation.
    async fn release(&self, media_ref: &MediaRef) -> VocabResult<()>;
}
