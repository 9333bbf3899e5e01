use uuid::Uuid;

use kiugo::modules::entry::domain::{Language, VocabEntry};
use kiugo::modules::media::domain::MediaRef;

pub fn pending_entry(owner_id: Uuid) -> VocabEntry {
    VocabEntry::new(
        "wĩ mwega".to_string(),
        "you are well".to_string(),
        Language::Kikuyu,
        owner_id,
    )
}

pub fn approved_entry(owner_id: Uuid, reviewer: Uuid) -> VocabEntry {
    let mut entry = pending_entry(owner_id);
    entry.approve(reviewer);
    entry
}

pub fn rejected_entry(owner_id: Uuid, reviewer: Uuid, reason: &str) -> VocabEntry {
    let mut entry = pending_entry(owner_id);
    entry.reject(reviewer, reason.to_string());
    entry
}

pub fn entry_with_media(owner_id: Uuid, audio: &str, image: &str) -> VocabEntry {
    let mut entry = pending_entry(owner_id);
    entry.audio = Some(MediaRef::new(audio));
    entry.image = Some(MediaRef::new(image));
    entry
}
