use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::VocabLanguage"]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Kikuyu,
    English,
    Swahili,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Kikuyu => "Kikuyu",
            Language::English => "English",
            Language::Swahili => "Swahili",
        }
    }

    /// Listing filters silently ignore unrecognized tokens, so parsing is
    /// fallible rather than defaulting.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kikuyu" => Some(Language::Kikuyu),
            "english" => Some(Language::English),
            "swahili" => Some(Language::Swahili),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
