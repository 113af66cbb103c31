use crate::domain::{Address, MultiEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredName {
    pub prefix: String,
    pub given: String,
    pub additional: String,
    pub family: String,
    pub suffix: String,
}

impl StructuredName {
    /// Parts in display order: prefix, given, additional, family, suffix.
    pub fn parts(&self) -> [&str; 5] {
        [
            self.prefix.as_str(),
            self.given.as_str(),
            self.additional.as_str(),
            self.family.as_str(),
            self.suffix.as_str(),
        ]
    }

    /// True when every part is blank. Whitespace-only parts count as blank.
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|part| part.trim().is_empty())
    }

    /// Non-blank parts joined by single spaces.
    pub fn joined(&self) -> String {
        self.parts()
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub display_name: Option<String>,
    pub name: Option<StructuredName>,
    pub phones: MultiEntry,
    pub emails: MultiEntry,
    pub websites: MultiEntry,
    pub addresses: Vec<Address>,
    pub birthday: Option<String>,
    pub nickname: Option<String>,
    pub note: Option<String>,
    pub categories: Vec<String>,
}
