use crate::types::EntryType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub po_box: String,
    pub extended: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub formatted: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryType>,
}

impl Address {
    /// Structured parts in card order: box, extended, street, city, region,
    /// postal code, country.
    pub fn components(&self) -> [&str; 7] {
        [
            self.po_box.as_str(),
            self.extended.as_str(),
            self.street.as_str(),
            self.city.as_str(),
            self.region.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
    }

    /// True when any structured part is set. `formatted` does not count.
    pub fn has_address(&self) -> bool {
        self.components().iter().any(|part| !part.is_empty())
    }

    pub fn has_label(&self) -> bool {
        !self.formatted.is_empty()
    }
}
