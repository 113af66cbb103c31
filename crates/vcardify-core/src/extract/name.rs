use crate::columns::{ADDITIONAL_NAME, FAMILY_NAME, GIVEN_NAME, NAME_PREFIX, NAME_SUFFIX};
use crate::domain::{MultiEntry, StructuredName};
use crate::row::RowDecoder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedName {
    pub display_name: Option<String>,
    pub structured: Option<StructuredName>,
}

/// Picks the display name: the full-name cell, else the joined name parts,
/// else the primary email, else the primary phone. The structured name is
/// kept whenever a part is set, whichever source won.
pub fn resolve_name(
    decoder: &mut RowDecoder<'_>,
    full_name: &str,
    emails: &MultiEntry,
    phones: &MultiEntry,
) -> ResolvedName {
    let parts = StructuredName {
        prefix: decoder.take_or_empty(NAME_PREFIX).to_string(),
        given: decoder.take_or_empty(GIVEN_NAME).to_string(),
        additional: decoder.take_or_empty(ADDITIONAL_NAME).to_string(),
        family: decoder.take_or_empty(FAMILY_NAME).to_string(),
        suffix: decoder.take_or_empty(NAME_SUFFIX).to_string(),
    };

    let display_name = if !full_name.is_empty() {
        Some(full_name.to_string())
    } else {
        let joined = parts.joined();
        if !joined.is_empty() {
            Some(joined)
        } else {
            emails
                .primary_value()
                .or_else(|| phones.primary_value())
                .map(str::to_string)
        }
    };

    ResolvedName {
        display_name,
        structured: (!parts.is_empty()).then_some(parts),
    }
}
