use crate::columns::{MULTI_VALUE_SEPARATOR, STAR_MARKER, TYPE, VALUE};
use crate::domain::{Entry, MultiEntry};
use crate::row::{GroupProbe, RowDecoder};
use crate::types::TypeMapper;

/// Splits a type label into the label proper and whether it was starred.
pub fn strip_star(label: &str) -> (&str, bool) {
    match label.strip_prefix(STAR_MARKER) {
        Some(rest) => (rest, true),
        None => (label, false),
    }
}

/// Splits a cell holding several values. Empty pieces are dropped.
pub fn split_multi_value(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(MULTI_VALUE_SEPARATOR)
        .filter(|piece| !piece.is_empty())
}

/// Collects the `<group> N - Value` / `<group> N - Type` slots of a row.
///
/// Slots with an empty value are skipped (their type is ignored, even when
/// starred) and scanning carries on. Starred slots are moved to the head, the
/// most recently scanned one first; everything else keeps scan order.
pub fn extract_multi_entry(
    decoder: &mut RowDecoder<'_>,
    group: &str,
    mapper: &mut TypeMapper,
) -> MultiEntry {
    let mut entries = MultiEntry::new();

    for slot in decoder.group(group, GroupProbe::Field(VALUE)) {
        let value = decoder.take_or_empty(&slot.column(VALUE));
        if value.is_empty() {
            continue;
        }

        let (label, starred) = decoder
            .take(&slot.column(TYPE))
            .map(strip_star)
            .unwrap_or(("", false));
        let kind = mapper.map(label);

        let split = split_multi_value(value).map(|piece| Entry::new(piece, kind.clone()));
        if starred {
            entries.push_front(split);
        } else {
            entries.push_back(split);
        }
    }

    entries
}
