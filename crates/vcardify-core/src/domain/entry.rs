use crate::types::EntryType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryType>,
}

impl Entry {
    pub fn new(value: impl Into<String>, kind: Option<EntryType>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// Ordered entries of one attribute class. The first entry is the primary one.
/// Entries are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiEntry {
    entries: Vec<Entry>,
}

impl MultiEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Entry>,
    {
        self.entries.extend(entries);
    }

    /// Inserts `entries` as one block at the head, keeping their order.
    pub fn push_front<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Entry>,
    {
        self.entries.splice(0..0, entries);
    }

    pub fn primary(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn primary_value(&self) -> Option<&str> {
        self.primary().map(|entry| entry.value.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MultiEntry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, MultiEntry};

    fn values(entries: &MultiEntry) -> Vec<&str> {
        entries.iter().map(|entry| entry.value.as_str()).collect()
    }

    #[test]
    fn primary_of_empty_is_none() {
        assert!(MultiEntry::new().primary().is_none());
    }

    #[test]
    fn push_front_keeps_block_order() {
        let mut entries = MultiEntry::new();
        entries.push_back([Entry::new("c", None)]);
        entries.push_front([Entry::new("a", None), Entry::new("b", None)]);
        assert_eq!(values(&entries), vec!["a", "b", "c"]);
        assert_eq!(entries.primary_value(), Some("a"));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut entries = MultiEntry::new();
        entries.push_back([Entry::new("x", None), Entry::new("x", None)]);
        assert_eq!(entries.len(), 2);
    }
}
