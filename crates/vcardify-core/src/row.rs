use crate::error::CoreError;
use std::collections::{BTreeSet, HashMap};
use std::iter::FusedIterator;

/// One contact row: column name to cell value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<String>,
    values: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        if self.values.insert(column.clone(), value.into()).is_none() {
            self.columns.push(column);
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.values.keys().any(|column| column.starts_with(prefix))
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        let value = self.values.remove(column)?;
        self.columns.retain(|existing| existing != column);
        Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().filter_map(|column| {
            self.values
                .get(column)
                .map(|value| (column.as_str(), value.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// How a repeating group decides whether index `N` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupProbe {
    /// The slot exists when `"<Group> N - <field>"` is a column.
    Field(&'static str),
    /// The slot exists when any column starts with `"<Group> N - "`.
    AnyField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSlot {
    pub index: usize,
    prefix: String,
}

impl GroupSlot {
    fn new(group: &str, index: usize) -> Self {
        Self {
            index,
            prefix: format!("{group} {index} - "),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn column(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }
}

/// Lazily walks indices 1, 2, 3, ... of a repeating group and stops at the
/// first index that is absent from the row. Empty cells do not stop the scan.
#[derive(Debug, Clone)]
pub struct GroupSlots<'r> {
    row: &'r Row,
    group: String,
    probe: GroupProbe,
    next_index: usize,
    done: bool,
}

impl Iterator for GroupSlots<'_> {
    type Item = GroupSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let slot = GroupSlot::new(&self.group, self.next_index);
        let present = match self.probe {
            GroupProbe::Field(field) => self.row.contains(&slot.column(field)),
            GroupProbe::AnyField => self.row.has_prefix(slot.prefix()),
        };
        if !present {
            self.done = true;
            return None;
        }

        self.next_index += 1;
        Some(slot)
    }
}

impl FusedIterator for GroupSlots<'_> {}

/// Read access to a row for the extractors.
///
/// A tracking decoder keeps a private copy of the row and drops every column
/// an extractor reads, so whatever is left afterwards was never handled.
#[derive(Debug)]
pub struct RowDecoder<'r> {
    row: &'r Row,
    remaining: Option<Row>,
}

impl<'r> RowDecoder<'r> {
    pub fn new(row: &'r Row) -> Self {
        Self {
            row,
            remaining: None,
        }
    }

    pub fn tracking(row: &'r Row) -> Self {
        Self {
            row,
            remaining: Some(row.clone()),
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn group(&self, group: &str, probe: GroupProbe) -> GroupSlots<'r> {
        GroupSlots {
            row: self.row,
            group: group.to_string(),
            probe,
            next_index: 1,
            done: false,
        }
    }

    pub fn take(&mut self, column: &str) -> Option<&'r str> {
        if let Some(remaining) = self.remaining.as_mut() {
            remaining.remove(column);
        }
        self.row.get(column)
    }

    pub fn take_or_empty(&mut self, column: &str) -> &'r str {
        self.take(column).unwrap_or("")
    }

    pub fn take_non_empty(&mut self, column: &str) -> Option<&'r str> {
        self.take(column).filter(|value| !value.is_empty())
    }

    pub fn require(&mut self, column: &str) -> Result<&'r str, CoreError> {
        self.take(column)
            .ok_or_else(|| CoreError::MissingRequiredField(column.to_string()))
    }

    /// Columns that still hold a non-empty value, in header order. Always
    /// empty for a non-tracking decoder.
    pub fn unhandled(&self) -> Vec<String> {
        match &self.remaining {
            Some(remaining) => remaining
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(column, _)| column.to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Run-wide set of columns that carried data but were never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnhandledColumns {
    columns: BTreeSet<String>,
}

impl UnhandledColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<I>(&mut self, columns: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.columns.extend(columns);
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.columns.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn group_scan_stops_at_first_absent_index() {
        let row = row(&[
            ("Phone 1 - Value", "1"),
            ("Phone 2 - Value", ""),
            ("Phone 4 - Value", "4"),
        ]);
        let decoder = RowDecoder::new(&row);
        let indices: Vec<usize> = decoder
            .group("Phone", GroupProbe::Field("Value"))
            .map(|slot| slot.index)
            .collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn group_scan_requires_the_probe_field() {
        let row = row(&[("Phone 1 - Type", "Home")]);
        let decoder = RowDecoder::new(&row);
        assert_eq!(
            decoder.group("Phone", GroupProbe::Field("Value")).count(),
            0
        );
        assert_eq!(decoder.group("Phone", GroupProbe::AnyField).count(), 1);
    }

    #[test]
    fn any_field_probe_does_not_match_longer_indices() {
        let row = row(&[("Address 10 - City", "Berlin")]);
        let decoder = RowDecoder::new(&row);
        assert_eq!(decoder.group("Address", GroupProbe::AnyField).count(), 0);
    }

    #[test]
    fn tracking_decoder_reports_unread_non_empty_columns() {
        let row = row(&[
            ("Name", "Ada"),
            ("Occupation", "Engineer"),
            ("Location", ""),
        ]);
        let mut decoder = RowDecoder::tracking(&row);
        assert_eq!(decoder.take("Name"), Some("Ada"));
        assert_eq!(decoder.unhandled(), vec!["Occupation".to_string()]);
        assert_eq!(row.len(), 3, "caller row is untouched");
    }

    #[test]
    fn plain_decoder_tracks_nothing() {
        let row = row(&[("Occupation", "Engineer")]);
        let decoder = RowDecoder::new(&row);
        assert!(!decoder.is_tracking());
        assert!(decoder.unhandled().is_empty());
    }

    #[test]
    fn require_reports_missing_column() {
        let row = row(&[("Given Name", "Ada")]);
        let mut decoder = RowDecoder::new(&row);
        let err = decoder.require("Name").unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredField("Name".to_string()));
    }

    #[test]
    fn row_keeps_header_order() {
        let row = row(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let columns: Vec<&str> = row.iter().map(|(column, _)| column).collect();
        assert_eq!(columns, vec!["b", "a", "c"]);
    }
}
