use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AttributeClass {
    Phone,
    Email,
    Address,
    Website,
}

impl AttributeClass {
    pub const ALL: [AttributeClass; 4] = [
        AttributeClass::Phone,
        AttributeClass::Email,
        AttributeClass::Address,
        AttributeClass::Website,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeClass::Phone => "phone",
            AttributeClass::Email => "email",
            AttributeClass::Address => "address",
            AttributeClass::Website => "website",
        }
    }
}

impl fmt::Display for AttributeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical type of an entry: a single token or a set of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryType {
    Token(String),
    Tokens(Vec<String>),
}

impl EntryType {
    pub fn token(token: impl Into<String>) -> Self {
        EntryType::Token(token.into())
    }

    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.len() == 1 {
            return EntryType::Token(tokens.remove(0));
        }
        EntryType::Tokens(tokens)
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            EntryType::Token(token) => std::slice::from_ref(token),
            EntryType::Tokens(tokens) => tokens,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().iter().all(|token| token.is_empty())
    }
}

const PHONE_TYPES: &[(&str, &[&str])] = &[
    ("Home", &["HOME", "VOICE"]),
    ("Work", &["WORK", "VOICE"]),
    ("Mobile", &["CELL"]),
    ("Main", &["VOICE"]),
    ("Pager", &["PAGER"]),
    ("Home Fax", &["HOME", "FAX"]),
    ("Work Fax", &["WORK", "FAX"]),
    ("Other", &["OTHER"]),
    ("Persönlich", &["VOICE"]),
    ("Persönlich / Mobile", &["HOME", "CELL"]),
    ("Persönlich / Fax", &["HOME", "FAX"]),
    ("Büro", &["WORK"]),
];

const EMAIL_TYPES: &[(&str, &[&str])] = &[
    ("Home", &["HOME"]),
    ("Work", &["WORK"]),
    ("Other", &["OTHER"]),
    ("Büro", &["WORK"]),
];

const ADDRESS_TYPES: &[(&str, &[&str])] = &[("Home", &["HOME"]), ("Work", &["WORK"])];

fn builtin_table(class: AttributeClass) -> &'static [(&'static str, &'static [&'static str])] {
    match class {
        AttributeClass::Phone => PHONE_TYPES,
        AttributeClass::Email | AttributeClass::Website => EMAIL_TYPES,
        AttributeClass::Address => ADDRESS_TYPES,
    }
}

/// Maps exporter type labels of one attribute class to canonical tokens.
///
/// Labels without a mapping pass through unchanged and are counted, so the
/// run can report which labels the tables are missing.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    class: AttributeClass,
    table: HashMap<String, EntryType>,
    unknown: BTreeMap<String, usize>,
}

impl TypeMapper {
    pub fn empty(class: AttributeClass) -> Self {
        Self {
            class,
            table: HashMap::new(),
            unknown: BTreeMap::new(),
        }
    }

    pub fn builtin(class: AttributeClass) -> Self {
        let mut mapper = Self::empty(class);
        for (label, tokens) in builtin_table(class) {
            mapper.insert(*label, EntryType::tokens(tokens.iter().copied()));
        }
        mapper
    }

    pub fn class(&self) -> AttributeClass {
        self.class
    }

    /// Adds a mapping, replacing any existing one for the same label.
    pub fn insert(&mut self, label: impl Into<String>, kind: EntryType) {
        self.table.insert(label.into(), kind);
    }

    pub fn map(&mut self, label: &str) -> Option<EntryType> {
        if label.is_empty() {
            return None;
        }
        if let Some(kind) = self.table.get(label) {
            return Some(kind.clone());
        }
        *self.unknown.entry(label.to_string()).or_insert(0) += 1;
        Some(EntryType::token(label))
    }

    pub fn unknown_count(&self, label: &str) -> usize {
        self.unknown.get(label).copied().unwrap_or(0)
    }

    pub fn unknown_labels(&self) -> &BTreeMap<String, usize> {
        &self.unknown
    }
}

/// One mapper per attribute class, shared by every row of a run.
#[derive(Debug, Clone)]
pub struct TypeMappers {
    pub phone: TypeMapper,
    pub email: TypeMapper,
    pub address: TypeMapper,
    pub website: TypeMapper,
}

impl Default for TypeMappers {
    fn default() -> Self {
        Self {
            phone: TypeMapper::builtin(AttributeClass::Phone),
            email: TypeMapper::builtin(AttributeClass::Email),
            address: TypeMapper::builtin(AttributeClass::Address),
            website: TypeMapper::builtin(AttributeClass::Website),
        }
    }
}

impl TypeMappers {
    pub fn get(&self, class: AttributeClass) -> &TypeMapper {
        match class {
            AttributeClass::Phone => &self.phone,
            AttributeClass::Email => &self.email,
            AttributeClass::Address => &self.address,
            AttributeClass::Website => &self.website,
        }
    }

    pub fn get_mut(&mut self, class: AttributeClass) -> &mut TypeMapper {
        match class {
            AttributeClass::Phone => &mut self.phone,
            AttributeClass::Email => &mut self.email,
            AttributeClass::Address => &mut self.address,
            AttributeClass::Website => &mut self.website,
        }
    }

    pub fn unknown_labels(&self) -> BTreeMap<AttributeClass, BTreeMap<String, usize>> {
        AttributeClass::ALL
            .into_iter()
            .map(|class| (class, self.get(class).unknown_labels().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_labels_map_to_token_sets() {
        let mut mapper = TypeMapper::builtin(AttributeClass::Phone);
        assert_eq!(
            mapper.map("Home Fax"),
            Some(EntryType::tokens(["HOME", "FAX"]))
        );
        assert_eq!(mapper.map("Mobile"), Some(EntryType::token("CELL")));
        assert_eq!(
            mapper.map("Persönlich / Mobile"),
            Some(EntryType::tokens(["HOME", "CELL"]))
        );
        assert!(mapper.unknown_labels().is_empty());
    }

    #[test]
    fn unknown_label_passes_through_and_counts() {
        let mut mapper = TypeMapper::builtin(AttributeClass::Email);
        assert_eq!(mapper.unknown_count("alias"), 0);
        assert_eq!(mapper.map("alias"), Some(EntryType::token("alias")));
        assert_eq!(mapper.map("alias"), Some(EntryType::token("alias")));
        assert_eq!(mapper.unknown_count("alias"), 2);
    }

    #[test]
    fn empty_label_has_no_type_and_is_not_counted() {
        let mut mapper = TypeMapper::builtin(AttributeClass::Email);
        assert_eq!(mapper.map(""), None);
        assert!(mapper.unknown_labels().is_empty());
    }

    #[test]
    fn counters_are_per_class() {
        let mut mappers = TypeMappers::default();
        mappers.phone.map("Notruf");
        assert_eq!(mappers.phone.unknown_count("Notruf"), 1);
        assert_eq!(mappers.email.unknown_count("Notruf"), 0);
    }

    #[test]
    fn address_table_only_knows_home_and_work() {
        let mut mapper = TypeMapper::builtin(AttributeClass::Address);
        assert_eq!(mapper.map("Work"), Some(EntryType::token("WORK")));
        assert_eq!(mapper.map("Other"), Some(EntryType::token("Other")));
        assert_eq!(mapper.unknown_count("Other"), 1);
    }

    #[test]
    fn inserted_label_overrides_builtin() {
        let mut mapper = TypeMapper::builtin(AttributeClass::Phone);
        mapper.insert("Main", EntryType::tokens(["WORK", "VOICE"]));
        assert_eq!(
            mapper.map("Main"),
            Some(EntryType::tokens(["WORK", "VOICE"]))
        );
    }
}
