use crate::columns::{
    BIRTHDAY, EMAIL_GROUP, GROUP_MEMBERSHIP, NAME, NICKNAME, NOTES, PHONE_GROUP, WEBSITE_GROUP,
};
use crate::domain::{Contact, MultiEntry};
use crate::error::CoreError;
use crate::extract::{extract_addresses, extract_multi_entry, resolve_name, split_multi_value};
use crate::row::RowDecoder;
use crate::types::{EntryType, TypeMappers};
use serde::Serialize;

/// Extracts a contact from one row.
///
/// Fails only when the `Name` column is missing; every other column is
/// optional.
pub fn build_contact(
    decoder: &mut RowDecoder<'_>,
    mappers: &mut TypeMappers,
) -> Result<Contact, CoreError> {
    let full_name = decoder.require(NAME)?;

    let emails = extract_multi_entry(decoder, EMAIL_GROUP, &mut mappers.email);
    let phones = extract_multi_entry(decoder, PHONE_GROUP, &mut mappers.phone);
    let name = resolve_name(decoder, full_name, &emails, &phones);
    let websites = extract_multi_entry(decoder, WEBSITE_GROUP, &mut mappers.website);
    let addresses = extract_addresses(decoder, &mut mappers.address);

    let birthday = decoder.take_non_empty(BIRTHDAY).map(str::to_string);
    let nickname = decoder.take_non_empty(NICKNAME).map(str::to_string);
    let note = decoder.take_non_empty(NOTES).map(str::to_string);
    let categories = decoder
        .take(GROUP_MEMBERSHIP)
        .map(|value| split_multi_value(value).map(str::to_string).collect())
        .unwrap_or_default();

    Ok(Contact {
        display_name: name.display_name,
        name: name.structured,
        phones,
        emails,
        websites,
        addresses,
        birthday,
        nickname,
        note,
        categories,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Text(String),
    /// Semicolon-separated components (`n`, `adr`).
    Components(Vec<String>),
    /// Comma-separated list (`categories`).
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: &'static str,
    pub value: PropertyValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<EntryType>,
}

impl Property {
    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PropertyValue::Text(value.into()),
            types: None,
        }
    }

    fn with_types(mut self, types: Option<&EntryType>) -> Self {
        self.types = types.filter(|kind| !kind.is_empty()).cloned();
        self
    }
}

/// A contact laid out as card properties, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub properties: Vec<Property>,
}

impl Card {
    /// Lays out a contact. Sections always come out as: fn, n, tel, email,
    /// adr/label, url, categories, bday, nickname, note.
    pub fn from_contact(contact: &Contact) -> Self {
        let mut properties = Vec::new();

        properties.push(Property::text(
            "fn",
            contact.display_name.as_deref().unwrap_or_default(),
        ));
        if let Some(name) = &contact.name {
            properties.push(Property {
                name: "n",
                value: PropertyValue::Components(
                    [
                        &name.family,
                        &name.given,
                        &name.additional,
                        &name.prefix,
                        &name.suffix,
                    ]
                    .into_iter()
                    .cloned()
                    .collect(),
                ),
                types: None,
            });
        }

        push_entries(&mut properties, "tel", &contact.phones);
        push_entries(&mut properties, "email", &contact.emails);

        for address in &contact.addresses {
            if address.has_address() {
                properties.push(
                    Property {
                        name: "adr",
                        value: PropertyValue::Components(
                            address.components().iter().map(|part| part.to_string()).collect(),
                        ),
                        types: None,
                    }
                    .with_types(address.kind.as_ref()),
                );
            }
            if address.has_label() {
                properties.push(
                    Property::text("label", address.formatted.as_str())
                        .with_types(address.kind.as_ref()),
                );
            }
        }

        push_entries(&mut properties, "url", &contact.websites);

        if !contact.categories.is_empty() {
            properties.push(Property {
                name: "categories",
                value: PropertyValue::List(contact.categories.clone()),
                types: None,
            });
        }

        let scalars = [
            ("bday", &contact.birthday),
            ("nickname", &contact.nickname),
            ("note", &contact.note),
        ];
        for (name, value) in scalars {
            if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
                properties.push(Property::text(name, value));
            }
        }

        Self { properties }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.properties.iter().map(|property| property.name).collect()
    }
}

fn push_entries(properties: &mut Vec<Property>, name: &'static str, entries: &MultiEntry) {
    for entry in entries {
        properties.push(Property::text(name, entry.value.as_str()).with_types(entry.kind.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Entry, StructuredName};
    use crate::row::Row;

    fn contact_from(pairs: &[(&str, &str)]) -> Contact {
        let row: Row = pairs.iter().copied().collect();
        let mut mappers = TypeMappers::default();
        let mut decoder = RowDecoder::new(&row);
        build_contact(&mut decoder, &mut mappers).expect("build contact")
    }

    #[test]
    fn name_column_is_required() {
        let row: Row = [("Given Name", "Ada")].into_iter().collect();
        let mut mappers = TypeMappers::default();
        let mut decoder = RowDecoder::new(&row);
        let err = build_contact(&mut decoder, &mut mappers).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredField("Name".to_string()));
    }

    #[test]
    fn scalars_are_kept_only_when_non_empty() {
        let contact = contact_from(&[
            ("Name", "Ada"),
            ("Birthday", "1815-12-10"),
            ("Nickname", ""),
            ("Notes", "first programmer"),
        ]);
        assert_eq!(contact.birthday.as_deref(), Some("1815-12-10"));
        assert_eq!(contact.nickname, None);
        assert_eq!(contact.note.as_deref(), Some("first programmer"));
    }

    #[test]
    fn categories_split_without_star_handling() {
        let contact = contact_from(&[
            ("Name", "Ada"),
            ("Group Membership", "* myContacts ::: Friends"),
        ]);
        assert_eq!(contact.categories, vec!["* myContacts", "Friends"]);
    }

    #[test]
    fn sections_follow_fixed_order_regardless_of_columns() {
        let contact = contact_from(&[
            ("Notes", "n"),
            ("Website 1 - Value", "https://example.com"),
            ("Address 1 - City", "Paris"),
            ("Address 1 - Formatted", "Paris, France"),
            ("E-mail 1 - Value", "a@b.c"),
            ("Phone 1 - Value", "555"),
            ("Group Membership", "Friends"),
            ("Birthday", "2000-01-01"),
            ("Nickname", "Ace"),
            ("Given Name", "Ada"),
            ("Name", ""),
        ]);
        let card = Card::from_contact(&contact);
        assert_eq!(
            card.names(),
            vec![
                "fn",
                "n",
                "tel",
                "email",
                "adr",
                "label",
                "url",
                "categories",
                "bday",
                "nickname",
                "note"
            ]
        );
    }

    #[test]
    fn formatted_only_address_emits_label_only() {
        let contact = contact_from(&[("Name", "Ada"), ("Address 1 - Formatted", "line1")]);
        let card = Card::from_contact(&contact);
        assert_eq!(card.names(), vec!["fn", "label"]);
        assert_eq!(
            card.properties[1].value,
            PropertyValue::Text("line1".to_string())
        );
    }

    #[test]
    fn structured_name_uses_card_component_order() {
        let contact = Contact {
            display_name: Some("Dr. Ada Lovelace".to_string()),
            name: Some(StructuredName {
                prefix: "Dr.".to_string(),
                given: "Ada".to_string(),
                additional: String::new(),
                family: "Lovelace".to_string(),
                suffix: String::new(),
            }),
            ..Contact::default()
        };
        let card = Card::from_contact(&contact);
        assert_eq!(
            card.properties[1].value,
            PropertyValue::Components(vec![
                "Lovelace".to_string(),
                "Ada".to_string(),
                String::new(),
                "Dr.".to_string(),
                String::new(),
            ])
        );
    }

    #[test]
    fn entry_types_become_parameters() {
        let mut phones = MultiEntry::new();
        phones.push_back([
            Entry::new("1", Some(EntryType::tokens(["HOME", "VOICE"]))),
            Entry::new("2", None),
        ]);
        let contact = Contact {
            display_name: Some("Ada".to_string()),
            phones,
            addresses: vec![Address {
                street: "Main St".to_string(),
                kind: Some(EntryType::token("WORK")),
                ..Address::default()
            }],
            ..Contact::default()
        };
        let card = Card::from_contact(&contact);
        assert_eq!(
            card.properties[1].types,
            Some(EntryType::tokens(["HOME", "VOICE"]))
        );
        assert_eq!(card.properties[2].types, None);
        assert_eq!(card.properties[3].name, "adr");
        assert_eq!(card.properties[3].types, Some(EntryType::token("WORK")));
    }

    #[test]
    fn missing_display_name_yields_empty_fn() {
        let card = Card::from_contact(&Contact::default());
        assert_eq!(card.names(), vec!["fn"]);
        assert_eq!(card.properties[0].value, PropertyValue::Text(String::new()));
    }
}
