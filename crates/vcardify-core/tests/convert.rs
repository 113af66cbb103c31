use vcardify_core::{
    Card, ConvertOptions, Converter, Entry, EntryType, PropertyValue, Row, TypeMappers,
};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().copied().collect()
}

fn convert(pairs: &[(&str, &str)]) -> vcardify_core::Contact {
    let mut converter = Converter::new(TypeMappers::default(), ConvertOptions::default());
    converter
        .convert_row(&row(pairs))
        .expect("convert row")
        .expect("contact")
}

#[test]
fn given_and_family_name_build_display_name() {
    let contact = convert(&[
        ("Name", ""),
        ("Given Name", "Jane"),
        ("Family Name", "Doe"),
        ("E-mail 1 - Value", "jane@doe.com"),
    ]);

    assert_eq!(contact.display_name.as_deref(), Some("Jane Doe"));
    let name = contact.name.expect("structured name");
    assert_eq!(name.given, "Jane");
    assert_eq!(name.family, "Doe");
    assert_eq!(contact.emails.entries(), &[Entry::new("jane@doe.com", None)]);
}

#[test]
fn email_stands_in_for_missing_name() {
    let contact = convert(&[
        ("Name", ""),
        ("Given Name", ""),
        ("Family Name", ""),
        ("E-mail 1 - Value", "x@y.com"),
    ]);

    assert_eq!(contact.display_name.as_deref(), Some("x@y.com"));
    assert!(contact.name.is_none());
}

#[test]
fn google_style_row_becomes_a_full_card() {
    let contact = convert(&[
        ("Name", "Ada Lovelace"),
        ("Given Name", "Ada"),
        ("Family Name", "Lovelace"),
        ("Group Membership", "* myContacts ::: Mathematicians"),
        ("E-mail 1 - Type", "Home"),
        ("E-mail 1 - Value", "ada@home.example"),
        ("E-mail 2 - Type", "* Work"),
        ("E-mail 2 - Value", "ada@work.example ::: countess@work.example"),
        ("Phone 1 - Type", "Mobile"),
        ("Phone 1 - Value", "+44 20 0000"),
        ("Phone 2 - Type", "Notruf"),
        ("Phone 2 - Value", "112"),
        ("Address 1 - Type", "Home"),
        ("Address 1 - Formatted", "12 St James's Square\nLondon"),
        ("Address 1 - Street", "12 St James's Square"),
        ("Address 1 - City", "London"),
        ("Website 1 - Type", "Other"),
        ("Website 1 - Value", "https://example.org/ada"),
    ]);

    let emails: Vec<&str> = contact.emails.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(
        emails,
        vec!["ada@work.example", "countess@work.example", "ada@home.example"]
    );
    assert_eq!(contact.phones.len(), 2);
    assert_eq!(
        contact.phones.entries()[1].kind,
        Some(EntryType::token("Notruf"))
    );

    let card = Card::from_contact(&contact);
    assert_eq!(
        card.names(),
        vec![
            "fn",
            "n",
            "tel",
            "tel",
            "email",
            "email",
            "email",
            "adr",
            "label",
            "url",
            "categories"
        ]
    );
    let url = card
        .iter()
        .find(|property| property.name == "url")
        .expect("url");
    assert_eq!(
        url.value,
        PropertyValue::Text("https://example.org/ada".to_string())
    );
    assert_eq!(url.types, Some(EntryType::token("OTHER")));

    let categories = card
        .iter()
        .find(|property| property.name == "categories")
        .expect("categories");
    assert_eq!(
        categories.value,
        PropertyValue::List(vec!["* myContacts".to_string(), "Mathematicians".to_string()])
    );
}
