use vcardify_core::{Card, EntryType, Property, PropertyValue};

const FOLD_WIDTH: usize = 75;

/// Serializes cards as vCard 3.0, one after another, with CRLF line endings.
pub fn export_vcards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut out = String::new();
    for card in cards {
        write_card(card, &mut out);
    }
    out
}

pub fn write_card(card: &Card, out: &mut String) {
    push_line(out, "BEGIN:VCARD");
    push_line(out, "VERSION:3.0");
    for property in card.iter() {
        push_line(out, &render_property(property));
    }
    push_line(out, "END:VCARD");
}

fn render_property(property: &Property) -> String {
    let mut line = property.name.to_ascii_uppercase();
    if let Some(types) = &property.types {
        line.push_str(";TYPE=");
        line.push_str(&render_types(types));
    }
    line.push(':');
    match &property.value {
        PropertyValue::Text(value) => line.push_str(&escape_vcard_value(value)),
        PropertyValue::Components(parts) => line.push_str(&join_escaped(parts, ";")),
        PropertyValue::List(items) => line.push_str(&join_escaped(items, ",")),
    }
    line
}

fn render_types(types: &EntryType) -> String {
    types
        .as_slice()
        .iter()
        .filter(|token| !token.is_empty())
        .map(|token| quote_param_value(token))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_param_value(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| *ch != '"')
        .map(|ch| if ch == '\r' || ch == '\n' { ' ' } else { ch })
        .collect();
    if cleaned.contains(&[':', ';', ','][..]) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

fn join_escaped(values: &[String], separator: &str) -> String {
    values
        .iter()
        .map(|value| escape_vcard_value(value))
        .collect::<Vec<_>>()
        .join(separator)
}

fn escape_vcard_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => {
                if matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            _ => out.push(ch),
        }
    }
    out
}

/// Writes one content line, folding it so no physical line exceeds 75
/// octets. Continuation lines start with a single space.
fn push_line(out: &mut String, line: &str) {
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > FOLD_WIDTH {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out.push_str("\r\n");
}
