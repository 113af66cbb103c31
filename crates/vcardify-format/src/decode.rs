use crate::error::{FormatError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    pub had_bom: bool,
}

/// Decodes raw export bytes. A byte order mark always wins; otherwise the
/// `fallback` label is used, defaulting to UTF-8. Malformed input is an error.
pub fn decode_bytes(bytes: &[u8], fallback: Option<&str>) -> Result<DecodedText> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, bom_len),
        None => (resolve_label(fallback)?, 0),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or_else(|| FormatError::Encoding(format!("input is not valid {}", encoding.name())))?
        .into_owned();

    debug!(
        encoding = encoding.name(),
        bom = bom_len > 0,
        "decoded input"
    );
    Ok(DecodedText {
        text,
        encoding,
        had_bom: bom_len > 0,
    })
}

pub fn read_file(path: &Path, fallback: Option<&str>) -> Result<DecodedText> {
    let bytes = fs::read(path)?;
    decode_bytes(&bytes, fallback)
}

fn resolve_label(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| FormatError::Encoding(format!("unknown encoding label: {label}"))),
        None => Ok(UTF_8),
    }
}
