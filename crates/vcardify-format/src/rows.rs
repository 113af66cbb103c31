use crate::error::Result;
use ::csv::ReaderBuilder;
use tracing::{debug, warn};
use vcardify_core::Row;

/// Parses comma separated text with a header row into rows.
///
/// Records may be shorter than the header; the missing trailing columns are
/// simply absent from that row. Cells past the last header have no column
/// name and are dropped with a warning.
pub fn read_rows(text: &str) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            warn!(
                row = index + 1,
                dropped = record.len() - headers.len(),
                "record has more cells than the header"
            );
        }
        rows.push(headers.iter().zip(record.iter()).collect::<Row>());
    }

    debug!(columns = headers.len(), rows = rows.len(), "read csv rows");
    Ok(rows)
}
