use crate::card::build_contact;
use crate::domain::Contact;
use crate::error::CoreError;
use crate::row::{Row, RowDecoder, UnhandledColumns};
use crate::types::{AttributeClass, TypeMappers};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Collect columns that carried data but were never read.
    pub track_unhandled: bool,
    /// Log and skip rows that fail instead of aborting the run.
    pub skip_invalid_rows: bool,
}

/// Converts rows one at a time and owns the run-wide accumulators.
#[derive(Debug)]
pub struct Converter {
    mappers: TypeMappers,
    options: ConvertOptions,
    unhandled: UnhandledColumns,
    rows_seen: usize,
    rows_converted: usize,
    rows_skipped: usize,
}

impl Converter {
    pub fn new(mappers: TypeMappers, options: ConvertOptions) -> Self {
        Self {
            mappers,
            options,
            unhandled: UnhandledColumns::new(),
            rows_seen: 0,
            rows_converted: 0,
            rows_skipped: 0,
        }
    }

    /// Returns `Ok(None)` only for a skipped row when `skip_invalid_rows` is
    /// set.
    pub fn convert_row(&mut self, row: &Row) -> Result<Option<Contact>, CoreError> {
        self.rows_seen += 1;
        let mut decoder = if self.options.track_unhandled {
            RowDecoder::tracking(row)
        } else {
            RowDecoder::new(row)
        };

        match build_contact(&mut decoder, &mut self.mappers) {
            Ok(contact) => {
                self.unhandled.record(decoder.unhandled());
                if contact.display_name.is_none() {
                    warn!(row = self.rows_seen, "row has no name, email or phone");
                }
                self.rows_converted += 1;
                Ok(Some(contact))
            }
            Err(err) if self.options.skip_invalid_rows => {
                warn!(row = self.rows_seen, error = %err, "skipping row");
                self.rows_skipped += 1;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn finish(self) -> RunDiagnostics {
        debug!(
            rows = self.rows_seen,
            converted = self.rows_converted,
            skipped = self.rows_skipped,
            "conversion finished"
        );
        RunDiagnostics {
            rows_converted: self.rows_converted,
            rows_skipped: self.rows_skipped,
            unknown_labels: self.mappers.unknown_labels(),
            unhandled_columns: self
                .options
                .track_unhandled
                .then(|| self.unhandled.into_sorted_vec()),
        }
    }
}

/// What a run learned about its input, read once after the last row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunDiagnostics {
    pub rows_converted: usize,
    pub rows_skipped: usize,
    pub unknown_labels: BTreeMap<AttributeClass, BTreeMap<String, usize>>,
    /// `None` when unhandled columns were not tracked.
    pub unhandled_columns: Option<Vec<String>>,
}
