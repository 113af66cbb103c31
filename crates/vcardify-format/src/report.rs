use serde::Serialize;
use std::fmt::Write as _;
use vcardify_core::{AttributeClass, RunDiagnostics};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownLabels {
    pub class: AttributeClass,
    pub labels: Vec<LabelCount>,
}

/// End-of-run summary of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub cards: usize,
    pub skipped: usize,
    pub output: Option<String>,
    pub unknown_labels: Vec<UnknownLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhandled_columns: Option<Vec<String>>,
}

impl ConversionReport {
    pub fn from_diagnostics(diagnostics: RunDiagnostics, output: Option<String>) -> Self {
        let unknown_labels = diagnostics
            .unknown_labels
            .into_iter()
            .filter(|(_, labels)| !labels.is_empty())
            .map(|(class, labels)| {
                let mut labels: Vec<LabelCount> = labels
                    .into_iter()
                    .map(|(label, count)| LabelCount { label, count })
                    .collect();
                labels.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
                UnknownLabels { class, labels }
            })
            .collect();

        Self {
            cards: diagnostics.rows_converted,
            skipped: diagnostics.rows_skipped,
            output,
            unknown_labels,
            unhandled_columns: diagnostics.unhandled_columns,
        }
    }

    pub fn has_findings(&self) -> bool {
        self.skipped > 0
            || !self.unknown_labels.is_empty()
            || self
                .unhandled_columns
                .as_ref()
                .is_some_and(|columns| !columns.is_empty())
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Converted {} contacts, skipped {}",
            self.cards, self.skipped
        );
        for unknown in &self.unknown_labels {
            let _ = writeln!(out, "Unknown {} type labels:", unknown.class);
            for entry in &unknown.labels {
                let _ = writeln!(out, "- {:?}: {}", entry.label, entry.count);
            }
        }
        if let Some(columns) = &self.unhandled_columns {
            if !columns.is_empty() {
                let _ = writeln!(out, "Unhandled columns:");
                for column in columns {
                    let _ = writeln!(out, "- {}", column);
                }
            }
        }
        out
    }
}
