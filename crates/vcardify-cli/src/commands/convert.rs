use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vcardify_core::{Card, ConvertOptions, Converter};
use vcardify_format::report::ConversionReport;
use vcardify_format::{decode, rows, vcf};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Contact export in CSV format
    pub file: PathBuf,
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Encoding used when the file has no byte order mark (default: utf-8)
    #[arg(long)]
    pub encoding: Option<String>,
    /// List columns that held data but were not converted
    #[arg(long)]
    pub report_unhandled: bool,
    /// Skip rows that cannot be converted instead of failing
    #[arg(long)]
    pub skip_invalid_rows: bool,
}

pub fn convert(ctx: &Context<'_>, args: ConvertArgs) -> Result<()> {
    if ctx.json && args.out.is_none() {
        return Err(invalid_input("--json requires --out for convert"));
    }

    let encoding = args.encoding.as_deref().or(ctx.config.encoding.as_deref());
    let decoded = decode::read_file(&args.file, encoding)
        .with_context(|| format!("read contacts file {}", args.file.display()))?;
    let rows = rows::read_rows(&decoded.text)
        .with_context(|| format!("parse contacts file {}", args.file.display()))?;
    debug!(
        encoding = decoded.encoding.name(),
        bom = decoded.had_bom,
        rows = rows.len(),
        "parsed contacts file"
    );

    let options = ConvertOptions {
        track_unhandled: args.report_unhandled || ctx.config.report_unhandled,
        skip_invalid_rows: args.skip_invalid_rows || ctx.config.skip_invalid_rows,
    };
    let mut converter = Converter::new(ctx.config.type_mappers(), options);

    let mut data = String::new();
    for (index, row) in rows.iter().enumerate() {
        let contact = converter
            .convert_row(row)
            .with_context(|| format!("convert row {}", index + 1))?;
        if let Some(contact) = contact {
            vcf::write_card(&Card::from_contact(&contact), &mut data);
        }
    }

    let report = ConversionReport::from_diagnostics(
        converter.finish(),
        args.out.as_ref().map(|path| path.display().to_string()),
    );

    match args.out.as_deref() {
        Some(path) => {
            write_output(path, &data)?;
            if ctx.json {
                return print_json(&report);
            }
            println!("Converted {} contacts to {}", report.cards, path.display());
        }
        None => print!("{}", data),
    }

    if report.has_findings() {
        eprint!("{}", report.render_text());
    }
    Ok(())
}

fn write_output(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    fs::write(path, data).with_context(|| format!("write vcard file {}", path.display()))
}
