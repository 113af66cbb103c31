use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use vcardify_config::AppConfig;

pub mod completions;
pub mod convert;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
