use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use vcardify_config::ConfigError;
use vcardify_core::CoreError;
use vcardify_format::FormatError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            };
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(format_err) = cause.downcast_ref::<FormatError>() {
            return format_exit_code(format_err);
        }
        if cause.is::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidEncoding(_)
        | ConfigError::InvalidTypeLabel { .. }
        | ConfigError::InvalidTypeTokens { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn format_exit_code(err: &FormatError) -> u8 {
    match err {
        FormatError::Io(_) => EXIT_FAILURE,
        FormatError::Core(_) | FormatError::Csv(_) | FormatError::Encoding(_) => {
            EXIT_INVALID_INPUT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn missing_column_maps_to_invalid_input() {
        let err = Err::<(), _>(CoreError::MissingRequiredField("Name".to_string()))
            .context("convert row 1")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn io_errors_map_to_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Err::<(), _>(FormatError::from(io))
            .context("read contacts file")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }
}
