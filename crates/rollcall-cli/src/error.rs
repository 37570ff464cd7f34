use anyhow::Error;
use rollcall_config::ConfigError;
use rollcall_formats::FormatError;
use std::path::Path;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if let Some(path) = missing_input(err) {
        eprintln!(
            "error: the file '{}' was not found; please check the path",
            path.display()
        );
        return;
    }
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

fn missing_input(err: &Error) -> Option<&Path> {
    err.chain().find_map(|cause| match cause.downcast_ref::<FormatError>() {
        Some(FormatError::NotFound(path)) => Some(path.as_path()),
        _ => None,
    })
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(format_err) = cause.downcast_ref::<FormatError>() {
            return format_exit_code(format_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn format_exit_code(err: &FormatError) -> u8 {
    match err {
        FormatError::NotFound(_) => EXIT_NOT_FOUND,
        FormatError::UnsupportedFormat(_)
        | FormatError::Undecodable { .. }
        | FormatError::MissingOutputDir(_) => EXIT_INVALID_INPUT,
        FormatError::EmptyWorkbook(_)
        | FormatError::Io(_)
        | FormatError::Csv(_)
        | FormatError::Spreadsheet(_)
        | FormatError::Core(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidAlias { .. }
        | ConfigError::InvalidCountryCode(_)
        | ConfigError::InvalidNationalDigits(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        exit_status_for, missing_input, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_NOT_FOUND,
    };
    use anyhow::{anyhow, Context as _};
    use rollcall_formats::FormatError;
    use std::path::{Path, PathBuf};

    #[test]
    fn exit_code_walks_context_chain() {
        let err = Err::<(), _>(FormatError::NotFound(PathBuf::from("in.csv")))
            .context("load input")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn exit_code_defaults_to_failure() {
        assert_eq!(exit_status_for(&anyhow!("boom")), EXIT_FAILURE);
    }

    #[test]
    fn unsupported_format_is_invalid_input() {
        let err = anyhow::Error::from(FormatError::UnsupportedFormat(".txt".to_string()));
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn missing_input_is_found_behind_context() {
        let err = Err::<(), _>(FormatError::NotFound(PathBuf::from("in.csv")))
            .context("load input")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_NOT_FOUND);
        assert_eq!(missing_input(&err), Some(Path::new("in.csv")));
        assert_eq!(missing_input(&anyhow!("boom")), None);
    }
}
