use std::fs;
use std::path::{Path, PathBuf};

use rollcall_core::domain::phone::{DEFAULT_COUNTRY_CODE, DEFAULT_NATIONAL_DIGITS};
use rollcall_core::{AliasSets, CanonicalField, CoreError, PhoneRules};
use serde::Deserialize;
use thiserror::Error;

/// Settings for one run. Without a config file this is the built-in alias
/// sets and the default phone convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub aliases: AliasSets,
    pub phone: PhoneRules,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid alias for {field}: {alias:?}")]
    InvalidAlias {
        field: CanonicalField,
        alias: String,
    },
    #[error("invalid phone.country_code value: {0:?}")]
    InvalidCountryCode(String),
    #[error("invalid phone.national_digits value: {0}")]
    InvalidNationalDigits(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    aliases: Option<AliasesFile>,
    phone: Option<PhoneFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasesFile {
    full_name: Option<Vec<String>>,
    phone_number: Option<Vec<String>>,
    email: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    country_code: Option<String>,
    national_digits: Option<usize>,
}

/// Loads the config file when one is given. There is no default location.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    match config_path {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            load_at_path(&path)
        }
        None => Ok(AppConfig::default()),
    }
}

fn load_at_path(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(aliases) = parsed.aliases {
        let extra = [
            (CanonicalField::FullName, aliases.full_name),
            (CanonicalField::PhoneNumber, aliases.phone_number),
            (CanonicalField::Email, aliases.email),
        ];
        for (field, values) in extra {
            for alias in values.into_iter().flatten() {
                config
                    .aliases
                    .extend(field, [alias.as_str()])
                    .map_err(|_| ConfigError::InvalidAlias { field, alias })?;
            }
        }
    }

    if let Some(phone) = parsed.phone {
        let country_code = phone
            .country_code
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
        let national_digits = phone.national_digits.unwrap_or(DEFAULT_NATIONAL_DIGITS);
        config.phone =
            PhoneRules::new(&country_code, national_digits).map_err(|err| match err {
                CoreError::InvalidNationalDigits(value) => ConfigError::InvalidNationalDigits(value),
                _ => ConfigError::InvalidCountryCode(country_code.clone()),
            })?;
    }

    Ok(config)
}
