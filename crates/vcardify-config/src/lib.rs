use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vcardify_core::{AttributeClass, EntryType, TypeMappers};

const APP_DIR: &str = "vcardify";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Encoding label used when the input has no byte order mark.
    pub encoding: Option<String>,
    pub report_unhandled: bool,
    pub skip_invalid_rows: bool,
    pub types: TypeOverrides,
}

/// Extra type labels per attribute class, applied on top of the built-in
/// tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverrides {
    labels: BTreeMap<AttributeClass, Vec<(String, EntryType)>>,
}

impl TypeOverrides {
    pub fn get(&self, class: AttributeClass) -> &[(String, EntryType)] {
        self.labels.get(&class).map(Vec::as_slice).unwrap_or_default()
    }

    fn insert(&mut self, class: AttributeClass, label: String, kind: EntryType) {
        self.labels.entry(class).or_default().push((label, kind));
    }
}

impl AppConfig {
    pub fn type_mappers(&self) -> TypeMappers {
        let mut mappers = TypeMappers::default();
        for class in AttributeClass::ALL {
            let mapper = mappers.get_mut(class);
            for (label, kind) in self.types.get(class) {
                mapper.insert(label.clone(), kind.clone());
            }
        }
        mappers
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid encoding value: {0:?}")]
    InvalidEncoding(String),
    #[error("invalid {class} type label: {label:?}")]
    InvalidTypeLabel {
        class: AttributeClass,
        label: String,
    },
    #[error("invalid {class} type tokens for label {label:?}")]
    InvalidTypeTokens {
        class: AttributeClass,
        label: String,
    },
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
    encoding: Option<String>,
    report_unhandled: Option<bool>,
    skip_invalid_rows: Option<bool>,
    types: Option<TypesFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypesFile {
    phone: Option<BTreeMap<String, Vec<String>>>,
    email: Option<BTreeMap<String, Vec<String>>>,
    address: Option<BTreeMap<String, Vec<String>>>,
    website: Option<BTreeMap<String, Vec<String>>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(encoding) = parsed.encoding {
        let trimmed = encoding.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEncoding(encoding));
        }
        config.encoding = Some(trimmed.to_string());
    }

    if let Some(report_unhandled) = parsed.report_unhandled {
        config.report_unhandled = report_unhandled;
    }
    if let Some(skip_invalid_rows) = parsed.skip_invalid_rows {
        config.skip_invalid_rows = skip_invalid_rows;
    }

    if let Some(types) = parsed.types {
        let tables = [
            (AttributeClass::Phone, types.phone),
            (AttributeClass::Email, types.email),
            (AttributeClass::Address, types.address),
            (AttributeClass::Website, types.website),
        ];
        for (class, table) in tables {
            for (label, tokens) in table.unwrap_or_default() {
                let kind = parse_type_entry(class, &label, tokens)?;
                config.types.insert(class, label, kind);
            }
        }
    }

    Ok(config)
}

fn parse_type_entry(class: AttributeClass, label: &str, tokens: Vec<String>) -> Result<EntryType> {
    if label.is_empty() {
        return Err(ConfigError::InvalidTypeLabel {
            class,
            label: label.to_string(),
        });
    }

    let mut normalized = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        if token.is_empty() || token.contains(|ch: char| matches!(ch, ',' | ';' | ':' | '"')) {
            return Err(ConfigError::InvalidTypeTokens {
                class,
                label: label.to_string(),
            });
        }
        normalized.push(token.to_ascii_uppercase());
    }
    if normalized.is_empty() {
        return Err(ConfigError::InvalidTypeTokens {
            class,
            label: label.to_string(),
        });
    }

    Ok(EntryType::tokens(normalized))
}
