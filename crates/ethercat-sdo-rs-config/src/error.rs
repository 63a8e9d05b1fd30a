// crates/ethercat-sdo-rs-config/src/error.rs

use ethercat_sdo_rs::ListLoadError;
use quick_xml::errors::serialize::DeError;
use std::fmt;
use std::io;

/// Errors that can occur while loading an SDO configuration document.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),

    /// The file extension does not name a supported format.
    UnsupportedFormat { extension: String },

    /// An error from the underlying `serde_json` deserializer.
    JsonParsing(serde_json::Error),

    /// An error from the underlying `toml` deserializer.
    TomlParsing(toml::de::Error),

    /// An error from the underlying `serde_yaml` deserializer.
    YamlParsing(serde_yaml::Error),

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// A document was well-formed, but one of its SDO entries was not.
    Entry(ListLoadError),
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonParsing(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParsing(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::YamlParsing(e)
    }
}

impl From<DeError> for ConfigError {
    fn from(e: DeError) -> Self {
        ConfigError::XmlParsing(e)
    }
}

impl From<ListLoadError> for ConfigError {
    fn from(e: ListLoadError) -> Self {
        ConfigError::Entry(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::UnsupportedFormat { extension } => {
                write!(f, "Unsupported configuration format: '{}'", extension)
            }
            ConfigError::JsonParsing(e) => write!(f, "JSON parsing error: {}", e),
            ConfigError::TomlParsing(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::YamlParsing(e) => write!(f, "YAML parsing error: {}", e),
            ConfigError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ConfigError::Entry(e) => write!(f, "Invalid SDO entry: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::JsonParsing(e) => Some(e),
            ConfigError::TomlParsing(e) => Some(e),
            ConfigError::YamlParsing(e) => Some(e),
            ConfigError::XmlParsing(e) => Some(e),
            ConfigError::Entry(e) => Some(e),
            ConfigError::UnsupportedFormat { .. } => None,
        }
    }
}
