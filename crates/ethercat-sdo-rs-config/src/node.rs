// crates/ethercat-sdo-rs-config/src/node.rs

//! `ConfigSource` adapters for JSON, TOML and XML nodes.

use crate::model::XmlSdo;
use ethercat_sdo_rs::entry::{KEY_INDEX, KEY_SUB_INDEX, KEY_TYPE, KEY_VALUE};
use ethercat_sdo_rs::{CoercionError, ConfigSource, Scalar};
use std::collections::BTreeMap;

const EXPECTED_SCALAR: &str = "an integer or string";

fn missing(key: &str) -> CoercionError {
    CoercionError::MissingKey {
        key: key.to_string(),
    }
}

fn mismatch(key: &str) -> CoercionError {
    CoercionError::TypeMismatch {
        key: key.to_string(),
        expected: EXPECTED_SCALAR,
    }
}

/// A JSON object describing one SDO entry.
///
/// A key holding `null` counts as present and fails coercion.
#[derive(Debug, Clone, Copy)]
pub struct JsonNode<'a>(pub &'a serde_json::Value);

impl ConfigSource for JsonNode<'_> {
    fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError> {
        match self.0.get(key).ok_or_else(|| missing(key))? {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Scalar::Signed)
                .or_else(|| n.as_u64().map(Scalar::Unsigned))
                .ok_or_else(|| mismatch(key)),
            serde_json::Value::String(s) => Ok(Scalar::Text(s.clone())),
            _ => Err(mismatch(key)),
        }
    }
}

/// A TOML table describing one SDO entry.
#[derive(Debug, Clone, Copy)]
pub struct TomlNode<'a>(pub &'a toml::Value);

impl ConfigSource for TomlNode<'_> {
    fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError> {
        match self.0.get(key).ok_or_else(|| missing(key))? {
            toml::Value::Integer(i) => Ok(Scalar::Signed(*i)),
            toml::Value::String(s) => Ok(Scalar::Text(s.clone())),
            _ => Err(mismatch(key)),
        }
    }
}

/// A YAML mapping describing one SDO entry, as found in existing slave
/// configuration files.
#[derive(Debug, Clone, Copy)]
pub struct YamlNode<'a>(pub &'a serde_yaml::Value);

impl ConfigSource for YamlNode<'_> {
    fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError> {
        match self.0.get(key).ok_or_else(|| missing(key))? {
            serde_yaml::Value::Number(n) => n
                .as_i64()
                .map(Scalar::Signed)
                .or_else(|| n.as_u64().map(Scalar::Unsigned))
                .ok_or_else(|| mismatch(key)),
            serde_yaml::Value::String(s) => Ok(Scalar::Text(s.clone())),
            _ => Err(mismatch(key)),
        }
    }
}

/// The attributes of one `<sdo/>` element. All values are text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    attributes: BTreeMap<String, String>,
}

impl XmlNode {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub(crate) fn from_model(sdo: XmlSdo) -> Self {
        let attributes = [
            (KEY_INDEX, sdo.index),
            (KEY_SUB_INDEX, sdo.sub_index),
            (KEY_TYPE, sdo.data_type),
            (KEY_VALUE, sdo.value),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect();
        Self { attributes }
    }
}

impl ConfigSource for XmlNode {
    fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    fn scalar(&self, key: &str) -> Result<Scalar, CoercionError> {
        self.attribute(key)
            .map(|v| Scalar::Text(v.to_string()))
            .ok_or_else(|| missing(key))
    }
}
