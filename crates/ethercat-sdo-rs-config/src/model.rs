// crates/ethercat-sdo-rs-config/src/model.rs

//! Internal `serde` envelopes for the supported document formats.
//! Each document carries a list named `sdo`, one element per entry.

use serde::Deserialize;

/// `{"sdo": [ {...}, ... ]}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JsonDocument {
    #[serde(default)]
    pub sdo: Vec<serde_json::Value>,
}

/// `[[sdo]]` array of tables.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TomlDocument {
    #[serde(default)]
    pub sdo: Vec<toml::Value>,
}

/// `sdo:` sequence of mappings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct YamlDocument {
    #[serde(default)]
    pub sdo: Vec<serde_yaml::Value>,
}

/// Any root element holding `<sdo .../>` children. Other children are
/// ignored, even between two `<sdo>` elements.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct XmlDocument {
    #[serde(rename = "sdo", default)]
    pub sdo: Vec<XmlSdo>,
}

/// `<sdo index="0x1c12" sub_index="1" type="uint16" value="0x1600"/>`
///
/// Every attribute is optional here; presence is checked by the entry loader.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct XmlSdo {
    #[serde(rename = "@index", default)]
    pub index: Option<String>,

    #[serde(rename = "@sub_index", default)]
    pub sub_index: Option<String>,

    #[serde(rename = "@type", default)]
    pub data_type: Option<String>,

    #[serde(rename = "@value", default)]
    pub value: Option<String>,
}
