// src/lib.rs

#![doc = "Loads EtherCAT startup SDO configuration documents."]
#![doc = ""]
#![doc = "Every supported format carries a list named `sdo`; each element holds"]
#![doc = "`index`, `sub_index`, `type` and `value` and becomes one"]
#![doc = "`ethercat_sdo_rs::SdoConfigEntry`."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_sdo_list_from_json_str`: `{\"sdo\": [ ... ]}` JSON documents."]
#![doc = "- `load_sdo_list_from_toml_str`: `[[sdo]]` TOML tables."]
#![doc = "- `load_sdo_list_from_yaml_str`: `sdo:` YAML sequences."]
#![doc = "- `load_sdo_list_from_xml_str`: `<sdo .../>` XML elements."]
#![doc = "- `load_sdo_list_from_file`: any of the above, chosen by file extension."]

// --- Crate Modules ---

mod error;
mod model;
mod node;
mod parser;

// --- Public API Re-exports ---

pub use error::ConfigError;
pub use node::{JsonNode, TomlNode, XmlNode, YamlNode};
pub use parser::{
    load_sdo_list_from_file, load_sdo_list_from_json_str, load_sdo_list_from_toml_str,
    load_sdo_list_from_xml_str, load_sdo_list_from_yaml_str,
};
