// crates/ethercat-sdo-rs-config/src/parser.rs

use crate::error::ConfigError;
use crate::model::{JsonDocument, TomlDocument, XmlDocument, YamlDocument};
use crate::node::{JsonNode, TomlNode, XmlNode, YamlNode};
use ethercat_sdo_rs::{DiagnosticSink, OnInvalidEntry, SdoConfigEntry, load_sdo_config_list};
use log::debug;
use std::fs;
use std::path::Path;

/// Parses a JSON document of the form `{"sdo": [ {...}, ... ]}` into SDO entries.
///
/// Each element must be an object with `index`, `sub_index`, `type` and
/// `value`. Numbers may be given as JSON integers or as decimal/`0x` strings.
///
/// # Errors
/// Returns a `ConfigError` if the document is malformed, or if an entry is
/// invalid and `policy` is [`OnInvalidEntry::Abort`].
pub fn load_sdo_list_from_json_str<D>(
    content: &str,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ConfigError>
where
    D: DiagnosticSink + ?Sized,
{
    let document: JsonDocument = serde_json::from_str(content)?;
    let nodes: Vec<JsonNode<'_>> = document.sdo.iter().map(JsonNode).collect();
    Ok(load_sdo_config_list(&nodes, policy, diagnostics)?)
}

/// Parses a TOML document made of `[[sdo]]` tables into SDO entries.
///
/// # Errors
/// Same as [`load_sdo_list_from_json_str`].
pub fn load_sdo_list_from_toml_str<D>(
    content: &str,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ConfigError>
where
    D: DiagnosticSink + ?Sized,
{
    let document: TomlDocument = toml::from_str(content)?;
    let nodes: Vec<TomlNode<'_>> = document.sdo.iter().map(TomlNode).collect();
    Ok(load_sdo_config_list(&nodes, policy, diagnostics)?)
}

/// Parses a YAML document with a top-level `sdo:` sequence of mappings.
///
/// # Errors
/// Same as [`load_sdo_list_from_json_str`].
pub fn load_sdo_list_from_yaml_str<D>(
    content: &str,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ConfigError>
where
    D: DiagnosticSink + ?Sized,
{
    let document: YamlDocument = serde_yaml::from_str(content)?;
    let nodes: Vec<YamlNode<'_>> = document.sdo.iter().map(YamlNode).collect();
    Ok(load_sdo_config_list(&nodes, policy, diagnostics)?)
}

/// Parses an XML document whose root holds `<sdo .../>` elements, one per
/// entry, with the fields given as attributes. Other elements may sit
/// between them and are ignored.
///
/// # Errors
/// Same as [`load_sdo_list_from_json_str`].
pub fn load_sdo_list_from_xml_str<D>(
    content: &str,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ConfigError>
where
    D: DiagnosticSink + ?Sized,
{
    let document: XmlDocument = quick_xml::de::from_str(content)?;
    let nodes: Vec<XmlNode> = document.sdo.into_iter().map(XmlNode::from_model).collect();
    Ok(load_sdo_config_list(&nodes, policy, diagnostics)?)
}

/// Reads a configuration file, choosing the format from its extension
/// (`json`, `toml`, `yaml`/`yml` or `xml`).
///
/// # Errors
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::UnsupportedFormat` for any other extension, in addition to
/// the errors of the format-specific loaders.
pub fn load_sdo_list_from_file<D>(
    path: &Path,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ConfigError>
where
    D: DiagnosticSink + ?Sized,
{
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    // Reject the format before touching the filesystem.
    if !matches!(extension.as_str(), "json" | "toml" | "yaml" | "yml" | "xml") {
        return Err(ConfigError::UnsupportedFormat { extension });
    }

    debug!("Loading SDO configuration from {}", path.display());
    let content = fs::read_to_string(path)?;
    match extension.as_str() {
        "json" => load_sdo_list_from_json_str(&content, policy, diagnostics),
        "toml" => load_sdo_list_from_toml_str(&content, policy, diagnostics),
        "yaml" | "yml" => load_sdo_list_from_yaml_str(&content, policy, diagnostics),
        _ => load_sdo_list_from_xml_str(&content, policy, diagnostics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethercat_sdo_rs::{DataType, LoadError, NoOpDiagnostics};

    #[test]
    fn test_json_document() {
        let content = r#"{
            "sdo": [
                {"index": "0x1c12", "sub_index": 0, "type": "uint8", "value": 0},
                {"index": 24672, "sub_index": 0, "type": "int8", "value": -1}
            ]
        }"#;
        let entries =
            load_sdo_list_from_json_str(content, OnInvalidEntry::Abort, &mut NoOpDiagnostics)
                .unwrap();
        assert_eq!(
            entries,
            vec![
                SdoConfigEntry::new(0x1c12, 0, DataType::Uint8, 0),
                SdoConfigEntry::new(0x6060, 0, DataType::Int8, -1),
            ]
        );
    }

    #[test]
    fn test_document_without_sdo_list_is_empty() {
        let mut sink: Vec<LoadError> = Vec::new();
        assert!(load_sdo_list_from_json_str("{}", OnInvalidEntry::Abort, &mut sink)
            .unwrap()
            .is_empty());
        assert!(load_sdo_list_from_toml_str("", OnInvalidEntry::Abort, &mut sink)
            .unwrap()
            .is_empty());
        assert!(load_sdo_list_from_yaml_str("{}", OnInvalidEntry::Abort, &mut sink)
            .unwrap()
            .is_empty());
        assert!(load_sdo_list_from_xml_str("<slave/>", OnInvalidEntry::Abort, &mut sink)
            .unwrap()
            .is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_toml_document() {
        let content = r#"
            [[sdo]]
            index = 0x1234
            sub_index = 1
            type = "uint16"
            value = 500
        "#;
        let entries =
            load_sdo_list_from_toml_str(content, OnInvalidEntry::Abort, &mut NoOpDiagnostics)
                .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].encode(), vec![0xF4, 0x01]);
    }

    #[test]
    fn test_yaml_document() {
        let content = "sdo:\n  - index: 0x1234\n    sub_index: 1\n    type: uint16\n    value: 500\n";
        let entries =
            load_sdo_list_from_yaml_str(content, OnInvalidEntry::Abort, &mut NoOpDiagnostics)
                .unwrap();
        assert_eq!(entries, vec![SdoConfigEntry::new(0x1234, 1, DataType::Uint16, 500)]);
        assert_eq!(entries[0].encode(), vec![0xF4, 0x01]);
    }

    #[test]
    fn test_xml_document() {
        let content = r#"<slave>
            <sdo index="0x1c13" sub_index="0" type="uint8" value="1"/>
            <sdo index="0x1c13" sub_index="1" type="uint16" value="0x1a00"/>
        </slave>"#;
        let entries =
            load_sdo_list_from_xml_str(content, OnInvalidEntry::Abort, &mut NoOpDiagnostics)
                .unwrap();
        assert_eq!(
            entries[1],
            SdoConfigEntry::new(0x1c13, 1, DataType::Uint16, 0x1a00)
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_sdo_list_from_file(
            Path::new("slave.ini"),
            OnInvalidEntry::Abort,
            &mut NoOpDiagnostics,
        );
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { extension }) if extension == "ini"
        ));
    }
}
