// crates/ethercat-sdo-rs/src/list.rs

//! Loading a slave's full list of startup SDO entries and laying them out
//! in one transmission buffer.

use crate::diagnostics::DiagnosticSink;
use crate::entry::SdoConfigEntry;
use crate::error::{EncodeError, ListLoadError};
use crate::log::{my_info, my_warn};
use crate::source::ConfigSource;
use alloc::vec::Vec;

/// What to do when one node of a list fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnInvalidEntry {
    /// Stop and return the first failure.
    #[default]
    Abort,
    /// Drop the failing entry and keep loading the rest.
    Skip,
}

/// Loads one entry per node, in order.
///
/// Every failure is reported to `diagnostics`. With
/// [`OnInvalidEntry::Abort`] the first failure is returned together with its
/// position; with [`OnInvalidEntry::Skip`] failing nodes are left out of the
/// result.
///
/// Log lines carry no slave id; report through
/// [`LoggingDiagnostics::for_slave`](crate::LoggingDiagnostics::for_slave) to
/// tag failures with one.
pub fn load_sdo_config_list<'a, S, I, D>(
    nodes: I,
    policy: OnInvalidEntry,
    diagnostics: &mut D,
) -> Result<Vec<SdoConfigEntry>, ListLoadError>
where
    S: ConfigSource + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
    D: DiagnosticSink + ?Sized,
{
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (position, node) in nodes.into_iter().enumerate() {
        match SdoConfigEntry::from_config(node, diagnostics) {
            Ok(entry) => entries.push(entry),
            Err(error) => match policy {
                OnInvalidEntry::Abort => return Err(ListLoadError { position, error }),
                OnInvalidEntry::Skip => {
                    my_warn!("Skipping SDO entry #{}: {}", position, error);
                    skipped += 1;
                }
            },
        }
    }

    my_info!(
        "Loaded {} SDO entries ({} skipped), {} bytes of data",
        entries.len(),
        skipped,
        total_data_size(&entries)
    );
    Ok(entries)
}

/// Sum of the encoded widths of all entries.
pub fn total_data_size(entries: &[SdoConfigEntry]) -> usize {
    entries.iter().map(SdoConfigEntry::data_size).sum()
}

/// Encodes all entries back to back at the start of `buffer`.
///
/// The buffer size is checked up front, so on error nothing has been
/// written. Returns the number of bytes written.
pub fn encode_all(entries: &[SdoConfigEntry], buffer: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = total_data_size(entries);
    if buffer.len() < needed {
        return Err(EncodeError::BufferTooShort {
            needed,
            available: buffer.len(),
        });
    }

    let mut offset = 0;
    for entry in entries {
        offset += entry.buffer_write(&mut buffer[offset..])?;
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{KEY_INDEX, KEY_SUB_INDEX, KEY_TYPE, KEY_VALUE};
    use crate::error::LoadError;
    use crate::source::Scalar;
    use crate::types::DataType;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;

    fn node(index: u64, data_type: &str, value: i64) -> BTreeMap<String, Scalar> {
        [
            (KEY_INDEX, Scalar::Unsigned(index)),
            (KEY_SUB_INDEX, Scalar::Unsigned(0)),
            (KEY_TYPE, Scalar::Text(data_type.into())),
            (KEY_VALUE, Scalar::Signed(value)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    fn nodes_with_bad_second() -> Vec<BTreeMap<String, Scalar>> {
        let mut bad = node(0x2001, "uint8", 1);
        bad.remove(KEY_VALUE);
        vec![node(0x2000, "uint16", 1), bad, node(0x2002, "int32", -1)]
    }

    #[test]
    fn test_abort_returns_first_failure() {
        let nodes = nodes_with_bad_second();
        let mut sink: Vec<LoadError> = Vec::new();
        let result = load_sdo_config_list(&nodes, OnInvalidEntry::Abort, &mut sink);
        assert_eq!(
            result,
            Err(ListLoadError {
                position: 1,
                error: LoadError::MissingField {
                    field: KEY_VALUE,
                    index: Some(0x2001),
                },
            })
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_skip_drops_failures() {
        let nodes = nodes_with_bad_second();
        let mut sink: Vec<LoadError> = Vec::new();
        let entries = load_sdo_config_list(&nodes, OnInvalidEntry::Skip, &mut sink).unwrap();
        let indices: Vec<u16> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0x2000, 0x2002]);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_encode_all_back_to_back() {
        let entries = vec![
            SdoConfigEntry::new(0x1c12, 0, DataType::Uint8, 0),
            SdoConfigEntry::new(0x1c12, 1, DataType::Uint16, 0x1600),
            SdoConfigEntry::new(0x6060, 0, DataType::Int8, 8),
        ];
        assert_eq!(total_data_size(&entries), 4);

        let mut buf = [0xEE; 6];
        assert_eq!(encode_all(&entries, &mut buf), Ok(4));
        assert_eq!(buf, [0x00, 0x00, 0x16, 0x08, 0xEE, 0xEE]);
    }

    #[test]
    fn test_encode_all_skips_unknown_width() {
        let entries = vec![
            SdoConfigEntry::new(0x2000, 0, DataType::Unknown("real32".into()), 1),
            SdoConfigEntry::new(0x2001, 0, DataType::Uint8, 2),
        ];
        let mut buf = [0u8; 1];
        assert_eq!(encode_all(&entries, &mut buf), Ok(1));
        assert_eq!(buf, [2]);
    }

    #[test]
    fn test_encode_all_checks_size_first() {
        let entries = vec![
            SdoConfigEntry::new(0x2000, 0, DataType::Uint8, 1),
            SdoConfigEntry::new(0x2001, 0, DataType::Uint32, 2),
        ];
        let mut buf = [0u8; 3];
        assert_eq!(
            encode_all(&entries, &mut buf),
            Err(EncodeError::BufferTooShort {
                needed: 5,
                available: 3
            })
        );
        assert_eq!(buf, [0, 0, 0]);
    }
}
