#![cfg_attr(not(feature = "std"), no_std)]
//! Startup SDO configuration entries for EtherCAT slaves.
//!
//! An [`SdoConfigEntry`] is one value written into a slave's object
//! dictionary at initialisation. Entries are loaded and validated from any
//! [`ConfigSource`] node, report failures through a [`DiagnosticSink`], and
//! encode themselves little-endian into a caller-supplied buffer through a
//! [`BufferWriter`].

// 'alloc' is used for dynamic allocation (e.g., tags and diagnostic keys)
extern crate alloc;

// --- Foundation Modules ---
pub mod types;
pub mod error;
pub mod log;

// --- Collaborator Seams ---
pub mod source;
pub mod buffer;
pub mod diagnostics;

// --- Configuration Entries ---
pub mod entry;
pub mod list;

// --- Top-level Exports ---
pub use types::{DataType, UnknownDataTypeError};
pub use error::{EncodeError, ListLoadError, LoadError};
pub use source::{CoercionError, ConfigSource, Scalar};
pub use buffer::BufferWriter;
pub use diagnostics::{DiagnosticSink, FnDiagnostics, LoggingDiagnostics, NoOpDiagnostics};
#[cfg(feature = "std")]
pub use diagnostics::StderrDiagnostics;
pub use entry::SdoConfigEntry;
pub use list::{OnInvalidEntry, encode_all, load_sdo_config_list, total_data_size};
