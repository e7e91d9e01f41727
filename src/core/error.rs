use thiserror::Error;

use crate::core::document::ValueKind;
use crate::core::key_path::KeyPath;
use crate::core::target::PropertyKind;

/// What the document expected to find at a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Property(PropertyKind),
    /// A table of named instance tables
    Container,
    /// A table configuring a singleton child
    Table,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Property(kind) => write!(f, "{kind}"),
            Expected::Container => f.write_str("table of named tables"),
            Expected::Table => f.write_str("table"),
        }
    }
}

/// Errors raised while mapping a document onto a target
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("Type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: KeyPath,
        expected: Expected,
        found: ValueKind,
    },

    #[error("Unknown key '{path}'")]
    UnknownKey { path: KeyPath },

    #[error("Target {type_name} cannot provide {capability} for '{path}'")]
    MissingCapability {
        path: KeyPath,
        type_name: &'static str,
        capability: &'static str,
    },

    #[error("Invalid value at '{path}': {reason}")]
    InvalidValue { path: KeyPath, reason: String },

    #[error("Section '{path}' is missing or is not a table")]
    MissingSection { path: KeyPath },
}

impl MappingError {
    /// Key path of the offending entry
    pub fn path(&self) -> &KeyPath {
        match self {
            MappingError::TypeMismatch { path, .. }
            | MappingError::UnknownKey { path }
            | MappingError::MissingCapability { path, .. }
            | MappingError::InvalidValue { path, .. }
            | MappingError::MissingSection { path } => path,
        }
    }
}
