// Library interface for declarative
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod symbols;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::document::{Document, DocumentTable, DocumentValue, Scalar};
pub use crate::core::error::MappingError;
pub use crate::core::key_path::KeyPath;
pub use crate::core::parser::{DeclarativeParser, MappingPlan, ParserOptions, UnknownKeyPolicy};
pub use crate::core::registry::{Model, ModelRegistry};
pub use crate::core::target::{
    Configurable, NamedContainer, PropertyError, PropertyKind, PropertyValue, TargetDescriptor,
};
