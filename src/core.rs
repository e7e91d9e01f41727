pub mod auto_register;
pub mod config_schema;
pub mod container;
pub mod convert;
pub mod document;
pub mod error;
pub mod key_path;
pub mod parser;
pub mod registry;
pub mod schema;
pub mod target;
