//! Read-only document tree handed to the mapping engine
//!
//! The `toml` crate does the syntax work; this module turns its value tree into
//! a `DocumentTable` that keeps source order and separates scalars, lists of
//! scalars and nested tables so the engine can dispatch on them directly.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised while turning document text into a tree
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid TOML
    #[error("Failed to parse document as TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A single typed leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(toml::value::Datetime),
}

impl Scalar {
    /// Kind of this scalar, used in diagnostics
    pub fn kind(&self) -> ValueKind {
        match self {
            Scalar::String(_) => ValueKind::String,
            Scalar::Integer(_) => ValueKind::Integer,
            Scalar::Float(_) => ValueKind::Float,
            Scalar::Boolean(_) => ValueKind::Boolean,
            Scalar::Datetime(_) => ValueKind::Datetime,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s:?}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Datetime(d) => write!(f, "{d}"),
        }
    }
}

/// A value stored under a document key
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentValue {
    Scalar(Scalar),
    /// Array whose elements are all scalars, in source order
    List(Vec<Scalar>),
    Table(DocumentTable),
    /// Any other array: arrays of tables, nested arrays
    Array(Vec<DocumentValue>),
}

impl DocumentValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            DocumentValue::Scalar(scalar) => scalar.kind(),
            DocumentValue::List(_) => ValueKind::List,
            DocumentValue::Table(_) => ValueKind::Table,
            DocumentValue::Array(items) => {
                if !items.is_empty()
                    && items
                        .iter()
                        .all(|item| matches!(item, DocumentValue::Table(_)))
                {
                    ValueKind::TableArray
                } else {
                    ValueKind::Array
                }
            }
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DocumentValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            DocumentValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&DocumentTable> {
        match self {
            DocumentValue::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Value kinds as they appear in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    List,
    Table,
    TableArray,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Datetime => "datetime",
            ValueKind::List => "list",
            ValueKind::Table => "table",
            ValueKind::TableArray => "array of tables",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Ordered key/value table with unique keys
#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    entries: IndexMap<String, DocumentValue>,
}

impl DocumentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing an existing entry in place so the key keeps
    /// its original position
    pub fn insert(&mut self, key: impl Into<String>, value: DocumentValue) {
        self.entries.insert(key.into(), value);
    }

    /// Builder-style insert, handy when assembling tables in code
    pub fn with(mut self, key: impl Into<String>, value: DocumentValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        self.entries.get(key)
    }

    pub fn get_table(&self, key: &str) -> Option<&DocumentTable> {
        self.get(key).and_then(DocumentValue::as_table)
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tables are equal only when their entries match in the same order
impl PartialEq for DocumentTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl From<toml::Table> for DocumentTable {
    fn from(table: toml::Table) -> Self {
        Self {
            entries: table
                .into_iter()
                .map(|(key, value)| (key, DocumentValue::from(value)))
                .collect(),
        }
    }
}

impl From<toml::Value> for DocumentValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => DocumentValue::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => DocumentValue::Scalar(Scalar::Integer(i)),
            toml::Value::Float(x) => DocumentValue::Scalar(Scalar::Float(x)),
            toml::Value::Boolean(b) => DocumentValue::Scalar(Scalar::Boolean(b)),
            toml::Value::Datetime(d) => DocumentValue::Scalar(Scalar::Datetime(d)),
            toml::Value::Table(table) => DocumentValue::Table(DocumentTable::from(table)),
            toml::Value::Array(items) => {
                let items: Vec<DocumentValue> = items.into_iter().map(Self::from).collect();
                if items
                    .iter()
                    .all(|item| matches!(item, DocumentValue::Scalar(_)))
                {
                    DocumentValue::List(
                        items
                            .into_iter()
                            .filter_map(|item| match item {
                                DocumentValue::Scalar(scalar) => Some(scalar),
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    DocumentValue::Array(items)
                }
            }
        }
    }
}

impl From<&str> for DocumentValue {
    fn from(value: &str) -> Self {
        DocumentValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<i64> for DocumentValue {
    fn from(value: i64) -> Self {
        DocumentValue::Scalar(Scalar::Integer(value))
    }
}

impl From<bool> for DocumentValue {
    fn from(value: bool) -> Self {
        DocumentValue::Scalar(Scalar::Boolean(value))
    }
}

impl From<DocumentTable> for DocumentValue {
    fn from(value: DocumentTable) -> Self {
        DocumentValue::Table(value)
    }
}

/// A whole parsed document; its top-level tables are sections such as `android`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: DocumentTable,
}

impl Document {
    pub fn root(&self) -> &DocumentTable {
        &self.root
    }

    pub fn section(&self, name: &str) -> Option<&DocumentTable> {
        self.root.get_table(name)
    }

    /// Names of the top-level tables, in source order
    pub fn sections(&self) -> Vec<&str> {
        self.root
            .iter()
            .filter(|(_, value)| matches!(value, DocumentValue::Table(_)))
            .map(|(key, _)| key)
            .collect()
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let table: toml::Table = text.parse()?;
        Ok(Self {
            root: DocumentTable::from(table),
        })
    }
}

impl From<DocumentTable> for Document {
    fn from(root: DocumentTable) -> Self {
        Self { root }
    }
}
