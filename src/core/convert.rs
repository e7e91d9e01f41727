use crate::core::document::{DocumentValue, Scalar};
use crate::core::error::{Expected, MappingError};
use crate::core::key_path::KeyPath;
use crate::core::target::{PropertyKind, PropertyValue};

/// Convert a document value into the kind a property expects
///
/// Integers widen to floats; nothing else is coerced and datetimes are never
/// accepted.
pub fn convert_value(
    value: &DocumentValue,
    kind: PropertyKind,
    path: &KeyPath,
) -> Result<PropertyValue, MappingError> {
    let mismatch = |expected: PropertyKind, found: &DocumentValue, path: &KeyPath| {
        MappingError::TypeMismatch {
            path: path.clone(),
            expected: Expected::Property(expected),
            found: found.kind(),
        }
    };

    match (kind, value) {
        (PropertyKind::String, DocumentValue::Scalar(Scalar::String(s))) => {
            Ok(PropertyValue::String(s.clone()))
        }
        (PropertyKind::Integer, DocumentValue::Scalar(Scalar::Integer(i))) => {
            Ok(PropertyValue::Integer(*i))
        }
        (PropertyKind::Float, DocumentValue::Scalar(Scalar::Float(x))) => {
            Ok(PropertyValue::Float(*x))
        }
        (PropertyKind::Float, DocumentValue::Scalar(Scalar::Integer(i))) => {
            Ok(PropertyValue::Float(*i as f64))
        }
        (PropertyKind::Boolean, DocumentValue::Scalar(Scalar::Boolean(b))) => {
            Ok(PropertyValue::Boolean(*b))
        }
        (PropertyKind::StringList, DocumentValue::List(items)) => {
            let mut strings = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Scalar::String(s) => strings.push(s.clone()),
                    other => {
                        return Err(MappingError::TypeMismatch {
                            path: path.index(index),
                            expected: Expected::Property(PropertyKind::String),
                            found: other.kind(),
                        })
                    }
                }
            }
            Ok(PropertyValue::StringList(strings))
        }
        (PropertyKind::StringMap, DocumentValue::Table(table)) => {
            let mut entries = Vec::with_capacity(table.len());
            for (key, entry) in table.iter() {
                match entry {
                    DocumentValue::Scalar(Scalar::String(s)) => {
                        entries.push((key.to_string(), s.clone()))
                    }
                    other => {
                        return Err(mismatch(PropertyKind::String, other, &path.key(key)));
                    }
                }
            }
            Ok(PropertyValue::StringMap(entries))
        }
        (expected, found) => Err(mismatch(expected, found, path)),
    }
}
