//! Configuration objects the engine can map documents onto
//!
//! Each model is a plain serde struct plus a `Configurable` adapter that
//! unwraps converted values into its own field types. Domain checks that the
//! document types cannot express, such as API levels being positive, are
//! attached to the descriptors so planning rejects them. The setters repeat
//! them and report `PropertyError::Rejected`.

pub mod android;

use serde::ser::{SerializeMap, Serializer};

use crate::core::target::{PropertyError, PropertyValue};

pub(crate) fn string(value: PropertyValue) -> Result<String, PropertyError> {
    match value {
        PropertyValue::String(s) => Ok(s),
        _ => Err(PropertyError::Unsupported),
    }
}

pub(crate) fn boolean(value: PropertyValue) -> Result<bool, PropertyError> {
    match value {
        PropertyValue::Boolean(b) => Ok(b),
        _ => Err(PropertyError::Unsupported),
    }
}

pub(crate) fn string_list(value: PropertyValue) -> Result<Vec<String>, PropertyError> {
    match value {
        PropertyValue::StringList(items) => Ok(items),
        _ => Err(PropertyError::Unsupported),
    }
}

pub(crate) fn string_map(value: PropertyValue) -> Result<Vec<(String, String)>, PropertyError> {
    match value {
        PropertyValue::StringMap(entries) => Ok(entries),
        _ => Err(PropertyError::Unsupported),
    }
}

fn positive_u32(raw: i64) -> Result<u32, String> {
    u32::try_from(raw)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| format!("must be a positive integer, got {raw}"))
}

/// Planning check for API levels and version codes
pub(crate) fn positive_integer(value: &PropertyValue) -> Result<(), String> {
    match value {
        PropertyValue::Integer(raw) => positive_u32(*raw).map(|_| ()),
        _ => Ok(()),
    }
}

/// Unwrap an integer that must be at least 1 and fit in a `u32`
pub(crate) fn positive(value: PropertyValue) -> Result<u32, PropertyError> {
    let PropertyValue::Integer(raw) = value else {
        return Err(PropertyError::Unsupported);
    };
    positive_u32(raw).map_err(PropertyError::Rejected)
}

/// Serialize ordered string pairs as a map, keeping their order
pub(crate) fn serialize_pairs<S: Serializer>(
    pairs: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
