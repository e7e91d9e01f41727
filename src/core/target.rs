//! Capability contract between the mapping engine and configuration objects
//!
//! A target never gets inspected reflectively. Instead each type publishes a
//! static `TargetDescriptor` naming the document keys it understands, and
//! implements `Configurable` to accept the converted values. Containers of
//! named children implement `NamedContainer`.

use std::fmt;

/// Expected type of a scalar property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Integer,
    Float,
    Boolean,
    /// Ordered list of strings
    StringList,
    /// Ordered string-to-string table
    StringMap,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::String => "string",
            PropertyKind::Integer => "integer",
            PropertyKind::Float => "float",
            PropertyKind::Boolean => "boolean",
            PropertyKind::StringList => "list of strings",
            PropertyKind::StringMap => "table of strings",
        };
        f.write_str(name)
    }
}

/// A converted value, ready to hand to a setter
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    StringList(Vec<String>),
    StringMap(Vec<(String, String)>),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::String(_) => PropertyKind::String,
            PropertyValue::Integer(_) => PropertyKind::Integer,
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Boolean(_) => PropertyKind::Boolean,
            PropertyValue::StringList(_) => PropertyKind::StringList,
            PropertyValue::StringMap(_) => PropertyKind::StringMap,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{s:?}"),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
            PropertyValue::StringList(items) => write!(f, "{items:?}"),
            PropertyValue::StringMap(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{k} = {v:?}"))
                    .collect();
                write!(f, "{{ {} }}", rendered.join(", "))
            }
        }
    }
}

/// Why a target refused a property value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The target has no setter for this name or kind
    Unsupported,
    /// The setter exists but the value is out of its domain
    Rejected(String),
}

/// Domain check run while planning; `Err` carries the reason the value is refused
pub type ValueCheck = fn(&PropertyValue) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub check: Option<ValueCheck>,
}

impl PropertyDescriptor {
    pub const fn new(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            check: None,
        }
    }

    /// Attach a check that planning runs on every converted value
    pub const fn checked(self, check: ValueCheck) -> Self {
        Self {
            check: Some(check),
            ..self
        }
    }

    /// Run the domain check, if any
    pub fn validate(&self, value: &PropertyValue) -> Result<(), String> {
        match self.check {
            Some(check) => check(value),
            None => Ok(()),
        }
    }
}

/// A key holding a named collection of children
#[derive(Debug, Clone, Copy)]
pub struct ContainerDescriptor {
    pub name: &'static str,
    pub element: &'static TargetDescriptor,
}

/// A key holding a single child object that already exists on the parent
#[derive(Debug, Clone, Copy)]
pub struct NestedDescriptor {
    pub name: &'static str,
    pub target: &'static TargetDescriptor,
}

/// What a document key resolves to on a target
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Property(&'a PropertyDescriptor),
    Container(&'a ContainerDescriptor),
    Nested(&'a NestedDescriptor),
}

/// Static description of a target type, usually declared as a `static`
#[derive(Debug)]
pub struct TargetDescriptor {
    pub type_name: &'static str,
    pub properties: &'static [PropertyDescriptor],
    pub containers: &'static [ContainerDescriptor],
    pub nested: &'static [NestedDescriptor],
}

impl TargetDescriptor {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn container(&self, name: &str) -> Option<&ContainerDescriptor> {
        self.containers.iter().find(|c| c.name == name)
    }

    pub fn nested_target(&self, name: &str) -> Option<&NestedDescriptor> {
        self.nested.iter().find(|n| n.name == name)
    }

    /// Resolve a document key; properties win over containers, containers over nested objects
    pub fn member(&self, name: &str) -> Option<Member<'_>> {
        self.property(name)
            .map(Member::Property)
            .or_else(|| self.container(name).map(Member::Container))
            .or_else(|| self.nested_target(name).map(Member::Nested))
    }

    /// All member names in declaration order
    pub fn member_names(&self) -> Vec<&'static str> {
        self.properties
            .iter()
            .map(|p| p.name)
            .chain(self.containers.iter().map(|c| c.name))
            .chain(self.nested.iter().map(|n| n.name))
            .collect()
    }
}

/// An object the mapping engine can configure
pub trait Configurable {
    /// Descriptor of the concrete type behind this object
    fn descriptor(&self) -> &'static TargetDescriptor;

    /// Assign a converted value to the property called `name`
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError>;

    /// Named child container, or `None` if the object has none under that name
    fn container(&mut self, _name: &str) -> Option<&mut dyn NamedContainer> {
        None
    }

    /// Singleton child object, or `None` if the object has none under that name
    fn nested(&mut self, _name: &str) -> Option<&mut dyn Configurable> {
        None
    }
}

/// Named collection of children supporting create-or-fetch
pub trait NamedContainer {
    /// Return the child called `name`, creating it first if it does not exist yet
    fn maybe_create(&mut self, name: &str) -> &mut dyn Configurable;
}
