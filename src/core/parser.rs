//! Declarative mapping engine
//!
//! Mapping runs in two phases. `plan` walks the document against the target's
//! descriptors only, converting every value and resolving every key, and fails
//! on the first problem. `apply` then replays the resulting `MappingPlan` onto
//! the live objects. `parse` does both, so a malformed document never leaves a
//! target half-configured.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::convert::convert_value;
use crate::core::document::{Document, DocumentTable};
use crate::core::error::{Expected, MappingError};
use crate::core::key_path::KeyPath;
use crate::core::target::{Configurable, Member, PropertyError, PropertyValue, TargetDescriptor};

/// What to do with document keys the target does not declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Skip the key and record it in the plan
    #[default]
    Ignore,
    /// Abort with an unknown key error
    Fail,
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownKeyPolicy::Ignore => write!(f, "ignore"),
            UnknownKeyPolicy::Fail => write!(f, "fail"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParserOptions {
    #[serde(default)]
    #[schemars(description = "Policy for document keys the target does not declare")]
    pub unknown_keys: UnknownKeyPolicy,
}

/// One side effect the engine will perform on a target
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Call the property setter
    Assign { key: String, value: PropertyValue },
    /// Recurse into an existing singleton child
    Configure { key: String, plan: MappingPlan },
    /// Fetch the container once, then create-or-fetch each instance
    Populate {
        key: String,
        instances: Vec<Instance>,
    },
}

/// A named container child and the mapping for it
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub plan: MappingPlan,
}

/// Validated mapping of one document table onto one target type
#[derive(Debug, Clone, PartialEq)]
pub struct MappingPlan {
    pub path: KeyPath,
    pub type_name: &'static str,
    pub effects: Vec<Effect>,
    /// Keys ignored under `UnknownKeyPolicy::Ignore`
    pub skipped: Vec<KeyPath>,
}

impl MappingPlan {
    fn new(path: KeyPath, descriptor: &TargetDescriptor) -> Self {
        Self {
            path,
            type_name: descriptor.type_name,
            effects: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of property assignments in this plan and every nested plan
    pub fn assignment_count(&self) -> usize {
        self.effects
            .iter()
            .map(|effect| match effect {
                Effect::Assign { .. } => 1,
                Effect::Configure { plan, .. } => plan.assignment_count(),
                Effect::Populate { instances, .. } => instances
                    .iter()
                    .map(|instance| instance.plan.assignment_count())
                    .sum(),
            })
            .sum()
    }

    /// Skipped keys from this plan and every nested plan, in document order
    pub fn skipped_keys(&self) -> Vec<&KeyPath> {
        let mut keys: Vec<&KeyPath> = self.skipped.iter().collect();
        for effect in &self.effects {
            match effect {
                Effect::Assign { .. } => {}
                Effect::Configure { plan, .. } => keys.extend(plan.skipped_keys()),
                Effect::Populate { instances, .. } => {
                    for instance in instances {
                        keys.extend(instance.plan.skipped_keys());
                    }
                }
            }
        }
        keys
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for effect in &self.effects {
            match effect {
                Effect::Assign { key, value } => writeln!(f, "{indent}{key} = {value}")?,
                Effect::Configure { key, plan } => {
                    writeln!(f, "{indent}{key} ({}):", plan.type_name)?;
                    plan.render(f, depth + 1)?;
                }
                Effect::Populate { key, instances } => {
                    writeln!(f, "{indent}{key}:")?;
                    for instance in instances {
                        writeln!(
                            f,
                            "{indent}  {} ({}):",
                            instance.name, instance.plan.type_name
                        )?;
                        instance.plan.render(f, depth + 2)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for MappingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}):", self.path, self.type_name)?;
        self.render(f, 1)
    }
}

/// Maps document tables onto `Configurable` targets
#[derive(Debug, Clone, Default)]
pub struct DeclarativeParser {
    options: ParserOptions,
}

impl DeclarativeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parser that rejects unknown keys
    pub fn strict() -> Self {
        Self::with_options(ParserOptions {
            unknown_keys: UnknownKeyPolicy::Fail,
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Map `table` onto `target`, reporting key paths relative to the table
    ///
    /// Types, unknown keys and descriptor value checks are all validated
    /// before the target is touched. A setter that still refuses a value
    /// (`PropertyError`) fails during apply, after earlier effects have run.
    pub fn parse(
        &self,
        table: &DocumentTable,
        target: &mut dyn Configurable,
    ) -> Result<(), MappingError> {
        self.parse_at(table, KeyPath::root(), target)
    }

    /// Map `table`, which lives at `root` in its document, onto `target`
    pub fn parse_at(
        &self,
        table: &DocumentTable,
        root: KeyPath,
        target: &mut dyn Configurable,
    ) -> Result<(), MappingError> {
        let plan = self.plan_at(table, root, target.descriptor())?;
        self.apply(&plan, target)
    }

    /// Map the top-level table `section` of `document` onto `target`
    pub fn parse_section(
        &self,
        document: &Document,
        section: &str,
        target: &mut dyn Configurable,
    ) -> Result<(), MappingError> {
        let plan = self.plan_section(document, section, target.descriptor())?;
        self.apply(&plan, target)
    }

    pub fn plan(
        &self,
        table: &DocumentTable,
        descriptor: &'static TargetDescriptor,
    ) -> Result<MappingPlan, MappingError> {
        self.plan_at(table, KeyPath::root(), descriptor)
    }

    pub fn plan_section(
        &self,
        document: &Document,
        section: &str,
        descriptor: &'static TargetDescriptor,
    ) -> Result<MappingPlan, MappingError> {
        let path = KeyPath::root().key(section);
        let table = document
            .section(section)
            .ok_or_else(|| MappingError::MissingSection { path: path.clone() })?;
        self.plan_at(table, path, descriptor)
    }

    /// Validate and convert `table` against `descriptor` without touching any target
    pub fn plan_at(
        &self,
        table: &DocumentTable,
        path: KeyPath,
        descriptor: &'static TargetDescriptor,
    ) -> Result<MappingPlan, MappingError> {
        let mut plan = MappingPlan::new(path, descriptor);

        for (key, value) in table.iter() {
            let key_path = plan.path.key(key);

            match descriptor.member(key) {
                Some(Member::Property(property)) => {
                    let value = convert_value(value, property.kind, &key_path)?;
                    property
                        .validate(&value)
                        .map_err(|reason| MappingError::InvalidValue {
                            path: key_path.clone(),
                            reason,
                        })?;
                    trace!("Planned {key_path} = {value}");
                    plan.effects.push(Effect::Assign {
                        key: key.to_string(),
                        value,
                    });
                }
                Some(Member::Container(container)) => {
                    let entries = value.as_table().ok_or_else(|| MappingError::TypeMismatch {
                        path: key_path.clone(),
                        expected: Expected::Container,
                        found: value.kind(),
                    })?;

                    let mut instances = Vec::with_capacity(entries.len());
                    for (name, entry) in entries.iter() {
                        let instance_path = key_path.key(name);
                        let instance_table =
                            entry.as_table().ok_or_else(|| MappingError::TypeMismatch {
                                path: instance_path.clone(),
                                expected: Expected::Table,
                                found: entry.kind(),
                            })?;
                        trace!("Planned {} instance {instance_path}", container.element.type_name);
                        instances.push(Instance {
                            name: name.to_string(),
                            plan: self.plan_at(instance_table, instance_path, container.element)?,
                        });
                    }

                    plan.effects.push(Effect::Populate {
                        key: key.to_string(),
                        instances,
                    });
                }
                Some(Member::Nested(nested)) => {
                    let nested_table = value.as_table().ok_or_else(|| MappingError::TypeMismatch {
                        path: key_path.clone(),
                        expected: Expected::Table,
                        found: value.kind(),
                    })?;
                    plan.effects.push(Effect::Configure {
                        key: key.to_string(),
                        plan: self.plan_at(nested_table, key_path, nested.target)?,
                    });
                }
                None => match self.options.unknown_keys {
                    UnknownKeyPolicy::Ignore => {
                        debug!(
                            "Ignoring unknown key {key_path} on {}",
                            descriptor.type_name
                        );
                        plan.skipped.push(key_path);
                    }
                    UnknownKeyPolicy::Fail => {
                        return Err(MappingError::UnknownKey { path: key_path });
                    }
                },
            }
        }

        Ok(plan)
    }

    /// Perform the effects of `plan` on `target`, in document order
    pub fn apply(
        &self,
        plan: &MappingPlan,
        target: &mut dyn Configurable,
    ) -> Result<(), MappingError> {
        for effect in &plan.effects {
            match effect {
                Effect::Assign { key, value } => {
                    let path = plan.path.key(key);
                    debug!("Setting {path} = {value}");
                    target
                        .set_property(key, value.clone())
                        .map_err(|error| match error {
                            PropertyError::Unsupported => MappingError::MissingCapability {
                                path,
                                type_name: plan.type_name,
                                capability: "property",
                            },
                            PropertyError::Rejected(reason) => {
                                MappingError::InvalidValue { path, reason }
                            }
                        })?;
                }
                Effect::Configure { key, plan: nested } => {
                    let child =
                        target
                            .nested(key)
                            .ok_or_else(|| MappingError::MissingCapability {
                                path: nested.path.clone(),
                                type_name: plan.type_name,
                                capability: "nested object",
                            })?;
                    self.apply(nested, child)?;
                }
                Effect::Populate { key, instances } => {
                    let container =
                        target
                            .container(key)
                            .ok_or_else(|| MappingError::MissingCapability {
                                path: plan.path.key(key),
                                type_name: plan.type_name,
                                capability: "container",
                            })?;
                    for instance in instances {
                        debug!("Configuring {}", instance.plan.path);
                        let child = container.maybe_create(&instance.name);
                        self.apply(&instance.plan, child)?;
                    }
                }
            }
        }
        Ok(())
    }
}
