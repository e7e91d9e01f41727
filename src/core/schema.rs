//! JSON Schema export for target descriptors
//!
//! Editors and linters can validate build documents against the schema of the
//! model they will be mapped onto. Containers become objects whose arbitrary
//! keys are instance names.

use schemars::schema::{
    ArrayValidation, InstanceType, ObjectValidation, RootSchema, Schema, SchemaObject, SingleOrVec,
};

use crate::core::target::{PropertyKind, TargetDescriptor};

const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Build the schema for documents mapped onto `descriptor`
///
/// With `strict` set, objects reject undeclared keys, matching
/// `UnknownKeyPolicy::Fail`.
pub fn descriptor_schema(descriptor: &TargetDescriptor, strict: bool) -> RootSchema {
    let mut schema = object_schema(descriptor, strict);
    schema.metadata().title = Some(descriptor.type_name.to_string());
    RootSchema {
        meta_schema: Some(DRAFT_07.to_string()),
        schema,
        definitions: Default::default(),
    }
}

fn typed(instance_type: InstanceType) -> SchemaObject {
    SchemaObject {
        instance_type: Some(instance_type.into()),
        ..Default::default()
    }
}

fn object_of(additional: Schema) -> SchemaObject {
    SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(ObjectValidation {
            additional_properties: Some(Box::new(additional)),
            ..Default::default()
        })),
        ..Default::default()
    }
}

fn property_schema(kind: PropertyKind) -> SchemaObject {
    match kind {
        PropertyKind::String => typed(InstanceType::String),
        PropertyKind::Integer => typed(InstanceType::Integer),
        PropertyKind::Float => typed(InstanceType::Number),
        PropertyKind::Boolean => typed(InstanceType::Boolean),
        PropertyKind::StringList => SchemaObject {
            instance_type: Some(InstanceType::Array.into()),
            array: Some(Box::new(ArrayValidation {
                items: Some(SingleOrVec::Single(Box::new(
                    typed(InstanceType::String).into(),
                ))),
                ..Default::default()
            })),
            ..Default::default()
        },
        PropertyKind::StringMap => object_of(typed(InstanceType::String).into()),
    }
}

fn object_schema(descriptor: &TargetDescriptor, strict: bool) -> SchemaObject {
    let mut object = ObjectValidation::default();

    for property in descriptor.properties {
        object
            .properties
            .insert(property.name.to_string(), property_schema(property.kind).into());
    }

    for container in descriptor.containers {
        let mut instances = object_of(object_schema(container.element, strict).into());
        instances.metadata().description = Some(format!(
            "Named {} instances",
            container.element.type_name
        ));
        object
            .properties
            .insert(container.name.to_string(), instances.into());
    }

    for nested in descriptor.nested {
        let mut child = object_schema(nested.target, strict);
        child.metadata().title = Some(nested.target.type_name.to_string());
        object
            .properties
            .insert(nested.name.to_string(), child.into());
    }

    if strict {
        object.additional_properties = Some(Box::new(Schema::Bool(false)));
    }

    SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(object)),
        ..Default::default()
    }
}
