use serde::Serialize;

use crate::core::target::{Configurable, TargetDescriptor};

/// A root configuration object that can be mapped and then rendered
pub trait Model: Configurable {
    /// Access the object through its mapping capability
    fn as_configurable(&mut self) -> &mut dyn Configurable;

    fn to_json(&self) -> serde_json::Result<serde_json::Value>;

    fn to_toml(&self) -> Result<String, toml::ser::Error>;
}

impl<T: Configurable + Serialize> Model for T {
    fn as_configurable(&mut self) -> &mut dyn Configurable {
        self
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Model descriptor for auto-registration
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub target: &'static TargetDescriptor,
    pub factory: fn() -> Box<dyn Model>,
}

impl ModelDescriptor {
    /// Fresh, unconfigured instance of the model
    pub fn create(&self) -> Box<dyn Model> {
        (self.factory)()
    }
}

// Inventory collection for auto-registering models
inventory::collect!(ModelDescriptor);

/// Registry of every model submitted with `register_model!`
pub struct ModelRegistry {
    models: Vec<&'static ModelDescriptor>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::discover()
    }
}

impl ModelRegistry {
    /// Collect all registered models, sorted by name
    pub fn discover() -> Self {
        let mut models: Vec<&'static ModelDescriptor> =
            inventory::iter::<ModelDescriptor>.into_iter().collect();
        models.sort_by_key(|model| model.name);
        Self { models }
    }

    pub fn get(&self, name: &str) -> Option<&'static ModelDescriptor> {
        self.models.iter().copied().find(|model| model.name == name)
    }

    pub fn models(&self) -> &[&'static ModelDescriptor] {
        &self.models
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.models.iter().map(|model| model.name).collect()
    }
}
