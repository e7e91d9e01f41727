/// Convenience macro for auto-registering models
///
/// The model type must implement `Default`, `Configurable` and `Serialize`.
///
/// Usage:
/// ```rust,ignore
/// register_model!(
///     ApplicationExtension,
///     "android-application",
///     "Android application module",
///     APPLICATION_EXTENSION
/// );
/// ```
#[macro_export]
macro_rules! register_model {
    ($model_type:ty, $name:literal, $description:literal, $descriptor:path) => {
        inventory::submit! {
            $crate::core::registry::ModelDescriptor {
                name: $name,
                description: $description,
                target: &$descriptor,
                factory: || {
                    std::boxed::Box::new(<$model_type>::default())
                },
            }
        }
    };
}
