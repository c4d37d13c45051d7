use mobile_di::TypeKey;

/// Errors when working with the config registry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A config of this type is already registered
    #[error("A config of type '{0}' is already registered")]
    AlreadyRegistered(TypeKey),
    /// No config of this type is registered
    #[error("No config of type '{0}' is registered")]
    Missing(TypeKey),
}
