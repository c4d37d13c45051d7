use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

use mobile_di::TypeKey;

use crate::errors::ConfigError;

/// Registry of all configs, keyed by type.
///
/// Built once at startup and handed to whatever needs it, usually by binding
/// it as an instance on a [mobile_di::GraphBuilder].
#[derive(Default, Clone)]
pub struct ConfigProvider {
    configs: HashMap<TypeId, (TypeKey, Arc<dyn Any + Send + Sync + 'static>)>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the config of type `T`, None if it was never added
    pub fn get_config<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.configs
            .get(&TypeId::of::<T>())
            .and_then(|(_, entry)| entry.clone().downcast().ok())
    }

    /// Like [ConfigProvider::get_config] but treats absence as an error
    pub fn require_config<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, ConfigError> {
        self.get_config()
            .ok_or_else(|| ConfigError::Missing(TypeKey::of::<T>()))
    }

    /// Add a config to the registry.
    ///
    /// Fails if a config of the same type is already registered.
    pub fn add_config<T: Send + Sync + 'static>(
        &mut self,
        config: T,
    ) -> Result<&mut Self, ConfigError> {
        let key = TypeKey::of::<T>();

        if self.configs.contains_key(&key.type_id) {
            return Err(ConfigError::AlreadyRegistered(key));
        }

        tracing::debug!("Registered config {}", key.type_name);
        self.configs.insert(key.type_id, (key, Arc::new(config)));
        Ok(self)
    }

    /// Adds the config if one is given, otherwise does nothing
    pub fn maybe_add_config<T: Send + Sync + 'static>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, ConfigError> {
        match config {
            Some(c) => self.add_config(c),
            None => Ok(self),
        }
    }

    /// Names of all registered config types
    pub fn registered(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.configs.values().map(|(key, _)| key.type_name).collect();
        names.sort_unstable();
        names
    }
}
