use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Boxed error returned by providers
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Anything bound into a graph may be shared between the assembler and its
/// consumers, so it needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A type erased instance produced by a binding
#[derive(Clone)]
pub struct Instance {
    pub key: TypeKey,
    pub instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub(crate) fn new<Provided: Injectable>(instance: Provided) -> Self {
        Instance {
            key: TypeKey::of::<Provided>(),
            instance: Arc::new(instance),
        }
    }

    /// Downcasts into the concrete type.
    ///
    /// On mismatch returns the name of the type actually held.
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        Arc::downcast::<T>(self.instance.clone()).map_err(|_| self.key.type_name)
    }
}

/// A dependency declared by a provider
#[derive(Debug, Clone, Copy)]
pub struct DependencyInfo {
    /// The required type
    pub key: TypeKey,
}
impl DependencyInfo {
    pub fn of<T: 'static + ?Sized>() -> Self {
        DependencyInfo {
            key: TypeKey::of::<T>(),
        }
    }
}

/// Type name and TypeId, identifies a binding
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeKey {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeKey {
    pub fn of<T: 'static + ?Sized>() -> TypeKey {
        TypeKey {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
