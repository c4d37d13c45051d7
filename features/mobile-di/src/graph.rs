use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
};

use crate::{
    dependency_graph::DependencyGraph,
    errors::LookupError,
    types::{Injectable, Instance, TypeKey},
};

/// A fully built object graph
///
/// Cheap to clone, every clone shares the same instances.
#[derive(Clone)]
pub struct ObjectGraph(Arc<ObjectGraphInner>);
struct ObjectGraphInner {
    instances: HashMap<TypeId, (TypeKey, Instance)>,
    graph: DependencyGraph,
}
impl Debug for ObjectGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.0.instances.values().map(|(key, _)| key.type_name).collect();
        names.sort_unstable();
        f.debug_struct("ObjectGraph").field("bindings", &names).finish()
    }
}

impl ObjectGraph {
    pub(crate) fn new(
        instances: HashMap<TypeId, (TypeKey, Instance)>,
        graph: DependencyGraph,
    ) -> Self {
        Self(Arc::new(ObjectGraphInner { instances, graph }))
    }

    /// Returns the instance bound for `T`
    pub fn get<T: Injectable>(&self) -> Result<Arc<T>, LookupError> {
        let Some((_, instance)) = self.0.instances.get(&TypeId::of::<T>()) else {
            return Err(LookupError::TypeMissing(type_name::<T>()));
        };

        instance
            .downcast()
            .map_err(|actual_type| LookupError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })
    }

    pub fn contains<T: Injectable>(&self) -> bool {
        self.0.instances.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.0.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.instances.is_empty()
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.0.graph
    }
}
