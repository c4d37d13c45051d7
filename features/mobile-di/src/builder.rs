use std::collections::HashMap;

use crate::{
    assembler::GraphAssembler,
    errors::BuildError,
    graph::ObjectGraph,
    providers::{DynProvider, Provider},
    types::{Injectable, Instance, TypeKey},
};

/// Collects the bindings of an object graph.
///
/// Building happens in two steps:
/// 1. Bind existing instances and providers on the [GraphBuilder]
/// 2. [GraphBuilder::build] validates the bindings and runs every provider,
///    yielding an [ObjectGraph]
pub struct GraphBuilder {
    /// Providers which construct instances during the build
    pub(crate) providers: Vec<Box<dyn DynProvider>>,
    /// Instances which already exist
    pub(crate) instances: HashMap<TypeKey, Instance>,
    /// Keys bound more than once, reported when the graph is checked
    pub(crate) rebound: Vec<TypeKey>,
}
impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            providers: Vec::new(),
            instances: HashMap::new(),
            rebound: Vec::new(),
        }
    }
}
impl GraphBuilder {
    pub fn bind_instance<T: Injectable>(mut self, instance: T) -> Self {
        let key = TypeKey::of::<T>();
        if self.instances.insert(key, Instance::new(instance)).is_some() {
            self.rebound.push(key);
        }
        self
    }

    pub fn bind<P: Provider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of bindings registered so far
    pub fn len(&self) -> usize {
        self.providers.len() + self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub async fn build(self) -> Result<ObjectGraph, BuildError> {
        GraphAssembler::new().assemble(self).await
    }

    /// Builds the graph on the calling thread
    pub fn build_blocking(self) -> Result<ObjectGraph, BuildError> {
        futures::executor::block_on(self.build())
    }
}
