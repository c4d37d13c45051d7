use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    sync::Arc,
};

use futures::{stream::FuturesUnordered, SinkExt, StreamExt};
use futures_channel::{mpsc, oneshot};

use crate::{
    builder::GraphBuilder,
    dependency_graph::DependencyGraph,
    errors::{BuildError, InjectError, LookupError},
    graph::ObjectGraph,
    resolver::Resolver,
    types::{DynError, Instance, TypeKey},
};

/// Runs the providers of a [GraphBuilder] and collects their instances
pub(crate) struct GraphAssembler {
    request_rx: mpsc::Receiver<AssemblyRequest>,
    request_tx: mpsc::Sender<AssemblyRequest>,

    bound_type_ids: HashSet<TypeId>,
    /// What each provider declared it resolves
    declared: HashMap<TypeId, HashSet<TypeId>>,

    /// Requests waiting for a provider to finish
    waiters: HashMap<TypeId, Vec<ResponseSender<Instance>>>,

    /// Everything produced so far
    instances: HashMap<TypeId, (TypeKey, Instance)>,
}
impl GraphAssembler {
    pub(crate) fn new() -> GraphAssembler {
        let (request_tx, request_rx) = mpsc::channel(10);
        GraphAssembler {
            request_rx,
            request_tx,
            bound_type_ids: HashSet::new(),
            declared: HashMap::new(),
            waiters: HashMap::new(),
            instances: HashMap::new(),
        }
    }

    pub async fn assemble(mut self, blueprint: GraphBuilder) -> Result<ObjectGraph, BuildError> {
        let graph = DependencyGraph::new(&blueprint);
        if let Err(errors) = graph.check() {
            tracing::error!("Refusing to build an invalid graph: {errors}");
            return Err(errors.into());
        }

        if let Err(e) = self.run_providers(blueprint).await {
            // Nobody may keep waiting on a graph that will never exist
            let msg = Err(LookupError::from(e.clone()));
            for waiter in self.waiters.drain().flat_map(|(_, waiters)| waiters) {
                let _ = waiter.send(msg.clone());
            }

            return Err(e);
        }

        tracing::debug!("Object graph built with {} bindings", self.instances.len());

        Ok(ObjectGraph::new(self.instances, graph))
    }

    /// Starts all providers and serves their requests until every one has finished
    async fn run_providers(&mut self, blueprint: GraphBuilder) -> Result<(), BuildError> {
        let GraphBuilder {
            providers,
            instances,
            ..
        } = blueprint;

        tracing::debug!(
            "Building object graph with {} providers and {} instances",
            providers.len(),
            instances.len()
        );

        for (key, instance) in instances.into_iter() {
            self.bound_type_ids.insert(key.type_id);
            self.instances.insert(key.type_id, (key, instance));
        }

        let mut provider_futures = FuturesUnordered::new();
        for mut provider in providers {
            let key = provider.provides();
            self.bound_type_ids.insert(key.type_id);
            self.declared.insert(
                key.type_id,
                provider
                    .dependencies()
                    .iter()
                    .map(|dependency| dependency.key.type_id)
                    .collect(),
            );
            let handle = self.handle(key);

            provider_futures.push(async move {
                let result = Box::into_pin(provider.provide(handle)).await;
                (key, result)
            });
        }

        let provider_count = provider_futures.len();

        loop {
            futures::select! {
                request = self.request_rx.select_next_some() => {
                    self.handle_request(request);
                }
                result = provider_futures.next() => {
                    if self.handle_provider_result(result)? {
                        break;
                    }
                    tracing::debug!(
                        "Waiting for providers to finish [{} of {provider_count} complete]",
                        provider_count - provider_futures.len()
                    );
                }
            }
        }

        Ok(())
    }

    /// Handle the result of a provider future
    ///
    /// Returns true once no providers are left
    fn handle_provider_result(
        &mut self,
        result: Option<(TypeKey, Result<Instance, DynError>)>,
    ) -> Result<bool, BuildError> {
        let Some((key, result)) = result else {
            debug_assert!(self.waiters.is_empty(), "Not all waiters were satisfied");
            return Ok(true);
        };

        let instance = result.map_err(|error| BuildError::ProviderFailed {
            product: key.type_name,
            error: Arc::new(error),
        })?;

        tracing::debug!("Provided instance of {}", key.type_name);
        self.instances.insert(key.type_id, (key, instance.clone()));

        for waiter in self.waiters.remove(&key.type_id).into_iter().flatten() {
            let _ = waiter.send(Ok(instance.clone()));
        }

        Ok(false)
    }

    /// Get a handle for the provider of `owner`
    ///
    /// The handle is only valid while the graph is being built.
    pub fn handle(&self, owner: TypeKey) -> InjectionHandle {
        InjectionHandle {
            owner,
            request_sender: self.request_tx.clone(),
        }
    }

    fn handle_request(&mut self, request: AssemblyRequest) {
        match request {
            AssemblyRequest::Require {
                required_by,
                key,
                response_channel,
            } => self.handle_require(required_by, key, response_channel),
        }
    }

    fn handle_require(
        &mut self,
        required_by: TypeKey,
        key: TypeKey,
        response_channel: ResponseSender<Instance>,
    ) {
        // Only declared dependencies are covered by the graph check,
        // anything else could wait on a cycle forever
        let declared = self
            .declared
            .get(&required_by.type_id)
            .is_some_and(|declared| declared.contains(&key.type_id));
        if !declared {
            tracing::error!(
                "'{}' required '{}' without declaring it",
                required_by.type_name,
                key.type_name
            );
            let _ = response_channel.send(Err(LookupError::Undeclared {
                dependency: key.type_name,
                required_by: required_by.type_name,
            }));
            return;
        }

        if !self.bound_type_ids.contains(&key.type_id) {
            tracing::error!("Tried to require an unbound type: {}", key.type_name);
            let _ = response_channel.send(Err(LookupError::TypeMissing(key.type_name)));
            return;
        }

        if let Some((_, instance)) = self.instances.get(&key.type_id) {
            let _ = response_channel.send(Ok(instance.clone()));
            return;
        }

        self.waiters
            .entry(key.type_id)
            .or_default()
            .push(response_channel);
    }
}

/// Resolves dependencies while the graph is being built.
///
/// Once the build has finished, look instances up on the [ObjectGraph] instead.
#[derive(Clone)]
pub struct InjectionHandle {
    owner: TypeKey,
    request_sender: mpsc::Sender<AssemblyRequest>,
}
impl InjectionHandle {
    pub async fn resolve<T: Resolver>(&mut self) -> Result<T, InjectError> {
        T::resolve(self).await
    }

    /// Asks the assembler for the instance bound under `key`
    ///
    /// Waits until its provider has finished.
    pub(crate) async fn require(&mut self, key: TypeKey) -> Result<Instance, InjectError> {
        let (tx, rx) = oneshot::channel();
        self.request_sender
            .send(AssemblyRequest::Require {
                required_by: self.owner,
                key,
                response_channel: tx,
            })
            .await?;

        Ok(rx.await??)
    }
}

pub(crate) type ResponseSender<For> = oneshot::Sender<Result<For, LookupError>>;

/// Requests between [InjectionHandle] and [GraphAssembler]
pub(crate) enum AssemblyRequest {
    /// Requires an instance of a specific type
    Require {
        required_by: TypeKey,
        key: TypeKey,
        response_channel: ResponseSender<Instance>,
    },
}
