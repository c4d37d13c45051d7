//! A small, type keyed object graph builder.
//!
//! Bindings are declared on a [GraphBuilder], either as ready instances or as
//! [Provider]s which construct their product from other bindings. Building
//! first validates the whole [DependencyGraph] (missing, duplicate and
//! circular bindings), then runs every provider on the calling task and
//! yields an immutable [ObjectGraph]. Providers may only resolve the types
//! they list in [Provider::dependencies].
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mobile_di::{DependencyInfo, DynError, GraphBuilder, InjectionHandle, Provider, Resolver};
//!
//! struct Engine;
//! struct Car {
//!     engine: Arc<Engine>,
//! }
//!
//! struct CarProvider;
//! impl Provider for CarProvider {
//!     type Provides = Car;
//!
//!     fn dependencies() -> Vec<DependencyInfo> {
//!         vec![Arc::<Engine>::dependency_info()]
//!     }
//!
//!     async fn provide(&mut self, mut handle: InjectionHandle) -> Result<Car, DynError> {
//!         let engine = handle.resolve::<Arc<Engine>>().await?;
//!         Ok(Car { engine })
//!     }
//! }
//!
//! let graph = GraphBuilder::new()
//!     .bind_instance(Engine)
//!     .bind(CarProvider)
//!     .build_blocking()
//!     .unwrap();
//!
//! let car = graph.get::<Car>().unwrap();
//! assert!(Arc::ptr_eq(&car.engine, &graph.get::<Engine>().unwrap()));
//! ```

pub mod assembler;
pub mod builder;
pub mod dependency_graph;
pub mod errors;
pub mod graph;
pub mod providers;
pub mod resolver;
pub mod types;

pub use assembler::InjectionHandle;
pub use builder::GraphBuilder;
pub use dependency_graph::{DependencyGraph, DependencyGraphError, DependencyGraphErrors};
pub use errors::{BuildError, InjectError, LookupError};
pub use graph::ObjectGraph;
pub use providers::Provider;
pub use resolver::Resolver;
pub use types::{DependencyInfo, DynError, Injectable, TypeKey};
