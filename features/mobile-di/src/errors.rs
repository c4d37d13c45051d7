use std::sync::Arc;

use futures_channel::{mpsc, oneshot};
use thiserror::Error;

use crate::{dependency_graph::DependencyGraphErrors, types::DynError};

/// Errors while a provider resolves one of its dependencies
#[derive(Error, Debug)]
pub enum InjectError {
    /// Could not look up the type
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Injection handle channel was closed
    #[error("Handle was closed, did you try using it after the graph was built?")]
    HandleClosed,
}
impl From<mpsc::SendError> for InjectError {
    fn from(_: mpsc::SendError) -> Self {
        Self::HandleClosed
    }
}
impl From<oneshot::Canceled> for InjectError {
    fn from(_: oneshot::Canceled) -> Self {
        Self::HandleClosed
    }
}

/// Errors when asking for a bound type
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    /// No binding exists for the type
    #[error("No binding for '{0}'")]
    TypeMissing(&'static str),
    /// A provider asked for a type it did not declare as a dependency
    #[error("'{required_by}' requires '{dependency}' but did not declare it")]
    Undeclared {
        dependency: &'static str,
        required_by: &'static str,
    },
    /// The graph failed to build
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors while building the object graph
#[derive(Error, Debug, Clone)]
pub enum BuildError {
    /// The bindings do not form a valid graph
    #[error(transparent)]
    DependencyGraph(#[from] DependencyGraphErrors),

    /// A provider failed
    #[error("Provider for '{product}' failed - error: {error}")]
    ProviderFailed {
        product: &'static str,
        error: Arc<DynError>,
    },
}
