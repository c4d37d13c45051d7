use std::future::Future;

use crate::{
    assembler::InjectionHandle,
    types::{DependencyInfo, DynError, Injectable, Instance, TypeKey},
};

/// Provides instances of a single type
pub trait Provider: Send + Sync {
    type Provides: Injectable;

    /// The key this provider is bound under
    fn provides() -> TypeKey {
        TypeKey::of::<Self::Provides>()
    }

    /// Every type the provider resolves while constructing its product
    ///
    /// Used to validate the graph before any provider runs.
    fn dependencies() -> Vec<DependencyInfo>;

    /// Constructs the provided type, resolving dependencies through the handle
    fn provide(
        &mut self,
        handle: InjectionHandle,
    ) -> impl Future<Output = Result<Self::Provides, DynError>> + Send + '_;
}

/// Object safe form of [Provider], producing type erased instances
pub trait DynProvider {
    fn provides(&self) -> TypeKey;

    fn dependencies(&self) -> Vec<DependencyInfo>;

    fn provide(
        &mut self,
        handle: InjectionHandle,
    ) -> Box<dyn Future<Output = Result<Instance, DynError>> + Send + '_>;
}
impl<T: Injectable, P: Provider<Provides = T>> DynProvider for P {
    fn provides(&self) -> TypeKey {
        <P as Provider>::provides()
    }

    fn dependencies(&self) -> Vec<DependencyInfo> {
        <P as Provider>::dependencies()
    }

    fn provide(
        &mut self,
        handle: InjectionHandle,
    ) -> Box<dyn Future<Output = Result<Instance, DynError>> + Send + '_> {
        let provide_fut = async move {
            <P as Provider>::provide(self, handle)
                .await
                .map(Instance::new)
        };

        Box::new(provide_fut)
    }
}
