use std::{any::type_name, ops::Deref, sync::Arc};

use mobile_di::{DependencyInfo, InjectError, InjectionHandle, LookupError, Resolver};

use crate::provider::ConfigProvider;

/// Injects a config out of the [ConfigProvider] bound in the graph
///
/// # Example
/// ```rust
/// use mobile_config::{Config, ConfigProvider};
/// use mobile_di::{DependencyInfo, DynError, GraphBuilder, InjectionHandle, Provider, Resolver};
///
/// struct Greeting(String);
///
/// struct Greeter {
///     line: String,
/// }
/// struct GreeterProvider;
/// impl Provider for GreeterProvider {
///     type Provides = Greeter;
///
///     fn dependencies() -> Vec<DependencyInfo> {
///         vec![Config::<Greeting>::dependency_info()]
///     }
///
///     async fn provide(&mut self, mut handle: InjectionHandle) -> Result<Greeter, DynError> {
///         let greeting = handle.resolve::<Config<Greeting>>().await?;
///         Ok(Greeter { line: greeting.0.clone() })
///     }
/// }
///
/// let mut configs = ConfigProvider::new();
/// configs.add_config(Greeting("hello".into())).unwrap();
///
/// let graph = GraphBuilder::new()
///     .bind_instance(configs)
///     .bind(GreeterProvider)
///     .build_blocking()
///     .unwrap();
/// assert_eq!(graph.get::<Greeter>().unwrap().line, "hello");
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T: Send + Sync + 'static> Resolver for Config<T> {
    async fn resolve(handle: &mut InjectionHandle) -> Result<Self, InjectError>
    where
        Self: Sized,
    {
        let config_provider = handle.resolve::<Arc<ConfigProvider>>().await?;

        let inner = config_provider
            .get_config()
            .ok_or(LookupError::TypeMissing(type_name::<T>()))?;

        Ok(Config { inner })
    }

    /// Configs live inside the [ConfigProvider], so that is what the graph needs
    fn dependency_info() -> DependencyInfo {
        DependencyInfo::of::<ConfigProvider>()
    }
}
