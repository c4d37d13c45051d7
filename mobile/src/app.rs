use mobile_config::ConfigProvider;
use mobile_di::{BuildError, GraphBuilder};

use crate::{component::MobileComponent, module};

/// Installs bindings on a builder
pub type Module = fn(GraphBuilder) -> GraphBuilder;

/// Startup context of the application.
///
/// Constructed once and passed to every screen that needs a graph.
pub struct MobileApplication {
    configs: ConfigProvider,
    module: Module,
}

impl MobileApplication {
    pub fn new(configs: ConfigProvider) -> Self {
        MobileApplication {
            configs,
            module: module::install,
        }
    }

    /// Replaces the bindings used for every component
    pub fn with_module(mut self, module: Module) -> Self {
        self.module = module;
        self
    }

    pub fn configs(&self) -> &ConfigProvider {
        &self.configs
    }

    /// Builds a fresh component for one screen
    pub fn component(&self) -> Result<MobileComponent, BuildError> {
        let builder = GraphBuilder::new().bind_instance(self.configs.clone());
        MobileComponent::from_builder((self.module)(builder))
    }
}
