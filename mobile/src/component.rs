use std::sync::Arc;

use mobile_config::ConfigProvider;
use mobile_di::{BuildError, GraphBuilder, LookupError, ObjectGraph};

use crate::{components::Device, module, screen::DeviceScreen};

/// A built mobile graph, ready to inject screens
#[derive(Debug, Clone)]
pub struct MobileComponent {
    graph: ObjectGraph,
}

impl MobileComponent {
    /// The default bindings, reading settings from `configs`
    pub fn builder(configs: ConfigProvider) -> GraphBuilder {
        module::install(GraphBuilder::new().bind_instance(configs))
    }

    /// Builds the default graph
    pub fn create(configs: ConfigProvider) -> Result<Self, BuildError> {
        Self::from_builder(Self::builder(configs))
    }

    /// Builds a graph from arbitrary bindings
    ///
    /// Fails before anything is constructed if a binding is missing.
    pub fn from_builder(builder: GraphBuilder) -> Result<Self, BuildError> {
        let graph = builder.build_blocking()?;
        tracing::debug!("Mobile component ready: {graph:?}");
        Ok(MobileComponent { graph })
    }

    /// The fully wired device
    pub fn device(&self) -> Result<Arc<Device>, LookupError> {
        self.graph.get::<Device>()
    }

    /// Populates the device of `screen`
    pub fn inject(&self, screen: &mut DeviceScreen) -> Result<(), LookupError> {
        let device = self.device()?;
        screen.attach_device(device);
        Ok(())
    }
}
