/// The processor of a mobile. A leaf of the graph.
#[derive(Debug)]
pub struct ComputeUnit {
    _private: (),
}

impl ComputeUnit {
    pub fn new() -> Self {
        tracing::info!("Processor constructed");
        ComputeUnit { _private: () }
    }
}

impl Default for ComputeUnit {
    fn default() -> Self {
        Self::new()
    }
}
