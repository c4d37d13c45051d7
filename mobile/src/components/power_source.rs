/// The battery of a mobile. A leaf of the graph.
#[derive(Debug)]
pub struct PowerSource {
    _private: (),
}

impl PowerSource {
    pub fn new() -> Self {
        tracing::info!("Battery constructed");
        PowerSource { _private: () }
    }
}

impl Default for PowerSource {
    fn default() -> Self {
        Self::new()
    }
}
