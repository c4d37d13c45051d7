use super::device::Device;

/// Receives a notification when it gets attached to a [Device]
///
/// The device is only borrowed for the duration of the call and must not be
/// kept, so no reference cycle can form.
pub trait PowerLink {
    fn associate(&self, device: &Device);
}

/// The charger. A leaf of the graph, attached to the device after it has
/// been constructed.
#[derive(Debug)]
pub struct PowerDelivery {
    _private: (),
}

impl PowerDelivery {
    pub fn new() -> Self {
        tracing::info!("Charger constructed");
        PowerDelivery { _private: () }
    }
}

impl Default for PowerDelivery {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerLink for PowerDelivery {
    fn associate(&self, _device: &Device) {
        tracing::info!("Charger associated with mobile");
    }
}
