use std::sync::Arc;

use super::{ComputeUnit, PowerLink, PowerSource};

/// The mobile itself, composed of a battery and a processor.
///
/// Both parts are set once on construction and never change, so a device is
/// never seen without them.
#[derive(Debug)]
pub struct Device {
    power: Arc<PowerSource>,
    compute: Arc<ComputeUnit>,
}

impl Device {
    pub fn new(power: Arc<PowerSource>, compute: Arc<ComputeUnit>) -> Self {
        tracing::info!("Mobile constructed");
        Device { power, compute }
    }

    pub fn power_source(&self) -> &Arc<PowerSource> {
        &self.power
    }

    pub fn compute_unit(&self) -> &Arc<ComputeUnit> {
        &self.compute
    }

    /// The behaviour of the mobile, emits a single diagnostic event
    pub fn perform_action(&self) {
        tracing::info!("Mobile action performed");
    }

    /// Post construction injection point for the charger.
    ///
    /// Hands a borrow of this device to `delivery` exactly once.
    pub fn attach_power<L: PowerLink + ?Sized>(&self, delivery: &L) {
        delivery.associate(self);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::components::PowerDelivery;

    /// Remembers which devices it was associated with
    #[derive(Default)]
    struct RecordingLink {
        seen: RefCell<Vec<*const Device>>,
    }
    impl PowerLink for RecordingLink {
        fn associate(&self, device: &Device) {
            self.seen.borrow_mut().push(device as *const Device);
        }
    }

    fn device() -> Device {
        Device::new(Arc::new(PowerSource::new()), Arc::new(ComputeUnit::new()))
    }

    #[test]
    fn keeps_the_exact_parts_it_was_given() {
        let power = Arc::new(PowerSource::new());
        let compute = Arc::new(ComputeUnit::new());

        let device = Device::new(power.clone(), compute.clone());

        assert!(Arc::ptr_eq(device.power_source(), &power));
        assert!(Arc::ptr_eq(device.compute_unit(), &compute));
    }

    #[test]
    fn attach_power_associates_once_with_itself() {
        let device = device();
        let link = RecordingLink::default();

        device.attach_power(&link);

        let seen = link.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(std::ptr::eq(seen[0], &device));
    }

    #[test]
    fn attach_power_leaves_parts_untouched() {
        let device = device();
        let power = device.power_source().clone();
        let compute = device.compute_unit().clone();

        device.attach_power(&PowerDelivery::new());
        device.attach_power(&RecordingLink::default());

        assert!(Arc::ptr_eq(device.power_source(), &power));
        assert!(Arc::ptr_eq(device.compute_unit(), &compute));
    }

    #[test]
    fn attach_power_accepts_trait_objects() {
        let device = device();
        let link = RecordingLink::default();
        let dyn_link: &dyn PowerLink = &link;

        device.attach_power(dyn_link);

        assert_eq!(link.seen.borrow().len(), 1);
    }
}
