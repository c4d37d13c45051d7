pub mod compute_unit;
pub mod device;
pub mod power_delivery;
pub mod power_source;

pub use compute_unit::ComputeUnit;
pub use device::Device;
pub use power_delivery::{PowerDelivery, PowerLink};
pub use power_source::PowerSource;
