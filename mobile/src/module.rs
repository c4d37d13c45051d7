//! Bindings of the mobile graph.
//!
//! Every part is constructed by a plain function or constructor. The
//! providers below only resolve inputs from the graph and call them inside
//! the span of the configured [MobileConfig::tag].

use std::sync::Arc;

use mobile_config::Config;
use mobile_di::{DependencyInfo, DynError, GraphBuilder, InjectionHandle, Provider, Resolver};

use crate::{
    components::{ComputeUnit, Device, PowerDelivery, PowerLink, PowerSource},
    config::MobileConfig,
};

/// Composes a device from its parts
pub fn build_device(power: Arc<PowerSource>, compute: Arc<ComputeUnit>) -> Device {
    Device::new(power, compute)
}

/// Runs the device's post construction injection with the given charger
pub fn wire_charger<L: PowerLink + ?Sized>(device: &Device, delivery: &L) {
    device.attach_power(delivery);
}

/// Binds every part of a mobile.
///
/// The builder must also hold a [mobile_config::ConfigProvider] with a
/// [MobileConfig].
pub fn install(builder: GraphBuilder) -> GraphBuilder {
    builder
        .bind(PowerSourceProvider)
        .bind(ComputeUnitProvider)
        .bind(DeviceProvider)
}

pub struct PowerSourceProvider;
impl Provider for PowerSourceProvider {
    type Provides = PowerSource;

    fn dependencies() -> Vec<DependencyInfo> {
        vec![Config::<MobileConfig>::dependency_info()]
    }

    async fn provide(&mut self, mut handle: InjectionHandle) -> Result<PowerSource, DynError> {
        let config = handle.resolve::<Config<MobileConfig>>().await?;
        Ok(config.span().in_scope(PowerSource::new))
    }
}

pub struct ComputeUnitProvider;
impl Provider for ComputeUnitProvider {
    type Provides = ComputeUnit;

    fn dependencies() -> Vec<DependencyInfo> {
        vec![Config::<MobileConfig>::dependency_info()]
    }

    async fn provide(&mut self, mut handle: InjectionHandle) -> Result<ComputeUnit, DynError> {
        let config = handle.resolve::<Config<MobileConfig>>().await?;
        Ok(config.span().in_scope(ComputeUnit::new))
    }
}

/// Builds the device, then constructs a charger and attaches it
///
/// The charger is not bound in the graph, every device gets its own.
pub struct DeviceProvider;
impl Provider for DeviceProvider {
    type Provides = Device;

    fn dependencies() -> Vec<DependencyInfo> {
        vec![
            Config::<MobileConfig>::dependency_info(),
            Arc::<PowerSource>::dependency_info(),
            Arc::<ComputeUnit>::dependency_info(),
        ]
    }

    async fn provide(&mut self, mut handle: InjectionHandle) -> Result<Device, DynError> {
        let config = handle.resolve::<Config<MobileConfig>>().await?;
        let power = handle.resolve::<Arc<PowerSource>>().await?;
        let compute = handle.resolve::<Arc<ComputeUnit>>().await?;

        let device = config.span().in_scope(|| {
            let device = build_device(power, compute);
            let charger = PowerDelivery::new();
            tracing::debug!("Attaching charger to mobile");
            wire_charger(&device, &charger);
            device
        });

        Ok(device)
    }
}
