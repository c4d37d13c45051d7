use std::sync::Arc;

use crate::{
    app::MobileApplication, components::Device, config::MobileConfig, errors::ScreenError,
};

/// Lifecycle state of a [DeviceScreen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// No device injected yet
    Uninitialized,
    /// Device injected and used
    Ready,
}

/// State handed back by the host when a screen is recreated. Not used.
#[derive(Debug, Default)]
pub struct SavedState;

/// The screen that shows the mobile.
///
/// Moves from [ScreenState::Uninitialized] to [ScreenState::Ready] exactly
/// once, in [DeviceScreen::on_create]. [DeviceScreen::on_destroy] ends it.
#[derive(Debug, Default)]
pub struct DeviceScreen {
    device: Option<Arc<Device>>,
}

impl DeviceScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScreenState {
        match self.device {
            Some(_) => ScreenState::Ready,
            None => ScreenState::Uninitialized,
        }
    }

    /// The injected device, None until the screen is ready
    pub fn device(&self) -> Option<&Arc<Device>> {
        self.device.as_ref()
    }

    pub(crate) fn attach_device(&mut self, device: Arc<Device>) {
        self.device = Some(device);
    }

    /// Builds a graph from `app`, injects this screen and runs the device
    ///
    /// A graph failure leaves the screen uninitialized and is returned to the
    /// host as is.
    pub fn on_create(
        &mut self,
        app: &MobileApplication,
        _saved_state: Option<&SavedState>,
    ) -> Result<(), ScreenError> {
        if self.device.is_some() {
            return Err(ScreenError::AlreadyCreated);
        }

        let component = app.component()?;
        component.inject(self)?;
        tracing::debug!("Screen ready");

        if let Some(device) = &self.device {
            let config = app
                .configs()
                .get_config::<MobileConfig>()
                .unwrap_or_default();
            config.span().in_scope(|| device.perform_action());
        }

        Ok(())
    }

    pub fn on_destroy(self) {
        tracing::debug!(state = ?self.state(), "Screen destroyed");
    }
}
