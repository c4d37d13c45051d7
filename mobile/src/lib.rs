//! A mobile assembled from a battery, a processor and a charger, wired by an
//! explicit object graph and injected into a screen.
//!
//! ```rust
//! use mobile::{config::MobileConfig, DeviceScreen, MobileApplication, ScreenState};
//! use mobile_config::ConfigProvider;
//!
//! let mut configs = ConfigProvider::new();
//! configs.add_config(MobileConfig::default()).unwrap();
//! let app = MobileApplication::new(configs);
//!
//! let mut screen = DeviceScreen::new();
//! screen.on_create(&app, None).unwrap();
//! assert_eq!(screen.state(), ScreenState::Ready);
//! ```

pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod module;
pub mod screen;

pub use app::MobileApplication;
pub use component::MobileComponent;
pub use components::{ComputeUnit, Device, PowerDelivery, PowerLink, PowerSource};
pub use errors::ScreenError;
pub use screen::{DeviceScreen, SavedState, ScreenState};
