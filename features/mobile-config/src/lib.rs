//! Type keyed configs which can be injected into an object graph.
//!
//! Consists of two parts:
//! 1. [ConfigProvider]: the registry holding one config per type
//! 2. [Config]: a [mobile_di::Resolver] pulling a config out of the registry
//!    bound in the graph
//!
//! ```rust
//! use mobile_config::ConfigProvider;
//!
//! struct ScreenConfig {
//!     title: String,
//! }
//!
//! let mut configs = ConfigProvider::new();
//! configs
//!     .add_config(ScreenConfig { title: "Dagger".into() })
//!     .unwrap();
//!
//! let screen = configs.get_config::<ScreenConfig>().unwrap();
//! assert_eq!(screen.title, "Dagger");
//! ```

pub mod config;
pub mod errors;
pub mod provider;

pub use config::Config;
pub use errors::ConfigError;
pub use provider::ConfigProvider;
