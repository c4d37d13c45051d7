use mobile_di::{BuildError, LookupError};
use thiserror::Error;

/// Errors while bringing up a [crate::screen::DeviceScreen]
///
/// All of these are fatal to the screen.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The object graph could not be built
    #[error("Failed to build the mobile graph: {0}")]
    Build(#[from] BuildError),
    /// The graph was built but has no device
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The screen was already created once
    #[error("The screen has already been created")]
    AlreadyCreated,
}
