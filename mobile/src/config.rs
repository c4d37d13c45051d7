/// Settings of the mobile graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileConfig {
    /// Tag attached to diagnostics emitted while wiring the graph
    pub tag: String,
}

impl MobileConfig {
    /// Span carrying the tag, enter it around anything that emits diagnostics
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!("mobile", tag = %self.tag)
    }
}

impl Default for MobileConfig {
    fn default() -> Self {
        MobileConfig {
            tag: "Dagger2".to_string(),
        }
    }
}

/// Settings of the log output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl LogConfig {
    pub fn new(verbose: bool, json: bool) -> Self {
        let filter = if verbose { "mobile=debug" } else { "mobile=info" };
        LogConfig {
            filter: filter.to_string(),
            json,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}
