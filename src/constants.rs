//! Configuration constants for dotdraw
//!
//! Defaults used when neither the caller nor the environment picks a value.

use std::time::Duration;

/// Layout engine configuration
pub mod engine {
    use super::*;

    /// Graphviz program spawned when no other engine is configured
    pub const DEFAULT_PROGRAM: &str = "dot";

    /// Layout algorithm passed as `-K` when none is given
    pub const DEFAULT_LAYOUT: &str = "dot";

    /// Output format passed as `-T` when none is given
    pub const DEFAULT_FORMAT: &str = "png";

    /// How often a running engine is checked for timeout or cancellation
    pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

    /// How long pipe threads get to finish after the engine is killed
    pub const PIPE_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Input discovery configuration
pub mod discovery {
    /// File extensions recognised as graph documents
    pub const DOCUMENT_EXTENSIONS: &[&str] = &["json", "toml"];
}
