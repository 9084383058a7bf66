//! Configuration constants for the mullion widget toolkit.

use std::time::Duration;

/// Maximum number of widgets a single toolkit instance is expected to manage.
pub const MAX_WIDGETS: usize = 1024;

/// Name of the theme applied when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Timeout applied to toolkit operations when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration snapshot for the mullion widget toolkit.
///
/// Immutable after construction; build one at startup and pass it down.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_widgets: usize,
    pub theme: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_widgets: MAX_WIDGETS,
            theme: DEFAULT_THEME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
