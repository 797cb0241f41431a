//! Link configurator settings.

use std::path::PathBuf;
use std::time::Duration;

/// Interface whose DNS settings are managed by default.
pub const DEFAULT_INTERFACE: &str = "tailscale0";

/// Time within which every operation must complete.
///
/// Some conditions, such as improper D-Bus auth, make an unbounded call hang
/// forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Symlink inspected to decide whether `systemd-resolved` is in charge.
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Settings for a [`LinkConfigurator`](crate::LinkConfigurator).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use resolved_link::LinkConfig;
///
/// let config = LinkConfig::new("wg0").with_timeout(Duration::from_millis(500));
///
/// assert_eq!(config.interface, "wg0");
/// assert_eq!(config.timeout, Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Name of the managed network interface.
    pub interface: String,

    /// Bound on each apply/revert operation, bus calls included.
    pub timeout: Duration,

    /// Path of the resolv.conf symlink.
    pub resolv_conf: PathBuf,
}

impl LinkConfig {
    /// Creates a config for `interface` with the default timeout and path.
    #[must_use]
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            timeout: DEFAULT_TIMEOUT,
            resolv_conf: PathBuf::from(DEFAULT_RESOLV_CONF),
        }
    }

    /// Overrides the operation timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the resolv.conf path (useful for testing).
    #[must_use]
    pub fn with_resolv_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolv_conf = path.into();
        self
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERFACE)
    }
}
