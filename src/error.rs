//! Error types.

use std::time::Duration;
use thiserror::Error;

/// Result alias for link DNS operations.
pub type Result<T> = std::result::Result<T, ResolvedError>;

/// Errors returned by link DNS operations.
#[derive(Debug, Error)]
pub enum ResolvedError {
    /// `systemd-resolved` does not own `/etc/resolv.conf`.
    ///
    /// This is an expected outcome: the caller should fall back to another
    /// DNS configuration strategy.
    #[error("systemd-resolved is not in use")]
    NotManaged,

    /// The managed interface is not visible to the host yet.
    #[error("interface not ready: {interface}")]
    InterfaceNotReady {
        /// Name of the interface that was looked up.
        interface: String,
    },

    /// The operation did not complete within its time bound.
    #[error("timed out after {after:?}")]
    Timeout {
        /// The bound that elapsed.
        after: Duration,
    },

    /// A remote method call failed in transport or was rejected by the service.
    #[error("{method}: {source}")]
    RemoteCall {
        /// D-Bus method name of the failing step.
        method: &'static str,
        /// Underlying bus error.
        #[source]
        source: zbus::Error,
    },

    /// The interface lookup mechanism itself failed.
    #[error("getting interface index for {interface}: {source}")]
    InterfaceLookup {
        /// Name of the interface that was looked up.
        interface: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The system bus could not be reached.
    #[error("connecting to system bus: {0}")]
    Connect(#[source] zbus::Error),
}

impl ResolvedError {
    /// Returns `true` for transient failures worth retrying later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::InterfaceNotReady { .. } | Self::Timeout { .. })
    }

    /// Returns `true` if the caller should fall back to another strategy.
    #[must_use]
    pub const fn is_not_managed(&self) -> bool {
        matches!(self, Self::NotManaged)
    }
}
