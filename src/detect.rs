//! Detection of `systemd-resolved` ownership of `/etc/resolv.conf`.
//!
//! `systemd-resolved` documents these modes, roughly from best to worst:
//!
//! 1. `/usr/lib/systemd/resolv.conf`
//! 2. `/run/systemd/resolve/stub-resolv.conf`
//! 3. `/run/systemd/resolve/resolv.conf`
//!
//! Mode (3) is not supported. There, resolved does not proxy queries. It
//! publishes a flat list of every link's nameservers instead. Another link
//! can then answer NXDOMAIN before our servers get asked, so that mode is
//! treated as "not active" and the caller falls back to another strategy.
//!
//! For (1) and (2), the literal paths and their variants are accepted,
//! because `/lib` may be a symlink to `/usr/lib` and `/var/run` to `/run`.

use crate::config::DEFAULT_RESOLV_CONF;
use std::path::{Path, PathBuf};

/// Locations of the `systemd-resolved` stub resolv.conf files.
pub const SYSTEMD_STUB_PATHS: &[&str] = &[
    "/lib/systemd/resolv.conf",
    "/usr/lib/systemd/resolv.conf",
    "/run/systemd/resolve/stub-resolv.conf",
    "/var/run/systemd/resolve/stub-resolv.conf",
];

/// Decides whether `systemd-resolved` is managing system DNS settings.
#[derive(Debug, Clone)]
pub struct StubDetector {
    link: PathBuf,
}

impl StubDetector {
    /// Creates a detector inspecting `/etc/resolv.conf`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(DEFAULT_RESOLV_CONF)
    }

    /// Creates a detector inspecting a custom symlink (useful for testing).
    #[must_use]
    pub fn with_path(link: impl Into<PathBuf>) -> Self {
        Self { link: link.into() }
    }

    /// Returns the inspected symlink path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.link
    }

    /// Returns the raw symlink target, or `None` if it cannot be read.
    #[must_use]
    pub fn target(&self) -> Option<PathBuf> {
        match std::fs::read_link(&self.link) {
            Ok(target) => Some(target),
            Err(e) => {
                tracing::debug!(
                    path = %self.link.display(),
                    error = %e,
                    "Cannot read resolv.conf link"
                );
                None
            }
        }
    }

    /// Returns `true` if the link points at a known stub resolv.conf.
    ///
    /// Never fails: an unreadable link, a missing file, or a regular file
    /// all mean "not active".
    #[must_use]
    pub fn is_active(&self) -> bool {
        let Some(target) = self.target() else {
            return false;
        };

        let active = is_stub_path(&target);
        tracing::debug!(
            path = %self.link.display(),
            target = %target.display(),
            active,
            "Checked systemd-resolved stub link"
        );
        active
    }
}

impl Default for StubDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether `/etc/resolv.conf` points at a `systemd-resolved` stub.
#[must_use]
pub fn is_active() -> bool {
    StubDetector::new().is_active()
}

/// Exact, unnormalized comparison against [`SYSTEMD_STUB_PATHS`].
fn is_stub_path(target: &Path) -> bool {
    SYSTEMD_STUB_PATHS
        .iter()
        .any(|stub| target.as_os_str() == *stub)
}
