//! # resolved-link
//!
//! Push per-interface DNS settings to `systemd-resolved` over D-Bus.
//!
//! When `/etc/resolv.conf` is a symlink to one of the `systemd-resolved`
//! stub files, resolved owns system DNS and accepts per-link nameservers and
//! search domains through `org.freedesktop.resolve1.Manager`. This crate
//! detects that situation, sets or reverts those per-link settings, and
//! bounds every operation with a timeout. Some bus misconfigurations (such
//! as broken auth) would otherwise hang a call forever.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use resolved_link::{LinkConfig, LinkConfigurator, ResolvedError};
//!
//! let link = LinkConfigurator::new(LinkConfig::new("tailscale0"));
//!
//! match link.apply_dns(&["100.100.100.100".parse()?], &["corp.example."]).await {
//!     Ok(()) => {}
//!     // Not using systemd-resolved: fall back to another strategy.
//!     Err(ResolvedError::NotManaged) => replace_resolv_conf()?,
//!     Err(e) if e.is_retryable() => retry_later(),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // On shutdown.
//! link.revert_dns().await?;
//! ```
//!
//! ## Detection
//!
//! Only the stub modes count as "active". A `resolv.conf` pointing at
//! `/run/systemd/resolve/resolv.conf` is reported as inactive, because in
//! that mode per-link settings get no priority over other links. See
//! [`detect`] for the accepted paths.
//!
//! ## Permissions
//!
//! `SetLinkDNS` and friends are guarded by polkit. The caller needs root or
//! `CAP_NET_ADMIN`.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bus;
pub mod config;
pub mod configurator;
pub mod detect;
pub mod error;
pub mod iface;
pub mod wire;

pub use bus::{BusConnector, ResolvedBus, SystemBus};
pub use config::LinkConfig;
pub use configurator::LinkConfigurator;
pub use detect::{StubDetector, is_active};
pub use error::{ResolvedError, Result};
pub use iface::{InterfaceResolver, ManagedInterface, NameIndex};
pub use wire::{LinkDomain, LinkNameserver};
