//! D-Bus access to `systemd-resolved`.
//!
//! [`ResolvedBus`] exposes exactly the three link methods this crate needs,
//! and [`BusConnector`] hands out a fresh one per operation. [`SystemBus`]
//! is the real implementation on top of the system bus.

use crate::wire::{LinkDomain, LinkNameserver};
use async_trait::async_trait;
use zbus::{Connection, proxy};

/// `systemd-resolved` manager object.
///
/// Only the per-link methods used for DNS configuration are declared.
#[proxy(
    default_service = "org.freedesktop.resolve1",
    default_path = "/org/freedesktop/resolve1",
    interface = "org.freedesktop.resolve1.Manager"
)]
pub trait Resolve1Manager {
    /// Sets the DNS servers of a link.
    ///
    /// # Arguments
    /// * `ifindex` - Kernel interface index
    /// * `addresses` - Ordered `(family, address)` pairs
    #[zbus(name = "SetLinkDNS")]
    fn set_link_dns(&self, ifindex: i32, addresses: &[LinkNameserver]) -> zbus::Result<()>;

    /// Sets the search and routing domains of a link.
    ///
    /// # Arguments
    /// * `ifindex` - Kernel interface index
    /// * `domains` - Ordered `(domain, routing_only)` pairs
    #[zbus(name = "SetLinkDomains")]
    fn set_link_domains(&self, ifindex: i32, domains: &[LinkDomain]) -> zbus::Result<()>;

    /// Drops all per-link settings, restoring the service defaults.
    #[zbus(name = "RevertLink")]
    fn revert_link(&self, ifindex: i32) -> zbus::Result<()>;
}

/// The remote methods of `systemd-resolved` used by this crate.
#[async_trait]
pub trait ResolvedBus: Send + Sync {
    /// Calls `SetLinkDNS`.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the call fails in transport or is rejected.
    async fn set_link_dns(&self, ifindex: i32, servers: &[LinkNameserver]) -> zbus::Result<()>;

    /// Calls `SetLinkDomains`.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the call fails in transport or is rejected.
    async fn set_link_domains(&self, ifindex: i32, domains: &[LinkDomain]) -> zbus::Result<()>;

    /// Calls `RevertLink`.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the call fails in transport or is rejected.
    async fn revert_link(&self, ifindex: i32) -> zbus::Result<()>;
}

/// Acquires a [`ResolvedBus`] scoped to one operation.
#[async_trait]
pub trait BusConnector: Send + Sync {
    /// Bus handle type.
    type Bus: ResolvedBus;

    /// Opens a connection.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the connection or authentication fails.
    async fn connect(&self) -> zbus::Result<Self::Bus>;
}

/// Connects to `systemd-resolved` on the system bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBus;

#[async_trait]
impl BusConnector for SystemBus {
    type Bus = ResolvedManager;

    async fn connect(&self) -> zbus::Result<ResolvedManager> {
        let connection = Connection::system().await?;
        let proxy = Resolve1ManagerProxy::new(&connection).await?;
        Ok(ResolvedManager { proxy })
    }
}

/// [`ResolvedBus`] backed by a live `org.freedesktop.resolve1` proxy.
#[derive(Debug, Clone)]
pub struct ResolvedManager {
    proxy: Resolve1ManagerProxy<'static>,
}

#[async_trait]
impl ResolvedBus for ResolvedManager {
    async fn set_link_dns(&self, ifindex: i32, servers: &[LinkNameserver]) -> zbus::Result<()> {
        self.proxy.set_link_dns(ifindex, servers).await
    }

    async fn set_link_domains(&self, ifindex: i32, domains: &[LinkDomain]) -> zbus::Result<()> {
        self.proxy.set_link_domains(ifindex, domains).await
    }

    async fn revert_link(&self, ifindex: i32) -> zbus::Result<()> {
        self.proxy.revert_link(ifindex).await
    }
}
