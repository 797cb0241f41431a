//! Per-link DNS configuration through `systemd-resolved`.

use crate::bus::{BusConnector, ResolvedBus, SystemBus};
use crate::config::LinkConfig;
use crate::detect::StubDetector;
use crate::error::{ResolvedError, Result};
use crate::iface::{InterfaceResolver, ManagedInterface, NameIndex};
use crate::wire::{link_domains, link_nameservers};
use std::future::Future;
use std::io;
use std::net::IpAddr;

/// Pushes nameservers and search domains for one interface.
///
/// No state is kept between calls: the interface index is looked up and a
/// bus connection is opened on every operation. Calls targeting the same
/// interface must be serialized by the caller, since an apply is two
/// independent remote calls and not a transaction.
///
/// # Example
///
/// ```rust,ignore
/// use resolved_link::{LinkConfig, LinkConfigurator};
///
/// let link = LinkConfigurator::new(LinkConfig::new("tailscale0"));
/// link.apply_dns(&["100.100.100.100".parse()?], &["corp.example."]).await?;
/// // ...
/// link.revert_dns().await?;
/// ```
#[derive(Debug)]
pub struct LinkConfigurator<C = SystemBus, R = NameIndex> {
    config: LinkConfig,
    detector: StubDetector,
    connector: C,
    resolver: R,
}

impl LinkConfigurator {
    /// Creates a configurator using the system bus and `if_nametoindex`.
    #[must_use]
    pub fn new(config: LinkConfig) -> Self {
        Self::with_parts(config, SystemBus, NameIndex)
    }
}

impl<C: BusConnector, R: InterfaceResolver> LinkConfigurator<C, R> {
    /// Creates a configurator with custom bus and interface backends.
    #[must_use]
    pub fn with_parts(config: LinkConfig, connector: C, resolver: R) -> Self {
        let detector = StubDetector::with_path(&config.resolv_conf);
        Self {
            config,
            detector,
            connector,
            resolver,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Returns `true` if `systemd-resolved` currently manages DNS.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.detector.is_active()
    }

    /// Sets the link's nameservers, then its search domains.
    ///
    /// Order is preserved for both lists. If `SetLinkDomains` fails after
    /// `SetLinkDNS` succeeded, the nameservers stay applied; call
    /// [`revert_dns`](Self::revert_dns) to undo them.
    ///
    /// # Errors
    ///
    /// - [`ResolvedError::Timeout`] if the operation exceeds the configured bound.
    /// - [`ResolvedError::NotManaged`] if `systemd-resolved` is not in use.
    /// - [`ResolvedError::InterfaceNotReady`] if the interface does not exist yet.
    /// - [`ResolvedError::InterfaceLookup`] if the interface lookup fails.
    /// - [`ResolvedError::Connect`] if the system bus is unreachable.
    /// - [`ResolvedError::RemoteCall`] if either remote call fails.
    pub async fn apply_dns<S: AsRef<str> + Sync>(
        &self,
        servers: &[IpAddr],
        domains: &[S],
    ) -> Result<()> {
        self.bounded(async {
            let (bus, iface, ifindex) = self.prepare().await?;

            let nameservers = link_nameservers(servers);
            bus.set_link_dns(ifindex, &nameservers)
                .await
                .map_err(|source| ResolvedError::RemoteCall {
                    method: "SetLinkDNS",
                    source,
                })?;
            tracing::debug!(
                interface = %iface.name,
                index = iface.index,
                count = nameservers.len(),
                "Set link nameservers"
            );

            let domains = link_domains(domains);
            if let Err(source) = bus.set_link_domains(ifindex, &domains).await {
                tracing::warn!(
                    interface = %iface.name,
                    error = %source,
                    "Setting link domains failed, nameservers remain applied"
                );
                return Err(ResolvedError::RemoteCall {
                    method: "SetLinkDomains",
                    source,
                });
            }

            tracing::info!(
                interface = %iface.name,
                index = iface.index,
                nameservers = nameservers.len(),
                domains = domains.len(),
                "Applied systemd-resolved link DNS"
            );
            Ok(())
        })
        .await
    }

    /// Reverts every setting previously applied to the link.
    ///
    /// # Errors
    ///
    /// Same as [`apply_dns`](Self::apply_dns), with `RevertLink` as the only
    /// remote call.
    pub async fn revert_dns(&self) -> Result<()> {
        self.bounded(async {
            let (bus, iface, ifindex) = self.prepare().await?;

            bus.revert_link(ifindex)
                .await
                .map_err(|source| ResolvedError::RemoteCall {
                    method: "RevertLink",
                    source,
                })?;

            tracing::info!(
                interface = %iface.name,
                index = iface.index,
                "Reverted systemd-resolved link DNS"
            );
            Ok(())
        })
        .await
    }

    /// Shared preamble: detection, interface lookup, then bus connection.
    async fn prepare(&self) -> Result<(C::Bus, ManagedInterface, i32)> {
        if !self.detector.is_active() {
            return Err(ResolvedError::NotManaged);
        }

        let iface = self.resolve_interface()?;
        let ifindex = i32::try_from(iface.index).map_err(|e| ResolvedError::InterfaceLookup {
            interface: iface.name.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        let bus = self.connector.connect().await.map_err(ResolvedError::Connect)?;
        Ok((bus, iface, ifindex))
    }

    fn resolve_interface(&self) -> Result<ManagedInterface> {
        let name = &self.config.interface;
        match self.resolver.resolve(name) {
            Ok(Some(iface)) => Ok(iface),
            Ok(None) => {
                tracing::debug!(interface = %name, "Interface not present yet");
                Err(ResolvedError::InterfaceNotReady {
                    interface: name.clone(),
                })
            }
            Err(source) => Err(ResolvedError::InterfaceLookup {
                interface: name.clone(),
                source,
            }),
        }
    }

    async fn bounded<F>(&self, op: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        let after = self.config.timeout;
        tokio::time::timeout(after, op)
            .await
            .unwrap_or(Err(ResolvedError::Timeout { after }))
    }
}
