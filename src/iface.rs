//! Network interface resolution.

use std::ffi::CString;
use std::io;

/// A network interface that exists on the host right now.
///
/// Interface indices can change between invocations, so a value is only
/// meaningful for the operation that resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedInterface {
    /// Interface name, e.g. `tailscale0`.
    pub name: String,
    /// Kernel interface index.
    pub index: u32,
}

/// Maps an interface name to its index.
pub trait InterfaceResolver: Send + Sync {
    /// Looks up `name`.
    ///
    /// Returns `Ok(None)` when the lookup worked but no such interface
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the lookup mechanism itself fails.
    fn resolve(&self, name: &str) -> io::Result<Option<ManagedInterface>>;
}

/// Resolves interfaces with `if_nametoindex(3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameIndex;

impl InterfaceResolver for NameIndex {
    fn resolve(&self, name: &str) -> io::Result<Option<ManagedInterface>> {
        let c_name = CString::new(name)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // SAFETY: `c_name` is a valid NUL-terminated string that outlives
        // the call.
        let index = unsafe { libc::if_nametoindex(c_name.as_ptr()) };
        if index != 0 {
            return Ok(Some(ManagedInterface {
                name: name.to_string(),
                index,
            }));
        }

        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            Some(libc::ENODEV | libc::ENXIO) => Ok(None),
            _ => Err(err),
        }
    }
}
