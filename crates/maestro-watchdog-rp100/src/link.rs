//! Transport to the device watchdog process.

use std::fmt;
use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::Path;

/// One-way datagram channel to the device watchdog.
///
/// Implemented for `UnixDatagram`; tests substitute links that fail or
/// write short.
pub trait KeepaliveLink: Send + fmt::Debug {
    /// Send one datagram, returning how many bytes went out.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn send_datagram(&mut self, buf: &[u8]) -> io::Result<usize>;
}

impl KeepaliveLink for UnixDatagram {
    fn send_datagram(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send(buf)
    }
}

/// Opens a link to the socket at the given path.
pub type Dialer = Box<dyn Fn(&Path) -> io::Result<Box<dyn KeepaliveLink>> + Send>;

/// Connect an unbound Unix datagram socket to `path`.
///
/// # Errors
///
/// Fails if the socket cannot be created or nothing is bound at `path`.
pub fn dial_unix(path: &Path) -> io::Result<Box<dyn KeepaliveLink>> {
    let socket = UnixDatagram::unbound()?;
    socket.connect(path)?;
    Ok(Box::new(socket))
}
