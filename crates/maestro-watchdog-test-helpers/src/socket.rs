//! Unix datagram fixtures.

use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

/// Receiving end standing in for the device watchdog process.
///
/// Binds a Unix datagram socket inside its own temporary directory; the
/// directory (and socket file) go away when the sink is dropped.
#[derive(Debug)]
pub struct DatagramSink {
    socket: UnixDatagram,
    path: PathBuf,
    _dir: TempDir,
}

impl DatagramSink {
    /// Bind a fresh sink with a one second receive timeout.
    pub fn bind() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("wd.sock");
        let socket = UnixDatagram::bind(&path)?;
        socket.set_read_timeout(Some(Duration::from_secs(1)))?;
        Ok(Self {
            socket,
            path,
            _dir: dir,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as a string, ready for `WatchdogConfig::opt1`.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Block (up to the read timeout) for the next datagram.
    pub fn recv_message(&self) -> io::Result<String> {
        let mut buf = [0u8; 256];
        let n = self.socket.recv(&mut buf)?;
        Ok(String::from_utf8_lossy(buf.get(..n).unwrap_or_default()).into_owned())
    }

    /// Take the next datagram if one is already queued.
    pub fn try_recv_message(&self) -> io::Result<Option<String>> {
        self.socket.set_nonblocking(true)?;
        let result = self.recv_message();
        self.socket.set_nonblocking(false)?;
        match result {
            Ok(msg) => Ok(Some(msg)),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Every datagram currently queued, in arrival order.
    pub fn drain(&self) -> io::Result<Vec<String>> {
        let mut out = Vec::new();
        while let Some(msg) = self.try_recv_message()? {
            out.push(msg);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_receives_datagrams() -> io::Result<()> {
        let sink = DatagramSink::bind()?;
        let client = UnixDatagram::unbound()?;
        client.connect(sink.path())?;

        client.send(b"up 90")?;
        client.send(b"up 90")?;

        assert_eq!(sink.recv_message()?, "up 90");
        assert_eq!(sink.drain()?, vec!["up 90".to_string()]);
        assert_eq!(sink.try_recv_message()?, None);
        Ok(())
    }
}
