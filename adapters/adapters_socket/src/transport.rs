//! Socket Transport Contract
//!
//! Defines the blocking transport interface the networking natives delegate
//! to, along with the error type shared by every transport operation.
//! Connected and listening sockets travel across this boundary as raw
//! descriptors so the host engine can hold them in plain integer slots.

use std::io;

/// Raw socket descriptor as held by the host engine.
///
/// Descriptors cross the native boundary as plain integers. A negative value
/// never names a live socket.
pub type SocketFd = i32;

/// Number of pending connections a listening socket queues.
pub const LISTEN_BACKLOG: i32 = 128;

/// Socket error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketError {
    /// Invalid or unresolvable address
    InvalidAddress,
    /// Address already in use
    AddressInUse,
    /// Connection refused
    ConnectionRefused,
    /// Connection reset
    ConnectionReset,
    /// Connection aborted
    ConnectionAborted,
    /// Timeout
    Timeout,
    /// Invalid socket descriptor
    InvalidSocket,
    /// I/O error
    IoError(String),
}

impl From<io::Error> for SocketError {
    fn from(err: io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::AddrInUse => SocketError::AddressInUse,
            ErrorKind::ConnectionRefused => SocketError::ConnectionRefused,
            ErrorKind::ConnectionReset => SocketError::ConnectionReset,
            ErrorKind::ConnectionAborted => SocketError::ConnectionAborted,
            ErrorKind::TimedOut => SocketError::Timeout,
            _ => SocketError::IoError(err.to_string()),
        }
    }
}

impl std::fmt::Display for SocketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocketError::InvalidAddress => write!(f, "Invalid address"),
            SocketError::AddressInUse => write!(f, "Address already in use"),
            SocketError::ConnectionRefused => write!(f, "Connection refused"),
            SocketError::ConnectionReset => write!(f, "Connection reset"),
            SocketError::ConnectionAborted => write!(f, "Connection aborted"),
            SocketError::Timeout => write!(f, "Timeout"),
            SocketError::InvalidSocket => write!(f, "Invalid socket descriptor"),
            SocketError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SocketError {}

/// Blocking TCP transport used by the networking natives.
///
/// Every method blocks the calling thread until the operation completes or
/// fails. Implementations hand sockets out as raw descriptors; the caller
/// owns a descriptor from the moment it is returned and gives it back
/// through [`SocketTransport::close`].
pub trait SocketTransport {
    /// Create a TCP server socket, bind it to `port`, and start listening.
    ///
    /// # Arguments
    ///
    /// * `port` - Local port to bind, 0 for an ephemeral port
    ///
    /// # Returns
    ///
    /// * `Ok(SocketFd)` - Descriptor of the listening socket
    /// * `Err(SocketError)` - Error creating, binding, or listening
    fn listen(&self, port: u16) -> Result<SocketFd, SocketError>;

    /// Accept an incoming connection on a listening socket.
    ///
    /// Blocks until a client connects.
    fn accept(&self, listener: SocketFd) -> Result<SocketFd, SocketError>;

    /// Connect to a remote host and port.
    ///
    /// Resolves `host` synchronously and connects to the first address the
    /// resolver yields.
    fn connect(&self, host: &str, port: u16) -> Result<SocketFd, SocketError>;

    /// Send bytes on a connected socket.
    ///
    /// Performs a single write. Returns the number of bytes the kernel
    /// accepted, which may be less than `data.len()`.
    fn send(&self, socket: SocketFd, data: &[u8]) -> Result<usize, SocketError>;

    /// Receive bytes from a connected socket into `buf`.
    ///
    /// Performs a single read. Returns the number of bytes received; zero
    /// means the peer closed its write half.
    fn receive(&self, socket: SocketFd, buf: &mut [u8]) -> Result<usize, SocketError>;

    /// Shut down the write half of a socket, signalling EOF to the peer.
    fn shutdown_write(&self, socket: SocketFd) -> Result<(), SocketError>;

    /// Close a socket descriptor.
    fn close(&self, socket: SocketFd) -> Result<(), SocketError>;
}
