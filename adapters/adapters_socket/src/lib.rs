//! Adapters Layer: Socket Transport
//!
//! Blocking TCP networking support for the host execution engine. This crate
//! defines the transport contract the networking natives are written against
//! and a POSIX implementation built on the `socket2` crate.
//!
//! ## Overview
//!
//! The `adapters_socket` crate provides:
//! - **`SocketTransport`**: the blocking transport contract (listen, accept,
//!   connect, send, receive, shutdown, close)
//! - **`PosixSocket`**: the blocking implementation over raw descriptors
//! - **`SocketError`**: error type shared by every transport operation
//!
//! Sockets cross this boundary as raw descriptors so the host engine can
//! hold them in plain integer slots. Whoever holds a descriptor owns it and
//! gives it back through `close`.
//!
//! ## See Also
//!
//! - [`adapters_net`](../adapters_net/index.html): stack-machine natives
//!   built on this transport

pub mod posix;
pub mod transport;

pub use posix::PosixSocket;
pub use transport::{SocketError, SocketFd, SocketTransport, LISTEN_BACKLOG};
