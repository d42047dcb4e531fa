//! POSIX Socket Transport
//!
//! Blocking implementation of [`SocketTransport`] on top of the `socket2`
//! crate. Sockets are created in blocking mode and handed to the caller as
//! raw descriptors. Operations on caller-held descriptors borrow the
//! descriptor for the duration of the call without taking ownership.

use std::io::Read;
use std::mem::ManuallyDrop;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::os::unix::io::{FromRawFd, IntoRawFd};

use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use crate::transport::{SocketError, SocketFd, SocketTransport, LISTEN_BACKLOG};

/// Blocking POSIX TCP transport.
///
/// Stateless. Every operation works directly on the descriptors it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixSocket;

impl PosixSocket {
    /// Create a new POSIX transport
    pub fn new() -> Self {
        PosixSocket
    }
}

/// Borrow a caller-owned descriptor as a `socket2::Socket`.
///
/// The wrapper must not close the descriptor when it goes out of scope, so
/// it is returned in `ManuallyDrop`.
fn borrow_socket(fd: SocketFd) -> Result<ManuallyDrop<Socket>, SocketError> {
    if fd < 0 {
        return Err(SocketError::InvalidSocket);
    }
    // Safety: the descriptor stays owned by the caller. ManuallyDrop keeps
    // it open when the wrapper is dropped.
    Ok(ManuallyDrop::new(unsafe { Socket::from_raw_fd(fd) }))
}

impl SocketTransport for PosixSocket {
    /// Create a TCP server socket bound to all interfaces on `port`.
    ///
    /// Sets `SO_REUSEADDR` before binding and listens with a backlog of
    /// [`LISTEN_BACKLOG`] connections.
    fn listen(&self, port: u16) -> Result<SocketFd, SocketError> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;

        let addr = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), port);
        socket.bind(&SockAddr::from(addr))?;
        socket.listen(LISTEN_BACKLOG)?;

        Ok(socket.into_raw_fd())
    }

    fn accept(&self, listener: SocketFd) -> Result<SocketFd, SocketError> {
        let server = borrow_socket(listener)?;
        let (client, _peer) = server.accept()?;
        Ok(client.into_raw_fd())
    }

    /// Resolve `host` synchronously and connect to the first address the
    /// resolver yields.
    fn connect(&self, host: &str, port: u16) -> Result<SocketFd, SocketError> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(SocketError::from)?
            .next()
            .ok_or(SocketError::InvalidAddress)?;

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
        socket.connect(&SockAddr::from(addr))?;

        Ok(socket.into_raw_fd())
    }

    fn send(&self, socket: SocketFd, data: &[u8]) -> Result<usize, SocketError> {
        let socket = borrow_socket(socket)?;
        let sent = socket.send(data)?;
        Ok(sent)
    }

    fn receive(&self, socket: SocketFd, buf: &mut [u8]) -> Result<usize, SocketError> {
        let mut socket = borrow_socket(socket)?;
        let received = socket.read(buf)?;
        Ok(received)
    }

    fn shutdown_write(&self, socket: SocketFd) -> Result<(), SocketError> {
        let socket = borrow_socket(socket)?;
        socket.shutdown(std::net::Shutdown::Write)?;
        Ok(())
    }

    fn close(&self, socket: SocketFd) -> Result<(), SocketError> {
        if socket < 0 {
            return Err(SocketError::InvalidSocket);
        }
        // Ownership returns here; dropping the socket closes the descriptor.
        // Safety: the caller gives up the descriptor by calling close.
        drop(unsafe { Socket::from_raw_fd(socket) });
        Ok(())
    }
}
