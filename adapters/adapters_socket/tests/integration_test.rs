//! Integration tests for adapters_socket crate
//!
//! These tests verify the transport contract end-to-end over real sockets
//! on the loopback interface.

use adapters_socket::*;
use std::mem::ManuallyDrop;
use std::os::unix::io::FromRawFd;
use std::thread;

/// Recover the port a listening descriptor was bound to.
fn local_port(fd: SocketFd) -> u16 {
    // Safety: test-only view of a descriptor the test still owns.
    let socket = ManuallyDrop::new(unsafe { socket2::Socket::from_raw_fd(fd) });
    socket.local_addr().unwrap().as_socket().unwrap().port()
}

#[test]
fn test_socket_error_variants() {
    let errors = vec![
        SocketError::InvalidAddress,
        SocketError::AddressInUse,
        SocketError::ConnectionRefused,
        SocketError::Timeout,
        SocketError::InvalidSocket,
    ];

    for error in errors {
        let _ = format!("{:?}", error);
        let _ = error.to_string();
    }
}

#[test]
fn test_socket_error_from_io_error() {
    use std::io;
    let io_error = io::Error::new(io::ErrorKind::AddrInUse, "test");
    let socket_error: SocketError = io_error.into();

    match socket_error {
        SocketError::AddressInUse => {}
        _ => panic!("Expected AddressInUse"),
    }
}

#[test]
fn test_listen_backlog_constant() {
    assert_eq!(LISTEN_BACKLOG, 128);
}

#[test]
fn test_transport_round_trip() {
    fn run<T: SocketTransport + Copy + Send + 'static>(transport: T) {
        let listener = transport.listen(0).unwrap();
        let port = local_port(listener);

        let sender = thread::spawn(move || {
            let client = transport.connect("127.0.0.1", port).unwrap();
            transport.send(client, b"ping").unwrap();
            transport.shutdown_write(client).unwrap();

            let mut buf = [0u8; 16];
            let received = transport.receive(client, &mut buf).unwrap();
            assert_eq!(&buf[..received], b"pong");
            transport.close(client).unwrap();
        });

        let conn = transport.accept(listener).unwrap();
        let mut buf = [0u8; 16];
        let received = transport.receive(conn, &mut buf).unwrap();
        assert_eq!(&buf[..received], b"ping");

        // Peer shut down its write half; the next read reports EOF.
        let eof = transport.receive(conn, &mut buf).unwrap();
        assert_eq!(eof, 0);

        transport.send(conn, b"pong").unwrap();
        sender.join().unwrap();

        transport.close(conn).unwrap();
        transport.close(listener).unwrap();
    }

    run(PosixSocket::new());
}
