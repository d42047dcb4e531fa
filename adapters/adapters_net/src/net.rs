//! Networking Natives
//!
//! Stack-machine entry points for TCP networking. Each native pops its
//! operands from the host stack, validates them, delegates to the socket
//! transport, and pushes its results followed by a [`Status`] code.
//!
//! ## Stack discipline
//!
//! Operands are popped in reverse of the order they were pushed. Every
//! fallible native leaves a status code on top of the stack whether it
//! succeeds or fails; on failure nothing but the status is pushed. String
//! operands are consumed exactly once on every path, including validation
//! failures.
//!
//! ## Misuse
//!
//! `shutdown_write` and `close` have no output slot for a status code, so a
//! missing or mistyped operand is treated as host-engine corruption: they
//! print a diagnostic to stderr and abort the process.

use adapters_socket::{PosixSocket, SocketFd, SocketTransport};
use entities_stack::{HostStr, Operand, OperandStack};

use crate::debug::NetDebug;
use crate::status::Status;

/// Largest receive request a caller may make, in bytes.
pub const MAX_RECEIVE_BYTES: i64 = 1_048_576;

/// TCP networking natives bound to a socket transport.
///
/// Generic over [`SocketTransport`] so the natives can run against the
/// blocking POSIX transport in production and a mock transport in tests.
pub struct NetNatives<T: SocketTransport> {
    transport: T,
}

/// Push `status` and hand it back, so failure arms stay one expression.
fn push_status(stack: &mut OperandStack, status: Status) -> Status {
    stack.push_int(status.code());
    status
}

/// Length of `data` up to but not including its first NUL byte.
fn terminated_len(data: &[u8]) -> usize {
    data.iter().position(|&b| b == 0).unwrap_or(data.len())
}

impl NetNatives<PosixSocket> {
    /// Create natives over the blocking POSIX transport.
    pub fn posix() -> Self {
        NetNatives::new(PosixSocket::new())
    }
}

impl<T: SocketTransport> NetNatives<T> {
    /// Create natives that delegate to `transport`.
    pub fn new(transport: T) -> Self {
        NetNatives { transport }
    }

    /// Open a TCP listener. Stack effect: `( port:i -- socket:i )` plus status.
    ///
    /// Pops the port, binds a listening socket to it, and pushes the new
    /// descriptor followed by [`Status::Ok`]. A missing or non-integer
    /// operand pushes only [`Status::InvalidArgument`]; a transport failure
    /// pushes only [`Status::Listen`].
    pub fn open_listener(&self, stack: &mut OperandStack) -> Status {
        let port = match stack.pop() {
            Ok(Operand::Int(port)) => port,
            Ok(_) | Err(_) => return push_status(stack, Status::InvalidArgument),
        };

        match self.transport.listen(port as u16) {
            Ok(fd) => {
                stack.push_int(i64::from(fd));
                push_status(stack, Status::Ok)
            }
            Err(err) => {
                NetDebug::log(&format!("open_listener failed: {}", err));
                push_status(stack, Status::Listen)
            }
        }
    }

    /// Accept a client connection. Stack effect: `( server_socket:i -- client_socket:i )`
    /// plus status.
    ///
    /// Blocks until a connection arrives. On transport failure pushes only
    /// [`Status::Accept`].
    pub fn accept_connection(&self, stack: &mut OperandStack) -> Status {
        let listener = match stack.pop() {
            Ok(Operand::Int(fd)) => fd as SocketFd,
            Ok(_) | Err(_) => return push_status(stack, Status::InvalidArgument),
        };

        match self.transport.accept(listener) {
            Ok(fd) => {
                stack.push_int(i64::from(fd));
                push_status(stack, Status::Ok)
            }
            Err(err) => {
                NetDebug::log(&format!("accept_connection failed: {}", err));
                push_status(stack, Status::Accept)
            }
        }
    }

    /// Connect to a remote host. Stack effect: `( host:s port:i -- socket:i )`
    /// plus status.
    ///
    /// Pops the port first, then the host. Both operands are consumed on
    /// every path; in particular a mistyped port still consumes and releases
    /// the host string. The host name ends at its first NUL byte and must be
    /// valid UTF-8 to resolve; a name that cannot resolve pushes only
    /// [`Status::Connect`].
    pub fn connect(&self, stack: &mut OperandStack) -> Status {
        let port = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };
        let host = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };

        // Port is validated first; the host operand drops either way.
        let port = match port {
            Operand::Int(port) => port,
            _ => return push_status(stack, Status::InvalidArgument),
        };
        let host = match host {
            Operand::Str(host) => host,
            _ => return push_status(stack, Status::InvalidArgument),
        };

        let name = &host.data()[..terminated_len(host.data())];
        let name = match std::str::from_utf8(name) {
            Ok(name) => name,
            Err(_) => {
                NetDebug::log("connect failed: host name is not valid UTF-8");
                return push_status(stack, Status::Connect);
            }
        };

        match self.transport.connect(name, port as u16) {
            Ok(fd) => {
                stack.push_int(i64::from(fd));
                push_status(stack, Status::Ok)
            }
            Err(err) => {
                NetDebug::log(&format!("connect failed: {}", err));
                push_status(stack, Status::Connect)
            }
        }
    }

    /// Send data on a socket. Stack effect: `( socket:i data:s -- bytes_sent:i )`
    /// plus status.
    ///
    /// Pops the data first, then the socket. The payload ends at the data's
    /// first NUL byte. The data string is consumed on every path. A single
    /// transport write is attempted; the pushed count may be less than the
    /// payload length and the caller owns any retry loop.
    pub fn send(&self, stack: &mut OperandStack) -> Status {
        let data = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };
        let socket = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };

        // Socket is validated first; the data operand drops either way.
        let socket = match socket {
            Operand::Int(fd) => fd as SocketFd,
            _ => return push_status(stack, Status::InvalidArgument),
        };
        let data = match data {
            Operand::Str(data) => data,
            _ => return push_status(stack, Status::InvalidArgument),
        };

        let payload = &data.data()[..terminated_len(data.data())];

        match self.transport.send(socket, payload) {
            Ok(sent) => {
                stack.push_int(sent as i64);
                push_status(stack, Status::Ok)
            }
            Err(err) => {
                NetDebug::log(&format!("send failed: {}", err));
                push_status(stack, Status::Send)
            }
        }
    }

    /// Receive data from a socket. Stack effect:
    /// `( socket:i max_bytes:i -- data:s bytes_read:i )` plus status.
    ///
    /// Pops the byte cap first, then the socket. The cap must lie in
    /// `(0, MAX_RECEIVE_BYTES]`; anything else pushes only
    /// [`Status::InvalidArgument`] without touching the transport. A single
    /// transport read is attempted. End-of-stream is not an error: it pushes
    /// an empty string, a count of zero, and [`Status::Ok`].
    pub fn receive(&self, stack: &mut OperandStack) -> Status {
        let max_bytes = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };
        let socket = match stack.pop() {
            Ok(operand) => operand,
            Err(_) => return push_status(stack, Status::InvalidArgument),
        };

        let socket = match socket {
            Operand::Int(fd) => fd as SocketFd,
            _ => return push_status(stack, Status::InvalidArgument),
        };
        let max_bytes = match max_bytes {
            Operand::Int(max_bytes) => max_bytes,
            _ => return push_status(stack, Status::InvalidArgument),
        };

        if max_bytes <= 0 || max_bytes > MAX_RECEIVE_BYTES {
            return push_status(stack, Status::InvalidArgument);
        }

        // The transient buffer reserves one byte beyond the cap; a failed
        // reservation reports Receive before any I/O happens.
        let mut buf = Vec::new();
        if buf.try_reserve_exact(max_bytes as usize + 1).is_err() {
            return push_status(stack, Status::Receive);
        }
        buf.resize(max_bytes as usize, 0);

        match self.transport.receive(socket, &mut buf) {
            Ok(received) => {
                buf.truncate(received);
                stack.push_str(HostStr::new(buf));
                stack.push_int(received as i64);
                push_status(stack, Status::Ok)
            }
            Err(err) => {
                NetDebug::log(&format!("receive failed: {}", err));
                push_status(stack, Status::Receive)
            }
        }
    }

    /// Shut down the write half of a socket. Stack effect: `( socket:i -- )`.
    ///
    /// There is no output slot for a status code, so a missing or mistyped
    /// operand aborts the process after a stderr diagnostic. The transport
    /// result is ignored.
    pub fn shutdown_write(&self, stack: &mut OperandStack) {
        let socket = match stack.pop() {
            Ok(Operand::Int(fd)) => fd as SocketFd,
            Err(_) => {
                eprintln!("Fatal error in shutdown_write: stack underflow");
                std::process::abort();
            }
            Ok(_) => {
                eprintln!("Fatal error in shutdown_write: socket must be an integer");
                std::process::abort();
            }
        };

        let _ = self.transport.shutdown_write(socket);
    }

    /// Close a socket. Stack effect: `( socket:i -- )`.
    ///
    /// Same misuse handling as [`NetNatives::shutdown_write`]: no status
    /// slot, so the process aborts on a malformed stack. The transport
    /// result is ignored.
    pub fn close(&self, stack: &mut OperandStack) {
        let socket = match stack.pop() {
            Ok(Operand::Int(fd)) => fd as SocketFd,
            Err(_) => {
                eprintln!("Fatal error in close: stack underflow");
                std::process::abort();
            }
            Ok(_) => {
                eprintln!("Fatal error in close: socket must be an integer");
                std::process::abort();
            }
        };

        let _ = self.transport.close(socket);
    }
}
