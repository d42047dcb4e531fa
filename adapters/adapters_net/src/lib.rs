//! Adapters Layer: Networking Natives
//!
//! Stack-machine networking natives for the host execution engine. Each
//! native follows the engine's calling convention: operands are popped from
//! the operand stack, validated, and results are pushed back with a trailing
//! status code the host branches on.
//!
//! ## Overview
//!
//! The `adapters_net` crate provides:
//! - **`NetNatives`**: the seven networking natives (open-listener,
//!   accept-connection, connect, send, receive, shutdown-write, close)
//! - **`Status`**: the status-code contract shared with the host language
//! - **`NetDebug`**: gated stderr diagnostics for transport failures
//!
//! ## Architecture
//!
//! This crate is part of the adapters layer. It depends on:
//! - `entities_stack`: operand and stack types of the host engine
//! - `adapters_socket`: the blocking socket transport
//!
//! ## Usage
//!
//! ```rust
//! use adapters_net::{NetNatives, Status};
//! use entities_stack::OperandStack;
//!
//! let natives = NetNatives::posix();
//! let mut stack = OperandStack::new();
//!
//! stack.push_int(0); // ephemeral port
//! assert_eq!(natives.open_listener(&mut stack), Status::Ok);
//!
//! let _status = stack.pop().unwrap();
//! let listener = stack.pop().unwrap();
//!
//! stack.push(listener);
//! natives.close(&mut stack);
//! ```
//!
//! ## See Also
//!
//! - [`entities_stack`](../entities_stack/index.html): operand stack types
//! - [`adapters_socket`](../adapters_socket/index.html): socket transport

pub mod debug;
pub mod net;
pub mod status;

pub use debug::NetDebug;
pub use net::{NetNatives, MAX_RECEIVE_BYTES};
pub use status::Status;
