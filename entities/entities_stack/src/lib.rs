//! Entities Layer: Operand Stack
//!
//! Provides the typed operand stack through which the host execution engine
//! communicates with native extensions. The engine pushes arguments before a
//! native call; the extension pops them, validates their type tags, and pushes
//! results back.
//!
//! ## Overview
//!
//! The `entities_stack` crate provides:
//! - **Operands**: tagged values (`Int`, `Str`) with inspectable type tags
//! - **Host strings**: reference-counted, host-owned byte buffers
//! - **The stack**: Vec-backed typed push/pop with underflow reporting
//!
//! ## Usage
//!
//! ```rust
//! use entities_stack::{Operand, OperandStack};
//!
//! let mut stack = OperandStack::new();
//! stack.push_int(8080);
//!
//! match stack.pop() {
//!     Ok(Operand::Int(port)) => assert_eq!(port, 8080),
//!     _ => panic!("expected an integer operand"),
//! }
//! ```

pub mod operand;
pub mod stack;

pub use operand::{HostStr, Operand, OperandTag};
pub use stack::{OperandStack, StackError};
