//! Operand Types
//!
//! Provides the tagged values that live on the host engine's stack. The
//! engine is dynamically typed: every value carries a tag, and native code
//! inspects the tag before consuming the value.

use std::fmt;
use std::rc::Rc;

/// Operand type tag
///
/// Identifies the variant of an [`Operand`] without consuming it. Native
/// extensions check tags while marshaling arguments off the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandTag {
    /// 64-bit signed integer
    Int,
    /// Host-owned string buffer
    Str,
}

/// Host-owned string buffer
///
/// A reference-counted byte buffer owned by the host engine. Cloning acquires
/// an additional reference; dropping releases one. Native code borrows a
/// `HostStr` for the duration of a single call and releases it by dropping
/// the popped operand, so one reference is consumed per call on every path.
///
/// The buffer is immutable once created; readers only ever see the bytes it
/// was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStr {
    data: Rc<Vec<u8>>,
}

impl HostStr {
    /// Create a new host string from raw bytes
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Rc::new(data.into()),
        }
    }

    /// Get the buffer contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the number of live references to this buffer
    ///
    /// Used by the host engine for buffer accounting, and by tests to verify
    /// that native code releases exactly the references it acquired.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.data)
    }
}

impl From<&str> for HostStr {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for HostStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}

/// A single tagged value on the host engine's stack
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// 64-bit signed integer: ports, descriptors, byte counts, status codes
    Int(i64),
    /// Host-owned string buffer
    Str(HostStr),
}

impl Operand {
    /// Get the operand's type tag without consuming it
    pub fn tag(&self) -> OperandTag {
        match self {
            Operand::Int(_) => OperandTag::Int,
            Operand::Str(_) => OperandTag::Str,
        }
    }
}
