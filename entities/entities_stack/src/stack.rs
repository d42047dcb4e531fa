//! Operand Stack
//!
//! Provides the stack the host engine shares with native extensions. Storage
//! is a safe `Vec<Operand>`; the last element is the top of the stack.

use std::fmt;

use crate::operand::{HostStr, Operand};

/// Stack operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Pop was attempted on an empty stack
    Underflow,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Underflow => write!(f, "operand stack underflow"),
        }
    }
}

impl std::error::Error for StackError {}

/// The host engine's operand stack
///
/// Arguments to a native call are pushed left-to-right, so the rightmost
/// argument is popped first. Results are pushed left-to-right as well, which
/// leaves the trailing status code of a fallible native on top.
#[derive(Debug, Default)]
pub struct OperandStack {
    items: Vec<Operand>,
}

impl OperandStack {
    /// Create an empty operand stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an operand
    pub fn push(&mut self, operand: Operand) {
        self.items.push(operand);
    }

    /// Push an integer operand
    pub fn push_int(&mut self, value: i64) {
        self.items.push(Operand::Int(value));
    }

    /// Push a string operand
    ///
    /// The stack takes over the caller's reference to the buffer.
    pub fn push_str(&mut self, value: HostStr) {
        self.items.push(Operand::Str(value));
    }

    /// Pop the top operand
    ///
    /// # Returns
    /// * `Ok(Operand)` - The popped operand; the caller now owns it
    /// * `Err(StackError::Underflow)` - The stack was empty
    pub fn pop(&mut self) -> Result<Operand, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Look at the top operand without consuming it
    pub fn peek(&self) -> Option<&Operand> {
        self.items.last()
    }

    /// Get the number of operands on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
