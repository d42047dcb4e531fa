//! Operation Status Codes
//!
//! The status contract shared between the networking natives and the host
//! language. Every fallible native finishes by pushing one of these codes as
//! an integer operand; the host branches on it. The numeric values are part
//! of the contract and must not change.

/// Outcome of a networking native, pushed as the top integer operand.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation completed
    Ok = 1,
    /// Listener could not be created
    Listen = 2,
    /// Accept failed
    Accept = 3,
    /// Connection failed
    Connect = 4,
    /// Send failed
    Send = 5,
    /// Receive failed
    Receive = 6,
    /// Operand missing, mistyped, or out of range
    InvalidArgument = 7,
}

impl Status {
    /// The integer form pushed onto the operand stack.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Look up a status by its integer code.
    ///
    /// # Returns
    ///
    /// * `Some(Status)` - `code` names a status
    /// * `None` - `code` is outside the contract
    pub fn from_code(code: i64) -> Option<Status> {
        match code {
            1 => Some(Status::Ok),
            2 => Some(Status::Listen),
            3 => Some(Status::Accept),
            4 => Some(Status::Connect),
            5 => Some(Status::Send),
            6 => Some(Status::Receive),
            7 => Some(Status::InvalidArgument),
            _ => None,
        }
    }

    /// Whether this status reports success.
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Listen => write!(f, "listen failed"),
            Status::Accept => write!(f, "accept failed"),
            Status::Connect => write!(f, "connect failed"),
            Status::Send => write!(f, "send failed"),
            Status::Receive => write!(f, "receive failed"),
            Status::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}
