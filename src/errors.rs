//! Error types for the demonstrations
//!
//! This module defines [`DemoError`], which covers every failure the crate
//! can report: bounded-text construction failures and misuse of the
//! stack-frame model.
//!
//! All errors are fatal to the operation that raised them; nothing here is
//! retried or recovered.

use std::fmt;

/// Errors raised by text construction and the frame model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// Text longer than a fixed buffer can hold
    CapacityExceeded { len: usize, capacity: usize },

    /// Text containing a NUL byte, which a C-style buffer cannot represent
    InteriorNul { position: usize },

    /// Variable name not found in the current frame
    UndefinedVariable { name: String },

    /// Address does not map to a live slot (e.g. the owning frame was popped)
    InvalidAddress { address: u64 },

    /// Operation requires a frame but the stack is empty
    NoFrame,

    /// Value had a different variant than the operation expected
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::CapacityExceeded { len, capacity } => {
                write!(
                    f,
                    "Text of {} bytes exceeds buffer capacity of {} bytes",
                    len, capacity
                )
            }
            DemoError::InteriorNul { position } => {
                write!(f, "Text contains a NUL byte at position {}", position)
            }
            DemoError::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{}'", name)
            }
            DemoError::InvalidAddress { address } => {
                write!(f, "No live slot at address 0x{:x}", address)
            }
            DemoError::NoFrame => {
                write!(f, "No stack frame available")
            }
            DemoError::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for DemoError {}
