//! Errors raised while building, evaluating or synthesizing circuits.
//!
//! Every violated precondition is reported at the point of violation, so a
//! malformed circuit is never constructed silently.

use std::fmt::{Display, Formatter};

/// Error type for circuit construction and synthesis.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CircuitError {
    /// A label is already registered in the circuit.
    DuplicateLabel(String),
    /// A reference names neither an existing identifier nor an existing label.
    UnknownReference(String),
    /// The number of supplied values does not match the expected count.
    ArityMismatch { expected: usize, found: usize },
    /// A truth table is malformed (bad length or characters).
    InvalidTable(String),
    /// The selector/block split is out of range for the number of inputs.
    InvalidSplit { split: usize, inputs: usize },
    /// Too many (or no) block inputs to enumerate every function of them.
    UnsupportedBlock(usize),
    /// No primitive function is registered under this name.
    UnknownFunction(String),
}

impl Display for CircuitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitError::DuplicateLabel(label) => write!(f, "duplicate label '{}'", label),
            CircuitError::UnknownReference(reference) => {
                write!(f, "unknown gate reference '{}'", reference)
            }
            CircuitError::ArityMismatch { expected, found } => {
                write!(f, "arity mismatch: expected {}, found {}", expected, found)
            }
            CircuitError::InvalidTable(msg) => write!(f, "invalid truth table: {}", msg),
            CircuitError::InvalidSplit { split, inputs } => {
                write!(f, "invalid split {} for {} inputs", split, inputs)
            }
            CircuitError::UnsupportedBlock(size) => {
                write!(f, "unsupported block of {} inputs", size)
            }
            CircuitError::UnknownFunction(name) => write!(f, "unknown function '{}'", name),
        }
    }
}

impl std::error::Error for CircuitError {}

pub type Result<T> = std::result::Result<T, CircuitError>;
