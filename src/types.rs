//! Type-safe wrapper for gate identifiers.
use std::fmt;

/// A gate identifier (0-indexed).
///
/// Identifiers are dense and assigned in creation order by the owning
/// [`Circuit`][crate::circuit::Circuit], so they double as a topological rank.
///
/// # Invariants
///
/// - The inputs of a derived gate always have strictly smaller identifiers
/// - The first `num_inputs` identifiers belong to the input gates
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GateId(u32);

impl GateId {
    /// Creates a new identifier with the given index.
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "Gate index overflow");
        GateId(index as u32)
    }

    /// Returns the raw index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<GateId> for usize {
    fn from(id: GateId) -> Self {
        id.index()
    }
}
