use std::fmt::{Display, Formatter};

use crate::function::BooleanFunction;
use crate::types::GateId;

/// The two kinds of gates: leaves and functions of earlier gates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GateKind {
    Input,
    Derived {
        function: BooleanFunction,
        inputs: Box<[GateId]>,
    },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Gate {
    id: GateId,
    label: String,
    kind: GateKind,
}

// Constructors
impl Gate {
    pub(crate) fn input(id: GateId, label: String) -> Self {
        Self {
            id,
            label,
            kind: GateKind::Input,
        }
    }

    pub(crate) fn derived(
        id: GateId,
        label: String,
        function: BooleanFunction,
        inputs: Vec<GateId>,
    ) -> Self {
        debug_assert_eq!(function.arity(), inputs.len());
        debug_assert!(inputs.iter().all(|&input| input < id));
        Self {
            id,
            label,
            kind: GateKind::Derived {
                function,
                inputs: inputs.into(),
            },
        }
    }
}

// Getters
impl Gate {
    pub fn id(&self) -> GateId {
        self.id
    }

    /// The primary label, the one the gate was created with.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, GateKind::Input)
    }

    pub fn function(&self) -> Option<&BooleanFunction> {
        match &self.kind {
            GateKind::Input => None,
            GateKind::Derived { function, .. } => Some(function),
        }
    }

    /// Input gates of this gate; empty for input gates.
    pub fn inputs(&self) -> &[GateId] {
        match &self.kind {
            GateKind::Input => &[],
            GateKind::Derived { inputs, .. } => &inputs[..],
        }
    }
}

/// A reference to a gate: either its identifier or one of its labels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GateRef<'a> {
    Id(GateId),
    Label(&'a str),
}

impl From<GateId> for GateRef<'_> {
    fn from(id: GateId) -> Self {
        GateRef::Id(id)
    }
}

impl<'a> From<&'a str> for GateRef<'a> {
    fn from(label: &'a str) -> Self {
        GateRef::Label(label)
    }
}

impl Display for GateRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GateRef::Id(id) => write!(f, "{}", id),
            GateRef::Label(label) => write!(f, "{}", label),
        }
    }
}
