//! Combinational circuits as append-only gate DAGs.
//!
//! A [`Circuit`] owns all of its gates. Gates are identified by dense [`GateId`]s assigned
//! in creation order, and every derived gate only refers to gates created before it, so
//! the creation order is a topological order and the graph is acyclic by construction.
//!
//! Gates can additionally be reached by label. Every gate has a unique primary label,
//! and [`Circuit::add_alias`] registers extra labels for an existing gate.
//!
//! # Example
//!
//! ```
//! use shannon_synth::circuit::Circuit;
//! use shannon_synth::function::BooleanFunction;
//!
//! let mut circuit = Circuit::new(["a", "b"]).unwrap();
//! let g = circuit
//!     .add_gate("g", BooleanFunction::XOR, &["a".into(), "b".into()])
//!     .unwrap();
//! circuit.mark_output(g).unwrap();
//!
//! assert_eq!(circuit.evaluate_all("10").unwrap(), vec![true]);
//! assert_eq!(circuit.evaluate_all("11").unwrap(), vec![false]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::ops::Index;

use log::{debug, trace};

use crate::bitset::GateSet;
use crate::error::{CircuitError, Result};
use crate::function::BooleanFunction;
use crate::gate::{Gate, GateKind, GateRef};
use crate::truth_table::TruthTable;
use crate::types::GateId;

#[derive(Debug, Clone)]
pub struct Circuit {
    /// Gates, indexed by identifier. The first `input_labels.len()` are the inputs.
    gates: Vec<Gate>,
    /// Primary labels and aliases.
    labels: HashMap<String, GateId>,
    input_labels: Vec<String>,
    /// Output gates, in order. May repeat.
    outputs: Vec<GateId>,
}

// Constructors
impl Circuit {
    /// Create a circuit with one input gate per label, in order.
    pub fn new<I, S>(input_labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut circuit = Self {
            gates: Vec::new(),
            labels: HashMap::new(),
            input_labels: Vec::new(),
            outputs: Vec::new(),
        };
        for label in input_labels {
            let label = label.into();
            circuit.check_free(&label)?;
            let id = GateId::new(circuit.gates.len());
            circuit.labels.insert(label.clone(), id);
            circuit.gates.push(Gate::input(id, label.clone()));
            circuit.input_labels.push(label);
        }
        Ok(circuit)
    }

    /// Create a circuit with inputs labeled `x0`, `x1`, ..., `x{n-1}`.
    pub fn with_inputs(n: usize) -> Self {
        let mut circuit = Self {
            gates: Vec::with_capacity(n),
            labels: HashMap::with_capacity(n),
            input_labels: Vec::with_capacity(n),
            outputs: Vec::new(),
        };
        for i in 0..n {
            let id = GateId::new(i);
            let label = format!("x{}", i);
            circuit.labels.insert(label.clone(), id);
            circuit.gates.push(Gate::input(id, label.clone()));
            circuit.input_labels.push(label);
        }
        circuit
    }
}

// Getters
impl Circuit {
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.input_labels.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn input_labels(&self) -> &[String] {
        &self.input_labels
    }

    /// Identifiers of all input gates, in declaration order.
    pub fn inputs(&self) -> Vec<GateId> {
        (0..self.num_inputs()).map(GateId::new).collect()
    }

    pub fn outputs(&self) -> &[GateId] {
        &self.outputs
    }

    /// Identifier registered under `label` (primary label or alias).
    pub fn id_of(&self, label: &str) -> Option<GateId> {
        self.labels.get(label).copied()
    }

    /// All registered labels (primary labels and aliases) with their gates.
    pub fn labels(&self) -> impl Iterator<Item = (&str, GateId)> + '_ {
        self.labels.iter().map(|(label, &id)| (label.as_str(), id))
    }

    /// Labels that are not the primary label of their gate, sorted.
    pub fn aliases(&self) -> Vec<(&str, GateId)> {
        let mut aliases: Vec<_> = self
            .labels()
            .filter(|&(label, id)| self.gates[id.index()].label() != label)
            .collect();
        aliases.sort();
        aliases
    }

    /// Number of derived gates computing `function`.
    pub fn count_function(&self, function: &BooleanFunction) -> usize {
        self.gates
            .iter()
            .filter(|gate| gate.function() == Some(function))
            .count()
    }

    /// Resolve a reference (identifier or label) to an identifier.
    pub fn resolve<'a>(&self, gate: impl Into<GateRef<'a>>) -> Result<GateId> {
        match gate.into() {
            GateRef::Id(id) if id.index() < self.gates.len() => Ok(id),
            GateRef::Id(id) => Err(CircuitError::UnknownReference(id.to_string())),
            GateRef::Label(label) => self
                .id_of(label)
                .ok_or_else(|| CircuitError::UnknownReference(label.to_string())),
        }
    }

    pub fn gate<'a>(&self, gate: impl Into<GateRef<'a>>) -> Result<&Gate> {
        let id = self.resolve(gate)?;
        Ok(&self.gates[id.index()])
    }

    /// `base` if no gate is registered under it, otherwise `base_1`, `base_2`, ...
    /// whichever is free first.
    pub fn fresh_label(&self, base: impl Into<String>) -> String {
        let base = base.into();
        if !self.labels.contains_key(&base) {
            return base;
        }
        let mut k = 1;
        loop {
            let label = format!("{}_{}", base, k);
            if !self.labels.contains_key(&label) {
                return label;
            }
            k += 1;
        }
    }

    fn check_free(&self, label: &str) -> Result<()> {
        if self.labels.contains_key(label) {
            return Err(CircuitError::DuplicateLabel(label.to_string()));
        }
        Ok(())
    }
}

impl Index<GateId> for Circuit {
    type Output = Gate;

    fn index(&self, id: GateId) -> &Self::Output {
        &self.gates[id.index()]
    }
}

// Construction
impl Circuit {
    /// Append a derived gate computing `function` of `inputs`.
    ///
    /// Each input is resolved as an identifier or a label, and the number of inputs must
    /// match the arity of the function. Returns the identifier of the new gate.
    pub fn add_gate(
        &mut self,
        label: impl Into<String>,
        function: BooleanFunction,
        inputs: &[GateRef<'_>],
    ) -> Result<GateId> {
        let label = label.into();
        self.check_free(&label)?;
        let inputs = inputs
            .iter()
            .map(|&input| self.resolve(input))
            .collect::<Result<Vec<_>>>()?;
        if inputs.len() != function.arity() {
            return Err(CircuitError::ArityMismatch {
                expected: function.arity(),
                found: inputs.len(),
            });
        }

        let id = GateId::new(self.gates.len());
        trace!("add_gate: {} = {}({:?}) -> {}", label, function, inputs, id);
        self.labels.insert(label.clone(), id);
        self.gates.push(Gate::derived(id, label, function, inputs));
        Ok(id)
    }

    /// Register `label` as an additional name of an existing gate.
    pub fn add_alias<'a>(
        &mut self,
        existing: impl Into<GateRef<'a>>,
        label: impl Into<String>,
    ) -> Result<GateId> {
        let id = self.resolve(existing)?;
        let label = label.into();
        self.check_free(&label)?;
        trace!("add_alias: {} -> {}", label, id);
        self.labels.insert(label, id);
        Ok(id)
    }

    /// Append a gate to the list of outputs.
    pub fn mark_output<'a>(&mut self, gate: impl Into<GateRef<'a>>) -> Result<GateId> {
        let id = self.resolve(gate)?;
        self.outputs.push(id);
        Ok(id)
    }
}

// Evaluation
impl Circuit {
    /// Evaluate the outputs on one input assignment given as a `'0'`/`'1'` string,
    /// character `i` being the value of input `i`.
    pub fn evaluate_all(&self, inputs: &str) -> Result<Vec<bool>> {
        let values = inputs
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CircuitError::InvalidTable(format!(
                    "unexpected character '{}' in input assignment",
                    c
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        self.evaluate_bits(&values)
    }

    /// Evaluate the outputs on one input assignment.
    pub fn evaluate_bits(&self, assignment: &[bool]) -> Result<Vec<bool>> {
        if assignment.len() != self.num_inputs() {
            return Err(CircuitError::ArityMismatch {
                expected: self.num_inputs(),
                found: assignment.len(),
            });
        }

        let mut values: Vec<bool> = Vec::with_capacity(self.gates.len());
        for gate in self.gates.iter() {
            let value = match gate.kind() {
                GateKind::Input => assignment[gate.id().index()],
                GateKind::Derived { function, inputs } => {
                    let args: Vec<bool> = inputs.iter().map(|id| values[id.index()]).collect();
                    function.evaluate(&args)?
                }
            };
            values.push(value);
        }

        Ok(self.outputs.iter().map(|id| values[id.index()]).collect())
    }

    /// Compute the full truth table of every gate, indexed by identifier.
    ///
    /// Row `r` of each table is the value of the gate on the assignment whose binary
    /// encoding is `r`, input 0 being the most significant bit.
    pub fn evaluate_truth_tables(&self) -> Result<Vec<TruthTable>> {
        let n = self.num_inputs();
        let mut tables: Vec<TruthTable> = Vec::with_capacity(self.gates.len());
        for gate in self.gates.iter() {
            let table = match gate.kind() {
                GateKind::Input => TruthTable::variable(n, gate.id().index()),
                GateKind::Derived { function, inputs } => {
                    let args: Vec<&TruthTable> =
                        inputs.iter().map(|id| &tables[id.index()]).collect();
                    function.apply(n, &args)?
                }
            };
            tables.push(table);
        }
        Ok(tables)
    }

    /// Truth tables of the outputs, in output order.
    pub fn output_truth_tables(&self) -> Result<Vec<TruthTable>> {
        let tables = self.evaluate_truth_tables()?;
        Ok(self
            .outputs
            .iter()
            .map(|id| tables[id.index()].clone())
            .collect())
    }
}

// Pruning
impl Circuit {
    /// Gates from which some output can be reached, outputs included.
    pub fn find_reachable_from_outputs(&self) -> GateSet {
        let mut visited = GateSet::new(self.gates.len());
        let mut queue: VecDeque<GateId> = VecDeque::new();

        for &output in self.outputs.iter() {
            if visited.insert(output) {
                queue.push_back(output);
            }
        }
        while let Some(id) = queue.pop_front() {
            for &input in self.gates[id.index()].inputs() {
                if visited.insert(input) {
                    queue.push_back(input);
                }
            }
        }

        visited
    }

    /// Build a new circuit containing only the inputs and the gates reachable from the
    /// outputs, renumbered densely in their original order.
    ///
    /// Labels and aliases of surviving gates are kept, and outputs are remapped.
    pub fn prune(&self) -> Circuit {
        let reachable = self.find_reachable_from_outputs();
        let mut remap: Vec<Option<GateId>> = vec![None; self.gates.len()];
        let mut gates: Vec<Gate> = Vec::with_capacity(reachable.len() + self.num_inputs());

        for gate in self.gates.iter() {
            match gate.kind() {
                GateKind::Input => {
                    remap[gate.id().index()] = Some(gate.id());
                    gates.push(gate.clone());
                }
                GateKind::Derived { function, inputs } if reachable.contains(gate.id()) => {
                    let id = GateId::new(gates.len());
                    let inputs: Vec<GateId> =
                        inputs.iter().filter_map(|i| remap[i.index()]).collect();
                    debug_assert_eq!(inputs.len(), function.arity());
                    remap[gate.id().index()] = Some(id);
                    gates.push(Gate::derived(
                        id,
                        gate.label().to_string(),
                        function.clone(),
                        inputs,
                    ));
                }
                GateKind::Derived { .. } => {}
            }
        }

        let labels = self
            .labels
            .iter()
            .filter_map(|(label, id)| remap[id.index()].map(|new_id| (label.clone(), new_id)))
            .collect();
        let outputs = self
            .outputs
            .iter()
            .filter_map(|id| remap[id.index()])
            .collect();

        debug!(
            "prune: kept {} of {} gates ({} reachable)",
            gates.len(),
            self.gates.len(),
            reachable.len()
        );

        Circuit {
            gates,
            labels,
            input_labels: self.input_labels.clone(),
            outputs,
        }
    }
}
