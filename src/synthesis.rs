//! Circuit synthesis by Shannon decomposition.
//!
//! The `n` inputs are split into `split_count` leading *selector* inputs and
//! `n - split_count` trailing *block* inputs. A truth table over all inputs is then the
//! concatenation of `2^split_count` blocks, one per selector assignment, each block being
//! a function of the block inputs only:
//!
//! ```text
//! f = OR over x of (minterm_x(selectors) AND block_x(rest))
//! ```
//!
//! The synthesizer builds, once per circuit:
//!
//! - the minterm indicator of every selector assignment
//!   ([`ShannonSynthesizer::build_selector_minterms`]),
//! - a gate for *every* Boolean function of the block inputs
//!   ([`ShannonSynthesizer::build_all_functions`]),
//!
//! and then combines them per requested table. The cost is `O(2^split_count)` selector
//! gates, `O(2^(2^(n - split_count)))` block gates shared by all outputs, and
//! `O(2^split_count)` combining gates per output, so the split point trades the
//! exponential shared cost against the per-output cost.
//!
//! # Example
//!
//! ```
//! use shannon_synth::circuit::Circuit;
//! use shannon_synth::synthesis::shannon_synthesize;
//! use shannon_synth::truth_table::TruthTable;
//!
//! let tables: Vec<TruthTable> = vec!["00110100".parse().unwrap()];
//! let mut circuit = Circuit::with_inputs(3);
//! let inputs = circuit.inputs();
//! shannon_synthesize(&mut circuit, &inputs, 1, &tables).unwrap();
//!
//! assert_eq!(circuit.output_truth_tables().unwrap(), tables);
//! ```

use std::collections::HashMap;

use log::{debug, info};

use crate::circuit::Circuit;
use crate::error::{CircuitError, Result};
use crate::function::BooleanFunction;
use crate::gate::GateRef;
use crate::truth_table::TruthTable;
use crate::types::GateId;

/// Label prefix of the selector minterm indicators.
pub const MINTERM_PREFIX: &str = "c";
/// Label prefix of the block functions.
pub const FUNCTION_PREFIX: &str = "a";
/// Largest number of block inputs (`2^(2^4)` block functions).
///
/// Five block inputs would take more than `2^32` gates.
pub const MAX_BLOCK_INPUTS: usize = 4;

/// Number of block inputs used by default, indexed by the total number of inputs.
/// Never above [`MAX_BLOCK_INPUTS`].
const DEFAULT_BLOCK_INPUTS: [usize; 19] = [0, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4];

/// Default number of selector inputs for a circuit with `n` inputs (`1 <= n <= 18`).
pub fn default_split(n: usize) -> Result<usize> {
    match DEFAULT_BLOCK_INPUTS.get(n) {
        Some(&block) if n > 0 => Ok(n - block),
        _ => Err(CircuitError::InvalidSplit {
            split: 0,
            inputs: n,
        }),
    }
}

/// `value` as a `width`-character binary string, most significant bit first.
fn assignment_string(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|i| if (value >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Table bits as a `len`-character string, row 0 first.
fn table_string(value: usize, len: usize) -> String {
    (0..len)
        .map(|i| if (value >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Label of the minterm indicator accepting the selector assignment `bits`.
pub fn minterm_label(bits: &str) -> String {
    format!("{}_{}", MINTERM_PREFIX, bits)
}

/// Label of the block function with the truth table `table`.
pub fn function_label(table: &str) -> String {
    format!("{}_f_{}", FUNCTION_PREFIX, table)
}

#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Number of selector inputs; `None` picks [`default_split`].
    pub split_count: Option<usize>,
    /// Remove gates unreachable from the outputs after synthesis.
    pub prune: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            split_count: None,
            prune: true,
        }
    }
}

impl SynthesisConfig {
    pub fn with_split_count(mut self, split_count: usize) -> Self {
        self.split_count = Some(split_count);
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// The split to use for `n` inputs.
    pub fn split_for(&self, n: usize) -> Result<usize> {
        match self.split_count {
            Some(split) => Ok(split),
            None => default_split(n),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SynthesisStats {
    pub gates_before_prune: usize,
    pub gates_after_prune: usize,
    pub outputs: usize,
}

/// Minterm indicators over the selector inputs, indexed by the assignment they accept
/// (first selector most significant).
#[derive(Debug, Clone)]
pub struct Minterms {
    width: usize,
    gates: Vec<GateId>,
}

impl Minterms {
    /// Number of selector inputs.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The indicator true exactly on `assignment`, or `None` if there is no such
    /// selector assignment.
    ///
    /// With no selectors there are no indicators at all: the only assignment is always
    /// accepted and needs no gate.
    pub fn get(&self, assignment: usize) -> Option<GateId> {
        self.gates.get(assignment).copied()
    }

    pub fn gates(&self) -> &[GateId] {
        &self.gates
    }
}

/// One gate per Boolean function of the block inputs, indexed by truth table.
#[derive(Debug, Clone)]
pub struct FunctionBlock {
    arity: usize,
    gates: Vec<GateId>,
}

impl FunctionBlock {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of functions, `2^(2^arity)`.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn gates(&self) -> &[GateId] {
        &self.gates
    }

    /// The gate computing `table`.
    pub fn get(&self, table: &TruthTable) -> Result<GateId> {
        if table.num_vars() != self.arity {
            return Err(CircuitError::ArityMismatch {
                expected: self.arity,
                found: table.num_vars(),
            });
        }
        let index = table
            .to_u64()
            .ok_or_else(|| CircuitError::InvalidTable(table.to_string()))?;
        Ok(self.gates[index as usize])
    }
}

/// Builds gates into a circuit, holding exclusive access to it for the whole synthesis.
pub struct ShannonSynthesizer<'c> {
    circuit: &'c mut Circuit,
    /// NOT gate of each negated gate, created at most once.
    negations: HashMap<GateId, GateId>,
    /// Shared constant-zero gate.
    zero: Option<GateId>,
}

impl<'c> ShannonSynthesizer<'c> {
    pub fn new(circuit: &'c mut Circuit) -> Self {
        Self {
            circuit,
            negations: HashMap::new(),
            zero: None,
        }
    }

    /// Add a gate, renaming it if `label` is taken.
    fn add(
        &mut self,
        label: String,
        function: BooleanFunction,
        inputs: &[GateId],
    ) -> Result<GateId> {
        let label = self.circuit.fresh_label(label);
        let inputs: Vec<GateRef<'_>> = inputs.iter().map(|&id| id.into()).collect();
        self.circuit.add_gate(label, function, &inputs)
    }

    /// Alias `id`, renaming the alias if `label` is taken.
    fn alias(&mut self, id: GateId, label: String) -> Result<GateId> {
        let label = self.circuit.fresh_label(label);
        self.circuit.add_alias(id, label)
    }

    fn negate(&mut self, id: GateId) -> Result<GateId> {
        if let Some(&negated) = self.negations.get(&id) {
            return Ok(negated);
        }
        let label = format!("n_{}", self.circuit[id].label());
        let negated = self.add(label, BooleanFunction::NOT, &[id])?;
        self.negations.insert(id, negated);
        Ok(negated)
    }

    fn and(&mut self, label: String, a: GateId, b: GateId) -> Result<GateId> {
        self.add(label, BooleanFunction::AND, &[a, b])
    }

    fn or(&mut self, label: String, a: GateId, b: GateId) -> Result<GateId> {
        self.add(label, BooleanFunction::OR, &[a, b])
    }

    fn constant_zero(&mut self, anchor: GateId) -> Result<GateId> {
        if let Some(zero) = self.zero {
            return Ok(zero);
        }
        let zero = self.add("const_0".to_string(), BooleanFunction::ZERO, &[anchor])?;
        self.zero = Some(zero);
        Ok(zero)
    }

    /// OR the terms together left to right; no terms gives constant zero.
    fn disjunction(&mut self, output: usize, terms: Vec<GateId>, anchor: GateId) -> Result<GateId> {
        let mut terms = terms.into_iter();
        let Some(mut acc) = terms.next() else {
            return self.constant_zero(anchor);
        };
        for (k, term) in terms.enumerate() {
            acc = self.or(format!("o{}_or_{}", output, k), acc, term)?;
        }
        Ok(acc)
    }
}

// Building blocks
impl ShannonSynthesizer<'_> {
    /// Build the minterm indicator of every assignment of the `selectors`.
    ///
    /// Each selector is negated once. The indicators of 1-bit prefixes are the first
    /// selector itself (aliased, no buffer gate) and its negation; every longer indicator
    /// is the AND of its one-bit-shorter prefix indicator and the next literal, so each
    /// prefix is shared by both of its extensions.
    pub fn build_selector_minterms(&mut self, selectors: &[GateId]) -> Result<Minterms> {
        let width = selectors.len();
        if width == 0 {
            return Ok(Minterms {
                width,
                gates: Vec::new(),
            });
        }

        let negated = selectors
            .iter()
            .map(|&s| self.negate(s))
            .collect::<Result<Vec<_>>>()?;

        let mut level = vec![
            self.alias(negated[0], minterm_label("0"))?,
            self.alias(selectors[0], minterm_label("1"))?,
        ];
        for i in 1..width {
            let mut next = Vec::with_capacity(level.len() * 2);
            for (prefix, &indicator) in level.iter().enumerate() {
                for (bit, literal) in [(0, negated[i]), (1, selectors[i])] {
                    let assignment = (prefix << 1) | bit;
                    let label = minterm_label(&assignment_string(assignment, i + 1));
                    next.push(self.and(label, indicator, literal)?);
                }
            }
            level = next;
        }

        debug!(
            "build_selector_minterms: {} indicators over {} selectors",
            level.len(),
            width
        );
        Ok(Minterms {
            width,
            gates: level,
        })
    }

    /// Build a gate for every Boolean function of `inputs`, labeled by its truth table.
    ///
    /// Functions over the last input are the input itself (aliased), its negation and the
    /// two constants. Going backwards through the inputs, with `x` the current input and
    /// `g` ranging over the functions of the inputs after it, `AND(!x, g)` and `AND(x, g)`
    /// are built once each, and the function with table `t0 || t1` is
    /// `OR(AND(!x, f(t0)), AND(x, f(t1)))`.
    pub fn build_all_functions(&mut self, inputs: &[GateId]) -> Result<FunctionBlock> {
        let arity = inputs.len();
        if arity == 0 || arity > MAX_BLOCK_INPUTS {
            return Err(CircuitError::UnsupportedBlock(arity));
        }

        let last = inputs[arity - 1];
        let not_last = self.negate(last)?;
        let identity = self.alias(last, function_label("01"))?;
        let negation = self.alias(not_last, function_label("10"))?;
        let zero = self.add(function_label("00"), BooleanFunction::ZERO, &[last])?;
        let one = self.add(function_label("11"), BooleanFunction::ONE, &[last])?;
        // Indexed by table value: row 0 is bit 0.
        let mut level = vec![zero, negation, identity, one];
        let mut len = 2;

        for &x in inputs[..arity - 1].iter().rev() {
            let not_x = self.negate(x)?;
            let mut low = Vec::with_capacity(level.len());
            let mut high = Vec::with_capacity(level.len());
            for (t, &g) in level.iter().enumerate() {
                let table = table_string(t, len);
                low.push(self.and(format!("{}_n_{}", FUNCTION_PREFIX, table), not_x, g)?);
                high.push(self.and(format!("{}_p_{}", FUNCTION_PREFIX, table), x, g)?);
            }

            let count = level.len();
            let mut next = Vec::with_capacity(count * count);
            for index in 0..count * count {
                let (t0, t1) = (index % count, index / count);
                let label = function_label(&table_string(index, 2 * len));
                next.push(self.or(label, low[t0], high[t1])?);
            }
            level = next;
            len *= 2;
        }

        debug!(
            "build_all_functions: {} functions over {} inputs",
            level.len(),
            arity
        );
        Ok(FunctionBlock {
            arity,
            gates: level,
        })
    }
}

// Synthesis
impl ShannonSynthesizer<'_> {
    fn check_tables(n: usize, tables: &[TruthTable]) -> Result<()> {
        match tables.iter().find(|t| t.num_vars() != n) {
            Some(t) => Err(CircuitError::ArityMismatch {
                expected: n,
                found: t.num_vars(),
            }),
            None => Ok(()),
        }
    }

    /// Realize every table over `inputs` and mark the results as outputs, in order.
    ///
    /// The first `split_count` inputs are selectors and the rest are block inputs.
    /// Requires `split_count < inputs.len()` and at most [`MAX_BLOCK_INPUTS`] block inputs.
    /// Unreachable gates are left in place; see [`shannon_synthesize`].
    pub fn synthesize(
        &mut self,
        inputs: &[GateId],
        split_count: usize,
        tables: &[TruthTable],
    ) -> Result<()> {
        let n = inputs.len();
        if split_count >= n {
            return Err(CircuitError::InvalidSplit {
                split: split_count,
                inputs: n,
            });
        }
        let block_vars = n - split_count;
        if block_vars > MAX_BLOCK_INPUTS {
            return Err(CircuitError::UnsupportedBlock(block_vars));
        }
        Self::check_tables(n, tables)?;

        let minterms = self.build_selector_minterms(&inputs[..split_count])?;
        let functions = self.build_all_functions(&inputs[split_count..])?;
        info!(
            "Shannon synthesis: {} inputs, {} selectors, {} block functions, {} gates so far",
            n,
            split_count,
            functions.len(),
            self.circuit.num_gates()
        );

        for (j, table) in tables.iter().enumerate() {
            let mut terms = Vec::new();
            for x in 0..1usize << split_count {
                let block = table.block(x, block_vars);
                if block.is_zero() {
                    continue;
                }
                let term = match minterms.get(x) {
                    None => functions.get(&block)?,
                    Some(indicator) if block.is_one() => indicator,
                    Some(indicator) => {
                        let function = functions.get(&block)?;
                        let label = format!("o{}_t_{}", j, assignment_string(x, split_count));
                        self.and(label, indicator, function)?
                    }
                };
                terms.push(term);
            }
            let output = self.disjunction(j, terms, inputs[0])?;
            self.circuit.mark_output(output)?;
        }

        Ok(())
    }

    /// Realize every table as an OR of minterm indicators over all of `inputs`.
    ///
    /// An all-zero table becomes the constant-zero gate and a table with a single
    /// true row is that row's minterm indicator itself.
    pub fn synthesize_minterms(&mut self, inputs: &[GateId], tables: &[TruthTable]) -> Result<()> {
        let n = inputs.len();
        if n == 0 {
            return Err(CircuitError::InvalidSplit { split: 0, inputs: 0 });
        }
        Self::check_tables(n, tables)?;

        let minterms = self.build_selector_minterms(inputs)?;
        for (j, table) in tables.iter().enumerate() {
            let terms: Vec<GateId> = table.ones().filter_map(|row| minterms.get(row)).collect();
            let output = self.disjunction(j, terms, inputs[0])?;
            self.circuit.mark_output(output)?;
        }

        Ok(())
    }
}

fn prune_into(circuit: &mut Circuit, gates_before_prune: usize) -> SynthesisStats {
    *circuit = circuit.prune();
    let stats = SynthesisStats {
        gates_before_prune,
        gates_after_prune: circuit.num_gates(),
        outputs: circuit.num_outputs(),
    };
    info!(
        "Pruned {} -> {} gates ({} outputs)",
        stats.gates_before_prune, stats.gates_after_prune, stats.outputs
    );
    stats
}

/// Shannon synthesis of `tables` over `inputs`, followed by pruning.
pub fn shannon_synthesize(
    circuit: &mut Circuit,
    inputs: &[GateId],
    split_count: usize,
    tables: &[TruthTable],
) -> Result<SynthesisStats> {
    ShannonSynthesizer::new(circuit).synthesize(inputs, split_count, tables)?;
    let before = circuit.num_gates();
    Ok(prune_into(circuit, before))
}

/// Minterm (sum-of-products) synthesis of `tables` over `inputs`, followed by pruning.
pub fn minterm_synthesize(
    circuit: &mut Circuit,
    inputs: &[GateId],
    tables: &[TruthTable],
) -> Result<SynthesisStats> {
    ShannonSynthesizer::new(circuit).synthesize_minterms(inputs, tables)?;
    let before = circuit.num_gates();
    Ok(prune_into(circuit, before))
}

/// Shannon synthesis over all inputs of `circuit`, as configured.
pub fn synthesize(
    circuit: &mut Circuit,
    tables: &[TruthTable],
    config: &SynthesisConfig,
) -> Result<SynthesisStats> {
    let inputs = circuit.inputs();
    let split_count = config.split_for(inputs.len())?;
    ShannonSynthesizer::new(circuit).synthesize(&inputs, split_count, tables)?;
    let before = circuit.num_gates();
    if config.prune {
        Ok(prune_into(circuit, before))
    } else {
        Ok(SynthesisStats {
            gates_before_prune: before,
            gates_after_prune: before,
            outputs: circuit.num_outputs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;

    fn tables(strings: &[&str]) -> Vec<TruthTable> {
        strings.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn check(circuit: &Circuit, expected: &[TruthTable]) {
        assert_eq!(circuit.num_outputs(), expected.len());
        assert_eq!(&circuit.output_truth_tables().unwrap(), expected);
        let n = circuit.num_inputs();
        for row in 0..1usize << n {
            let values = circuit.evaluate_all(&assignment_string(row, n)).unwrap();
            for (table, value) in expected.iter().zip(values) {
                assert_eq!(table.get(row), value, "row {}", row);
            }
        }
    }

    #[test]
    fn test_default_split() {
        assert_eq!(default_split(1), Ok(0));
        assert_eq!(default_split(2), Ok(1));
        assert_eq!(default_split(6), Ok(4));
        assert_eq!(default_split(12), Ok(8));
        assert_eq!(default_split(13), Ok(9));
        assert_eq!(default_split(18), Ok(14));
        assert!(default_split(0).is_err());
        assert!(default_split(19).is_err());
        for n in 1..=18 {
            let block = n - default_split(n).unwrap();
            assert!((1..=MAX_BLOCK_INPUTS).contains(&block), "n = {}", n);
        }
    }

    #[test]
    fn test_oversized_block_fails_before_building() {
        let tables = vec![TruthTable::zero(13)];
        let mut circuit = Circuit::with_inputs(13);
        let config = SynthesisConfig::default().with_split_count(8);
        assert_eq!(
            synthesize(&mut circuit, &tables, &config),
            Err(CircuitError::UnsupportedBlock(5))
        );
        assert_eq!(circuit.num_gates(), 13);
        assert_eq!(circuit.num_outputs(), 0);
    }

    #[test]
    fn test_config() {
        let config = SynthesisConfig::default();
        assert_eq!(config.split_for(6), Ok(4));
        assert!(config.prune);
        let config = config.with_split_count(5).with_prune(false);
        assert_eq!(config.split_for(6), Ok(5));
        assert!(!config.prune);
    }

    #[test]
    fn test_strings() {
        assert_eq!(assignment_string(0b011, 3), "011");
        assert_eq!(table_string(0b0001, 4), "1000");
        assert_eq!(minterm_label("10"), "c_10");
        assert_eq!(function_label("0110"), "a_f_0110");
    }

    #[test]
    fn test_selector_minterms_exclusive() {
        for m in 1..=4 {
            let mut circuit = Circuit::with_inputs(m);
            let inputs = circuit.inputs();
            let minterms = ShannonSynthesizer::new(&mut circuit)
                .build_selector_minterms(&inputs)
                .unwrap();
            assert_eq!(minterms.gates().len(), 1 << m);

            let tables = circuit.evaluate_truth_tables().unwrap();
            for x in 0..1usize << m {
                let gate = minterms.get(x).unwrap();
                let table = &tables[gate.index()];
                assert_eq!(table.ones().collect::<Vec<_>>(), vec![x]);
                let label = minterm_label(&assignment_string(x, m));
                assert_eq!(circuit.id_of(&label), Some(gate));
            }
        }
    }

    #[test]
    fn test_selector_minterms_gate_count() {
        for m in 1..=5 {
            let mut circuit = Circuit::with_inputs(m);
            let inputs = circuit.inputs();
            ShannonSynthesizer::new(&mut circuit)
                .build_selector_minterms(&inputs)
                .unwrap();
            let ands: usize = (2..=m).map(|i| 1 << i).sum();
            assert_eq!(circuit.num_gates(), m + m + ands);
        }
    }

    #[test]
    fn test_selector_minterm_base_is_aliased() {
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        ShannonSynthesizer::new(&mut circuit)
            .build_selector_minterms(&inputs)
            .unwrap();
        assert_eq!(circuit.id_of("c_1"), Some(inputs[0]));
        assert_eq!(circuit.id_of("c_0"), circuit.id_of("n_x0"));
    }

    #[test]
    fn test_no_selectors() {
        let mut circuit = Circuit::with_inputs(1);
        let minterms = ShannonSynthesizer::new(&mut circuit)
            .build_selector_minterms(&[])
            .unwrap();
        assert_eq!(minterms.width(), 0);
        assert_eq!(minterms.get(0), None);
        assert_eq!(circuit.num_gates(), 1);
    }

    #[test]
    fn test_minterm_out_of_range() {
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        let minterms = ShannonSynthesizer::new(&mut circuit)
            .build_selector_minterms(&inputs)
            .unwrap();
        assert!(minterms.get(3).is_some());
        assert_eq!(minterms.get(4), None);
        assert_eq!(minterms.get(usize::MAX), None);
    }

    #[test]
    fn test_all_functions_complete() {
        for m in 1..=3 {
            let mut circuit = Circuit::with_inputs(m);
            let inputs = circuit.inputs();
            let block = ShannonSynthesizer::new(&mut circuit)
                .build_all_functions(&inputs)
                .unwrap();
            let count = 1usize << (1 << m);
            assert_eq!(block.len(), count);
            assert_eq!(block.arity(), m);

            let distinct: HashSet<GateId> = block.gates().iter().copied().collect();
            assert_eq!(distinct.len(), count);

            let tables = circuit.evaluate_truth_tables().unwrap();
            for value in 0..count as u64 {
                let expected = TruthTable::from_u64(m, value);
                let gate = block.get(&expected).unwrap();
                assert_eq!(tables[gate.index()], expected);
                let label = function_label(&expected.to_string());
                assert_eq!(circuit.id_of(&label), Some(gate));
            }
        }
    }

    #[test]
    fn test_all_functions_identity_is_aliased() {
        let mut circuit = Circuit::with_inputs(1);
        let block = ShannonSynthesizer::new(&mut circuit)
            .build_all_functions(&[GateId::new(0)])
            .unwrap();
        assert_eq!(block.get(&"01".parse().unwrap()), Ok(GateId::new(0)));
        // NOT, ZERO and ONE
        assert_eq!(circuit.num_gates(), 4);
    }

    #[test]
    fn test_all_functions_shares_building_blocks() {
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        ShannonSynthesizer::new(&mut circuit)
            .build_all_functions(&inputs)
            .unwrap();
        // One NOT per input, 4 ANDs per polarity, 16 ORs, 2 constants.
        assert_eq!(circuit.count_function(&BooleanFunction::NOT), 2);
        assert_eq!(circuit.count_function(&BooleanFunction::AND), 8);
        assert_eq!(circuit.count_function(&BooleanFunction::OR), 16);
        assert_eq!(circuit.num_gates(), 2 + 2 + 2 + 8 + 16);
    }

    #[test]
    fn test_all_functions_rejects_bad_arity() {
        let mut circuit = Circuit::with_inputs(6);
        let inputs = circuit.inputs();
        let mut synth = ShannonSynthesizer::new(&mut circuit);
        assert_eq!(
            synth.build_all_functions(&[]).unwrap_err(),
            CircuitError::UnsupportedBlock(0)
        );
        assert_eq!(
            synth.build_all_functions(&inputs[..5]).unwrap_err(),
            CircuitError::UnsupportedBlock(5)
        );
        assert_eq!(
            synth.build_all_functions(&inputs).unwrap_err(),
            CircuitError::UnsupportedBlock(6)
        );
        assert_eq!(circuit.num_gates(), 6);
    }

    #[test]
    fn test_generated_labels_avoid_input_labels() {
        let expected = tables(&["0110"]);
        let mut circuit = Circuit::new(["a", "n_a"]).unwrap();
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.id_of("n_a"), Some(inputs[1]));
        assert!(circuit.id_of("n_a_1").is_some());
    }

    #[test]
    fn test_generated_labels_avoid_reserved_patterns() {
        let expected = tables(&["00000000", "00010111"]);
        let mut circuit = Circuit::new(["c_0", "a_f_01", "const_0"]).unwrap();
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.id_of("c_0"), Some(inputs[0]));
        assert_eq!(circuit.id_of("a_f_01"), Some(inputs[1]));
        assert_eq!(circuit.id_of("const_0"), Some(inputs[2]));

        let mut dnf = Circuit::new(["c_1", "n_c_1"]).unwrap();
        let inputs = dnf.inputs();
        minterm_synthesize(&mut dnf, &inputs, &tables(&["1001"])).unwrap();
        check(&dnf, &tables(&["1001"]));
    }

    #[test]
    fn test_simple() {
        let expected = tables(&["0011"]);
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.evaluate_all("00").unwrap(), vec![false]);
        assert_eq!(circuit.evaluate_all("01").unwrap(), vec![false]);
        assert_eq!(circuit.evaluate_all("10").unwrap(), vec![true]);
        assert_eq!(circuit.evaluate_all("11").unwrap(), vec![true]);
    }

    #[test]
    fn test_multiple_outputs() {
        let expected = tables(&["00110100", "11101111", "01010101"]);
        let mut circuit = Circuit::with_inputs(3);
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
    }

    #[test]
    fn test_all_zeros() {
        let expected = tables(&["00000000"]);
        let mut circuit = Circuit::with_inputs(3);
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.count_function(&BooleanFunction::OR), 0);
        let output = circuit.outputs()[0];
        assert_eq!(circuit[output].function(), Some(&BooleanFunction::ZERO));
        // Only the inputs and the constant survive pruning
        assert_eq!(circuit.num_gates(), 4);
    }

    #[test]
    fn test_zero_gate_is_shared() {
        let expected = tables(&["0000", "0110", "0000"]);
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 1, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.outputs()[0], circuit.outputs()[2]);
    }

    #[test]
    fn test_without_selectors() {
        let expected = tables(&["0110", "1000"]);
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        shannon_synthesize(&mut circuit, &inputs, 0, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.id_of("a_f_0110"), Some(circuit.outputs()[0]));
    }

    #[test]
    fn test_six_inputs_both_splits() {
        let expected =
            tables(&["1000010000011100111001000001110010010100000111001000010000011100"]);
        let mut sizes = Vec::new();
        for split in [3, 4, 5] {
            let mut circuit = Circuit::with_inputs(6);
            let inputs = circuit.inputs();
            let stats = shannon_synthesize(&mut circuit, &inputs, split, &expected).unwrap();
            check(&circuit, &expected);
            assert!(stats.gates_after_prune <= stats.gates_before_prune);
            sizes.push(stats.gates_before_prune);
        }
        // Block functions dominate at split 3, selector minterms at split 5
        assert!(sizes[0] > sizes[1]);
        assert!(sizes[1] < sizes[2]);
    }

    #[test]
    fn test_invalid_split() {
        let expected = tables(&["0011"]);
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        assert_eq!(
            shannon_synthesize(&mut circuit, &inputs, 2, &expected),
            Err(CircuitError::InvalidSplit {
                split: 2,
                inputs: 2
            })
        );
        assert_eq!(circuit.num_gates(), 2);
    }

    #[test]
    fn test_table_size_mismatch() {
        let expected = tables(&["0011", "01"]);
        let mut circuit = Circuit::with_inputs(2);
        let inputs = circuit.inputs();
        assert_eq!(
            shannon_synthesize(&mut circuit, &inputs, 1, &expected),
            Err(CircuitError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
        // Nothing is built before the tables are validated
        assert_eq!(circuit.num_gates(), 2);
    }

    #[test]
    fn test_minterm_synthesis() {
        let expected = tables(&["00110100", "11101111", "01010101", "11110011"]);
        let mut circuit = Circuit::with_inputs(3);
        let inputs = circuit.inputs();
        minterm_synthesize(&mut circuit, &inputs, &expected).unwrap();
        check(&circuit, &expected);
    }

    #[test]
    fn test_minterm_synthesis_degenerate() {
        let expected = tables(&["00000000", "00000100"]);
        let mut circuit = Circuit::with_inputs(3);
        let inputs = circuit.inputs();
        minterm_synthesize(&mut circuit, &inputs, &expected).unwrap();
        check(&circuit, &expected);
        assert_eq!(circuit.count_function(&BooleanFunction::OR), 0);
        let zero = circuit.outputs()[0];
        assert_eq!(circuit[zero].function(), Some(&BooleanFunction::ZERO));
        assert_eq!(circuit.id_of("c_101"), Some(circuit.outputs()[1]));
    }

    #[test]
    fn test_synthesize_with_config() {
        let expected = tables(&["0110100110010110"]);

        let mut circuit = Circuit::with_inputs(4);
        let stats = synthesize(&mut circuit, &expected, &SynthesisConfig::default()).unwrap();
        check(&circuit, &expected);
        assert_eq!(stats.gates_after_prune, circuit.num_gates());

        let mut unpruned = Circuit::with_inputs(4);
        let config = SynthesisConfig::default().with_prune(false);
        let stats = synthesize(&mut unpruned, &expected, &config).unwrap();
        check(&unpruned, &expected);
        assert_eq!(stats.gates_before_prune, stats.gates_after_prune);
        assert!(unpruned.num_gates() > circuit.num_gates());
    }
}
