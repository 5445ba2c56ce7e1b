//! # shannon-synth: combinational circuit synthesis from truth tables
//!
//! Given one or more truth tables over `n` inputs, **`shannon-synth`** builds a network of
//! elementary logic gates (`NOT`, `AND`, `OR`, ...) whose outputs reproduce the tables on
//! every input assignment.
//!
//! ## Shannon decomposition
//!
//! Splitting the inputs into `s` leading *selectors* and `n - s` trailing *block* inputs,
//! every function is an OR, over the `2^s` selector assignments `x`, of
//! `minterm_x AND block_x`, where `block_x` is the restriction of the function to `x`.
//! The synthesizer builds every minterm of the selectors and *every* function of the block
//! inputs once, so each output only costs `O(2^s)` extra gates. See [`synthesis`].
//!
//! ## Key Features
//!
//! - **Append-only gate DAG**: [`Circuit`][crate::circuit::Circuit] hands out dense
//!   [`GateId`][crate::types::GateId]s in creation order, which is also a topological order.
//! - **Labels and aliases**: every gate can be referenced by identifier or label.
//! - **Bit-parallel evaluation**: truth tables of all gates in one sweep.
//! - **Pruning**: drop everything the outputs do not depend on.
//! - **Text formats**: truth-table files in, netlists (and Graphviz) out.
//!
//! ## Basic Usage
//!
//! ```rust
//! use shannon_synth::circuit::Circuit;
//! use shannon_synth::synthesis::{synthesize, SynthesisConfig};
//! use shannon_synth::truth_table::TruthTable;
//!
//! // Majority of three inputs
//! let table: TruthTable = "00010111".parse().unwrap();
//!
//! let mut circuit = Circuit::with_inputs(3);
//! let stats = synthesize(&mut circuit, &[table.clone()], &SynthesisConfig::default()).unwrap();
//!
//! assert_eq!(circuit.output_truth_tables().unwrap(), vec![table]);
//! assert_eq!(stats.gates_after_prune, circuit.num_gates());
//! println!("{}", circuit); // netlist
//! ```

pub mod bitset;
pub mod circuit;
pub mod dot;
pub mod error;
pub mod function;
pub mod gate;
pub mod io;
pub mod netlist;
pub mod synthesis;
pub mod truth_table;
pub mod types;
