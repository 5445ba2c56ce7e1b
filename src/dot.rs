//! Circuit to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Input gates** are rendered as boxes at the top (source rank)
//! - **Derived gates** are rendered as ellipses labeled with their function, grouped by depth
//! - **Edges** point from each argument to the gate using it
//! - **Outputs** are rendered as double octagons at the bottom (sink rank)
//!
//! Only gates reachable from the outputs are drawn.
//!
//! # Examples
//!
//! ```
//! use shannon_synth::circuit::Circuit;
//! use shannon_synth::function::BooleanFunction;
//!
//! let mut circuit = Circuit::new(["a", "b"]).unwrap();
//! let g = circuit
//!     .add_gate("g", BooleanFunction::AND, &["a".into(), "b".into()])
//!     .unwrap();
//! circuit.mark_output(g).unwrap();
//!
//! let dot = circuit.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::BTreeMap;

use crate::circuit::Circuit;
use crate::gate::GateKind;

/// Configuration options for DOT output generation.
///
/// # Examples
///
/// ```
/// use shannon_synth::circuit::Circuit;
/// use shannon_synth::dot::DotConfig;
///
/// let mut circuit = Circuit::with_inputs(1);
/// circuit.mark_output("x0").unwrap();
/// let config = DotConfig {
///     show_labels: false,
///     ..DotConfig::default()
/// };
///
/// let dot = circuit.to_dot_with_config(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for input gates (default: "box")
    pub input_shape: &'static str,
    /// Shape for derived gates (default: "ellipse")
    pub gate_shape: &'static str,
    /// Shape for output markers (default: "doubleoctagon")
    pub output_shape: &'static str,
    /// Whether to print gate labels next to function names (default: true)
    pub show_labels: bool,
    /// Whether to group gates of equal depth on the same rank (default: true)
    pub rank_by_depth: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            input_shape: "box",
            gate_shape: "ellipse",
            output_shape: "doubleoctagon",
            show_labels: true,
            rank_by_depth: true,
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Circuit {
    /// Converts the circuit to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the circuit to DOT format.
    ///
    /// Inputs are always drawn, even when unused; derived gates only when some output
    /// depends on them.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let reachable = self.find_reachable_from_outputs();

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.gate_shape)?;

        // Inputs
        writeln!(dot, "{{ rank=source")?;
        for (i, label) in self.input_labels().iter().enumerate() {
            writeln!(
                dot,
                "g{} [shape={}, label=\"{}\"];",
                i,
                config.input_shape,
                escape(label)
            )?;
        }
        writeln!(dot, "}}")?;

        // Depth of every gate, inputs at depth 0
        let mut depth = vec![0usize; self.num_gates()];
        let mut levels = BTreeMap::<usize, Vec<usize>>::new();
        for gate in self.gates() {
            if let GateKind::Derived { inputs, .. } = gate.kind() {
                let d = 1 + inputs.iter().map(|id| depth[id.index()]).max().unwrap_or(0);
                depth[gate.id().index()] = d;
                if reachable.contains(gate.id()) {
                    levels.entry(d).or_default().push(gate.id().index());
                }
            }
        }

        for level in levels.values() {
            if config.rank_by_depth {
                writeln!(dot, "{{ rank=same")?;
            }
            for &index in level.iter() {
                let gate = &self.gates()[index];
                let name = gate.function().map(|f| f.name()).unwrap_or_default();
                let label = if config.show_labels {
                    format!("{}\\n{}", escape(name), escape(gate.label()))
                } else {
                    escape(name)
                };
                writeln!(dot, "g{} [label=\"{}\"];", index, label)?;
            }
            if config.rank_by_depth {
                writeln!(dot, "}}")?;
            }
        }

        // Argument edges
        for id in reachable.iter() {
            for input in self[id].inputs() {
                writeln!(dot, "g{} -> g{};", input.index(), id.index())?;
            }
        }

        // Outputs
        writeln!(dot, "{{ rank=sink")?;
        for i in 0..self.num_outputs() {
            writeln!(
                dot,
                "o{} [shape={}, label=\"out{}\"];",
                i, config.output_shape, i
            )?;
        }
        writeln!(dot, "}}")?;
        for (i, output) in self.outputs().iter().enumerate() {
            writeln!(dot, "g{} -> o{};", output.index(), i)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
