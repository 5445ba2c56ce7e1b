//! Netlist text format.
//!
//! ```text
//! INPUT(x0)
//! INPUT(x1)
//! n_x0=NOT(x0)
//! g=AND(n_x0, x1)
//! OUTPUT(g)
//! ```
//!
//! One line per gate in creation order: `INPUT(label)` for inputs and
//! `label=FUNCTION(arg, arg, ...)` for derived gates, arguments referring to gates by
//! their primary labels. Then one `OUTPUT(label)` line per output, in output order.
//! Only primitive function names (see [`BooleanFunction::PRIMITIVES`]) can be read back.

use std::fmt::{Display, Formatter};

use crate::circuit::Circuit;
use crate::function::BooleanFunction;
use crate::gate::{GateKind, GateRef};
use crate::io::IoError;

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for gate in self.gates() {
            match gate.kind() {
                GateKind::Input => writeln!(f, "INPUT({})", gate.label())?,
                GateKind::Derived { function, inputs } => {
                    write!(f, "{}={}(", gate.label(), function.name())?;
                    for (i, input) in inputs.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self[*input].label())?;
                    }
                    writeln!(f, ")")?;
                }
            }
        }
        for &output in self.outputs() {
            writeln!(f, "OUTPUT({})", self[output].label())?;
        }
        Ok(())
    }
}

/// Splits `NAME(a, b, ...)` into the name and its trimmed arguments.
fn parse_call(s: &str) -> Option<(&str, Vec<&str>)> {
    let (name, rest) = s.split_once('(')?;
    let args = rest.trim_end().strip_suffix(')')?;
    let args = if args.trim().is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::trim).collect()
    };
    Some((name.trim(), args))
}

impl Circuit {
    /// Parses a circuit from the netlist format.
    ///
    /// All `INPUT` lines must come before the first gate definition. Empty lines and
    /// lines starting with `#` are skipped.
    pub fn from_netlist(content: &str) -> Result<Self, IoError> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .peekable();

        let mut input_labels: Vec<&str> = Vec::new();
        while let Some(&(_, line)) = lines.peek() {
            match parse_call(line) {
                Some(("INPUT", args)) if args.len() == 1 && !line.contains('=') => {
                    input_labels.push(args[0]);
                    lines.next();
                }
                _ => break,
            }
        }
        let mut circuit = Circuit::new(input_labels)?;

        for (line_no, line) in lines {
            if let Some((label, call)) = line.split_once('=') {
                let (name, args) = parse_call(call)
                    .ok_or_else(|| IoError::parse(line_no, format!("malformed gate '{}'", line)))?;
                let function = BooleanFunction::lookup(name)
                    .map_err(|e| IoError::parse(line_no, e.to_string()))?;
                let args: Vec<GateRef<'_>> = args.into_iter().map(GateRef::from).collect();
                circuit
                    .add_gate(label.trim(), function, &args)
                    .map_err(|e| IoError::parse(line_no, e.to_string()))?;
                continue;
            }

            match parse_call(line) {
                Some(("OUTPUT", args)) if args.len() == 1 => {
                    circuit
                        .mark_output(args[0])
                        .map_err(|e| IoError::parse(line_no, e.to_string()))?;
                }
                Some(("INPUT", _)) => {
                    return Err(IoError::parse(line_no, "INPUT after gate definitions"));
                }
                _ => return Err(IoError::parse(line_no, format!("unexpected line '{}'", line))),
            }
        }

        Ok(circuit)
    }
}
