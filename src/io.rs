//! File I/O for truth tables and netlists.
//!
//! # Truth Table File Format
//!
//! ```text
//! 00110100
//! 11101111
//! 01010101
//! ```
//!
//! One table per line, all of the same power-of-two length `2^n`. Character `r` of a
//! line is the value on the assignment whose binary encoding is `r`, input 0 being the
//! most significant bit. A trailing empty line is ignored.
//!
//! # Netlist File Format
//!
//! See [`crate::netlist`].

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::circuit::Circuit;
use crate::error::CircuitError;
use crate::truth_table::TruthTable;

/// Error type for I/O operations.
#[derive(Debug)]
pub enum IoError {
    /// File I/O error.
    Io(io::Error),
    /// Parse error at a 1-based line number.
    Parse { line: usize, message: String },
    /// The parsed content does not form a valid circuit.
    Circuit(CircuitError),
}

impl IoError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        IoError::Io(e)
    }
}

impl From<CircuitError> for IoError {
    fn from(e: CircuitError) -> Self {
        IoError::Circuit(e)
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::Io(e) => write!(f, "I/O error: {}", e),
            IoError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            IoError::Circuit(e) => write!(f, "Circuit error: {}", e),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Io(e) => Some(e),
            IoError::Parse { .. } => None,
            IoError::Circuit(e) => Some(e),
        }
    }
}

// ─── Truth tables ───

/// Parses truth tables, one per line.
pub fn parse_truth_tables(content: &str) -> Result<Vec<TruthTable>, IoError> {
    let mut lines: Vec<&str> = content.lines().map(str::trim_end).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(IoError::parse(1, "no truth tables"));
    }

    let mut tables: Vec<TruthTable> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let table: TruthTable = line
            .parse()
            .map_err(|e: CircuitError| IoError::parse(i + 1, e.to_string()))?;
        if let Some(first) = tables.first() {
            if table.len() != first.len() {
                return Err(IoError::parse(
                    i + 1,
                    format!("expected {} rows, found {}", first.len(), table.len()),
                ));
            }
        }
        tables.push(table);
    }

    debug!(
        "Parsed {} truth tables over {} inputs",
        tables.len(),
        tables[0].num_vars()
    );
    Ok(tables)
}

/// Reads truth tables from a file.
///
/// # Example
///
/// ```no_run
/// use shannon_synth::io::read_truth_tables;
///
/// let tables = read_truth_tables("tables.txt").unwrap();
/// ```
pub fn read_truth_tables<P: AsRef<Path>>(path: P) -> Result<Vec<TruthTable>, IoError> {
    let content = fs::read_to_string(path)?;
    parse_truth_tables(&content)
}

// ─── Netlists ───

impl Circuit {
    /// Saves the circuit as a netlist file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Reads a circuit from a netlist file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let content = fs::read_to_string(path)?;
        Self::from_netlist(&content)
    }
}
