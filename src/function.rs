//! Small Boolean functions used to label and evaluate gates.
//!
//! A [`BooleanFunction`] of arity `k` stores its truth table as `2^k` bits, where bit `i`
//! is the output when the arguments, first argument most significant, form the binary
//! number `i`. Tables are written row 0 first, e.g. AND is `"0001"`.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use crate::error::{CircuitError, Result};
use crate::truth_table::TruthTable;

/// Largest supported arity (the table must fit into a `u64`).
pub const MAX_ARITY: usize = 6;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BooleanFunction {
    arity: usize,
    table: u64,
    name: Cow<'static, str>,
}

// Primitives
impl BooleanFunction {
    pub const NOT: Self = Self::primitive(1, 0b01, "NOT");
    pub const BUFF: Self = Self::primitive(1, 0b10, "BUFF");
    pub const AND: Self = Self::primitive(2, 0b1000, "AND");
    pub const OR: Self = Self::primitive(2, 0b1110, "OR");
    pub const NAND: Self = Self::primitive(2, 0b0111, "NAND");
    pub const NOR: Self = Self::primitive(2, 0b0001, "NOR");
    pub const XOR: Self = Self::primitive(2, 0b0110, "XOR");
    pub const XNOR: Self = Self::primitive(2, 0b1001, "XNOR");
    pub const ZERO: Self = Self::primitive(1, 0b00, "ZERO");
    pub const ONE: Self = Self::primitive(1, 0b11, "ONE");

    /// All primitive functions.
    pub const PRIMITIVES: [Self; 10] = [
        Self::NOT,
        Self::BUFF,
        Self::AND,
        Self::OR,
        Self::NAND,
        Self::NOR,
        Self::XOR,
        Self::XNOR,
        Self::ZERO,
        Self::ONE,
    ];

    const fn primitive(arity: usize, table: u64, name: &'static str) -> Self {
        Self {
            arity,
            table,
            name: Cow::Borrowed(name),
        }
    }

    /// Look up a primitive function by its display name.
    pub fn lookup(name: &str) -> Result<Self> {
        Self::PRIMITIVES
            .iter()
            .find(|f| f.name() == name)
            .cloned()
            .ok_or_else(|| CircuitError::UnknownFunction(name.to_string()))
    }
}

// Constructors
impl BooleanFunction {
    /// Create a function from its table string (`'0'`/`'1'`, length `2^k`).
    pub fn from_table(table: &str, name: impl Into<Cow<'static, str>>) -> Result<Self> {
        let bits = table
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CircuitError::InvalidTable(format!(
                    "unexpected character '{}'",
                    c
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        let function = Self::from_bits(&bits, name)?;
        debug_assert_eq!(function.table_string(), table);
        Ok(function)
    }

    /// Create a function from its table as a list of bits (row 0 first).
    pub fn from_bits(bits: &[bool], name: impl Into<Cow<'static, str>>) -> Result<Self> {
        let len = bits.len();
        if !len.is_power_of_two() {
            return Err(CircuitError::InvalidTable(format!(
                "length {} is not a power of two",
                len
            )));
        }
        let arity = len.trailing_zeros() as usize;
        if arity > MAX_ARITY {
            return Err(CircuitError::InvalidTable(format!(
                "arity {} exceeds {}",
                arity, MAX_ARITY
            )));
        }
        let table = bits
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | ((b as u64) << i));
        Ok(Self {
            arity,
            table,
            name: name.into(),
        })
    }
}

// Getters
impl BooleanFunction {
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw table bits: bit `i` is the output for argument index `i`.
    pub fn table(&self) -> u64 {
        self.table
    }

    /// The output for the argument index `index`.
    pub fn value(&self, index: usize) -> bool {
        assert!(index < 1 << self.arity, "Argument index out of range");
        (self.table >> index) & 1 == 1
    }

    /// The table as a `'0'`/`'1'` string, row 0 first.
    pub fn table_string(&self) -> String {
        (0..1usize << self.arity)
            .map(|i| if self.value(i) { '1' } else { '0' })
            .collect()
    }
}

// Evaluation
impl BooleanFunction {
    /// Evaluate the function. The first argument is the most significant bit of the index.
    pub fn evaluate(&self, args: &[bool]) -> Result<bool> {
        if args.len() != self.arity {
            return Err(CircuitError::ArityMismatch {
                expected: self.arity,
                found: args.len(),
            });
        }
        let index = args
            .iter()
            .fold(0usize, |acc, &arg| (acc << 1) | arg as usize);
        Ok(self.value(index))
    }

    /// Evaluate the function on whole truth tables at once.
    ///
    /// Every argument must be a table over `num_vars` variables; the result is the
    /// table of the composed function over the same variables.
    pub fn apply(&self, num_vars: usize, args: &[&TruthTable]) -> Result<TruthTable> {
        if args.len() != self.arity {
            return Err(CircuitError::ArityMismatch {
                expected: self.arity,
                found: args.len(),
            });
        }
        if let Some(arg) = args.iter().find(|t| t.num_vars() != num_vars) {
            return Err(CircuitError::ArityMismatch {
                expected: num_vars,
                found: arg.num_vars(),
            });
        }

        let complements: Vec<TruthTable> = args.iter().map(|t| t.complement()).collect();
        let mut result = TruthTable::zero(num_vars);
        for index in (0..1usize << self.arity).filter(|&i| self.value(i)) {
            let mut term = TruthTable::one(num_vars);
            for (position, arg) in args.iter().enumerate() {
                let bit = (index >> (self.arity - 1 - position)) & 1 == 1;
                term = if bit {
                    term.and(arg)
                } else {
                    term.and(&complements[position])
                };
            }
            result = result.or(&term);
        }
        Ok(result)
    }
}

impl Display for BooleanFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
