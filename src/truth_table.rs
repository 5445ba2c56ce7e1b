//! Truth tables of Boolean functions over `n` variables.
//!
//! A truth table is a `2^n`-bit vector. Row `r` holds the value of the function on the
//! input assignment whose binary encoding is `r`, with variable 0 as the *most*
//! significant bit. As text, a table is written row 0 first, so character `r` of the
//! string is row `r`:
//!
//! ```
//! use shannon_synth::truth_table::TruthTable;
//!
//! let t: TruthTable = "0001".parse().unwrap();
//! assert_eq!(t.num_vars(), 2);
//! assert!(t.get(3)); // x0 = 1, x1 = 1
//! assert_eq!(t.to_string(), "0001");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::CircuitError;

/// A truth table for a Boolean function on `n` variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    /// Number of variables
    num_vars: usize,
    /// Row `r` is bit `r`
    bits: BigUint,
}

fn full_mask(num_vars: usize) -> BigUint {
    (BigUint::one() << (1usize << num_vars)) - BigUint::one()
}

// Constructors
impl TruthTable {
    /// Create a table from its raw bits. Bits beyond row `2^n - 1` are discarded.
    pub fn new(num_vars: usize, bits: BigUint) -> Self {
        let bits = bits & full_mask(num_vars);
        Self { num_vars, bits }
    }

    /// Create a table from a `u64` (row `r` is bit `r`).
    pub fn from_u64(num_vars: usize, value: u64) -> Self {
        Self::new(num_vars, BigUint::from(value))
    }

    /// The constant zero function.
    pub fn zero(num_vars: usize) -> Self {
        Self {
            num_vars,
            bits: BigUint::zero(),
        }
    }

    /// The constant one function.
    pub fn one(num_vars: usize) -> Self {
        Self {
            num_vars,
            bits: full_mask(num_vars),
        }
    }

    /// The projection onto variable `var` (0-indexed, variable 0 varies slowest).
    pub fn variable(num_vars: usize, var: usize) -> Self {
        assert!(var < num_vars, "Variable index out of range");
        let shift = num_vars - 1 - var;
        let mut bits = BigUint::zero();
        for row in 0..(1u64 << num_vars) {
            if (row >> shift) & 1 == 1 {
                bits.set_bit(row, true);
            }
        }
        Self { num_vars, bits }
    }
}

// Getters
impl TruthTable {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows, `2^n`.
    pub fn len(&self) -> usize {
        1 << self.num_vars
    }

    pub fn get(&self, row: usize) -> bool {
        assert!(row < self.len(), "Row index out of range");
        self.bits.bit(row as u64)
    }

    pub fn set(&mut self, row: usize, value: bool) {
        assert!(row < self.len(), "Row index out of range");
        self.bits.set_bit(row as u64, value);
    }

    /// Number of rows where the function is true.
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Rows where the function is true, in increasing order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&row| self.get(row))
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.bits == full_mask(self.num_vars)
    }

    /// The table as a `u64`, if it fits (at most 6 variables).
    pub fn to_u64(&self) -> Option<u64> {
        if self.num_vars > 6 {
            return None;
        }
        self.bits.to_u64()
    }
}

// Operations
impl TruthTable {
    pub fn complement(&self) -> Self {
        Self {
            num_vars: self.num_vars,
            bits: full_mask(self.num_vars) ^ &self.bits,
        }
    }

    pub fn and(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "Variable count mismatch");
        Self {
            num_vars: self.num_vars,
            bits: &self.bits & &other.bits,
        }
    }

    pub fn or(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "Variable count mismatch");
        Self {
            num_vars: self.num_vars,
            bits: &self.bits | &other.bits,
        }
    }

    /// The `index`-th of the `2^(n - block_vars)` contiguous blocks of `2^block_vars` rows.
    ///
    /// Block `index` is the cofactor of the function where the leading
    /// `n - block_vars` variables are fixed to the binary encoding of `index`.
    pub fn block(&self, index: usize, block_vars: usize) -> Self {
        assert!(block_vars <= self.num_vars, "Block is larger than the table");
        assert!(
            index < 1 << (self.num_vars - block_vars),
            "Block index out of range"
        );
        let block_len = 1usize << block_vars;
        Self::new(block_vars, &self.bits >> (index * block_len))
    }
}

impl FromStr for TruthTable {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.len();
        if !len.is_power_of_two() {
            return Err(CircuitError::InvalidTable(format!(
                "length {} is not a power of two",
                len
            )));
        }
        if let Some(c) = s.chars().find(|&c| c != '0' && c != '1') {
            return Err(CircuitError::InvalidTable(format!(
                "unexpected character '{}'",
                c
            )));
        }
        let num_vars = len.trailing_zeros() as usize;
        let reversed: Vec<u8> = s.bytes().rev().collect();
        let bits = BigUint::parse_bytes(&reversed, 2)
            .ok_or_else(|| CircuitError::InvalidTable(s.to_string()))?;
        Ok(Self { num_vars, bits })
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = format!("{:0width$b}", self.bits, width = self.len());
        for c in s.chars().rev() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
