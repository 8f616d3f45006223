use num_bigint::BigInt;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::utils::error::{RecoverError, Result};
use crate::utils::validation::Validate;

/// The parsed input document: counts plus a map from the decimal
/// x-coordinate to its encoded share.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub keys: Keys,
    pub data: BTreeMap<String, ShareRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Keys {
    /// Total shares supplied.
    pub n: usize,
    /// Minimum shares required (polynomial degree + 1).
    pub k: usize,
}

/// One encoded share. The radix itself arrives string-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    pub base: String,
    pub value: String,
}

impl Validate for InputDocument {
    fn validate(&self) -> Result<()> {
        if self.keys.k < 1 {
            return Err(RecoverError::InsufficientPoints {
                have: self.keys.n,
                need: 1,
            });
        }
        if self.keys.n < self.keys.k {
            return Err(RecoverError::InsufficientPoints {
                have: self.keys.n,
                need: self.keys.k,
            });
        }
        Ok(())
    }
}

/// A decoded sample known to lie on the target polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}

/// Final result of a run: the echoed counts and the solved coefficient
/// vector, index j holding the coefficient of x^j.
#[derive(Debug, Clone)]
pub struct Recovery {
    pub n: usize,
    pub k: usize,
    pub coefficients: Vec<BigInt>,
}

impl Recovery {
    /// The coefficient of x^0, the value this whole program exists to report.
    pub fn constant_term(&self) -> &BigInt {
        &self.coefficients[0]
    }
}
