//! Construction of the augmented Vandermonde-style system.

use num_bigint::BigInt;

use crate::domain::model::Point;

/// The k x (k+1) augmented matrix: k power-basis columns plus the target
/// column. Owned exclusively by the solver once built; mutated in place
/// during elimination and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    rows: Vec<Vec<BigInt>>,
    k: usize,
}

impl LinearSystem {
    /// Builds the system from k already-validated points. Row i is
    /// `[x_i^0, x_i^1, .., x_i^(k-1), y_i]`.
    pub fn build(points: &[Point]) -> Self {
        let k = points.len();
        let rows = points
            .iter()
            .map(|p| {
                let mut row: Vec<BigInt> = (0..k).map(|j| (&p.x).pow(j as u32)).collect();
                row.push(p.y.clone());
                row
            })
            .collect();
        Self { rows, k }
    }

    pub fn order(&self) -> usize {
        self.k
    }

    pub fn entry(&self, row: usize, col: usize) -> &BigInt {
        &self.rows[row][col]
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<BigInt>> {
        &mut self.rows
    }
}
