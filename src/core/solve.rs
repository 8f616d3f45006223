//! Gaussian elimination over exact integers.
//!
//! This deliberately mirrors the original computation: elimination factors
//! and back-substitution quotients use integer division, not rational
//! arithmetic. Division is Euclidean throughout (`num_traits::Euclid`), the
//! same convention as Go's `big.Int.Div`, so results match the original even
//! when negative intermediates appear. When a division is inexact the
//! truncated factor is used as-is and later entries may be corrupted; that
//! is surfaced as a warning but not corrected.

use num_bigint::BigInt;
use num_traits::{Euclid, Zero};

use crate::core::matrix::LinearSystem;
use crate::utils::error::{RecoverError, Result};

/// Reduces the system to triangular form and solves for the coefficient
/// vector; index j is the coefficient of x^j. The system is consumed by
/// mutation and has no meaning afterwards.
pub fn solve(system: &mut LinearSystem) -> Result<Vec<BigInt>> {
    let k = system.order();
    let rows = system.rows_mut();

    // Forward elimination.
    for i in 0..k {
        if rows[i][i].is_zero() {
            return Err(RecoverError::SingularMatrix { row: i });
        }
        for j in (i + 1)..k {
            let factor = checked_div(&rows[j][i], &rows[i][i], i)?;
            for l in i..=k {
                let scaled = &factor * &rows[i][l];
                rows[j][l] -= scaled;
            }
        }
    }

    // Back substitution.
    let mut coeffs = vec![BigInt::zero(); k];
    for i in (0..k).rev() {
        let mut value = rows[i][k].clone();
        for j in (i + 1)..k {
            value -= &rows[i][j] * &coeffs[j];
        }
        coeffs[i] = checked_div(&value, &rows[i][i], i)?;
    }

    Ok(coeffs)
}

/// Euclidean division with a zero-pivot guard. An inexact quotient is kept
/// (matching the original), but logged so the corruption is visible.
fn checked_div(numerator: &BigInt, pivot: &BigInt, row: usize) -> Result<BigInt> {
    if pivot.is_zero() {
        return Err(RecoverError::SingularMatrix { row });
    }
    if !numerator.rem_euclid(pivot).is_zero() {
        tracing::warn!(
            "Inexact division {} / {} at pivot row {}; result may be corrupted",
            numerator,
            pivot,
            row
        );
    }
    Ok(numerator.div_euclid(pivot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Point;

    fn points(data: &[(i64, i64)]) -> Vec<Point> {
        data.iter()
            .map(|&(x, y)| Point::new(BigInt::from(x), BigInt::from(y)))
            .collect()
    }

    fn solve_points(data: &[(i64, i64)]) -> Result<Vec<BigInt>> {
        let mut system = LinearSystem::build(&points(data));
        solve(&mut system)
    }

    #[test]
    fn recovers_reference_polynomial() {
        // (1,4), (2,7), (3,12) lie on 3 + x^2.
        let coeffs = solve_points(&[(1, 4), (2, 7), (3, 12)]).unwrap();
        assert_eq!(coeffs, vec![BigInt::from(3), BigInt::from(0), BigInt::from(1)]);
    }

    #[test]
    fn solves_degree_zero() {
        let coeffs = solve_points(&[(5, 42)]).unwrap();
        assert_eq!(coeffs, vec![BigInt::from(42)]);
    }

    #[test]
    fn solves_linear_system() {
        // y = 7x - 2
        let coeffs = solve_points(&[(1, 5), (2, 12)]).unwrap();
        assert_eq!(coeffs, vec![BigInt::from(-2), BigInt::from(7)]);
    }

    #[test]
    fn recovers_negative_coefficients() {
        // y = -x^2 + 2x - 3 at x = 1, 2, 3
        let coeffs = solve_points(&[(1, -2), (2, -3), (3, -6)]).unwrap();
        assert_eq!(
            coeffs,
            vec![BigInt::from(-3), BigInt::from(2), BigInt::from(-1)]
        );
    }

    #[test]
    fn exact_for_values_beyond_machine_width() {
        // y = c + x^3 with a constant term far outside u128 range.
        let c = BigInt::from(7) << 200;
        let pts: Vec<Point> = (1i64..=4)
            .map(|x| {
                let big_x = BigInt::from(x);
                let y = &c + BigInt::from(x * x * x);
                Point::new(big_x, y)
            })
            .collect();
        let mut system = LinearSystem::build(&pts);
        let coeffs = solve(&mut system).unwrap();
        assert_eq!(coeffs[0], c);
        assert_eq!(coeffs[3], BigInt::from(1));
    }

    #[test]
    fn zero_pivot_is_reported_not_crashed() {
        // Two identical abscissae make the pivot vanish during elimination.
        let mut system = LinearSystem::build(&points(&[(2, 5), (2, 5), (3, 7)]));
        let err = solve(&mut system).unwrap_err();
        assert!(matches!(err, RecoverError::SingularMatrix { .. }));
    }
}
