//! Assembles the k points used for reconstruction from the raw records.
//!
//! A record that fails to decode is logged and dropped; the run only aborts
//! when the document as a whole cannot yield k usable points.

use crate::core::decode::{decode_digits, parse_base};
use crate::domain::model::{InputDocument, Point, ShareRecord};
use crate::utils::error::{RecoverError, Result};

/// Decodes every record, keeps the survivors, and selects the k points with
/// the smallest x-coordinates, ascending. Selection is fully deterministic
/// for a given document.
pub fn collect(doc: &InputDocument) -> Result<Vec<Point>> {
    let (n, k) = (doc.keys.n, doc.keys.k);
    if k < 1 {
        return Err(RecoverError::InsufficientPoints { have: n, need: 1 });
    }
    if n < k {
        return Err(RecoverError::InsufficientPoints { have: n, need: k });
    }

    let mut points: Vec<Point> = Vec::with_capacity(doc.data.len());
    for (key, record) in &doc.data {
        match decode_record(key, record) {
            Ok(point) => points.push(point),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Skipping record '{}': {}", key, e);
            }
            Err(e) => return Err(e),
        }
    }

    if points.len() < k {
        return Err(RecoverError::InsufficientPoints {
            have: points.len(),
            need: k,
        });
    }

    points.sort_by(|a, b| a.x.cmp(&b.x));
    points.truncate(k);

    // The selected x-values must be pairwise distinct or the system is
    // singular over the rationals. Adjacent comparison suffices after sorting.
    for pair in points.windows(2) {
        if pair[0].x == pair[1].x {
            return Err(RecoverError::DuplicateAbscissa {
                x: pair[0].x.to_string(),
            });
        }
    }

    Ok(points)
}

fn decode_record(key: &str, record: &ShareRecord) -> Result<Point> {
    // Map keys are always decimal.
    let x = decode_digits(10, key)?;
    let base = parse_base(&record.base)?;
    let y = decode_digits(base, &record.value)?;
    Ok(Point::new(x, y))
}
