//! Input validation for fairness metrics.
//!
//! Shape checks, sample-weight defaulting, and binary-coding checks shared
//! by the subgroup scorer.

use std::collections::BTreeSet;

use crate::error::{EquidadError, Result};

/// Check that the three parallel sample vectors have the same length.
///
/// # Errors
///
/// Returns [`EquidadError::LengthMismatch`] if any vector's length differs
/// from `y_true`'s.
pub fn check_equal_lengths(y_true: &[usize], y_pred: &[usize], a: &[usize]) -> Result<()> {
    let n = y_true.len();
    for other in [y_pred.len(), a.len()] {
        if other != n {
            return Err(EquidadError::LengthMismatch {
                expected: n,
                actual: other,
            });
        }
    }
    Ok(())
}

/// Validate a sample weight vector, defaulting to uniform weight 1.
///
/// `None` yields a vector of ones of length `n_samples`. Present weights
/// must have length `n_samples` and every entry must be finite and
/// non-negative.
///
/// # Errors
///
/// Returns [`EquidadError::InvalidSampleWeight`] on mismatched length or a
/// negative / non-finite entry.
///
/// # Examples
///
/// ```
/// use equidad::validation::check_sample_weight;
///
/// let weights = check_sample_weight(None, 3).unwrap();
/// assert_eq!(weights, vec![1.0, 1.0, 1.0]);
///
/// assert!(check_sample_weight(Some(&[1.0, -2.0, 1.0]), 3).is_err());
/// ```
pub fn check_sample_weight(sample_weight: Option<&[f32]>, n_samples: usize) -> Result<Vec<f32>> {
    let Some(weights) = sample_weight else {
        return Ok(vec![1.0; n_samples]);
    };
    if weights.len() != n_samples {
        return Err(EquidadError::invalid_sample_weight(format!(
            "expected length {n_samples}, got {}",
            weights.len()
        )));
    }
    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w < 0.0 {
            return Err(EquidadError::invalid_sample_weight(format!(
                "negative or non-finite weight {w} at index {i}"
            )));
        }
    }
    Ok(weights.to_vec())
}

/// Check that a target vector observes exactly the two values {0, 1}.
///
/// The rule is on *observed* values: an all-zero vector is rejected even
/// if it is nominally binary, and so is any vector containing a value
/// other than 0 or 1.
///
/// # Errors
///
/// Returns [`EquidadError::NonBinaryTarget`] otherwise.
pub fn check_binary_target(y: &[usize]) -> Result<()> {
    let distinct: BTreeSet<usize> = y.iter().copied().collect();
    if distinct.len() == 2 && distinct.contains(&0) && distinct.contains(&1) {
        Ok(())
    } else {
        Err(EquidadError::NonBinaryTarget {
            distinct: distinct.len(),
        })
    }
}

/// Check that the sensitive attribute observes exactly two distinct values
/// and return them as `(smaller, larger)`.
///
/// Unlike targets, the two codes may be arbitrary (e.g. 3 and 7); the
/// smaller code designates the reference subgroup.
///
/// # Errors
///
/// Returns [`EquidadError::NonBinarySensitiveFeature`] if the number of
/// distinct observed values is not exactly two.
pub fn check_binary_sensitive(a: &[usize]) -> Result<(usize, usize)> {
    let distinct: BTreeSet<usize> = a.iter().copied().collect();
    if distinct.len() != 2 {
        return Err(EquidadError::NonBinarySensitiveFeature {
            distinct: distinct.len(),
        });
    }
    let mut values = distinct.into_iter();
    let smaller = values.next().unwrap_or_default();
    let larger = values.next().unwrap_or_default();
    Ok((smaller, larger))
}
