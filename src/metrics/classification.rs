//! Weighted classification scores over binary label slices.
//!
//! Provides the per-group scoring primitives the fairness metrics plug
//! into the subgroup scorer: weighted recall for a selectable positive
//! label, and the weighted base rate of predictions.

use serde::{Deserialize, Serialize};

/// Policy for a recall computation whose denominator is zero (no samples
/// of the positive label in the slice).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroDivision {
    /// Return `f32::NAN`.
    #[default]
    Nan,
    /// Return 0.0.
    Zero,
    /// Return 1.0.
    One,
}

impl ZeroDivision {
    /// Sentinel value produced when the denominator is zero.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            ZeroDivision::Nan => f32::NAN,
            ZeroDivision::Zero => 0.0,
            ZeroDivision::One => 1.0,
        }
    }
}

/// Compute weighted recall for the given positive label.
///
/// recall = weighted TP mass / weighted actual-positive mass
///
/// With `pos_label = 1` this is the true positive rate; with
/// `pos_label = 0` it is the true negative rate. When the slice holds no
/// samples of `pos_label`, the result is dictated by `zero_division`.
///
/// Callers are expected to have validated that labels are binary and the
/// slices are parallel; the subgroup scorer does this before slicing.
///
/// # Examples
///
/// ```
/// use equidad::metrics::classification::{recall_score, ZeroDivision};
///
/// let y_true = [1, 1, 1, 1, 0, 0];
/// let y_pred = [0, 1, 1, 1, 0, 1];
/// let weights = [1.0; 6];
/// let tpr = recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Nan);
/// assert!((tpr - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn recall_score(
    y_true: &[usize],
    y_pred: &[usize],
    sample_weight: &[f32],
    pos_label: usize,
    zero_division: ZeroDivision,
) -> f32 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    debug_assert_eq!(y_true.len(), sample_weight.len());

    let mut true_positive = 0.0f32;
    let mut support = 0.0f32;
    for ((&t, &p), &w) in y_true.iter().zip(y_pred.iter()).zip(sample_weight.iter()) {
        if t == pos_label {
            support += w;
            if p == pos_label {
                true_positive += w;
            }
        }
    }

    if support == 0.0 {
        zero_division.value()
    } else {
        true_positive / support
    }
}

/// Compute the weighted fraction of predicted-positive samples.
///
/// base rate = Σ `y_pred[i]`·`w[i]` / Σ `w[i]`
///
/// Ground truth plays no part. An empty slice, or one whose weights sum
/// to zero, yields `f32::NAN`.
///
/// # Examples
///
/// ```
/// use equidad::metrics::classification::base_rate;
///
/// let y_pred = [1, 0, 1, 0];
/// let rate = base_rate(&y_pred, &[1.0; 4]);
/// assert!((rate - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn base_rate(y_pred: &[usize], sample_weight: &[f32]) -> f32 {
    debug_assert_eq!(y_pred.len(), sample_weight.len());
    debug_assert!(y_pred.iter().all(|&p| p <= 1));

    let mut positive_mass = 0.0f32;
    let mut total_mass = 0.0f32;
    for (&p, &w) in y_pred.iter().zip(sample_weight.iter()) {
        total_mass += w;
        positive_mass += p as f32 * w;
    }

    if total_mass == 0.0 {
        f32::NAN
    } else {
        positive_mass / total_mass
    }
}

#[cfg(test)]
#[path = "classification_tests.rs"]
mod tests;
