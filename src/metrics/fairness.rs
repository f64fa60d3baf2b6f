//! Group-fairness metrics over a binary sensitive attribute.
//!
//! Compares a binary classifier's behavior across the two subgroups
//! induced by a sensitive attribute: equal opportunity (true positive
//! rates), equal odds (true positive and true negative rates), and
//! demographic parity (base rates). Per-group scores can be returned raw
//! or aggregated into a single difference or ratio.
//!
//! Subgroup ordering contract: the reference subgroup is the one with the
//! smaller sensitive-attribute code, and it always sits at index 0 of a
//! per-group score vector. This fixes the sign of [`diff`] and the
//! orientation of [`ratio`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EquidadError, Result};
use crate::metrics::classification::{base_rate, recall_score, ZeroDivision};
use crate::validation::{
    check_binary_sensitive, check_binary_target, check_equal_lengths, check_sample_weight,
};

/// How per-group scores are combined into the final result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregate {
    /// Return the raw per-group scores.
    #[default]
    None,
    /// Return `scores[0] - scores[1]`.
    Diff,
    /// Return `scores[1] / scores[0]`.
    Ratio,
}

impl FromStr for Aggregate {
    type Err = EquidadError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("none") {
            Ok(Aggregate::None)
        } else if s.eq_ignore_ascii_case("diff") {
            Ok(Aggregate::Diff)
        } else if s.eq_ignore_ascii_case("ratio") {
            Ok(Aggregate::Ratio)
        } else {
            Err(EquidadError::InvalidAggregate {
                token: s.to_string(),
            })
        }
    }
}

/// Result of a fairness metric.
///
/// The shape depends on the requested [`Aggregate`]: raw per-group scores,
/// a 2×2 rate table (equal odds only), or a single aggregated scalar.
///
/// # Examples
///
/// ```
/// use equidad::metrics::fairness::FairnessScore;
///
/// let score = FairnessScore::PerGroup([1.0, 0.75]);
/// assert_eq!(score.per_group(), Some([1.0, 0.75]));
/// assert_eq!(score.scalar(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FairnessScore {
    /// One score per subgroup, ordered by ascending sensitive-attribute
    /// code.
    PerGroup([f32; 2]),
    /// Row 0: true positive rate per subgroup; row 1: true negative rate
    /// per subgroup.
    PerGroupOdds([[f32; 2]; 2]),
    /// A single aggregated value.
    Scalar(f32),
}

impl FairnessScore {
    /// Get the per-group scores if this is a `PerGroup` result.
    #[must_use]
    pub fn per_group(&self) -> Option<[f32; 2]> {
        match self {
            FairnessScore::PerGroup(scores) => Some(*scores),
            _ => None,
        }
    }

    /// Get the 2×2 rate table if this is a `PerGroupOdds` result.
    #[must_use]
    pub fn odds(&self) -> Option<[[f32; 2]; 2]> {
        match self {
            FairnessScore::PerGroupOdds(rates) => Some(*rates),
            _ => None,
        }
    }

    /// Get the aggregated value if this is a `Scalar` result.
    #[must_use]
    pub fn scalar(&self) -> Option<f32> {
        match self {
            FairnessScore::Scalar(value) => Some(*value),
            _ => None,
        }
    }
}

/// Compute the difference between two subgroup scores.
///
/// diff = `scores[0]` - `scores[1]` (reference subgroup minus the other).
///
/// # Errors
///
/// Returns [`EquidadError::ScoreArity`] unless `scores` has exactly two
/// elements.
pub fn diff(scores: &[f32]) -> Result<f32> {
    if scores.len() != 2 {
        return Err(EquidadError::ScoreArity {
            actual: scores.len(),
        });
    }
    Ok(scores[0] - scores[1])
}

/// Compute the ratio of two subgroup scores.
///
/// ratio = `scores[1]` / `scores[0]` (the other subgroup over the
/// reference). A zero denominator follows IEEE-754 division semantics and
/// produces an infinity or NaN, not an error.
///
/// # Errors
///
/// Returns [`EquidadError::ScoreArity`] unless `scores` has exactly two
/// elements.
pub fn ratio(scores: &[f32]) -> Result<f32> {
    if scores.len() != 2 {
        return Err(EquidadError::ScoreArity {
            actual: scores.len(),
        });
    }
    Ok(scores[1] / scores[0])
}

/// Partition samples by sensitive-attribute value and score each subgroup.
///
/// Validation runs in a fixed order: vector lengths, then sample weights,
/// then binary-ness of `y_true` and `y_pred`, then binary-ness of `a`.
/// The two distinct values of `a` sorted ascending define subgroup 0
/// (reference) and subgroup 1; for each, `metric` receives the subgroup's
/// `y_true`, `y_pred`, and weight slices and returns one score.
///
/// The scorer is agnostic to what `metric` computes; each fairness metric
/// binds its fixed parameters (positive label, zero-division policy) into
/// a closure before calling in.
///
/// # Errors
///
/// Any validation failure from [`crate::validation`] propagates unchanged.
///
/// # Examples
///
/// ```
/// use equidad::metrics::classification::{recall_score, ZeroDivision};
/// use equidad::metrics::fairness::score_subgroups;
///
/// let y_true = [1, 1, 1, 1, 0, 0];
/// let y_pred = [0, 1, 1, 1, 0, 1];
/// let a = [0, 0, 1, 1, 0, 1];
/// let tpr = |yt: &[usize], yp: &[usize], w: &[f32]| {
///     recall_score(yt, yp, w, 1, ZeroDivision::Nan)
/// };
/// let scores = score_subgroups(&y_true, &y_pred, &a, tpr, None).unwrap();
/// assert!((scores[0] - 0.5).abs() < 1e-6);
/// assert!((scores[1] - 1.0).abs() < 1e-6);
/// ```
pub fn score_subgroups<F>(
    y_true: &[usize],
    y_pred: &[usize],
    a: &[usize],
    metric: F,
    sample_weight: Option<&[f32]>,
) -> Result<[f32; 2]>
where
    F: Fn(&[usize], &[usize], &[f32]) -> f32,
{
    check_equal_lengths(y_true, y_pred, a)?;
    let weights = check_sample_weight(sample_weight, y_true.len())?;
    check_binary_target(y_true)?;
    check_binary_target(y_pred)?;
    let (smaller, larger) = check_binary_sensitive(a)?;

    let mut scores = [0.0f32; 2];
    for (slot, group) in [smaller, larger].into_iter().enumerate() {
        let mut group_true = Vec::new();
        let mut group_pred = Vec::new();
        let mut group_weight = Vec::new();
        for (i, &code) in a.iter().enumerate() {
            if code == group {
                group_true.push(y_true[i]);
                group_pred.push(y_pred[i]);
                group_weight.push(weights[i]);
            }
        }
        scores[slot] = metric(&group_true, &group_pred, &group_weight);
    }
    Ok(scores)
}

fn aggregate_pair(scores: [f32; 2], aggregate: Aggregate) -> Result<FairnessScore> {
    match aggregate {
        Aggregate::None => Ok(FairnessScore::PerGroup(scores)),
        Aggregate::Diff => Ok(FairnessScore::Scalar(diff(&scores)?)),
        Aggregate::Ratio => Ok(FairnessScore::Scalar(ratio(&scores)?)),
    }
}

/// Equal opportunity: equal true positive rates (recall) across subgroups.
///
/// Computes the weighted true positive rate per subgroup, then aggregates
/// per `aggregate`. A subgroup with no actual positives yields NaN for its
/// rate (see [`ZeroDivision`]).
///
/// # Errors
///
/// Propagates validation errors from [`score_subgroups`].
///
/// # Examples
///
/// ```
/// use equidad::metrics::fairness::{equal_opportunity, Aggregate, FairnessScore};
///
/// let y_true = [1, 1, 1, 1, 1, 1, 0, 0, 0, 0];
/// let y_pred = [0, 1, 1, 1, 1, 1, 0, 1, 0, 1];
/// let a = [1, 1, 1, 1, 0, 0, 1, 1, 0, 0];
/// let gap = equal_opportunity(&y_true, &y_pred, &a, Aggregate::Diff, None).unwrap();
/// assert_eq!(gap, FairnessScore::Scalar(0.25));
/// ```
pub fn equal_opportunity(
    y_true: &[usize],
    y_pred: &[usize],
    a: &[usize],
    aggregate: Aggregate,
    sample_weight: Option<&[f32]>,
) -> Result<FairnessScore> {
    let tpr = score_subgroups(
        y_true,
        y_pred,
        a,
        |yt, yp, w| recall_score(yt, yp, w, 1, ZeroDivision::default()),
        sample_weight,
    )?;
    aggregate_pair(tpr, aggregate)
}

/// Demographic parity: equal base rates (fraction predicted positive)
/// across subgroups.
///
/// Ground truth plays no part in the score; `y_true` is accepted only for
/// a uniform calling convention and may be `None`, in which case `y_pred`
/// stands in for it so the scorer's validation applies uniformly.
///
/// # Errors
///
/// Propagates validation errors from [`score_subgroups`].
///
/// # Examples
///
/// ```
/// use equidad::metrics::fairness::{demographic_parity, Aggregate, FairnessScore};
///
/// let y_pred = [1, 0, 1, 0, 1, 1, 1, 0];
/// let a = [1, 1, 1, 1, 0, 0, 0, 0];
/// let rates = demographic_parity(None, &y_pred, &a, Aggregate::None, None).unwrap();
/// assert_eq!(rates, FairnessScore::PerGroup([0.75, 0.5]));
/// ```
pub fn demographic_parity(
    y_true: Option<&[usize]>,
    y_pred: &[usize],
    a: &[usize],
    aggregate: Aggregate,
    sample_weight: Option<&[f32]>,
) -> Result<FairnessScore> {
    let y_ref = y_true.unwrap_or(y_pred);
    let rates = score_subgroups(
        y_ref,
        y_pred,
        a,
        |_yt, yp, w| base_rate(yp, w),
        sample_weight,
    )?;
    aggregate_pair(rates, aggregate)
}

/// Equal odds: equal true positive and true negative rates across
/// subgroups.
///
/// With [`Aggregate::None`] the result is a 2×2 table (row 0 = TPR per
/// subgroup, row 1 = TNR per subgroup); with `Diff` or `Ratio` it is the
/// arithmetic mean of the aggregated TPR and TNR pairs.
///
/// # Errors
///
/// Propagates validation errors from [`score_subgroups`].
///
/// # Examples
///
/// ```
/// use equidad::metrics::fairness::{equal_odds, Aggregate};
///
/// let y_true = [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1];
/// let y_pred = [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1];
/// let a = [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0];
/// let gap = equal_odds(&y_true, &y_pred, &a, Aggregate::Diff, None).unwrap();
/// assert!((gap.scalar().unwrap() - 2.0 / 3.0).abs() < 1e-6);
/// ```
pub fn equal_odds(
    y_true: &[usize],
    y_pred: &[usize],
    a: &[usize],
    aggregate: Aggregate,
    sample_weight: Option<&[f32]>,
) -> Result<FairnessScore> {
    let tpr = score_subgroups(
        y_true,
        y_pred,
        a,
        |yt, yp, w| recall_score(yt, yp, w, 1, ZeroDivision::default()),
        sample_weight,
    )?;
    let tnr = score_subgroups(
        y_true,
        y_pred,
        a,
        |yt, yp, w| recall_score(yt, yp, w, 0, ZeroDivision::default()),
        sample_weight,
    )?;

    match aggregate {
        Aggregate::None => Ok(FairnessScore::PerGroupOdds([tpr, tnr])),
        Aggregate::Diff => Ok(FairnessScore::Scalar((diff(&tpr)? + diff(&tnr)?) / 2.0)),
        Aggregate::Ratio => Ok(FairnessScore::Scalar((ratio(&tpr)? + ratio(&tnr)?) / 2.0)),
    }
}

#[cfg(test)]
#[path = "fairness_tests.rs"]
mod tests;
