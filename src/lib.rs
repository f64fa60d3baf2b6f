//! Equidad: group-fairness metrics for binary classifiers in pure Rust.
//!
//! Equidad compares a classifier's predictive behavior across the two
//! subgroups induced by a binary sensitive attribute (e.g. gender, race)
//! and reports standardized disparity scores, with optional sample
//! weighting and diff/ratio aggregation.
//!
//! # Quick Start
//!
//! ```
//! use equidad::prelude::*;
//!
//! let y_true = [1, 1, 1, 1, 1, 1, 0, 0, 0, 0];
//! let y_pred = [0, 1, 1, 1, 1, 1, 0, 1, 0, 1];
//! let a      = [1, 1, 1, 1, 0, 0, 1, 1, 0, 0];
//!
//! // True positive rate per subgroup, ordered by ascending group code.
//! let scores = equal_opportunity(&y_true, &y_pred, &a, Aggregate::None, None).unwrap();
//! assert_eq!(scores.per_group(), Some([1.0, 0.75]));
//!
//! // Or a single aggregated gap.
//! let gap = equal_opportunity(&y_true, &y_pred, &a, Aggregate::Diff, None).unwrap();
//! assert_eq!(gap.scalar(), Some(0.25));
//! ```
//!
//! # Modules
//!
//! - [`metrics`]: Fairness metrics and the per-group scoring primitives
//! - [`validation`]: Input-shape, weight, and binary-coding checks
//! - [`error`]: Crate error type and `Result` alias
//!
//! # Subgroup ordering
//!
//! Per-group scores are always ordered by ascending sensitive-attribute
//! code: the reference subgroup is the one with the smaller code. This
//! convention fixes the sign of `diff` aggregation (`reference - other`)
//! and the orientation of `ratio` (`other / reference`).

pub mod error;
pub mod metrics;
pub mod prelude;
pub mod validation;

pub use error::{EquidadError, Result};
pub use metrics::fairness::{
    demographic_parity, equal_odds, equal_opportunity, Aggregate, FairnessScore,
};
