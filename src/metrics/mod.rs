//! Evaluation metrics for binary classifiers.
//!
//! Includes the weighted per-group scoring primitives (recall for a
//! selectable positive label, base rate) and the group-fairness metrics
//! built on them (equal opportunity, equal odds, demographic parity).

pub mod classification;
pub mod fairness;

pub use classification::{base_rate, recall_score, ZeroDivision};
pub use fairness::{
    demographic_parity, diff, equal_odds, equal_opportunity, ratio, score_subgroups, Aggregate,
    FairnessScore,
};
