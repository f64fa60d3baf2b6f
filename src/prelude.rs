//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use equidad::prelude::*;
//! ```

pub use crate::error::{EquidadError, Result};
pub use crate::metrics::classification::{base_rate, recall_score, ZeroDivision};
pub use crate::metrics::fairness::{
    demographic_parity, equal_odds, equal_opportunity, score_subgroups, Aggregate, FairnessScore,
};
