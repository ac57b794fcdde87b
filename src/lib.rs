//! # rankeval
//!
//! Normalized Discounted Cumulative Gain (nDCG) for scoring an
//! already-produced ranking against ground-truth relevance grades.
//!
//! ```
//! use rankeval::{ndcg, GainForm};
//!
//! let rel_true = [3, 2, 3, 0, 1, 2];
//! let rel_pred = [3, 3, 2, 2, 1, 0];
//!
//! let score = ndcg(&rel_true, &rel_pred, 6, GainForm::Linear).unwrap();
//! assert!((score - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod metrics;

// Re-export commonly used types
pub use config::EvaluatorConfig;
pub use error::{Error, Result};
pub use metrics::{
    dcg, discounts, ideal_dcg, ndcg, BatchReport, GainForm, NdcgScorer, QueryScore, RankingQuery,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
