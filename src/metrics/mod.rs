//! Ranking evaluation metrics
//!
//! - `gain`: gain transforms (linear, exponential)
//! - `ranking`: DCG, ideal DCG and nDCG
//! - `batch`: parallel evaluation of many rankings

pub mod batch;
pub mod gain;
pub mod ranking;

pub use batch::{BatchReport, QueryScore, RankingQuery};
pub use gain::GainForm;
pub use ranking::{dcg, discounts, ideal_dcg, ndcg, NdcgScorer};
