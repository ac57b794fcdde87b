//! Parallel evaluation of many independent rankings
//!
//! Each query is scored on its own; one failing query is recorded in the
//! report and does not stop the others.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::ranking::NdcgScorer;
use crate::error::Result;

/// One ranking to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingQuery {
    /// Caller-supplied identifier (user, query, candidate system, ...)
    pub id: String,
    /// Ground-truth grades for all known items
    pub true_relevances: Vec<f64>,
    /// Grades of the ranked items, best first
    pub predicted_relevances: Vec<f64>,
}

impl RankingQuery {
    /// Create a new query
    pub fn new(
        id: impl Into<String>,
        true_relevances: Vec<f64>,
        predicted_relevances: Vec<f64>,
    ) -> Self {
        RankingQuery {
            id: id.into(),
            true_relevances,
            predicted_relevances,
        }
    }
}

/// Outcome for a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryScore {
    pub id: String,
    pub score: Option<f64>,
    pub error: Option<String>,
}

/// Scores for a batch, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Scorer name, e.g. `nDCG@5 (linear)`
    pub metric: String,
    pub scores: Vec<QueryScore>,
}

impl BatchReport {
    /// Mean score over the queries that succeeded
    pub fn mean_score(&self) -> Option<f64> {
        let values: Vec<f64> = self.scores.iter().filter_map(|s| s.score).collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Number of queries that produced a score
    pub fn successful(&self) -> usize {
        self.scores.iter().filter(|s| s.score.is_some()).count()
    }

    /// Number of queries that failed
    pub fn failed(&self) -> usize {
        self.scores.len() - self.successful()
    }

    /// Look up a query's outcome by id
    pub fn get(&self, id: &str) -> Option<&QueryScore> {
        self.scores.iter().find(|s| s.id == id)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl NdcgScorer {
    /// Score every query in parallel
    pub fn evaluate_batch(&self, queries: &[RankingQuery]) -> BatchReport {
        let metric = self.name();

        let scores: Vec<QueryScore> = queries
            .par_iter()
            .map(|query| {
                match self.score(&query.true_relevances, &query.predicted_relevances) {
                    Ok(score) => {
                        log::debug!("{} for '{}': {:.6}", metric, query.id, score);
                        QueryScore {
                            id: query.id.clone(),
                            score: Some(score),
                            error: None,
                        }
                    }
                    Err(e) => {
                        log::warn!("{} failed for '{}': {}", metric, query.id, e);
                        QueryScore {
                            id: query.id.clone(),
                            score: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        let report = BatchReport { metric, scores };
        log::info!(
            "{}: {} queries, {} failed",
            report.metric,
            report.scores.len(),
            report.failed()
        );
        report
    }
}
