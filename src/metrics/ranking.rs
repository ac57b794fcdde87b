//! Ranking quality metrics
//!
//! Normalized Discounted Cumulative Gain (nDCG) compares the order a ranking
//! system produced against the best possible order of the same relevance
//! grades:
//!
//! ```text
//! DCG@k  = Σ_{i=0}^{k-1} gain(rel_i) / log2(i + 2)
//! nDCG@k = DCG@k / IDCG@k
//! ```
//!
//! where IDCG@k is the DCG of the true grades sorted in descending order.
//!
//! # Examples
//!
//! ```
//! use rankeval::metrics::ranking::ndcg;
//! use rankeval::metrics::GainForm;
//!
//! let rel_true = [3, 3, 2, 2, 1, 1, 0, 0, 0];
//! let rel_pred = [3, 1, 2, 1, 0];
//!
//! let score = ndcg(&rel_true, &rel_pred, 5, GainForm::Linear).unwrap();
//! assert!((score - 0.7088).abs() < 1e-3);
//! ```

use std::cmp::Ordering;

use num_traits::ToPrimitive;

use super::gain::GainForm;
use crate::config::EvaluatorConfig;
use crate::error::{Error, Result};

/// Position discounts `1 / log2(i + 2)` for `i` in `0..k`
///
/// The first rank always gets a discount of exactly 1.
pub fn discounts(k: usize) -> Vec<f64> {
    (0..k).map(|i| 1.0 / ((i + 2) as f64).log2()).collect()
}

/// Discounted Cumulative Gain of a ranked list of relevance grades
///
/// # Arguments
/// * `relevances` - grades in ranked order (best first)
/// * `p` - rank cutoff, clamped to the length of `relevances`
/// * `form` - gain transform
///
/// # Returns
/// * `Result<f64>` - the DCG at `min(p, relevances.len())`
pub fn dcg<T: ToPrimitive>(relevances: &[T], p: usize, form: GainForm) -> Result<f64> {
    check_cutoff(p)?;
    let grades = to_grades(relevances, "relevances")?;
    let k = p.min(grades.len());
    discounted_gain(&grades, &discounts(k), form)
}

/// Ideal DCG: the DCG of `relevances` sorted in descending order
///
/// # Arguments
/// * `relevances` - grades in any order
/// * `p` - rank cutoff, clamped to the length of `relevances`
/// * `form` - gain transform
///
/// # Returns
/// * `Result<f64>` - the best DCG achievable with these grades
pub fn ideal_dcg<T: ToPrimitive>(relevances: &[T], p: usize, form: GainForm) -> Result<f64> {
    check_cutoff(p)?;
    let mut grades = to_grades(relevances, "relevances")?;
    sort_descending(&mut grades);
    let k = p.min(grades.len());
    discounted_gain(&grades, &discounts(k), form)
}

/// Normalized Discounted Cumulative Gain
///
/// The cutoff is clamped to `min(p, rel_true.len(), rel_pred.len())` and the
/// same clamped value is used for both DCG and IDCG.
///
/// # Arguments
/// * `rel_true` - ground-truth grades for all known items, any order
/// * `rel_pred` - grades of the items in the order the ranking produced them
/// * `p` - rank cutoff
/// * `form` - gain transform
///
/// # Returns
/// * `Result<f64>` - score in [0, 1] for achievable predictions
///
/// # Errors
/// * `DimensionMismatch` - `p` is zero or either sequence is empty
/// * `InvalidValue` - a grade is negative, not finite or the gain overflows
/// * `DegenerateInput` - the ideal DCG is zero, so the ratio is undefined
pub fn ndcg<T, U>(rel_true: &[T], rel_pred: &[U], p: usize, form: GainForm) -> Result<f64>
where
    T: ToPrimitive,
    U: ToPrimitive,
{
    check_cutoff(p)?;
    let mut ideal = to_grades(rel_true, "true relevances")?;
    let predicted = to_grades(rel_pred, "predicted relevances")?;

    sort_descending(&mut ideal);
    let k = p.min(ideal.len()).min(predicted.len());
    let discount = discounts(k);

    let idcg = discounted_gain(&ideal, &discount, form)?;
    let dcg = discounted_gain(&predicted, &discount, form)?;

    if idcg == 0.0 {
        return Err(Error::DegenerateInput(format!(
            "ideal DCG@{} is zero ({} gain): no positive relevance among the top {} true grades",
            k, form, k
        )));
    }

    let score = dcg / idcg;
    log::trace!("nDCG@{} ({}): dcg={:.6} idcg={:.6} score={:.6}", k, form, dcg, idcg, score);
    Ok(score)
}

/// Reusable nDCG scorer with a fixed cutoff and gain form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdcgScorer {
    cutoff: usize,
    form: GainForm,
}

impl NdcgScorer {
    /// Create a new scorer
    pub fn new(cutoff: usize, form: GainForm) -> Self {
        NdcgScorer { cutoff, form }
    }

    /// Create a scorer from a validated configuration
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(NdcgScorer::new(config.cutoff, config.form))
    }

    /// Rank cutoff
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Gain form
    pub fn form(&self) -> GainForm {
        self.form
    }

    /// Display name, e.g. `nDCG@5 (linear)`
    pub fn name(&self) -> String {
        format!("nDCG@{} ({})", self.cutoff, self.form)
    }

    /// Score a single ranking
    pub fn score<T, U>(&self, rel_true: &[T], rel_pred: &[U]) -> Result<f64>
    where
        T: ToPrimitive,
        U: ToPrimitive,
    {
        ndcg(rel_true, rel_pred, self.cutoff, self.form)
    }
}

fn check_cutoff(p: usize) -> Result<()> {
    if p == 0 {
        return Err(Error::DimensionMismatch(
            "rank cutoff must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Convert grades to f64, rejecting empty, negative and non-finite input
fn to_grades<T: ToPrimitive>(values: &[T], what: &str) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::DimensionMismatch(format!("{} must not be empty", what)));
    }

    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v.to_f64() {
            Some(x) if x.is_finite() && x >= 0.0 => Ok(x),
            Some(x) => Err(Error::InvalidValue(format!(
                "{} at position {} must be a finite non-negative grade, got {}",
                what, i, x
            ))),
            None => Err(Error::InvalidValue(format!(
                "{} at position {} cannot be represented as f64",
                what, i
            ))),
        })
        .collect()
}

fn sort_descending(grades: &mut [f64]) {
    grades.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
}

/// Σ gain(grades[i]) * discount[i] over the length of `discount`
fn discounted_gain(grades: &[f64], discount: &[f64], form: GainForm) -> Result<f64> {
    let total = grades
        .iter()
        .zip(discount.iter())
        .map(|(&rel, &d)| form.gain(rel) * d)
        .sum::<f64>();

    if !total.is_finite() {
        return Err(Error::InvalidValue(format!(
            "{} gain overflowed while accumulating DCG",
            form
        )));
    }
    Ok(total)
}
