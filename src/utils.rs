//! Utility functions shared by the search engines

use crate::{Result, SearchError};

/// Rejects NaN search values, letting infinities through
///
/// Infinite values mark forced wins and losses and are propagated as-is.
pub fn checked_value(value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(SearchError::NotANumber);
    }
    Ok(value)
}

/// Returns the largest value, or negative infinity for an empty slice
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Returns the indices of every value equal to the maximum
pub fn maximal_indices(values: &[f64]) -> Vec<usize> {
    let best = max_value(values);
    values
        .iter()
        .enumerate()
        .filter(|(_, &value)| value == best)
        .map(|(index, _)| index)
        .collect()
}

/// Returns the index of the first strictly greatest value
///
/// Later values only replace the current best when strictly greater, so ties
/// keep the earliest index. Returns 0 for an empty slice or when every value
/// is negative infinity.
pub fn first_maximal_index(values: &[f64]) -> usize {
    let mut best_value = f64::NEG_INFINITY;
    let mut best_index = 0;

    for (i, &value) in values.iter().enumerate() {
        if value > best_value {
            best_value = value;
            best_index = i;
        }
    }

    best_index
}
