//! Element-wise kernels over boolean masks.
//!
//! The condition-chain evaluator carries a `resolved` mask from branch to
//! branch; these are the only operations it needs on it.

use crate::error::JablError;

/// Fails unless `mask` has exactly `expected` entries.
pub fn check_len(operation: &'static str, mask: &[bool], expected: usize) -> Result<(), JablError> {
    if mask.len() != expected {
        return Err(JablError::precondition(
            operation,
            format!(
                "boolean mask has {} entries but the sequence has {}",
                mask.len(),
                expected
            ),
        ));
    }
    Ok(())
}

/// `matched[i] && !claimed[i]`: positions a branch may still take.
pub fn and_not(matched: &[bool], claimed: &[bool]) -> Vec<bool> {
    matched
        .iter()
        .zip(claimed)
        .map(|(&m, &c)| m && !c)
        .collect()
}

/// `a[i] || b[i]`.
pub fn or(a: &[bool], b: &[bool]) -> Vec<bool> {
    a.iter().zip(b).map(|(&x, &y)| x || y).collect()
}

/// `!a[i]`.
pub fn not(a: &[bool]) -> Vec<bool> {
    a.iter().map(|&x| !x).collect()
}
