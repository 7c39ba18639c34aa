//! Pairwise comembership (O(N²))
//!
//! Pairs (i, j) with i < j are laid out row by row:
//! (0,1), (0,2), .., (0,n-1), (1,2), .., (n-2,n-1).
//! Row i starts at `i·n − i·(i+1)/2`, so every row owns a disjoint,
//! precomputable slice of the output.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{ComembershipError, Result};

/// Below this many labels the sequential loop beats the rayon split.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Number of unordered pairs among `n` observations.
///
/// Fails with [`ComembershipError::CapacityOverflow`] when the count, or a
/// `Vec<f64>` of that length, is not representable on this platform.
pub fn pair_count(n: usize) -> Result<usize> {
    checked_pair_count(n).ok_or_else(|| {
        warn!(labels = n, "pair count exceeds addressable output");
        ComembershipError::CapacityOverflow { n }
    })
}

fn checked_pair_count(n: usize) -> Option<usize> {
    if n < 2 {
        return Some(0);
    }
    // Halve whichever factor is even so the product is exact.
    let pairs = if n % 2 == 0 {
        (n / 2).checked_mul(n - 1)?
    } else {
        n.checked_mul((n - 1) / 2)?
    };
    let max_len = isize::MAX as usize / std::mem::size_of::<f64>();
    (pairs <= max_len).then_some(pairs)
}

/// Zero-filled output of `total` slots, or an error if the allocator refuses.
fn zeroed_output(total: usize) -> Result<Vec<f64>> {
    let mut out = Vec::new();
    if out.try_reserve_exact(total).is_err() {
        warn!(pairs = total, "could not allocate comembership output");
        return Err(ComembershipError::AllocationFailed { pairs: total });
    }
    out.resize(total, 0.0);
    Ok(out)
}

/// First linear index of row `i`.
///
/// Only meaningful once `pair_count(n)` has succeeded and `i < n`.
#[inline]
pub fn row_offset(i: usize, n: usize) -> usize {
    i * n - i * (i + 1) / 2
}

/// Linear index of pair (i, j), or `None` unless `i < j < n`.
pub fn pair_index(i: usize, j: usize, n: usize) -> Option<usize> {
    if i >= j || j >= n {
        return None;
    }
    checked_pair_count(n)?;
    Some(row_offset(i, n) + (j - i - 1))
}

/// Sequential/parallel dispatch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComembershipConfig {
    /// Label count at or above which rows are spread over the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ComembershipConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ComembershipConfig {
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Comembership indicators for every pair i < j.
///
/// Element k is 1.0 when the labels of the k-th pair compare equal with
/// `==`, otherwise 0.0. Labels are never matched with a tolerance, and a
/// `NaN` label is a comember of nothing.
pub fn compute_comembership(labels: &[f64]) -> Result<Vec<f64>> {
    let n = labels.len();
    let total = pair_count(n)?;
    debug!(labels = n, pairs = total, "computing comembership");

    let mut comembership = zeroed_output(total)?;
    let mut idx = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            if labels[i] == labels[j] {
                comembership[idx] = 1.0;
            }
            idx += 1;
        }
    }
    debug_assert_eq!(idx, total);
    Ok(comembership)
}

/// Same output as [`compute_comembership`], rows computed in parallel.
pub fn compute_comembership_parallel(labels: &[f64]) -> Result<Vec<f64>> {
    let n = labels.len();
    let total = pair_count(n)?;
    debug!(labels = n, pairs = total, "computing comembership in parallel");

    let mut comembership = zeroed_output(total)?;
    let mut rows: Vec<(usize, &mut [f64])> = Vec::with_capacity(n.saturating_sub(1));
    let mut rest = comembership.as_mut_slice();
    for i in 0..n.saturating_sub(1) {
        debug_assert_eq!(total - rest.len(), row_offset(i, n));
        let (row, tail) = std::mem::take(&mut rest).split_at_mut(n - i - 1);
        rows.push((i, row));
        rest = tail;
    }

    rows.into_par_iter().for_each(|(i, row)| {
        let label = labels[i];
        for (slot, &other) in row.iter_mut().zip(&labels[i + 1..]) {
            if label == other {
                *slot = 1.0;
            }
        }
    });
    Ok(comembership)
}

/// Picks the sequential or parallel routine by `config.parallel_threshold`.
pub fn compute_comembership_with(labels: &[f64], config: &ComembershipConfig) -> Result<Vec<f64>> {
    if labels.len() >= config.parallel_threshold {
        compute_comembership_parallel(labels)
    } else {
        compute_comembership(labels)
    }
}
