//! Agreement between two clusterings of the same observations.
//!
//! Both clusterings are reduced to their comembership indicators and the
//! pairs are tallied into a 2×2 table, from which the Rand and Jaccard
//! indices follow.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::comembership::pair_count;
use crate::error::{ComembershipError, Result};

/// Pair counts of (comember in A, comember in B).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComembershipTable {
    /// Together in both.
    pub n11: u64,
    /// Together in A only.
    pub n10: u64,
    /// Together in B only.
    pub n01: u64,
    /// Apart in both.
    pub n00: u64,
}

impl ComembershipTable {
    /// Tallies two comembership vectors computed over the same labels.
    pub fn from_comemberships(a: &[f64], b: &[f64]) -> Result<Self> {
        check_lengths(a.len(), b.len())?;
        Ok(a.iter()
            .zip(b)
            .fold(Self::default(), |table, (&x, &y)| table.tally(x == 1.0, y == 1.0)))
    }

    #[inline]
    fn tally(mut self, in_a: bool, in_b: bool) -> Self {
        match (in_a, in_b) {
            (true, true) => self.n11 += 1,
            (true, false) => self.n10 += 1,
            (false, true) => self.n01 += 1,
            (false, false) => self.n00 += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            n11: self.n11 + other.n11,
            n10: self.n10 + other.n10,
            n01: self.n01 + other.n01,
            n00: self.n00 + other.n00,
        }
    }

    /// Number of pairs tallied.
    pub fn total(&self) -> u64 {
        self.n11 + self.n10 + self.n01 + self.n00
    }

    /// Fraction of pairs on which both clusterings agree.
    ///
    /// 1.0 when there are no pairs at all.
    pub fn rand(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 1.0;
        }
        (self.n11 + self.n00) as f64 / total as f64
    }

    /// Pairs together in both over pairs together in either.
    ///
    /// 1.0 when neither clustering places any pair together.
    pub fn jaccard(&self) -> f64 {
        let together = self.n11 + self.n10 + self.n01;
        if together == 0 {
            return 1.0;
        }
        self.n11 as f64 / together as f64
    }
}

/// Tallies the comembership table of two label sequences.
///
/// Pairs are visited directly, so neither comembership vector is
/// materialised.
pub fn comembership_table(a: &[f64], b: &[f64]) -> Result<ComembershipTable> {
    check_lengths(a.len(), b.len())?;
    let n = a.len();
    let pairs = pair_count(n)?;
    debug!(labels = n, pairs, "tallying comembership table");

    let table = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n).fold(ComembershipTable::default(), |table, j| {
                table.tally(a[i] == a[j], b[i] == b[j])
            })
        })
        .reduce(ComembershipTable::default, ComembershipTable::merge);
    Ok(table)
}

/// Index used by [`cluster_similarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMethod {
    Rand,
    Jaccard,
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMethod::Rand => write!(f, "rand"),
            SimilarityMethod::Jaccard => write!(f, "jaccard"),
        }
    }
}

impl FromStr for SimilarityMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rand" => Ok(SimilarityMethod::Rand),
            "jaccard" => Ok(SimilarityMethod::Jaccard),
            other => Err(format!("unknown similarity method '{}'", other)),
        }
    }
}

/// Rand or Jaccard similarity of two clusterings.
pub fn cluster_similarity(a: &[f64], b: &[f64], method: SimilarityMethod) -> Result<f64> {
    let table = comembership_table(a, b)?;
    Ok(match method {
        SimilarityMethod::Rand => table.rand(),
        SimilarityMethod::Jaccard => table.jaccard(),
    })
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        warn!(left, right, "sequences differ in length");
        return Err(ComembershipError::LengthMismatch { left, right });
    }
    Ok(())
}
