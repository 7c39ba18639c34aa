//! Comembership Kernel - Rust Core
//!
//! Provides pairwise cluster co-assignment for label vectors:
//! - Comembership (one 0/1 indicator per pair i < j)
//! - Cluster similarity (Rand and Jaccard from the pair agreement table)

pub mod comembership;
pub mod error;
pub mod similarity;

#[cfg(feature = "python")]
mod bindings;

pub use comembership::{
    compute_comembership, compute_comembership_parallel, compute_comembership_with, pair_count,
    pair_index, row_offset, ComembershipConfig,
};
pub use error::{ComembershipError, Result};
pub use similarity::{cluster_similarity, comembership_table, ComembershipTable, SimilarityMethod};
