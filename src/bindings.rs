//! Python Bindings for Comembership Kernel

use pyo3::exceptions::{PyMemoryError, PyOverflowError, PyValueError};
use pyo3::prelude::*;

use crate::error::ComembershipError;
use crate::similarity::SimilarityMethod;

impl From<ComembershipError> for PyErr {
    fn from(e: ComembershipError) -> Self {
        match e {
            ComembershipError::CapacityOverflow { .. } => PyOverflowError::new_err(e.to_string()),
            ComembershipError::AllocationFailed { .. } => PyMemoryError::new_err(e.to_string()),
            ComembershipError::LengthMismatch { .. } => PyValueError::new_err(e.to_string()),
        }
    }
}

// ============================================================================
// COMEMBERSHIP
// ============================================================================

/// Comembership indicators for all pairs i < j (length n*(n-1)/2)
#[pyfunction]
fn compute_comembership(labels: Vec<f64>) -> PyResult<Vec<f64>> {
    let config = crate::comembership::ComembershipConfig::default();
    Ok(crate::comembership::compute_comembership_with(&labels, &config)?)
}

// ============================================================================
// CLUSTER SIMILARITY
// ============================================================================

/// Pair counts (n11, n10, n01, n00) of two clusterings
#[pyfunction]
fn comembership_table(a: Vec<f64>, b: Vec<f64>) -> PyResult<(u64, u64, u64, u64)> {
    let t = crate::similarity::comembership_table(&a, &b)?;
    Ok((t.n11, t.n10, t.n01, t.n00))
}

/// Rand or Jaccard similarity of two clusterings
#[pyfunction]
#[pyo3(signature = (a, b, method = "jaccard"))]
fn cluster_similarity(a: Vec<f64>, b: Vec<f64>, method: &str) -> PyResult<f64> {
    let method: SimilarityMethod = method.parse().map_err(PyValueError::new_err)?;
    Ok(crate::similarity::cluster_similarity(&a, &b, method)?)
}

// ============================================================================
// MODULE EXPORT
// ============================================================================

#[pymodule]
fn comembership_kernel(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_comembership, m)?)?;
    m.add_function(wrap_pyfunction!(comembership_table, m)?)?;
    m.add_function(wrap_pyfunction!(cluster_similarity, m)?)?;
    Ok(())
}
