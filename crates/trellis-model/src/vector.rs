//! Minimal vector and operator handles exchanged across the boundary.

use std::fmt;
use std::sync::Arc;

use crate::error::ModelError;

/// A dense vector of f64 entries.
///
/// This is the exchange format at the evaluator boundary; distributed or
/// structured storage belongs to the backend library behind the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    /// Create a zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Wrap an existing buffer
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the entries
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the entries
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

/// An opaque Jacobian-like operator handle.
///
/// Solvers only ever apply the operator; its representation (assembled
/// matrix, matrix-free action, preconditioned composite) is the backend's
/// business. Handles are exchanged as `Arc<dyn LinearOperator>` and must be
/// treated as replaceable: after each evaluation call the adapter hands out
/// a fresh handle, because the backend may have rebuilt the underlying
/// instance.
pub trait LinearOperator: fmt::Debug {
    /// Dimension of vectors the operator accepts
    fn domain_dim(&self) -> usize;

    /// Dimension of vectors the operator produces
    fn range_dim(&self) -> usize;

    /// Compute `y = A * x`
    fn apply(&self, x: &DenseVector, y: &mut DenseVector) -> Result<(), ModelError>;
}

/// Shared operator handle as exchanged through [`OutArgs`](crate::args::OutArgs)
pub type OperatorHandle = Arc<dyn LinearOperator>;
