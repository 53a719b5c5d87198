//! Adapter lifting a backend nonlinear model into the evaluator interface.
//!
//! The adapter is a structural translation layer: it copies arguments from
//! the abstract bundles into the backend's flat-slice interface, converts
//! the backend's orientation enumeration, and wraps the operator instance
//! the backend hands back. The wrap happens on every evaluation, because
//! the backend is free to rebuild its operator each time it is asked for
//! one; holding on to a previous handle would silently apply a stale
//! Jacobian.

use std::sync::Arc;

use tracing::trace;

use crate::args::{ArgId, DerivativeOrientation, InArgs, InArgsLayout, OutArgs, OutArgsLayout};
use crate::error::ModelError;
use crate::evaluator::ModelEvaluator;
use crate::vector::LinearOperator;

/// Storage orientation as reported by a backend model
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BackendOrientation {
    /// Column-by-column layout
    ColMajor,
    /// Row-by-row layout
    RowMajor,
}

/// Convert a backend orientation to the evaluator-side enumeration
pub fn convert_orientation(orientation: BackendOrientation) -> DerivativeOrientation {
    match orientation {
        BackendOrientation::ColMajor => DerivativeOrientation::ColumnMajor,
        BackendOrientation::RowMajor => DerivativeOrientation::RowMajor,
    }
}

/// A concrete nonlinear model as the backend library exposes it.
///
/// The backend works on flat slices and owns all numerical semantics.
/// `jacobian` returns a newly built operator each call; the adapter never
/// caches it.
pub trait NonlinearModel {
    /// Dimension of the state (and residual) vector
    fn state_dim(&self) -> usize;

    /// Whether the residual depends on time
    fn supports_time(&self) -> bool {
        false
    }

    /// Whether the model can build a Jacobian-like operator
    fn supports_jacobian(&self) -> bool {
        false
    }

    /// Evaluate the residual `f(x, t)` into `f`
    fn residual(&self, x: &[f64], t: Option<f64>, f: &mut [f64]) -> Result<(), ModelError>;

    /// Build a fresh Jacobian-like operator at `x`.
    ///
    /// Only called when [`supports_jacobian`](Self::supports_jacobian) is
    /// true.
    fn jacobian(&self, x: &[f64]) -> Result<Box<dyn LinearOperator>, ModelError> {
        let _ = x;
        Err(ModelError::unsupported(ArgId::WOp))
    }

    /// Orientation of derivative storage in this backend
    fn jacobian_orientation(&self) -> BackendOrientation {
        BackendOrientation::ColMajor
    }
}

/// Exposes a [`NonlinearModel`] through the [`ModelEvaluator`] interface
#[derive(Debug)]
pub struct BackendAdapter<M> {
    model: M,
}

impl<M: NonlinearModel> BackendAdapter<M> {
    /// Wrap a backend model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The wrapped backend model
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: NonlinearModel> ModelEvaluator for BackendAdapter<M> {
    fn in_args_layout(&self) -> InArgsLayout {
        InArgsLayout::new()
            .with_x(true)
            .with_t(self.model.supports_time())
    }

    fn out_args_layout(&self) -> OutArgsLayout {
        OutArgsLayout::new()
            .with_f(true)
            .with_w_op(self.model.supports_jacobian())
    }

    fn eval_model(&self, in_args: &InArgs, out_args: &mut OutArgs) -> Result<(), ModelError> {
        let x = in_args.x().ok_or_else(|| ModelError::missing(ArgId::X))?;
        let dim = self.model.state_dim();
        if x.len() != dim {
            return Err(ModelError::shape_mismatch(dim, x.len()));
        }

        let t = in_args.t();
        if t.is_some() && !self.model.supports_time() {
            return Err(ModelError::unsupported(ArgId::T));
        }

        if out_args.layout().supports(ArgId::F) {
            let mut f = crate::vector::DenseVector::zeros(dim);
            self.model.residual(x.as_slice(), t, f.as_mut_slice())?;
            out_args.set_f(f)?;
        }

        if out_args.layout().supports(ArgId::WOp) {
            trace!(dim, "rebuilding operator handle");
            let op = self.model.jacobian(x.as_slice())?;
            let orientation = convert_orientation(self.model.jacobian_orientation());
            // Fresh handle every evaluation; the previous instance may be gone.
            out_args.set_w_op(Arc::from(op), orientation)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::DenseVector;
    use pretty_assertions::assert_eq;

    /// f(x) = x^2 - c, with diagonal Jacobian 2x.
    #[derive(Debug)]
    struct QuadraticModel {
        c: Vec<f64>,
    }

    #[derive(Debug)]
    struct DiagonalOperator {
        diag: Vec<f64>,
    }

    impl LinearOperator for DiagonalOperator {
        fn domain_dim(&self) -> usize {
            self.diag.len()
        }

        fn range_dim(&self) -> usize {
            self.diag.len()
        }

        fn apply(&self, x: &DenseVector, y: &mut DenseVector) -> Result<(), ModelError> {
            for ((yi, xi), d) in y
                .as_mut_slice()
                .iter_mut()
                .zip(x.as_slice())
                .zip(&self.diag)
            {
                *yi = d * xi;
            }
            Ok(())
        }
    }

    impl NonlinearModel for QuadraticModel {
        fn state_dim(&self) -> usize {
            self.c.len()
        }

        fn supports_jacobian(&self) -> bool {
            true
        }

        fn residual(&self, x: &[f64], _t: Option<f64>, f: &mut [f64]) -> Result<(), ModelError> {
            for ((fi, xi), ci) in f.iter_mut().zip(x).zip(&self.c) {
                *fi = xi * xi - ci;
            }
            Ok(())
        }

        fn jacobian(&self, x: &[f64]) -> Result<Box<dyn LinearOperator>, ModelError> {
            Ok(Box::new(DiagonalOperator {
                diag: x.iter().map(|xi| 2.0 * xi).collect(),
            }))
        }
    }

    fn adapter() -> BackendAdapter<QuadraticModel> {
        BackendAdapter::new(QuadraticModel { c: vec![4.0, 9.0] })
    }

    #[test]
    fn test_residual_is_copied_out() {
        let adapter = adapter();
        let mut in_args = adapter.create_in_args();
        in_args
            .set_x(Arc::new(DenseVector::from_vec(vec![3.0, 3.0])))
            .unwrap();
        let mut out_args = adapter.create_out_args();

        adapter.eval_model(&in_args, &mut out_args).unwrap();
        assert_eq!(out_args.f().unwrap().as_slice(), &[5.0, 0.0]);
    }

    #[test]
    fn test_operator_handle_is_rewrapped_each_evaluation() {
        let adapter = adapter();
        let mut in_args = adapter.create_in_args();
        in_args
            .set_x(Arc::new(DenseVector::from_vec(vec![1.0, 2.0])))
            .unwrap();

        let mut first = adapter.create_out_args();
        adapter.eval_model(&in_args, &mut first).unwrap();
        let mut second = adapter.create_out_args();
        adapter.eval_model(&in_args, &mut second).unwrap();

        let a = first.w_op().unwrap();
        let b = second.w_op().unwrap();
        assert!(!Arc::ptr_eq(a, b), "each evaluation must hand out a fresh operator");

        // And the fresh handle acts like the Jacobian at x.
        let x = DenseVector::from_vec(vec![1.0, 1.0]);
        let mut y = DenseVector::zeros(2);
        b.apply(&x, &mut y).unwrap();
        assert_eq!(y.as_slice(), &[2.0, 4.0]);
    }

    #[test]
    fn test_orientation_is_converted() {
        let adapter = adapter();
        let mut in_args = adapter.create_in_args();
        in_args
            .set_x(Arc::new(DenseVector::from_vec(vec![1.0, 1.0])))
            .unwrap();
        let mut out_args = adapter.create_out_args();
        adapter.eval_model(&in_args, &mut out_args).unwrap();

        assert_eq!(
            out_args.w_op_orientation(),
            Some(DerivativeOrientation::ColumnMajor)
        );
        assert_eq!(
            convert_orientation(BackendOrientation::RowMajor),
            DerivativeOrientation::RowMajor
        );
    }

    #[test]
    fn test_missing_state_vector() {
        let adapter = adapter();
        let in_args = adapter.create_in_args();
        let mut out_args = adapter.create_out_args();

        assert_eq!(
            adapter.eval_model(&in_args, &mut out_args).unwrap_err(),
            ModelError::missing(ArgId::X)
        );
    }

    #[test]
    fn test_shape_mismatch_detected() {
        let adapter = adapter();
        let mut in_args = adapter.create_in_args();
        in_args
            .set_x(Arc::new(DenseVector::from_vec(vec![1.0])))
            .unwrap();
        let mut out_args = adapter.create_out_args();

        assert_eq!(
            adapter.eval_model(&in_args, &mut out_args).unwrap_err(),
            ModelError::shape_mismatch(2, 1)
        );
    }

    #[test]
    fn test_time_rejected_when_unsupported() {
        let adapter = adapter();
        let mut in_args = adapter.create_in_args();
        assert_eq!(
            in_args.set_t(1.0).unwrap_err(),
            ModelError::unsupported(ArgId::T)
        );
    }
}
