//! The abstract model-evaluator interface consumed by solver algorithms.

use crate::args::{InArgs, InArgsLayout, OutArgs, OutArgsLayout};
use crate::error::ModelError;

/// A nonlinear model exposed through named argument bundles.
///
/// Generic solvers drive a model exclusively through this trait: they ask
/// for the supported layouts, build argument bundles against them, and call
/// [`eval_model`](Self::eval_model). One evaluation may fill any subset of
/// the supported outputs; filling none is legal (and pointless).
pub trait ModelEvaluator {
    /// The input arguments this model accepts
    fn in_args_layout(&self) -> InArgsLayout;

    /// The output arguments this model can produce
    fn out_args_layout(&self) -> OutArgsLayout;

    /// Create an empty input bundle matching this model's layout
    fn create_in_args(&self) -> InArgs {
        InArgs::new(self.in_args_layout())
    }

    /// Create an empty output bundle matching this model's layout
    fn create_out_args(&self) -> OutArgs {
        OutArgs::new(self.out_args_layout())
    }

    /// Evaluate the model at the given inputs, filling supported outputs.
    ///
    /// Operator handles present in `out_args` after the call are fresh:
    /// callers must not assume a handle obtained from an earlier evaluation
    /// still refers to a live instance.
    fn eval_model(&self, in_args: &InArgs, out_args: &mut OutArgs) -> Result<(), ModelError>;
}
