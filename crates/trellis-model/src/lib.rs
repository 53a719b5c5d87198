//! # Trellis Model
//!
//! The model-evaluator boundary between nonlinear models and generic solver
//! algorithms.
//!
//! A [`ModelEvaluator`](evaluator::ModelEvaluator) exposes a nonlinear
//! system through named input and output argument bundles: state and
//! time-derivative vectors, time and scaling coefficients in; residual
//! vector, Jacobian-like operator handle, and auxiliary responses out.
//! [`BackendAdapter`](adapter::BackendAdapter) lifts a concrete backend
//! model into that interface, copying arguments across, converting
//! orientation enumerations, and re-wrapping operator handles after every
//! evaluation.
//!
//! This crate is a structural translation layer: all numerical work
//! (residual assembly, linear algebra) lives in the backend model.

pub mod adapter;
pub mod args;
pub mod error;
pub mod evaluator;
pub mod vector;

pub use adapter::{convert_orientation, BackendAdapter, BackendOrientation, NonlinearModel};
pub use args::{ArgId, DerivativeOrientation, InArgs, InArgsLayout, OutArgs, OutArgsLayout};
pub use error::ModelError;
pub use evaluator::ModelEvaluator;
pub use vector::{DenseVector, LinearOperator};

/// Result type used throughout trellis-model
pub type Result<T> = std::result::Result<T, ModelError>;
