//! Named input and output argument bundles.
//!
//! A model advertises which arguments it supports through a layout; the
//! corresponding argument bundle enforces that layout in its setters, so an
//! unsupported argument is rejected when it is set, not deep inside an
//! evaluation.

use std::fmt;
use std::sync::Arc;

use crate::error::ModelError;
use crate::vector::{DenseVector, OperatorHandle};

/// Identifies one named argument at the evaluator boundary
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgId {
    /// State vector
    X,
    /// State time-derivative vector
    XDot,
    /// Time point
    T,
    /// Coefficient weighting the state-derivative contribution to the operator
    Alpha,
    /// Coefficient weighting the state contribution to the operator
    Beta,
    /// Parameter vector `l`
    P(usize),
    /// Residual vector
    F,
    /// Jacobian-like operator
    WOp,
    /// Auxiliary response vector `j`
    G(usize),
}

impl fmt::Display for ArgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::XDot => write!(f, "x_dot"),
            Self::T => write!(f, "t"),
            Self::Alpha => write!(f, "alpha"),
            Self::Beta => write!(f, "beta"),
            Self::P(l) => write!(f, "p({l})"),
            Self::F => write!(f, "f"),
            Self::WOp => write!(f, "W"),
            Self::G(j) => write!(f, "g({j})"),
        }
    }
}

/// Storage orientation of a derivative multi-vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DerivativeOrientation {
    /// Derivatives laid out column by column
    ColumnMajor,
    /// Derivatives laid out row by row
    RowMajor,
}

/// Which input arguments a model accepts
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InArgsLayout {
    x: bool,
    x_dot: bool,
    t: bool,
    alpha: bool,
    beta: bool,
    np: usize,
}

impl InArgsLayout {
    /// Create a layout supporting nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Support the state vector
    #[must_use]
    pub fn with_x(mut self, supported: bool) -> Self {
        self.x = supported;
        self
    }

    /// Support the state time-derivative vector
    #[must_use]
    pub fn with_x_dot(mut self, supported: bool) -> Self {
        self.x_dot = supported;
        self
    }

    /// Support the time argument
    #[must_use]
    pub fn with_t(mut self, supported: bool) -> Self {
        self.t = supported;
        self
    }

    /// Support the alpha coefficient
    #[must_use]
    pub fn with_alpha(mut self, supported: bool) -> Self {
        self.alpha = supported;
        self
    }

    /// Support the beta coefficient
    #[must_use]
    pub fn with_beta(mut self, supported: bool) -> Self {
        self.beta = supported;
        self
    }

    /// Number of parameter vectors
    #[must_use]
    pub fn with_np(mut self, np: usize) -> Self {
        self.np = np;
        self
    }

    /// Number of parameter vectors
    pub fn np(&self) -> usize {
        self.np
    }

    /// Whether the layout supports the given argument
    pub fn supports(&self, arg: ArgId) -> bool {
        match arg {
            ArgId::X => self.x,
            ArgId::XDot => self.x_dot,
            ArgId::T => self.t,
            ArgId::Alpha => self.alpha,
            ArgId::Beta => self.beta,
            ArgId::P(l) => l < self.np,
            ArgId::F | ArgId::WOp | ArgId::G(_) => false,
        }
    }
}

/// Input argument bundle for one evaluation
#[derive(Debug, Clone)]
pub struct InArgs {
    layout: InArgsLayout,
    x: Option<Arc<DenseVector>>,
    x_dot: Option<Arc<DenseVector>>,
    t: Option<f64>,
    alpha: Option<f64>,
    beta: Option<f64>,
    p: Vec<Option<Arc<DenseVector>>>,
}

impl InArgs {
    /// Create an empty bundle for the given layout
    pub fn new(layout: InArgsLayout) -> Self {
        Self {
            layout,
            x: None,
            x_dot: None,
            t: None,
            alpha: None,
            beta: None,
            p: vec![None; layout.np()],
        }
    }

    /// The layout this bundle enforces
    pub fn layout(&self) -> InArgsLayout {
        self.layout
    }

    fn check(&self, arg: ArgId) -> Result<(), ModelError> {
        if self.layout.supports(arg) {
            Ok(())
        } else {
            Err(ModelError::unsupported(arg))
        }
    }

    /// Set the state vector
    pub fn set_x(&mut self, x: Arc<DenseVector>) -> Result<(), ModelError> {
        self.check(ArgId::X)?;
        self.x = Some(x);
        Ok(())
    }

    /// Set the state time-derivative vector
    pub fn set_x_dot(&mut self, x_dot: Arc<DenseVector>) -> Result<(), ModelError> {
        self.check(ArgId::XDot)?;
        self.x_dot = Some(x_dot);
        Ok(())
    }

    /// Set the time argument
    pub fn set_t(&mut self, t: f64) -> Result<(), ModelError> {
        self.check(ArgId::T)?;
        self.t = Some(t);
        Ok(())
    }

    /// Set the alpha coefficient
    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), ModelError> {
        self.check(ArgId::Alpha)?;
        self.alpha = Some(alpha);
        Ok(())
    }

    /// Set the beta coefficient
    pub fn set_beta(&mut self, beta: f64) -> Result<(), ModelError> {
        self.check(ArgId::Beta)?;
        self.beta = Some(beta);
        Ok(())
    }

    /// Set parameter vector `l`
    pub fn set_p(&mut self, l: usize, p: Arc<DenseVector>) -> Result<(), ModelError> {
        self.check(ArgId::P(l))?;
        self.p[l] = Some(p);
        Ok(())
    }

    /// The state vector, if set
    pub fn x(&self) -> Option<&Arc<DenseVector>> {
        self.x.as_ref()
    }

    /// The state time-derivative vector, if set
    pub fn x_dot(&self) -> Option<&Arc<DenseVector>> {
        self.x_dot.as_ref()
    }

    /// The time argument, if set
    pub fn t(&self) -> Option<f64> {
        self.t
    }

    /// The alpha coefficient, if set
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// The beta coefficient, if set
    pub fn beta(&self) -> Option<f64> {
        self.beta
    }

    /// Parameter vector `l`, if set
    pub fn p(&self, l: usize) -> Option<&Arc<DenseVector>> {
        self.p.get(l).and_then(Option::as_ref)
    }
}

/// Which output arguments a model can produce
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct OutArgsLayout {
    f: bool,
    w_op: bool,
    ng: usize,
}

impl OutArgsLayout {
    /// Create a layout producing nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the residual vector
    #[must_use]
    pub fn with_f(mut self, supported: bool) -> Self {
        self.f = supported;
        self
    }

    /// Produce a Jacobian-like operator
    #[must_use]
    pub fn with_w_op(mut self, supported: bool) -> Self {
        self.w_op = supported;
        self
    }

    /// Number of auxiliary responses
    #[must_use]
    pub fn with_ng(mut self, ng: usize) -> Self {
        self.ng = ng;
        self
    }

    /// Number of auxiliary responses
    pub fn ng(&self) -> usize {
        self.ng
    }

    /// Whether the layout supports the given argument
    pub fn supports(&self, arg: ArgId) -> bool {
        match arg {
            ArgId::F => self.f,
            ArgId::WOp => self.w_op,
            ArgId::G(j) => j < self.ng,
            _ => false,
        }
    }
}

/// Output argument bundle filled by one evaluation
#[derive(Debug, Clone)]
pub struct OutArgs {
    layout: OutArgsLayout,
    f: Option<DenseVector>,
    w_op: Option<OperatorHandle>,
    w_op_orientation: Option<DerivativeOrientation>,
    g: Vec<Option<DenseVector>>,
}

impl OutArgs {
    /// Create an empty bundle for the given layout
    pub fn new(layout: OutArgsLayout) -> Self {
        Self {
            layout,
            f: None,
            w_op: None,
            w_op_orientation: None,
            g: vec![None; layout.ng()],
        }
    }

    /// The layout this bundle enforces
    pub fn layout(&self) -> OutArgsLayout {
        self.layout
    }

    fn check(&self, arg: ArgId) -> Result<(), ModelError> {
        if self.layout.supports(arg) {
            Ok(())
        } else {
            Err(ModelError::unsupported(arg))
        }
    }

    /// Store the residual vector
    pub fn set_f(&mut self, f: DenseVector) -> Result<(), ModelError> {
        self.check(ArgId::F)?;
        self.f = Some(f);
        Ok(())
    }

    /// Store a fresh operator handle together with its orientation
    pub fn set_w_op(
        &mut self,
        w_op: OperatorHandle,
        orientation: DerivativeOrientation,
    ) -> Result<(), ModelError> {
        self.check(ArgId::WOp)?;
        self.w_op = Some(w_op);
        self.w_op_orientation = Some(orientation);
        Ok(())
    }

    /// Store auxiliary response `j`
    pub fn set_g(&mut self, j: usize, g: DenseVector) -> Result<(), ModelError> {
        self.check(ArgId::G(j))?;
        self.g[j] = Some(g);
        Ok(())
    }

    /// The residual vector, if produced
    pub fn f(&self) -> Option<&DenseVector> {
        self.f.as_ref()
    }

    /// The operator handle, if produced
    pub fn w_op(&self) -> Option<&OperatorHandle> {
        self.w_op.as_ref()
    }

    /// Orientation of the produced operator, if any
    pub fn w_op_orientation(&self) -> Option<DerivativeOrientation> {
        self.w_op_orientation
    }

    /// Auxiliary response `j`, if produced
    pub fn g(&self, j: usize) -> Option<&DenseVector> {
        self.g.get(j).and_then(Option::as_ref)
    }
}
