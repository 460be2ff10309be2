use thiserror::Error;

/// Top-level error type for the biarc approximator.
#[derive(Debug, Error)]
pub enum BiarcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors raised while fitting arcs to a curve.
#[derive(Debug, Error)]
pub enum FitError {
    /// The biarc quadratic has no real root.
    #[error("biarc quadratic has negative discriminant {discriminant} (a={a}, b={b}, c={c})")]
    NegativeDiscriminant {
        a: f64,
        b: f64,
        c: f64,
        discriminant: f64,
    },

    /// Both roots of the biarc quadratic have the same sign, so neither
    /// places the join point between the two tangent lines.
    #[error("biarc quadratic roots {beta1} and {beta2} have the same sign (a={a}, b={b}, c={c})")]
    SameSignRoots {
        a: f64,
        b: f64,
        c: f64,
        beta1: f64,
        beta2: f64,
    },

    #[error("invalid approximation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BiarcError`].
pub type Result<T> = std::result::Result<T, BiarcError>;
