use thiserror::Error;

/// Errors raised when a construction is asked for outside its valid domain.
///
/// Degenerate but meaningful inputs (parallel lines, concentric circles,
/// collinear points) are not errors; those operations return `None` or an
/// empty `Vec` instead.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
