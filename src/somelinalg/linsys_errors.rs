use std::fmt;

/// Error types for the linear system solvers and the task layer around them.
/// Numerical trouble (zero pivots, divergence) is NOT an error: solvers always return
/// a vector and report such trouble as diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum LinSysError {
    /// matrix is not square: (rows, cols)
    NotSquare(usize, usize),
    /// right-hand side (or output buffer) length does not match the matrix size
    DimensionMismatch { expected: usize, found: usize },
    /// n = 0
    EmptySystem,
    InvalidLogLevel(String),
    TaskParse(String),
    Io(String),
}

impl fmt::Display for LinSysError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinSysError::NotSquare(r, c) => {
                write!(f, "Matrix must be square, got {} rows and {} columns", r, c)
            }
            LinSysError::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected vector of length {}, found {}",
                expected, found
            ),
            LinSysError::EmptySystem => write!(f, "System has no unknowns"),
            LinSysError::InvalidLogLevel(level) => write!(
                f,
                "loglevel must be off, none, debug, info, warn or error, got '{}'",
                level
            ),
            LinSysError::TaskParse(msg) => write!(f, "Invalid task: {}", msg),
            LinSysError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for LinSysError {}

impl From<std::io::Error> for LinSysError {
    fn from(e: std::io::Error) -> Self {
        LinSysError::Io(e.to_string())
    }
}

impl From<csv::Error> for LinSysError {
    fn from(e: csv::Error) -> Self {
        LinSysError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for LinSysError {
    fn from(e: toml::de::Error) -> Self {
        LinSysError::TaskParse(e.to_string())
    }
}

/// Checks that `A` is a non-empty square matrix and that `b` has one entry per row.
/// Returns the dimension n.
pub fn check_system(
    A: &nalgebra::DMatrix<f64>,
    b: &nalgebra::DVector<f64>,
) -> Result<usize, LinSysError> {
    let n = check_square(A)?;
    if b.len() != n {
        return Err(LinSysError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }
    Ok(n)
}

pub fn check_square(A: &nalgebra::DMatrix<f64>) -> Result<usize, LinSysError> {
    let (nrows, ncols) = A.shape();
    if nrows != ncols {
        return Err(LinSysError::NotSquare(nrows, ncols));
    }
    if nrows == 0 {
        return Err(LinSysError::EmptySystem);
    }
    Ok(nrows)
}
