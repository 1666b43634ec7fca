//! Post-hoc diagnostics for a solved system. Nothing here changes the computed values:
//! a solver always returns a vector, these checks only explain why it may be meaningless.
use crate::somelinalg::iterative_solvers_cpu::IterationOutcome;
use log::warn;
use nalgebra::{DMatrix, DVector};
use std::fmt;

/// pivots with absolute value below this are reported as near-zero
pub const PIVOT_EPS: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// step, pivot value
    ZeroPivot(usize, f64),
    /// indices of inf/NaN entries in the solution
    NonFiniteSolution(Vec<usize>),
    /// first row that is not strictly diagonally dominant
    NotDiagonallyDominant(usize),
    /// iterations done, last max change
    IterationCapReached(usize, f64),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::ZeroPivot(step, pivot) => {
                write!(f, "Warning: near-zero pivot {:e} at step {}", pivot, step)
            }
            Diagnostic::NonFiniteSolution(idx) => {
                write!(f, "Warning: solution has non-finite entries at {:?}", idx)
            }
            Diagnostic::NotDiagonallyDominant(row) => write!(
                f,
                "Warning: matrix is not diagonally dominant (row {}), convergence is not guaranteed",
                row
            ),
            Diagnostic::IterationCapReached(iters, change) => write!(
                f,
                "Warning: no convergence after {} iterations, last change {:e}",
                iters, change
            ),
        }
    }
}

/// Returns the first row i with |A[i][i]| <= sum_{j != i} |A[i][j]|, None if the matrix is
/// strictly diagonally dominant by rows.
pub fn not_dominant_row(A: &DMatrix<f64>) -> Option<usize> {
    (0..A.nrows()).find(|&i| {
        let off: f64 = (0..A.ncols())
            .filter(|&j| j != i)
            .map(|j| A[(i, j)].abs())
            .sum();
        !(A[(i, i)].abs() > off)
    })
}

pub fn is_diagonally_dominant(A: &DMatrix<f64>) -> bool {
    not_dominant_row(A).is_none()
}

/// max_i |(A*x - b)_i|
pub fn residual_norm(A: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    let r = A * x - b;
    r.iter().fold(0.0_f64, |acc, v| {
        if v.is_nan() { f64::NAN } else { acc.max(v.abs()) }
    })
}

pub fn check_pivots(pivots: &[f64]) -> Vec<Diagnostic> {
    pivots
        .iter()
        .enumerate()
        .filter(|(_, p)| !(p.abs() >= PIVOT_EPS))
        .map(|(i, p)| Diagnostic::ZeroPivot(i, *p))
        .collect()
}

pub fn check_finite(x: &DVector<f64>) -> Option<Diagnostic> {
    let bad: Vec<usize> = x
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_finite())
        .map(|(i, _)| i)
        .collect();
    if bad.is_empty() {
        None
    } else {
        Some(Diagnostic::NonFiniteSolution(bad))
    }
}

/// Diagnostics of an iterative run: dominance of A, convergence flag and finiteness of x.
pub fn iterative_diagnostics(
    A: &DMatrix<f64>,
    x: &DVector<f64>,
    outcome: &IterationOutcome,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if let Some(row) = not_dominant_row(A) {
        diagnostics.push(Diagnostic::NotDiagonallyDominant(row));
    }
    if !outcome.converged {
        diagnostics.push(Diagnostic::IterationCapReached(
            outcome.iterations,
            outcome.last_change,
        ));
    }
    diagnostics.extend(check_finite(x));
    log_diagnostics(&diagnostics);
    diagnostics
}

/// Diagnostics of a direct method: pivots it divided by and finiteness of x.
pub fn direct_diagnostics(pivots: &[f64], x: &DVector<f64>) -> Vec<Diagnostic> {
    let mut diagnostics = check_pivots(pivots);
    diagnostics.extend(check_finite(x));
    log_diagnostics(&diagnostics);
    diagnostics
}

fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        warn!("{}", d);
    }
}

/// famous example of ill-conditioned matrix
pub fn hilbert_matrix(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| 1.0 / (i as f64 + j as f64 + 1.0))
}
