//! Stationary iterative methods: Jacobi and Gauss-Seidel.
//!
//! Both write the solution into a caller-owned buffer `x` passed by `&mut`. Jacobi always starts
//! from the zero vector and only uses `x` as output. Gauss-Seidel updates `x` in place, so whatever
//! it holds on entry is its initial guess (the dispatcher always passes zeros). The loop stops when every
//! component moved by no more than `config.tolerance` during a sweep, or after
//! `config.max_iterations` sweeps, whichever comes first. Divergence is not detected: after the
//! cap `x` simply holds the last iterate and `IterationOutcome::converged` is false.
//! A zero on the diagonal gives non-finite values, it is not guarded.
use crate::somelinalg::linsys_errors::{LinSysError, check_system};
use crate::somelinalg::solver_config::SolverConfig;
use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};

/// What happened inside the iteration loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOutcome {
    pub iterations: usize,
    pub converged: bool,
    /// max abs change of a component during the last sweep
    pub last_change: f64,
}

/// Jacobi method: every component of the new iterate uses only the previous iterate.
/// `x[i] = (b[i] - sum_{j != i} A[i][j]*prev[j]) / A[i][i]`, first `prev` is all zeros
/// whatever `x` holds on entry.
pub fn jacobi(
    A: &DMatrix<f64>,
    b: &DVector<f64>,
    x: &mut DVector<f64>,
    config: &SolverConfig,
) -> Result<IterationOutcome, LinSysError> {
    let n = check_system(A, b)?;
    check_buffer(x, n)?;
    let tol = config.tolerance;
    let max_iter = config.max_iterations;

    let mut prev = DVector::<f64>::zeros(n);
    let mut iteration = 0;
    let mut converged;
    let mut last_change;
    loop {
        converged = true;
        last_change = 0.0_f64;
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if i != j {
                    sum += A[(i, j)] * prev[j];
                }
            }
            x[i] = (b[i] - sum) / A[(i, i)];

            let change = (x[i] - prev[i]).abs();
            // NaN change must not count as converged
            if !(change <= tol) {
                converged = false;
            }
            last_change = last_change.max(change);
        }
        prev.copy_from(&*x);
        iteration += 1;
        debug!("Jacobi sweep {}, max change {:e}", iteration, last_change);
        if converged || iteration >= max_iter {
            break;
        }
    }
    log_outcome("Jacobi", iteration, converged, last_change);
    Ok(IterationOutcome {
        iterations: iteration,
        converged,
        last_change,
    })
}

/// Gauss-Seidel method: components are updated in place, so row i already sees the new values
/// of rows j < i from the same sweep. Convergence is checked row by row before overwriting.
pub fn gauss_seidel(
    A: &DMatrix<f64>,
    b: &DVector<f64>,
    x: &mut DVector<f64>,
    config: &SolverConfig,
) -> Result<IterationOutcome, LinSysError> {
    let n = check_system(A, b)?;
    check_buffer(x, n)?;
    let tol = config.tolerance;
    let max_iter = config.max_iterations;

    let mut iteration = 0;
    let mut converged;
    let mut last_change;
    loop {
        converged = true;
        last_change = 0.0_f64;
        for i in 0..n {
            let mut total = 0.0;
            for j in 0..n {
                if i != j {
                    total += A[(i, j)] * x[j];
                }
            }
            let new_xi = (b[i] - total) / A[(i, i)];

            let change = (new_xi - x[i]).abs();
            if !(change <= tol) {
                converged = false;
            }
            last_change = last_change.max(change);
            x[i] = new_xi;
        }
        iteration += 1;
        debug!("Gauss-Seidel sweep {}, max change {:e}", iteration, last_change);
        if converged || iteration >= max_iter {
            break;
        }
    }
    log_outcome("Gauss-Seidel", iteration, converged, last_change);
    Ok(IterationOutcome {
        iterations: iteration,
        converged,
        last_change,
    })
}

fn check_buffer(x: &DVector<f64>, n: usize) -> Result<(), LinSysError> {
    if x.len() != n {
        return Err(LinSysError::DimensionMismatch {
            expected: n,
            found: x.len(),
        });
    }
    Ok(())
}

fn log_outcome(method: &str, iterations: usize, converged: bool, last_change: f64) {
    if converged {
        info!("{} converged after {} iterations", method, iterations);
    } else {
        warn!(
            "{} stopped after {} iterations without convergence, last change {:e}",
            method, iterations, last_change
        );
    }
}
