//! Direct elimination methods without pivoting: Gauss elimination with back substitution and
//! Gauss-Jordan elimination. Both work on private copies, the caller's `A` and `b` are untouched.
//! Rows are never reordered, so a zero pivot in natural order gives inf/NaN in the answer.
use crate::somelinalg::Lx_eq_b::back_substitution;
use crate::somelinalg::linsys_errors::{LinSysError, check_system};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// solution of a direct method together with the pivots it divided by, in elimination order
#[derive(Debug, Clone, PartialEq)]
pub struct DirectSolution {
    pub x: DVector<f64>,
    pub pivots: Vec<f64>,
}

/// Forward elimination to upper-triangular form, then back substitution.
/// For pivot row i and every row k > i: `factor = A[k][i]/A[i][i]`, `row_k -= factor*row_i`,
/// `b[k] -= factor*b[i]`.
pub fn gauss_elimination(A: &DMatrix<f64>, b: &DVector<f64>) -> Result<DirectSolution, LinSysError> {
    let n = check_system(A, b)?;
    let mut a = A.clone();
    let mut b = b.clone();
    for i in 0..n {
        for k in i + 1..n {
            let factor = a[(k, i)] / a[(i, i)];
            for j in 0..n {
                a[(k, j)] -= factor * a[(i, j)];
            }
            b[k] -= factor * b[i];
        }
    }
    debug!("upper triangular form {}", a);
    let pivots: Vec<f64> = a.diagonal().iter().cloned().collect();
    let x = back_substitution(&a, &b);
    Ok(DirectSolution { x, pivots })
}

/// Gauss-Jordan: each pivot row is scaled so the pivot becomes 1, then column i is cleared in
/// every other row. At the end `a` is the identity and `b` is the solution.
pub fn gauss_jordan_elimination(
    A: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<DirectSolution, LinSysError> {
    let n = check_system(A, b)?;
    let mut a = A.clone();
    let mut b = b.clone();
    let mut pivots = Vec::with_capacity(n);
    for i in 0..n {
        let pivot = a[(i, i)];
        pivots.push(pivot);
        for j in 0..n {
            a[(i, j)] /= pivot;
        }
        b[i] /= pivot;
        for k in 0..n {
            if k != i {
                let f = a[(k, i)];
                for j in 0..n {
                    a[(k, j)] -= f * a[(i, j)];
                }
                b[k] -= f * b[i];
            }
        }
    }
    debug!("reduced matrix {}", a);
    Ok(DirectSolution { x: b, pivots })
}
