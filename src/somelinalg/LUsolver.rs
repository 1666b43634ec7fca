use crate::somelinalg::Lx_eq_b::{back_substitution, forward_substitution_unit};
use crate::somelinalg::linsys_errors::{LinSysError, check_square, check_system};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Everything the LU method produces: the factors, the intermediate vector of L*Y = b
/// and the solution of U*X = Y.
#[derive(Debug, Clone, PartialEq)]
pub struct LUFactorization {
    pub l: DMatrix<f64>,
    pub u: DMatrix<f64>,
    pub y: DVector<f64>,
    pub x: DVector<f64>,
}

impl LUFactorization {
    /// diagonal of U, the divisors of the factorization
    pub fn pivots(&self) -> Vec<f64> {
        self.u.diagonal().iter().cloned().collect()
    }
}

/// Doolittle factorization A = L*U without pivoting. L has ones on its diagonal.
/// Row i of U and column i of L are computed in turn:
/// `U[i][j] = A[i][j] - sum_{k<i} L[i][k]*U[k][j]` for j >= i,
/// `L[j][i] = (A[j][i] - sum_{k<i} L[j][k]*U[k][i]) / U[i][i]` for j > i.
/// A zero U[i][i] is not guarded.
pub fn doolittle(A: &DMatrix<f64>) -> Result<(DMatrix<f64>, DMatrix<f64>), LinSysError> {
    let n = check_square(A)?;
    let mut L = DMatrix::zeros(n, n);
    let mut U = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let mut uij = A[(i, j)];
            for k in 0..i {
                uij -= L[(i, k)] * U[(k, j)];
            }
            U[(i, j)] = uij;
        }
        for j in i + 1..n {
            let mut lji = A[(j, i)];
            for k in 0..i {
                lji -= L[(j, k)] * U[(k, i)];
            }
            L[(j, i)] = lji / U[(i, i)];
        }
        L[(i, i)] = 1.0;
    }
    Ok((L, U))
}

/// Factorizes `A`, then solves L*Y = b by forward substitution and U*X = Y by back substitution.
/// `b` is taken by value, `A` is only read.
pub fn lu_factorization(A: &DMatrix<f64>, b: DVector<f64>) -> Result<LUFactorization, LinSysError> {
    check_system(A, &b)?;
    let (l, u) = doolittle(A)?;
    debug!("L = {}, U = {}", l, u);
    let y = forward_substitution_unit(&l, &b);
    let x = back_substitution(&u, &y);
    Ok(LUFactorization { l, u, y, x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_LU_2x2() {
        let A = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        let res = lu_factorization(&A, b).unwrap();
        assert_eq!(res.l, DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.5, 1.0]));
        assert_eq!(res.u, DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 0.0, 2.5]));
        assert_eq!(res.y, DVector::from_vec(vec![1.0, 1.5]));
        assert_relative_eq!(res.x[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(res.x[1], 0.6, epsilon = 1e-12);
        assert_eq!(res.pivots(), vec![4.0, 2.5]);
    }

    #[test]
    fn test_LU_reconstruction() {
        let mut rng = StdRng::seed_from_u64(17);
        let n = 6;
        // diagonally dominant => all leading minors are non-singular
        let mut A = DMatrix::from_fn(n, n, |_, _| rng.random_range(-1.0..1.0));
        for i in 0..n {
            A[(i, i)] += n as f64;
        }
        let (L, U) = doolittle(&A).unwrap();
        let LU = &L * &U;
        for i in 0..n {
            assert_eq!(L[(i, i)], 1.0);
            for j in 0..n {
                assert_relative_eq!(LU[(i, j)], A[(i, j)], epsilon = 1e-12);
                if j > i {
                    assert_eq!(L[(i, j)], 0.0);
                }
                if j < i {
                    assert_eq!(U[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_LU_against_nalgebra() {
        let A = DMatrix::from_row_slice(
            3,
            3,
            &[10.0, -1.0, 2.0, -1.0, 11.0, -1.0, 2.0, -1.0, 10.0],
        );
        let b = DVector::from_vec(vec![6.0, 25.0, -11.0]);
        let expected = A.clone().lu().solve(&b).unwrap();
        let res = lu_factorization(&A, b.clone()).unwrap();
        for i in 0..3 {
            assert_relative_eq!(res.x[i], expected[i], epsilon = 1e-12);
        }
        // Y solves L*Y = b
        let Ly = &res.l * &res.y;
        for i in 0..3 {
            assert_relative_eq!(Ly[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity() {
        let A = DMatrix::<f64>::identity(4, 4);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let res = lu_factorization(&A, b.clone()).unwrap();
        assert_eq!(res.l, A);
        assert_eq!(res.u, A);
        assert_eq!(res.x, b);
    }

    #[test]
    fn test_dimension_mismatch() {
        let A = DMatrix::<f64>::identity(2, 2);
        let b = DVector::from_vec(vec![1.0]);
        assert!(matches!(
            lu_factorization(&A, b),
            Err(LinSysError::DimensionMismatch { .. })
        ));
    }
}
