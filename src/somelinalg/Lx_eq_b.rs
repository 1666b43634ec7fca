//! Triangular solves shared by Gauss elimination and LU factorization.
//! Only the triangle that matters is read; nothing is checked for zeros.
use nalgebra::{DMatrix, DVector};

/// Solves L*y = b from the first row down, assuming ones on the diagonal of L,
/// so there is no division: `y[i] = b[i] - sum_{j<i} L[i][j]*y[j]`
pub fn forward_substitution_unit(L: &DMatrix<f64>, b: &DVector<f64>) -> DVector<f64> {
    let n = b.len();
    let mut y = DVector::zeros(n);
    for i in 0..n {
        let mut yi = b[i];
        for j in 0..i {
            yi -= L[(i, j)] * y[j];
        }
        y[i] = yi;
    }
    y
}

/// Solves U*x = y from the last row up: `x[i] = (y[i] - sum_{j>i} U[i][j]*x[j]) / U[i][i]`
pub fn back_substitution(U: &DMatrix<f64>, y: &DVector<f64>) -> DVector<f64> {
    let n = y.len();
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut xi = y[i];
        for j in i + 1..n {
            xi -= U[(i, j)] * x[j];
        }
        x[i] = xi / U[(i, i)];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_substitution_unit() {
        let L = DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 2.0, 1.0, 0.0, -1.0, 3.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 4.0, 6.0]);
        let y = forward_substitution_unit(&L, &b);
        assert_eq!(y, DVector::from_vec(vec![1.0, 2.0, 1.0]));
        // diagonal is never read
        let mut L2 = L.clone();
        L2.fill_diagonal(5.0);
        assert_eq!(forward_substitution_unit(&L2, &b), y);
    }

    #[test]
    fn test_back_substitution() {
        let U = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, -1.0, 0.0, 4.0, 2.0, 0.0, 0.0, 5.0]);
        let x_exact = DVector::from_vec(vec![1.0, -1.0, 2.0]);
        let y = &U * &x_exact;
        let x = back_substitution(&U, &y);
        assert_eq!(x, x_exact);
    }

    #[test]
    fn test_lower_part_ignored() {
        let mut U = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 0.0, 4.0]);
        let y = DVector::from_vec(vec![3.0, 4.0]);
        let x = back_substitution(&U, &y);
        U[(1, 0)] = 100.0;
        assert_eq!(back_substitution(&U, &y), x);
    }
}
