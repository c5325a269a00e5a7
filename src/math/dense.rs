//! Dense linear algebra: Gaussian elimination with partial pivoting, and an
//! LU factor-once/solve-many path for repeated right-hand sides.

use nalgebra::{DMatrix, DVector};

use crate::error::{FeaError, FeaResult};

const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `SingularSystem` if, after pivoting, the magnitude of the pivot in any
/// column falls below `1e-10`.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> FeaResult<DVector<f64>> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "solve() requires a square matrix");
    assert_eq!(b.len(), n, "rhs length must match matrix size");

    // Augmented [A | b], row-wise elimination.
    let mut aug = DMatrix::<f64>::zeros(n, n + 1);
    aug.view_mut((0, 0), (n, n)).copy_from(a);
    for i in 0..n {
        aug[(i, n)] = b[i];
    }

    for k in 0..n {
        // Partial pivot: largest magnitude in column k, at or below row k.
        let mut pivot_row = k;
        let mut pivot_val = aug[(k, k)].abs();
        for i in (k + 1)..n {
            let v = aug[(i, k)].abs();
            if v > pivot_val {
                pivot_val = v;
                pivot_row = i;
            }
        }
        if pivot_val < PIVOT_TOLERANCE {
            return Err(FeaError::SingularSystem);
        }
        if pivot_row != k {
            aug.swap_rows(k, pivot_row);
        }

        let pivot = aug[(k, k)];
        for i in (k + 1)..n {
            let factor = aug[(i, k)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..=n {
                aug[(i, j)] -= factor * aug[(k, j)];
            }
        }
    }

    // Back substitution.
    let mut x = DVector::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = aug[(i, n)];
        for j in (i + 1)..n {
            sum -= aug[(i, j)] * x[j];
        }
        x[i] = sum / aug[(i, i)];
    }

    Ok(x)
}

/// An LU factorization with partial pivoting, reusable across many right-hand sides.
pub struct LuFactorization {
    /// L (unit lower triangular, implicit diagonal) and U combined in-place.
    lu: DMatrix<f64>,
    /// Row permutation applied during factorization.
    perm: Vec<usize>,
    n: usize,
}

impl LuFactorization {
    /// Factor `a` once; fails with `SingularSystem` if a pivot collapses below the
    /// solver's tolerance.
    pub fn new(a: &DMatrix<f64>) -> FeaResult<Self> {
        let n = a.nrows();
        assert_eq!(a.ncols(), n, "LU factorization requires a square matrix");
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_val = lu[(k, k)].abs();
            for i in (k + 1)..n {
                let v = lu[(i, k)].abs();
                if v > pivot_val {
                    pivot_val = v;
                    pivot_row = i;
                }
            }
            if pivot_val < PIVOT_TOLERANCE {
                return Err(FeaError::SingularSystem);
            }
            if pivot_row != k {
                lu.swap_rows(k, pivot_row);
                perm.swap(k, pivot_row);
            }

            let pivot = lu[(k, k)];
            for i in (k + 1)..n {
                let factor = lu[(i, k)] / pivot;
                lu[(i, k)] = factor;
                if factor == 0.0 {
                    continue;
                }
                for j in (k + 1)..n {
                    lu[(i, j)] -= factor * lu[(k, j)];
                }
            }
        }

        Ok(Self { lu, perm, n })
    }

    /// Solve `a * x = b` for the `a` this factorization was built from.
    pub fn solve(&self, b: &DVector<f64>) -> DVector<f64> {
        let n = self.n;
        let mut y = DVector::<f64>::zeros(n);
        // Forward substitution with the stored permutation (Ly = Pb).
        for i in 0..n {
            let mut sum = b[self.perm[i]];
            for j in 0..i {
                sum -= self.lu[(i, j)] * y[j];
            }
            y[i] = sum;
        }
        // Back substitution (Ux = y).
        let mut x = DVector::<f64>::zeros(n);
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= self.lu[(i, j)] * x[j];
            }
            x[i] = sum / self.lu[(i, i)];
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_small_system() {
        let a = DMatrix::from_row_slice(2, 2, &[4.0, 3.0, 6.0, 3.0]);
        let b = DVector::from_row_slice(&[1.0, 0.0]);
        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], -1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 5.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn detects_singular_system() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_row_slice(&[1.0, 2.0]);
        assert!(matches!(solve(&a, &b), Err(FeaError::SingularSystem)));
    }

    #[test]
    fn lu_matches_gaussian_elimination() {
        let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, -6.0, 0.0, -2.0, 7.0, 2.0]);
        let b = DVector::from_row_slice(&[5.0, -2.0, 9.0]);
        let direct = solve(&a, &b).unwrap();
        let lu = LuFactorization::new(&a).unwrap();
        let via_lu = lu.solve(&b);
        for i in 0..3 {
            assert_relative_eq!(direct[i], via_lu[i], epsilon = 1e-8);
        }
    }
}
