//! Free functions over the [`Matrix`] contract.
//!
//! Everything here reads through `get` and writes through `set`, so any mix
//! of [`DenseMatrix`](crate::DenseMatrix) and
//! [`WindowMatrix`](crate::WindowMatrix) operands works.

use crate::dense::DenseMatrix;
use crate::matrix::{Matrix, SharedMatrix};
use crate::window::WindowMatrix;
use crate::{MatrixError, Result};
use num_traits::{One, Zero};
use std::cell::RefCell;
use std::ops::{Add, Div, Mul, Sub};
use std::rc::Rc;

/// Entrywise sum: `dest[i][j] = left[i][j] + right[i][j]`.
///
/// All three operands must share the same shape. `left` and `right` are not
/// modified. Cells are written in row-major order, each read before it is
/// written, which is the only defined behavior when `dest` aliases an
/// operand (e.g. through overlapping windows).
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] when the shapes differ.
pub fn matadd<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Copy + Add<Output = T>,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
    D: Matrix<T> + ?Sized,
{
    let (m, n) = left.shape();
    if right.shape() != (m, n) {
        return Err(MatrixError::ShapeMismatch((m, n), right.shape()));
    }
    if dest.shape() != (m, n) {
        return Err(MatrixError::ShapeMismatch((m, n), dest.shape()));
    }
    for i in 0..m {
        for j in 0..n {
            dest.set(i, j, left.get(i, j) + right.get(i, j));
        }
    }
    Ok(())
}

/// Matrix product: `dest[i][j] = Σ_k left[i][k] * right[k][j]`.
///
/// `left` is `m×n`, `right` is `n×o`, `dest` is `m×o`. The accumulator for
/// each cell starts at `T::zero()`. `left` and `right` are not modified.
/// `dest` must not alias either operand: cells are written while the
/// operands are still being read, so an aliased destination corrupts the
/// result. That is a caller error this function cannot detect through the
/// trait.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] when the inner dimensions differ
/// or `dest` is not `m×o`.
pub fn matmul<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Copy + Zero + Mul<Output = T>,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
    D: Matrix<T> + ?Sized,
{
    let (m, n) = left.shape();
    let (rn, o) = right.shape();
    if rn != n {
        return Err(MatrixError::ShapeMismatch((m, n), (rn, o)));
    }
    if dest.shape() != (m, o) {
        return Err(MatrixError::ShapeMismatch((m, o), dest.shape()));
    }
    for i in 0..m {
        for j in 0..o {
            let mut acc = T::zero();
            for k in 0..n {
                acc = acc + left.get(i, k) * right.get(k, j);
            }
            dest.set(i, j, acc);
        }
    }
    Ok(())
}

/// Determinant of a square matrix by cofactor expansion along row 0.
///
/// The minor for column `j` is not materialized: it is the `(n-1) × (n-1)`
/// [`WindowMatrix`] over `mat` at offset `(1, j + 1)`, relying on the
/// window's cyclic wraparound (for `j = n - 1` the column range wraps back
/// to column 0). Each recursion level shares the same underlying storage.
/// The surviving columns therefore appear in cyclic order starting one past
/// the excluded column, not in ascending order; that ordering is part of
/// this operation's defined behavior.
///
/// O(n!), intended for the small matrices a GaBP node works with. Always
/// produces a value for valid input, including singular matrices.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] for a rectangular operand and
/// [`MatrixError::EmptyMatrix`] for `n = 0`.
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{det, share, DenseMatrix};
///
/// let m = share(DenseMatrix::from_vec(2, 2, vec![7, 13, 18, 6]).unwrap());
/// assert_eq!(det(&m).unwrap(), -192);
/// ```
pub fn det<T>(mat: &SharedMatrix<T>) -> Result<T>
where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + 'static,
{
    let (n, cols) = mat.borrow().shape();
    if n != cols {
        return Err(MatrixError::NonSquare { rows: n, cols });
    }
    if n == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if n == 1 {
        return Ok(mat.borrow().get(0, 0));
    }

    let mut acc = T::zero();
    let mut plus = true;
    for j in 0..n {
        let minor: SharedMatrix<T> = Rc::new(RefCell::new(WindowMatrix::over(
            mat,
            n - 1,
            n - 1,
            1,
            j + 1,
        )?));
        let sub = det(&minor)?;
        let term = mat.borrow().get(0, j) * sub;
        acc = if plus { acc + term } else { acc - term };
        plus = !plus;
    }
    Ok(acc)
}

/// Inverse of a square matrix by Gauss-Jordan elimination.
///
/// Returns `Ok(true)` and leaves `dest` untouched when `src` is singular;
/// otherwise writes the inverse into `dest` and returns `Ok(false)`. `src`
/// is unchanged in all cases.
///
/// Elimination runs on a working copy augmented with the identity. When a
/// diagonal pivot is exactly zero, a row below with a nonzero entry in that
/// column is swapped in; if none exists the matrix is singular. Pivots are
/// not chosen for magnitude, so no numerical-stability guarantee is made for
/// ill-conditioned floating-point input.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] for a rectangular `src`,
/// [`MatrixError::EmptyMatrix`] for `n = 0`, and
/// [`MatrixError::ShapeMismatch`] when `dest` is not `n × n`.
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{inverse, DenseMatrix, Matrix};
///
/// let src: DenseMatrix<f64> = DenseMatrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
/// let mut dest = DenseMatrix::zeros(2, 2);
/// assert!(!inverse(&src, &mut dest).unwrap());
/// assert!((dest.get(0, 0) - 0.6).abs() < 1e-12);
/// ```
pub fn inverse<T, S, D>(src: &S, dest: &mut D) -> Result<bool>
where
    T: Copy + Zero + One + PartialEq + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
    S: Matrix<T> + ?Sized,
    D: Matrix<T> + ?Sized,
{
    let (n, cols) = src.shape();
    if n != cols {
        return Err(MatrixError::NonSquare { rows: n, cols });
    }
    if n == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if dest.shape() != (n, n) {
        return Err(MatrixError::ShapeMismatch((n, n), dest.shape()));
    }

    let mut work = DenseMatrix::from_fn(n, n, |i, j| src.get(i, j));
    let mut inv = DenseMatrix::<T>::identity(n);

    for col in 0..n {
        let Some(pivot_row) = (col..n).find(|&r| work.get(r, col) != T::zero()) else {
            return Ok(true);
        };
        if pivot_row != col {
            swap_rows(&mut work, col, pivot_row);
            swap_rows(&mut inv, col, pivot_row);
        }

        let pivot = work.get(col, col);
        for j in 0..n {
            work.set(col, j, work.get(col, j) / pivot);
            inv.set(col, j, inv.get(col, j) / pivot);
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = work.get(row, col);
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                work.set(row, j, work.get(row, j) - factor * work.get(col, j));
                inv.set(row, j, inv.get(row, j) - factor * inv.get(col, j));
            }
        }
    }

    for i in 0..n {
        for j in 0..n {
            dest.set(i, j, inv.get(i, j));
        }
    }
    Ok(false)
}

fn swap_rows<T: Copy>(m: &mut DenseMatrix<T>, a: usize, b: usize) {
    for j in 0..m.ncols() {
        let tmp = m.get(a, j);
        m.set(a, j, m.get(b, j));
        m.set(b, j, tmp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::share;
    use approx::assert_relative_eq;

    #[test]
    fn test_matadd_shape_mismatch() {
        let a = DenseMatrix::filled(2, 2, 1);
        let b = DenseMatrix::filled(2, 3, 1);
        let mut dest = DenseMatrix::zeros(2, 2);
        assert!(matches!(
            matadd(&a, &b, &mut dest),
            Err(MatrixError::ShapeMismatch((2, 2), (2, 3)))
        ));
    }

    #[test]
    fn test_matadd_through_windows() {
        // Summing two overlapping views of the same parent.
        let parent = share(DenseMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as i64));
        let a = WindowMatrix::over(&parent, 2, 2, 0, 0).unwrap();
        let b = WindowMatrix::over(&parent, 2, 2, 1, 1).unwrap();
        let mut dest = DenseMatrix::zeros(2, 2);

        matadd(&a, &b, &mut dest).unwrap();
        assert_eq!(dest.as_slice(), &[4, 6, 10, 12]);
    }

    #[test]
    fn test_matmul_inner_dim_mismatch() {
        let a = DenseMatrix::filled(2, 3, 1);
        let b = DenseMatrix::filled(2, 2, 1);
        let mut dest = DenseMatrix::zeros(2, 2);
        assert!(matches!(
            matmul(&a, &b, &mut dest),
            Err(MatrixError::ShapeMismatch(..))
        ));
    }

    #[test]
    fn test_matmul_identity_is_neutral() {
        let a = DenseMatrix::from_vec(2, 2, vec![3, 1, 4, 1]).unwrap();
        let id = DenseMatrix::<i64>::identity(2);
        let mut dest = DenseMatrix::zeros(2, 2);

        matmul(&a, &id, &mut dest).unwrap();
        assert!(dest.equals(&a));
    }

    #[test]
    fn test_det_base_case() {
        let m = share(DenseMatrix::filled(1, 1, 5));
        assert_eq!(det(&m).unwrap(), 5);
    }

    #[test]
    fn test_det_2x2() {
        let m = share(DenseMatrix::from_vec(2, 2, vec![7, 13, 18, 6]).unwrap());
        assert_eq!(det(&m).unwrap(), 7 * 6 - 13 * 18);
    }

    #[test]
    fn test_det_3x3_with_off_diagonal_entry() {
        let m = share(DenseMatrix::from_vec(3, 3, vec![1, 0, 4, 0, 2, 0, 0, 0, 3]).unwrap());
        assert_eq!(det(&m).unwrap(), 6);
    }

    #[test]
    fn test_det_of_window_operand() {
        // Determinant of a view, never materialized.
        let parent =
            share(DenseMatrix::from_vec(3, 3, vec![9, 9, 9, 9, 7, 13, 9, 18, 6]).unwrap());
        let sub = share(WindowMatrix::over(&parent, 2, 2, 1, 1).unwrap());
        assert_eq!(det(&sub).unwrap(), -192);
    }

    #[test]
    fn test_det_singular_is_zero() {
        let m = share(DenseMatrix::from_vec(2, 2, vec![1, 2, 2, 4]).unwrap());
        assert_eq!(det(&m).unwrap(), 0);
    }

    #[test]
    fn test_det_rejects_rectangular() {
        let m = share(DenseMatrix::filled(2, 3, 1));
        assert!(matches!(
            det(&m),
            Err(MatrixError::NonSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_inverse_2x2() {
        let src = DenseMatrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let mut dest = DenseMatrix::zeros(2, 2);

        assert!(!inverse(&src, &mut dest).unwrap());
        assert_relative_eq!(dest.get(0, 0), 0.6, epsilon = 1e-12);
        assert_relative_eq!(dest.get(0, 1), -0.7, epsilon = 1e-12);
        assert_relative_eq!(dest.get(1, 0), -0.2, epsilon = 1e-12);
        assert_relative_eq!(dest.get(1, 1), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_zero_pivot_swaps_rows() {
        // Permutation matrix: invertible but with a zero on the diagonal.
        let src = DenseMatrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let mut dest = DenseMatrix::zeros(2, 2);

        assert!(!inverse(&src, &mut dest).unwrap());
        assert!(dest.equals(&src));
    }

    #[test]
    fn test_inverse_singular_leaves_dest_unchanged() {
        let src = DenseMatrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        let mut dest = DenseMatrix::filled(2, 2, 9.0);

        assert!(inverse(&src, &mut dest).unwrap());
        assert!(dest.equals(&DenseMatrix::filled(2, 2, 9.0)));
    }

    #[test]
    fn test_inverse_leaves_src_unchanged() {
        let src = DenseMatrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let before = src.clone();
        let mut dest = DenseMatrix::zeros(2, 2);

        inverse(&src, &mut dest).unwrap();
        assert!(src.equals(&before));
    }
}
