//! The polymorphic matrix contract and shared-ownership handles.
//!
//! Every representation, whether the owning [`DenseMatrix`] or the windowed
//! [`WindowMatrix`](crate::WindowMatrix), implements [`Matrix`], and every
//! operation in [`crate::ops`] works purely through it. The provided methods
//! (`equals`, `compare_with`, `add`, `multiply`) are built from `get` alone,
//! so they hold for any implementation.

use crate::dense::DenseMatrix;
use crate::ops::{matadd, matmul};
use crate::Result;
use num_traits::Zero;
use std::cell::RefCell;
use std::ops::Mul;
use std::rc::Rc;

/// Shared-ownership handle to a matrix.
///
/// A [`WindowMatrix`](crate::WindowMatrix) keeps its parent alive through one
/// of these, and writes through it. `Rc<RefCell<_>>` is deliberate: the
/// kernel is single-threaded (see the crate docs), and interior mutability is
/// what lets overlapping windows alias the same storage.
pub type SharedMatrix<T> = Rc<RefCell<dyn Matrix<T>>>;

/// Wraps a concrete matrix in a [`SharedMatrix`] handle.
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{share, DenseMatrix, WindowMatrix, Matrix};
///
/// let parent = share(DenseMatrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap());
/// let view = WindowMatrix::over(&parent, 1, 1, 1, 1).unwrap();
/// assert_eq!(view.get(0, 0), 4);
/// ```
pub fn share<T, M>(m: M) -> SharedMatrix<T>
where
    T: Copy + 'static,
    M: Matrix<T> + 'static,
{
    Rc::new(RefCell::new(m))
}

/// Read/write access to a rectangular grid of elements.
///
/// Dimensions are fixed when the matrix is constructed and never change.
/// `get`/`set` take coordinates in the matrix's own frame; the preconditions
/// are `i < nrows()` and `j < ncols()`, and implementations panic when they
/// are violated.
pub trait Matrix<T: Copy> {
    /// Number of rows.
    fn nrows(&self) -> usize;

    /// Number of columns.
    fn ncols(&self) -> usize;

    /// Returns the element at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows()` or `j >= ncols()`.
    fn get(&self, i: usize, j: usize) -> T;

    /// Writes `value` at `(i, j)` and returns the value written.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows()` or `j >= ncols()`.
    fn set(&mut self, i: usize, j: usize, value: T) -> T;

    /// Shape as `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Exact entrywise equality with another matrix.
    ///
    /// Returns `false` when the shapes differ. This checks strict equality
    /// and is not recommended for floating-point matrices; use
    /// [`compare_with`](Matrix::compare_with) with a tolerance predicate
    /// instead.
    fn equals(&self, other: &dyn Matrix<T>) -> bool
    where
        T: PartialEq,
    {
        if self.shape() != other.shape() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if self.get(i, j) != other.get(i, j) {
                    return false;
                }
            }
        }
        true
    }

    /// Entrywise comparison by predicate.
    ///
    /// Returns `true` iff `pred(self[i][j], other[i][j])` holds at every
    /// coordinate; short-circuits on the first failure. Returns `false` when
    /// the shapes differ.
    fn compare_with(&self, other: &dyn Matrix<T>, pred: &dyn Fn(T, T) -> bool) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if !pred(self.get(i, j), other.get(i, j)) {
                    return false;
                }
            }
        }
        true
    }

    /// Entrywise sum with another matrix of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`](crate::MatrixError::ShapeMismatch)
    /// when the shapes differ.
    fn add(&self, other: &dyn Matrix<T>) -> Result<DenseMatrix<T>>
    where
        T: Zero,
    {
        let mut dest = DenseMatrix::zeros(self.nrows(), self.ncols());
        matadd(self, other, &mut dest)?;
        Ok(dest)
    }

    /// Matrix product: `self` is `m×n`, `other` must be `n×o`, the result is
    /// `m×o`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`](crate::MatrixError::ShapeMismatch)
    /// when the inner dimensions differ.
    fn multiply(&self, other: &dyn Matrix<T>) -> Result<DenseMatrix<T>>
    where
        T: Zero + Mul<Output = T>,
    {
        let mut dest = DenseMatrix::zeros(self.nrows(), other.ncols());
        matmul(self, other, &mut dest)?;
        Ok(dest)
    }
}
