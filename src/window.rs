//! Windowed matrix views with modular wraparound indexing.

use crate::matrix::{Matrix, SharedMatrix};
use crate::{MatrixError, Result};
use std::rc::Rc;

/// A `rows × cols` view over a shared parent matrix, offset by
/// `(row_off, col_off)` with cyclic wraparound.
///
/// `get(i, j)` reads the parent at `((i + row_off) % M, (j + col_off) % N)`
/// where `M × N` is the parent's shape: indices wrap at the boundary instead
/// of erroring, so a window of any shape at any offset is valid. The window
/// owns no elements; `set` writes through to the parent's storage, and
/// overlapping windows over the same parent alias each other by design.
///
/// A window can itself be shared and become the parent of another window;
/// each access walks one level of the chain, so the composed offsets are
/// never flattened.
///
/// The determinant in [`crate::ops`] leans on all of this: the minor that
/// drops row 0 and column `j` of an `n × n` matrix is exactly the
/// `(n-1) × (n-1)` window at offset `(1, j + 1)`; for `j = n-1` the column
/// range wraps back around to column 0.
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{share, DenseMatrix, Matrix, WindowMatrix};
///
/// let parent = share(DenseMatrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap());
///
/// // A full-size window at offset (1, 1) rotates the parent cyclically.
/// let w = WindowMatrix::over(&parent, 2, 2, 1, 1).unwrap();
/// assert_eq!(w.get(0, 0), 4);
/// assert_eq!(w.get(1, 1), 1);
/// ```
pub struct WindowMatrix<T: Copy> {
    parent: SharedMatrix<T>,
    parent_rows: usize,
    parent_cols: usize,
    rows: usize,
    cols: usize,
    row_off: usize,
    col_off: usize,
}

impl<T: Copy> WindowMatrix<T> {
    /// Creates a `rows × cols` window over `parent` at offset
    /// `(row_off, col_off)`.
    ///
    /// The parent's dimensions are captured here; they are immutable after
    /// construction, so every later access reuses them as the wraparound
    /// moduli.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if the window or its parent has a
    /// zero dimension (the modulus would be zero).
    pub fn over(
        parent: &SharedMatrix<T>,
        rows: usize,
        cols: usize,
        row_off: usize,
        col_off: usize,
    ) -> Result<Self> {
        let (parent_rows, parent_cols) = parent.borrow().shape();
        if parent_rows == 0 || parent_cols == 0 || rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        Ok(Self {
            parent: Rc::clone(parent),
            parent_rows,
            parent_cols,
            rows,
            cols,
            row_off,
            col_off,
        })
    }

    /// Creates a window mirroring `parent` exactly: same shape, zero offset.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyMatrix`] if the parent has a zero
    /// dimension.
    pub fn covering(parent: &SharedMatrix<T>) -> Result<Self> {
        let (rows, cols) = parent.borrow().shape();
        Self::over(parent, rows, cols, 0, 0)
    }

    /// The view's offset into its parent, as `(row_off, col_off)`.
    pub fn offset(&self) -> (usize, usize) {
        (self.row_off, self.col_off)
    }
}

impl<T: Copy> Matrix<T> for WindowMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols);
        self.parent.borrow().get(
            (i + self.row_off) % self.parent_rows,
            (j + self.col_off) % self.parent_cols,
        )
    }

    fn set(&mut self, i: usize, j: usize, value: T) -> T {
        assert!(i < self.rows && j < self.cols);
        self.parent.borrow_mut().set(
            (i + self.row_off) % self.parent_rows,
            (j + self.col_off) % self.parent_cols,
            value,
        )
    }
}
