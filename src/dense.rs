//! Owning dense matrix with row-major storage.

use crate::matrix::Matrix;
use crate::{MatrixError, Result};
use num_traits::{One, Zero};
use std::ops::{Add, Mul};

/// An owned `rows × cols` matrix stored contiguously in row-major order.
///
/// This is the only representation that owns element storage; a
/// [`WindowMatrix`](crate::WindowMatrix) borrows from a matrix like this one
/// through a shared handle. Ownership of a `DenseMatrix` itself is exclusive:
/// cloning copies every element.
///
/// There is no uninitialized constructor; [`DenseMatrix::zeros`] is the safe
/// replacement for "allocate and fill later".
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{DenseMatrix, Matrix};
///
/// let mut m = DenseMatrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6);
///
/// m.set(0, 0, 9);
/// assert_eq!(m.get(0, 0), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> DenseMatrix<T> {
    /// Creates a matrix holding `rows * cols` copies of `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from a flat buffer in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DataLength`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix with values produced by a function of the coordinate.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Materializes any matrix (dense or window) into fresh owned storage,
    /// element by element.
    pub fn from_matrix(src: &dyn Matrix<T>) -> Self {
        let (rows, cols) = src.shape();
        Self::from_fn(rows, cols, |i, j| src.get(i, j))
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Zero> DenseMatrix<T> {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }
}

impl<T: Copy + Zero + One> DenseMatrix<T> {
    /// Creates the `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Copy> Matrix<T> for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: T) -> T {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
        value
    }
}

/// Operator form of [`Matrix::add`].
///
/// # Panics
///
/// Panics if the shapes differ; use [`Matrix::add`] for the checked form.
impl<T: Copy + Zero> Add for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> DenseMatrix<T> {
        match Matrix::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("matrix addition failed: {e}"),
        }
    }
}

/// Operator form of [`Matrix::multiply`].
///
/// # Panics
///
/// Panics if the inner dimensions differ; use [`Matrix::multiply`] for the
/// checked form.
impl<T: Copy + Zero + Mul<Output = T>> Mul for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: Self) -> DenseMatrix<T> {
        match Matrix::multiply(self, rhs) {
            Ok(prod) => prod,
            Err(e) => panic!("matrix multiplication failed: {e}"),
        }
    }
}
