//! Bracket/tab debug rendering for matrices.
//!
//! The layout is the kernel's traditional diagnostic form: rows of
//! tab-separated values between `[` and `]`. It is a human convenience, not
//! a stable serialization format.

use crate::dense::DenseMatrix;
use crate::matrix::Matrix;
use crate::window::WindowMatrix;
use std::fmt;

/// Adapter that renders any [`Matrix`] with [`fmt::Display`].
///
/// # Example
///
/// ```rust
/// use gabp_linalg::{DenseMatrix, MatrixDisplay};
///
/// let m = DenseMatrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(
///     MatrixDisplay(&m).to_string(),
///     "[ \t1\t2\n  \t3\t4\t ]\n",
/// );
/// ```
pub struct MatrixDisplay<'a, T: Copy>(pub &'a dyn Matrix<T>);

impl<T: Copy + fmt::Display> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for i in 0..self.0.nrows() {
            if i > 0 {
                write!(f, "\n  ")?;
            }
            for j in 0..self.0.ncols() {
                write!(f, "\t{}", self.0.get(i, j))?;
            }
        }
        writeln!(f, "\t ]")
    }
}

impl<T: Copy + fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixDisplay(self).fmt(f)
    }
}

impl<T: Copy + fmt::Display> fmt::Display for WindowMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixDisplay(self).fmt(f)
    }
}
