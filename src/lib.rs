//! Dense linear-algebra kernel for Gaussian belief-propagation inference.
//!
//! This crate provides the numerical backend a GaBP message-passing engine
//! runs on: small dense matrices with a polymorphic access contract, windowed
//! views with modular wraparound indexing, and free functions for the
//! operations the inference loop needs (entrywise addition, multiplication,
//! cofactor-expansion determinants, Gauss-Jordan inversion).
//!
//! # Core Types
//!
//! - [`Matrix`]: the access contract (`get`/`set` by coordinate, dimensions
//!   fixed at construction) every representation implements
//! - [`DenseMatrix`]: owning row-major storage
//! - [`WindowMatrix`]: a zero-copy view over a shared parent matrix,
//!   re-addressing coordinates through an offset with wraparound
//! - [`SharedMatrix`]: the reference-counted handle windows hold on their
//!   parent
//!
//! # Free Functions
//!
//! - [`matadd`]: entrywise sum into a destination
//! - [`matmul`]: matrix product into a destination
//! - [`det`]: determinant by cofactor expansion over shrinking window views
//! - [`inverse`]: Gauss-Jordan inversion with a singularity signal
//!
//! # Example
//!
//! ```rust
//! use gabp_linalg::{det, share, DenseMatrix, Matrix};
//!
//! let a = DenseMatrix::from_vec(2, 2, vec![7, 13, 18, 6]).unwrap();
//! let b = DenseMatrix::filled(2, 2, 1);
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.get(0, 0), 8);
//!
//! let a = share(a);
//! assert_eq!(det(&a).unwrap(), 7 * 6 - 13 * 18);
//! ```
//!
//! # Views and Aliasing
//!
//! A [`WindowMatrix`] holds a shared handle to its parent, so several windows
//! may cover overlapping regions of the same storage at once; a `set` through
//! any of them writes through to the parent. The determinant relies on this:
//! each minor is a window over the operand, not a copy. Handles are
//! `Rc<RefCell<_>>` and therefore single-threaded; the aliasing that would be
//! undefined behavior across threads simply does not compile here.
//!
//! # Shape Checking
//!
//! Dimensions are fixed when a matrix is constructed. Every multi-matrix
//! operation validates its operands' shapes up front and returns
//! [`MatrixError`] before touching the destination. Out-of-range access to a
//! single element is a programming error and panics.

mod dense;
mod display;
mod matrix;
mod ops;
mod window;

pub use dense::DenseMatrix;
pub use display::MatrixDisplay;
pub use matrix::{share, Matrix, SharedMatrix};
pub use ops::{det, inverse, matadd, matmul};
pub use window::WindowMatrix;

/// Errors that can occur during matrix operations.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch((usize, usize), (usize, usize)),

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix: rows={rows}, cols={cols}")]
    NonSquare { rows: usize, cols: usize },

    /// A dimension is zero where a nonzero extent is required.
    #[error("empty matrix: dimension must be nonzero")]
    EmptyMatrix,

    /// Flat buffer length doesn't match the requested shape.
    #[error("data length {len} does not match {rows}x{cols}")]
    DataLength {
        len: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
