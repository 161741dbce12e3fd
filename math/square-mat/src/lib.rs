//! Dense N×N matrices of real numbers with a full arithmetic and relational operator suite.
//!
//! Every operation that can fail (dimension mismatch, division by zero, bad row index,
//! negative exponent) reports through [`MatrixResult`] instead of panicking, including the
//! `std::ops` operators, whose `Output` is a result for the fallible cases:
//!
//! ```
//! use square_mat::*;
//!
//! let a = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]])?;
//! let b = SquareMat::from_rows(2, &[[5., 6.], [7., 8.]])?;
//!
//! let product = (&a * &b)?;
//! assert_eq!(product, SquareMat::from_rows(2, &[[19., 22.], [43., 50.]])?);
//! assert_eq!(!&a, -2.);
//! # Ok::<(), MatrixError>(())
//! ```

mod error;
mod mat;
mod scalar;

pub use error::*;
pub use mat::*;
pub use scalar::*;

#[cfg(test)]
mod test;
