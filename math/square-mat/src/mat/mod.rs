use serde::{Deserialize, Serialize};

use crate::*;

mod arithmetic;
mod compare;
mod det;
mod display;
mod power;
mod step;
mod storage;

pub use storage::SquareMatData;

/// Owning row-major N×N matrix, N fixed at construction.
///
/// Cloning copies the whole buffer, two values never share storage.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "SquareMatData<T>")]
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMat<T = f64> {
  dimension: usize,
  elements: Vec<T>,
}

pub trait SquareMatrix<T: Scalar>: Sized {
  /// 1 on the diagonal, 0 elsewhere.
  fn identity(dimension: usize) -> MatrixResult<Self>;

  #[must_use]
  fn transpose(&self) -> Self;

  #[must_use]
  fn det(&self) -> T;
}

impl<T: Scalar> SquareMatrix<T> for SquareMat<T> {
  fn identity(dimension: usize) -> MatrixResult<Self> {
    let mut m = Self::new(dimension)?;
    for i in 0..dimension {
      m.elements[i * dimension + i] = T::one();
    }
    Ok(m)
  }

  fn transpose(&self) -> Self {
    let n = self.dimension;
    let mut elements = Vec::with_capacity(self.elements.len());
    for i in 0..n {
      for j in 0..n {
        elements.push(self.elements[j * n + i]);
      }
    }
    Self {
      dimension: n,
      elements,
    }
  }

  fn det(&self) -> T {
    det::cofactor_det(self)
  }
}
