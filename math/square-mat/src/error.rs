/// Failure kinds of matrix construction and the operator suite.
///
/// An error always aborts the operation that raised it; nothing is partially written.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
  #[error("invalid matrix operation: {0}")]
  InvalidOperation(String),
  #[error("matrix size mismatch: {left}x{left} against {right}x{right}")]
  SizeMismatch { left: usize, right: usize },
  #[error("matrix size invalid: {0}")]
  InvalidSize(String),
  #[error("division by zero")]
  DivisionByZero,
}

pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
  pub(crate) fn row_out_of_range(row: usize, dimension: usize) -> Self {
    Self::InvalidOperation(format!(
      "row {row} is out of range for dimension {dimension}"
    ))
  }
}

#[test]
fn display() {
  let err = MatrixError::SizeMismatch { left: 2, right: 3 };
  assert_eq!(err.to_string(), "matrix size mismatch: 2x2 against 3x3");
  assert_eq!(MatrixError::DivisionByZero.to_string(), "division by zero");
}
