use std::ops::Not;

use crate::*;

impl<T: Scalar> SquareMat<T> {
  /// The `(N-1)×(N-1)` matrix left after deleting `row` and `col`.
  pub fn minor(&self, row: usize, col: usize) -> MatrixResult<Self> {
    let n = self.dimension();
    if n < 2 {
      return Err(MatrixError::InvalidOperation(
        "a 1x1 matrix has no minor".to_string(),
      ));
    }
    if row >= n {
      return Err(MatrixError::row_out_of_range(row, n));
    }
    if col >= n {
      return Err(MatrixError::InvalidOperation(format!(
        "column {col} is out of range for dimension {n}"
      )));
    }
    Ok(self.minor_unchecked(row, col))
  }

  // remaining elements keep their relative order, indices past the deleted ones shift by one
  fn minor_unchecked(&self, row: usize, col: usize) -> Self {
    let n = self.dimension();
    let e = self.as_slice();
    Self::from_fn(n - 1, |i, j| {
      let src_i = if i < row { i } else { i + 1 };
      let src_j = if j < col { j } else { j + 1 };
      e[src_i * n + src_j]
    })
  }
}

/// Laplace expansion along the first row, closed forms for 1x1 and 2x2.
pub(super) fn cofactor_det<T: Scalar>(m: &SquareMat<T>) -> T {
  let n = m.dimension();
  let e = m.as_slice();
  match n {
    1 => e[0],
    2 => e[0] * e[3] - e[1] * e[2],
    _ => {
      log::trace!("cofactor expansion of a {n}x{n} matrix");
      (0..n).fold(T::zero(), |acc, col| {
        let sign = if col % 2 == 0 { T::one() } else { -T::one() };
        acc + sign * e[col] * cofactor_det(&m.minor_unchecked(0, col))
      })
    }
  }
}

/// `!m` is the determinant.
impl<T: Scalar> Not for &SquareMat<T> {
  type Output = T;
  #[inline]
  fn not(self) -> T {
    self.det()
  }
}

impl<T: Scalar> Not for SquareMat<T> {
  type Output = T;
  #[inline]
  fn not(self) -> T {
    self.det()
  }
}

#[cfg(test)]
fn mat<const N: usize>(rows: [[f64; N]; N]) -> SquareMat {
  SquareMat::from_rows(N, &rows).unwrap()
}

#[test]
fn minor() {
  let m = mat([[1., 2., 3.], [4., 5., 6.], [7., 8., 10.]]);
  assert_eq!(m.minor(0, 1).unwrap(), mat([[4., 6.], [7., 10.]]));
  assert_eq!(m.minor(1, 0).unwrap(), mat([[2., 3.], [8., 10.]]));
  assert_eq!(m.minor(2, 2).unwrap(), mat([[1., 2.], [4., 5.]]));

  assert!(matches!(m.minor(3, 0), Err(MatrixError::InvalidOperation(_))));
  assert!(matches!(m.minor(0, 3), Err(MatrixError::InvalidOperation(_))));
  assert!(matches!(
    mat([[1.]]).minor(0, 0),
    Err(MatrixError::InvalidOperation(_))
  ));
}

#[test]
fn det_small() {
  assert_eq!(!&mat([[7.]]), 7.);
  assert_eq!(!&mat([[1., 2.], [3., 4.]]), -2.);
  assert_eq!(mat([[6., 1., 1.], [4., -2., 5.], [2., 8., 7.]]).det(), -306.);
}

#[test]
fn det_sign_alternation() {
  #[rustfmt::skip]
  let m = mat([
    [1., 0., 2., -1.],
    [3., 0., 0., 5.],
    [2., 1., 4., -3.],
    [1., 0., 5., 0.],
  ]);
  assert_eq!(!&m, 30.);
  assert_eq!(m.transpose().det(), 30.);

  #[rustfmt::skip]
  let m = mat([
    [2., -1., 0., 3., 1.],
    [1., 4., 2., 0., -2.],
    [0., 3., -1., 2., 5.],
    [4., 0., 1., -3., 2.],
    [1., 2., 3., 1., 0.],
  ]);
  assert_eq!(!m, 1164.);
}

#[test]
fn det_matches_cgmath() {
  #[rustfmt::skip]
  let rows = [
    [1.5, -2., 0.25, 3.],
    [4., 1., -1., 0.5],
    [0., 2.5, 3., -1.],
    [2., 0., 1., 1.],
  ];
  // cgmath is column major, the determinant does not care
  #[rustfmt::skip]
  let cgmath_m = cgmath::Matrix4::new(
    rows[0][0], rows[0][1], rows[0][2], rows[0][3],
    rows[1][0], rows[1][1], rows[1][2], rows[1][3],
    rows[2][0], rows[2][1], rows[2][2], rows[2][3],
    rows[3][0], rows[3][1], rows[3][2], rows[3][3],
  );
  let expect = cgmath::SquareMatrix::determinant(&cgmath_m);
  assert!((mat(rows).det() - expect).abs() < 1e-9);
}
