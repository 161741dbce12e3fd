use std::ops::{Index, IndexMut};

use serde::Deserialize;

use crate::*;

impl<T: Scalar> SquareMat<T> {
  /// Zero filled `dimension × dimension` matrix.
  pub fn new(dimension: usize) -> MatrixResult<Self> {
    if dimension == 0 {
      return Err(MatrixError::InvalidSize(
        "dimension must be at least 1".to_string(),
      ));
    }
    Ok(Self {
      dimension,
      elements: vec![T::zero(); dimension * dimension],
    })
  }

  pub fn zeros(dimension: usize) -> MatrixResult<Self> {
    Self::new(dimension)
  }

  /// Copy an initializer grid of exactly `dimension` rows of `dimension` columns.
  pub fn from_rows<R: AsRef<[T]>>(dimension: usize, grid: &[R]) -> MatrixResult<Self> {
    let mut m = Self::new(dimension)?;
    if grid.len() != dimension {
      return Err(MatrixError::InvalidSize(format!(
        "expect {dimension} rows, got {}",
        grid.len()
      )));
    }
    for (i, row) in grid.iter().enumerate() {
      let row = row.as_ref();
      if row.len() != dimension {
        return Err(MatrixError::InvalidSize(format!(
          "row {i} has {} columns, expect {dimension}",
          row.len()
        )));
      }
      m.row_slice_mut(i).copy_from_slice(row);
    }
    Ok(m)
  }

  pub(crate) fn from_fn(dimension: usize, f: impl Fn(usize, usize) -> T) -> Self {
    let mut elements = Vec::with_capacity(dimension * dimension);
    for i in 0..dimension {
      for j in 0..dimension {
        elements.push(f(i, j));
      }
    }
    Self {
      dimension,
      elements,
    }
  }

  /// Read only view of one row.
  pub fn row(&self, row: usize) -> MatrixResult<&[T]> {
    self.check_row(row)?;
    Ok(self.row_slice(row))
  }

  /// Mutable view of one row.
  pub fn row_mut(&mut self, row: usize) -> MatrixResult<&mut [T]> {
    self.check_row(row)?;
    Ok(self.row_slice_mut(row))
  }

  pub fn get(&self, row: usize, col: usize) -> MatrixResult<T> {
    let r = self.row(row)?;
    r.get(col).copied().ok_or_else(|| {
      MatrixError::InvalidOperation(format!(
        "column {col} is out of range for dimension {}",
        self.dimension
      ))
    })
  }

  /// Sum of every element, the key of the ordering operators.
  pub fn sum(&self) -> T {
    self.elements.iter().fold(T::zero(), |acc, &v| acc + v)
  }

  pub fn map(&self, f: impl Fn(T) -> T) -> Self {
    Self {
      dimension: self.dimension,
      elements: self.elements.iter().map(|&v| f(v)).collect(),
    }
  }

  /// Combine two matrices of the same dimension position by position.
  pub fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> MatrixResult<Self> {
    self.check_same_dimension(other)?;
    Ok(Self {
      dimension: self.dimension,
      elements: self
        .elements
        .iter()
        .zip(other.elements.iter())
        .map(|(&a, &b)| f(a, b))
        .collect(),
    })
  }

  pub(crate) fn check_same_dimension(&self, other: &Self) -> MatrixResult<()> {
    if self.dimension != other.dimension {
      return Err(MatrixError::SizeMismatch {
        left: self.dimension,
        right: other.dimension,
      });
    }
    Ok(())
  }
}

impl<T> SquareMat<T> {
  pub fn dimension(&self) -> usize {
    self.dimension
  }

  /// Row-major element buffer of length `dimension²`.
  pub fn as_slice(&self) -> &[T] {
    &self.elements
  }

  pub(crate) fn elements_mut(&mut self) -> &mut [T] {
    &mut self.elements
  }

  fn check_row(&self, row: usize) -> MatrixResult<()> {
    if row >= self.dimension {
      return Err(MatrixError::row_out_of_range(row, self.dimension));
    }
    Ok(())
  }

  fn row_slice(&self, row: usize) -> &[T] {
    let start = row * self.dimension;
    &self.elements[start..start + self.dimension]
  }

  fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
    let start = row * self.dimension;
    &mut self.elements[start..start + self.dimension]
  }
}

impl<T: bytemuck::Pod> SquareMat<T> {
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.elements)
  }
}

/// Panics when the row is out of range, use [`SquareMat::row`] for the checked access.
impl<T> Index<usize> for SquareMat<T> {
  type Output = [T];
  fn index(&self, row: usize) -> &[T] {
    assert!(
      row < self.dimension,
      "row {row} is out of range for dimension {}",
      self.dimension
    );
    self.row_slice(row)
  }
}

impl<T> IndexMut<usize> for SquareMat<T> {
  fn index_mut(&mut self, row: usize) -> &mut [T] {
    assert!(
      row < self.dimension,
      "row {row} is out of range for dimension {}",
      self.dimension
    );
    self.row_slice_mut(row)
  }
}

impl<T> Index<(usize, usize)> for SquareMat<T> {
  type Output = T;
  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self[row][col]
  }
}

impl<T> IndexMut<(usize, usize)> for SquareMat<T> {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self[row][col]
  }
}

/// Serialized shape of [`SquareMat`], validated on the way back in.
#[derive(Deserialize)]
pub struct SquareMatData<T> {
  pub dimension: usize,
  pub elements: Vec<T>,
}

impl<T> TryFrom<SquareMatData<T>> for SquareMat<T> {
  type Error = MatrixError;

  fn try_from(data: SquareMatData<T>) -> MatrixResult<Self> {
    let SquareMatData {
      dimension,
      elements,
    } = data;
    if dimension == 0 {
      return Err(MatrixError::InvalidSize(
        "dimension must be at least 1".to_string(),
      ));
    }
    if dimension.checked_mul(dimension) != Some(elements.len()) {
      return Err(MatrixError::InvalidSize(format!(
        "{} elements can not fill a {dimension}x{dimension} matrix",
        elements.len()
      )));
    }
    Ok(Self {
      dimension,
      elements,
    })
  }
}

#[test]
fn construction() {
  let m: SquareMat = SquareMat::new(3).unwrap();
  assert_eq!(m.dimension(), 3);
  assert!(m.as_slice().iter().all(|&v| v == 0.));

  assert!(matches!(
    SquareMat::<f64>::new(0),
    Err(MatrixError::InvalidSize(_))
  ));

  let m = SquareMat::<f64>::from_rows(2, &[vec![1., 2.], vec![3., 4.]]).unwrap();
  assert_eq!(m.as_slice(), &[1., 2., 3., 4.]);

  assert!(matches!(
    SquareMat::from_rows(2, &[[1., 2.]]),
    Err(MatrixError::InvalidSize(_))
  ));
  assert!(matches!(
    SquareMat::<f64>::from_rows(2, &[vec![1., 2.], vec![3.]]),
    Err(MatrixError::InvalidSize(_))
  ));
}

#[test]
fn row_access() {
  let mut m = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  assert_eq!(m.row(1).unwrap(), &[3., 4.]);

  m.row_mut(0).unwrap()[0] = 9.;
  assert_eq!(m[0][0], 9.);
  assert_eq!(m[(1, 1)], 4.);
  assert_eq!(m.get(0, 1), Ok(2.));

  assert!(matches!(m.row(2), Err(MatrixError::InvalidOperation(_))));
  // the wrapped image of -1
  assert!(matches!(
    m.row(usize::MAX),
    Err(MatrixError::InvalidOperation(_))
  ));
  assert!(matches!(m.row_mut(5), Err(MatrixError::InvalidOperation(_))));
  assert!(matches!(m.get(0, 2), Err(MatrixError::InvalidOperation(_))));
}

#[test]
#[should_panic]
fn index_out_of_range() {
  let m: SquareMat = SquareMat::new(2).unwrap();
  let _ = m[2][0];
}

#[test]
fn deep_copy() {
  let a = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  let mut b = a.clone();
  b[(0, 0)] = 100.;
  assert_eq!(a[(0, 0)], 1.);
  assert_ne!(a, b);
}

#[test]
fn bytes_view() {
  let m = SquareMat::from_rows(1, &[[1.0f32]]).unwrap();
  assert_eq!(m.as_bytes(), &1.0f32.to_ne_bytes());
}

#[test]
fn serde_shape() {
  let m = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  let json = serde_json::to_string(&m).unwrap();
  assert_eq!(json, r#"{"dimension":2,"elements":[1.0,2.0,3.0,4.0]}"#);
  let back: SquareMat = serde_json::from_str(&json).unwrap();
  assert_eq!(back, m);

  assert!(serde_json::from_str::<SquareMat>(r#"{"dimension":2,"elements":[1.0]}"#).is_err());
  assert!(serde_json::from_str::<SquareMat>(r#"{"dimension":0,"elements":[]}"#).is_err());
}
