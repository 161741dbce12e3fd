use std::ops::{Add, Div, Mul, MulAssign, Neg, Rem, Sub};

use crate::*;

impl<T: Scalar> SquareMat<T> {
  pub fn try_add(&self, rhs: &Self) -> MatrixResult<Self> {
    self.zip_with(rhs, |a, b| a + b)
  }

  pub fn try_sub(&self, rhs: &Self) -> MatrixResult<Self> {
    self.zip_with(rhs, |a, b| a - b)
  }

  /// Matrix product, `result[i][j] = Σ_k self[i][k] * rhs[k][j]`.
  pub fn try_mul(&self, rhs: &Self) -> MatrixResult<Self> {
    self.check_same_dimension(rhs)?;
    let n = self.dimension();
    let (a, b) = (self.as_slice(), rhs.as_slice());
    Ok(Self::from_fn(n, |i, j| {
      (0..n).fold(T::zero(), |acc, k| acc + a[i * n + k] * b[k * n + j])
    }))
  }

  /// Elementwise (Hadamard) product.
  pub fn hadamard(&self, rhs: &Self) -> MatrixResult<Self> {
    self.zip_with(rhs, |a, b| a * b)
  }

  pub fn scale(&self, scalar: T) -> Self {
    self.map(|v| v * scalar)
  }

  pub fn try_div(&self, scalar: T) -> MatrixResult<Self> {
    if scalar == T::zero() {
      return Err(MatrixError::DivisionByZero);
    }
    Ok(self.map(|v| v / scalar))
  }

  /// Floating point remainder of every element, the sign follows the element.
  pub fn try_rem(&self, scalar: i32) -> MatrixResult<Self> {
    if scalar == 0 {
      return Err(MatrixError::DivisionByZero);
    }
    let scalar = T::cast_int(scalar).ok_or_else(|| {
      MatrixError::InvalidOperation(format!("{scalar} is not representable by the element type"))
    })?;
    Ok(self.map(|v| v % scalar))
  }
}

// the left operand is only replaced once the whole result is computed
macro_rules! impl_compound_assign {
  ($method: ident, $Rhs: ty) => {
    paste::paste! {
      pub fn [<$method _assign>](&mut self, rhs: $Rhs) -> MatrixResult<&mut Self> {
        *self = self.$method(rhs)?;
        Ok(self)
      }
    }
  };
}

impl<T: Scalar> SquareMat<T> {
  impl_compound_assign!(try_add, &Self);
  impl_compound_assign!(try_sub, &Self);
  impl_compound_assign!(try_mul, &Self);
  impl_compound_assign!(hadamard, &Self);
  impl_compound_assign!(try_div, T);
  impl_compound_assign!(try_rem, i32);
}

macro_rules! impl_fallible_matrix_op {
  ($Op: ident, $op: ident, $method: ident) => {
    impl<T: Scalar> $Op<&SquareMat<T>> for &SquareMat<T> {
      type Output = MatrixResult<SquareMat<T>>;
      #[inline]
      fn $op(self, rhs: &SquareMat<T>) -> Self::Output {
        self.$method(rhs)
      }
    }

    impl<T: Scalar> $Op for SquareMat<T> {
      type Output = MatrixResult<SquareMat<T>>;
      #[inline]
      fn $op(self, rhs: Self) -> Self::Output {
        self.$method(&rhs)
      }
    }
  };
}

impl_fallible_matrix_op!(Add, add, try_add);
impl_fallible_matrix_op!(Sub, sub, try_sub);
impl_fallible_matrix_op!(Mul, mul, try_mul);
impl_fallible_matrix_op!(Rem, rem, hadamard);

impl<T: Scalar> Mul<T> for &SquareMat<T> {
  type Output = SquareMat<T>;
  #[inline]
  fn mul(self, scalar: T) -> SquareMat<T> {
    self.scale(scalar)
  }
}

impl<T: Scalar> Mul<T> for SquareMat<T> {
  type Output = SquareMat<T>;
  #[inline]
  fn mul(self, scalar: T) -> SquareMat<T> {
    self.scale(scalar)
  }
}

impl<T: Scalar> MulAssign<T> for SquareMat<T> {
  fn mul_assign(&mut self, scalar: T) {
    self.elements_mut().iter_mut().for_each(|v| *v = *v * scalar);
  }
}

macro_rules! impl_scalar_lhs_mul {
  ($S: ty) => {
    impl Mul<&SquareMat<$S>> for $S {
      type Output = SquareMat<$S>;
      #[inline]
      fn mul(self, mat: &SquareMat<$S>) -> SquareMat<$S> {
        mat.scale(self)
      }
    }

    impl Mul<SquareMat<$S>> for $S {
      type Output = SquareMat<$S>;
      #[inline]
      fn mul(self, mat: SquareMat<$S>) -> SquareMat<$S> {
        mat.scale(self)
      }
    }
  };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<T: Scalar> Div<T> for &SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn div(self, scalar: T) -> Self::Output {
    self.try_div(scalar)
  }
}

impl<T: Scalar> Div<T> for SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn div(self, scalar: T) -> Self::Output {
    self.try_div(scalar)
  }
}

impl<T: Scalar> Rem<i32> for &SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn rem(self, scalar: i32) -> Self::Output {
    self.try_rem(scalar)
  }
}

impl<T: Scalar> Rem<i32> for SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn rem(self, scalar: i32) -> Self::Output {
    self.try_rem(scalar)
  }
}

impl<T: Scalar> Neg for &SquareMat<T> {
  type Output = SquareMat<T>;
  #[inline]
  fn neg(self) -> SquareMat<T> {
    self.map(|v| -v)
  }
}

impl<T: Scalar> Neg for SquareMat<T> {
  type Output = SquareMat<T>;
  #[inline]
  fn neg(self) -> SquareMat<T> {
    -&self
  }
}

#[cfg(test)]
fn mat2(rows: [[f64; 2]; 2]) -> SquareMat {
  SquareMat::from_rows(2, &rows).unwrap()
}

#[test]
fn add_sub() {
  let a = mat2([[1., 2.], [3., 4.]]);
  let b = mat2([[5., 6.], [7., 8.]]);
  assert_eq!((&a + &b).unwrap(), mat2([[6., 8.], [10., 12.]]));
  assert_eq!((&b - &a).unwrap(), mat2([[4., 4.], [4., 4.]]));
  assert_eq!(-&a, mat2([[-1., -2.], [-3., -4.]]));

  let c: SquareMat = SquareMat::new(3).unwrap();
  assert_eq!(
    &a + &c,
    Err(MatrixError::SizeMismatch { left: 2, right: 3 })
  );
  assert!(matches!(a.clone() - c, Err(MatrixError::SizeMismatch { .. })));
}

#[test]
fn mul() {
  let a = mat2([[1., 2.], [3., 4.]]);
  let b = mat2([[5., 6.], [7., 8.]]);
  let r = (&a * &b).unwrap();
  assert_eq!(r, mat2([[19., 22.], [43., 50.]]));

  let cgmath_a = cgmath::Matrix2::new(1., 3., 2., 4.);
  let cgmath_b = cgmath::Matrix2::new(5., 7., 6., 8.);
  let cgmath_r = cgmath_a * cgmath_b;
  for i in 0..2 {
    for j in 0..2 {
      assert_eq!(r[(i, j)], cgmath_r[j][i]);
    }
  }

  let c: SquareMat = SquareMat::new(1).unwrap();
  assert!(matches!(a * c, Err(MatrixError::SizeMismatch { .. })));
}

#[test]
fn scalar_ops() {
  let a = mat2([[1., 2.], [3., 4.]]);
  let doubled = mat2([[2., 4.], [6., 8.]]);
  assert_eq!(&a * 2., doubled);
  assert_eq!(2.0_f64 * &a, doubled);
  assert_eq!((&doubled / 2.).unwrap(), a);
  assert_eq!(&a / 0., Err(MatrixError::DivisionByZero));

  let mut m = a.clone();
  m *= 2.;
  assert_eq!(m, doubled);
}

#[test]
fn hadamard_and_rem() {
  let a = mat2([[1., 2.], [3., 4.]]);
  let b = mat2([[5., 6.], [7., 8.]]);
  assert_eq!((&a % &b).unwrap(), mat2([[5., 12.], [21., 32.]]));

  let m = mat2([[5., 7.], [10., -13.]]);
  assert_eq!((&m % 3).unwrap(), mat2([[2., 1.], [1., -1.]]));
  assert_eq!((&m % -3).unwrap(), mat2([[2., 1.], [1., -1.]]));
  assert_eq!(&m % 0, Err(MatrixError::DivisionByZero));
}

#[test]
fn compound_assign() {
  let mut a = mat2([[1., 2.], [3., 4.]]);
  let b = mat2([[4., 3.], [2., 1.]]);
  a.try_add_assign(&b).unwrap();
  assert_eq!(a, mat2([[5., 5.], [5., 5.]]));
  a.try_sub_assign(&b).unwrap();
  assert_eq!(a, mat2([[1., 2.], [3., 4.]]));

  a.try_mul_assign(&mat2([[2., 0.], [1., 2.]])).unwrap();
  assert_eq!(a, mat2([[4., 4.], [10., 8.]]));

  a.try_div_assign(2.).unwrap().try_rem_assign(3).unwrap();
  assert_eq!(a, mat2([[2., 2.], [2., 1.]]));

  a.hadamard_assign(&b).unwrap();
  assert_eq!(a, mat2([[8., 6.], [4., 1.]]));
}

#[test]
fn compound_assign_is_atomic() {
  let original = mat2([[1., 2.], [3., 4.]]);
  let mut a = original.clone();
  let other: SquareMat = SquareMat::new(3).unwrap();

  assert!(a.try_add_assign(&other).is_err());
  assert!(a.try_mul_assign(&other).is_err());
  assert!(a.try_div_assign(0.).is_err());
  assert!(a.try_rem_assign(0).is_err());
  assert_eq!(a, original);
}
