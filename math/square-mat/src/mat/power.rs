use std::ops::BitXor;

use crate::*;

impl<T: Scalar> SquareMat<T> {
  /// Integer power by repeated multiplication, `m.pow(0)` is the identity.
  pub fn pow(&self, exponent: i32) -> MatrixResult<Self> {
    if exponent < 0 {
      return Err(MatrixError::InvalidOperation(format!(
        "negative exponent {exponent}"
      )));
    }
    let mut acc = Self::identity(self.dimension())?;
    log::trace!(
      "raising a {0}x{0} matrix to the power {exponent}",
      self.dimension()
    );
    for _ in 0..exponent {
      acc = acc.try_mul(self)?;
    }
    Ok(acc)
  }
}

/// `m ^ e` is the integer power, not a bitwise operation.
impl<T: Scalar> BitXor<i32> for &SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn bitxor(self, exponent: i32) -> Self::Output {
    self.pow(exponent)
  }
}

impl<T: Scalar> BitXor<i32> for SquareMat<T> {
  type Output = MatrixResult<SquareMat<T>>;
  #[inline]
  fn bitxor(self, exponent: i32) -> Self::Output {
    self.pow(exponent)
  }
}

#[test]
fn pow() {
  let a = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  let identity: SquareMat = SquareMat::identity(2).unwrap();

  assert_eq!((&a ^ 0).unwrap(), identity);
  assert_eq!((&a ^ 1).unwrap(), a);
  assert_eq!(
    (&a ^ 2).unwrap(),
    SquareMat::from_rows(2, &[[7., 10.], [15., 22.]]).unwrap()
  );
  assert_eq!((&a ^ 3).unwrap(), (&(&a * &a).unwrap() * &a).unwrap());

  assert!(matches!(a ^ -1, Err(MatrixError::InvalidOperation(_))));
}

#[test]
fn pow_of_identity_and_nilpotent() {
  let identity: SquareMat = SquareMat::identity(4).unwrap();
  assert_eq!(identity.pow(9).unwrap(), identity);

  let shift = SquareMat::from_rows(3, &[[0., 1., 0.], [0., 0., 1.], [0., 0., 0.]]).unwrap();
  let zero: SquareMat = SquareMat::new(3).unwrap();
  assert_ne!(shift.pow(2).unwrap(), zero);
  assert_eq!(shift.pow(3).unwrap(), zero);
}
