use std::fmt::{Debug, Display};

use num_traits::{Float, NumCast};

/// Element type of a [`crate::SquareMat`].
pub trait Scalar: Float + NumCast + Debug + Display + Default + Send + Sync + 'static {
  /// Convert the integer operand of `%` and `^` style operations.
  #[inline]
  fn cast_int(v: i32) -> Option<Self> {
    <Self as NumCast>::from(v)
  }
}

impl<T> Scalar for T where T: Float + NumCast + Debug + Display + Default + Send + Sync + 'static {}

#[test]
fn cast_int() {
  assert_eq!(f64::cast_int(-3), Some(-3.));
  assert_eq!(f32::cast_int(7), Some(7.));
}
