use std::cmp::Ordering;

use crate::*;

/// Matrices are ordered by the sum of their elements, equality stays exact.
///
/// `<=` is `< || ==`, `>` is `!(<=)` and `>=` is `!(<)`, so two different matrices with the
/// same sum are `>` and `>=` each other but neither `<` nor `<=`.
impl<T: Scalar> PartialOrd for SquareMat<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self == other {
      return Some(Ordering::Equal);
    }
    match self.sum().partial_cmp(&other.sum()) {
      Some(Ordering::Equal) | None => None,
      ord => ord,
    }
  }

  fn lt(&self, other: &Self) -> bool {
    self.sum() < other.sum()
  }

  fn le(&self, other: &Self) -> bool {
    self.lt(other) || self == other
  }

  fn gt(&self, other: &Self) -> bool {
    !self.le(other)
  }

  fn ge(&self, other: &Self) -> bool {
    !self.lt(other)
  }
}

#[test]
fn ordering_by_sum() {
  let a = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  let b = SquareMat::from_rows(2, &[[5., 5.], [5., 5.]]).unwrap();
  assert!(a < b);
  assert!(b > a);
  assert!(a <= b);
  assert!(b >= a);
  assert!(a != b);
  assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));

  // dimension does not take part
  let big: SquareMat = SquareMat::new(3).unwrap();
  assert!(big < a);
}

#[test]
fn equal_sum_different_content() {
  let a = SquareMat::from_rows(2, &[[1., 2.], [3., 4.]]).unwrap();
  let b = SquareMat::from_rows(2, &[[4., 3.], [2., 1.]]).unwrap();
  assert!(a != b);
  assert!(!(a < b));
  assert!(!(a <= b));
  assert!(a > b);
  assert!(a >= b);
  assert!(b > a);
  assert_eq!(a.partial_cmp(&b), None);

  let c = a.clone();
  assert!(a <= c && a >= c && !(a < c) && !(a > c));
  assert_eq!(a.partial_cmp(&c), Some(Ordering::Equal));
}
