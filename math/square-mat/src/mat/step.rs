use crate::*;

impl<T: Scalar> SquareMat<T> {
  /// Add one to every element in place (`++m`).
  pub fn increment(&mut self) -> &mut Self {
    self.elements_mut().iter_mut().for_each(|v| *v = *v + T::one());
    self
  }

  /// Subtract one from every element in place (`--m`).
  pub fn decrement(&mut self) -> &mut Self {
    self.elements_mut().iter_mut().for_each(|v| *v = *v - T::one());
    self
  }

  /// `m++`, returns the value before the change.
  pub fn post_increment(&mut self) -> Self {
    let snapshot = self.clone();
    self.increment();
    snapshot
  }

  /// `m--`, returns the value before the change.
  pub fn post_decrement(&mut self) -> Self {
    let snapshot = self.clone();
    self.decrement();
    snapshot
  }
}

#[test]
fn step() {
  let ones = SquareMat::from_rows(2, &[[1., 1.], [1., 1.]]).unwrap();
  let twos = SquareMat::from_rows(2, &[[2., 2.], [2., 2.]]).unwrap();

  let mut m = ones.clone();
  assert_eq!(*m.increment(), twos);

  let before = m.post_decrement();
  assert_eq!(before, twos);
  assert_eq!(m, ones);

  let before = m.post_increment();
  assert_eq!(before, ones);
  assert_eq!(m, twos);

  m.decrement().decrement();
  assert_eq!(m.sum(), 0.);
}
