use std::fmt;

use crate::*;

/// One line per row, elements separated by a single space.
impl<T: fmt::Display> fmt::Display for SquareMat<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in self.as_slice().chunks(self.dimension()) {
      for (j, v) in row.iter().enumerate() {
        if j > 0 {
          f.write_str(" ")?;
        }
        write!(f, "{v}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[test]
fn display() {
  let m = SquareMat::from_rows(2, &[[1., 2.5], [-3., 4.]]).unwrap();
  assert_eq!(m.to_string(), "1 2.5\n-3 4\n");

  let m = SquareMat::from_rows(1, &[[0.]]).unwrap();
  assert_eq!(format!("{m}"), "0\n");
}
