use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::*;

fn mat<const N: usize>(rows: [[f64; N]; N]) -> SquareMat {
  SquareMat::from_rows(N, &rows).unwrap()
}

fn random_mat(rng: &mut StdRng, n: usize) -> SquareMat {
  let mut m: SquareMat = SquareMat::new(n).unwrap();
  for i in 0..n {
    for v in m.row_mut(i).unwrap() {
      *v = rng.gen_range(-9..=9) as f64;
    }
  }
  m
}

#[test]
fn end_to_end() {
  let a = mat([[1., 2.], [3., 4.]]);
  let b = mat([[5., 6.], [7., 8.]]);

  assert_eq!((&a + &b).unwrap(), mat([[6., 8.], [10., 12.]]));
  assert_eq!((&a * &b).unwrap(), mat([[19., 22.], [43., 50.]]));
  assert_eq!(!&a, -2.);
  assert_eq!(a.transpose(), mat([[1., 3.], [2., 4.]]));

  assert_eq!((&b - &a).unwrap(), mat([[4., 4.], [4., 4.]]));
  assert_eq!(&a * 2., mat([[2., 4.], [6., 8.]]));
  assert_eq!((&a / 2.).unwrap(), mat([[0.5, 1.], [1.5, 2.]]));
  assert_eq!((&a % &b).unwrap(), mat([[5., 12.], [21., 32.]]));
  assert_eq!((&b % 3).unwrap(), mat([[2., 0.], [1., 2.]]));
  assert_eq!((&a ^ 2).unwrap(), mat([[7., 10.], [15., 22.]]));
  assert!(a == a.clone());
  assert!(!(a > b));
}

#[test]
fn operands_are_not_modified() {
  let a = mat([[1., 2.], [3., 4.]]);
  let b = mat([[5., 6.], [7., 8.]]);
  let (a0, b0) = (a.clone(), b.clone());

  let _ = &a + &b;
  let _ = &a * &b;
  let _ = &a % &b;
  let _ = &a ^ 3;
  let _ = -&a;
  let _ = a.transpose();
  let _ = !&a;
  assert_eq!((a, b), (a0, b0));
}

#[test]
fn comparison_operators() {
  let a = mat([[1., 2.], [3., 4.]]);
  let b = mat([[4., 3.], [2., 1.]]);
  let c = mat([[5., 5.], [5., 5.]]);

  assert!(a != b);
  assert!(a != c);
  assert!(c > a);
  assert!(a < c);
  assert!(c >= b);
  assert!(b <= c);

  // sum 10 against sum 20
  let ten = mat([[10., 0.], [0., 0.]]);
  let twenty = mat([[2., 3.], [7., 8.]]);
  assert!(ten < twenty);
  assert!(twenty > ten);
  assert!(ten <= twenty);
  assert!(ten != twenty);
}

#[test]
fn error_kinds() {
  assert!(matches!(
    SquareMat::<f64>::new(0),
    Err(MatrixError::InvalidSize(_))
  ));

  let a = mat([[1., 2.], [3., 4.]]);
  let b = mat([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);

  for result in [&a + &b, &a - &b, &a * &b, &a % &b] {
    assert_eq!(result, Err(MatrixError::SizeMismatch { left: 2, right: 3 }));
  }
  assert_eq!(&a / 0., Err(MatrixError::DivisionByZero));
  assert_eq!(&a % 0, Err(MatrixError::DivisionByZero));
  assert!(matches!(&a ^ -2, Err(MatrixError::InvalidOperation(_))));
  assert!(matches!(a.row(2), Err(MatrixError::InvalidOperation(_))));
  assert!(matches!(
    a.row(usize::MAX),
    Err(MatrixError::InvalidOperation(_))
  ));

  // scalar operations ignore the dimension entirely
  assert!((&b * 3.).try_div(3.).is_ok());
}

#[test]
fn element_access_and_update() {
  let mut a = mat([[1., 2.], [3., 4.]]);
  a.row_mut(0).unwrap()[0] = 9.;
  assert_eq!(a.row(0).unwrap()[0], 9.);
  assert_eq!(a[1][1], 4.);
  a[1][0] = -1.;
  assert_eq!(a, mat([[9., 2.], [-1., 4.]]));
}

#[test]
fn rendering() {
  let a = mat([[1., 2.], [3., 4.]]);
  assert_eq!(a.to_string(), "1 2\n3 4\n");
}

#[test]
fn algebraic_properties() {
  let mut rng = StdRng::seed_from_u64(0x5eed);
  for n in 1..=5 {
    for _ in 0..8 {
      let a = random_mat(&mut rng, n);
      let b = random_mat(&mut rng, n);

      assert_eq!(a.transpose().transpose(), a);
      assert_eq!(&a + &b, &b + &a);
      assert_eq!((&(&a + &b).unwrap() - &b).unwrap(), a);

      for s in [2., -4., 0.5] {
        assert_eq!((&a * s).try_div(s).unwrap(), a);
      }

      let identity: SquareMat = SquareMat::identity(n).unwrap();
      assert_eq!((&a ^ 0).unwrap(), identity);
      assert_eq!((&a ^ 1).unwrap(), a);
      assert_eq!((&a ^ 2).unwrap(), (&a * &a).unwrap());
      assert_eq!((&a * &identity).unwrap(), a);

      assert_eq!(a.transpose().det(), a.det());
    }
  }
}

#[test]
fn determinant_is_multiplicative() {
  let mut rng = StdRng::seed_from_u64(7);
  for n in 1..=3 {
    for _ in 0..16 {
      let a = random_mat(&mut rng, n);
      let b = random_mat(&mut rng, n);
      assert_eq!((&a * &b).unwrap().det(), a.det() * b.det());
    }
  }
}

#[test]
fn single_precision() {
  let a = SquareMat::from_rows(2, &[[1.0f32, 2.], [3., 4.]]).unwrap();
  assert_eq!(!&a, -2.0f32);
  assert_eq!(2.0f32 * &a, &a * 2.0f32);
}
