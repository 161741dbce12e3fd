use square_mat::*;

fn main() -> anyhow::Result<()> {
  env_logger::builder().init();

  let mat1 = SquareMat::from_rows(2, &[[1.0, 2.0], [3.0, 4.0]])?;
  let mat2 = SquareMat::from_rows(2, &[[5.0, 6.0], [7.0, 8.0]])?;

  print!("Matrix 1:\n{mat1}");
  print!("Matrix 2:\n{mat2}");

  print!("Addition:\n{}", (&mat1 + &mat2)?);
  print!("Subtraction:\n{}", (&mat2 - &mat1)?);
  print!("Unary minus:\n{}", -&mat1);
  print!("Matrix multiplication:\n{}", (&mat1 * &mat2)?);
  print!("Scalar multiplication:\n{}", &mat1 * 2.0);
  print!("Scalar division:\n{}", (&mat1 / 2.0)?);
  print!("Element-wise multiplication:\n{}", (&mat1 % &mat2)?);
  print!("Modulo with scalar:\n{}", (&mat2 % 3)?);
  print!("Power (mat1 ^ 2):\n{}", (&mat1 ^ 2)?);
  print!("Transpose (~mat1):\n{}", mat1.transpose());
  println!("Determinant (!mat1): {}", !&mat1);

  let mut mat3 = mat1.clone();
  mat3.increment();
  print!("Pre-increment:\n{mat3}");
  mat3.post_decrement();
  print!("Post-decrement:\n{mat3}");

  println!("Comparison mat1 == mat1: {}", mat1 == mat1);
  println!("Comparison mat1 > mat2: {}", mat1 > mat2);

  println!("Access mat1[1][1] (should be 4): {}", mat1.row(1)?[1]);
  mat3.row_mut(0)?[0] = 10.0;
  print!("Updated mat3:\n{mat3}");

  report_failures(&mat1);
  Ok(())
}

fn report_failures(mat: &SquareMat) {
  let bigger = SquareMat::<f64>::identity(3);
  let failures = [
    ("zero dimension", SquareMat::<f64>::new(0).map(drop)),
    (
      "size mismatch",
      bigger.and_then(|bigger| mat + &bigger).map(drop),
    ),
    ("division by zero", (mat / 0.0).map(drop)),
    ("modulo by zero", (mat % 0).map(drop)),
    ("negative exponent", (mat ^ -1).map(drop)),
    ("row out of range", mat.row(2).map(drop)),
  ];
  for (label, result) in failures {
    match result {
      Ok(()) => log::warn!("{label}: unexpectedly succeeded"),
      Err(e) => log::error!("{label}: {e}"),
    }
  }
}
