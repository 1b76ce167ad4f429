use matchain_core::{
    dtype::{set_default_dtype, DType},
    error::{Error, Result},
    scalar::Scalar,
};
use matchain_matrix::Matrix;

#[test]
fn new_keeps_the_source_dtype() -> Result<()> {
    let ints = Matrix::new(vec![vec![1i32, 2], vec![3, 4]])?;
    assert_eq!(ints.dtype(), DType::I32);

    let floats = Matrix::new(vec![vec![1.0f64, 2.0]])?;
    assert_eq!(floats.dtype(), DType::F64);

    Ok(())
}

#[test]
fn new_with_dtype_converts() -> Result<()> {
    let m = Matrix::new_with_dtype(vec![vec![1i32, 2], vec![3, 4]], DType::F64)?;

    assert_eq!(m.dtype(), DType::F64);
    assert_eq!(m.to_flatten_vec::<f64>()?, vec![1.0, 2.0, 3.0, 4.0]);

    Ok(())
}

#[test]
fn ragged_rows_are_rejected() {
    let result = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0]]);

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn from_flat_vec() -> Result<()> {
    let m = Matrix::from_flat_vec(&[1i64, 2, 3, 4, 5, 6], 2, 3)?;

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.dtype(), DType::I64);
    assert_eq!(m.get(1, 2)?.as_i64(), 6);

    let bad = Matrix::from_flat_vec(&[1i64, 2, 3], 2, 3);
    assert!(matches!(bad, Err(Error::InvalidArgument(_))));

    Ok(())
}

#[test]
fn get_and_set() -> Result<()> {
    let mut m = Matrix::new(vec![vec![3.0f32, 4.0], vec![5.0, 9.0]])?;

    assert_eq!(m.get(1, 0)?.as_f32(), 5.0);

    m.set(1, 0, 2.0f32)?;
    assert_eq!(m.to_flatten_vec::<f32>()?, vec![3.0, 4.0, 2.0, 9.0]);

    assert!(matches!(
        m.get(2, 0),
        Err(Error::IndexOutOfBounds {
            index: (2, 0),
            dims: (2, 2)
        })
    ));
    assert!(m.set(0, 2, 1.0f32).is_err());

    Ok(())
}

#[test]
fn set_does_not_leak_into_clones() -> Result<()> {
    let a = Matrix::new(vec![vec![1i32, 2], vec![3, 4]])?;
    let mut b = a.clone();

    b.set(0, 0, 100i32)?;

    assert_eq!(a.get(0, 0)?.as_i32(), 1);
    assert_eq!(b.get(0, 0)?.as_i32(), 100);

    Ok(())
}

#[test]
fn zeros_ones_eye() -> Result<()> {
    let z = Matrix::zeros_with_dtype(2, 3, DType::I32)?;
    assert_eq!(z.to_flatten_vec::<i32>()?, vec![0; 6]);

    let o = Matrix::ones_with_dtype(2, 2, DType::F64)?;
    assert_eq!(o.to_flatten_vec::<f64>()?, vec![1.0; 4]);

    let e = Matrix::eye_with_dtype(3, DType::I64)?;
    assert_eq!(e.to_flatten_vec::<i64>()?, vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
    assert!(e.is_square());

    let e = Matrix::eye(2)?;
    assert_eq!(e.dtype(), DType::F32);
    assert_eq!(e.to_flatten_vec::<f32>()?, vec![1.0, 0.0, 0.0, 1.0]);

    Ok(())
}

#[test]
fn fill_and_like_constructors() -> Result<()> {
    let f = Matrix::fill(2, 2, 7i32)?;
    assert_eq!(f.dtype(), DType::I32);
    assert_eq!(f.to_flatten_vec::<i32>()?, vec![7; 4]);

    let z = Matrix::zeros_like(&f)?;
    assert_eq!(z.dtype(), DType::I32);
    assert_eq!(z.to_flatten_vec::<i32>()?, vec![0; 4]);

    let o = Matrix::ones_like(&f)?;
    assert_eq!(o.to_flatten_vec::<i32>()?, vec![1; 4]);

    let r = Matrix::randn_like(&Matrix::zeros_with_dtype(3, 2, DType::F64)?)?;
    assert_eq!(r.shape(), (3, 2));
    assert_eq!(r.dtype(), DType::F64);

    Ok(())
}

#[test]
fn default_dtype_applies_to_shape_constructors() -> Result<()> {
    let before = Matrix::zeros(2, 2)?;
    assert_eq!(before.dtype(), DType::F32);

    set_default_dtype(DType::F64);
    let after = Matrix::zeros(2, 2)?;
    assert_eq!(after.dtype(), DType::F64);
    set_default_dtype(DType::F32);

    Ok(())
}

#[test]
fn randn_has_the_requested_spec() -> Result<()> {
    let m = Matrix::randn_with_dtype(4, 5, DType::F64)?;

    assert_eq!(m.shape(), (4, 5));
    assert_eq!(m.dtype(), DType::F64);
    assert_eq!(m.to_flatten_vec::<f64>()?.len(), 20);

    Ok(())
}

#[test]
fn to_vec2_round_trips() -> Result<()> {
    let rows = vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let m = Matrix::new(rows.clone())?;

    assert_eq!(m.to_vec2::<f32>()?, rows);

    Ok(())
}

#[test]
fn transpose() -> Result<()> {
    let m = Matrix::new(vec![vec![1i32, 2, 3], vec![4, 5, 6]])?;

    let t = m.transpose()?;
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.to_flatten_vec::<i32>()?, vec![1, 4, 2, 5, 3, 6]);

    let back = t.transpose()?;
    assert_eq!(back.to_flatten_vec::<i32>()?, m.to_flatten_vec::<i32>()?);

    Ok(())
}

#[test]
fn repeat_rows() -> Result<()> {
    let row = Matrix::new(vec![vec![1.0f32, 2.0, 3.0]])?;

    let stacked = row.repeat_rows(3)?;
    assert_eq!(stacked.shape(), (3, 3));
    assert_eq!(
        stacked.to_flatten_vec::<f32>()?,
        vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0]
    );

    let tall = Matrix::new(vec![vec![1.0f32], vec![2.0]])?;
    assert!(matches!(tall.repeat_rows(2), Err(Error::InvalidArgument(_))));

    Ok(())
}

#[test]
fn to_dtype_truncates_toward_zero() -> Result<()> {
    let m = Matrix::new(vec![vec![3.7f64, -1.2]])?;

    let ints = m.to_dtype(DType::I32)?;
    assert_eq!(ints.to_flatten_vec::<i32>()?, vec![3, -1]);

    Ok(())
}

#[test]
fn scalar_accessors_convert() {
    let s = Scalar::new(3i64);

    assert_eq!(s.as_f64(), 3.0);
    assert_eq!(s.as_i32(), 3);
    assert_eq!(s.dtype(), DType::I64);
    assert!(s.is_int());
    assert!(!s.is_float());

    assert_eq!(s.to_dtype(DType::F32), Scalar::F32(3.0));
    assert_eq!(Scalar::I32(2) + Scalar::I32(3), Scalar::I32(5));
    assert_eq!(Scalar::F64(1.5) * Scalar::F64(2.0), Scalar::F64(3.0));
    // mixed variants fall back to f64 arithmetic
    assert_eq!(Scalar::I32(1) + Scalar::F64(0.5), Scalar::F64(1.5));
}

#[test]
fn empty_matrices() -> Result<()> {
    let e = Matrix::empty(0, 4)?;
    assert!(e.is_empty());
    assert_eq!(e.shape(), (0, 4));

    let m = Matrix::new(vec![vec![1.0f32]])?;
    assert!(!m.is_empty());

    Ok(())
}

#[test]
fn display_formats_by_dtype() -> Result<()> {
    let ints = Matrix::new(vec![vec![1i32, 2], vec![3, 4]])?;
    assert_eq!(format!("{}", ints), "[[1, 2], [3, 4]]");

    let floats = Matrix::new(vec![vec![1.5f32]])?;
    assert_eq!(format!("{}", floats), "[[1.5000]]");

    Ok(())
}

#[test]
fn debug_includes_the_spec() -> Result<()> {
    let m = Matrix::new(vec![vec![1i32]])?;

    let debug = format!("{:?}", m);
    assert!(debug.contains("dtype=i32"));
    assert!(debug.contains("shape=[1, 1]"));

    Ok(())
}
