mod utils;

use matchain_core::{
    dtype::DType,
    error::{Error, Result},
};
use matchain_matrix::{adapter::MatrixAdapter, Matrix};

// Helper functions
pub fn setup_matrix<T>(data: Vec<Vec<T>>, dtype: DType) -> Result<Matrix>
where
    Vec<Vec<T>>: MatrixAdapter,
{
    let mut matrix = Matrix::new(data)?;
    matrix.with_dtype(dtype)?;
    Ok(matrix)
}

// Core test functions
mod test_functions {
    use super::*;

    pub fn matmul_test(dtype: DType) -> Result<()> {
        let a = setup_matrix(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]], dtype)?;
        let b = setup_matrix(vec![vec![5.0f32, 6.0], vec![7.0, 8.0]], dtype)?;

        let c = a.matmul(&b)?;

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_flatten_vec::<f32>()?, vec![19.0, 22.0, 43.0, 50.0]);

        Ok(())
    }

    pub fn matmul_rectangular_test(dtype: DType) -> Result<()> {
        let a = setup_matrix(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?;
        let b = setup_matrix(vec![vec![1.0f32, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], dtype)?;

        let c = a.matmul(&b)?;

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_flatten_vec::<f32>()?, vec![22.0, 28.0, 49.0, 64.0]);

        Ok(())
    }

    pub fn identity_test(dtype: DType) -> Result<()> {
        let m = setup_matrix(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?;

        let right = m.matmul(&Matrix::eye_with_dtype(3, dtype)?)?;
        assert_eq!(right.to_flatten_vec::<f32>()?, m.to_flatten_vec::<f32>()?);

        let left = Matrix::eye_with_dtype(2, dtype)?.matmul(&m)?;
        assert_eq!(left.to_flatten_vec::<f32>()?, m.to_flatten_vec::<f32>()?);

        Ok(())
    }

    // Entries stay small enough that even bf16 holds every intermediate
    // product exactly.
    pub fn associativity_test(dtype: DType) -> Result<()> {
        let a = setup_matrix(vec![vec![1.0f32, 2.0], vec![3.0, 0.0]], dtype)?;
        let b = setup_matrix(vec![vec![2.0f32, 1.0, 0.0], vec![0.0, 3.0, 1.0]], dtype)?;
        let c = setup_matrix(vec![vec![1.0f32, 1.0], vec![2.0, 0.0], vec![0.0, 3.0]], dtype)?;

        let left = a.matmul(&b)?.matmul(&c)?;
        let right = a.matmul(&b.matmul(&c)?)?;

        assert_eq!(left.shape(), right.shape());
        assert_eq!(left.to_flatten_vec::<f64>()?, right.to_flatten_vec::<f64>()?);

        Ok(())
    }

    pub fn matmul_chain_test(dtype: DType) -> Result<()> {
        let a = setup_matrix(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]], dtype)?;
        let b = a.clone();
        let c = a.clone();

        let result = Matrix::matmul_chain(&[a, b, c])?;

        assert_eq!(result.shape(), (3, 3));
        assert_eq!(
            result.to_flatten_vec::<f64>()?,
            vec![468.0, 576.0, 684.0, 1062.0, 1305.0, 1548.0, 1656.0, 2034.0, 2412.0]
        );

        Ok(())
    }

    pub fn chain_matches_pairwise_fold_test(dtype: DType) -> Result<()> {
        let a = setup_matrix(vec![vec![1.0f32, 0.0, 2.0], vec![3.0, 1.0, 0.0]], dtype)?;
        let b = setup_matrix(
            vec![vec![1.0f32, 2.0, 0.0, 1.0], vec![0.0, 1.0, 3.0, 0.0], vec![2.0, 0.0, 1.0, 2.0]],
            dtype,
        )?;
        let c = setup_matrix(
            vec![vec![1.0f32, 1.0], vec![0.0, 2.0], vec![3.0, 0.0], vec![1.0, 1.0]],
            dtype,
        )?;

        let chained = Matrix::matmul_chain(&[a.clone(), b.clone(), c.clone()])?;
        let folded = a.matmul(&b)?.matmul(&c)?;

        assert_eq!(chained.shape(), folded.shape());
        assert_eq!(chained.to_flatten_vec::<f64>()?, folded.to_flatten_vec::<f64>()?);

        Ok(())
    }
}

test_ops!([matmul, matmul_rectangular, identity, associativity]);

test_ops_with_dtype!([
    matmul_chain: [F32, F64, I32, I64],
    chain_matches_pairwise_fold: [F32, F64, I32, I64],
]);

#[test]
fn chain_of_four() -> Result<()> {
    let a = Matrix::new(vec![vec![1i32, 1], vec![0, 1]])?;

    let result = Matrix::matmul_chain(&[a.clone(), a.clone(), a.clone(), a.clone()])?;

    // The upper-right entry counts the chain length.
    assert_eq!(result.to_flatten_vec::<i32>()?, vec![1, 4, 0, 1]);

    Ok(())
}

#[test]
fn empty_chain_is_rejected() {
    let result = Matrix::matmul_chain(&[]);

    assert!(matches!(result, Err(Error::InsufficientOperands { got: 0 })));
}

#[test]
fn singleton_chain_is_rejected() -> Result<()> {
    let a = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;

    let result = Matrix::matmul_chain(&[a]);
    assert!(matches!(result, Err(Error::InsufficientOperands { got: 1 })));

    Ok(())
}

#[test]
fn incompatible_pair_is_rejected() -> Result<()> {
    let a = Matrix::new(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let b = Matrix::new(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;

    let result = a.matmul(&b);
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            lhs: (2, 3),
            rhs: (2, 3)
        })
    ));

    Ok(())
}

#[test]
fn incompatible_chain_fails_before_multiplying() -> Result<()> {
    let a = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;
    // 3x2 after the 2x2 product is fine; the 2x3 that follows is not
    // compatible with the trailing 2x2.
    let c = Matrix::new(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let d = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;

    let result = Matrix::matmul_chain(&[a, b, c, d]);
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            lhs: (2, 3),
            rhs: (2, 2)
        })
    ));

    Ok(())
}

#[test]
fn mixed_dtypes_are_rejected() -> Result<()> {
    let a = Matrix::new(vec![vec![1i32, 2], vec![3, 4]])?;
    let b = Matrix::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;

    assert!(matches!(
        a.matmul(&b),
        Err(Error::DTypeMismatch {
            expected: DType::I32,
            got: DType::F32
        })
    ));
    assert!(matches!(
        Matrix::matmul_chain(&[a, b]),
        Err(Error::DTypeMismatch {
            expected: DType::I32,
            got: DType::F32
        })
    ));

    Ok(())
}

#[test]
fn chain_does_not_mutate_inputs() -> Result<()> {
    let a = Matrix::new(vec![vec![1i64, 2], vec![3, 4]])?;
    let b = Matrix::new(vec![vec![5i64, 6], vec![7, 8]])?;

    Matrix::matmul_chain(&[a.clone(), b.clone()])?;

    assert_eq!(a.to_flatten_vec::<i64>()?, vec![1, 2, 3, 4]);
    assert_eq!(b.to_flatten_vec::<i64>()?, vec![5, 6, 7, 8]);

    Ok(())
}

#[test]
fn zero_extent_matmul() -> Result<()> {
    let a = Matrix::zeros_with_dtype(2, 0, DType::F32)?;
    let b = Matrix::zeros_with_dtype(0, 3, DType::F32)?;

    let c = a.matmul(&b)?;

    assert_eq!(c.shape(), (2, 3));
    assert_eq!(c.to_flatten_vec::<f32>()?, vec![0.0; 6]);

    Ok(())
}
