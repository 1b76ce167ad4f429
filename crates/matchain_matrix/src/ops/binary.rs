use crate::Matrix;
use matchain_core::error::{Error, Result};

fn check_same_spec(lhs: &Matrix, rhs: &Matrix) -> Result<()> {
    if lhs.dtype() != rhs.dtype() {
        return Err(Error::DTypeMismatch {
            expected: lhs.dtype(),
            got: rhs.dtype(),
        });
    }
    if lhs.shape() != rhs.shape() {
        return Err(Error::DimensionMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }

    Ok(())
}

impl Matrix {
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        check_same_spec(self, rhs)?;

        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::binary::add(out_buf, self.buffer(), rhs.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        check_same_spec(self, rhs)?;

        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::binary::sub(out_buf, self.buffer(), rhs.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Element-wise (Hadamard) product. The matrix product is [`Matrix::matmul`].
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        check_same_spec(self, rhs)?;

        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::binary::mul(out_buf, self.buffer(), rhs.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    pub fn div(&self, rhs: &Matrix) -> Result<Matrix> {
        check_same_spec(self, rhs)?;

        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::binary::div(out_buf, self.buffer(), rhs.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Element-wise sum of a whole chain of same-shaped matrices.
    ///
    /// Validated up front like [`Matrix::matmul_chain`]: at least two
    /// operands, one shared dtype, equal dimensions throughout.
    pub fn add_chain(matrices: &[Matrix]) -> Result<Matrix> {
        if matrices.len() < 2 {
            return Err(Error::InsufficientOperands { got: matrices.len() });
        }

        for pair in matrices.windows(2) {
            check_same_spec(&pair[0], &pair[1])?;
        }

        let mut result = matrices[0].clone();
        for rhs in &matrices[1..] {
            result = result.add(rhs)?;
        }

        Ok(result)
    }
}
