use crate::Matrix;
use matchain_core::error::{Error, Result};
use std::time::Instant;

impl Matrix {
    /// Matrix product `self x rhs`.
    ///
    /// Operands must share a dtype and satisfy `self.cols() == rhs.rows()`;
    /// the result is `self.rows() x rhs.cols()` in the operands' dtype.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.dtype() != rhs.dtype() {
            return Err(Error::DTypeMismatch {
                expected: self.dtype(),
                got: rhs.dtype(),
            });
        }
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let (m, k, n) = (self.rows(), self.cols(), rhs.cols());
        let mut result = Self::empty_with_dtype(m, n, self.dtype())?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::matmul::matmul(out_buf, self.buffer(), rhs.buffer(), m, k, n)?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Left-associative product of a whole chain.
    ///
    /// The chain is validated up front: at least two operands, one shared
    /// dtype, and `cols(M[i]) == rows(M[i+1])` for every adjacent pair. No
    /// multiplication runs until validation has passed, so a failing chain
    /// never produces a partial result.
    ///
    /// The wall-clock duration of the whole fold is logged at info level as
    /// `Time taken: <n> nanoseconds`. The measurement is diagnostic only and
    /// does not affect the returned matrix.
    pub fn matmul_chain(matrices: &[Matrix]) -> Result<Matrix> {
        if matrices.len() < 2 {
            return Err(Error::InsufficientOperands { got: matrices.len() });
        }

        for pair in matrices.windows(2) {
            if pair[0].dtype() != pair[1].dtype() {
                return Err(Error::DTypeMismatch {
                    expected: pair[0].dtype(),
                    got: pair[1].dtype(),
                });
            }
            if pair[0].cols() != pair[1].rows() {
                return Err(Error::DimensionMismatch {
                    lhs: pair[0].shape(),
                    rhs: pair[1].shape(),
                });
            }
        }

        let start = Instant::now();

        let mut result = matrices[0].clone();
        for rhs in &matrices[1..] {
            result = result.matmul(rhs)?;
        }

        log::info!("Time taken: {} nanoseconds", start.elapsed().as_nanos());

        Ok(result)
    }
}
