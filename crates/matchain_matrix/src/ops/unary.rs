use crate::Matrix;
use matchain_core::{error::Result, scalar::Scalar};

impl Matrix {
    pub fn neg(&self) -> Result<Matrix> {
        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::unary::neg(out_buf, self.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Hyperbolic tangent, element-wise. Integer dtypes truncate toward zero,
    /// so every entry of an integer result is 0.
    pub fn tanh(&self) -> Result<Matrix> {
        let mut result = Self::empty_like(self)?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::unary::tanh(out_buf, self.buffer(), self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Adds `scalar` to every element. The scalar is converted to the
    /// matrix dtype first; the matrix dtype never changes.
    pub fn add_scalar(&self, scalar: impl Into<Scalar>) -> Result<Matrix> {
        let mut result = Self::empty_like(self)?;
        let scalar = scalar.into();

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::unary::add_scalar(out_buf, self.buffer(), scalar, self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    pub fn mul_scalar(&self, scalar: impl Into<Scalar>) -> Result<Matrix> {
        let mut result = Self::empty_like(self)?;
        let scalar = scalar.into();

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::unary::mul_scalar(out_buf, self.buffer(), scalar, self.size())?;

                Ok(())
            })?;
        }

        Ok(result)
    }
}
