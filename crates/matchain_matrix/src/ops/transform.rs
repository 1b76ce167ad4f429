use crate::Matrix;
use matchain_core::error::{Error, Result};

impl Matrix {
    /// Materialized `cols x rows` transpose.
    pub fn transpose(&self) -> Result<Matrix> {
        let (rows, cols) = self.shape();
        let mut result = Self::empty_with_dtype(cols, rows, self.dtype())?;

        unsafe {
            result.with_buffer_mut(|out_buf| {
                matchain_core::be::ops::transform::transpose(out_buf, self.buffer(), rows, cols)?;

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Stacks `times` copies of a single-row matrix into a `times x cols`
    /// matrix. Used to apply a row vector against every row of another
    /// matrix without general broadcasting.
    pub fn repeat_rows(&self, times: usize) -> Result<Matrix> {
        if self.rows() != 1 {
            return Err(Error::InvalidArgument(format!(
                "repeat_rows expects a single-row matrix, got {} rows",
                self.rows()
            )));
        }

        let cols = self.cols();
        let row_bytes = cols * self.dtype().size_in_bytes();
        if row_bytes == 0 {
            return Self::empty_with_dtype(times, cols, self.dtype());
        }

        let mut src = vec![0u8; row_bytes];
        unsafe {
            self.buffer().copy_to_host(src.as_mut_ptr() as *mut std::ffi::c_void, row_bytes)?;
        }

        let mut bytes = vec![0u8; times * row_bytes];
        for chunk in bytes.chunks_exact_mut(row_bytes) {
            chunk.copy_from_slice(&src);
        }

        Self::from_bytes(times, cols, self.dtype(), bytes)
    }
}
