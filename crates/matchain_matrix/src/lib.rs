pub mod adapter;
mod creation;
mod d;
mod operators;
pub(crate) mod ops;
#[cfg(feature = "serde")]
mod serde;
mod vec;

use matchain_core::{
    buffer::{cpu::CpuBuffer, Buffer},
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct MatrixData {
    buffer: Arc<dyn Buffer>,
}

#[derive(Clone)]
pub struct MatrixMetadata {
    dtype: DType,
    rows: usize,
    cols: usize,
}

/// A dtype-erased 2-D matrix over a contiguous row-major buffer.
///
/// Cloning is cheap (the buffer is shared); mutation goes through
/// [`Matrix::with_buffer_mut`], which copies when the buffer is shared.
#[derive(Clone)]
pub struct Matrix {
    data: MatrixData,
    metadata: MatrixMetadata,
}

impl Matrix {
    // data

    pub fn buffer(&self) -> &dyn Buffer {
        Arc::as_ref(&self.data.buffer)
    }

    fn buffer_clone(&self) -> Result<Arc<dyn Buffer>> {
        let src_buffer = self.buffer();
        let mut new_buffer = CpuBuffer::new(src_buffer.len(), src_buffer.dtype())?;

        unsafe {
            new_buffer.copy_from(src_buffer)?;
        }

        Ok(Arc::new(new_buffer))
    }

    pub fn with_buffer_mut<F, R>(&mut self, func: F) -> Result<R>
    where
        F: FnOnce(&mut dyn Buffer) -> Result<R>,
    {
        if Arc::strong_count(&self.data.buffer) == 1 {
            let buffer = Arc::get_mut(&mut self.data.buffer).ok_or(Error::BufferShared)?;
            func(buffer)
        } else {
            let mut new_buffer = self.buffer_clone()?;
            let buffer = Arc::get_mut(&mut new_buffer).ok_or(Error::BufferShared)?;
            let result = func(buffer)?;
            self.data.buffer = new_buffer;
            Ok(result)
        }
    }

    // metadata

    pub fn rows(&self) -> usize {
        self.metadata.rows
    }

    pub fn cols(&self) -> usize {
        self.metadata.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.metadata.rows, self.metadata.cols)
    }

    pub fn size(&self) -> usize {
        self.metadata.rows * self.metadata.cols
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn dtype(&self) -> DType {
        self.metadata.dtype
    }

    pub fn is_square(&self) -> bool {
        self.metadata.rows == self.metadata.cols
    }

    // element access

    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                index: (row, col),
                dims: self.shape(),
            });
        }

        let offset = (row * self.cols() + col) * self.dtype().size_in_bytes();
        let scalar = unsafe { self.dtype().read_scalar((self.buffer().as_ptr() as *const u8).add(offset)) };

        Ok(scalar)
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Scalar>) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                index: (row, col),
                dims: self.shape(),
            });
        }

        let dtype = self.dtype();
        let offset = (row * self.cols() + col) * dtype.size_in_bytes();
        let scalar = value.into();

        unsafe {
            self.with_buffer_mut(|buffer| {
                dtype.write_scalar((buffer.as_mut_ptr() as *mut u8).add(offset), scalar);
                Ok(())
            })
        }
    }

    // dtype

    pub fn to_dtype(&self, dtype: DType) -> Result<Self> {
        if self.dtype() == dtype {
            return Ok(self.clone());
        }

        let (rows, cols) = self.shape();
        let src_dtype = self.dtype();
        let src_elem = src_dtype.size_in_bytes();
        let dst_elem = dtype.size_in_bytes();
        let size = self.size();

        let mut raw_data = vec![0u8; size * src_elem];
        unsafe {
            self.buffer()
                .copy_to_host(raw_data.as_mut_ptr() as *mut std::ffi::c_void, raw_data.len())?;
        }

        let mut converted = vec![0u8; size * dst_elem];
        for i in 0..size {
            unsafe {
                let scalar = src_dtype.read_scalar(raw_data.as_ptr().add(i * src_elem));
                dtype.write_scalar(converted.as_mut_ptr().add(i * dst_elem), scalar);
            }
        }

        Self::from_bytes(rows, cols, dtype, converted)
    }

    pub fn with_dtype(&mut self, dtype: DType) -> Result<()> {
        *self = self.to_dtype(dtype)?;
        Ok(())
    }
}
