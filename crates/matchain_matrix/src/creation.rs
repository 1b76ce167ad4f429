use crate::{adapter::MatrixAdapter, Matrix, MatrixData, MatrixMetadata};
use matchain_core::{
    buffer::{cpu::CpuBuffer, Buffer},
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
    scalar::Scalar,
};
use rand::distributions::Distribution;
use std::sync::Arc;

impl Matrix {
    /// Builds a matrix from nested rows, keeping the source element type.
    pub fn new<T>(data: T) -> Result<Self>
    where
        T: MatrixAdapter,
    {
        let dtype = data.dtype();
        Self::new_with_dtype(data, dtype)
    }

    pub fn new_with_dtype<T>(data: T, dtype: DType) -> Result<Self>
    where
        T: MatrixAdapter,
    {
        let (rows, cols) = data.to_dims()?;
        let src_dtype = data.dtype();
        let src_data = data.to_flat_vec()?;
        let size = rows * cols;

        if src_dtype == dtype {
            let mut result = Self::empty_with_dtype(rows, cols, dtype)?;
            unsafe {
                result.with_buffer_mut(|buffer| {
                    buffer.copy_from_host(src_data.as_ptr() as *const std::ffi::c_void, size * dtype.size_in_bytes())
                })?;
            }
            Ok(result)
        } else {
            let src_elem = src_dtype.size_in_bytes();
            let dst_elem = dtype.size_in_bytes();
            let mut converted = vec![0u8; size * dst_elem];

            for i in 0..size {
                unsafe {
                    let scalar = src_dtype.read_scalar((src_data.as_ptr() as *const u8).add(i * src_elem));
                    dtype.write_scalar(converted.as_mut_ptr().add(i * dst_elem), scalar);
                }
            }

            Self::from_bytes(rows, cols, dtype, converted)
        }
    }

    /// Builds a matrix from a row-major flat slice with explicit dimensions.
    pub fn from_flat_vec<T>(data: &[T], rows: usize, cols: usize) -> Result<Self>
    where
        T: Copy + Into<Scalar>,
    {
        if data.len() != rows * cols {
            return Err(Error::InvalidArgument(format!(
                "flat data of length {} does not fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }

        let dtype = match data.first() {
            Some(&value) => {
                let scalar: Scalar = value.into();
                scalar.dtype()
            }
            None => get_default_dtype(),
        };
        let elem_size = dtype.size_in_bytes();
        let mut bytes = vec![0u8; data.len() * elem_size];

        for (i, &value) in data.iter().enumerate() {
            unsafe {
                dtype.write_scalar(bytes.as_mut_ptr().add(i * elem_size), value.into());
            }
        }

        Self::from_bytes(rows, cols, dtype, bytes)
    }

    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        Self::empty_with_dtype(rows, cols, get_default_dtype())
    }

    pub fn empty_like(src: &Matrix) -> Result<Self> {
        Self::empty_with_dtype(src.rows(), src.cols(), src.dtype())
    }

    pub fn empty_with_dtype(rows: usize, cols: usize, dtype: DType) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::InvalidArgument("Overflow in matrix dimensions".into()))?;
        let buffer: Arc<dyn Buffer> = Arc::new(CpuBuffer::new(size, dtype)?);

        Ok(Self {
            data: MatrixData { buffer },
            metadata: MatrixMetadata { dtype, rows, cols },
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::zeros_with_dtype(rows, cols, get_default_dtype())
    }

    pub fn zeros_like(src: &Matrix) -> Result<Self> {
        Self::zeros_with_dtype(src.rows(), src.cols(), src.dtype())
    }

    pub fn zeros_with_dtype(rows: usize, cols: usize, dtype: DType) -> Result<Self> {
        // CpuBuffer allocations are zero-filled.
        Self::empty_with_dtype(rows, cols, dtype)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::ones_with_dtype(rows, cols, get_default_dtype())
    }

    pub fn ones_like(src: &Matrix) -> Result<Self> {
        Self::ones_with_dtype(src.rows(), src.cols(), src.dtype())
    }

    pub fn ones_with_dtype(rows: usize, cols: usize, dtype: DType) -> Result<Self> {
        Self::fill_with_dtype(rows, cols, dtype, Scalar::F64(1.0))
    }

    pub fn fill(rows: usize, cols: usize, value: impl Into<Scalar>) -> Result<Self> {
        let value = value.into();
        Self::fill_with_dtype(rows, cols, value.dtype(), value)
    }

    pub fn fill_with_dtype(rows: usize, cols: usize, dtype: DType, value: impl Into<Scalar>) -> Result<Self> {
        let value = value.into();
        let elem_size = dtype.size_in_bytes();
        let size = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::InvalidArgument("Overflow in matrix dimensions".into()))?;
        let mut bytes = vec![0u8; size * elem_size];

        for i in 0..size {
            unsafe {
                dtype.write_scalar(bytes.as_mut_ptr().add(i * elem_size), value);
            }
        }

        Self::from_bytes(rows, cols, dtype, bytes)
    }

    /// The `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self> {
        Self::eye_with_dtype(n, get_default_dtype())
    }

    pub fn eye_with_dtype(n: usize, dtype: DType) -> Result<Self> {
        let elem_size = dtype.size_in_bytes();
        let mut bytes = vec![0u8; n * n * elem_size];

        for i in 0..n {
            unsafe {
                dtype.write_scalar(bytes.as_mut_ptr().add((i * n + i) * elem_size), Scalar::F64(1.0));
            }
        }

        Self::from_bytes(n, n, dtype, bytes)
    }

    /// Standard-normal samples, drawn as `f32` and converted to `dtype`.
    pub fn randn(rows: usize, cols: usize) -> Result<Self> {
        Self::randn_with_dtype(rows, cols, get_default_dtype())
    }

    pub fn randn_like(src: &Matrix) -> Result<Self> {
        Self::randn_with_dtype(src.rows(), src.cols(), src.dtype())
    }

    pub fn randn_with_dtype(rows: usize, cols: usize, dtype: DType) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::InvalidArgument("Overflow in matrix dimensions".into()))?;
        let mut rng = rand::thread_rng();
        let normal = rand_distr::Normal::new(0.0f32, 1.0).map_err(|_e| Error::External {
            message: "Failed to create normal distribution with mean=0.0 and std=1.0".to_string(),
        })?;

        let elem_size = dtype.size_in_bytes();
        let mut bytes = vec![0u8; size * elem_size];

        for i in 0..size {
            unsafe {
                dtype.write_scalar(bytes.as_mut_ptr().add(i * elem_size), Scalar::F32(normal.sample(&mut rng)));
            }
        }

        Self::from_bytes(rows, cols, dtype, bytes)
    }

    pub(crate) fn from_bytes(rows: usize, cols: usize, dtype: DType, bytes: Vec<u8>) -> Result<Self> {
        let mut result = Self::empty_with_dtype(rows, cols, dtype)?;

        unsafe {
            result.with_buffer_mut(|buffer| buffer.copy_from_host(bytes.as_ptr() as *const std::ffi::c_void, bytes.len()))?;
        }

        Ok(result)
    }
}
