use crate::Matrix;
use half::{bf16, f16};
use matchain_core::{
    dtype::DType,
    error::{Error, Result},
};
use std::any::TypeId;

fn get_dtype_for_type<T: 'static>() -> Option<DType> {
    let type_id = TypeId::of::<T>();

    if type_id == TypeId::of::<bf16>() {
        Some(DType::BF16)
    } else if type_id == TypeId::of::<f16>() {
        Some(DType::F16)
    } else if type_id == TypeId::of::<f32>() {
        Some(DType::F32)
    } else if type_id == TypeId::of::<f64>() {
        Some(DType::F64)
    } else if type_id == TypeId::of::<i32>() {
        Some(DType::I32)
    } else if type_id == TypeId::of::<i64>() {
        Some(DType::I64)
    } else {
        None
    }
}

impl Matrix {
    /// Row-major flat copy of the data, converting to `T`'s dtype when needed.
    pub fn to_flatten_vec<T: Default + Clone + 'static>(&self) -> Result<Vec<T>> {
        let target_dtype =
            get_dtype_for_type::<T>().ok_or_else(|| Error::InvalidArgument("Unsupported element type".into()))?;

        let matrix = if self.dtype() != target_dtype {
            self.to_dtype(target_dtype)?
        } else {
            self.clone()
        };

        let size = matrix.size();
        let mut result = vec![T::default(); size];

        unsafe {
            matrix.buffer().copy_to_host(
                result.as_mut_ptr() as *mut std::ffi::c_void,
                size * target_dtype.size_in_bytes(),
            )?;
        }

        Ok(result)
    }

    /// Nested row-major copy of the data.
    pub fn to_vec2<T: Default + Clone + 'static>(&self) -> Result<Vec<Vec<T>>> {
        let flat = self.to_flatten_vec::<T>()?;
        let cols = self.cols();

        if cols == 0 {
            return Ok(vec![Vec::new(); self.rows()]);
        }

        Ok(flat.chunks(cols).map(|chunk| chunk.to_vec()).collect())
    }
}
