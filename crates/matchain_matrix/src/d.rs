use crate::Matrix;
use half::{bf16, f16};
use matchain_core::dtype::DType;
use std::fmt;

macro_rules! impl_display_for_type {
    ($fn_name:ident, $type:ty, $format:expr) => {
        fn $fn_name(f: &mut fmt::Formatter<'_>, data: &[$type], rows: usize, cols: usize) -> fmt::Result {
            write!(f, "[")?;
            for row in 0..rows {
                if row > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[")?;
                for col in 0..cols {
                    if col > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, $format, data[row * cols + col])?;
                }
                write!(f, "]")?;
            }
            write!(f, "]")
        }
    };
}

impl_display_for_type!(display_bf16, bf16, "{:.4}");
impl_display_for_type!(display_f16, f16, "{:.4}");
impl_display_for_type!(display_f32, f32, "{:.4}");
impl_display_for_type!(display_f64, f64, "{:.4}");
impl_display_for_type!(display_i32, i32, "{}");
impl_display_for_type!(display_i64, i64, "{}");

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.shape();

        match self.dtype() {
            DType::BF16 => display_bf16(f, &self.to_flatten_vec::<bf16>().map_err(|_| fmt::Error)?, rows, cols),
            DType::F16 => display_f16(f, &self.to_flatten_vec::<f16>().map_err(|_| fmt::Error)?, rows, cols),
            DType::F32 => display_f32(f, &self.to_flatten_vec::<f32>().map_err(|_| fmt::Error)?, rows, cols),
            DType::F64 => display_f64(f, &self.to_flatten_vec::<f64>().map_err(|_| fmt::Error)?, rows, cols),
            DType::I32 => display_i32(f, &self.to_flatten_vec::<i32>().map_err(|_| fmt::Error)?, rows, cols),
            DType::I64 => display_i64(f, &self.to_flatten_vec::<i64>().map_err(|_| fmt::Error)?, rows, cols),
        }
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix(dtype={}, shape=[{}, {}], data=",
            self.dtype().as_str(),
            self.rows(),
            self.cols()
        )?;
        fmt::Display::fmt(self, f)?;
        write!(f, ")")
    }
}
