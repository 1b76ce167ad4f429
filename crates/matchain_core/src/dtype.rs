#![allow(non_upper_case_globals)]

use crate::scalar::Scalar;
use half::{bf16, f16};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const bfloat16: DType = DType::BF16;
pub const float16: DType = DType::F16;
pub const half: DType = DType::F16;
pub const float32: DType = DType::F32;
pub const float64: DType = DType::F64;
pub const int32: DType = DType::I32;
pub const int64: DType = DType::I64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DType {
    BF16,
    F16,
    F32,
    F64,
    I32,
    I64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BF16 => "bf16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::BF16 => 2,
            Self::F16 => 2,
            Self::F32 => 4,
            Self::F64 => 8,
            Self::I32 => 4,
            Self::I64 => 8,
        }
    }

    pub fn is_int(&self) -> bool {
        match self {
            Self::BF16 | Self::F16 | Self::F32 | Self::F64 => false,
            Self::I32 | Self::I64 => true,
        }
    }

    pub fn is_float(&self) -> bool {
        !self.is_int()
    }

    /// # Safety
    ///
    /// `ptr` must point to at least `size_in_bytes()` readable bytes holding a
    /// value of this dtype.
    pub unsafe fn read_scalar(&self, ptr: *const u8) -> Scalar {
        match self {
            Self::BF16 => Scalar::BF16(ptr.cast::<bf16>().read_unaligned()),
            Self::F16 => Scalar::F16(ptr.cast::<f16>().read_unaligned()),
            Self::F32 => Scalar::F32(ptr.cast::<f32>().read_unaligned()),
            Self::F64 => Scalar::F64(ptr.cast::<f64>().read_unaligned()),
            Self::I32 => Scalar::I32(ptr.cast::<i32>().read_unaligned()),
            Self::I64 => Scalar::I64(ptr.cast::<i64>().read_unaligned()),
        }
    }

    /// # Safety
    ///
    /// `ptr` must point to at least `size_in_bytes()` writable bytes.
    pub unsafe fn write_scalar(&self, ptr: *mut u8, value: Scalar) {
        match self {
            Self::BF16 => ptr.cast::<bf16>().write_unaligned(value.as_bf16()),
            Self::F16 => ptr.cast::<f16>().write_unaligned(value.as_f16()),
            Self::F32 => ptr.cast::<f32>().write_unaligned(value.as_f32()),
            Self::F64 => ptr.cast::<f64>().write_unaligned(value.as_f64()),
            Self::I32 => ptr.cast::<i32>().write_unaligned(value.as_i32()),
            Self::I64 => ptr.cast::<i64>().write_unaligned(value.as_i64()),
        }
    }
}

thread_local! {
    static DEFAULT_DTYPE: std::cell::Cell<DType> = const { std::cell::Cell::new(DType::F32) };
}

pub fn get_default_dtype() -> DType {
    DEFAULT_DTYPE.with(|d| d.get())
}

pub fn set_default_dtype(dtype: DType) {
    DEFAULT_DTYPE.with(|d| d.set(dtype));
}
