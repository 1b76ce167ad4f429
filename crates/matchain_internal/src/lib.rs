pub mod prelude;

pub use matchain_core as core;
pub use matchain_matrix as matrix;
#[cfg(feature = "nn")]
pub use matchain_nn as nn;

pub use matchain_core::dtype::{bfloat16, float16, float32, float64, half, int32, int64};
