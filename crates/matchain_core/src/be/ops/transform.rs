use crate::{
    buffer::Buffer,
    dtype::DType,
    error::Result,
};
use half::{bf16, f16};
use matchain_cpu::ops::transform::*;

macro_rules! declare_transpose_op {
    ([$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            pub unsafe fn transpose(
                output: &mut dyn Buffer,
                input: &dyn Buffer,
                rows: usize,
                cols: usize,
            ) -> Result<()> {
                match input.dtype() {
                    $(
                        DType::$dtype => {
                            [<transpose_ $dtype:lower>](
                                rows,
                                cols,
                                input.as_ptr() as *const [<$dtype:lower>],
                                output.as_mut_ptr() as *mut [<$dtype:lower>],
                            );
                        }
                    )*
                }

                Ok(())
            }
        }
    };
}

declare_transpose_op!([BF16, F16, F32, F64, I32, I64]);
