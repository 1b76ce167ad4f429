use crate::{
    buffer::Buffer,
    dtype::DType,
    error::{Error, Result},
};
use half::{bf16, f16};
use matchain_cpu::ops::matmul::*;

macro_rules! declare_matmul_op {
    ([$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            pub unsafe fn matmul(
                output: &mut dyn Buffer,
                lhs: &dyn Buffer,
                rhs: &dyn Buffer,
                m: usize,
                k: usize,
                n: usize,
            ) -> Result<()> {
                if lhs.dtype() != rhs.dtype() {
                    return Err(Error::DTypeMismatch {
                        expected: lhs.dtype(),
                        got: rhs.dtype(),
                    });
                }

                match lhs.dtype() {
                    $(
                        DType::$dtype => {
                            [<matmul_ $dtype:lower>](
                                m,
                                k,
                                n,
                                lhs.as_ptr() as *const [<$dtype:lower>],
                                rhs.as_ptr() as *const [<$dtype:lower>],
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

declare_matmul_op!([BF16, F16, F32, F64, I32, I64]);
