use crate::{
    buffer::Buffer,
    dtype::DType,
    error::{Error, Result},
};
use half::{bf16, f16};
use matchain_cpu::ops::binary::*;

macro_rules! declare_binary_op {
    ($op:ident, [$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            pub unsafe fn $op(
                output: &mut dyn Buffer,
                lhs: &dyn Buffer,
                rhs: &dyn Buffer,
                num_els: usize,
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
                            [<$op _ $dtype:lower>](
                                num_els,
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

macro_rules! declare_binary_ops {
    ([$($op:ident),* $(,)?] => $dtypes:tt) => {
        $(
            declare_binary_op!($op, $dtypes);
        )*
    };
}

declare_binary_ops!([add, sub, mul, div] => [BF16, F16, F32, F64, I32, I64]);
