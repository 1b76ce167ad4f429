use crate::{
    buffer::Buffer,
    dtype::DType,
    error::Result,
    scalar::Scalar,
};
use half::{bf16, f16};
use matchain_cpu::ops::unary::*;

macro_rules! declare_unary_op {
    ($op:ident, [$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            pub unsafe fn $op(output: &mut dyn Buffer, input: &dyn Buffer, num_els: usize) -> Result<()> {
                match input.dtype() {
                    $(
                        DType::$dtype => {
                            [<$op _ $dtype:lower>](
                                num_els,
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

macro_rules! declare_unary_ops {
    ([$($op:ident),* $(,)?] => $dtypes:tt) => {
        $(
            declare_unary_op!($op, $dtypes);
        )*
    };
}

macro_rules! declare_unary_op_with_constant {
    ($op:ident, [$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            /// The constant is converted to the input's dtype before dispatch.
            pub unsafe fn $op(
                output: &mut dyn Buffer,
                input: &dyn Buffer,
                constant: Scalar,
                num_els: usize,
            ) -> Result<()> {
                match input.dtype() {
                    $(
                        DType::$dtype => {
                            [<$op _ $dtype:lower>](
                                num_els,
                                constant.[<as_ $dtype:lower>](),
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

macro_rules! declare_unary_ops_with_constant {
    ([$($op:ident),* $(,)?] => $dtypes:tt) => {
        $(
            declare_unary_op_with_constant!($op, $dtypes);
        )*
    };
}

declare_unary_ops!([neg, tanh] => [BF16, F16, F32, F64, I32, I64]);
declare_unary_ops_with_constant!([add_scalar, mul_scalar] => [BF16, F16, F32, F64, I32, I64]);
