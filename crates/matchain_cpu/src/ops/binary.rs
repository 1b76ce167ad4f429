use half::{bf16, f16};
use rayon::prelude::*;

macro_rules! binary_op {
    ($name:ident, $op:expr, $type:ty) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `lhs` must be a valid pointer to an array of at least `num_els` elements
        /// * `rhs` must be a valid pointer to an array of at least `num_els` elements
        /// * `out` must be a valid pointer to an array of at least `num_els` elements
        /// * The memory regions of `lhs`, `rhs`, and `out` must not overlap
        pub unsafe fn $name(num_els: usize, lhs: *const $type, rhs: *const $type, out: *mut $type) {
            if lhs.is_null() || rhs.is_null() || out.is_null() {
                return;
            }

            let lhs = std::slice::from_raw_parts(lhs, num_els);
            let rhs = std::slice::from_raw_parts(rhs, num_els);
            let out = std::slice::from_raw_parts_mut(out, num_els);

            out.par_iter_mut().enumerate().for_each(|(i, out_val)| {
                *out_val = $op(lhs[i], rhs[i]);
            });
        }
    };
}

binary_op!(add_bf16, |a, b| a + b, bf16);
binary_op!(add_f16, |a, b| a + b, f16);
binary_op!(add_f32, |a, b| a + b, f32);
binary_op!(add_f64, |a, b| a + b, f64);
binary_op!(add_i32, |a: i32, b: i32| a.saturating_add(b), i32);
binary_op!(add_i64, |a: i64, b: i64| a.saturating_add(b), i64);

binary_op!(sub_bf16, |a, b| a - b, bf16);
binary_op!(sub_f16, |a, b| a - b, f16);
binary_op!(sub_f32, |a, b| a - b, f32);
binary_op!(sub_f64, |a, b| a - b, f64);
binary_op!(sub_i32, |a: i32, b: i32| a.saturating_sub(b), i32);
binary_op!(sub_i64, |a: i64, b: i64| a.saturating_sub(b), i64);

binary_op!(mul_bf16, |a, b| a * b, bf16);
binary_op!(mul_f16, |a, b| a * b, f16);
binary_op!(mul_f32, |a, b| a * b, f32);
binary_op!(mul_f64, |a, b| a * b, f64);
binary_op!(mul_i32, |a: i32, b: i32| a.saturating_mul(b), i32);
binary_op!(mul_i64, |a: i64, b: i64| a.saturating_mul(b), i64);

binary_op!(div_bf16, |a, b| a / b, bf16);
binary_op!(div_f16, |a, b| a / b, f16);
binary_op!(div_f32, |a, b| a / b, f32);
binary_op!(div_f64, |a, b| a / b, f64);
binary_op!(div_i32, |a: i32, b: i32| a.wrapping_div(b), i32);
binary_op!(div_i64, |a: i64, b: i64| a.wrapping_div(b), i64);
