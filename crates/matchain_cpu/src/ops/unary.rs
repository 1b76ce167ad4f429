use half::{bf16, f16};
use rayon::prelude::*;

macro_rules! unary_op {
    ($name:ident, $type:ty, $func:expr) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `input` must be a valid pointer to an array of at least `num_els` elements
        /// * `output` must be a valid pointer to an array of at least `num_els` elements
        /// * The memory regions of `input` and `output` must not overlap
        pub unsafe fn $name(num_els: usize, input: *const $type, output: *mut $type) {
            if input.is_null() || output.is_null() {
                return;
            }

            let input = std::slice::from_raw_parts(input, num_els);
            let output = std::slice::from_raw_parts_mut(output, num_els);

            output.par_iter_mut().enumerate().for_each(|(i, out_val)| {
                *out_val = $func(input[i]);
            });
        }
    };
}

macro_rules! unary_op_with_constant {
    ($name:ident, $type:ty, $func:expr) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `input` must be a valid pointer to an array of at least `num_els` elements
        /// * `output` must be a valid pointer to an array of at least `num_els` elements
        /// * `constant` must be a valid value for the given type
        /// * The memory regions of `input` and `output` must not overlap
        pub unsafe fn $name(num_els: usize, constant: $type, input: *const $type, output: *mut $type) {
            if input.is_null() || output.is_null() {
                return;
            }

            let input = std::slice::from_raw_parts(input, num_els);
            let output = std::slice::from_raw_parts_mut(output, num_els);

            output.par_iter_mut().enumerate().for_each(|(i, out_val)| {
                *out_val = $func(input[i], constant);
            });
        }
    };
}

unary_op!(neg_bf16, bf16, |x: bf16| -x);
unary_op!(neg_f16, f16, |x: f16| -x);
unary_op!(neg_f32, f32, |x: f32| -x);
unary_op!(neg_f64, f64, |x: f64| -x);
unary_op!(neg_i32, i32, |x: i32| x.wrapping_neg());
unary_op!(neg_i64, i64, |x: i64| x.wrapping_neg());

// Half types go through f32; integer types through f64, truncating back.
unary_op!(tanh_bf16, bf16, |x: bf16| bf16::from_f32(f32::from(x).tanh()));
unary_op!(tanh_f16, f16, |x: f16| f16::from_f32(f32::from(x).tanh()));
unary_op!(tanh_f32, f32, |x: f32| x.tanh());
unary_op!(tanh_f64, f64, |x: f64| x.tanh());
unary_op!(tanh_i32, i32, |x: i32| (x as f64).tanh() as i32);
unary_op!(tanh_i64, i64, |x: i64| (x as f64).tanh() as i64);

unary_op_with_constant!(add_scalar_bf16, bf16, |x, c| x + c);
unary_op_with_constant!(add_scalar_f16, f16, |x, c| x + c);
unary_op_with_constant!(add_scalar_f32, f32, |x, c| x + c);
unary_op_with_constant!(add_scalar_f64, f64, |x, c| x + c);
unary_op_with_constant!(add_scalar_i32, i32, |x: i32, c: i32| x.saturating_add(c));
unary_op_with_constant!(add_scalar_i64, i64, |x: i64, c: i64| x.saturating_add(c));

unary_op_with_constant!(mul_scalar_bf16, bf16, |x, c| x * c);
unary_op_with_constant!(mul_scalar_f16, f16, |x, c| x * c);
unary_op_with_constant!(mul_scalar_f32, f32, |x, c| x * c);
unary_op_with_constant!(mul_scalar_f64, f64, |x, c| x * c);
unary_op_with_constant!(mul_scalar_i32, i32, |x: i32, c: i32| x.saturating_mul(c));
unary_op_with_constant!(mul_scalar_i64, i64, |x: i64, c: i64| x.saturating_mul(c));
