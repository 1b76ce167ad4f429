use half::{bf16, f16};
use rayon::prelude::*;

macro_rules! matmul_op {
    ($name:ident, $type:ty, $zero:expr) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `a` must be a valid pointer to an array of `m * k` elements
        /// * `b` must be a valid pointer to an array of `k * n` elements
        /// * `out` must be a valid pointer to an array of `m * n` elements
        /// * The memory regions of `a`, `b`, and `out` must not overlap
        /// * Matrices are row-major and contiguous
        pub unsafe fn $name(m: usize, k: usize, n: usize, a: *const $type, b: *const $type, out: *mut $type) {
            if a.is_null() || b.is_null() || out.is_null() {
                return;
            }
            if m == 0 || n == 0 {
                return;
            }

            let a = std::slice::from_raw_parts(a, m * k);
            let b = std::slice::from_raw_parts(b, k * n);
            let out = std::slice::from_raw_parts_mut(out, m * n);

            out.par_chunks_mut(n).enumerate().for_each(|(row, out_row)| {
                for col in 0..n {
                    let mut acc = $zero;
                    for p in 0..k {
                        acc += a[row * k + p] * b[p * n + col];
                    }
                    out_row[col] = acc;
                }
            });
        }
    };
}

matmul_op!(matmul_bf16, bf16, bf16::ZERO);
matmul_op!(matmul_f16, f16, f16::ZERO);
matmul_op!(matmul_f32, f32, 0.0f32);
matmul_op!(matmul_f64, f64, 0.0f64);
matmul_op!(matmul_i32, i32, 0i32);
matmul_op!(matmul_i64, i64, 0i64);
