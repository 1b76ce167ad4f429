use half::{bf16, f16};
use rayon::prelude::*;

macro_rules! transpose_op {
    ($name:ident, $type:ty) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `input` must be a valid pointer to an array of `rows * cols` elements
        /// * `output` must be a valid pointer to an array of `rows * cols` elements
        /// * The memory regions of `input` and `output` must not overlap
        /// * Matrices are row-major and contiguous; `output` receives the
        ///   `cols x rows` transpose
        pub unsafe fn $name(rows: usize, cols: usize, input: *const $type, output: *mut $type) {
            if input.is_null() || output.is_null() {
                return;
            }
            if rows == 0 || cols == 0 {
                return;
            }

            let input = std::slice::from_raw_parts(input, rows * cols);
            let output = std::slice::from_raw_parts_mut(output, rows * cols);

            output.par_chunks_mut(rows).enumerate().for_each(|(col, out_row)| {
                for row in 0..rows {
                    out_row[row] = input[row * cols + col];
                }
            });
        }
    };
}

transpose_op!(transpose_bf16, bf16);
transpose_op!(transpose_f16, f16);
transpose_op!(transpose_f32, f32);
transpose_op!(transpose_f64, f64);
transpose_op!(transpose_i32, i32);
transpose_op!(transpose_i64, i64);
