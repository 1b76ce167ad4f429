use matchain_core::error::Result;
use matchain_matrix::Matrix;

pub trait Layer {
    fn forward(&self, input: &Matrix) -> Result<Matrix>;
    fn parameters(&mut self) -> Vec<&mut Matrix>;
}
