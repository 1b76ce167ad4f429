use crate::layer::Layer;
use matchain_core::error::Result;
use matchain_matrix::Matrix;

#[derive(Clone, Default)]
pub struct Tanh;

impl Tanh {
    pub fn new() -> Self {
        Self
    }

    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        input.tanh()
    }

    pub fn parameters(&mut self) -> Vec<&mut Matrix> {
        vec![]
    }
}

impl Layer for Tanh {
    fn forward(&self, input: &Matrix) -> Result<Matrix> {
        self.forward(input)
    }

    fn parameters(&mut self) -> Vec<&mut Matrix> {
        self.parameters()
    }
}
