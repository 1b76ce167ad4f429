use crate::{layer::Layer, layers::activation::Tanh, layers::linear::Linear};
use matchain_core::{
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
};
use matchain_matrix::Matrix;

/// A stack of fully-connected layers with tanh after each one.
#[derive(Clone)]
pub struct Mlp {
    layers: Vec<Linear>,
    activation: Tanh,
}

impl Mlp {
    /// `dims` lists the feature width of every stage, input first: a
    /// `[3, 8, 2]` network has two linear layers, `3 -> 8` and `8 -> 2`.
    pub fn new(dims: &[usize], with_bias: bool) -> Result<Self> {
        Self::new_with_dtype(dims, with_bias, get_default_dtype())
    }

    pub fn new_with_dtype(dims: &[usize], with_bias: bool, dtype: DType) -> Result<Self> {
        if dims.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "an MLP needs at least an input and an output width, got {} dims",
                dims.len()
            )));
        }

        let mut layers = Vec::with_capacity(dims.len() - 1);
        for pair in dims.windows(2) {
            layers.push(Linear::new_with_dtype(pair[0], pair[1], with_bias, dtype)?);
        }

        Ok(Self {
            layers,
            activation: Tanh::new(),
        })
    }

    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let mut output = input.clone();
        for layer in &self.layers {
            output = layer.forward(&output)?;
            output = self.activation.forward(&output)?;
        }

        Ok(output)
    }

    pub fn parameters(&mut self) -> Vec<&mut Matrix> {
        self.layers.iter_mut().flat_map(|layer| layer.parameters()).collect()
    }

    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }
}

impl Layer for Mlp {
    fn forward(&self, input: &Matrix) -> Result<Matrix> {
        self.forward(input)
    }

    fn parameters(&mut self) -> Vec<&mut Matrix> {
        self.parameters()
    }
}
