use crate::layer::Layer;
use matchain_core::{
    dtype::{get_default_dtype, DType},
    error::Result,
};
use matchain_matrix::Matrix;

/// Fully-connected layer. The weight is stored `out_features x in_features`
/// and transposed in the forward pass; the bias is a single row stacked
/// against every input row.
#[derive(Clone)]
pub struct Linear {
    weight: Matrix,
    bias: Option<Matrix>,
}

impl Linear {
    pub fn new(in_features: usize, out_features: usize, with_bias: bool) -> Result<Self> {
        Self::new_with_dtype(in_features, out_features, with_bias, get_default_dtype())
    }

    pub fn new_with_dtype(in_features: usize, out_features: usize, with_bias: bool, dtype: DType) -> Result<Self> {
        let k: f32 = 1.0 / (in_features as f32).sqrt();

        // weight
        let w = Matrix::randn_with_dtype(out_features, in_features, dtype)?.mul_scalar(k)?;

        // bias
        let b = if with_bias {
            let b = Matrix::randn_with_dtype(1, out_features, dtype)?.mul_scalar(k)?;

            Some(b)
        } else {
            None
        };

        Ok(Self { weight: w, bias: b })
    }

    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let output = input.matmul(&self.weight.transpose()?)?;

        if let Some(ref bias) = self.bias {
            let bias = bias.repeat_rows(output.rows())?;
            Ok(output.add(&bias)?)
        } else {
            Ok(output)
        }
    }

    pub fn parameters(&mut self) -> Vec<&mut Matrix> {
        let mut params = vec![];
        params.push(&mut self.weight);
        if let Some(ref mut b) = self.bias {
            params.push(b);
        }
        params
    }

    pub fn weight(&self) -> &Matrix {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Matrix> {
        self.bias.as_ref()
    }
}

impl Layer for Linear {
    fn forward(&self, input: &Matrix) -> Result<Matrix> {
        self.forward(input)
    }

    fn parameters(&mut self) -> Vec<&mut Matrix> {
        self.parameters()
    }
}
