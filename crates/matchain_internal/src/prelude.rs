pub use crate::core::{
    dtype::*,
    scalar::Scalar,
};
pub use crate::matrix::Matrix;
#[cfg(feature = "nn")]
pub use crate::nn::{Layer, Linear, Mlp, Tanh};
