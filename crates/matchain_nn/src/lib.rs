pub mod layer;
pub mod layers;

pub use crate::{
    layer::Layer,
    layers::{activation::Tanh, linear::Linear, mlp::Mlp},
};
