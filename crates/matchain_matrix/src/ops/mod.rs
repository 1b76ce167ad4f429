mod binary;
mod matmul;
mod transform;
mod unary;
