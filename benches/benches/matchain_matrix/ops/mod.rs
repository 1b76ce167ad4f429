mod matmul;

use criterion::criterion_group;

criterion_group!(benches, matmul::basic, matmul::chain);
