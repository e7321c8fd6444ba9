mod binary;
mod matmul;
mod reduction;

use criterion::criterion_group;

criterion_group!(benches, binary::basic, matmul::basic, reduction::basic);
