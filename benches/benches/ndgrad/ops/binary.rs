use benches::{create_dims, dims_label, SIZES};
use criterion::{black_box, Criterion};
use ndgrad_core::{config::TensorConfig, dtype::DType, error::Result};
use ndgrad_tensor::Tensor;

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    let operations: Vec<(&str, Box<dyn Fn(&Tensor, &Tensor) -> Result<Tensor>>)> = vec![
        ("add", Box::new(|a, b| a.add(b))),
        ("sub", Box::new(|a, b| a.sub(b))),
        ("mul", Box::new(|a, b| a.mul(b))),
        ("div", Box::new(|a, b| a.div(b))),
    ];

    let config = TensorConfig::from(DType::F32);
    for (op_name, op_fn) in &operations {
        for &(size, size_name) in &SIZES {
            let dims = create_dims(size);
            let lhs = Tensor::full(&dims, 1.5, config);
            let rhs = Tensor::full(&dims, 0.5, config);
            // same op against a broadcast row
            let row = Tensor::full(&dims[dims.len() - 1..], 0.5, config);

            group.bench_function(format!("{}/{}/{}", op_name, size_name, dims_label(&dims)), |b| {
                b.iter(|| black_box(op_fn(&lhs, &rhs)).unwrap())
            });
            group.bench_function(format!("{}_broadcast/{}/{}", op_name, size_name, dims_label(&dims)), |b| {
                b.iter(|| black_box(op_fn(&lhs, &row)).unwrap())
            });
        }
    }

    group.finish();
}
