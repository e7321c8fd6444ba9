use benches::{create_dims, dims_label, SIZES};
use criterion::{black_box, Criterion};
use ndgrad_core::{config::TensorConfig, dtype::DType, error::Result};
use ndgrad_tensor::Tensor;

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduction/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    let operations: Vec<(&str, Box<dyn Fn(&Tensor) -> Result<Tensor>>)> = vec![
        ("sum_all", Box::new(|x| x.sum_all())),
        ("sum_dim_0", Box::new(|x| x.sum(0, false))),
        ("sum_dim_last", Box::new(|x| x.sum(-1, true))),
        ("mean_all", Box::new(|x| x.mean_all())),
        ("max_dim_last", Box::new(|x| x.max(-1, false))),
        ("softmax_last", Box::new(|x| x.softmax(-1))),
        ("sum_to_row", Box::new(|x| x.sum_to_shape(&x.shape()[x.ndim() - 1..]))),
    ];

    let config = TensorConfig::from(DType::F32);
    for (op_name, op_fn) in &operations {
        for &(size, size_name) in &SIZES {
            let dims = create_dims(size);
            let x = Tensor::arange(0.0, dims.iter().product::<usize>() as f64, 1.0, config)
                .and_then(|t| t.reshape(&dims))
                .unwrap();

            group.bench_function(format!("{}/{}/{}", op_name, size_name, dims_label(&dims)), |b| {
                b.iter(|| black_box(op_fn(&x)).unwrap())
            });
        }
    }

    group.finish();
}
