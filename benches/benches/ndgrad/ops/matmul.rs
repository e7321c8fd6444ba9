use criterion::{black_box, Criterion};
use ndgrad_core::{config::TensorConfig, dtype::DType};
use ndgrad_tensor::Tensor;
use rand::{rngs::StdRng, SeedableRng};

const SIDES: [usize; 3] = [16, 64, 256];

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matmul/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(30);

    let mut rng = StdRng::seed_from_u64(0);
    for dtype in [DType::F32, DType::F64] {
        let config = TensorConfig::from(dtype);
        for side in SIDES {
            let a = Tensor::randn(&[side, side], 0.0, 1.0, config, &mut rng).unwrap();
            let b = Tensor::randn(&[side, side], 0.0, 1.0, config, &mut rng).unwrap();
            group.bench_function(format!("matmul/{}/{}x{}", dtype, side, side), |bench| {
                bench.iter(|| black_box(a.matmul(&b)).unwrap())
            });

            let batched = Tensor::randn(&[8, side, side], 0.0, 1.0, config, &mut rng).unwrap();
            group.bench_function(format!("bmm/{}/8x{}x{}", dtype, side, side), |bench| {
                bench.iter(|| black_box(batched.bmm(&b)).unwrap())
            });
        }
    }

    group.finish();
}
