use criterion::{black_box, criterion_group, Criterion};
use ndgrad_autograd::{functional, Graph};
use ndgrad_core::{config::TensorConfig, dtype::DType};
use ndgrad_tensor::Tensor;
use rand::{rngs::StdRng, SeedableRng};

const BATCHES: [usize; 3] = [8, 64, 256];

fn mlp_backward(criterion: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut group = criterion.benchmark_group("autograd/mlp");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(30);

    let config = TensorConfig::from(DType::F32);
    let mut rng = StdRng::seed_from_u64(0);
    let w1 = Tensor::randn(&[32, 64], 0.0, 0.2, config, &mut rng).unwrap();
    let b1 = Tensor::zeros(&[64], config);
    let w2 = Tensor::randn(&[64, 10], 0.0, 0.2, config, &mut rng).unwrap();

    for batch in BATCHES {
        let x = Tensor::randn(&[batch, 32], 0.0, 1.0, config, &mut rng).unwrap();
        let targets: Vec<usize> = (0..batch).map(|i| i % 10).collect();

        group.bench_function(format!("forward_backward/{}", batch), |b| {
            b.iter(|| {
                let mut graph = Graph::new();
                let x = graph.constant(x.clone());
                let w1 = graph.leaf(w1.clone(), true);
                let b1 = graph.leaf(b1.clone(), true);
                let w2 = graph.leaf(w2.clone(), true);
                let h = functional::linear(&mut graph, x, w1, Some(b1)).unwrap();
                let h = functional::relu(&mut graph, h).unwrap();
                let logits = graph.matmul(h, w2).unwrap();
                let loss = graph.cross_entropy_loss(logits, &targets).unwrap();
                graph.backward(loss, None).unwrap();
                black_box(graph.grad(w1).unwrap().cloned())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, mlp_backward);
