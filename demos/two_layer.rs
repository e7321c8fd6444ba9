use ndgrad::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const CLASSES: usize = 3;
const PER_CLASS: usize = 20;
const HIDDEN: usize = 16;
const STEPS: usize = 50;
const LEARNING_RATE: f64 = 0.5;

fn main() -> Result<()> {
    env_logger::init();

    let config = TensorConfig::new(DType::F32, Device::CPU);
    let mut rng = StdRng::seed_from_u64(7);

    // three blobs on a circle
    let rows = CLASSES * PER_CLASS;
    let mut centers = Vec::with_capacity(rows * 2);
    let mut targets = Vec::with_capacity(rows);
    for class in 0..CLASSES {
        let angle = class as f32 * std::f32::consts::TAU / CLASSES as f32;
        for _ in 0..PER_CLASS {
            centers.extend([2.0 * angle.cos(), 2.0 * angle.sin()]);
            targets.push(class);
        }
    }
    let noise = Tensor::randn(&[rows, 2], 0.0, 0.4, config, &mut rng)?;
    let inputs = Tensor::from_vec(centers, &[rows, 2], config)?.add(&noise)?;

    let mut w1 = Tensor::randn(&[2, HIDDEN], 0.0, 0.5, config, &mut rng)?;
    let mut b1 = Tensor::zeros(&[HIDDEN], config);
    let mut w2 = Tensor::randn(&[HIDDEN, CLASSES], 0.0, 0.5, config, &mut rng)?;
    let mut b2 = Tensor::zeros(&[CLASSES], config);

    for step in 0..STEPS {
        let mut graph = Graph::new();
        let x = graph.constant(inputs.clone());
        let params = [
            graph.leaf(w1.clone(), true),
            graph.leaf(b1.clone(), true),
            graph.leaf(w2.clone(), true),
            graph.leaf(b2.clone(), true),
        ];

        let h = functional::linear(&mut graph, x, params[0], Some(params[1]))?;
        let h = functional::relu(&mut graph, h)?;
        let logits = functional::linear(&mut graph, h, params[2], Some(params[3]))?;
        let log_probs = graph.log_softmax(logits, -1)?;
        let loss = graph.nll_loss(log_probs, &targets)?;

        graph.backward(loss, None)?;

        for (param, id) in [&mut w1, &mut b1, &mut w2, &mut b2].into_iter().zip(params) {
            if let Some(grad) = graph.grad(id)? {
                *param = param.sub(&grad.scale(LEARNING_RATE)?)?;
            }
        }

        if step % 10 == 0 || step + 1 == STEPS {
            println!("step {:>3}: loss {:.4}", step, graph.value(loss)?.item()?);
        }
    }

    Ok(())
}
