use ndgrad::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let config = TensorConfig::new(DType::F64, Device::CPU);
    let mut graph = Graph::new();
    let x1 = graph.leaf(Tensor::scalar(6.0, config), true);
    let x2 = graph.leaf(Tensor::scalar(3.0, config), true);
    let x3 = graph.leaf(Tensor::scalar(5.0, config), true);

    // z = (x1 + x2) * x2 * x3
    let s = graph.add(x1, x2)?;
    let p = graph.mul(s, x2)?;
    let z = graph.mul(p, x3)?;

    graph.backward(z, None)?;

    println!("z = {}", graph.value(z)?);
    for (name, id) in [("x1", x1), ("x2", x2), ("x3", x3)] {
        if let Some(grad) = graph.grad(id)? {
            println!("dz/d{} = {}", name, grad);
        }
    }

    Ok(())
}
