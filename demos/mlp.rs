use matchain::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let mlp = Mlp::new(&[3, 16, 16, 2], true)?;

    let input = Matrix::new(vec![vec![0.5f32, -1.0, 2.0], vec![1.5, 0.0, -0.5]])?;
    let output = mlp.forward(&input)?;

    println!("Input:\n{}", input);
    println!("Output:\n{}", output);

    Ok(())
}
