use matchain::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let a = Matrix::new(vec![vec![1i32, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    let b = Matrix::new(vec![vec![1i32, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    let c = Matrix::new(vec![vec![1i32, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;

    let product = Matrix::matmul_chain(&[a, b, c])?;
    println!("Result:\n{}", product);

    Ok(())
}
