use criterion::{black_box, Criterion};
use matchain_core::dtype::DType;
use matchain_matrix::Matrix;

// Square matrix sizes for benchmark data
const SIZES: [(usize, &str); 3] = [(16, "small"), (64, "medium"), (128, "large")];

const DTYPES: [DType; 2] = [DType::F32, DType::F64];

fn setup_square(size: usize, dtype: DType) -> Matrix {
    let data: Vec<f32> = (0..size * size).map(|i| (i % 7) as f32).collect();
    let mut matrix = Matrix::from_flat_vec(&data, size, size).unwrap();
    matrix.with_dtype(dtype).unwrap();
    matrix
}

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matmul/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (size, label) in SIZES {
        for dtype in DTYPES {
            let x = setup_square(size, dtype);
            let y = setup_square(size, dtype);

            group.bench_function(format!("{}_{}", dtype.as_str(), label), |b| {
                b.iter(|| black_box(x.matmul(&y)).unwrap())
            });
        }
    }

    group.finish();
}

pub fn chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matmul/chain");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (size, label) in SIZES {
        for dtype in DTYPES {
            let matrices: Vec<Matrix> = (0..4).map(|_| setup_square(size, dtype)).collect();

            group.bench_function(format!("{}_{}", dtype.as_str(), label), |b| {
                b.iter(|| black_box(Matrix::matmul_chain(&matrices)).unwrap())
            });
        }
    }

    group.finish();
}
