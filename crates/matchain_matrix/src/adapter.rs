use half::{bf16, f16};
use matchain_core::{
    dtype::DType,
    error::{Error, Result},
};

/// Conversion from nested host data into matrix dimensions and flat storage.
///
/// Implemented for `Vec<Vec<T>>` (rows of equal length) for every supported
/// element type.
pub trait MatrixAdapter {
    type Elem;

    fn to_dims(&self) -> Result<(usize, usize)>;
    fn to_flat_vec(self) -> Result<Vec<Self::Elem>>;
    fn dtype(&self) -> DType;
}

macro_rules! impl_matrix_adapter {
    ($($type:ty => $dtype:ident),* $(,)?) => {
        $(
            impl MatrixAdapter for Vec<Vec<$type>> {
                type Elem = $type;

                fn to_dims(&self) -> Result<(usize, usize)> {
                    let rows = self.len();
                    let cols = self.first().map_or(0, |row| row.len());

                    for row in self {
                        if row.len() != cols {
                            return Err(Error::InvalidArgument(format!(
                                "ragged rows: expected {} columns, found {}",
                                cols,
                                row.len()
                            )));
                        }
                    }

                    Ok((rows, cols))
                }

                fn to_flat_vec(self) -> Result<Vec<$type>> {
                    Ok(self.into_iter().flatten().collect())
                }

                fn dtype(&self) -> DType {
                    DType::$dtype
                }
            }
        )*
    };
}

impl_matrix_adapter! {
    bf16 => BF16,
    f16 => F16,
    f32 => F32,
    f64 => F64,
    i32 => I32,
    i64 => I64,
}
