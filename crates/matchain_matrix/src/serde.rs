use crate::Matrix;
use matchain_core::dtype::DType;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct SerializedMatrix {
    dtype: DType,
    rows: usize,
    cols: usize,
    buffer_data: Vec<u8>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let size = self.size();
        let elem_size = self.dtype().size_in_bytes();
        let mut buffer_data = vec![0u8; size * elem_size];

        unsafe {
            self.buffer()
                .copy_to_host(buffer_data.as_mut_ptr() as *mut std::ffi::c_void, buffer_data.len())
                .map_err(serde::ser::Error::custom)?;
        }

        let serialized = SerializedMatrix {
            dtype: self.dtype(),
            rows: self.rows(),
            cols: self.cols(),
            buffer_data,
        };

        serialized.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serialized = SerializedMatrix::deserialize(deserializer)?;

        let expected = serialized.rows * serialized.cols * serialized.dtype.size_in_bytes();
        if serialized.buffer_data.len() != expected {
            return Err(de::Error::custom(format!(
                "buffer length {} does not match a {}x{} {} matrix",
                serialized.buffer_data.len(),
                serialized.rows,
                serialized.cols,
                serialized.dtype.as_str(),
            )));
        }

        Matrix::from_bytes(serialized.rows, serialized.cols, serialized.dtype, serialized.buffer_data)
            .map_err(de::Error::custom)
    }
}
