pub mod cpu;

use crate::dtype::DType;
use std::ffi::c_void;

pub trait Buffer: Send + Sync {
    fn as_ptr(&self) -> *const c_void;
    fn as_mut_ptr(&mut self) -> *mut c_void;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn dtype(&self) -> DType;

    /// # Safety
    /// Requires both buffers to have the same size and dtype and no memory overlap
    unsafe fn copy_from(&mut self, other: &dyn Buffer) -> crate::error::Result<()>;

    /// # Safety
    /// Requires valid source pointer and matching size_in_bytes with no memory overlap
    unsafe fn copy_from_host(&mut self, src: *const c_void, size_in_bytes: usize) -> crate::error::Result<()>;

    /// # Safety
    /// Requires valid destination pointer and matching size_in_bytes with no memory overlap
    unsafe fn copy_to_host(&self, dest: *mut c_void, size_in_bytes: usize) -> crate::error::Result<()>;
}
