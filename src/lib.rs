pub use matchain_internal::*;
