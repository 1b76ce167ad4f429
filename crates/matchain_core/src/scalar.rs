use crate::dtype::DType;
use half::{bf16, f16};
use std::ops::{Add, Div, Mul, Sub};

macro_rules! numeric_variants {
    ($($variant:ident => $type:ty),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Scalar {
            $($variant($type),)*
        }

        impl Scalar {
            #[inline]
            pub fn new<T: Into<Self>>(value: T) -> Self {
                value.into()
            }

            #[inline]
            pub fn dtype(&self) -> DType {
                match self {
                    $(Self::$variant(_) => DType::$variant,)*
                }
            }

            #[inline]
            pub fn is_int(&self) -> bool {
                self.dtype().is_int()
            }

            #[inline]
            pub fn is_float(&self) -> bool {
                self.dtype().is_float()
            }

            #[inline]
            pub fn as_f64_any(&self) -> f64 {
                match *self {
                    $(
                        Self::$variant(x) => {
                            numeric_variants!(@as_f64 $variant, x)
                        },
                    )*
                }
            }

            $(
                paste::paste! {
                    #[inline]
                    pub fn [<as_ $variant:lower>](&self) -> $type {
                        match *self {
                            Self::$variant(x) => x,
                            _ => numeric_variants!(@convert $variant => self.as_f64_any()),
                        }
                    }
                }
            )*
        }

        $(
            impl From<$type> for Scalar {
                #[inline]
                fn from(x: $type) -> Self {
                    Self::$variant(x)
                }
            }
        )*

        impl Add for Scalar {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => Self::$variant(a + b),
                    )*
                    (lhs, rhs) => Self::F64(lhs.as_f64_any() + rhs.as_f64_any()),
                }
            }
        }

        impl Sub for Scalar {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => Self::$variant(a - b),
                    )*
                    (lhs, rhs) => Self::F64(lhs.as_f64_any() - rhs.as_f64_any()),
                }
            }
        }

        impl Mul for Scalar {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => Self::$variant(a * b),
                    )*
                    (lhs, rhs) => Self::F64(lhs.as_f64_any() * rhs.as_f64_any()),
                }
            }
        }

        impl Div for Scalar {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => Self::$variant(a / b),
                    )*
                    (lhs, rhs) => Self::F64(lhs.as_f64_any() / rhs.as_f64_any()),
                }
            }
        }
    };

    (@as_f64 BF16, $x:expr) => { f64::from(f32::from($x)) };
    (@as_f64 F16, $x:expr) => { f64::from(f32::from($x)) };
    (@as_f64 F32, $x:expr) => { f64::from($x) };
    (@as_f64 F64, $x:expr) => { $x };
    (@as_f64 I32, $x:expr) => { $x as f64 };
    (@as_f64 I64, $x:expr) => { $x as f64 };

    (@convert BF16 => $value:expr) => { bf16::from_f64($value) };
    (@convert F16 => $value:expr) => { f16::from_f64($value) };
    (@convert F32 => $value:expr) => { $value as f32 };
    (@convert F64 => $value:expr) => { $value };
    (@convert I32 => $value:expr) => { $value as i32 };
    (@convert I64 => $value:expr) => { $value as i64 };
}

numeric_variants! {
    BF16 => bf16,
    F16 => f16,
    F32 => f32,
    F64 => f64,
    I32 => i32,
    I64 => i64,
}

impl Scalar {
    /// Converts to `dtype`, going through `f64` when the variant differs.
    pub fn to_dtype(&self, dtype: DType) -> Scalar {
        match dtype {
            DType::BF16 => Scalar::BF16(self.as_bf16()),
            DType::F16 => Scalar::F16(self.as_f16()),
            DType::F32 => Scalar::F32(self.as_f32()),
            DType::F64 => Scalar::F64(self.as_f64()),
            DType::I32 => Scalar::I32(self.as_i32()),
            DType::I64 => Scalar::I64(self.as_i64()),
        }
    }
}
