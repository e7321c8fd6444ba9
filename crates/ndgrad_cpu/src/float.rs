use half::{bf16, f16};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Element types the kernels are generic over.
pub trait Float:
    Copy
    + Send
    + Sync
    + Default
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn neg_infinity() -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    #[inline]
    fn max_of(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }
}

macro_rules! impl_float_native {
    ($($type:ty),*) => {
        $(
            impl Float for $type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn neg_infinity() -> Self {
                    <$type>::NEG_INFINITY
                }
                #[inline]
                fn exp(self) -> Self {
                    <$type>::exp(self)
                }
                #[inline]
                fn ln(self) -> Self {
                    <$type>::ln(self)
                }
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $type
                }
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

// Half types compute transcendental functions through f32.
macro_rules! impl_float_half {
    ($($type:ty),*) => {
        $(
            impl Float for $type {
                const ZERO: Self = <$type>::ZERO;
                const ONE: Self = <$type>::ONE;

                #[inline]
                fn neg_infinity() -> Self {
                    <$type>::NEG_INFINITY
                }
                #[inline]
                fn exp(self) -> Self {
                    <$type>::from_f32(self.to_f32().exp())
                }
                #[inline]
                fn ln(self) -> Self {
                    <$type>::from_f32(self.to_f32().ln())
                }
                #[inline]
                fn from_f64(value: f64) -> Self {
                    <$type>::from_f64(value)
                }
                #[inline]
                fn to_f64(self) -> f64 {
                    <$type>::to_f64(self)
                }
            }
        )*
    };
}

impl_float_native!(f32, f64);
impl_float_half!(bf16, f16);
