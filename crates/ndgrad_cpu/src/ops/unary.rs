use crate::Float;
use half::{bf16, f16};
use rayon::prelude::*;

fn unary_map<T, F>(input: &[T], out: &mut [T], op: F)
where
    T: Float,
    F: Fn(T) -> T + Sync,
{
    out.par_iter_mut().zip(input.par_iter()).for_each(|(out_val, &x)| {
        *out_val = op(x);
    });
}

#[inline]
fn neg<T: Float>(x: T) -> T {
    -x
}

#[inline]
fn exp<T: Float>(x: T) -> T {
    x.exp()
}

#[inline]
fn ln<T: Float>(x: T) -> T {
    x.ln()
}

#[inline]
fn recip<T: Float>(x: T) -> T {
    T::ONE / x
}

#[inline]
fn add_scalar<T: Float>(x: T, s: T) -> T {
    x + s
}

#[inline]
fn mul_scalar<T: Float>(x: T, s: T) -> T {
    x * s
}

// NaN falls through to the bound.
#[inline]
fn clamp_min<T: Float>(x: T, floor: T) -> T {
    if x > floor {
        x
    } else {
        floor
    }
}

#[inline]
fn clamp_max<T: Float>(x: T, ceil: T) -> T {
    if x < ceil {
        x
    } else {
        ceil
    }
}

#[inline]
fn gt_mask<T: Float>(x: T, threshold: T) -> T {
    if x > threshold {
        T::ONE
    } else {
        T::ZERO
    }
}

macro_rules! unary_op {
    ($name:ident, [$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<$name _ $type>](input: &[$type], out: &mut [$type]) {
                    unary_map(input, out, $name::<$type>)
                }
            )*
        }
    };
}

macro_rules! unary_scalar_op {
    ($name:ident, [$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<$name _ $type>](input: &[$type], scalar: $type, out: &mut [$type]) {
                    unary_map(input, out, |x| $name::<$type>(x, scalar))
                }
            )*
        }
    };
}

unary_op!(neg, [bf16, f16, f32, f64]);
unary_op!(exp, [bf16, f16, f32, f64]);
unary_op!(ln, [bf16, f16, f32, f64]);
unary_op!(recip, [bf16, f16, f32, f64]);

unary_scalar_op!(add_scalar, [bf16, f16, f32, f64]);
unary_scalar_op!(mul_scalar, [bf16, f16, f32, f64]);
unary_scalar_op!(clamp_min, [bf16, f16, f32, f64]);
unary_scalar_op!(clamp_max, [bf16, f16, f32, f64]);
unary_scalar_op!(gt_mask, [bf16, f16, f32, f64]);
