use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element type of every vector and matrix in the crate.
///
/// Implemented for f32, f64, i32 and i64. Only the signed types qualify
/// because negation is part of the kernel.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
}

/// Floating-point scalars: everything that needs a square root or a
/// trigonometric function (magnitude, normalisation, projections, rotations).
pub trait Float: Scalar {
    const TWO: Self;
    const PI: Self;
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn sin_cos(self) -> (Self, Self);

    fn from_f64(v: f64) -> Self;

    /// Degrees to radians.
    #[inline]
    fn to_radians(self) -> Self {
        self * (Self::PI / Self::from_f64(180.0))
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_scalar_int!(i32, i64);

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    macro_rules! inherent {
        ($($name:ident),*) => {
            ::paste::paste! {
                $(
                    #[inline(always)]
                    pub fn [<$name _f32>](x: f32) -> f32 {
                        x.$name()
                    }
                    #[inline(always)]
                    pub fn [<$name _f64>](x: f64) -> f64 {
                        x.$name()
                    }
                )*
            }
        };
    }

    inherent!(sqrt, abs, sin, cos, tan);

    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        libm::tan(x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vecmat needs either the `std` or the `libm` feature for float math");

macro_rules! impl_float {
    ($t:ident, $eps:expr, $pi:expr) => {
        ::paste::paste! {
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
            }

            impl Float for $t {
                const TWO: Self = 2.0;
                const PI: Self = $pi;
                const EPSILON: Self = $eps;

                #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $t>](self) }
                #[inline] fn abs(self) -> Self { float_ops::[<abs_ $t>](self) }
                #[inline] fn sin(self) -> Self { float_ops::[<sin_ $t>](self) }
                #[inline] fn cos(self) -> Self { float_ops::[<cos_ $t>](self) }
                #[inline] fn tan(self) -> Self { float_ops::[<tan_ $t>](self) }
                #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $t>](self) }

                #[inline] fn from_f64(v: f64) -> Self { v as $t }
            }
        }
    };
}

impl_float!(f32, f32::EPSILON, core::f32::consts::PI);
impl_float!(f64, f64::EPSILON, core::f64::consts::PI);
