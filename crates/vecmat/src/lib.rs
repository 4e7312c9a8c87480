//! vecmat: fixed-size vectors and matrices over a generic scalar
//!
//! Vectors of 2, 3 and 4 components and every matrix shape from 2x2 to 4x4,
//! generic over the element type (f32, f64, i32, i64), plus the usual 4x4
//! projection/view/model builders.
//!
//! # Design principles
//! - One vector kernel and one matrix kernel shared by every shape
//! - Named components (`x y z w`, aliased `r g b a`) are a storage layout
//!   the vector derefs to, not a separate type family
//! - Matrices are rows of vectors; matrix-matrix `*` and `/` are element-wise
//! - `#[repr(C)]` storage for GPU interop (`bytemuck` feature)
//! - Row-vector convention for transforms: translation lives in row 3

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod layout;
mod matrix;
mod scalar;
mod transform;
mod vector;

pub use error::MathError;
pub use layout::{Components, Dim, Layout, Xy, Xyz, Xyzw};
pub use matrix::{Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3, Matrix};
pub use scalar::{Float, Scalar};
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// Sum of the element-wise products of `a` and `b`.
#[inline]
pub fn dot<S: Scalar, const N: usize>(a: Vector<S, N>, b: Vector<S, N>) -> S
where
    Dim<N>: Layout,
{
    a.dot(b)
}

#[inline]
pub fn magnitude<S: Float, const N: usize>(v: Vector<S, N>) -> S
where
    Dim<N>: Layout,
{
    v.magnitude()
}

/// `v / |v|`. Not guarded: a zero vector comes back as NaN.
#[inline]
pub fn normalise<S: Float, const N: usize>(v: Vector<S, N>) -> Vector<S, N>
where
    Dim<N>: Layout,
{
    v.normalise()
}

#[inline]
pub fn cross<S: Scalar>(a: Vec3<S>, b: Vec3<S>) -> Vec3<S> {
    a.cross(b)
}

// Generic structs can't derive Pod; every layout is #[repr(C)] over a single
// scalar type and Vector/Matrix are #[repr(transparent)] over it, so there is
// no padding for any shape.
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ty),*) => {
            $(
                // SAFETY: see module comment
                unsafe impl<const N: usize> bytemuck::Zeroable for Vector<$t, N> where Dim<N>: Layout {}
                unsafe impl<const N: usize> bytemuck::Pod for Vector<$t, N> where Dim<N>: Layout {}

                unsafe impl<const R: usize, const C: usize> bytemuck::Zeroable for Matrix<$t, R, C>
                where
                    Dim<R>: Layout,
                    Dim<C>: Layout,
                {
                }
                unsafe impl<const R: usize, const C: usize> bytemuck::Pod for Matrix<$t, R, C>
                where
                    Dim<R>: Layout,
                    Dim<C>: Layout,
                {
                }
            )*
        };
    }

    impl_pod!(f32, f64, i32, i64);

}
