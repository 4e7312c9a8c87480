use crate::layout::{Components, Dim, Layout, Xy, Xyz, Xyzw};
use crate::{Float, MathError, Scalar};
use core::fmt;
use core::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

/// Fixed-length vector of 2, 3 or 4 components.
///
/// All arithmetic is implemented once here for every length; the
/// component names come from the storage struct (`Xy`, `Xyz`, `Xyzw`),
/// which the vector derefs to, so `v.x` and `v[0]` are the same element.
#[repr(transparent)]
pub struct Vector<S: Scalar, const N: usize>
where
    Dim<N>: Layout,
{
    comps: <Dim<N> as Layout>::Storage<S>,
}

pub type Vec2<S> = Vector<S, 2>;
pub type Vec3<S> = Vector<S, 3>;
pub type Vec4<S> = Vector<S, 4>;

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<S: Scalar, const N: usize> Vector<S, N>
where
    Dim<N>: Layout,
{
    pub const LEN: usize = <Dim<N> as Layout>::LEN;

    /// Build by evaluating `f` for each index in ascending order.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> S>(f: F) -> Self {
        Self { comps: <<Dim<N> as Layout>::Storage<S> as Components<S>>::from_fn(f) }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(S::ZERO)
    }

    /// Every component set to `v`.
    #[inline]
    pub fn splat(v: S) -> Self {
        Self::from_fn(|_| v)
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&S> {
        self.comps.get(i)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut S> {
        self.comps.get_mut(i)
    }

    /// Checked read that reports the bad index instead of panicking.
    pub fn try_get(&self, i: usize) -> Result<S, MathError> {
        match self.comps.get(i) {
            Some(v) => Ok(*v),
            None => {
                tracing::debug!(index = i, len = N, "vector index out of bounds");
                Err(MathError::IndexOutOfBounds { index: i, len: N })
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        (0..N).map(move |i| self[i])
    }

    #[inline]
    pub fn to_array(self) -> [S; N] {
        core::array::from_fn(|i| self[i])
    }

    #[inline]
    pub fn map<F: FnMut(S) -> S>(self, mut f: F) -> Self {
        Self::from_fn(|i| f(self[i]))
    }

    #[inline]
    fn zip_map<F: FnMut(S, S) -> S>(self, rhs: Self, mut f: F) -> Self {
        Self::from_fn(|i| f(self[i], rhs[i]))
    }

    /// Sum of the element-wise products.
    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        (0..N).fold(S::ZERO, |acc, i| acc + self[i] * rhs[i])
    }

    #[inline]
    pub fn magnitude_sq(self) -> S {
        self.dot(self)
    }
}

impl<S: Float, const N: usize> Vector<S, N>
where
    Dim<N>: Layout,
{
    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> S {
        self.magnitude_sq().sqrt()
    }

    /// Divides every component by the magnitude.
    ///
    /// A zero vector yields NaN components (0/0); use
    /// [`try_normalise`](Self::try_normalise) to reject it instead.
    #[inline]
    #[doc(alias = "normalize")]
    pub fn normalise(self) -> Self {
        self / self.magnitude()
    }

    pub fn try_normalise(self) -> Result<Self, MathError> {
        let m = self.magnitude();
        if m > S::EPSILON {
            Ok(self / m)
        } else {
            tracing::debug!(magnitude = %m, "refusing to normalise degenerate vector");
            Err(MathError::ZeroMagnitude)
        }
    }

    /// Cosine of the angle between `self` and `rhs`.
    #[inline]
    pub fn cos_angle(self, rhs: Self) -> S {
        self.dot(rhs) / (self.magnitude() * rhs.magnitude())
    }
}

impl<S: Scalar> Vector<S, 2> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { comps: Xy { x, y } }
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(S::ONE, S::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(S::ZERO, S::ONE)
    }

    #[inline]
    pub fn extend(self, z: S) -> Vec3<S> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<S: Scalar> Vector<S, 3> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { comps: Xyz { x, y, z } }
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE)
    }

    /// Right-handed cross product. Only defined in three dimensions.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drop z.
    #[inline]
    pub fn truncate(self) -> Vec2<S> {
        Vec2::new(self.x, self.y)
    }
}

impl<S: Scalar> Vector<S, 4> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { comps: Xyzw { x, y, z, w } }
    }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<S: Scalar, const N: usize> Clone for Vector<S, N>
where
    Dim<N>: Layout,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scalar, const N: usize> Copy for Vector<S, N> where Dim<N>: Layout {}

// Exact comparison, no epsilon.
impl<S: Scalar, const N: usize> PartialEq for Vector<S, N>
where
    Dim<N>: Layout,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.comps == other.comps
    }
}

impl<S: Scalar, const N: usize> fmt::Debug for Vector<S, N>
where
    Dim<N>: Layout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.comps).finish()
    }
}

impl<S: Scalar, const N: usize> fmt::Display for Vector<S, N>
where
    Dim<N>: Layout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for i in 0..N {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self[i])?;
        }
        write!(f, ")")
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N>
where
    Dim<N>: Layout,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar, const N: usize> Deref for Vector<S, N>
where
    Dim<N>: Layout,
{
    type Target = <Dim<N> as Layout>::Storage<S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.comps
    }
}

impl<S: Scalar, const N: usize> DerefMut for Vector<S, N>
where
    Dim<N>: Layout,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.comps
    }
}

impl<S: Scalar, const N: usize> Index<usize> for Vector<S, N>
where
    Dim<N>: Layout,
{
    type Output = S;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &S {
        match self.comps.get(i) {
            Some(v) => v,
            None => index_out_of_bounds(i, N),
        }
    }
}

impl<S: Scalar, const N: usize> IndexMut<usize> for Vector<S, N>
where
    Dim<N>: Layout,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut S {
        match self.comps.get_mut(i) {
            Some(v) => v,
            None => index_out_of_bounds(i, N),
        }
    }
}

impl<S: Scalar, const N: usize> From<[S; N]> for Vector<S, N>
where
    Dim<N>: Layout,
{
    #[inline]
    fn from(a: [S; N]) -> Self {
        Self::from_fn(|i| a[i])
    }
}

impl<S: Scalar, const N: usize> From<Vector<S, N>> for [S; N]
where
    Dim<N>: Layout,
{
    #[inline]
    fn from(v: Vector<S, N>) -> Self {
        v.to_array()
    }
}

// Element-wise with another vector, broadcast with a scalar, plus the
// assigning forms of both.
macro_rules! impl_elementwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<S: Scalar, const N: usize> $Op for Vector<S, N>
        where
            Dim<N>: Layout,
        {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $sym b)
            }
        }

        impl<S: Scalar, const N: usize> $Op<S> for Vector<S, N>
        where
            Dim<N>: Layout,
        {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: S) -> Self {
                self.map(|a| a $sym rhs)
            }
        }

        impl<S: Scalar, const N: usize> $OpAssign for Vector<S, N>
        where
            Dim<N>: Layout,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<S: Scalar, const N: usize> $OpAssign<S> for Vector<S, N>
        where
            Dim<N>: Layout,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise!(Div, div, DivAssign, div_assign, /);

impl<S: Scalar, const N: usize> Neg for Vector<S, N>
where
    Dim<N>: Layout,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

// Scalar * Vector (commutative)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t
            where
                Dim<N>: Layout,
            {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);
