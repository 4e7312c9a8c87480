use crate::layout::{Dim, Layout};
use crate::{MathError, Scalar, Vector};
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// R x C matrix, row-major storage.
///
/// Stored as `R` row vectors of length `C`. Arithmetic between two matrices
/// is element-wise (`*` and `/` are Hadamard products); the algebraic product
/// is [`mul_mat`](Self::mul_mat).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Matrix<S: Scalar, const R: usize, const C: usize>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    rows: [Vector<S, C>; R],
}

pub type Mat2<S> = Matrix<S, 2, 2>;
pub type Mat2x3<S> = Matrix<S, 2, 3>;
pub type Mat2x4<S> = Matrix<S, 2, 4>;
pub type Mat3x2<S> = Matrix<S, 3, 2>;
pub type Mat3<S> = Matrix<S, 3, 3>;
pub type Mat3x4<S> = Matrix<S, 3, 4>;
pub type Mat4x2<S> = Matrix<S, 4, 2>;
pub type Mat4x3<S> = Matrix<S, 4, 3>;
pub type Mat4<S> = Matrix<S, 4, 4>;

impl<S: Scalar, const R: usize, const C: usize> Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    #[inline]
    pub fn from_rows(rows: [Vector<S, C>; R]) -> Self {
        Self { rows }
    }

    /// Build from `f(row, col)`, row by row.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> S>(mut f: F) -> Self {
        Self { rows: core::array::from_fn(|r| Vector::from_fn(|c| f(r, c))) }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_fn(|_, _| S::ZERO)
    }

    /// `v` on the leading diagonal (up to `min(R, C)`), zero elsewhere.
    #[inline]
    pub fn from_scalar(v: S) -> Self {
        Self::from_fn(|r, c| if r == c { v } else { S::ZERO })
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_scalar(S::ONE)
    }

    #[inline]
    pub fn rows(&self) -> &[Vector<S, C>; R] {
        &self.rows
    }

    /// Row access. Panics if `i >= R`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<S, C> {
        self.rows[i]
    }

    pub fn try_row(&self, i: usize) -> Result<Vector<S, C>, MathError> {
        match self.rows.get(i) {
            Some(row) => Ok(*row),
            None => {
                tracing::debug!(index = i, rows = R, "matrix row out of bounds");
                Err(MathError::IndexOutOfBounds { index: i, len: R })
            }
        }
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<S> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Column `j`, gathered from each row. Panics if `j >= C`.
    #[inline]
    pub fn column(&self, j: usize) -> Vector<S, R> {
        Vector::from_fn(|r| self.rows[r][j])
    }

    #[inline]
    pub fn transpose(&self) -> Matrix<S, C, R> {
        Matrix::from_fn(|r, c| self.rows[c][r])
    }

    /// Algebraic matrix product `self (R x C) * rhs (C x K)`.
    pub fn mul_mat<const K: usize>(&self, rhs: &Matrix<S, C, K>) -> Matrix<S, R, K>
    where
        Dim<K>: Layout,
    {
        Matrix::from_fn(|r, k| (0..C).fold(S::ZERO, |acc, c| acc + self.rows[r][c] * rhs.rows[c][k]))
    }

    /// Row vector times matrix: `v (1 x R) * self (R x C)`.
    #[inline]
    pub fn mul_vec(&self, v: Vector<S, R>) -> Vector<S, C> {
        (0..R).fold(Vector::zero(), |acc, r| acc + self.rows[r] * v[r])
    }

    #[inline]
    fn map_rows<F: FnMut(Vector<S, C>) -> Vector<S, C>>(self, mut f: F) -> Self {
        Self { rows: self.rows.map(&mut f) }
    }

    #[inline]
    fn zip_rows<F: FnMut(Vector<S, C>, Vector<S, C>) -> Vector<S, C>>(self, rhs: Self, mut f: F) -> Self {
        Self { rows: core::array::from_fn(|i| f(self.rows[i], rhs.rows[i])) }
    }
}

impl<S: Scalar, const R: usize, const C: usize> Default for Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    type Output = Vector<S, C>;

    #[inline]
    #[track_caller]
    fn index(&self, i: usize) -> &Vector<S, C> {
        &self.rows[i]
    }
}

impl<S: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Vector<S, C> {
        &mut self.rows[i]
    }
}

impl<S: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

// Each operator delegates row by row to the vector kernel.
macro_rules! impl_rowwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<S: Scalar, const R: usize, const C: usize> $Op for Matrix<S, R, C>
        where
            Dim<R>: Layout,
            Dim<C>: Layout,
        {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_rows(rhs, |a, b| a $sym b)
            }
        }

        impl<S: Scalar, const R: usize, const C: usize> $Op<S> for Matrix<S, R, C>
        where
            Dim<R>: Layout,
            Dim<C>: Layout,
        {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: S) -> Self {
                self.map_rows(|row| row $sym rhs)
            }
        }

        impl<S: Scalar, const R: usize, const C: usize> $OpAssign for Matrix<S, R, C>
        where
            Dim<R>: Layout,
            Dim<C>: Layout,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for (row, other) in self.rows.iter_mut().zip(rhs.rows) {
                    $OpAssign::$op_assign(row, other);
                }
            }
        }

        impl<S: Scalar, const R: usize, const C: usize> $OpAssign<S> for Matrix<S, R, C>
        where
            Dim<R>: Layout,
            Dim<C>: Layout,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                for row in self.rows.iter_mut() {
                    $OpAssign::$op_assign(row, rhs);
                }
            }
        }
    };
}

impl_rowwise!(Add, add, AddAssign, add_assign, +);
impl_rowwise!(Sub, sub, SubAssign, sub_assign, -);
impl_rowwise!(Mul, mul, MulAssign, mul_assign, *);
impl_rowwise!(Div, div, DivAssign, div_assign, /);

impl<S: Scalar, const R: usize, const C: usize> Neg for Matrix<S, R, C>
where
    Dim<R>: Layout,
    Dim<C>: Layout,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map_rows(|row| -row)
    }
}

// Scalar * Matrix (commutative)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t
            where
                Dim<R>: Layout,
                Dim<C>: Layout,
            {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);
