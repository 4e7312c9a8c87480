//! Named-component storage for the vector kernel.
//!
//! A vector of length N stores its elements in the struct picked by
//! `Dim<N>: Layout`. Only lengths 2, 3 and 4 have a layout, which is what
//! restricts every vector and matrix shape in the crate to 2..=4.

use crate::Scalar;
use core::fmt;

/// Type-level vector length.
pub struct Dim<const N: usize>;

/// Maps a length to the struct that stores that many components.
pub trait Layout {
    const LEN: usize;
    type Storage<S: Scalar>: Components<S>;
}

/// Indexable storage with named fields.
///
/// Index `i` maps onto the i-th declared field (`0 -> x`, `1 -> y`, ...).
pub trait Components<S>: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Build by evaluating `f` once per index, in ascending order.
    fn from_fn<F: FnMut(usize) -> S>(f: F) -> Self;

    fn get(&self, i: usize) -> Option<&S>;

    fn get_mut(&mut self, i: usize) -> Option<&mut S>;
}

/// Two components, also readable as `r`/`g`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Xy<S> {
    pub x: S,
    pub y: S,
}

/// Three components, also readable as `r`/`g`/`b`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Xyz<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

/// Four components, also readable as `r`/`g`/`b`/`a`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Xyzw<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl Layout for Dim<2> {
    const LEN: usize = 2;
    type Storage<S: Scalar> = Xy<S>;
}

impl Layout for Dim<3> {
    const LEN: usize = 3;
    type Storage<S: Scalar> = Xyz<S>;
}

impl Layout for Dim<4> {
    const LEN: usize = 4;
    type Storage<S: Scalar> = Xyzw<S>;
}

impl<S: Scalar> Components<S> for Xy<S> {
    #[inline]
    fn from_fn<F: FnMut(usize) -> S>(mut f: F) -> Self {
        Self { x: f(0), y: f(1) }
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&S> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut S> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            _ => None,
        }
    }
}

impl<S: Scalar> Components<S> for Xyz<S> {
    #[inline]
    fn from_fn<F: FnMut(usize) -> S>(mut f: F) -> Self {
        Self { x: f(0), y: f(1), z: f(2) }
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&S> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut S> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }
}

impl<S: Scalar> Components<S> for Xyzw<S> {
    #[inline]
    fn from_fn<F: FnMut(usize) -> S>(mut f: F) -> Self {
        Self { x: f(0), y: f(1), z: f(2), w: f(3) }
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&S> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            3 => Some(&self.w),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut S> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            3 => Some(&mut self.w),
            _ => None,
        }
    }
}

// Colour aliases read and write the positional fields.
macro_rules! colour_aliases {
    ($ty:ident { $($alias:ident, $alias_mut:ident => $field:ident);* }) => {
        impl<S: Copy> $ty<S> {
            $(
                #[inline]
                pub fn $alias(&self) -> S {
                    self.$field
                }

                #[inline]
                pub fn $alias_mut(&mut self) -> &mut S {
                    &mut self.$field
                }
            )*
        }
    };
}

colour_aliases!(Xy { r, r_mut => x; g, g_mut => y });
colour_aliases!(Xyz { r, r_mut => x; g, g_mut => y; b, b_mut => z });
colour_aliases!(Xyzw { r, r_mut => x; g, g_mut => y; b, b_mut => z; a, a_mut => w });
