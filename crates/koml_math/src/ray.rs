use core::fmt::{self, Display};
use crate::*;

/// 3D ray, starting at `orig` and extending infinitely along `dir`
///
/// `dir` is not required to be normalized, ray parameters are expressed in multiples of `dir`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray<T: Real> {
    pub orig : Vec3<T>,
    pub dir  : Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { orig, dir }
    }

    /// Create a ray going from `begin` through `end`, `end` lies at a ray parameter of 1
    #[inline]
    #[must_use]
    pub fn through(begin: Vec3<T>, end: Vec3<T>) -> Self {
        Self { orig: begin, dir: end - begin }
    }

    /// Get the point at a given ray parameter
    #[inline]
    #[must_use]
    pub fn point_at(self, t: T) -> Vec3<T> {
        self.orig + self.dir * t
    }

    /// Get the component-wise inverse of the direction, zero components turn into signed infinities
    #[inline]
    #[must_use]
    pub fn inv_dir(self) -> Vec3<T> {
        self.dir.recip()
    }
}

impl<T: Real> ApproxEq for Ray<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon)
    }
}

impl<T: Real> Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ o: {}, d: {} }}", self.orig, self.dir)
    }
}

#[allow(non_camel_case_types)] pub type f32ray = Ray<f32>;
#[allow(non_camel_case_types)] pub type f64ray = Ray<f64>;
