use crate::Real;

mod slab;
pub use slab::*;

/// Intersect a shape with a ray
pub trait IntersectWithRay<T: Real, R> {
    /// Get the ray parameter at which the ray enters the shape, or `None` if the ray misses it
    ///
    /// A ray starting inside the shape reports a parameter of 0.
    fn intersect_ray(&self, ray: &R) -> Option<T>;
}
