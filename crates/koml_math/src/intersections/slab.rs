use crate::{Real, Vec3};

/// Slab test of a ray against an axis-aligned box.
///
/// Returns the smallest non-negative ray parameter at which the ray is inside the box, grown by `margin` on every side,
/// or `T::INFINITY` when the ray misses it. `inv_dir` is the component-wise reciprocal of the ray direction.
///
/// The bounds are closed: touching a face, edge or corner counts as a hit. A zero direction component (infinite inverse)
/// is resolved through plain IEEE arithmetic, the axis then constrains the ray only when the origin lies outside the slab.
/// An origin exactly on a slab boundary with a zero direction component yields `0 * inf = NaN` for that bound, which is
/// skipped, so the ray counts as touching the face. A NaN-propagating min/max would report a miss for that ray instead.
#[must_use]
pub fn slab_entry<T: Real>(min: Vec3<T>, max: Vec3<T>, orig: Vec3<T>, inv_dir: Vec3<T>, margin: T) -> T {
    let mut near = T::zero();
    let mut far = T::INFINITY;

    for axis in 0..3 {
        let to_min = (min[axis] - margin - orig[axis]) * inv_dir[axis];
        let to_max = (max[axis] + margin - orig[axis]) * inv_dir[axis];

        let (axis_near, axis_far) = if inv_dir[axis].is_sign_negative() {
            (to_max, to_min)
        } else {
            (to_min, to_max)
        };

        // An origin on the slab boundary with a zero direction produces NaN, which min/max skip
        near = near.max(axis_near);
        far = far.min(axis_far);
    }

    if far >= near { near } else { T::INFINITY }
}

/// Slab test of a ray against an axis-aligned box, limited to ray parameters below `max_dist`
#[inline]
#[must_use]
pub fn slab_hit<T: Real>(min: Vec3<T>, max: Vec3<T>, orig: Vec3<T>, inv_dir: Vec3<T>, max_dist: T) -> bool {
    slab_entry(min, max, orig, inv_dir, T::zero()) < max_dist
}
