use core::fmt::{self, Display};
use crate::*;

/// 3D axis-aligned bounding box, spanning `[min.x, max.x] × [min.y, max.y] × [min.z, max.z]`
///
/// `min <= max` is not enforced. A box with `min.x > max.x` is empty, the canonical empty box has its minimum at
/// positive infinity and its maximum at negative infinity, so growing it with [`AABB::union`] needs no special case.
/// The box covering all of space has its minimum at negative infinity and its maximum at positive infinity.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct AABB<T: Real> {
    pub min : Vec3<T>,
    pub max : Vec3<T>,
}

impl<T: Real> AABB<T> {
    /// Create a new aabb from its bounds
    #[inline]
    #[must_use]
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Create a new aabb from its individual bounds
    #[inline]
    #[must_use]
    pub fn from_bounds(min_x: T, min_y: T, min_z: T, max_x: T, max_y: T, max_z: T) -> Self {
        Self { min: Vec3::new(min_x, min_y, min_z), max: Vec3::new(max_x, max_y, max_z) }
    }

    /// Create a new aabb that has the same bounds on every axis
    #[inline]
    #[must_use]
    pub fn from_min_max(min: T, max: T) -> Self {
        Self { min: Vec3::set(min), max: Vec3::set(max) }
    }

    /// Create the canonical empty aabb
    #[inline]
    #[must_use]
    pub fn new_empty() -> Self {
        Self::from_min_max(T::INFINITY, T::NEG_INFINITY)
    }

    /// Create an aabb covering all of space
    #[inline]
    #[must_use]
    pub fn universe() -> Self {
        Self::from_min_max(T::NEG_INFINITY, T::INFINITY)
    }

    /// Convert the aabb to another precision
    #[inline]
    #[must_use]
    pub fn cast<U: Real>(self) -> AABB<U> where
        T: NumericCast<U>
    {
        AABB { min: self.min.cast(), max: self.max.cast() }
    }

//------------------------------------------------------------------------------------------------------------------------------

    /// Overwrite the minimum, without checking it against the maximum
    #[inline]
    pub fn set_min(&mut self, min: Vec3<T>) {
        self.min = min;
    }

    /// Overwrite the minimum from its components, without checking it against the maximum
    #[inline]
    pub fn set_min_xyz(&mut self, x: T, y: T, z: T) {
        self.min = Vec3::new(x, y, z);
    }

    /// Overwrite the maximum, without checking it against the minimum
    #[inline]
    pub fn set_max(&mut self, max: Vec3<T>) {
        self.max = max;
    }

    /// Overwrite the maximum from its components, without checking it against the minimum
    #[inline]
    pub fn set_max_xyz(&mut self, x: T, y: T, z: T) {
        self.max = Vec3::new(x, y, z);
    }

    /// Copy all bounds of `other`
    #[inline]
    pub fn set(&mut self, other: Self) {
        *self = other;
    }

    /// Copy the bounds of an aabb of another precision, casting every component
    #[inline]
    pub fn set_cast<U: Real + NumericCast<T>>(&mut self, other: AABB<U>) {
        *self = other.cast();
    }

    /// Reset to the canonical empty aabb
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new_empty();
    }

    /// Grow to cover all of space
    #[inline]
    pub fn all(&mut self) {
        *self = Self::universe();
    }

    /// Open the x-axis
    #[inline]
    pub fn all_x(&mut self) {
        self.min.x = T::NEG_INFINITY;
        self.max.x = T::INFINITY;
    }

    /// Open the y-axis
    #[inline]
    pub fn all_y(&mut self) {
        self.min.y = T::NEG_INFINITY;
        self.max.y = T::INFINITY;
    }

    /// Open the z-axis
    #[inline]
    pub fn all_z(&mut self) {
        self.min.z = T::NEG_INFINITY;
        self.max.z = T::INFINITY;
    }

    /// Create the smallest aabb containing both aabbs
    ///
    /// An empty operand has no influence on the result, thanks to its infinite bounds.
    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Create the smallest aabb containing both aabbs, where `other` has another precision
    #[inline]
    #[must_use]
    pub fn union_cast<U: Real + NumericCast<T>>(self, other: AABB<U>) -> Self {
        self.union(other.cast())
    }

    /// Create the smallest aabb containing the aabb and a point
    #[inline]
    #[must_use]
    pub fn union_point(self, point: Vec3<T>) -> Self {
        Self { min: self.min.min(point), max: self.max.max(point) }
    }

    /// Create the smallest aabb containing the aabb and the point `(x, y, z)`
    #[inline]
    #[must_use]
    pub fn union_xyz(self, x: T, y: T, z: T) -> Self {
        self.union_point(Vec3::new(x, y, z))
    }

    /// Grow the aabb so it also contains `other`
    #[inline]
    pub fn union_assign(&mut self, other: Self) {
        *self = self.union(other);
    }

    /// Grow the aabb so it also contains `point`
    #[inline]
    pub fn union_point_assign(&mut self, point: Vec3<T>) {
        *self = self.union_point(point);
    }

    /// Grow the aabb so it also contains the point `(x, y, z)`
    #[inline]
    pub fn union_xyz_assign(&mut self, x: T, y: T, z: T) {
        *self = self.union_xyz(x, y, z);
    }

    /// Create the overlapping region of 2 aabbs, this will be empty when they don't overlap
    #[inline]
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        Self { min: self.min.max(other.min), max: self.max.min(other.max) }
    }

    /// Shrink the aabb to the region it shares with `other`
    #[inline]
    pub fn intersect_assign(&mut self, other: Self) {
        *self = self.intersect(other);
    }

    /// Grow every side of the aabb by `margin`
    #[inline]
    #[must_use]
    pub fn add_margin(self, margin: T) -> Self {
        Self { min: self.min - margin, max: self.max + margin }
    }

    /// Scale the bounds of the aabb, relative to the origin
    ///
    /// A negative scale swaps the meaning of the bounds on that axis, leaving the aabb empty or inverted.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: T, sy: T, sz: T) -> Self {
        let scale = Vec3::new(sx, sy, sz);
        Self { min: self.min * scale, max: self.max * scale }
    }

//------------------------------------------------------------------------------------------------------------------------------

    /// Check if the aabb is empty
    ///
    /// Only the x-axis is checked. Every operation that can empty an aabb does so on all axes,
    /// boxes emptied on the y- or z-axis only are the responsibility of whoever made them.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.x > self.max.x
    }

    /// Check if a point lies in the aabb, the bounds themselves are inside
    #[inline]
    #[must_use]
    pub fn test_point(self, point: Vec3<T>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if the point `(x, y, z)` lies in the aabb, see [`AABB::test_point`]
    #[inline]
    #[must_use]
    pub fn test_point_xyz(self, x: T, y: T, z: T) -> bool {
        self.test_point(Vec3::new(x, y, z))
    }

    /// Check if 2 aabbs overlap, touching aabbs overlap
    #[inline]
    #[must_use]
    pub fn test_aabb(self, other: Self) -> bool {
        self.max.x >= other.min.x && self.max.y >= other.min.y && self.max.z >= other.min.z &&
        self.min.x <= other.max.x && self.min.y <= other.max.y && self.min.z <= other.max.z
    }

    /// Get the size of the aabb
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec3<T> {
        self.max - self.min
    }

    /// Get the center of the aabb
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec3<T> {
        (self.min + self.max) * T::HALF
    }

    /// Size along the x-axis
    #[inline]
    #[must_use]
    pub fn delta_x(self) -> T {
        self.max.x - self.min.x
    }

    /// Size along the y-axis
    #[inline]
    #[must_use]
    pub fn delta_y(self) -> T {
        self.max.y - self.min.y
    }

    /// Size along the z-axis
    #[inline]
    #[must_use]
    pub fn delta_z(self) -> T {
        self.max.z - self.min.z
    }

    /// Center along the x-axis
    #[inline]
    #[must_use]
    pub fn avg_x(self) -> T {
        (self.min.x + self.max.x) * T::HALF
    }

    /// Center along the y-axis
    #[inline]
    #[must_use]
    pub fn avg_y(self) -> T {
        (self.min.y + self.max.y) * T::HALF
    }

    /// Center along the z-axis
    #[inline]
    #[must_use]
    pub fn avg_z(self) -> T {
        (self.min.z + self.max.z) * T::HALF
    }

    /// Largest size along any axis
    #[inline]
    #[must_use]
    pub fn max_delta(self) -> T {
        self.size().max_component()
    }

    /// Index of the axis along which the aabb is the largest, ties prefer the lower axis
    #[must_use]
    pub fn max_dim(self) -> usize {
        let size = self.size();
        if size.x >= size.y && size.x >= size.z {
            0
        } else if size.y >= size.z {
            1
        } else {
            2
        }
    }

    /// Lower bound along the axis with index `dim`
    #[inline]
    #[must_use]
    pub fn get_min(self, dim: usize) -> T {
        self.min[dim]
    }

    /// Upper bound along the axis with index `dim`
    #[inline]
    #[must_use]
    pub fn get_max(self, dim: usize) -> T {
        self.max[dim]
    }

    /// Calculate the volume of the aabb
    ///
    /// Not guarded against empty aabbs, which result in a meaningless (possibly positive) volume or NaN.
    #[inline]
    #[must_use]
    pub fn volume(self) -> T {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Calculate the volume of the region shared by 2 aabbs, 0 when they don't overlap
    #[must_use]
    pub fn intersection_volume(self, other: Self) -> T {
        let overlap = (self.max.min(other.max) - self.min.max(other.min)).max(Vec3::zero());
        overlap.x * overlap.y * overlap.z
    }

    /// Get one of the 8 corners of the aabb, bit 0, 1 and 2 of `index` select the maximum on respectively the x-, y- and z-axis
    #[inline]
    #[must_use]
    pub fn corner(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 8);
        Vec3 {
            x: if index & 1 == 0 { self.min.x } else { self.max.x },
            y: if index & 2 == 0 { self.min.y } else { self.max.y },
            z: if index & 4 == 0 { self.min.z } else { self.max.z },
        }
    }

    /// Calculate the squared distance from the aabb to a point, 0 if the point is inside the aabb
    ///
    /// This is a pseudo-distance: if the aabb is unbounded along any axis, 0 is returned.
    #[must_use]
    pub fn distance_squared(self, point: Vec3<T>) -> T {
        if self.test_point(point) {
            return T::zero();
        }

        let half_extent = self.size() * T::HALF;
        if !(half_extent.x.is_finite() && half_extent.y.is_finite() && half_extent.z.is_finite()) {
            return T::zero();
        }

        let outside = ((self.center() - point).abs() - half_extent).max(Vec3::zero());
        outside.len_sq()
    }

    /// Calculate the distance from the aabb to a point, see [`AABB::distance_squared`]
    #[inline]
    #[must_use]
    pub fn distance(self, point: Vec3<T>) -> T {
        self.distance_squared(point).sqrt()
    }

//------------------------------------------------------------------------------------------------------------------------------

    /// Check if a ray starting at `orig` and going along `dir` hits the aabb
    #[inline]
    #[must_use]
    pub fn test_ray(self, orig: Vec3<T>, dir: Vec3<T>) -> bool {
        self.is_ray_intersecting(orig, dir.recip(), T::INFINITY)
    }

    /// Check if a ray hits the aabb after it has been grown by `margin` on every side
    #[inline]
    #[must_use]
    pub fn test_ray_with_margin(self, orig: Vec3<T>, dir: Vec3<T>, margin: T) -> bool {
        self.where_is_ray_intersecting(orig, dir.recip(), margin) < T::INFINITY
    }

    /// Check if a ray hits the aabb before reaching a ray parameter of `max_dist`, using a precomputed inverse direction
    #[inline]
    #[must_use]
    pub fn is_ray_intersecting(self, orig: Vec3<T>, inv_dir: Vec3<T>, max_dist: T) -> bool {
        slab_hit(self.min, self.max, orig, inv_dir, max_dist)
    }

    /// Get the ray parameter at which a ray enters the aabb grown by `margin`, or `T::INFINITY` if it doesn't
    ///
    /// A ray starting inside reports 0.
    #[inline]
    #[must_use]
    pub fn where_is_ray_intersecting(self, orig: Vec3<T>, inv_dir: Vec3<T>, margin: T) -> T {
        slab_entry(self.min, self.max, orig, inv_dir, margin)
    }

    /// Fast conservative test of a line segment from `start` to `start + dir * length`
    ///
    /// Never reports a miss for a segment that crosses the aabb, but may report a hit for a segment that stops just short of it:
    /// the segment is accepted when its supporting ray hits the aabb and the aabb is within reach of `start`.
    #[must_use]
    pub fn test_line(self, start: Vec3<T>, dir: Vec3<T>, length: T) -> bool {
        !self.is_empty() &&
        self.test_ray(start, dir) &&
        self.distance_squared(start) <= dir.len_sq() * length * length
    }

    /// Fast conservative test of the line segment between `start` and `end`, see [`AABB::test_line`]
    #[inline]
    #[must_use]
    pub fn test_line_between(self, start: Vec3<T>, end: Vec3<T>) -> bool {
        self.test_line(start, end - start, T::one())
    }

    /// Fast conservative test of a cone-shaped line, starting at `start` and going along `dir` for up to `max_dist` units
    ///
    /// The line has a radius of `radius_at_origin` at `start`, which grows by `radius_per_unit` for every unit traveled.
    /// The radius is evaluated once, at the distance along `dir` of the center of the aabb, and the ray is tested against the
    /// aabb grown by that radius. Like [`AABB::test_line`], false positives are possible but crossing lines are never missed.
    #[must_use]
    pub fn test_cone_line(self, start: Vec3<T>, dir: Vec3<T>, radius_at_origin: T, radius_per_unit: T, max_dist: T) -> bool {
        if self.is_empty() {
            return false;
        }

        let radius = self.radius_at_center(start, dir, radius_at_origin, radius_per_unit);
        self.test_ray_with_margin(start, dir, radius) &&
        self.distance_squared(start) <= max_dist * max_dist
    }

    fn radius_at_center(self, start: Vec3<T>, dir: Vec3<T>, radius_at_origin: T, radius_per_unit: T) -> T {
        let radius = radius_at_origin.max(T::zero());
        let dir_len = dir.len();
        if radius_per_unit == T::zero() || dir_len == T::zero() {
            return radius;
        }

        // A center behind `start` uses the radius at `start`
        let dist = ((self.center() - start).dot(dir) / dir_len).max(T::zero());
        (radius_at_origin + dist * radius_per_unit).max(T::zero())
    }

    /// Get the ray parameter at which a ray crosses the last of the 3 planes it needs to pass to enter the aabb
    ///
    /// The result is not clamped, a negative value means the entry lies behind `pos`.
    /// Together with [`AABB::collide_back`], the ray hits the aabb when `front <= back` and `back >= 0`.
    #[must_use]
    pub fn collide_front(self, pos: Vec3<T>, dir: Vec3<T>) -> T {
        let plane = |axis: usize| {
            let bound = if dir[axis].is_sign_negative() { self.max[axis] } else { self.min[axis] };
            (bound - pos[axis]) / dir[axis]
        };
        plane(0).max(plane(1)).max(plane(2))
    }

    /// Get the ray parameter at which a ray crosses the first of the 3 planes it passes when leaving the aabb
    ///
    /// The result is not clamped, see [`AABB::collide_front`].
    #[must_use]
    pub fn collide_back(self, pos: Vec3<T>, dir: Vec3<T>) -> T {
        let plane = |axis: usize| {
            let bound = if dir[axis].is_sign_negative() { self.min[axis] } else { self.max[axis] };
            (bound - pos[axis]) / dir[axis]
        };
        plane(0).min(plane(1)).min(plane(2))
    }

//------------------------------------------------------------------------------------------------------------------------------

    /// Transform the aabb and get the aabb enclosing the result
    ///
    /// All 8 corners are transformed, the result is exact for affine transforms and never smaller than the transformed volume.
    /// The result has the precision of the matrix. An empty aabb results in an empty aabb.
    /// Unbounded axes stay unbounded under identities, translations and axis-aligned scales, see [`TransformPoint::transform_bound`].
    #[inline]
    #[must_use]
    pub fn transform<U, M>(self, mat: &M) -> AABB<U> where
        U: Real,
        T: NumericCast<U>,
        M: TransformPoint<U>,
    {
        self.transform_union(mat, AABB::<U>::new_empty())
    }

    /// Transform the aabb in-place
    #[inline]
    pub fn transform_assign<M: TransformPoint<T>>(&mut self, mat: &M) {
        *self = self.transform(mat);
    }

    /// Transform the aabb and union the result with `base`, in a single pass
    ///
    /// Equivalent to `self.transform(mat).union(base)`, without creating the intermediate aabb.
    /// `base` may have a lower precision than the matrix, the result has the precision of the matrix.
    /// When the aabb is empty, the result is `base`.
    #[inline]
    #[must_use]
    pub fn transform_union<U, B, M>(self, mat: &M, base: AABB<B>) -> AABB<U> where
        U: Real,
        B: Real + NumericCast<U>,
        T: NumericCast<U>,
        M: TransformPoint<U>,
    {
        self.transform_union_scaled(mat, base, U::one())
    }

    /// Scale the aabb uniformly, then transform it and union the result with `base`, in a single pass
    ///
    /// The scale is applied in the precision of the matrix, before the transform. `scale` should be non-zero,
    /// a zero scale on an unbounded aabb produces NaN bounds which are ignored.
    #[must_use]
    pub fn transform_union_scaled<U, B, M>(self, mat: &M, base: AABB<B>, scale: U) -> AABB<U> where
        U: Real,
        B: Real + NumericCast<U>,
        T: NumericCast<U>,
        M: TransformPoint<U>,
    {
        let mut res = base.cast::<U>();
        if self.is_empty() {
            return res;
        }

        for idx in 0..8 {
            let corner: Vec3<U> = self.corner(idx).cast();
            let corner = mat.transform_bound(corner * scale);
            res.min = res.min.min(corner);
            res.max = res.max.max(corner);
        }
        res
    }

    /// Transform the aabb by a projective matrix and get the aabb enclosing the result, see [`AABB::transform_project_union`]
    #[inline]
    #[must_use]
    pub fn transform_project<U>(self, mat: &Mat4<U>) -> AABB<U> where
        U: Real,
        T: NumericCast<U>,
    {
        self.transform_project_union(mat, AABB::<U>::new_empty())
    }

    /// Transform the aabb by a projective matrix and union the result with `base`, in a single pass
    ///
    /// Every corner is divided by its transformed w-coord. Corners on or behind the projection plane are not clipped,
    /// the caller is responsible for only projecting aabbs in front of it.
    #[must_use]
    pub fn transform_project_union<U, B>(self, mat: &Mat4<U>, base: AABB<B>) -> AABB<U> where
        U: Real,
        B: Real + NumericCast<U>,
        T: NumericCast<U>,
    {
        let mut res = base.cast::<U>();
        if self.is_empty() {
            return res;
        }

        for idx in 0..8 {
            let corner = mat.transform_bound_projective(self.corner(idx).cast());
            res.min = res.min.min(corner);
            res.max = res.max.max(corner);
        }
        res
    }
}

impl<T: Real> Default for AABB<T> {
    /// The canonical empty aabb
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<T: Real> IntersectWithRay<T, Ray<T>> for AABB<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        let t = self.where_is_ray_intersecting(ray.orig, ray.inv_dir(), T::zero());
        if t < T::INFINITY { Some(t) } else { None }
    }
}

impl<T: Real> ApproxEq for AABB<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
        self.min.is_close_to(rhs.min, epsilon) &&
        self.max.is_close_to(rhs.max, epsilon)
    }
}

impl<T: Real> Display for AABB<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[allow(non_camel_case_types)] pub type f32aabb = AABB<f32>;
#[allow(non_camel_case_types)] pub type f64aabb = AABB<f64>;
