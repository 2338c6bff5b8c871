use super::*;
use crate::mat::TransformPoint;

generic_vec!{ doc = "3D vector"; Vec3, 3, x => 0, y => 1, z => 2; i32v3 => i32 f32v3 => f32 f64v3 => f64 }

impl<T: Numeric> Vec3<T> {
    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Shrink a `Vec3` to a `Vec2`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }
}

impl<T: Real> Vec3<T> {
    /// Transform the vector as a point, see [`TransformPoint`]
    #[inline(always)]
    #[must_use]
    pub fn transform_point<M: TransformPoint<T>>(self, mat: &M) -> Self {
        mat.transform_point(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn cross() {
        let x = f32v3::new(1.0, 0.0, 0.0);
        let y = f32v3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), f32v3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), f32v3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn len_and_normalize() {
        let v = f64v3::new(2.0, 3.0, 6.0);
        assert_eq!(v.len_sq(), 49.0);
        assert!(v.len().is_close_to(7.0, 1e-12));
        assert!(v.normalize().is_close_to_normalized(1e-12));
        assert_eq!(f64v3::zero().normalize(), f64v3::zero());
    }

    #[test]
    fn index_and_components() {
        let mut v = i32v3::new(4, -2, 9);
        v[1] = 5;
        assert_eq!(v[0], 4);
        assert_eq!(v[1], 5);
        assert_eq!(v.min_component(), 4);
        assert_eq!(v.max_component(), 9);
        assert_eq!(v.to_array(), [4, 5, 9]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = i32v3::new(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn min_max_and_cast() {
        let a = f32v3::new(1.0, 5.0, -3.0);
        let b = f32v3::new(2.0, 4.0, -4.0);
        assert_eq!(a.min(b), f32v3::new(1.0, 4.0, -4.0));
        assert_eq!(a.max(b), f32v3::new(2.0, 5.0, -3.0));

        let wide: f64v3 = a.cast();
        assert_eq!(wide, f64v3::new(1.0, 5.0, -3.0));
        assert_eq!(2.0f32 * a, a + a);
        assert_eq!(format!("{}", i32v3::new(1, 2, 3)), "(1, 2, 3)");
    }
}
