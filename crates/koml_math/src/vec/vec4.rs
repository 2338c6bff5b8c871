use super::*;

generic_vec!{ doc = "4D vector"; Vec4, 4, x => 0, y => 1, z => 2, w => 3; i32v4 => i32 f32v4 => f32 f64v4 => f64 }

impl<T: Numeric> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

impl<T: Real> Vec4<T> {
    /// Divide the x, y and z components by w
    #[inline]
    #[must_use]
    pub fn project(self) -> Vec3<T> {
        let inv_w = self.w.recip();
        Vec3 { x: self.x * inv_w, y: self.y * inv_w, z: self.z * inv_w }
    }
}
