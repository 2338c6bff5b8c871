use super::*;

generic_vec!{ doc = "2D vector"; Vec2, 2, x => 0, y => 1; i32v2 => i32 f32v2 => f32 f64v2 => f64 }

impl<T: Numeric> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Calculate the 2D cross product (z-component of the 3D cross product) of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: Signed> Vec2<T> {
    /// Get the vector rotated 90 degrees counter-clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self { x: -self.y, y: self.x }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn cross_and_perpendicular() {
        let a = i32v2::new(2, 0);
        let b = i32v2::new(0, 3);
        assert_eq!(a.cross(b), 6);
        assert_eq!(b.cross(a), -6);
        assert_eq!(a.perpendicular(), i32v2::new(0, 2));
        assert_eq!(a.perpendicular().dot(a), 0);
    }

    #[test]
    fn integer_ops() {
        let v = i32v2::new(3, -4) * 2 + i32v2::set(1);
        assert_eq!(v, i32v2::new(7, -7));
        assert_eq!(v.abs(), i32v2::new(7, 7));
        assert_eq!(i32v2::new(3, 4).len(), 5);
    }
}
