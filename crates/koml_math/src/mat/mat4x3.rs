use core::ops::*;
use super::*;

generic_matrix!{doc = "4x3 matrix (row-major order), with an implicit (0, 0, 0, 1) column at the end"; Mat4x3, 4, 3}

impl<T: Real> Mat4x3<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T, m30: T, m31: T, m32: T) -> Self {
        Self { vals: [m00, m01, m02,
                      m10, m11, m12,
                      m20, m21, m22,
                      m30, m31, m32] }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>, row3: Vec3<T>) -> Self {
        Self { vals: [row0.x, row0.y, row0.z,
                      row1.x, row1.y, row1.z,
                      row2.x, row2.y, row2.z,
                      row3.x, row3.y, row3.z] }
    }

    /// Create a 4x3 matrix from the affine part of a 4x4 matrix, the last column is dropped
    #[must_use]
    pub fn from_mat4(mat: Mat4<T>) -> Self {
        Self::from_rows(mat.row(0).shrink(), mat.row(1).shrink(), mat.row(2).shrink(), mat.row(3).shrink())
    }

    /// Get the row at the given index (implicit w-coord excluded)
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 4);
        let idx = index * 3;
        Vec3::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 3);
        Vec4::new(self.vals[index], self.vals[index + 3], self.vals[index + 6], self.vals[index + 9])
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one , zero, zero,
                      zero, one , zero,
                      zero, zero, one ,
                      zero, zero, zero] }
    }

    /// Transform a `Vec3` as a point (implicit w-coord with a value of 1)
    #[must_use]
    pub fn transform_point(self, point: Vec3<T>) -> Vec3<T> {
        self.row(0) * point.x + self.row(1) * point.y + self.row(2) * point.z + self.row(3)
    }

    /// Transform a `Vec3` as a point that may have infinite coordinates, see [`TransformPoint::transform_bound`]
    #[must_use]
    pub fn transform_bound(self, point: Vec3<T>) -> Vec3<T> {
        let column = |col: usize| {
            mul_bound(self[(0, col)], point.x) +
            mul_bound(self[(1, col)], point.y) +
            mul_bound(self[(2, col)], point.z) +
            self[(3, col)]
        };
        Vec3::new(column(0), column(1), column(2))
    }

    /// Transform a `Vec3` as a direction (implicit w-coord with a value of 0)
    #[must_use]
    pub fn transform_direction(self, dir: Vec3<T>) -> Vec3<T> {
        self.row(0) * dir.x + self.row(1) * dir.y + self.row(2) * dir.z
    }

    /// Create a 3d scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();

        Self { vals: [scale.x, zero   , zero   ,
                      zero   , scale.y, zero   ,
                      zero   , zero   , scale.z,
                      zero   , zero   , zero   ] }
    }

    /// Create a 3d translation matrix
    #[must_use]
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one    , zero   , zero   ,
                      zero   , one    , zero   ,
                      zero   , zero   , one    ,
                      trans.x, trans.y, trans.z] }
    }

    /// Create a rotation of `angle` radians around the x-axis
    #[must_use]
    pub fn create_rotation_x(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one , zero, zero,
                      zero, cos , sin ,
                      zero, -sin, cos ,
                      zero, zero, zero] }
    }

    /// Create a rotation of `angle` radians around the y-axis
    #[must_use]
    pub fn create_rotation_y(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let zero = T::zero();
        let one = T::one();

        Self { vals: [cos , zero, -sin,
                      zero, one , zero,
                      sin , zero, cos ,
                      zero, zero, zero] }
    }

    /// Create a rotation of `angle` radians around the z-axis
    #[must_use]
    pub fn create_rotation_z(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let zero = T::zero();
        let one = T::one();

        Self { vals: [cos , sin , zero,
                      -sin, cos , zero,
                      zero, zero, one ,
                      zero, zero, zero] }
    }
}

impl<T: Real> Mul for Mat4x3<T> {
    type Output = Self;

    /// Concatenate 2 transforms, `self` is applied first
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_rows(rhs.transform_direction(self.row(0)),
                        rhs.transform_direction(self.row(1)),
                        rhs.transform_direction(self.row(2)),
                        rhs.transform_point(self.row(3)))
    }
}

impl<T: Real> MulAssign for Mat4x3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> TransformPoint<T> for Mat4x3<T> {
    #[inline]
    fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        Mat4x3::transform_point(*self, point)
    }

    #[inline]
    fn transform_bound(&self, point: Vec3<T>) -> Vec3<T> {
        Mat4x3::transform_bound(*self, point)
    }
}

#[allow(non_camel_case_types)] pub type f32m4x3 = Mat4x3<f32>;
#[allow(non_camel_case_types)] pub type f64m4x3 = Mat4x3<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn matches_4x4_counterpart() {
        let affine = f64m4x3::create_rotation_y(0.3) * f64m4x3::create_translation(f64v3::new(1.0, -2.0, 0.5));
        let full = f64m4::create_rotation_y(0.3) * f64m4::create_translation(f64v3::new(1.0, -2.0, 0.5));

        assert!(f64m4::from_mat4x3(affine).is_close_to(full, 1e-12));
        assert!(f64m4x3::from_mat4(full).is_close_to(affine, 1e-12));

        let point = f64v3::new(0.25, 4.0, -1.0);
        assert!(affine.transform_point(point).is_close_to(full.transform_point(point), 1e-12));
    }

    #[test]
    fn rotation_x_quarter_turn() {
        let mat = f32m4x3::create_rotation_x(core::f32::consts::FRAC_PI_2);
        let res = mat.transform_point(f32v3::new(0.0, 1.0, 0.0));
        assert!(res.is_close_to(f32v3::new(0.0, 0.0, 1.0), 1e-6));
    }

    #[test]
    fn display() {
        let mat = f32m4x3::identity();
        assert_eq!(format!("{mat}"), "[[1, 0, 0], [0, 1, 0], [0, 0, 1], [0, 0, 0]]");
    }
}
