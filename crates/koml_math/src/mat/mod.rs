use core::{
    fmt::{self, Display},
    ops::*,
};
use crate::{numeric::*, vec::*};

mod mat4;
pub use mat4::*;

mod mat4x3;
pub use mat4x3::*;

/// Place a 3D point under a transform.
///
/// Implemented by every affine-capable matrix, so bounding volume code can be written once and dispatched statically.
pub trait TransformPoint<T: Real> {
    /// Transform `point` as a position (implicit w-coord with a value of 1)
    fn transform_point(&self, point: Vec3<T>) -> Vec3<T>;

    /// Transform a corner of a bounding volume, which may lie at infinity
    ///
    /// Same as [`TransformPoint::transform_point`], except that a zero coefficient contributes 0 instead of `0 * inf = NaN`,
    /// so identities, translations and axis-aligned scales keep unbounded axes unbounded.
    fn transform_bound(&self, point: Vec3<T>) -> Vec3<T>;
}

/// `coeff * val`, with a zero `coeff` annihilating an infinite `val`
#[inline(always)]
fn mul_bound<T: Real>(coeff: T, val: T) -> T {
    if coeff == T::zero() { T::zero() } else { coeff * val }
}

macro_rules! matrix_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

macro_rules! generic_matrix {
    {$docs:meta; $name:ident, $m:literal, $n:literal} => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $name<T: Real> {
            vals : [T; $m * $n]
        }

        impl<T: Real> $name<T> {
            /// Number of rows
            pub const ROWS : usize = $m;
            /// Number of stored columns
            pub const COLUMNS : usize = $n;

            /// Create a matrix from an array, in row-major order
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }

            /// Get the content of the matrix as an array, in row-major order
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $m * $n] {
                self.vals
            }

            /// Get a reference to the content of the matrix as an array, in row-major order
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $m * $n] {
                &self.vals
            }

            /// Get the element at `row` and `column`
            #[inline(always)]
            #[must_use]
            pub fn element(&self, row: usize, column: usize) -> T {
                self[(row, column)]
            }

            /// Set the element at `row` and `column`
            #[inline(always)]
            pub fn set_element(&mut self, row: usize, column: usize, val: T) {
                self[(row, column)] = val;
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.vals[index]
            }
        }

        impl<T: Real> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, index: (usize, usize)) -> &Self::Output {
                debug_assert!(index.0 < $m);
                debug_assert!(index.1 < $n);
                &self.vals[index.0 * $n + index.1]
            }
        }

        impl<T: Real> IndexMut<(usize, usize)> for $name<T> {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
                debug_assert!(index.0 < $m);
                debug_assert!(index.1 < $n);
                &mut self.vals[index.0 * $n + index.1]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                let mut res = self;
                res += rhs;
                res
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (dst, src) in self.vals.iter_mut().zip(rhs.vals) {
                    *dst += src;
                }
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                let mut res = self;
                res -= rhs;
                res
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (dst, src) in self.vals.iter_mut().zip(rhs.vals) {
                    *dst -= src;
                }
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val * rhs) }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val *= rhs;
                }
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $m * $n] }
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals).all(|(&a, b)| a.is_close_to(b, epsilon))
            }
        }

        impl<T: Real + NumericCast<U>, U: Real> NumericCast<$name<U>> for $name<T> {
            fn cast(self) -> $name<U> {
                $name { vals: self.vals.map(|val| val.cast()) }
            }
        }

        impl<T: Real> Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for row in 0..$m {
                    if row != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("[")?;
                    for column in 0..$n {
                        if column != 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", self[(row, column)])?;
                    }
                    f.write_str("]")?;
                }
                f.write_str("]")
            }
        }

        matrix_pre_multiplication!{$name, f32, f64}
    };
}
pub(crate) use generic_matrix;
pub(crate) use matrix_pre_multiplication;

static_assertions::assert_eq_size!(Mat4<f32>, [f32; 16]);
static_assertions::assert_eq_size!(Mat4x3<f32>, [f32; 12]);
