use core::{
    fmt::{self, Display},
    ops::*,
};
use crate::numeric::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

macro_rules! generic_vec {
    {@op $name:ident, $op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident, $tok:tt, $tok_assign:tt, $($comp:ident),+} => {
        impl<T: Numeric> $op for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp $tok rhs.$comp),+ }
            }
        }

        impl<T: Numeric> $op_assign for $name<T> {
            #[inline(always)]
            fn $op_assign_fn(&mut self, rhs: Self) {
                $(self.$comp $tok_assign rhs.$comp;)+
            }
        }

        impl<T: Numeric> $op<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp $tok rhs),+ }
            }
        }

        impl<T: Numeric> $op_assign<T> for $name<T> {
            #[inline(always)]
            fn $op_assign_fn(&mut self, rhs: T) {
                $(self.$comp $tok_assign rhs;)+
            }
        }
    };
    {@display $self:ident, $f:ident, $first:ident $(, $comp:ident)*} => {
        write!($f, "{}", $self.$first)?;
        $(write!($f, ", {}", $self.$comp)?;)*
    };
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident => $idx:tt),+;
        $($alias_ty:ident => $base_ty:ty)*
    } => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $name<T: Numeric> {
            $(pub $comp: T,)+
        }

        impl<T: Numeric> $name<T> {
            #[doc = concat!("Create a new ", stringify!($name), ".")]
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp: $comp),+ }
            }

            #[doc = concat!("Create a ", stringify!($name), " with all components set to `val`.")]
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                Self{ $($comp: val),+ }
            }

            #[doc = concat!("Create a ", stringify!($name), " from an array.")]
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                Self{ $($comp: arr[$idx]),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

        //--------------------------------------------------------------

            /// Component-wise minimum of 2 vectors
            #[inline]
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Component-wise maximum of 2 vectors
            #[inline]
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            /// Component-wise clamp of the vector
            #[inline]
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self{ $($comp: self.$comp.clamp(min.$comp, max.$comp)),+ }
            }

            /// Component-wise absolute value
            #[inline]
            #[must_use]
            pub fn abs(self) -> Self {
                Self{ $($comp: self.$comp.abs()),+ }
            }

            /// Get the smallest component of the vector
            #[must_use]
            pub fn min_component(self) -> T {
                let arr = self.to_array();
                arr[1..].iter().fold(arr[0], |acc, &val| acc.min(val))
            }

            /// Get the largest component of the vector
            #[must_use]
            pub fn max_component(self) -> T {
                let arr = self.to_array();
                arr[1..].iter().fold(arr[0], |acc, &val| acc.max(val))
            }

            /// Calculate the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                let prods = [$(self.$comp * rhs.$comp),+];
                prods[1..].iter().fold(prods[0], |acc, &val| acc + val)
            }

            /// Calculate the square length of the vector
            #[inline]
            #[must_use]
            pub fn len_sq(self) -> T {
                self.dot(self)
            }

            /// Calculate the length of the vector
            #[inline]
            #[must_use]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist_sq(self, other: Self) -> T {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist(self, other: Self) -> T {
                self.dist_sq(other).sqrt()
            }
        }

        impl<T: Real> $name<T> {
            /// Normalize the vector, a zero-length vector is returned unchanged
            #[must_use]
            pub fn normalize(self) -> Self {
                let len_sq = self.len_sq();
                if len_sq.is_zero() {
                    self
                } else {
                    self * len_sq.sqrt().recip()
                }
            }

            /// Check if the vector is close to being normalized, using a given epsilon
            #[must_use]
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                self.len_sq().is_close_to(T::one(), epsilon)
            }

            /// Component-wise reciprocal, zero components become infinities
            #[inline]
            #[must_use]
            pub fn recip(self) -> Self {
                Self{ $($comp: self.$comp.recip()),+ }
            }
        }

        impl<T: Numeric> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$comp,)+
                    _ => panic!(concat!("index out of range for ", stringify!($name), ": {}"), index),
                }
            }
        }

        impl<T: Numeric> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$comp,)+
                    _ => panic!(concat!("index out of range for ", stringify!($name), ": {}"), index),
                }
            }
        }

        impl<T: Numeric> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        impl<T: Numeric> One for $name<T> {
            fn one() -> Self {
                Self{ $($comp: T::one()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $crate::vec::generic_vec!{ @op $name, Add, add, AddAssign, add_assign, +, +=, $($comp),+ }
        $crate::vec::generic_vec!{ @op $name, Sub, sub, SubAssign, sub_assign, -, -=, $($comp),+ }
        $crate::vec::generic_vec!{ @op $name, Mul, mul, MulAssign, mul_assign, *, *=, $($comp),+ }
        $crate::vec::generic_vec!{ @op $name, Div, div, DivAssign, div_assign, /, /=, $($comp),+ }

        impl<T: Signed> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        // Scalar pre-multiplication can't be implemented generically
        $(
            impl Mul<$name<$base_ty>> for $base_ty {
                type Output = $name<$base_ty>;

                #[inline(always)]
                fn mul(self, rhs: $name<$base_ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Numeric> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        impl<T: Numeric> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Numeric> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Numeric + NumericCast<U>, U: Numeric> NumericCast<$name<U>> for $name<T> {
            fn cast(self) -> $name<U> {
                $name{ $($comp: self.$comp.cast()),+ }
            }
        }

        impl<T: Numeric> Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                $crate::vec::generic_vec!{ @display self, f, $($comp),+ }
                f.write_str(")")
            }
        }

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}
pub(crate) use generic_vec;

// Tightly packed, so slices of vectors can be handed out as flat scalar buffers
static_assertions::assert_eq_size!(Vec2<f32>, [f32; 2]);
static_assertions::assert_eq_size!(Vec3<f32>, [f32; 3]);
static_assertions::assert_eq_size!(Vec4<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Vec3<f64>, [f64; 3]);
static_assertions::assert_eq_size!(Vec3<i32>, [i32; 3]);
