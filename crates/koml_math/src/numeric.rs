use core::{
    fmt::{Debug, Display},
    ops::*,
};

/// Types with an additive identity
pub trait Zero {
    fn zero() -> Self;
}

/// Types with a multiplicative identity
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_identities {
    {$($ty:ty => $zero:literal, $one:literal);* $(;)?} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { $zero }
            }

            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { $one }
            }
        )*
    };
}
impl_identities!{
    i32 => 0, 1;
    i64 => 0, 1;
    f32 => 0f32, 1f32;
    f64 => 0f64, 1f64;
}

/// Arithmetic shared by every scalar a vector or matrix can hold
pub trait NumericBase : Sized + Clone + Copy + One + Zero + PartialEq + PartialOrd +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign
{
    /// Machine epsilon
    const EPSILON : Self;

    /// Smallest of `self` and `rhs`
    ///
    /// For floating point values, a NaN operand is ignored in favour of the other operand.
    fn min(self, rhs: Self) -> Self;
    /// Largest of `self` and `rhs`
    ///
    /// For floating point values, a NaN operand is ignored in favour of the other operand.
    fn max(self, rhs: Self) -> Self;

    /// Restrict `self` to `[min, max]`
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// `|self - rhs|`
    fn abs_diff(self, rhs: Self) -> Self;
    /// `|self|`
    fn abs(self) -> Self;

    /// Square root, truncated for integers
    fn sqrt(self) -> Self;

    /// Convert a small integer constant into this scalar
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_numeric {
    {@int $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = <$ty>::EPSILON;

            fn min(self, rhs: Self) -> Self {
                <$ty>::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                <$ty>::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}

impl_numeric!{ @int i32 }
impl_numeric!{ @int i64 }
impl_numeric!{ @fp f32 }
impl_numeric!{ @fp f64 }

/// Equality within a tolerance
pub trait ApproxEq : Sized {
    type Epsilon : NumericBase;

    /// Check if every component of `self` lies within `epsilon` of `rhs`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// [`ApproxEq::is_close_to`] with the machine epsilon as tolerance
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::Epsilon::EPSILON)
    }
}

/// Comparison against zero within a tolerance
pub trait ApproxZero : Sized {
    type Epsilon: NumericBase;

    /// Check if every component of `self` lies within `epsilon` of 0
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;

    /// [`ApproxZero::is_close_to_zero`] with the machine epsilon as tolerance
    fn is_zero(self) -> bool {
        self.is_close_to_zero(Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs_diff(self, rhs) <= epsilon
                }
            }

            impl ApproxZero for $ty {
                type Epsilon = $ty;

                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs(self) <= epsilon
                }
            }
        )*
    };
}
impl_approx!{i32, i64, f32, f64}

/// A scalar usable as a vector component
pub trait Numeric : NumericBase + ApproxEq<Epsilon = Self> + ApproxZero<Epsilon = Self> + Debug + Display {}

impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// A scalar that can be negated
pub trait Signed : Numeric + Neg<Output = Self> {}

impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for f32 {}
impl Signed for f64 {}

/// A floating point scalar, usable for geometry
pub trait Real : Signed + NumericCast<Self> {
    /// Positive infinity, the lower bound of an empty range
    const INFINITY : Self;
    /// Negative infinity, the upper bound of an empty range
    const NEG_INFINITY : Self;
    /// One half
    const HALF : Self;

    /// `1 / self`, 0 maps to an infinity with the same sign
    fn recip(self) -> Self;

    /// Check if the value is neither infinite nor NaN
    fn is_finite(self) -> bool;
    /// Check if the value is NaN
    fn is_nan(self) -> bool;
    /// Check if the sign bit is set, this includes `-0.0`
    fn is_sign_negative(self) -> bool;

    /// Sine, in radians
    fn sin(self) -> Self;
    /// Cosine, in radians
    fn cos(self) -> Self;
    /// Sine and cosine, in radians
    fn sin_cos(self) -> (Self, Self);

    /// Convert from `f32`, rounding when narrowing
    fn from_f32(val: f32) -> Self;
    /// Convert from `f64`, rounding when narrowing
    fn from_f64(val: f64) -> Self;
    /// Widen to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            const INFINITY : Self = <$ty>::INFINITY;
            const NEG_INFINITY : Self = <$ty>::NEG_INFINITY;
            const HALF : Self = 0.5;

            fn recip(self) -> Self {
                <$ty>::recip(self)
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            fn cos(self) -> Self {
                <$ty>::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                <$ty>::sin_cos(self)
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}

/// Explicit conversion between numeric types, component-wise for compound types
///
/// Narrowing conversions round to the nearest representable value (`f64` -> `f32`) or truncate (`f32` -> `i32`).
pub trait NumericCast<U> {
    fn cast(self) -> U;
}

macro_rules! impl_numeric_cast {
    {$from:ty => $($to:ty),*} => {
        $(
            impl NumericCast<$to> for $from {
                #[inline(always)]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}
impl_numeric_cast!{i32 => i32, i64, f32, f64}
impl_numeric_cast!{i64 => i32, i64, f32, f64}
impl_numeric_cast!{f32 => i32, i64, f32, f64}
impl_numeric_cast!{f64 => i32, i64, f32, f64}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_min_max_ignore_nan() {
        assert_eq!(NumericBase::min(f32::NAN, 1.0f32), 1.0);
        assert_eq!(NumericBase::max(2.0f64, f64::NAN), 2.0);
        assert_eq!(NumericBase::min(f64::INFINITY, -3.0), -3.0);
    }

    #[test]
    fn approx() {
        assert!(0.1f32.is_close_to(0.1000001, 0.00001));
        assert!(!1.0f64.is_close_to(1.1, 0.01));
        assert!((-0.0f32).is_zero());
        assert!(3i32.is_approx_eq(3));
    }

    #[test]
    fn sign_bit() {
        assert!((-0.0f64).is_sign_negative());
        assert!(!0.0f32.is_sign_negative());
        assert!(f32::NEG_INFINITY.is_sign_negative());
    }

    #[test]
    fn casts() {
        let val: f64 = 0.5f32.cast();
        assert_eq!(val, 0.5);
        let val: f32 = 1.0e300f64.cast();
        assert_eq!(val, f32::INFINITY);
        let val: i32 = (-2.7f32).cast();
        assert_eq!(val, -2);
    }
}
