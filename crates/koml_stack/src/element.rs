use core::{fmt::Debug, ops::Mul};
use bytes::{Buf, BufMut};
use koml_math::*;

/// A matrix that can be kept in a [`MatrixStack`](crate::MatrixStack)
///
/// The binary form is the row-major sequence of elements, each written big-endian.
pub trait StackMatrix : Copy + PartialEq + Debug + Mul<Output = Self> {
    /// Size of a single encoded matrix, in bytes
    const ENCODED_LEN : usize;

    /// The matrix a cleared stack starts from
    fn identity() -> Self;

    /// Write the matrix to `buf`
    fn encode<B: BufMut>(&self, buf: &mut B);

    /// Read a matrix from `buf`, the caller guarantees that at least `ENCODED_LEN` bytes remain
    fn decode<B: Buf>(buf: &mut B) -> Self;
}

macro_rules! impl_stack_matrix {
    {$($mat:ident<$ty:ty>, $len:literal, $put:ident, $get:ident);* $(;)?} => {
        $(
            impl StackMatrix for $mat<$ty> {
                const ENCODED_LEN : usize = $len * core::mem::size_of::<$ty>();

                fn identity() -> Self {
                    $mat::<$ty>::identity()
                }

                fn encode<B: BufMut>(&self, buf: &mut B) {
                    for &val in self.as_array() {
                        buf.$put(val);
                    }
                }

                fn decode<B: Buf>(buf: &mut B) -> Self {
                    let mut vals = [0 as $ty; $len];
                    for val in &mut vals {
                        *val = buf.$get();
                    }
                    Self::from_array(vals)
                }
            }
        )*
    };
}
impl_stack_matrix!{
    Mat4<f32>, 16, put_f32, get_f32;
    Mat4<f64>, 16, put_f64, get_f64;
    Mat4x3<f32>, 12, put_f32, get_f32;
    Mat4x3<f64>, 12, put_f64, get_f64;
}
