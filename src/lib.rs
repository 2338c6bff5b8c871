//! Koml: geometry for real-time rendering code
//!
//! - [`math`]: vectors, matrices, rays and axis-aligned bounding boxes
//! - [`stack`]: matrix stacks for nested transforms, with a binary form
//!
//! The `stack_logging` feature forwards to `koml_stack/stack_logging`.

pub use koml_math as math;
pub use koml_stack as stack;

pub mod prelude {
    pub use koml_math::*;
    pub use koml_stack::{MatrixStack, Mat4Stack, Mat4x3Stack, StackLimit, StackError, StackMatrix};
}
