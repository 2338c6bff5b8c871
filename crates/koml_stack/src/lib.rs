//! Bounded and unbounded stacks of transformation matrices
//!
//! A [`MatrixStack`] keeps a current matrix and a history of saved ones, so nested transforms can be built up and undone.
//! Stacks can be written to and read from a compact big-endian binary form.
//!
//! Enabling the `stack_logging` feature emits a `tracing` trace event for every push, pop and clear.

mod error;
pub use error::*;

mod element;
pub use element::*;

mod stack;
pub use stack::*;
