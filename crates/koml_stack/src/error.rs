use thiserror::Error;

/// Errors produced by a [`MatrixStack`](crate::MatrixStack)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("matrix stack overflow, all {capacity} slots are in use")]
    Overflow { capacity: usize },
    #[error("matrix stack underflow, there is no saved matrix to restore")]
    Underflow,
    #[error("truncated matrix stack data, needed {needed} bytes but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },
    #[error("matrix stack data has a negative depth of {0}")]
    NegativeDepth(i32),
    #[error("matrix stack data has a depth of {depth}, which exceeds the capacity of {capacity}")]
    DepthExceedsCapacity { depth: usize, capacity: usize },
}

pub type Result<T> = core::result::Result<T, StackError>;
