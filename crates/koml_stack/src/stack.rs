use bytes::{Buf, BufMut};
use cfg_if::cfg_if;
use koml_math::{Mat4, Mat4x3};

use crate::{Result, StackError, StackMatrix};

macro_rules! stack_trace {
    ($($arg:tt)*) => {
        cfg_if!{
            if #[cfg(feature = "stack_logging")] {
                tracing::trace!($($arg)*);
            }
        }
    };
}

/// How many matrices a [`MatrixStack`] can save
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StackLimit {
    /// At most the given number of saved matrices, the storage is allocated up front
    Bounded(usize),
    /// Grows as needed
    Unbounded,
}

/// A current matrix together with a history of saved matrices
///
/// [`MatrixStack::push`] saves a copy of the current matrix, [`MatrixStack::pop`] restores the most recently saved one.
/// The current matrix is not part of the history, so a stack with a depth of 0 still has a current matrix.
#[derive(Clone, PartialEq, Debug)]
pub struct MatrixStack<M: StackMatrix> {
    current : M,
    saved   : Vec<M>,
    limit   : StackLimit,
}

impl<M: StackMatrix> MatrixStack<M> {
    /// Create an empty stack, with the identity as its current matrix
    pub fn new(limit: StackLimit) -> Self {
        let saved = match limit {
            StackLimit::Bounded(capacity) => Vec::with_capacity(capacity),
            StackLimit::Unbounded => Vec::new(),
        };
        Self { current: M::identity(), saved, limit }
    }

    /// Create a stack that can save at most `capacity` matrices
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(StackLimit::Bounded(capacity))
    }

    /// Create a stack without a limit on the number of saved matrices
    pub fn unbounded() -> Self {
        Self::new(StackLimit::Unbounded)
    }

    /// Get the limit of the stack
    pub fn limit(&self) -> StackLimit {
        self.limit
    }

    /// Get the maximum number of saved matrices, `None` for an unbounded stack
    pub fn capacity(&self) -> Option<usize> {
        match self.limit {
            StackLimit::Bounded(capacity) => Some(capacity),
            StackLimit::Unbounded => None,
        }
    }

    /// Get the number of saved matrices
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Get the saved matrices, from the oldest to the most recent
    pub fn saved(&self) -> &[M] {
        &self.saved
    }

    /// Get the current matrix
    pub fn current(&self) -> &M {
        &self.current
    }

    /// Get a mutable reference to the current matrix
    pub fn current_mut(&mut self) -> &mut M {
        &mut self.current
    }

    /// Replace the current matrix, the saved matrices are untouched
    pub fn set_current(&mut self, mat: M) {
        self.current = mat;
    }

    /// Post-multiply the current matrix, `current = current * rhs`
    ///
    /// With row vectors, the current transform is applied before `rhs`.
    pub fn mul(&mut self, rhs: M) -> &mut Self {
        self.current = self.current * rhs;
        self
    }

    /// Pre-multiply the current matrix, `current = lhs * current`
    ///
    /// With row vectors, `lhs` is applied before the current transform, which nests a local transform inside it.
    pub fn pre_mul(&mut self, lhs: M) -> &mut Self {
        self.current = lhs * self.current;
        self
    }

    /// Save a copy of the current matrix
    ///
    /// Fails with [`StackError::Overflow`] when a bounded stack is full, the stack is unchanged in that case.
    pub fn push(&mut self) -> Result<&mut Self> {
        if let StackLimit::Bounded(capacity) = self.limit {
            if self.saved.len() >= capacity {
                tracing::debug!(capacity, "matrix stack overflow");
                return Err(StackError::Overflow { capacity });
            }
        }

        self.saved.push(self.current);
        stack_trace!(depth = self.saved.len(), "pushed matrix");
        Ok(self)
    }

    /// Restore the most recently saved matrix, returning the matrix that was current before
    ///
    /// Fails with [`StackError::Underflow`] when no matrix is saved.
    pub fn pop(&mut self) -> Result<M> {
        let restored = self.saved.pop().ok_or(StackError::Underflow)?;
        stack_trace!(depth = self.saved.len(), "popped matrix");
        Ok(core::mem::replace(&mut self.current, restored))
    }

    /// Run `f` between a push and a pop, so any change it makes to the current matrix is undone afterwards
    ///
    /// `f` must leave the depth as it found it, an unbalanced `f` results in [`StackError::Underflow`] or leaves saved matrices behind.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> Result<R> {
        self.push()?;
        let res = f(self);
        self.pop()?;
        Ok(res)
    }

    /// Drop all saved matrices and reset the current matrix to the identity
    pub fn clear(&mut self) {
        self.saved.clear();
        self.current = M::identity();
        stack_trace!("cleared matrix stack");
    }

    /// Size of the binary form of the stack, in bytes
    pub fn encoded_len(&self) -> usize {
        (self.saved.len() + 1) * M::ENCODED_LEN + core::mem::size_of::<i32>()
    }

    /// Write the stack to `buf`: the current matrix, the depth as a big-endian `i32`, then the saved matrices from oldest to most recent
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        self.current.encode(buf);
        // The depth of a bounded stack always fits, only an unbounded one can outgrow the format
        buf.put_i32(i32::try_from(self.saved.len()).unwrap_or(i32::MAX));
        for mat in self.saved.iter().take(i32::MAX as usize) {
            mat.encode(buf);
        }
    }

    /// Read a stack written by [`MatrixStack::encode`]
    ///
    /// `limit` does not need to match the stack that was written, but a bounded limit must be able to hold the stored depth.
    pub fn decode<B: Buf>(buf: &mut B, limit: StackLimit) -> Result<Self> {
        let header_len = M::ENCODED_LEN + core::mem::size_of::<i32>();
        ensure_remaining(buf, header_len)?;

        let current = M::decode(buf);
        let depth = buf.get_i32();
        let depth = usize::try_from(depth).map_err(|_| {
            tracing::debug!(depth, "rejecting matrix stack with a negative depth");
            StackError::NegativeDepth(depth)
        })?;

        if let StackLimit::Bounded(capacity) = limit {
            if depth > capacity {
                tracing::debug!(depth, capacity, "rejecting matrix stack that exceeds the capacity");
                return Err(StackError::DepthExceedsCapacity { depth, capacity });
            }
        }

        let body_len = depth.checked_mul(M::ENCODED_LEN).unwrap_or(usize::MAX);
        ensure_remaining(buf, body_len)?;

        let mut stack = Self::new(limit);
        stack.current = current;
        stack.saved.extend((0..depth).map(|_| M::decode(buf)));
        stack_trace!(depth, "decoded matrix stack");
        Ok(stack)
    }
}

impl<M: StackMatrix> Default for MatrixStack<M> {
    /// An unbounded stack
    fn default() -> Self {
        Self::unbounded()
    }
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        tracing::debug!(needed, remaining, "truncated matrix stack data");
        return Err(StackError::Truncated { needed, remaining });
    }
    Ok(())
}

pub type Mat4Stack<T> = MatrixStack<Mat4<T>>;
pub type Mat4x3Stack<T> = MatrixStack<Mat4x3<T>>;

#[cfg(test)]
mod tests {
    use koml_math::*;
    use super::*;

    #[test]
    fn push_pop_restores() {
        let mut stack = Mat4x3Stack::<f32>::with_capacity(4);
        assert_eq!(*stack.current(), f32m4x3::identity());

        let trans = f32m4x3::create_translation(f32v3::new(1.0, 0.0, 0.0));
        stack.set_current(trans);
        stack.push().unwrap().mul(f32m4x3::create_scale(f32v3::set(2.0)));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().transform_point(f32v3::zero()), f32v3::new(2.0, 0.0, 0.0));

        let popped = stack.pop().unwrap();
        assert_eq!(popped, trans * f32m4x3::create_scale(f32v3::set(2.0)));
        assert_eq!(*stack.current(), trans);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn bounded_overflow() {
        let mut stack = Mat4Stack::<f64>::with_capacity(2);
        stack.push().unwrap();
        stack.push().unwrap();
        assert_eq!(stack.push().unwrap_err(), StackError::Overflow { capacity: 2 });
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn underflow_leaves_current() {
        let mut stack = Mat4Stack::<f64>::unbounded();
        let scale = f64m4::create_scale(f64v3::set(3.0));
        stack.set_current(scale);
        assert_eq!(stack.pop().unwrap_err(), StackError::Underflow);
        assert_eq!(*stack.current(), scale);
    }

    #[test]
    fn unbounded_grows() {
        let mut stack = Mat4Stack::<f32>::default();
        for _ in 0..100 {
            stack.push().unwrap();
        }
        assert_eq!(stack.depth(), 100);
        assert_eq!(stack.capacity(), None);
    }

    #[test]
    fn clear_resets() {
        let mut stack = Mat4Stack::<f32>::with_capacity(3);
        stack.mul(f32m4::create_translation(f32v3::set(5.0)));
        stack.push().unwrap();
        stack.clear();
        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.current(), f32m4::identity());
        assert_eq!(stack.capacity(), Some(3));
    }

    #[test]
    fn pre_mul_nests_local_transform() {
        let mut stack = Mat4x3Stack::<f64>::unbounded();
        stack.set_current(f64m4x3::create_translation(f64v3::new(10.0, 0.0, 0.0)));
        stack.pre_mul(f64m4x3::create_scale(f64v3::set(2.0)));
        assert_eq!(stack.current().transform_point(f64v3::new(1.0, 1.0, 1.0)), f64v3::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn scoped_restores_current() {
        let mut stack = Mat4x3Stack::<f32>::with_capacity(1);
        let res = stack.scoped(|stack| {
            stack.mul(f32m4x3::create_scale(f32v3::set(4.0)));
            stack.current().transform_point(f32v3::set(1.0))
        });
        assert_eq!(res, Ok(f32v3::set(4.0)));
        assert_eq!(*stack.current(), f32m4x3::identity());
        assert_eq!(stack.depth(), 0);

        let mut full = Mat4x3Stack::<f32>::with_capacity(0);
        assert_eq!(full.scoped(|_| ()), Err(StackError::Overflow { capacity: 0 }));
    }
}
