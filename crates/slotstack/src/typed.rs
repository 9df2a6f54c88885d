//! Statically typed stack layered over [`ByteStack`].
//!
//! [`TypedStack<T>`] fixes the slot width to `size_of::<T>()` and moves
//! values in and out through [`bytemuck`], so slot sizes can never disagree
//! with the element type. Its [`pop`](TypedStack::pop) returns the removed
//! value; [`discard`](TypedStack::discard) keeps the decrement-only form.

use std::fmt;
use std::marker::PhantomData;

use bytemuck::Pod;

use crate::byte_stack::ByteStack;
use crate::config::StackConfig;
use crate::error::StackError;

/// A resizable LIFO stack of plain-old-data values.
///
/// Zero-sized `T` is rejected at construction with
/// [`StackError::InvalidElementSize`].
///
/// ```
/// use slotstack::TypedStack;
///
/// let mut stack = TypedStack::<u32>::new(2)?;
/// stack.push(1)?;
/// stack.push(2)?;
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.peek(), Some(1));
/// # Ok::<(), slotstack::StackError>(())
/// ```
pub struct TypedStack<T: Pod> {
    inner: ByteStack,
    _marker: PhantomData<T>,
}

impl<T: Pod> TypedStack<T> {
    /// Allocate an empty stack with room for `capacity` values.
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        let inner = ByteStack::with_config(StackConfig::for_type::<T>(capacity))?;
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    /// Push a copy of `value`. Fails with [`StackError::Full`] when full.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        self.inner.push(bytemuck::bytes_of(&value))
    }

    /// Remove and return the top value.
    ///
    /// The value is read before the length is lowered, matching the
    /// read-before-pop contract of [`ByteStack::pop`].
    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.peek() {
            Some(value) => {
                self.inner.pop()?;
                Ok(value)
            }
            // Empty: let the inner pop report and log the failure.
            None => self.inner.pop().and(Err(StackError::Empty)),
        }
    }

    /// Remove the top value without reading it.
    pub fn discard(&mut self) -> Result<(), StackError> {
        self.inner.pop()
    }

    /// Copy of the top value, or `None` if empty.
    pub fn peek(&self) -> Option<T> {
        self.inner.top().map(bytemuck::pod_read_unaligned)
    }

    /// Copy of the occupied value at `index`, counted from the bottom.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.get(index).map(bytemuck::pod_read_unaligned)
    }

    /// See [`ByteStack::resize`].
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), StackError> {
        self.inner.resize(new_capacity)
    }

    /// Overwrite this stack with the contents of `source`.
    ///
    /// See [`ByteStack::copy_from`]; the element size cannot change here.
    pub fn copy_from(&mut self, source: &TypedStack<T>) -> Result<(), StackError> {
        self.inner.copy_from(&source.inner)
    }

    /// Allocate a new stack holding a copy of this one.
    pub fn try_clone(&self) -> Result<Self, StackError> {
        Ok(Self {
            inner: self.inner.try_clone()?,
            _marker: PhantomData,
        })
    }

    /// Release the buffer now. See [`ByteStack::teardown`].
    pub fn teardown(self) {
        self.inner.teardown();
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Number of values the stack holds without resizing.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `true` if a push would fail with [`StackError::Full`].
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// The type-erased view of this stack.
    pub fn as_bytes(&self) -> &ByteStack {
        &self.inner
    }

    /// Give up the element type and keep the underlying [`ByteStack`].
    pub fn into_inner(self) -> ByteStack {
        self.inner
    }
}

impl<T: Pod> fmt::Debug for TypedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedStack")
            .field("element", &std::any::type_name::<T>())
            .field("length", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_type_rejected() {
        assert!(matches!(
            TypedStack::<[u8; 0]>::new(4),
            Err(StackError::InvalidElementSize { requested: 0 })
        ));
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            TypedStack::<u64>::new(0),
            Err(StackError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn pop_returns_values_in_lifo_order() {
        let mut stack = TypedStack::<i64>::new(3).unwrap();
        for v in [-1, 0, 1] {
            stack.push(v).unwrap();
        }
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Ok(0));
        assert_eq!(stack.pop(), Ok(-1));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn pop_reads_top_then_lowers_length() {
        let mut stack = TypedStack::<u32>::new(2).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(1));
        assert_eq!(stack.as_bytes().slot(1), Some(&2u32.to_ne_bytes()[..]));

        stack.discard().unwrap();
        assert_eq!(stack.pop(), Err(StackError::Empty));
        assert!(stack.is_empty());
    }

    #[test]
    fn discard_drops_without_reading() {
        let mut stack = TypedStack::<u16>::new(2).unwrap();
        stack.push(5).unwrap();
        stack.push(6).unwrap();
        stack.discard().unwrap();
        assert_eq!(stack.peek(), Some(5));
        assert_eq!(stack.as_bytes().slot(1), Some(&6u16.to_ne_bytes()[..]));
    }

    #[test]
    fn full_push_leaves_stack_unchanged() {
        let mut stack = TypedStack::<u8>::new(1).unwrap();
        stack.push(1).unwrap();
        assert_eq!(stack.push(2), Err(StackError::Full { capacity: 1 }));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(1));
    }

    #[test]
    fn resize_then_push() {
        let mut stack = TypedStack::<f32>::new(1).unwrap();
        stack.push(1.5).unwrap();
        assert!(stack.is_full());
        stack.resize(2).unwrap();
        stack.push(2.5).unwrap();
        assert_eq!(stack.get(0), Some(1.5));
        assert_eq!(stack.get(1), Some(2.5));
        assert_eq!(stack.get(2), None);
    }

    #[test]
    fn copy_from_and_clone() {
        let mut src = TypedStack::<u32>::new(4).unwrap();
        src.push(7).unwrap();
        src.push(8).unwrap();

        let mut dst = TypedStack::<u32>::new(1).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst.capacity(), 4);
        assert_eq!(dst.pop(), Ok(8));

        let clone = src.try_clone().unwrap();
        assert_eq!(clone.len(), 2);
        assert_eq!(clone.peek(), Some(8));
    }

    #[test]
    fn into_inner_keeps_bytes() {
        let mut stack = TypedStack::<u32>::new(2).unwrap();
        stack.push(0xDEAD_BEEF).unwrap();
        let bytes = stack.into_inner();
        assert_eq!(bytes.element_size(), 4);
        assert_eq!(bytes.top(), Some(&0xDEAD_BEEFu32.to_ne_bytes()[..]));
    }

    #[test]
    fn debug_names_element_type() {
        let stack = TypedStack::<u32>::new(2).unwrap();
        let rendered = format!("{stack:?}");
        assert!(rendered.contains("u32"));
        assert!(rendered.contains("capacity: 2"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pops_mirror_pushes(values in proptest::collection::vec(any::<u64>(), 1..64)) {
                let mut stack = TypedStack::<u64>::new(values.len()).unwrap();
                for &v in &values {
                    stack.push(v).unwrap();
                }
                for &v in values.iter().rev() {
                    prop_assert_eq!(stack.pop(), Ok(v));
                }
                prop_assert!(stack.is_empty());
            }
        }
    }
}
