//! Type-erased LIFO stack over fixed-size byte slots.
//!
//! A [`ByteStack`] owns one contiguous buffer of `capacity * element_size`
//! bytes, logically an array of `capacity` slots. Slots `0..len()` are
//! occupied; the top of the stack is slot `len() - 1`.
//!
//! # Read before pop
//!
//! [`pop`](ByteStack::pop) only lowers the occupied count. It neither
//! returns the removed element nor clears its bytes. A caller that needs the
//! value must read it with [`top`](ByteStack::top) *before* popping:
//!
//! ```
//! use slotstack::ByteStack;
//!
//! let mut stack = ByteStack::init(4, 4)?;
//! stack.push(&7u32.to_ne_bytes())?;
//!
//! let value = u32::from_ne_bytes(stack.top().unwrap().try_into().unwrap());
//! stack.pop()?;
//! assert_eq!(value, 7);
//! # Ok::<(), slotstack::StackError>(())
//! ```
//!
//! The popped slot keeps its old bytes until a later push overwrites them.
//! [`slot`](ByteStack::slot) exposes those stale bytes; [`get`] and
//! [`top`](ByteStack::top) never do.
//!
//! # Lifetime
//!
//! The buffer is released when the stack is dropped. [`teardown`] releases
//! it early and consumes the stack, so a torn-down stack cannot be used or
//! torn down again.
//!
//! [`get`]: ByteStack::get
//! [`teardown`]: ByteStack::teardown

use std::fmt;
use std::ops::Range;

use crate::config::StackConfig;
use crate::error::StackError;
use crate::raw::RawBuffer;

/// A resizable LIFO stack whose elements are opaque `element_size`-byte blocks.
///
/// Elements are copied in and out bitwise. The stack never interprets the
/// bytes, so any fixed-size value can be stored, but nothing referenced by
/// those bytes is owned or cleaned up by the stack.
pub struct ByteStack {
    buffer: RawBuffer,
    /// Number of occupied slots.
    length: usize,
    /// Number of slots the buffer holds.
    capacity: usize,
    /// Width of one slot in bytes.
    element_size: usize,
}

impl ByteStack {
    /// Allocate an empty stack of `capacity` slots, each `element_size` bytes.
    ///
    /// Fails with [`StackError::InvalidCapacity`] if `capacity` is zero,
    /// [`StackError::InvalidElementSize`] if `element_size` is zero, and
    /// [`StackError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn init(capacity: usize, element_size: usize) -> Result<Self, StackError> {
        Self::with_config(StackConfig::new(capacity, element_size))
    }

    /// Allocate an empty stack from a [`StackConfig`].
    pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
        let bytes = config.validate().map_err(|err| failed("init", err))?;
        let buffer = RawBuffer::allocate(bytes).map_err(|err| failed("init", err))?;
        Ok(Self {
            buffer,
            length: 0,
            capacity: config.capacity,
            element_size: config.element_size,
        })
    }

    /// Copy `element` into the next free slot.
    ///
    /// `element` must be exactly [`element_size`](Self::element_size) bytes.
    /// The stack never grows on its own: a full stack fails with
    /// [`StackError::Full`] and the caller decides whether to
    /// [`resize`](Self::resize) and retry.
    pub fn push(&mut self, element: &[u8]) -> Result<(), StackError> {
        if element.len() != self.element_size {
            return Err(failed(
                "push",
                StackError::ElementSizeMismatch {
                    expected: self.element_size,
                    actual: element.len(),
                },
            ));
        }
        if self.length == self.capacity {
            return Err(failed(
                "push",
                StackError::Full {
                    capacity: self.capacity,
                },
            ));
        }
        let range = self.slot_range(self.length);
        self.buffer.as_mut_slice()[range].copy_from_slice(element);
        self.length += 1;
        Ok(())
    }

    /// Remove the top element.
    ///
    /// Only the occupied count changes: the value is not returned and its
    /// bytes stay in the buffer. Read it with [`top`](Self::top) first.
    pub fn pop(&mut self) -> Result<(), StackError> {
        if self.length == 0 {
            return Err(failed("pop", StackError::Empty));
        }
        self.length -= 1;
        Ok(())
    }

    /// Change the number of slots to exactly `new_capacity`.
    ///
    /// Occupied slots keep their bytes and order; `len()` is unchanged.
    /// Shrinking below `len()` would discard live elements and is rejected
    /// with [`StackError::InvalidCapacity`], as is zero. If the allocator
    /// fails, the stack keeps its original buffer and capacity.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), StackError> {
        if new_capacity == 0 || new_capacity < self.length {
            return Err(failed(
                "resize",
                StackError::InvalidCapacity {
                    requested: new_capacity,
                    length: self.length,
                },
            ));
        }
        let bytes =
            byte_len(new_capacity, self.element_size).map_err(|err| failed("resize", err))?;
        self.buffer
            .reallocate(bytes)
            .map_err(|err| failed("resize", err))?;
        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity,
            element_size = self.element_size,
            "stack resized"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Overwrite this stack with the contents of `source`.
    ///
    /// The destination adopts `source`'s element size unconditionally, is
    /// resized to `source`'s capacity when they differ, and then holds a
    /// bitwise copy of `source`'s occupied slots. Bytes past the copied
    /// slots are unspecified.
    ///
    /// The resize follows [`resize`](Self::resize)'s rules against the
    /// destination's current length, so copying from a source whose capacity
    /// is below this stack's `len()` fails with
    /// [`StackError::InvalidCapacity`]. On any failure this stack is left
    /// unchanged.
    ///
    /// A [`StackError::AllocationFailure`] can only come from resizing the
    /// buffer, which keeps the old bytes on failure, and no field is updated
    /// until that resize has succeeded.
    pub fn copy_from(&mut self, source: &ByteStack) -> Result<(), StackError> {
        if source.capacity != self.capacity && source.capacity < self.length {
            return Err(failed(
                "copy",
                StackError::InvalidCapacity {
                    requested: source.capacity,
                    length: self.length,
                },
            ));
        }
        // Sized from the source buffer even when capacities match, since the
        // element size may differ.
        self.buffer
            .reallocate(source.buffer.len())
            .map_err(|err| failed("copy", err))?;
        self.buffer
            .copy_prefix_from(&source.buffer, source.length * source.element_size);
        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity = source.capacity,
            old_element_size = self.element_size,
            new_element_size = source.element_size,
            length = source.length,
            "stack copied"
        );
        self.element_size = source.element_size;
        self.capacity = source.capacity;
        self.length = source.length;
        Ok(())
    }

    /// Allocate a new stack holding a copy of this one.
    ///
    /// Same capacity, element size, and occupied slots. Stale bytes past
    /// `len()` are not carried over.
    pub fn try_clone(&self) -> Result<Self, StackError> {
        let mut clone = Self::init(self.capacity, self.element_size)?;
        clone.copy_from(self)?;
        Ok(clone)
    }

    /// Release the buffer now.
    ///
    /// Equivalent to dropping the stack, which happens automatically at the
    /// end of its scope. Taking `self` by value makes a second teardown, or
    /// any use after teardown, a compile error.
    pub fn teardown(self) {
        tracing::trace!(
            capacity = self.capacity,
            element_size = self.element_size,
            "stack torn down"
        );
        drop(self);
    }

    /// The top element's bytes, or `None` if the stack is empty.
    pub fn top(&self) -> Option<&[u8]> {
        self.length.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Mutable access to the top element's bytes.
    pub fn top_mut(&mut self) -> Option<&mut [u8]> {
        let index = self.length.checked_sub(1)?;
        let range = self.slot_range(index);
        Some(&mut self.buffer.as_mut_slice()[range])
    }

    /// The occupied slot at `index`, counted from the bottom.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.length {
            return None;
        }
        self.slot(index)
    }

    /// Raw view of any slot below the capacity, occupied or not.
    ///
    /// Slots at or past `len()` hold whatever was last written there (stale
    /// bytes from a popped element, or zeroes if never written).
    pub fn slot(&self, index: usize) -> Option<&[u8]> {
        if index >= self.capacity {
            return None;
        }
        Some(&self.buffer.as_slice()[self.slot_range(index)])
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of slots available without resizing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Width of each slot in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.length == self.capacity
    }

    /// Free slots left before a push fails with [`StackError::Full`].
    pub fn remaining(&self) -> usize {
        self.capacity - self.length
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.allocated_bytes()
    }

    fn slot_range(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }
}

impl fmt::Debug for ByteStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStack")
            .field("length", &self.length)
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size)
            .finish_non_exhaustive()
    }
}

fn byte_len(capacity: usize, element_size: usize) -> Result<usize, StackError> {
    capacity
        .checked_mul(element_size)
        .ok_or(StackError::AllocationFailure {
            requested: usize::MAX,
        })
}

fn failed(op: &'static str, err: StackError) -> StackError {
    tracing::debug!(op, error = %err, "stack operation failed");
    err
}
