//! Test fixtures and stack builders for slotstack development.
//!
//! Provides element types in [`fixtures`], a [`StackBuilder`] for setting
//! up a [`ByteStack`] in a known state, and small helpers for reading
//! `i32` slots and comparing occupied slots between stacks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use slotstack::{ByteStack, StackError};

/// Builder for a [`ByteStack`] pre-loaded with elements.
///
/// Elements are pushed bottom to top in the order they were added.
pub struct StackBuilder {
    capacity: usize,
    element_size: usize,
    elements: Vec<Vec<u8>>,
}

impl StackBuilder {
    pub fn new(capacity: usize, element_size: usize) -> Self {
        Self {
            capacity,
            element_size,
            elements: Vec::new(),
        }
    }

    /// Queue raw element bytes to be pushed.
    pub fn element(mut self, bytes: &[u8]) -> Self {
        self.elements.push(bytes.to_vec());
        self
    }

    /// Queue a plain-old-data value to be pushed.
    pub fn value<T: bytemuck::Pod>(self, value: T) -> Self {
        self.element(bytemuck::bytes_of(&value))
    }

    /// Allocate the stack and push every queued element.
    pub fn build(self) -> Result<ByteStack, StackError> {
        let mut stack = ByteStack::init(self.capacity, self.element_size)?;
        for element in &self.elements {
            stack.push(element)?;
        }
        Ok(stack)
    }
}

/// A stack of `capacity` 4-byte slots holding `values`, bottom first.
///
/// # Panics
///
/// Panics if `values` does not fit in `capacity`.
pub fn int_stack(capacity: usize, values: &[i32]) -> ByteStack {
    values
        .iter()
        .fold(StackBuilder::new(capacity, 4), |b, &v| b.value(v))
        .build()
        .expect("int_stack: values must fit in capacity")
}

/// Decode a 4-byte slot as a native-endian `i32`.
///
/// # Panics
///
/// Panics if `bytes` is not exactly 4 bytes long.
pub fn read_i32(bytes: &[u8]) -> i32 {
    bytemuck::pod_read_unaligned(bytes)
}

/// The occupied slots of `stack`, bottom first, as `i32`s.
pub fn occupied_i32s(stack: &ByteStack) -> Vec<i32> {
    (0..stack.len())
        .filter_map(|i| stack.get(i))
        .map(read_i32)
        .collect()
}

/// Assert that `a` and `b` agree on element size, length, and every
/// occupied slot's bytes.
///
/// # Panics
///
/// Panics with the first differing slot index.
pub fn assert_occupied_eq(a: &ByteStack, b: &ByteStack) {
    assert_eq!(a.element_size(), b.element_size(), "element sizes differ");
    assert_eq!(a.len(), b.len(), "lengths differ");
    for i in 0..a.len() {
        assert_eq!(a.get(i), b.get(i), "slot {i} differs");
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::Point;
    use super::*;

    #[test]
    fn builder_pushes_in_order() {
        let stack = StackBuilder::new(3, 8)
            .value(Point::new(1, 2))
            .value(Point::new(3, 4))
            .build()
            .unwrap();
        assert_eq!(stack.len(), 2);
        let top: Point = bytemuck::pod_read_unaligned(stack.top().unwrap());
        assert_eq!(top, Point::new(3, 4));
    }

    #[test]
    fn builder_propagates_full() {
        let result = StackBuilder::new(1, 1)
            .element(&[1])
            .element(&[2])
            .build();
        assert_eq!(result.unwrap_err(), StackError::Full { capacity: 1 });
    }

    #[test]
    fn int_stack_round_trips() {
        let stack = int_stack(4, &[-3, 0, 9]);
        assert_eq!(occupied_i32s(&stack), vec![-3, 0, 9]);
        assert_eq!(stack.capacity(), 4);
    }

    #[test]
    fn clones_compare_equal() {
        let stack = int_stack(2, &[5]);
        let clone = stack.try_clone().unwrap();
        assert_occupied_eq(&stack, &clone);
    }
}
