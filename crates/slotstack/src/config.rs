//! Stack construction parameters.

use crate::error::StackError;

/// Configuration for a [`ByteStack`](crate::ByteStack).
///
/// Fixes the initial slot count and the per-slot byte width. Validated when
/// the stack is built; the element size is immutable afterwards (except
/// through [`ByteStack::copy_from`](crate::ByteStack::copy_from), which
/// adopts the source's element size).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
    /// Number of slots to allocate up front. Must be at least 1.
    pub capacity: usize,

    /// Width of each slot in bytes. Must be at least 1.
    pub element_size: usize,
}

impl StackConfig {
    /// Slot count used by [`with_default_capacity`](Self::with_default_capacity).
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create a config with an explicit capacity and element size.
    pub fn new(capacity: usize, element_size: usize) -> Self {
        Self {
            capacity,
            element_size,
        }
    }

    /// Create a config whose slots are exactly `size_of::<T>()` bytes wide.
    pub fn for_type<T>(capacity: usize) -> Self {
        Self::new(capacity, std::mem::size_of::<T>())
    }

    /// Create a config with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn with_default_capacity(element_size: usize) -> Self {
        Self::new(Self::DEFAULT_CAPACITY, element_size)
    }

    /// Size of the backing buffer in bytes, or `None` on overflow.
    pub fn buffer_bytes(&self) -> Option<usize> {
        self.capacity.checked_mul(self.element_size)
    }

    /// Check the config and return the buffer size it requires.
    ///
    /// Capacity is checked before element size, so a config with both set
    /// to zero reports [`StackError::InvalidCapacity`].
    pub fn validate(&self) -> Result<usize, StackError> {
        if self.capacity == 0 {
            return Err(StackError::InvalidCapacity {
                requested: 0,
                length: 0,
            });
        }
        if self.element_size == 0 {
            return Err(StackError::InvalidElementSize { requested: 0 });
        }
        self.buffer_bytes()
            .ok_or(StackError::AllocationFailure {
                requested: usize::MAX,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_type_uses_type_size() {
        let config = StackConfig::for_type::<u64>(3);
        assert_eq!(config.element_size, 8);
        assert_eq!(config.buffer_bytes(), Some(24));
    }

    #[test]
    fn default_capacity_preserved() {
        let config = StackConfig::with_default_capacity(4);
        assert_eq!(config.capacity, StackConfig::DEFAULT_CAPACITY);
        assert_eq!(config.validate(), Ok(64));
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            StackConfig::new(0, 4).validate(),
            Err(StackError::InvalidCapacity {
                requested: 0,
                length: 0
            })
        );
    }

    #[test]
    fn zero_element_size_rejected() {
        assert_eq!(
            StackConfig::new(4, 0).validate(),
            Err(StackError::InvalidElementSize { requested: 0 })
        );
    }

    #[test]
    fn capacity_checked_before_element_size() {
        assert!(matches!(
            StackConfig::new(0, 0).validate(),
            Err(StackError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn overflowing_size_is_allocation_failure() {
        let config = StackConfig::new(usize::MAX, 2);
        assert_eq!(config.buffer_bytes(), None);
        assert_eq!(
            config.validate(),
            Err(StackError::AllocationFailure {
                requested: usize::MAX
            })
        );
    }
}
