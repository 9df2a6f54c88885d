//! Fallible byte-buffer allocation.
//!
//! [`RawBuffer`] owns the single contiguous allocation behind a stack. All
//! reservations go through `Vec::try_reserve_exact`, so running out of
//! memory surfaces as [`StackError::AllocationFailure`] instead of aborting.
//! Bytes are zeroed when they first become part of the buffer, which keeps
//! every byte initialised and lets the crate stay free of `unsafe`.

use std::cmp::Ordering;

use crate::error::StackError;

/// A zero-initialised, exactly-sized, fallibly allocated byte buffer.
#[derive(Debug)]
pub(crate) struct RawBuffer {
    /// Backing storage. `data.len()` is the logical buffer size.
    data: Vec<u8>,
}

impl RawBuffer {
    /// Allocate `bytes` zeroed bytes.
    pub(crate) fn allocate(bytes: usize) -> Result<Self, StackError> {
        let mut data = Vec::new();
        reserve(&mut data, bytes, bytes)?;
        data.resize(bytes, 0);
        Ok(Self { data })
    }

    /// Grow or shrink the buffer to exactly `new_bytes`.
    ///
    /// The first `min(len, new_bytes)` bytes are preserved and any new tail
    /// is zeroed. On failure the buffer is left untouched.
    pub(crate) fn reallocate(&mut self, new_bytes: usize) -> Result<(), StackError> {
        match new_bytes.cmp(&self.data.len()) {
            Ordering::Equal => Ok(()),
            Ordering::Greater => {
                let additional = new_bytes - self.data.len();
                reserve(&mut self.data, additional, new_bytes)?;
                self.data.resize(new_bytes, 0);
                Ok(())
            }
            Ordering::Less => {
                // A fresh exact-size buffer, so the shrink itself can fail
                // without disturbing the old one.
                let mut fresh = Vec::new();
                reserve(&mut fresh, new_bytes, new_bytes)?;
                fresh.extend_from_slice(&self.data[..new_bytes]);
                self.data = fresh;
                Ok(())
            }
        }
    }

    /// Overwrite the first `bytes` bytes with those of `source`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer is shorter than `bytes`.
    pub(crate) fn copy_prefix_from(&mut self, source: &RawBuffer, bytes: usize) {
        self.data[..bytes].copy_from_slice(&source.data[..bytes]);
    }

    /// Logical size in bytes.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Bytes actually held from the allocator.
    pub(crate) fn allocated_bytes(&self) -> usize {
        self.data.capacity()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn reserve(data: &mut Vec<u8>, additional: usize, requested: usize) -> Result<(), StackError> {
    data.try_reserve_exact(additional).map_err(|err| {
        tracing::warn!(requested, error = %err, "byte buffer allocation failed");
        StackError::AllocationFailure { requested }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_zeroed_and_exact() {
        let buf = RawBuffer::allocate(12).unwrap();
        assert_eq!(buf.len(), 12);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
        assert!(buf.allocated_bytes() >= 12);
    }

    #[test]
    fn grow_preserves_prefix_and_zeroes_tail() {
        let mut buf = RawBuffer::allocate(4).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
        buf.reallocate(8).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn shrink_preserves_prefix() {
        let mut buf = RawBuffer::allocate(6).unwrap();
        buf.as_mut_slice().copy_from_slice(&[9, 8, 7, 6, 5, 4]);
        buf.reallocate(3).unwrap();
        assert_eq!(buf.as_slice(), &[9, 8, 7]);
    }

    #[test]
    fn same_size_reallocate_is_noop() {
        let mut buf = RawBuffer::allocate(5).unwrap();
        buf.as_mut_slice()[0] = 42;
        buf.reallocate(5).unwrap();
        assert_eq!(buf.as_slice()[0], 42);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn impossible_allocation_returns_error_not_abort() {
        let result = RawBuffer::allocate(usize::MAX);
        assert_eq!(
            result.unwrap_err(),
            StackError::AllocationFailure {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn failed_growth_leaves_buffer_intact() {
        let mut buf = RawBuffer::allocate(4).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
        let err = buf.reallocate(usize::MAX).unwrap_err();
        assert!(matches!(err, StackError::AllocationFailure { .. }));
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn copy_prefix_overwrites_only_prefix() {
        let mut src = RawBuffer::allocate(4).unwrap();
        src.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
        let mut dst = RawBuffer::allocate(4).unwrap();
        dst.as_mut_slice().copy_from_slice(&[9, 9, 9, 9]);
        dst.copy_prefix_from(&src, 2);
        assert_eq!(dst.as_slice(), &[1, 2, 9, 9]);
    }
}
