//! Benchmark workloads and utilities for slotstack.
//!
//! - [`random_workload`]: deterministic push/pop sequence via seed
//! - [`run_with_doubling`]: replays a workload, doubling capacity on `Full`
//! - [`drain_read_before_pop`]: empties a stack, reading each top first

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slotstack::{ByteStack, StackError};

/// One step of a stack workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Push a 4-byte value.
    Push(u32),
    /// Pop the top value.
    Pop,
}

/// Generate `len` operations where roughly `push_percent`% are pushes.
///
/// Same seed, same sequence.
pub fn random_workload(seed: u64, len: usize, push_percent: u32) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.next_u32() % 100 < push_percent {
                Op::Push(rng.next_u32())
            } else {
                Op::Pop
            }
        })
        .collect()
}

/// Replay `ops` against a 4-byte-slot stack.
///
/// A full stack is doubled and the push retried; popping an empty stack is
/// skipped. Returns the number of resizes performed.
pub fn run_with_doubling(stack: &mut ByteStack, ops: &[Op]) -> Result<usize, StackError> {
    let mut resizes = 0;
    for op in ops {
        match *op {
            Op::Push(value) => match stack.push(&value.to_ne_bytes()) {
                Err(StackError::Full { capacity }) => {
                    stack.resize(capacity * 2)?;
                    resizes += 1;
                    stack.push(&value.to_ne_bytes())?;
                }
                other => other?,
            },
            Op::Pop => match stack.pop() {
                Err(StackError::Empty) => {}
                other => other?,
            },
        }
    }
    Ok(resizes)
}

/// Pop every element, reading each one before it is popped.
///
/// Returns the values top first. Fails with
/// [`StackError::ElementSizeMismatch`] before popping anything if the
/// stack's slots are not 4 bytes wide.
pub fn drain_read_before_pop(stack: &mut ByteStack) -> Result<Vec<u32>, StackError> {
    let element_size = stack.element_size();
    if element_size != WORD_BYTES {
        return Err(StackError::ElementSizeMismatch {
            expected: WORD_BYTES,
            actual: element_size,
        });
    }
    let mut values = Vec::with_capacity(stack.len());
    while let Some(top) = stack.top() {
        values.push(bytemuck::pod_read_unaligned(top));
        stack.pop()?;
    }
    Ok(values)
}

const WORD_BYTES: usize = std::mem::size_of::<u32>();
