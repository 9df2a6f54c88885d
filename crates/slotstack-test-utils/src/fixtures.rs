//! Plain-old-data element types for exercising stacks.
//!
//! - [`Point`] — two `i32` coordinates, 8 bytes.
//! - [`Packet`] — a mixed-width header record, 8 bytes with no padding.
//! - [`Wide`] — a 40-byte record, wider than any primitive.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Packet {
    pub id: u32,
    pub flags: u16,
    pub kind: u8,
    pub ttl: u8,
}

/// Five `u64` lanes; `Wide::splat(n)` fills every lane with `n`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Wide {
    pub lanes: [u64; 5],
}

impl Wide {
    pub fn splat(value: u64) -> Self {
        Self { lanes: [value; 5] }
    }
}
