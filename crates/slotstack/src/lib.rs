//! Resizable LIFO stacks over fixed-size elements.
//!
//! Each stack owns one contiguous, exactly-sized heap buffer divided into
//! equal slots. Every operation either applies fully or fails with a
//! [`StackError`] and leaves the stack as it was.
//!
//! # Architecture
//!
//! ```text
//! TypedStack<T: Pod>   (pop returns the value)
//! └── ByteStack        (type-erased slots, read-before-pop contract)
//!     └── RawBuffer    (fallible Vec<u8> allocation, zero-initialised)
//! ```
//!
//! - [`ByteStack`] holds opaque `element_size`-byte blocks, chosen at
//!   runtime. Its [`pop`](ByteStack::pop) only lowers the occupied count;
//!   callers read the top slot *before* popping.
//! - [`TypedStack`] fixes the element size to a `bytemuck::Pod` type and
//!   is the more convenient choice when the element type is known.
//!
//! # Growth
//!
//! Stacks never grow implicitly. A push onto a full stack fails with
//! [`StackError::Full`]; the caller may [`resize`](ByteStack::resize) and
//! retry.
//!
//! # Concurrency
//!
//! No internal synchronisation. A stack is `Send` and `Sync` like the
//! `Vec<u8>` it wraps; mutation needs `&mut`, so sharing one across threads
//! requires an external lock.
//!
//! # Logging
//!
//! Failed operations emit `tracing` debug events; allocation failures emit
//! warnings. The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod byte_stack;
pub mod config;
pub mod error;
mod raw;
pub mod typed;

// Public re-exports for the primary API surface.
pub use byte_stack::ByteStack;
pub use config::StackConfig;
pub use error::StackError;
pub use typed::TypedStack;
