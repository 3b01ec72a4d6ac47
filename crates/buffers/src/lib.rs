//! Byte buffer primitives shared by the vaultbits crates.
//!
//! - Bulk operations: [`alloc`], [`copy`], [`fill`], [`clear`], [`extend`]
//! - Concatenation: [`concat`], [`concat_list`]
//! - Constant-time comparison: [`ct_eq`]
//! - Cursor based [`Reader`] and [`Writer`]

mod array;
mod concat;
mod ct_eq;
mod reader;
mod writer;

pub use array::{alloc, clear, copy, extend, fill};
pub use concat::{concat, concat_list};
pub use ct_eq::ct_eq;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// A read needed more bytes than remain in the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
