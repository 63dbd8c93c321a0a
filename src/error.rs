use thiserror::Error;

/// Alias for the result type of `ByteArray` operations.
pub type ByteArrayResult<T> = Result<T, ByteArrayError>;

/// Errors that can occur when constructing or accessing a [`ByteArray`].
///
/// [`ByteArray`]: crate::ByteArray
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ByteArrayError {
    /// The allocator could not supply the requested storage region
    #[error("allocation of {0} bytes failed")]
    AllocationFailed(usize),

    /// A read would pass the written length, or a write would pass capacity
    #[error("byte range at offset {offset} with length {len} exceeds limit {limit}")]
    OutOfRange {
        /// Starting offset of the rejected access.
        offset: usize,
        /// Width of the rejected access in bytes.
        len: usize,
        /// The bound that was exceeded: the written length for reads,
        /// the capacity for writes.
        limit: usize,
    },
}
