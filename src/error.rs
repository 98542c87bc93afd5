use thiserror::Error;

/// The ways a digest computation can be refused. The algorithm itself has
/// no failure modes; only the input can be invalid, and an invalid input is
/// rejected before any block is processed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input buffer was empty. At least one byte is required.
    #[error("input is empty; at least one byte is required")]
    EmptyInput,
    /// The input's bit length does not fit the 64-bit length field of the
    /// final padded block.
    #[error("input of {0} bytes is beyond the 2^61-byte limit of SHA-256")]
    InputTooLong(u64),
}
