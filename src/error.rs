//! Error conditions a [`Hasher`](crate::hasher::Hasher) can raise.
//!
//! The streaming contract keeps errors to a minimum: once an algorithm and a
//! variant are chosen (at compile time, via the [`Hasher`](crate::hasher::Hasher)
//! type parameters), the only thing that can go wrong at runtime is a caller
//! passing a null pointer through an FFI-style entry point.

use core::fmt;

/// Error raised by a hashing or CRC operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `update` was called with a null byte pointer.
    ///
    /// The safe `&[u8]` entry points in this crate can never observe this;
    /// it exists for the raw-pointer FFI entry point described in the
    /// contract.
    InvalidArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
