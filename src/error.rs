//! Error types for SLH-DSA operations

use core::fmt;

/// Errors produced by SLH-DSA key handling, signing and verification.
///
/// A failed verification is *not* an error: the `verify_*` methods
/// return `Ok(false)` for a signature that does not check out and
/// reserve `Err` for structurally malformed inputs, which are rejected
/// before any hashing takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A parameter set violates the structural bounds (e.g. `n > 32`)
    /// or is internally inconsistent (`h != d * h'`).
    InvalidParameters,

    /// A key, seed, signature or randomness buffer length disagrees
    /// with the size derived from the parameter set.
    SizeMismatch,

    /// A pre-hash variant named a hash algorithm outside the supported
    /// registry.
    UnsupportedHash,

    /// A context string longer than 255 bytes was supplied.
    ContextTooLong,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters => f.write_str("invalid or inconsistent parameter set"),
            Error::SizeMismatch => f.write_str("buffer length does not match parameter set"),
            Error::UnsupportedHash => f.write_str("unsupported pre-hash algorithm"),
            Error::ContextTooLong => f.write_str("context string exceeds 255 bytes"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for signature::Error {
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }
}
