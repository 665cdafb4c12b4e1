//! Error taxonomy for chunk validation and serialization.

use crate::signature::{ChunkSignature, SignatureBytes};

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Validation and serialization failures.
///
/// All variants are local, recoverable conditions reported to the immediate
/// caller; the codec retries nothing and keeps no internal state. Each
/// carries the expected/actual context needed to reproduce its diagnostic,
/// and the rendered messages are an exact-string test contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The buffer cannot hold even a header.
    #[error("expected at least {expected} bytes for a header but got {actual}")]
    TooShortForHeader {
        /// Minimum length, [`HEADER_SIZE`](crate::HEADER_SIZE).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// The version byte differs from the supported header version.
    #[error("expected version {expected} but got {actual}")]
    VersionMismatch {
        /// Supported version, [`HEADER_VERSION`](crate::HEADER_VERSION).
        expected: u8,
        /// Version byte found in the buffer.
        actual: u8,
    },

    /// The signature was produced by a build of different bitness or
    /// endianness. Checked before the generic check-byte comparison so a
    /// wrong-platform blob is distinguished from a corrupt one.
    #[error("expected signature {expected} but got {actual}")]
    SignatureMismatch {
        /// Signature of the current build.
        expected: ChunkSignature,
        /// Signature bytes found in the buffer.
        actual: SignatureBytes,
    },

    /// The fixed leading bytes don't match the reference prefix: bad EOL
    /// sentinels, a nonzero guard or similar, with version and signature
    /// already known to be fine.
    #[error("invalid header check bytes")]
    InvalidCheckBytes,

    /// The declared chunk size doesn't fit: larger than the supplied buffer,
    /// or smaller than the header it must at least cover.
    #[error("expected at least {expected} bytes but got {actual}")]
    TooShortForChunk {
        /// Size declared in the header, or
        /// [`HEADER_SIZE`](crate::HEADER_SIZE) when the declared size is
        /// below it.
        expected: usize,
        /// Actual buffer length, or the too-small declared size.
        actual: usize,
    },

    /// The output buffer handed to the serializer cannot hold a header.
    /// Nothing is written when this is reported.
    #[error("output too small, expected at least {expected} bytes but got {actual}")]
    BufferTooSmall {
        /// Minimum length, [`HEADER_SIZE`](crate::HEADER_SIZE).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_strings() {
        assert_eq!(
            Error::TooShortForHeader {
                expected: 24,
                actual: 23
            }
            .to_string(),
            "expected at least 24 bytes for a header but got 23"
        );
        assert_eq!(
            Error::VersionMismatch {
                expected: 128,
                actual: 127
            }
            .to_string(),
            "expected version 128 but got 127"
        );
        assert_eq!(
            Error::SignatureMismatch {
                expected: ChunkSignature::LittleEndian64,
                actual: SignatureBytes(*b"BlOB")
            }
            .to_string(),
            "expected signature ChunkSignature('B', 'L', 'O', 'B') \
             but got ChunkSignature('B', 'l', 'O', 'B')"
        );
        assert_eq!(
            Error::InvalidCheckBytes.to_string(),
            "invalid header check bytes"
        );
        assert_eq!(
            Error::TooShortForChunk {
                expected: 29,
                actual: 28
            }
            .to_string(),
            "expected at least 29 bytes but got 28"
        );
        assert_eq!(
            Error::BufferTooSmall {
                expected: 24,
                actual: 23
            }
            .to_string(),
            "output too small, expected at least 24 bytes but got 23"
        );
    }
}
