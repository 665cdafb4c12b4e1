#![forbid(unsafe_code)]
//! Self-describing chunk headers for memory-mappable binary blobs.
//!
//! A chunk is a header-prefixed region of bytes representing one serialized
//! data unit. The header carries everything needed to identify, validate and
//! extract the chunk directly from a raw byte buffer (including a read-only
//! memory-mapped file) without a parsing pass: the payload of a validated
//! buffer is simply `data[HEADER_SIZE..size]`.
//!
//! Chunks concatenate byte-for-byte with no outer container, so blobs can be
//! combined with plain `cat a.blob b.blob > c.blob`. The wire format is
//! native-endian and native-width per build; the [`ChunkSignature`] magic
//! encodes the producing build's bitness and byte order in the first ten
//! bytes, so a cross-build mismatch is detected before any size field is
//! trusted.
//!
//! # Wire layout
//!
//! | Offset | Size   | Contents |
//! |--------|--------|----------|
//! | 0      | 1      | header version, `0x80` (high bit set so the blob is never detected as text) |
//! | 1      | 1      | Unix EOL (`\n`), detects Unix-to-DOS line ending translation |
//! | 2      | 2      | DOS EOL (`\r\n`), detects DOS-to-Unix line ending translation |
//! | 4      | 4      | signature, see [`ChunkSignature`] |
//! | 8      | 2      | two zero bytes, prevents treatment as a NUL-terminated string |
//! | 10     | 2      | extra data, opaque to the codec |
//! | 12     | 4      | chunk type, see [`ChunkType`] |
//! | 16     | 4 or 8 | total chunk size including the header, native width |
//!
//! # Example
//!
//! ```
//! use blob_core::{ChunkType, DataChunk, HEADER_SIZE};
//!
//! let payload = b"hello";
//! let mut blob = vec![0u8; HEADER_SIZE + payload.len()];
//! let chunk = DataChunk::new(ChunkType::new(*b"mesh"));
//! chunk.serialize_header_into(&mut blob, 0)?;
//! blob[HEADER_SIZE..].copy_from_slice(payload);
//!
//! let view = blob_core::deserialize(&blob)?;
//! assert_eq!(view.chunk_type(), ChunkType::new(*b"mesh"));
//! assert_eq!(view.payload(), payload);
//! # Ok::<(), blob_core::Error>(())
//! ```

pub mod chunk;
pub mod errors;
pub mod flags;
pub mod fourcc;
pub mod header;
pub mod signature;

pub use chunk::{
    deserialize, deserialize_mut, from_bytes, from_bytes_mut, is_chunk_header, is_data_chunk,
    ChunkView, ChunkViewMut, DataChunk,
};
pub use errors::{Error, Result};
pub use flags::ChunkFlags;
pub use fourcc::ChunkType;
pub use header::{ChunkHeader, HEADER_SIZE, HEADER_VERSION};
pub use signature::{ChunkSignature, SignatureBytes};
