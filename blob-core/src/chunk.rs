//! Chunk envelope: probing, zero-copy deserialization and header
//! serialization over caller-owned buffers.
//!
//! All operations are pure functions over the supplied memory. The read path
//! never copies, allocates or mutates; the write path touches only the
//! header region of the buffer it is given.

use tracing::{debug, trace};

use crate::errors::{Error, Result};
use crate::fourcc::ChunkType;
use crate::header::{
    read_size, ChunkHeader, CHECK_BYTES_LEN, HEADER_PREFIX, HEADER_SIZE, HEADER_VERSION,
    MAGIC_PREFIX_LEN,
};
use crate::signature::{ChunkSignature, SignatureBytes};

/// Cheap probe: whether `data` holds a valid chunk of the current build's
/// bitness and endianness, whole.
///
/// True iff the buffer can hold a header, the first ten bytes equal the
/// magic prefix and the declared chunk size covers at least the header
/// while fitting the buffer. Never reports
/// why a buffer was rejected; use [`deserialize`] when the reason matters.
pub fn is_data_chunk(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE
        && data[..MAGIC_PREFIX_LEN] == HEADER_PREFIX[..MAGIC_PREFIX_LEN]
        && (HEADER_SIZE..=data.len()).contains(&read_size(data))
}

/// Header-only probe: whether `data` starts with a full, prefix-valid chunk
/// header.
///
/// Unlike [`is_data_chunk`] this doesn't check that the declared chunk size
/// fits the buffer, so it also accepts a chunk whose payload got truncated.
pub fn is_chunk_header(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE && data[..MAGIC_PREFIX_LEN] == HEADER_PREFIX[..MAGIC_PREFIX_LEN]
}

/// Staged validation. Order is a contract: cheap length first, then version,
/// then signature (so a wrong-platform build is reported as such rather than
/// as corruption), then the remaining check bytes, then the declared size.
/// The size must cover at least the header and fit the buffer, so a
/// returned view can slice its payload without panicking.
fn check(data: &[u8]) -> Result<()> {
    if data.len() < HEADER_SIZE {
        return Err(Error::TooShortForHeader {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }
    if data[0] != HEADER_VERSION {
        return Err(Error::VersionMismatch {
            expected: HEADER_VERSION,
            actual: data[0],
        });
    }
    let signature = [data[4], data[5], data[6], data[7]];
    if signature != ChunkSignature::CURRENT.magic() {
        return Err(Error::SignatureMismatch {
            expected: ChunkSignature::CURRENT,
            actual: SignatureBytes(signature),
        });
    }
    if data[..CHECK_BYTES_LEN] != HEADER_PREFIX {
        return Err(Error::InvalidCheckBytes);
    }
    let size = read_size(data);
    if size < HEADER_SIZE {
        return Err(Error::TooShortForChunk {
            expected: HEADER_SIZE,
            actual: size,
        });
    }
    if size > data.len() {
        return Err(Error::TooShortForChunk {
            expected: size,
            actual: data.len(),
        });
    }
    Ok(())
}

fn validate(data: &[u8]) -> Result<()> {
    let checked = check(data);
    if let Err(error) = &checked {
        debug!(%error, len = data.len(), "rejected chunk buffer");
    }
    checked
}

/// Validates `data` and returns a zero-copy view of the chunk it contains.
///
/// Validation stops at the first failing stage and reports a distinct
/// [`Error`] per stage. On success the chunk's payload is
/// `data[HEADER_SIZE..size]`; nothing is copied and the view borrows the
/// buffer.
pub fn deserialize(data: &[u8]) -> Result<ChunkView<'_>> {
    validate(data)?;
    Ok(ChunkView { data })
}

/// Mutable variant of [`deserialize`], same validation logic.
pub fn deserialize_mut(data: &mut [u8]) -> Result<ChunkViewMut<'_>> {
    validate(data)?;
    Ok(ChunkViewMut { data })
}

/// Like [`deserialize`], for callers that treat an invalid chunk as a
/// programming error, such as a blob this process itself wrote.
///
/// # Panics
///
/// Panics with the exact message [`deserialize`] would have reported.
#[allow(clippy::panic)]
pub fn from_bytes(data: &[u8]) -> ChunkView<'_> {
    match deserialize(data) {
        Ok(view) => view,
        Err(error) => panic!("{error}"),
    }
}

/// Mutable variant of [`from_bytes`].
///
/// # Panics
///
/// Panics with the exact message [`deserialize_mut`] would have reported.
#[allow(clippy::panic)]
pub fn from_bytes_mut(data: &mut [u8]) -> ChunkViewMut<'_> {
    match deserialize_mut(data) {
        Ok(view) => view,
        Err(error) => panic!("{error}"),
    }
}

/// Validated zero-copy view of a serialized chunk.
///
/// Valid exactly as long as the backing buffer; the borrow checker ties the
/// view's lifetime to it.
#[derive(Debug, Clone, Copy)]
pub struct ChunkView<'a> {
    data: &'a [u8],
}

impl<'a> ChunkView<'a> {
    /// Decoded header fields.
    pub fn header(&self) -> ChunkHeader {
        ChunkHeader::decode(self.data)
    }

    /// Chunk type tag stored in the header.
    pub fn chunk_type(&self) -> ChunkType {
        self.header().chunk_type
    }

    /// Extra data carried in the header, opaque to the codec.
    pub fn extra(&self) -> u16 {
        self.header().extra
    }

    /// Total chunk size including the header.
    pub fn size(&self) -> usize {
        self.header().size
    }

    /// Payload bytes following the header.
    pub fn payload(&self) -> &'a [u8] {
        &self.data[HEADER_SIZE..self.size()]
    }

    /// The whole serialized chunk, header included.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.data[..self.size()]
    }
}

/// Mutable counterpart of [`ChunkView`], produced by [`deserialize_mut`].
#[derive(Debug)]
pub struct ChunkViewMut<'a> {
    data: &'a mut [u8],
}

impl ChunkViewMut<'_> {
    /// Decoded header fields.
    pub fn header(&self) -> ChunkHeader {
        ChunkHeader::decode(self.data)
    }

    /// Chunk type tag stored in the header.
    pub fn chunk_type(&self) -> ChunkType {
        self.header().chunk_type
    }

    /// Extra data carried in the header, opaque to the codec.
    pub fn extra(&self) -> u16 {
        self.header().extra
    }

    /// Total chunk size including the header.
    pub fn size(&self) -> usize {
        self.header().size
    }

    /// Payload bytes following the header.
    pub fn payload(&self) -> &[u8] {
        &self.data[HEADER_SIZE..self.size()]
    }

    /// Mutable access to the payload bytes. The header region stays
    /// untouchable so the view cannot invalidate itself.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        let size = self.size();
        &mut self.data[HEADER_SIZE..size]
    }

    /// The whole serialized chunk, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.size()]
    }
}

/// A live, not-yet-serialized chunk carrying only its type tag.
///
/// The designed way to access serialized data is [`deserialize`] or
/// [`from_bytes`] over an existing buffer; a live chunk exists solely to
/// stamp headers into output buffers and is never itself a valid chunk.
/// Typed payload wrappers hold one of these next to their in-memory data and
/// call [`serialize_header_into`](DataChunk::serialize_header_into) when
/// writing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
    chunk_type: ChunkType,
}

impl DataChunk {
    /// Creates a live chunk of the given type.
    pub const fn new(chunk_type: ChunkType) -> Self {
        Self { chunk_type }
    }

    /// The type tag stamped into every header this chunk serializes.
    pub const fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// Size of a serialized header, [`HEADER_SIZE`].
    pub const fn serialized_size(&self) -> usize {
        HEADER_SIZE
    }

    /// Stamps a chunk header into the start of `out`.
    ///
    /// The whole of `out` is taken to be the chunk, so the written size
    /// field is `out.len()`; there is no separate payload-length argument.
    /// Callers size the buffer to header plus payload beforehand and fill
    /// the payload region afterwards; this call leaves it untouched. Fills
    /// in the reference prefix, `extra`, the type captured at construction
    /// and the size, then returns the number of bytes written, always
    /// [`HEADER_SIZE`].
    ///
    /// Fails with [`Error::BufferTooSmall`] without writing anything if
    /// `out` cannot hold a header.
    pub fn serialize_header_into(&self, out: &mut [u8], extra: u16) -> Result<usize> {
        if out.len() < HEADER_SIZE {
            return Err(Error::BufferTooSmall {
                expected: HEADER_SIZE,
                actual: out.len(),
            });
        }
        ChunkHeader::encode_into(out, self.chunk_type, extra, out.len());
        trace!(chunk_type = %self.chunk_type, size = out.len(), "serialized chunk header");
        Ok(HEADER_SIZE)
    }
}
