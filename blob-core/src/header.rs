//! Chunk header layout and the byte-level field codec.

use crate::fourcc::ChunkType;
use crate::signature::ChunkSignature;

/// Size of a serialized chunk header on the current target, in bytes.
///
/// 20 bytes on 32-bit targets, 24 on 64-bit ones. The size is chosen so the
/// payload immediately following the header starts 4- respectively 8-byte
/// aligned with no padding in between.
pub const HEADER_SIZE: usize = 16 + core::mem::size_of::<usize>();

/// Supported header version byte. The high bit is set so a chunk is never
/// detected as a text file.
pub const HEADER_VERSION: u8 = 0x80;

/// Leading header bytes that are payload-independent: version, EOL
/// sentinels, signature, zero guard.
pub(crate) const MAGIC_PREFIX_LEN: usize = 10;

/// Leading bytes compared against [`HEADER_PREFIX`] during full validation:
/// the magic prefix plus the zeroed extra field.
pub(crate) const CHECK_BYTES_LEN: usize = 12;

const EXTRA_OFFSET: usize = 10;
const TYPE_OFFSET: usize = 12;
const SIZE_OFFSET: usize = 16;

/// Reference header prefix for the current build. The type and size fields
/// are excluded since they are payload-specific and get overwritten on every
/// serialize.
pub(crate) const HEADER_PREFIX: [u8; CHECK_BYTES_LEN] = header_prefix();

const fn header_prefix() -> [u8; CHECK_BYTES_LEN] {
    let sig = ChunkSignature::CURRENT.magic();
    [
        HEADER_VERSION,
        b'\n',
        b'\r',
        b'\n',
        sig[0],
        sig[1],
        sig[2],
        sig[3],
        0,
        0,
        0,
        0,
    ]
}

/// Decoded chunk header fields.
///
/// The wire representation is native-endian and native-width; see the crate
/// docs for the exact byte layout. Obtained from a validated
/// [`ChunkView`](crate::ChunkView), where every field already passed the
/// check-byte comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Header version byte.
    pub version: u8,
    /// Unix EOL sentinel.
    pub eol_unix: [u8; 1],
    /// DOS EOL sentinel.
    pub eol_dos: [u8; 2],
    /// Raw signature bytes.
    pub signature: [u8; 4],
    /// Zero guard.
    pub zero: u16,
    /// Extra data, opaque to the codec.
    pub extra: u16,
    /// Chunk type tag.
    pub chunk_type: ChunkType,
    /// Total chunk size including the header.
    pub size: usize,
}

impl ChunkHeader {
    /// Decodes the fields from the first [`HEADER_SIZE`] bytes of `data`,
    /// which the caller has already length-checked.
    pub(crate) fn decode(data: &[u8]) -> Self {
        debug_assert!(data.len() >= HEADER_SIZE);
        Self {
            version: data[0],
            eol_unix: [data[1]],
            eol_dos: [data[2], data[3]],
            signature: [data[4], data[5], data[6], data[7]],
            zero: u16::from_ne_bytes([data[8], data[9]]),
            extra: u16::from_ne_bytes([data[10], data[11]]),
            chunk_type: ChunkType::new([data[12], data[13], data[14], data[15]]),
            size: read_size(data),
        }
    }

    /// Encodes a full header into the first [`HEADER_SIZE`] bytes of `out`,
    /// which the caller has already length-checked.
    pub(crate) fn encode_into(out: &mut [u8], chunk_type: ChunkType, extra: u16, size: usize) {
        out[..CHECK_BYTES_LEN].copy_from_slice(&HEADER_PREFIX);
        out[EXTRA_OFFSET..TYPE_OFFSET].copy_from_slice(&extra.to_ne_bytes());
        out[TYPE_OFFSET..SIZE_OFFSET].copy_from_slice(&chunk_type.bytes());
        out[SIZE_OFFSET..HEADER_SIZE].copy_from_slice(&size.to_ne_bytes());
    }
}

/// Reads the native-width size field. Caller has length-checked `data`.
pub(crate) fn read_size(data: &[u8]) -> usize {
    let mut raw = [0u8; core::mem::size_of::<usize>()];
    raw.copy_from_slice(&data[SIZE_OFFSET..HEADER_SIZE]);
    usize::from_ne_bytes(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_size_matches_target_width() {
        #[cfg(target_pointer_width = "32")]
        assert_eq!(HEADER_SIZE, 20);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(HEADER_SIZE, 24);
    }

    #[test]
    fn prefix_layout() {
        assert_eq!(HEADER_PREFIX[0], 0x80);
        assert_eq!(&HEADER_PREFIX[1..4], b"\n\r\n");
        assert_eq!(HEADER_PREFIX[4..8], ChunkSignature::CURRENT.magic());
        assert_eq!(&HEADER_PREFIX[8..12], &[0, 0, 0, 0]);
    }

    #[test]
    fn encode_decode_fields() {
        let ty = ChunkType::new(*b"img2");
        let mut buf = vec![0u8; HEADER_SIZE];
        ChunkHeader::encode_into(&mut buf, ty, 0x1234, HEADER_SIZE + 77);

        let header = ChunkHeader::decode(&buf);
        assert_eq!(header.version, HEADER_VERSION);
        assert_eq!(header.eol_unix, [b'\n']);
        assert_eq!(header.eol_dos, [b'\r', b'\n']);
        assert_eq!(header.signature, ChunkSignature::CURRENT.magic());
        assert_eq!(header.zero, 0);
        assert_eq!(header.extra, 0x1234);
        assert_eq!(header.chunk_type, ty);
        assert_eq!(header.size, HEADER_SIZE + 77);
    }
}
