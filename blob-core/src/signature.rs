//! Platform signatures encoding target bitness and byte order.

use core::fmt;

use crate::fourcc::fmt_fourcc;

/// Chunk signature, identifying the bitness and byte order of the build that
/// produced a chunk.
///
/// Reads as the letters `BLOB` for little-endian 64-bit data; big-endian
/// reverses the order (thus `BOLB`) and 32-bit data has the `L` lowercase.
/// Validating the signature before anything payload-specific distinguishes a
/// wrong-platform blob from a corrupt one, ahead of interpreting the size
/// field whose width itself depends on bitness.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkSignature {
    /// Little-endian 32-bit data. The letters `BlOB`.
    LittleEndian32,
    /// Little-endian 64-bit data. The letters `BLOB`.
    LittleEndian64,
    /// Big-endian 32-bit data. The letters `BOlB`.
    BigEndian32,
    /// Big-endian 64-bit data. The letters `BOLB`.
    BigEndian64,
}

impl ChunkSignature {
    /// Signature matching the build this crate was compiled for.
    #[cfg(all(target_endian = "little", target_pointer_width = "32"))]
    pub const CURRENT: ChunkSignature = ChunkSignature::LittleEndian32;
    /// Signature matching the build this crate was compiled for.
    #[cfg(all(target_endian = "little", target_pointer_width = "64"))]
    pub const CURRENT: ChunkSignature = ChunkSignature::LittleEndian64;
    /// Signature matching the build this crate was compiled for.
    #[cfg(all(target_endian = "big", target_pointer_width = "32"))]
    pub const CURRENT: ChunkSignature = ChunkSignature::BigEndian32;
    /// Signature matching the build this crate was compiled for.
    #[cfg(all(target_endian = "big", target_pointer_width = "64"))]
    pub const CURRENT: ChunkSignature = ChunkSignature::BigEndian64;

    /// The signature's four magic bytes, in wire order.
    pub const fn magic(self) -> [u8; 4] {
        match self {
            ChunkSignature::LittleEndian32 => *b"BlOB",
            ChunkSignature::LittleEndian64 => *b"BLOB",
            ChunkSignature::BigEndian32 => *b"BOlB",
            ChunkSignature::BigEndian64 => *b"BOLB",
        }
    }

    /// Looks up the signature matching the given magic bytes.
    pub const fn from_magic(magic: [u8; 4]) -> Option<ChunkSignature> {
        match &magic {
            b"BlOB" => Some(ChunkSignature::LittleEndian32),
            b"BLOB" => Some(ChunkSignature::LittleEndian64),
            b"BOlB" => Some(ChunkSignature::BigEndian32),
            b"BOLB" => Some(ChunkSignature::BigEndian64),
            _ => None,
        }
    }

    /// Signature for an explicit target: pointer width in bits, and whether
    /// the target is big-endian. Returns `None` for widths other than 32 and
    /// 64.
    pub const fn for_target(pointer_width: u32, big_endian: bool) -> Option<ChunkSignature> {
        match (pointer_width, big_endian) {
            (32, false) => Some(ChunkSignature::LittleEndian32),
            (64, false) => Some(ChunkSignature::LittleEndian64),
            (32, true) => Some(ChunkSignature::BigEndian32),
            (64, true) => Some(ChunkSignature::BigEndian64),
            _ => None,
        }
    }
}

impl fmt::Display for ChunkSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fourcc(f, "ChunkSignature", self.magic())
    }
}

impl fmt::Debug for ChunkSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Raw signature bytes as found in a rejected header.
///
/// Unlike [`ChunkSignature`] this can hold arbitrary bytes, so a mismatch
/// diagnostic can name whatever the header actually contained. Renders in
/// the same form as `ChunkSignature`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SignatureBytes(pub [u8; 4]);

impl fmt::Display for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fourcc(f, "ChunkSignature", self.0)
    }
}

impl fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_target() {
        let width = 8 * core::mem::size_of::<usize>() as u32;
        let big_endian = cfg!(target_endian = "big");
        assert_eq!(
            ChunkSignature::for_target(width, big_endian),
            Some(ChunkSignature::CURRENT)
        );
    }

    #[test]
    fn magic_round_trips() {
        for sig in [
            ChunkSignature::LittleEndian32,
            ChunkSignature::LittleEndian64,
            ChunkSignature::BigEndian32,
            ChunkSignature::BigEndian64,
        ] {
            assert_eq!(ChunkSignature::from_magic(sig.magic()), Some(sig));
        }
        assert_eq!(ChunkSignature::from_magic(*b"BLOb"), None);
    }

    #[test]
    fn render() {
        assert_eq!(
            ChunkSignature::LittleEndian64.to_string(),
            "ChunkSignature('B', 'L', 'O', 'B')"
        );
        assert_eq!(
            SignatureBytes([0; 4]).to_string(),
            "ChunkSignature(0x0, 0x0, 0x0, 0x0)"
        );
    }
}
