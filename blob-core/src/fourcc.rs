//! FourCC-style chunk type tags.

use core::fmt;

/// Writes a 4-byte tag as `Label('a', 'b', 'c', 0x2a)`, quoting printable
/// bytes and rendering the rest numerically. Shared by every FourCC-ish
/// diagnostic in the crate; the exact form is a test contract.
pub(crate) fn fmt_fourcc(f: &mut fmt::Formatter<'_>, label: &str, bytes: [u8; 4]) -> fmt::Result {
    write!(f, "{label}(")?;
    for (i, byte) in bytes.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        if byte.is_ascii_graphic() || *byte == b' ' {
            write!(f, "'{}'", *byte as char)?;
        } else {
            write!(f, "0x{byte:x}")?;
        }
    }
    f.write_str(")")
}

/// FourCC-style identifier of the data contained in a chunk.
///
/// Tags starting with an uppercase letter are reserved for built-in data
/// types; application-specific types should start with a lowercase letter
/// instead. The remaining three bytes are free-form and don't need to be
/// alphanumeric; built-in types use the last byte to carry a version of the
/// data type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    /// Serialized mesh data.
    pub const MESH: ChunkType = ChunkType(*b"Msh\0");

    /// Creates a tag from its four bytes, in wire order.
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    /// The raw tag bytes, in wire order.
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }

    /// Whether the tag is in the uppercase-first range reserved for built-in
    /// data types.
    pub const fn is_reserved(self) -> bool {
        self.0[0].is_ascii_uppercase()
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fourcc(f, "ChunkType", self.0)
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_printable_and_numeric() {
        let ty = ChunkType::new([b'M', b's', b'h', 0xab]);
        assert_eq!(ty.to_string(), "ChunkType('M', 's', 'h', 0xab)");
    }

    #[test]
    fn render_zero() {
        assert_eq!(
            ChunkType::new([0; 4]).to_string(),
            "ChunkType(0x0, 0x0, 0x0, 0x0)"
        );
    }

    #[test]
    fn reserved_range() {
        assert!(ChunkType::MESH.is_reserved());
        assert!(!ChunkType::new(*b"mesh").is_reserved());
        assert!(!ChunkType::new([0xab; 4]).is_reserved());
    }
}
