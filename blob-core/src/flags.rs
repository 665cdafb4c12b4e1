//! Flags describing how chunk payload memory is held.

use bitflags::bitflags;

bitflags! {
    /// How the payload memory behind an in-memory chunk handle is held.
    ///
    /// Not part of the wire format. Typed payload wrappers attach these to
    /// track ownership and mutability of the backing buffer; after
    /// deserializing from a read-only memory-mapped file, for example, both
    /// flags are unset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChunkFlags: u8 {
        /// Payload memory is owned by the holding instance. When unset, the
        /// instance may be referencing a memory-mapped file or constant
        /// memory.
        const OWNED = 1 << 0;
        /// Payload memory may be written through the holding instance.
        const MUTABLE = 1 << 1;
    }
}

impl Default for ChunkFlags {
    /// The empty set: payload memory neither owned nor writable, the state
    /// of a view over a read-only mapped file.
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChunkFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChunkFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ChunkFlags::from_bits_retain(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_set() {
        let flags = ChunkFlags::OWNED | ChunkFlags::MUTABLE;
        assert_eq!(format!("{flags:?}"), "ChunkFlags(OWNED | MUTABLE)");
    }

    #[test]
    fn render_empty() {
        assert_eq!(format!("{:?}", ChunkFlags::empty()), "ChunkFlags(0x0)");
    }

    #[test]
    fn mapped_file_view_has_no_flags() {
        assert_eq!(ChunkFlags::default(), ChunkFlags::empty());
        assert!(!ChunkFlags::default().contains(ChunkFlags::OWNED));
    }
}
