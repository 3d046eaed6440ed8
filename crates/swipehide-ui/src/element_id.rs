//! Stable identifiers for swipe elements.
//!
//! A screen usually hosts several swipeable panels sharing one listener; the
//! id is how that listener tells the source of a change apart.

use std::fmt;

/// A stable identifier derived from a string key.
///
/// # Example
/// ```
/// use swipehide_ui::ElementId;
///
/// let drawer = ElementId::new("left_drawer");
/// assert_eq!(drawer, ElementId::from("left_drawer"));
/// assert_ne!(drawer, ElementId::new("bottom_sheet"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an id from a string key (FNV-1a).
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create an id from a raw value.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        s.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ *byte as u64).wrapping_mul(FNV_PRIME)
        })
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId(0x{:016x})", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        // FNV-1a of the empty string is the offset basis.
        assert_eq!(ElementId::new("").as_u64(), 0xcbf29ce484222325);
        assert_eq!(ElementId::new("a").as_u64(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ElementId::from_raw(0xff).to_string(),
            "ElementId(0x00000000000000ff)"
        );
    }
}
