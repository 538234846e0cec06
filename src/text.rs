//! Fixed-capacity text buffer
//!
//! [`FixedStr<N>`] models a C `char[N]` holding a NUL-terminated string: at
//! most `N - 1` bytes of text, with one slot reserved for the terminator.
//! Unlike the `strcpy`-into-array pattern it stands in for, construction is
//! checked — text that does not fit is a [`DemoError::CapacityExceeded`]
//! rather than undefined behavior.  This is a deliberate divergence from the
//! modeled source, not an attempt to reproduce its overflow.

use crate::errors::DemoError;
use std::fmt;

/// A `Copy` text value bounded at `N - 1` bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStr<const N: usize> {
    buf: [u8; N],
    len: u8,
}

impl<const N: usize> FixedStr<N> {
    /// Build from a string slice, rejecting text that would overflow the
    /// buffer or contain an interior NUL
    pub fn new(text: &str) -> Result<Self, DemoError> {
        if text.len() > N - 1 {
            return Err(DemoError::CapacityExceeded {
                len: text.len(),
                capacity: N - 1,
            });
        }
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(DemoError::InteriorNul { position });
        }

        let mut buf = [0u8; N];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(FixedStr {
            buf,
            len: text.len() as u8,
        })
    }

    /// View the stored text
    pub fn as_str(&self) -> &str {
        // The bytes were copied verbatim from a &str, so they are valid UTF-8
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }

    /// Length of the stored text in bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum text length in bytes (buffer size minus the terminator slot)
    pub const fn capacity() -> usize {
        N - 1
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        FixedStr {
            buf: [0u8; N],
            len: 0,
        }
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_text_up_to_capacity() {
        let s: FixedStr<20> = FixedStr::new("John").unwrap();
        assert_eq!(s.as_str(), "John");
        assert_eq!(s.len(), 4);

        // 19 bytes is the longest text a char[20] can hold
        let longest: FixedStr<20> = FixedStr::new("abcdefghijklmnopqrs").unwrap();
        assert_eq!(longest.len(), 19);
        assert_eq!(FixedStr::<20>::capacity(), 19);
    }

    #[test]
    fn test_rejects_overflow() {
        let err = FixedStr::<20>::new("abcdefghijklmnopqrst").unwrap_err();
        assert_eq!(
            err,
            DemoError::CapacityExceeded {
                len: 20,
                capacity: 19
            }
        );
    }

    #[test]
    fn test_rejects_interior_nul() {
        let err = FixedStr::<20>::new("Jo\0hn").unwrap_err();
        assert_eq!(err, DemoError::InteriorNul { position: 2 });
    }

    #[test]
    fn test_default_is_empty() {
        let s: FixedStr<20> = FixedStr::default();
        assert!(s.is_empty());
        assert_eq!(s.as_str(), "");
    }

    #[test]
    fn test_compares_against_str() {
        let s: FixedStr<20> = FixedStr::new("Doe").unwrap();
        assert!(s == "Doe");
        assert_eq!(format!("{}", s), "Doe");
    }
}
