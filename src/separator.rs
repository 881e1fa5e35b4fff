use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator used by the free functions at the crate root.
pub const PATH_SEPARATOR: u8 = b'/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeparatorViolation {
    #[error("separator cannot be empty")]
    Empty,
    #[error("separator must be a single character")]
    MultipleCharacters,
    #[error("separator must be an ASCII character")]
    NonAscii,
    #[error("separator cannot be `.`")]
    Dot,
    #[error("separator cannot be a NUL byte")]
    Nul,
}

/// The byte delimiting segments in a VFS path.
///
/// Restricted to ASCII so that cutting UTF-8 text at a separator always lands
/// on a character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(u8);

impl Separator {
    pub const DEFAULT: Separator = Separator(PATH_SEPARATOR);

    pub fn new(byte: u8) -> Result<Self, SeparatorViolation> {
        match byte {
            0 => Err(SeparatorViolation::Nul),
            b'.' => Err(SeparatorViolation::Dot),
            b if !b.is_ascii() => Err(SeparatorViolation::NonAscii),
            b => Ok(Separator(b)),
        }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// The separator as a one-byte slice, for appending to output buffers.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        std::slice::from_ref(&self.0)
    }

    #[inline]
    pub fn is_separator(self, byte: u8) -> bool {
        byte == self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::DEFAULT
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Separator {
    type Err = SeparatorViolation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.chars();
        let Some(ch) = chars.next() else {
            return Err(SeparatorViolation::Empty);
        };
        if chars.next().is_some() {
            return Err(SeparatorViolation::MultipleCharacters);
        }
        if !ch.is_ascii() {
            return Err(SeparatorViolation::NonAscii);
        }
        Separator::new(ch as u8)
    }
}
