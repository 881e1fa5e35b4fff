//! Lexical path cleaning.
//!
//! `clean` returns the shortest path equivalent to its input by purely
//! lexical processing:
//!
//! 1. Runs of separators collapse into one.
//! 2. `.` segments are dropped.
//! 3. A `..` segment removes the segment before it.
//! 4. `..` directly after the root of a rooted path is dropped.
//! 5. A leading run of `..` in a relative path is kept.
//!
//! Trailing separators are removed (except for the root itself) and an
//! empty result becomes `"."`. The output is borrowed from the input whenever
//! the input was already clean.
//!
//! Paths are bytes: only the separator and `.` are interpreted, everything
//! else is copied through untouched. The `str` entry points run the same
//! algorithm on `as_bytes()`.

use crate::lazy_buf::LazyBuf;
use crate::separator::Separator;
use std::borrow::Cow;

impl Separator {
    pub fn clean_bytes(self, path: &[u8]) -> Cow<'_, [u8]> {
        if path.is_empty() {
            return Cow::Borrowed(b".");
        }

        let n = path.len();
        let ends_segment = |i: usize| i == n || self.is_separator(path[i]);
        let rooted = self.is_separator(path[0]);

        // r: next byte to read from path.
        // dotdot: output index `..` must not backtrack past; either the root
        // separator or the end of a leading `../..` run.
        let mut out = LazyBuf::new(path);
        let (mut r, mut dotdot) = (0, 0);
        if rooted {
            out.push(self.as_bytes());
            r = 1;
            dotdot = 1;
        }

        while r < n {
            if self.is_separator(path[r]) {
                r += 1;
            } else if path[r] == b'.' && ends_segment(r + 1) {
                r += 1;
            } else if path[r] == b'.' && path[r + 1] == b'.' && ends_segment(r + 2) {
                r += 2;
                if out.len() > dotdot {
                    let mut w = out.len() - 1;
                    while w > dotdot && !self.is_separator(out.byte_at(w)) {
                        w -= 1;
                    }
                    out.rewind(w);
                } else if !rooted {
                    if !out.is_empty() {
                        out.push(self.as_bytes());
                    }
                    out.push(b"..");
                    dotdot = out.len();
                }
            } else {
                let needs_separator = if rooted { out.len() != 1 } else { !out.is_empty() };
                if needs_separator {
                    out.push(self.as_bytes());
                }
                let start = r;
                while r < n && !self.is_separator(path[r]) {
                    r += 1;
                }
                out.push(&path[start..r]);
            }
        }

        if out.is_empty() {
            out.push(b".");
        }

        out.into_cow()
    }

    pub fn clean(self, path: &str) -> Cow<'_, str> {
        utf8_cow(self.clean_bytes(path.as_bytes()))
    }
}

/// Converts output computed from the bytes of a `str` back to `str`. Every
/// cut falls next to an ASCII separator or `.`, so UTF-8 input always yields
/// UTF-8 output and the lossy branch never rewrites anything.
pub(crate) fn utf8_cow(bytes: Cow<'_, [u8]>) -> Cow<'_, str> {
    match bytes {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
        Cow::Owned(bytes) => Cow::Owned(utf8_string(bytes)),
    }
}

pub(crate) fn utf8_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Cleans `path` using the default `/` separator.
///
/// ```
/// assert_eq!(vfspath::clean("a/../../b"), "../b");
/// assert_eq!(vfspath::clean("/../"), "/");
/// assert_eq!(vfspath::clean(""), ".");
/// ```
pub fn clean(path: &str) -> Cow<'_, str> {
    Separator::DEFAULT.clean(path)
}

/// Byte form of [`clean`]; bytes other than `/` and `.` are not interpreted.
///
/// ```
/// assert_eq!(&*vfspath::clean_bytes(b"a//\xff/./b"), b"a/\xff/b");
/// ```
pub fn clean_bytes(path: &[u8]) -> Cow<'_, [u8]> {
    Separator::DEFAULT.clean_bytes(path)
}
