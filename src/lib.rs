//! Lexical path manipulation for virtual file systems.
//!
//! Paths are byte strings delimited by a single separator byte (`/` unless a
//! [`Separator`] says otherwise). Each operation has a `&str` form and a
//! `&[u8]` form (`clean_bytes`, `Separator::split_bytes`, ...) for names that
//! are not UTF-8. Nothing here touches a real file system:
//! `..` and `.` are resolved purely by rewriting text, and every operation is
//! total over its input.

mod clean;
mod lazy_buf;
mod path_ops;
mod separator;

#[cfg(test)]
mod test_support;

pub use clean::{clean, clean_bytes};
pub use path_ops::{base, dir, ext, is_abs, join, join_bytes, split};
pub use separator::{Separator, SeparatorViolation, PATH_SEPARATOR};
