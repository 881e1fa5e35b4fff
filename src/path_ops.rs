use crate::clean::utf8_string;
use crate::separator::Separator;
use std::borrow::Cow;
use std::ops::Range;

/// Lets `str` elements feed the byte-level join.
struct StrBytes<S>(S);

impl<S: AsRef<str>> AsRef<[u8]> for StrBytes<S> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref().as_bytes()
    }
}

impl Separator {
    /// Index just past the final separator, or 0 when there is none.
    fn split_index(self, path: &[u8]) -> usize {
        path.iter()
            .rposition(|&b| self.is_separator(b))
            .map_or(0, |i| i + 1)
    }

    /// Start of the final segment's extension, or `path.len()` without one.
    fn ext_index(self, path: &[u8]) -> usize {
        path.iter()
            .rev()
            .take_while(|&&b| !self.is_separator(b))
            .position(|&b| b == b'.')
            .map_or(path.len(), |back| path.len() - 1 - back)
    }

    /// Range of the final segment after trailing separators are dropped.
    /// A path made only of separators yields its first separator; the empty
    /// path yields `None`.
    fn base_range(self, path: &[u8]) -> Option<Range<usize>> {
        if path.is_empty() {
            return None;
        }
        let end = path
            .iter()
            .rposition(|&b| !self.is_separator(b))
            .map_or(0, |i| i + 1);
        if end == 0 {
            return Some(0..1);
        }
        Some(self.split_index(&path[..end])..end)
    }

    pub fn is_abs_bytes(self, path: &[u8]) -> bool {
        path.first().is_some_and(|&b| self.is_separator(b))
    }

    pub fn is_abs(self, path: &str) -> bool {
        self.is_abs_bytes(path.as_bytes())
    }

    /// Splits immediately after the final separator. The directory half keeps
    /// its trailing separator; neither half is cleaned.
    pub fn split_bytes(self, path: &[u8]) -> (&[u8], &[u8]) {
        path.split_at(self.split_index(path))
    }

    pub fn split(self, path: &str) -> (&str, &str) {
        path.split_at(self.split_index(path.as_bytes()))
    }

    /// Joins every element from the first non-empty one onward and cleans the
    /// result. Returns an empty buffer (not `"."`) when there is nothing to
    /// join.
    pub fn join_bytes<I, S>(self, elems: I) -> Vec<u8>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut elems = elems.into_iter().skip_while(|elem| elem.as_ref().is_empty());
        let Some(first) = elems.next() else {
            return Vec::new();
        };

        let mut joined = first.as_ref().to_vec();
        for elem in elems {
            joined.extend_from_slice(self.as_bytes());
            joined.extend_from_slice(elem.as_ref());
        }

        let cleaned_len = match self.clean_bytes(&joined) {
            Cow::Borrowed(prefix) => prefix.len(),
            Cow::Owned(cleaned) => return cleaned,
        };
        joined.truncate(cleaned_len);
        joined
    }

    pub fn join<I, S>(self, elems: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        utf8_string(self.join_bytes(elems.into_iter().map(StrBytes)))
    }

    pub fn ext_bytes(self, path: &[u8]) -> &[u8] {
        &path[self.ext_index(path)..]
    }

    pub fn ext(self, path: &str) -> &str {
        &path[self.ext_index(path.as_bytes())..]
    }

    pub fn base_bytes(self, path: &[u8]) -> &[u8] {
        self.base_range(path).map_or(&b"."[..], |range| &path[range])
    }

    pub fn base(self, path: &str) -> &str {
        self.base_range(path.as_bytes())
            .map_or(".", |range| &path[range])
    }

    pub fn dir_bytes(self, path: &[u8]) -> Cow<'_, [u8]> {
        let (dir, _) = self.split_bytes(path);
        self.clean_bytes(dir)
    }

    pub fn dir(self, path: &str) -> Cow<'_, str> {
        let (dir, _) = self.split(path);
        self.clean(dir)
    }
}

/// Reports whether `path` starts at the VFS root.
pub fn is_abs(path: &str) -> bool {
    Separator::DEFAULT.is_abs(path)
}

/// ```
/// assert_eq!(vfspath::split("/a/b"), ("/a/", "b"));
/// assert_eq!(vfspath::split("file"), ("", "file"));
/// ```
pub fn split(path: &str) -> (&str, &str) {
    Separator::DEFAULT.split(path)
}

/// ```
/// assert_eq!(vfspath::join(["", "a", "", "b"]), "a/b");
/// assert_eq!(vfspath::join(["", ""]), "");
/// ```
pub fn join<I, S>(elems: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Separator::DEFAULT.join(elems)
}

/// Extension of the final segment, dot included.
pub fn ext(path: &str) -> &str {
    Separator::DEFAULT.ext(path)
}

/// Final segment, ignoring trailing separators.
pub fn base(path: &str) -> &str {
    Separator::DEFAULT.base(path)
}

/// Cleaned directory part of `path`.
pub fn dir(path: &str) -> Cow<'_, str> {
    Separator::DEFAULT.dir(path)
}

/// Byte form of [`join`]; elements need not be UTF-8.
pub fn join_bytes<I, S>(elems: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    Separator::DEFAULT.join_bytes(elems)
}

#[cfg(test)]
mod tests {
    use super::{base, dir, ext, is_abs, join, join_bytes, split};
    use crate::clean::clean;
    use crate::separator::Separator;
    use crate::test_support::TRICKY_PATHS;

    #[test]
    fn is_abs_only_checks_leading_separator() {
        assert!(is_abs("/"));
        assert!(is_abs("/a/b"));
        assert!(is_abs("//a"));
        assert!(!is_abs(""));
        assert!(!is_abs("a/b"));
        assert!(!is_abs("./a"));
        assert!(!is_abs(r"\a"));
        assert!(!is_abs("C:/a"));
    }

    #[test]
    fn split_keeps_separator_on_directory_side() {
        assert_eq!(split("/a/b"), ("/a/", "b"));
        assert_eq!(split("a/b/"), ("a/b/", ""));
        assert_eq!(split("a"), ("", "a"));
        assert_eq!(split("/"), ("/", ""));
        assert_eq!(split(""), ("", ""));
        assert_eq!(split("a//b"), ("a//", "b"));
    }

    #[test]
    fn split_halves_concatenate_to_input() {
        for path in TRICKY_PATHS {
            let (dir, file) = split(path);
            assert_eq!(format!("{dir}{file}"), *path);
            assert!(!file.contains('/'), "{path:?}");
        }
    }

    #[test]
    fn join_skips_leading_empty_elements() {
        assert_eq!(join(["", "a", "", "b"]), "a/b");
        assert_eq!(join(["a", "b", "c"]), "a/b/c");
        assert_eq!(join(["a", ""]), "a");
        assert_eq!(join(["", "/a"]), "/a");
        assert_eq!(join(["/", "a"]), "/a");
        assert_eq!(join(["a/", "b"]), "a/b");
        assert_eq!(join(["a", "../b"]), "b");
        assert_eq!(join(["a", "../.."]), "..");
    }

    #[test]
    fn join_of_nothing_is_empty_not_dot() {
        assert_eq!(join(["", ""]), "");
        assert_eq!(join(Vec::<String>::new()), "");
        assert_eq!(join([""]), "");
        assert_eq!(join(["a", ".."]), ".");
    }

    #[test]
    fn join_accepts_owned_strings() {
        let elems = vec![String::from("usr"), String::from("lib")];
        assert_eq!(join(&elems), "usr/lib");
        assert_eq!(join(elems), "usr/lib");
    }

    #[test]
    fn join_matches_clean_of_concatenation() {
        for a in TRICKY_PATHS.iter().filter(|p| !p.is_empty()) {
            for b in TRICKY_PATHS.iter().filter(|p| !p.is_empty()) {
                assert_eq!(join([a, b]), clean(&format!("{a}/{b}")), "join({a:?}, {b:?})");
            }
        }
    }

    #[test]
    fn ext_reads_final_segment_only() {
        assert_eq!(ext("file.tar.gz"), ".gz");
        assert_eq!(ext("noext"), "");
        assert_eq!(ext("dir.d/noext"), "");
        assert_eq!(ext("/a/b.txt"), ".txt");
        assert_eq!(ext(".bashrc"), ".bashrc");
        assert_eq!(ext("trailing."), ".");
        assert_eq!(ext("a.b/"), "");
        assert_eq!(ext(""), "");
    }

    #[test]
    fn base_strips_trailing_separators() {
        assert_eq!(base("/a/b/"), "b");
        assert_eq!(base(""), ".");
        assert_eq!(base("/"), "/");
        assert_eq!(base("////"), "/");
        assert_eq!(base("a"), "a");
        assert_eq!(base("a/b"), "b");
        assert_eq!(base("/a/b//"), "b");
        assert_eq!(base("a/."), ".");
        assert_eq!(base("a/.."), "..");
    }

    #[test]
    fn dir_cleans_directory_part() {
        assert_eq!(dir("/a/b"), "/a");
        assert_eq!(dir("a/b"), "a");
        assert_eq!(dir("a"), ".");
        assert_eq!(dir(""), ".");
        assert_eq!(dir("/"), "/");
        assert_eq!(dir("/a"), "/");
        assert_eq!(dir("a/b/"), "a/b");
        assert_eq!(dir("x/../y/z"), "y");
        assert_eq!(dir("../../a"), "../..");
    }

    #[test]
    fn dir_matches_clean_of_split() {
        for path in TRICKY_PATHS {
            assert_eq!(dir(path), clean(split(path).0), "dir({path:?})");
        }
    }

    #[test]
    fn operations_follow_custom_separator() {
        let sep = Separator::new(b':').expect("colon separator");
        assert!(sep.is_abs(":a"));
        assert!(!sep.is_abs("/a"));
        assert_eq!(sep.split(":a:b.txt"), (":a:", "b.txt"));
        assert_eq!(sep.join(["", "a", "b/c"]), "a:b/c");
        assert_eq!(sep.join(["a", "..", "..", "x"]), "..:x");
        assert_eq!(sep.ext("a.d:b"), "");
        assert_eq!(sep.ext("a:b.c"), ".c");
        assert_eq!(sep.base("a:b::"), "b");
        assert_eq!(sep.base(":::"), ":");
        assert_eq!(sep.dir(":a::b:c"), ":a:b");
    }

    #[test]
    fn byte_operations_leave_non_utf8_segments_alone() {
        let sep = Separator::DEFAULT;
        assert!(sep.is_abs_bytes(b"/\xff"));
        assert!(!sep.is_abs_bytes(b"\xff/"));
        assert_eq!(
            sep.split_bytes(b"/\xfe/\xff.gz"),
            (&b"/\xfe/"[..], &b"\xff.gz"[..])
        );
        assert_eq!(sep.ext_bytes(b"/\xfe/\xff.g\x80"), b".g\x80");
        assert_eq!(sep.ext_bytes(b"\xff.d/x"), b"");
        assert_eq!(sep.base_bytes(b"/a/\xff//"), b"\xff");
        assert_eq!(sep.base_bytes(b""), b".");
        assert_eq!(sep.base_bytes(b"//"), b"/");
        assert_eq!(&*sep.dir_bytes(b"\xff//./x"), b"\xff");
    }

    #[test]
    fn join_bytes_skips_empty_and_cleans() {
        assert_eq!(join_bytes([&b""[..], b"a", b"", b"\xff"]), b"a/\xff");
        assert_eq!(join_bytes([&b"\xff"[..], b"..", b"b"]), b"b");
        assert_eq!(join_bytes([&b""[..], b""]), b"");
        assert_eq!(join_bytes(Vec::<Vec<u8>>::new()), b"");
    }
}
