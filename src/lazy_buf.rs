use std::borrow::Cow;

#[derive(Debug)]
enum Scratch {
    /// Output so far is byte-identical to the input prefix `path[..w]`.
    InPlace,
    Owned(Vec<u8>),
}

/// Write cursor for `clean` that only allocates once the output stops
/// matching the input.
#[derive(Debug)]
pub(crate) struct LazyBuf<'a> {
    path: &'a [u8],
    scratch: Scratch,
    w: usize,
}

impl<'a> LazyBuf<'a> {
    pub(crate) fn new(path: &'a [u8]) -> Self {
        Self {
            path,
            scratch: Scratch::InPlace,
            w: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.w
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.w == 0
    }

    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        match &self.scratch {
            Scratch::InPlace => self.path[index],
            Scratch::Owned(buf) => buf[index],
        }
    }

    /// Moves the cursor back to `w`; later writes overwrite what followed it.
    pub(crate) fn rewind(&mut self, w: usize) {
        debug_assert!(w <= self.w);
        self.w = w;
    }

    pub(crate) fn push(&mut self, bytes: &[u8]) {
        if let Scratch::InPlace = self.scratch {
            if self.path[self.w..].starts_with(bytes) {
                self.w += bytes.len();
                return;
            }
            let mut buf = Vec::with_capacity(self.path.len().max(bytes.len()));
            buf.extend_from_slice(&self.path[..self.w]);
            self.scratch = Scratch::Owned(buf);
        }
        if let Scratch::Owned(buf) = &mut self.scratch {
            buf.truncate(self.w);
            buf.extend_from_slice(bytes);
            self.w = buf.len();
        }
    }

    #[cfg(test)]
    fn is_borrowed(&self) -> bool {
        matches!(self.scratch, Scratch::InPlace)
    }

    pub(crate) fn into_cow(self) -> Cow<'a, [u8]> {
        match self.scratch {
            Scratch::InPlace => Cow::Borrowed(&self.path[..self.w]),
            Scratch::Owned(mut buf) => {
                buf.truncate(self.w);
                Cow::Owned(buf)
            }
        }
    }
}
