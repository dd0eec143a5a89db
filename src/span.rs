/// Half-open byte range into a description string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self { Self { start, end } }

    /// Zero for empty and inverted spans.
    pub fn len(&self) -> usize { self.end.saturating_sub(self.start) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Index of the last byte covered by the span, `None` when it covers nothing.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() { None } else { Some(self.end - 1) }
    }

    /// Bytes between the first and the last byte, e.g. the arguments of `<...>`.
    /// Spans shorter than two bytes have an empty interior at `end`.
    pub fn inner(&self) -> Span {
        if self.len() < 2 {
            return Span::new(self.end, self.end);
        }
        Span::new(self.start + 1, self.end - 1)
    }

    /// Slices the source. Spans produced by this crate always fall on ASCII
    /// delimiters, so the bounds are char boundaries.
    pub fn as_str<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}
