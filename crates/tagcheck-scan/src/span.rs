/// A byte range within the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: u32,
    length: u32,
}

impl Span {
    #[must_use]
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Construct a span from integer bounds expressed as byte offsets.
    #[must_use]
    pub fn from_bounds(start: usize, end: usize) -> Self {
        let start_u32 = u32::try_from(start).unwrap_or(u32::MAX);
        let length = end.saturating_sub(start);
        let length_u32 = u32::try_from(length).unwrap_or(u32::MAX.saturating_sub(start_u32));
        Self::new(start_u32, length_u32)
    }

    #[must_use]
    pub fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn start_usize(self) -> usize {
        self.start as usize
    }

    #[must_use]
    pub fn end(self) -> u32 {
        self.start.saturating_add(self.length)
    }

    #[must_use]
    pub fn end_usize(self) -> usize {
        self.end() as usize
    }

    #[must_use]
    pub fn length(self) -> u32 {
        self.length
    }

    /// Shift the span right by `offset` bytes.
    #[must_use]
    pub fn shift(self, offset: usize) -> Self {
        Self::from_bounds(self.start_usize() + offset, self.end_usize() + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bounds_computes_length() {
        let span = Span::from_bounds(4, 10);
        assert_eq!(span.start(), 4);
        assert_eq!(span.length(), 6);
        assert_eq!(span.end(), 10);
    }

    #[test]
    fn from_bounds_saturates_inverted_range() {
        let span = Span::from_bounds(10, 4);
        assert_eq!(span.length(), 0);
    }

    #[test]
    fn shift_moves_both_ends() {
        let span = Span::new(2, 3).shift(10);
        assert_eq!(span, Span::new(12, 3));
    }
}
