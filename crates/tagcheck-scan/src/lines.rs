/// One line of source text.
///
/// `text` never contains the line terminator. `offset` is the byte offset of
/// the first character of the line within the whole source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    number: usize,
    offset: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    /// 1-based line number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Split `source` into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators. A trailing terminator does not produce an extra empty line.
#[must_use]
pub fn lines(source: &str) -> Lines<'_> {
    Lines {
        source,
        offset: 0,
        number: 0,
    }
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    source: &'a str,
    offset: usize,
    number: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.offset..];
        let (len, terminator) = match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) if rest[end..].starts_with("\r\n") => (end, 2),
            Some(end) => (end, 1),
            None => (rest.len(), 0),
        };

        self.number += 1;
        let line = Line {
            number: self.number,
            offset: self.offset,
            text: &rest[..len],
        };
        self.offset += len + terminator;

        Some(line)
    }
}
