use crate::{utf16, CodePoint, Error, Result};
use std::{cmp::Ordering, fmt, ptr};

/// Returned by [`CharacterIterator::current`] when the cursor is at the end of the text.
pub const DONE: CodePoint = 0xFFFF_FFFF;

/// A bidirectional cursor over the code points of a text.
///
/// Positions lie between code points; `current()` is the code point right
/// after the cursor. The iterator also counts its net movement since the last
/// call to `first()` or `last()`, which is reported by `offset()`.
///
/// Two iterators can only be compared when they have the same concrete type.
/// Iterators over different buffers are neither equal nor ordered.
pub trait CharacterIterator: Clone + PartialEq + PartialOrd {
    /// Returns the code point at the cursor, or [`DONE`] at the end.
    fn current(&self) -> CodePoint;

    /// Returns `true` unless the cursor is at the end.
    fn has_next(&self) -> bool;

    /// Returns `true` unless the cursor is at the beginning.
    fn has_previous(&self) -> bool;

    /// Moves the cursor forward by one code point.
    ///
    /// Returns `false`, leaving the cursor where it is, if it was already at the end.
    fn next(&mut self) -> bool;

    /// Moves the cursor backward by one code point.
    ///
    /// Returns `false`, leaving the cursor where it is, if it was already at the beginning.
    fn previous(&mut self) -> bool;

    /// Moves the cursor to the beginning and resets the offset.
    fn first(&mut self);

    /// Moves the cursor to the end and resets the offset.
    fn last(&mut self);

    /// Returns the number of code points moved forward (negative: backward)
    /// since the last call to `first()` or `last()`, or since construction.
    fn offset(&self) -> isize;
}

/// A [`CharacterIterator`] over a UTF-16 buffer.
///
/// Surrogate pairs are decoded into one code point; isolated surrogates are
/// returned as they are.
#[derive(Clone)]
pub struct StringCharacterIterator<'a> {
    text: &'a [u16],
    first: usize,
    last: usize,
    position: usize,
    offset: isize,
}

impl<'a> StringCharacterIterator<'a> {
    /// Creates an iterator over the whole of `text`, positioned at its beginning.
    pub fn new(text: &'a [u16]) -> Self {
        StringCharacterIterator {
            text,
            first: 0,
            last: text.len(),
            position: 0,
            offset: 0,
        }
    }

    /// Creates an iterator over the code units `first..last` of `text`,
    /// positioned at `first`.
    pub fn with_range(text: &'a [u16], first: usize, last: usize) -> Result<Self> {
        Self::with_start(text, first, last, first)
    }

    /// Creates an iterator over the code units `first..last` of `text`,
    /// positioned at `start`.
    pub fn with_start(text: &'a [u16], first: usize, last: usize, start: usize) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidArgument("the first position is after the last"));
        }
        if last > text.len() {
            return Err(Error::InvalidArgument("the range exceeds the text"));
        }
        if !(first..=last).contains(&start) {
            return Err(Error::InvalidArgument("the start position is outside the range"));
        }
        Ok(StringCharacterIterator {
            text,
            first,
            last,
            position: start,
            offset: 0,
        })
    }

    /// Returns the position of the cursor, in code units from the beginning of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the iterated range of the buffer.
    pub fn text(&self) -> &'a [u16] {
        &self.text[self.first..self.last]
    }
}

impl CharacterIterator for StringCharacterIterator<'_> {
    fn current(&self) -> CodePoint {
        utf16::decode_first(&self.text[self.position..self.last]).map_or(DONE, |(cp, _)| cp)
    }

    fn has_next(&self) -> bool {
        self.position < self.last
    }

    fn has_previous(&self) -> bool {
        self.position > self.first
    }

    fn next(&mut self) -> bool {
        match utf16::decode_first(&self.text[self.position..self.last]) {
            Some((_, width)) => {
                self.position += width;
                self.offset += 1;
                true
            }
            None => false,
        }
    }

    fn previous(&mut self) -> bool {
        match utf16::decode_last(&self.text[self.first..self.position]) {
            Some((_, width)) => {
                self.position -= width;
                self.offset -= 1;
                true
            }
            None => false,
        }
    }

    fn first(&mut self) {
        self.position = self.first;
        self.offset = 0;
    }

    fn last(&mut self) {
        self.position = self.last;
        self.offset = 0;
    }

    fn offset(&self) -> isize {
        self.offset
    }
}

impl PartialEq for StringCharacterIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.text, other.text) && self.position == other.position
    }
}

impl PartialOrd for StringCharacterIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.text, other.text) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl fmt::Debug for StringCharacterIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringCharacterIterator")
            .field("range", &(self.first..self.last))
            .field("position", &self.position)
            .field("offset", &self.offset)
            .finish()
    }
}

/// A [`CharacterIterator`] over already decoded code points.
#[derive(Clone)]
pub struct CodePointCharacterIterator<'a> {
    text: &'a [CodePoint],
    first: usize,
    last: usize,
    position: usize,
    offset: isize,
}

impl<'a> CodePointCharacterIterator<'a> {
    /// Creates an iterator over the whole of `text`, positioned at its beginning.
    pub fn new(text: &'a [CodePoint]) -> Self {
        CodePointCharacterIterator {
            text,
            first: 0,
            last: text.len(),
            position: 0,
            offset: 0,
        }
    }

    /// Creates an iterator over `text[first..last]`, positioned at `first`.
    pub fn with_range(text: &'a [CodePoint], first: usize, last: usize) -> Result<Self> {
        Self::with_start(text, first, last, first)
    }

    /// Creates an iterator over `text[first..last]`, positioned at `start`.
    pub fn with_start(
        text: &'a [CodePoint],
        first: usize,
        last: usize,
        start: usize,
    ) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidArgument("the first position is after the last"));
        }
        if last > text.len() {
            return Err(Error::InvalidArgument("the range exceeds the text"));
        }
        if !(first..=last).contains(&start) {
            return Err(Error::InvalidArgument("the start position is outside the range"));
        }
        Ok(CodePointCharacterIterator {
            text,
            first,
            last,
            position: start,
            offset: 0,
        })
    }

    /// Returns the index of the cursor in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the iterated range of the buffer.
    pub fn text(&self) -> &'a [CodePoint] {
        &self.text[self.first..self.last]
    }
}

impl CharacterIterator for CodePointCharacterIterator<'_> {
    fn current(&self) -> CodePoint {
        if self.position < self.last {
            self.text[self.position]
        } else {
            DONE
        }
    }

    fn has_next(&self) -> bool {
        self.position < self.last
    }

    fn has_previous(&self) -> bool {
        self.position > self.first
    }

    fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.position += 1;
        self.offset += 1;
        true
    }

    fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.position -= 1;
        self.offset -= 1;
        true
    }

    fn first(&mut self) {
        self.position = self.first;
        self.offset = 0;
    }

    fn last(&mut self) {
        self.position = self.last;
        self.offset = 0;
    }

    fn offset(&self) -> isize {
        self.offset
    }
}

impl PartialEq for CodePointCharacterIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.text, other.text) && self.position == other.position
    }
}

impl PartialOrd for CodePointCharacterIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.text, other.text) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl fmt::Debug for CodePointCharacterIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePointCharacterIterator")
            .field("range", &(self.first..self.last))
            .field("position", &self.position)
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_surrogate_pairs() {
        let text = utf16("a\u{1F600}b");
        let mut i = StringCharacterIterator::new(&text);
        assert_eq!(0x61, i.current());
        assert!(i.next());
        assert_eq!(0x1F600, i.current());
        assert!(i.next());
        assert_eq!(3, i.position());
        assert_eq!(0x62, i.current());
        assert!(i.previous());
        assert_eq!(0x1F600, i.current());
        assert_eq!(1, i.offset());
    }

    #[test]
    fn test_isolated_surrogates() {
        let text = [0x0041, 0xD800, 0xDC00, 0xDC00, 0xD800];
        let mut i = StringCharacterIterator::new(&text);
        let mut seen = Vec::new();
        while i.has_next() {
            seen.push(i.current());
            i.next();
        }
        assert_eq!(vec![0x41, 0x10000, 0xDC00, 0xD800], seen);
        i.last();
        assert!(i.previous());
        assert_eq!(0xD800, i.current());
    }

    #[test]
    fn test_moving_past_ends() {
        let text = utf16("xy");
        let mut i = StringCharacterIterator::new(&text);
        assert!(!i.has_previous());
        assert!(!i.previous());
        assert_eq!(0, i.offset());
        i.last();
        assert!(!i.has_next());
        assert_eq!(DONE, i.current());
        assert!(!i.next());
        assert_eq!(0, i.offset());
        assert!(i.previous());
        assert!(i.previous());
        assert_eq!(-2, i.offset());
        i.first();
        assert_eq!(0, i.offset());
    }

    #[test]
    fn test_range() {
        let text = utf16("\u{1F600}abc");
        assert!(matches!(
            StringCharacterIterator::with_range(&text, 3, 2),
            Err(Error::InvalidArgument(_))
        ));
        assert!(StringCharacterIterator::with_range(&text, 0, 9).is_err());
        assert!(StringCharacterIterator::with_start(&text, 2, 4, 1).is_err());

        // the high surrogate is cut off from the range
        let mut i = StringCharacterIterator::with_range(&text, 1, 3).unwrap();
        assert_eq!(0xDE00, i.current());
        assert!(i.next());
        assert_eq!(0x61, i.current());
        assert!(i.next());
        assert!(!i.has_next());
        assert_eq!(&text[1..3], i.text());
    }

    #[test]
    fn test_comparison() {
        let text = utf16("abc");
        let other = utf16("abc");
        let i = StringCharacterIterator::new(&text);
        let mut j = i.clone();
        assert_eq!(i, j);
        j.next();
        assert!(i < j);
        assert_ne!(i, j);
        let k = StringCharacterIterator::new(&other);
        assert_ne!(i, k);
        assert_eq!(None, i.partial_cmp(&k));
    }

    #[test]
    fn test_code_point_iterator() {
        let text = [0x41, 0x301, 0x10000];
        let mut i = CodePointCharacterIterator::with_start(&text, 0, 3, 3).unwrap();
        assert!(!i.has_next());
        assert!(i.previous());
        assert_eq!(0x10000, i.current());
        assert_eq!(-1, i.offset());
        i.first();
        assert_eq!(0x41, i.current());
        assert!(CodePointCharacterIterator::with_range(&text, 2, 1).is_err());
    }
}
