use super::BreakIterator;
use crate::break_property::GraphemeClusterBreak;
use crate::CharacterIterator;

/// Finds the boundaries of grapheme clusters.
#[derive(Clone, Debug)]
pub struct GraphemeBreakIterator<I> {
    iter: I,
}

impl<I: CharacterIterator> GraphemeBreakIterator<I> {
    /// Creates a break iterator bound to `iter`.
    pub fn new(iter: I) -> Self {
        GraphemeBreakIterator { iter }
    }

    /// Unbinds the character iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

fn is_grapheme_boundary(prev: GraphemeClusterBreak, next: GraphemeClusterBreak) -> bool {
    use GraphemeClusterBreak::*;
    match (prev, next) {
        (CR, LF) => false,                             // GB3
        (CR | LF | Control, _) => true,                // GB4
        (_, CR | LF | Control) => true,                // GB5
        (L, L | V | LV | LVT) => false,                // GB6
        (LV | V, V | T) => false,                      // GB7
        (LVT | T, T) => false,                         // GB8
        (_, Extend) => false,                          // GB9
        _ => true,                                     // GB10
    }
}

impl<I: CharacterIterator> BreakIterator for GraphemeBreakIterator<I> {
    type Iter = I;

    fn is_boundary(&self, at: &I) -> bool {
        if !at.has_next() || !at.has_previous() {
            return true; // GB1, GB2
        }
        let mut before = at.clone();
        before.previous();
        is_grapheme_boundary(
            GraphemeClusterBreak::of(before.current()),
            GraphemeClusterBreak::of(at.current()),
        )
    }

    fn character_iterator(&self) -> &I {
        &self.iter
    }

    fn character_iterator_mut(&mut self) -> &mut I {
        &mut self.iter
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{backward_boundaries, code_points, forward_boundaries};
    use super::*;
    use crate::{CodePointCharacterIterator, StringCharacterIterator};

    fn boundaries(s: &str) -> Vec<isize> {
        let text = code_points(s);
        let mut b = GraphemeBreakIterator::new(CodePointCharacterIterator::new(&text));
        let forward = forward_boundaries(&mut b);
        assert_eq!(forward, backward_boundaries(&mut b));
        forward
    }

    #[test]
    fn test_crlf() {
        assert_eq!(vec![0, 2], boundaries("\r\n"));
        assert_eq!(vec![0, 1, 3, 4], boundaries("a\r\nb"));
        assert_eq!(vec![0, 1, 2], boundaries("\n\r"));
    }

    #[test]
    fn test_extend() {
        assert_eq!(vec![0, 3, 4], boundaries("e\u{0301}\u{0327}x"));
        // a mark after a control stands alone
        assert_eq!(vec![0, 1, 2], boundaries("\n\u{0301}"));
        assert_eq!(vec![0, 2], boundaries("\u{0301}\u{0302}"));
    }

    #[test]
    fn test_hangul() {
        assert_eq!(vec![0, 3, 4], boundaries("\u{1100}\u{1161}\u{11A8}\u{1100}"));
        assert_eq!(vec![0, 2, 3], boundaries("\u{AC00}\u{11A8}\u{AC01}"));
        assert_eq!(vec![0, 1, 2], boundaries("\u{AC01}\u{1161}"));
    }

    #[test]
    fn test_surrogate_pairs() {
        let text: Vec<u16> = "\u{1F600}\u{0301}a".encode_utf16().collect();
        let mut b = GraphemeBreakIterator::new(StringCharacterIterator::new(&text));
        assert!(b.is_at_boundary());
        assert_eq!(1, b.next(1));
        assert_eq!(3, b.character_iterator().position());
        assert_eq!(1, b.next(5));
        assert_eq!(0, b.next(1));
        assert_eq!(2, b.next(-2));
        assert_eq!(0, b.character_iterator().position());
        assert_eq!(0, b.next(0));
        assert_eq!(0, b.previous(1));
    }

    #[test]
    fn test_is_boundary_does_not_move() {
        let text = code_points("ab\u{0301}");
        let b = GraphemeBreakIterator::new(CodePointCharacterIterator::new(&text));
        let mut at = CodePointCharacterIterator::new(&text);
        at.next();
        at.next();
        assert!(!b.is_boundary(&at));
        assert_eq!(2, at.position());
        assert_eq!(0, b.character_iterator().position());
    }
}
