//! Text boundary analysis (UAX #29).
//!
//! A break iterator binds a [`CharacterIterator`] and moves it from boundary
//! to boundary. Whether a position is a boundary is decided by looking at a
//! few characters around it, never by remembering earlier decisions, so any
//! position can be tested and both directions find the same boundaries.

use crate::CharacterIterator;

mod grapheme;
mod sentence;
mod word;

pub use grapheme::GraphemeBreakIterator;
pub use sentence::{SentenceBreakIterator, SentenceComponent};
pub use word::{WordBreakIterator, WordComponent};

/// Code points which end a line.
pub(crate) fn is_newline(cp: crate::CodePoint) -> bool {
    matches!(cp, 0x000A..=0x000D | 0x0085 | 0x2028 | 0x2029)
}

/// Common interface of the break iterators.
pub trait BreakIterator {
    /// The bound character iterator type.
    type Iter: CharacterIterator;

    /// Returns `true` if the position of `at` is a boundary.
    ///
    /// `at` must iterate the same text as the bound iterator. The beginning and
    /// the end of the text are always boundaries.
    fn is_boundary(&self, at: &Self::Iter) -> bool;

    /// Returns the bound character iterator.
    fn character_iterator(&self) -> &Self::Iter;

    /// Returns the bound character iterator, for repositioning it.
    fn character_iterator_mut(&mut self) -> &mut Self::Iter;

    /// Returns `true` if the bound iterator is at a boundary.
    fn is_at_boundary(&self) -> bool {
        self.is_boundary(self.character_iterator())
    }

    /// Moves the bound iterator across `amount` boundaries, forward if it is
    /// positive and backward if negative.
    ///
    /// Returns the number of boundaries actually crossed, which is less than
    /// `|amount|` only if an end of the text was reached.
    fn next(&mut self, amount: isize) -> usize {
        let mut crossed = 0;
        for _ in 0..amount.unsigned_abs() {
            let moved = if amount > 0 {
                self.next_boundary()
            } else {
                self.previous_boundary()
            };
            if !moved {
                break;
            }
            crossed += 1;
        }
        log::trace!(
            "crossed {} of {} boundaries, now at offset {}",
            crossed,
            amount,
            self.character_iterator().offset()
        );
        crossed
    }

    /// Moves the bound iterator backward across `amount` boundaries.
    fn previous(&mut self, amount: usize) -> usize {
        let mut crossed = 0;
        while crossed < amount && self.previous_boundary() {
            crossed += 1;
        }
        crossed
    }

    /// Moves the bound iterator to the next boundary. Returns `false` at the end.
    fn next_boundary(&mut self) -> bool {
        if !self.character_iterator_mut().next() {
            return false;
        }
        while !self.is_at_boundary() {
            self.character_iterator_mut().next();
        }
        true
    }

    /// Moves the bound iterator to the previous boundary. Returns `false` at the beginning.
    fn previous_boundary(&mut self) -> bool {
        if !self.character_iterator_mut().previous() {
            return false;
        }
        while !self.is_at_boundary() {
            self.character_iterator_mut().previous();
        }
        true
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::BreakIterator;
    use crate::{CharacterIterator, CodePoint};

    pub(crate) fn code_points(s: &str) -> Vec<CodePoint> {
        s.chars().map(CodePoint::from).collect()
    }

    /// Boundary offsets found walking forward from the beginning.
    pub(crate) fn forward_boundaries<B: BreakIterator>(b: &mut B) -> Vec<isize> {
        b.character_iterator_mut().first();
        let mut found = vec![0];
        while b.next(1) == 1 {
            found.push(b.character_iterator().offset());
        }
        found
    }

    /// Boundary offsets found walking backward from the end.
    pub(crate) fn backward_boundaries<B: BreakIterator>(b: &mut B) -> Vec<isize> {
        b.character_iterator_mut().first();
        while b.character_iterator_mut().next() {}
        // the offset still counts from the beginning
        let mut found = vec![b.character_iterator().offset()];
        while b.next(-1) == 1 {
            found.push(b.character_iterator().offset());
        }
        found.reverse();
        found
    }
}
