use super::BreakIterator;
use crate::break_property::SentenceBreak;
use crate::{CharacterIterator, Error, IdentifierSyntax, Locale, Result};

bitflags::bitflags! {
    /// Selects which sentence boundaries a [`SentenceBreakIterator`] reports.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SentenceComponent: u8 {
        /// Boundaries where a sentence starts, after its trailing spaces and separator.
        const START_OF_SEGMENT = 0x01;
        /// Boundaries where the visible text of a sentence ends.
        const END_OF_SEGMENT = 0x02;
        /// Both starts and ends of sentences.
        const BOUNDARY_OF_SEGMENT = Self::START_OF_SEGMENT.bits() | Self::END_OF_SEGMENT.bits();
    }
}

impl Default for SentenceComponent {
    fn default() -> Self {
        SentenceComponent::BOUNDARY_OF_SEGMENT
    }
}

/// Finds the boundaries of sentences.
#[derive(Clone, Debug)]
pub struct SentenceBreakIterator<I> {
    iter: I,
    component: SentenceComponent,
    syntax: IdentifierSyntax,
    locale: Locale,
}

#[derive(Clone)]
struct Neighbor<I> {
    at: I,
    class: SentenceBreak,
}

fn is_ignorable(class: SentenceBreak) -> bool {
    matches!(class, SentenceBreak::Extend | SentenceBreak::Format)
}

fn is_letter(class: SentenceBreak) -> bool {
    matches!(
        class,
        SentenceBreak::Upper | SentenceBreak::Lower | SentenceBreak::OLetter
    )
}

impl<I: CharacterIterator> SentenceBreakIterator<I> {
    /// Creates a break iterator reporting starts and ends of sentences.
    pub fn new(iter: I) -> Self {
        SentenceBreakIterator {
            iter,
            component: SentenceComponent::default(),
            syntax: IdentifierSyntax::default(),
            locale: Locale::classic(),
        }
    }

    /// Creates a break iterator with the given options.
    pub fn with_options(
        iter: I,
        component: SentenceComponent,
        syntax: &IdentifierSyntax,
        locale: &Locale,
    ) -> Result<Self> {
        let mut b = SentenceBreakIterator {
            iter,
            component: SentenceComponent::default(),
            syntax: syntax.clone(),
            locale: locale.clone(),
        };
        b.set_component(component)?;
        Ok(b)
    }

    /// Returns the reported components.
    pub fn component(&self) -> SentenceComponent {
        self.component
    }

    /// Changes the reported components. Fails if `component` is empty.
    pub fn set_component(&mut self, component: SentenceComponent) -> Result<()> {
        if component.is_empty() {
            return Err(Error::InvalidArgument("the component is empty"));
        }
        self.component = component;
        Ok(())
    }

    /// Returns the identifier syntax.
    pub fn identifier_syntax(&self) -> &IdentifierSyntax {
        &self.syntax
    }

    /// Returns the locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Unbinds the character iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    fn neighbor(at: I) -> Neighbor<I> {
        let class = SentenceBreak::of(at.current());
        Neighbor { at, class }
    }

    fn base_before(at: &I) -> Option<Neighbor<I>> {
        let mut i = at.clone();
        while i.previous() {
            let n = Self::neighbor(i.clone());
            if !is_ignorable(n.class) {
                return Some(n);
            }
        }
        None
    }

    /// The character before `at`, or the character it is attached to if that is an extender.
    fn base_at_or_before(at: &I) -> Option<Neighbor<I>> {
        let mut i = at.clone();
        if !i.previous() {
            return None;
        }
        let raw = Self::neighbor(i);
        if !is_ignorable(raw.class) {
            return Some(raw);
        }
        Self::base_before(&raw.at).or(Some(raw))
    }

    /// SB8: only characters which cannot start a sentence lie between `at` and a lowercase letter.
    fn lower_follows(at: &I) -> bool {
        let mut i = at.clone();
        while i.has_next() {
            match SentenceBreak::of(i.current()) {
                SentenceBreak::Lower => return true,
                SentenceBreak::OLetter
                | SentenceBreak::Upper
                | SentenceBreak::Sep
                | SentenceBreak::STerm
                | SentenceBreak::ATerm => return false,
                _ => {}
            }
            i.next();
        }
        false
    }

    /// A capital letter preceded by the start of the text or by something other than a letter.
    fn is_single_capital(n: &Neighbor<I>) -> bool {
        n.class == SentenceBreak::Upper
            && !matches!(Self::base_before(&n.at), Some(p) if is_letter(p.class))
    }

    /// The boundaries of sentences including their trailing spaces and separator.
    fn is_raw_boundary(&self, at: &I) -> bool {
        use SentenceBreak::*;
        if !at.has_next() || !at.has_previous() {
            return true; // SB1, SB2
        }
        let mut before = at.clone();
        before.previous();
        let raw_prev = before.current();
        let next_cp = at.current();
        if raw_prev == 0x000D && next_cp == 0x000A {
            return false; // SB3
        }
        if SentenceBreak::of(raw_prev) == Sep {
            return true; // SB4
        }
        let next = SentenceBreak::of(next_cp);
        if is_ignorable(next) {
            return false; // SB5
        }

        let mut base = Self::base_at_or_before(at);
        let mut has_sp = false;
        while let Some(n) = base.as_ref().filter(|n| n.class == Sp) {
            has_sp = true;
            base = Self::base_before(&n.at);
        }
        let mut has_close = false;
        while let Some(n) = base.as_ref().filter(|n| n.class == Close) {
            has_close = true;
            base = Self::base_before(&n.at);
        }
        let term = match base {
            Some(n) if matches!(n.class, ATerm | STerm) => n,
            _ => return false, // SB12
        };

        if term.class == ATerm {
            let before_term = Self::base_before(&term.at);
            if !has_sp && !has_close {
                if next == Numeric {
                    return false; // SB6
                }
                if next == Upper && matches!(&before_term, Some(p) if p.class == Upper) {
                    return false; // SB7
                }
            }
            if (has_sp || has_close)
                && next == Upper
                && matches!(&before_term, Some(p) if Self::is_single_capital(p))
            {
                return false;
            }
            if Self::lower_follows(at) {
                return false; // SB8
            }
        }
        if matches!(next, ATerm | STerm) {
            return false; // SB8a
        }
        if !has_sp && matches!(next, Close | Sp | Sep) {
            return false; // SB9
        }
        if matches!(next, Sp | Sep) {
            return false; // SB10
        }
        true // SB11
    }

    /// The position right after the visible text of a sentence.
    fn is_end_of_visible_text(&self, at: &I) -> bool {
        if !at.has_next() || !at.has_previous() {
            return true;
        }
        if is_ignorable(SentenceBreak::of(at.current())) {
            return false;
        }
        if matches!(
            Self::base_at_or_before(at),
            Some(n) if matches!(n.class, SentenceBreak::Sp | SentenceBreak::Sep)
        ) {
            return false;
        }
        let mut i = at.clone();
        while i.has_next() && SentenceBreak::of(i.current()) == SentenceBreak::Sp {
            i.next();
            while i.has_next() && is_ignorable(SentenceBreak::of(i.current())) {
                i.next();
            }
        }
        if i.has_next() && SentenceBreak::of(i.current()) == SentenceBreak::Sep {
            let cr = i.current() == 0x000D;
            i.next();
            if cr && i.has_next() && i.current() == 0x000A {
                i.next();
            }
        }
        !i.has_next() || self.is_raw_boundary(&i)
    }
}

impl<I: CharacterIterator> BreakIterator for SentenceBreakIterator<I> {
    type Iter = I;

    fn is_boundary(&self, at: &I) -> bool {
        (self.component.contains(SentenceComponent::START_OF_SEGMENT) && self.is_raw_boundary(at))
            || (self.component.contains(SentenceComponent::END_OF_SEGMENT)
                && self.is_end_of_visible_text(at))
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
    use crate::CodePointCharacterIterator;

    fn boundaries_with(s: &str, component: SentenceComponent) -> Vec<isize> {
        let text = code_points(s);
        let mut b = SentenceBreakIterator::with_options(
            CodePointCharacterIterator::new(&text),
            component,
            IdentifierSyntax::default_instance(),
            &Locale::classic(),
        )
        .unwrap();
        let forward = forward_boundaries(&mut b);
        assert_eq!(forward, backward_boundaries(&mut b));
        forward
    }

    fn starts(s: &str) -> Vec<isize> {
        boundaries_with(s, SentenceComponent::START_OF_SEGMENT)
    }

    #[test]
    fn test_components() {
        assert_eq!(
            vec![0, 3, 4, 10],
            boundaries_with("Hi. There.", SentenceComponent::BOUNDARY_OF_SEGMENT)
        );
        assert_eq!(vec![0, 4, 10], starts("Hi. There."));
        assert_eq!(
            vec![0, 3, 10],
            boundaries_with("Hi. There.", SentenceComponent::END_OF_SEGMENT)
        );
    }

    #[test]
    fn test_separators() {
        assert_eq!(vec![0, 5, 10], starts("Hi.\r\nThere"));
        assert_eq!(
            vec![0, 3, 10],
            boundaries_with("Hi.\r\nThere", SentenceComponent::END_OF_SEGMENT)
        );
        assert_eq!(vec![0, 2, 3], starts("a\u{2029}b"));
        assert_eq!(vec![0, 4, 5, 8], starts("abc\n\ndef"));
        assert_eq!(
            vec![0, 3, 8],
            boundaries_with("abc\n\ndef", SentenceComponent::END_OF_SEGMENT)
        );
    }

    #[test]
    fn test_full_stop() {
        assert_eq!(vec![0, 6], starts("3.14 x"));
        assert_eq!(vec![0, 9], starts("U.S.A. is"));
        assert_eq!(vec![0, 15, 19], starts("etc. and more. Next"));
        assert_eq!(vec![0, 5], starts("x. (a"));
        assert_eq!(vec![0, 4, 9], starts("Mr. Smith"));
    }

    #[test]
    fn test_single_capital() {
        assert_eq!(vec![0, 8], starts("J. Smith"));
        assert_eq!(vec![0, 10], starts("A.J. Smith"));
    }

    #[test]
    fn test_terminators() {
        assert_eq!(vec![0, 8, 12], starts("Really? Yes!"));
        assert_eq!(vec![0, 6], starts("What?!"));
        assert_eq!(vec![0, 10, 14], starts("He left.) Then"));
        assert_eq!(vec![0, 5, 8], starts("Go.\u{0301} Now"));
    }

    #[test]
    fn test_invalid_component() {
        let text = code_points("x");
        let mut b = SentenceBreakIterator::new(CodePointCharacterIterator::new(&text));
        assert!(b.set_component(SentenceComponent::empty()).is_err());
        assert_eq!(SentenceComponent::BOUNDARY_OF_SEGMENT, b.component());
        b.set_component(SentenceComponent::END_OF_SEGMENT).unwrap();
        assert_eq!(SentenceComponent::END_OF_SEGMENT, b.component());
    }
}
