use super::{is_newline, BreakIterator};
use crate::break_property::WordBreak;
use crate::ucd::{BinaryProperty, Script};
use crate::{CharacterIterator, CodePoint, Error, IdentifierSyntax, Locale, Result};
use std::cell::OnceCell;

bitflags::bitflags! {
    /// Selects which word boundaries a [`WordBreakIterator`] reports.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct WordComponent: u8 {
        /// Boundaries at the start of a word.
        const START_OF_SEGMENT = 0x01;
        /// Boundaries at the end of a word.
        const END_OF_SEGMENT = 0x02;
        /// Both starts and ends of words.
        const BOUNDARY_OF_SEGMENT = Self::START_OF_SEGMENT.bits() | Self::END_OF_SEGMENT.bits();
        /// Restricts the reported boundaries to those next to identifier characters.
        const ALPHA_NUMERIC = 0x04;
        /// Boundaries at the start of a run of identifier characters.
        const START_OF_ALPHANUMERICS = Self::START_OF_SEGMENT.bits() | Self::ALPHA_NUMERIC.bits();
        /// Boundaries at the end of a run of identifier characters.
        const END_OF_ALPHANUMERICS = Self::END_OF_SEGMENT.bits() | Self::ALPHA_NUMERIC.bits();
        /// Both starts and ends of runs of identifier characters.
        const BOUNDARY_OF_ALPHANUMERICS = Self::BOUNDARY_OF_SEGMENT.bits() | Self::ALPHA_NUMERIC.bits();
    }
}

impl Default for WordComponent {
    fn default() -> Self {
        WordComponent::BOUNDARY_OF_SEGMENT
    }
}

const PROLONGED_SOUND_MARK: CodePoint = 0x30FC;
const HALFWIDTH_PROLONGED_SOUND_MARK: CodePoint = 0xFF70;

fn is_prolonged_sound_mark(cp: CodePoint) -> bool {
    cp == PROLONGED_SOUND_MARK || cp == HALFWIDTH_PROLONGED_SOUND_MARK
}

/// Finds the boundaries of words.
///
/// Letters are the identifier start characters of the [`IdentifierSyntax`].
/// Adjacent letters of different scripts are separate words, except for
/// Common and Inherited characters and a few combinations in Japanese text.
#[derive(Clone, Debug)]
pub struct WordBreakIterator<I> {
    iter: I,
    component: WordComponent,
    syntax: IdentifierSyntax,
    locale: Locale,
}

/// A non-ignorable character next to a candidate boundary.
#[derive(Clone)]
struct Neighbor<I> {
    at: I,
    cp: CodePoint,
    class: WordBreak,
}

impl<I: CharacterIterator> WordBreakIterator<I> {
    /// Creates a break iterator reporting all word boundaries, with the default
    /// identifier syntax and the classic locale.
    pub fn new(iter: I) -> Self {
        WordBreakIterator {
            iter,
            component: WordComponent::default(),
            syntax: IdentifierSyntax::default(),
            locale: Locale::classic(),
        }
    }

    /// Creates a break iterator with the given options.
    pub fn with_options(
        iter: I,
        component: WordComponent,
        syntax: &IdentifierSyntax,
        locale: &Locale,
    ) -> Result<Self> {
        let mut b = WordBreakIterator {
            iter,
            component: WordComponent::default(),
            syntax: syntax.clone(),
            locale: locale.clone(),
        };
        b.set_component(component)?;
        Ok(b)
    }

    /// Returns the reported components.
    pub fn component(&self) -> WordComponent {
        self.component
    }

    /// Changes the reported components.
    ///
    /// Fails if neither starts nor ends of segments are selected.
    pub fn set_component(&mut self, component: WordComponent) -> Result<()> {
        if !component.intersects(WordComponent::BOUNDARY_OF_SEGMENT) {
            return Err(Error::InvalidArgument(
                "the component selects no boundary of segment",
            ));
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

    fn neighbor(&self, at: I) -> Neighbor<I> {
        let cp = at.current();
        let class = WordBreak::of(cp, &self.syntax, &self.locale);
        Neighbor { at, cp, class }
    }

    /// The nearest character before `at` which is not an extender or a format character.
    fn base_before(&self, at: &I) -> Option<Neighbor<I>> {
        let mut i = at.clone();
        while i.previous() {
            let n = self.neighbor(i.clone());
            if !matches!(n.class, WordBreak::Extend | WordBreak::Format) {
                return Some(n);
            }
        }
        None
    }

    /// The nearest character after `at` which is not an extender or a format character.
    fn base_after(&self, at: &I) -> Option<Neighbor<I>> {
        let mut i = at.clone();
        while i.next() && i.has_next() {
            let n = self.neighbor(i.clone());
            if !matches!(n.class, WordBreak::Extend | WordBreak::Format) {
                return Some(n);
            }
        }
        None
    }

    /// Extenders and format characters belong to the preceding character (WB4),
    /// unless it is the start of the text or a line end.
    fn base_at_or_before(&self, n: Neighbor<I>) -> Neighbor<I> {
        if !matches!(n.class, WordBreak::Extend | WordBreak::Format) {
            return n;
        }
        match self.base_before(&n.at) {
            Some(base) if !is_newline(base.cp) => base,
            _ => n,
        }
    }

    fn scripts_join(&self, prev: CodePoint, next: CodePoint) -> bool {
        let (prev, next) = (Script::of(prev), Script::of(next));
        prev == next
            || matches!(prev, Script::Common | Script::Inherited)
            || matches!(next, Script::Common | Script::Inherited)
            || (self.locale.is_japanese()
                && matches!(prev, Script::Han | Script::Katakana)
                && next == Script::Hiragana)
    }

    fn reports(&self, prev: CodePoint, next: CodePoint) -> bool {
        let component = self.component;
        let is_white_space = |cp| BinaryProperty::WhiteSpace.contains(cp);
        if !component.contains(WordComponent::END_OF_SEGMENT) && is_white_space(next) {
            return false;
        }
        if !component.contains(WordComponent::START_OF_SEGMENT) && is_white_space(prev) {
            return false;
        }
        if component.contains(WordComponent::ALPHA_NUMERIC) {
            return (component.contains(WordComponent::START_OF_SEGMENT)
                && self.syntax.is_identifier_continue_character(next))
                || (component.contains(WordComponent::END_OF_SEGMENT)
                    && self.syntax.is_identifier_continue_character(prev));
        }
        true
    }
}

/// The characters around one candidate boundary. The characters two positions
/// away are only looked up when a rule needs them.
struct Context<'a, I> {
    owner: &'a WordBreakIterator<I>,
    prev: Neighbor<I>,
    next: Neighbor<I>,
    prev_prev: OnceCell<Option<Neighbor<I>>>,
    next_next: OnceCell<Option<Neighbor<I>>>,
}

impl<'a, I: CharacterIterator> Context<'a, I> {
    fn new(owner: &'a WordBreakIterator<I>, prev: Neighbor<I>, next: Neighbor<I>) -> Self {
        Context {
            owner,
            prev,
            next,
            prev_prev: OnceCell::new(),
            next_next: OnceCell::new(),
        }
    }

    fn prev_prev(&self) -> Option<&Neighbor<I>> {
        self.prev_prev
            .get_or_init(|| self.owner.base_before(&self.prev.at))
            .as_ref()
    }

    fn next_next(&self) -> Option<&Neighbor<I>> {
        self.next_next
            .get_or_init(|| self.owner.base_after(&self.next.at))
            .as_ref()
    }

    fn is_boundary(&self) -> bool {
        use WordBreak::*;
        let (prev, next) = (&self.prev, &self.next);
        if is_newline(prev.cp) || is_newline(next.cp) {
            return true; // WB3a, WB3b
        }
        match (prev.class, next.class) {
            (ALetter, ALetter) => !self.owner.scripts_join(prev.cp, next.cp), // WB5
            (ALetter, MidLetter) | (Numeric, MidNum) => {
                // WB6, WB12
                !matches!(self.next_next(), Some(n) if n.class == prev.class)
            }
            (MidLetter, ALetter) | (MidNum, Numeric) => {
                // WB7, WB11
                !matches!(self.prev_prev(), Some(p) if p.class == next.class)
            }
            // WB8, WB9, WB10, WB13a, WB13b
            (ALetter | Numeric | ExtendNumLet, ALetter | Numeric | ExtendNumLet) => false,
            // WB13, WB13a, WB13b
            (Katakana, Katakana | ExtendNumLet) | (ExtendNumLet, Katakana) => false,
            (ALetter, Katakana) => {
                !(is_prolonged_sound_mark(next.cp) && Script::of(prev.cp) == Script::Hiragana)
            }
            (Katakana, ALetter) => !self.kana_joins_hiragana(),
            _ => true, // WB14
        }
    }

    /// A Katakana-class character followed by Hiragana.
    fn kana_joins_hiragana(&self) -> bool {
        if Script::of(self.next.cp) != Script::Hiragana {
            return false;
        }
        if self.owner.locale.is_japanese() {
            return true;
        }
        is_prolonged_sound_mark(self.prev.cp)
            && matches!(self.prev_prev(), Some(p) if Script::of(p.cp) == Script::Hiragana)
    }
}

impl<I: CharacterIterator> BreakIterator for WordBreakIterator<I> {
    type Iter = I;

    fn is_boundary(&self, at: &I) -> bool {
        if !at.has_next() || !at.has_previous() {
            return true; // WB1, WB2
        }
        let next = self.neighbor(at.clone());
        let mut before = at.clone();
        before.previous();
        let raw_prev = self.neighbor(before);
        if raw_prev.cp == 0x000D && next.cp == 0x000A {
            return false; // WB3
        }
        let context = if is_newline(raw_prev.cp) || is_newline(next.cp) {
            Context::new(self, raw_prev, next)
        } else if matches!(next.class, WordBreak::Extend | WordBreak::Format) {
            return false; // WB4
        } else {
            let prev = self.base_at_or_before(raw_prev);
            Context::new(self, prev, next)
        };
        context.is_boundary() && self.reports(context.prev.cp, context.next.cp)
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
    use crate::{CharacterClassification, CodePointCharacterIterator};

    fn boundaries_with(s: &str, component: WordComponent, locale: &str) -> Vec<isize> {
        let text = code_points(s);
        let mut b = WordBreakIterator::with_options(
            CodePointCharacterIterator::new(&text),
            component,
            IdentifierSyntax::default_instance(),
            &Locale::new(locale),
        )
        .unwrap();
        let forward = forward_boundaries(&mut b);
        assert_eq!(forward, backward_boundaries(&mut b));
        forward
    }

    fn boundaries(s: &str) -> Vec<isize> {
        boundaries_with(s, WordComponent::BOUNDARY_OF_SEGMENT, "")
    }

    #[test]
    fn test_basic() {
        assert_eq!(vec![0, 3, 4, 7], boundaries("foo bar"));
        assert_eq!(vec![0, 5, 6, 10], boundaries("can't stop"));
        assert_eq!(vec![0, 4, 5, 6], boundaries("3.14 a"));
        assert_eq!(vec![0, 7], boundaries("foo_bar"));
        assert_eq!(vec![0, 2], boundaries("a1"));
        assert_eq!(vec![0, 1, 2], boundaries("a'"));
        assert_eq!(vec![0, 1, 3, 4], boundaries("a\r\nb"));
        assert_eq!(vec![0, 3], boundaries("e\u{0301}x"));
        assert_eq!(vec![0, 1, 2, 3], boundaries("\n\u{0301}a"));
    }

    #[test]
    fn test_scripts() {
        assert_eq!(vec![0, 1, 2], boundaries("a\u{03B2}"));
        assert_eq!(vec![0, 4], boundaries("\u{30AB}\u{30BF}\u{30AB}\u{30CA}"));
        assert_eq!(vec![0, 2, 4], boundaries("\u{6F22}\u{5B57}\u{304B}\u{306A}"));
        assert_eq!(
            vec![0, 4],
            boundaries_with(
                "\u{6F22}\u{5B57}\u{304B}\u{306A}",
                WordComponent::BOUNDARY_OF_SEGMENT,
                "ja_JP"
            )
        );
    }

    #[test]
    fn test_prolonged_sound_mark() {
        assert_eq!(vec![0, 5], boundaries("\u{3072}\u{3089}\u{304C}\u{306A}\u{30FC}"));
        assert_eq!(vec![0, 3, 4], boundaries("abc\u{30FC}"));
        assert_eq!(vec![0, 3], boundaries("\u{3072}\u{30FC}\u{3089}"));
        assert_eq!(vec![0, 2, 3], boundaries("\u{30AB}\u{30FC}\u{3089}"));
        assert_eq!(
            vec![0, 3],
            boundaries_with("\u{30AB}\u{30FC}\u{3089}", WordComponent::BOUNDARY_OF_SEGMENT, "ja")
        );
    }

    #[test]
    fn test_swedish_colon() {
        assert_eq!(vec![0, 1, 2, 3], boundaries("a:b"));
        assert_eq!(
            vec![0, 3],
            boundaries_with("a:b", WordComponent::BOUNDARY_OF_SEGMENT, "sv_SE")
        );
    }

    #[test]
    fn test_components() {
        assert_eq!(
            vec![0, 4, 7],
            boundaries_with("foo bar", WordComponent::START_OF_SEGMENT, "")
        );
        assert_eq!(
            vec![0, 3, 7],
            boundaries_with("foo bar", WordComponent::END_OF_SEGMENT, "")
        );
        assert_eq!(
            vec![0, 5, 8],
            boundaries_with("foo, bar", WordComponent::START_OF_ALPHANUMERICS, "")
        );
        assert_eq!(
            vec![0, 3, 8],
            boundaries_with("foo, bar", WordComponent::END_OF_ALPHANUMERICS, "")
        );
        assert_eq!(
            vec![0, 3, 5, 8],
            boundaries_with("foo, bar", WordComponent::BOUNDARY_OF_ALPHANUMERICS, "")
        );
    }

    #[test]
    fn test_alphanumerics_with_mid_punctuation() {
        assert_eq!(
            vec![0, 6, 9],
            boundaries_with("can't 3.5", WordComponent::START_OF_ALPHANUMERICS, "")
        );
        assert_eq!(
            vec![0, 5, 9],
            boundaries_with("can't 3.5", WordComponent::END_OF_ALPHANUMERICS, "")
        );
        // a trailing apostrophe or full stop is not part of the word
        assert_eq!(
            vec![0, 5, 7],
            boundaries_with("can' 3.", WordComponent::START_OF_ALPHANUMERICS, "")
        );
        assert_eq!(
            vec![0, 3, 6, 7],
            boundaries_with("can' 3.", WordComponent::END_OF_ALPHANUMERICS, "")
        );
    }

    #[test]
    fn test_invalid_component() {
        let text = code_points("x");
        let mut b = WordBreakIterator::new(CodePointCharacterIterator::new(&text));
        assert_eq!(WordComponent::BOUNDARY_OF_SEGMENT, b.component());
        assert!(b.set_component(WordComponent::ALPHA_NUMERIC).is_err());
        assert!(b.set_component(WordComponent::empty()).is_err());
        assert_eq!(WordComponent::BOUNDARY_OF_SEGMENT, b.component());
    }

    #[test]
    fn test_identifier_syntax() {
        let text = code_points("x$y");
        let mut syntax = IdentifierSyntax::new(CharacterClassification::Ascii);
        let mut b = WordBreakIterator::with_options(
            CodePointCharacterIterator::new(&text),
            WordComponent::BOUNDARY_OF_SEGMENT,
            &syntax,
            &Locale::classic(),
        )
        .unwrap();
        assert_eq!(vec![0, 1, 2, 3], forward_boundaries(&mut b));

        syntax
            .override_identifier_start_characters(&['$' as u32], &[])
            .unwrap();
        let mut b = WordBreakIterator::with_options(
            CodePointCharacterIterator::new(&text),
            WordComponent::BOUNDARY_OF_SEGMENT,
            &syntax,
            &Locale::classic(),
        )
        .unwrap();
        assert_eq!(vec![0, 3], forward_boundaries(&mut b));
    }
}
