use crate::ucd::{legacy_ctype, BinaryProperty};
use crate::{utf16, CharacterIterator, CodePoint, Error, Result};

/// How an [`IdentifierSyntax`] classifies characters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CharacterClassification {
    /// Only ASCII letters, and digits after the first character.
    Ascii,
    /// Classes in the manner of `<ctype.h>`; see [`legacy_ctype`].
    LegacyPosix,
    /// The default identifier syntax of UAX #31 (ID_Start and ID_Continue).
    #[default]
    UnicodeDefault,
    /// The alternative identifier syntax of UAX #31: everything which is neither
    /// Pattern_Syntax nor Pattern_White_Space.
    UnicodeAlternative,
}

/// Decides which characters make up identifiers and which are white space.
///
/// Word boundary analysis uses this to find letters. The standard sets can be
/// tailored with [`override_identifier_start_characters`] and
/// [`override_identifier_non_start_characters`].
///
/// [`override_identifier_start_characters`]: IdentifierSyntax::override_identifier_start_characters
/// [`override_identifier_non_start_characters`]: IdentifierSyntax::override_identifier_non_start_characters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierSyntax {
    classification: CharacterClassification,
    added_start: Vec<CodePoint>,
    subtracted_start: Vec<CodePoint>,
    added_non_start: Vec<CodePoint>,
    subtracted_non_start: Vec<CodePoint>,
}

static DEFAULT_INSTANCE: IdentifierSyntax = IdentifierSyntax::new(CharacterClassification::UnicodeDefault);

impl IdentifierSyntax {
    /// Creates a syntax with the given classification and no overrides.
    pub const fn new(classification: CharacterClassification) -> Self {
        IdentifierSyntax {
            classification,
            added_start: Vec::new(),
            subtracted_start: Vec::new(),
            added_non_start: Vec::new(),
            subtracted_non_start: Vec::new(),
        }
    }

    /// Returns a shared instance with [`CharacterClassification::UnicodeDefault`].
    pub fn default_instance() -> &'static IdentifierSyntax {
        &DEFAULT_INSTANCE
    }

    /// Returns the classification.
    pub fn classification(&self) -> CharacterClassification {
        self.classification
    }

    /// Returns `true` if `cp` can start an identifier.
    pub fn is_identifier_start_character(&self, cp: CodePoint) -> bool {
        if self.added_start.binary_search(&cp).is_ok() {
            return true;
        }
        if self.subtracted_start.binary_search(&cp).is_ok() {
            return false;
        }
        match self.classification {
            CharacterClassification::Ascii => {
                (b'A' as u32..=b'Z' as u32).contains(&cp) || (b'a' as u32..=b'z' as u32).contains(&cp)
            }
            CharacterClassification::LegacyPosix => legacy_ctype::is_alpha(cp),
            CharacterClassification::UnicodeDefault => BinaryProperty::IdStart.contains(cp),
            CharacterClassification::UnicodeAlternative => is_alternative_identifier(cp),
        }
    }

    /// Returns `true` if `cp` can appear in an identifier after its first character.
    pub fn is_identifier_continue_character(&self, cp: CodePoint) -> bool {
        if self.added_non_start.binary_search(&cp).is_ok()
            || self.added_start.binary_search(&cp).is_ok()
        {
            return true;
        }
        if self.subtracted_start.binary_search(&cp).is_ok()
            || self.subtracted_non_start.binary_search(&cp).is_ok()
        {
            return false;
        }
        match self.classification {
            CharacterClassification::Ascii => {
                (b'A' as u32..=b'Z' as u32).contains(&cp)
                    || (b'a' as u32..=b'z' as u32).contains(&cp)
                    || (b'0' as u32..=b'9' as u32).contains(&cp)
            }
            CharacterClassification::LegacyPosix => legacy_ctype::is_word(cp),
            CharacterClassification::UnicodeDefault => BinaryProperty::IdContinue.contains(cp),
            CharacterClassification::UnicodeAlternative => is_alternative_identifier(cp),
        }
    }

    /// Returns `true` if `cp` is white space. A horizontal tab counts only with `include_tab`.
    pub fn is_white_space(&self, cp: CodePoint, include_tab: bool) -> bool {
        if include_tab && cp == 0x0009 {
            return true;
        }
        match self.classification {
            CharacterClassification::Ascii => cp == 0x0020,
            CharacterClassification::LegacyPosix => legacy_ctype::is_space(cp),
            CharacterClassification::UnicodeDefault | CharacterClassification::UnicodeAlternative => {
                BinaryProperty::PatternWhiteSpace.contains(cp)
            }
        }
    }

    /// Replaces the tailoring of the identifier start characters.
    ///
    /// Fails if a code point is not a scalar value, or if it is both added and subtracted.
    pub fn override_identifier_start_characters(
        &mut self,
        adding: &[CodePoint],
        subtracting: &[CodePoint],
    ) -> Result<()> {
        let (added, subtracted) = build_overrides(adding, subtracting)?;
        log::debug!(
            "overriding identifier start characters: {} added, {} subtracted",
            added.len(),
            subtracted.len()
        );
        self.added_start = added;
        self.subtracted_start = subtracted;
        Ok(())
    }

    /// Replaces the tailoring of the characters which may continue, but not start, an identifier.
    ///
    /// Fails if a code point is not a scalar value, or if it is both added and subtracted.
    pub fn override_identifier_non_start_characters(
        &mut self,
        adding: &[CodePoint],
        subtracting: &[CodePoint],
    ) -> Result<()> {
        let (added, subtracted) = build_overrides(adding, subtracting)?;
        log::debug!(
            "overriding identifier non-start characters: {} added, {} subtracted",
            added.len(),
            subtracted.len()
        );
        self.added_non_start = added;
        self.subtracted_non_start = subtracted;
        Ok(())
    }

    /// Advances `i` past an identifier starting at its position.
    ///
    /// Returns `false` without moving if no identifier starts there.
    pub fn eat_identifier<I: CharacterIterator>(&self, i: &mut I) -> bool {
        if !i.has_next() || !self.is_identifier_start_character(i.current()) {
            return false;
        }
        i.next();
        while i.has_next() && self.is_identifier_continue_character(i.current()) {
            i.next();
        }
        true
    }

    /// Advances `i` past any white space at its position, returning how many
    /// code points were skipped.
    pub fn eat_white_spaces<I: CharacterIterator>(&self, i: &mut I, include_tab: bool) -> usize {
        let mut count = 0;
        while i.has_next() && self.is_white_space(i.current(), include_tab) {
            i.next();
            count += 1;
        }
        count
    }
}

fn is_alternative_identifier(cp: CodePoint) -> bool {
    !BinaryProperty::PatternSyntax.contains(cp) && !BinaryProperty::PatternWhiteSpace.contains(cp)
}

fn build_overrides(
    adding: &[CodePoint],
    subtracting: &[CodePoint],
) -> Result<(Vec<CodePoint>, Vec<CodePoint>)> {
    if let Some(&cp) = adding
        .iter()
        .chain(subtracting)
        .find(|&&cp| !utf16::is_scalar_value(cp))
    {
        return Err(Error::InvalidScalarValue(cp));
    }
    let mut added = adding.to_vec();
    added.sort_unstable();
    added.dedup();
    let mut subtracted = subtracting.to_vec();
    subtracted.sort_unstable();
    subtracted.dedup();
    if subtracted.iter().any(|cp| added.binary_search(cp).is_ok()) {
        return Err(Error::InvalidArgument(
            "a character is both added and subtracted",
        ));
    }
    Ok((added, subtracted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodePointCharacterIterator;

    fn code_points(s: &str) -> Vec<CodePoint> {
        s.chars().map(|c| c as CodePoint).collect()
    }

    #[test]
    fn test_classifications() {
        let ascii = IdentifierSyntax::new(CharacterClassification::Ascii);
        assert!(ascii.is_identifier_start_character('a' as u32));
        assert!(!ascii.is_identifier_start_character('1' as u32));
        assert!(ascii.is_identifier_continue_character('1' as u32));
        assert!(!ascii.is_identifier_start_character(0x00E9));
        assert!(!ascii.is_white_space(0x0009, false));
        assert!(ascii.is_white_space(0x0009, true));

        let unicode = IdentifierSyntax::default_instance();
        assert_eq!(CharacterClassification::UnicodeDefault, unicode.classification());
        assert!(unicode.is_identifier_start_character(0x00E9));
        assert!(unicode.is_identifier_start_character(0x3042));
        assert!(!unicode.is_identifier_start_character(0x0301));
        assert!(unicode.is_identifier_continue_character(0x0301));
        assert!(unicode.is_white_space(0x200E, false));
        assert!(!unicode.is_white_space(0x3000, false));

        let posix = IdentifierSyntax::new(CharacterClassification::LegacyPosix);
        assert!(posix.is_identifier_continue_character('_' as u32));
        assert!(posix.is_white_space(0x3000, false));

        let alternative = IdentifierSyntax::new(CharacterClassification::UnicodeAlternative);
        assert!(alternative.is_identifier_start_character('1' as u32));
        assert!(!alternative.is_identifier_start_character('+' as u32));
    }

    #[test]
    fn test_overrides() {
        let mut syntax = IdentifierSyntax::default();
        syntax
            .override_identifier_start_characters(&['$' as u32, '_' as u32], &['a' as u32])
            .unwrap();
        assert!(syntax.is_identifier_start_character('$' as u32));
        assert!(!syntax.is_identifier_start_character('a' as u32));
        assert!(!syntax.is_identifier_continue_character('a' as u32));
        syntax
            .override_identifier_non_start_characters(&['-' as u32], &[])
            .unwrap();
        assert!(!syntax.is_identifier_start_character('-' as u32));
        assert!(syntax.is_identifier_continue_character('-' as u32));

        assert_eq!(
            Err(Error::InvalidScalarValue(0xD800)),
            syntax.override_identifier_start_characters(&[0xD800], &[])
        );
        assert!(matches!(
            syntax.override_identifier_start_characters(&['x' as u32], &['x' as u32]),
            Err(Error::InvalidArgument(_))
        ));
        // a failed override leaves the previous one in place
        assert!(syntax.is_identifier_start_character('$' as u32));
    }

    #[test]
    fn test_eat() {
        let syntax = IdentifierSyntax::default();
        let text = code_points("foo_1 \t bar");
        let mut i = CodePointCharacterIterator::new(&text);
        assert!(syntax.eat_identifier(&mut i));
        assert_eq!(5, i.position());
        assert!(!syntax.eat_identifier(&mut i));
        // horizontal tab is Pattern_White_Space
        assert_eq!(3, syntax.eat_white_spaces(&mut i, false));
        assert_eq!(8, i.position());
        assert!(syntax.eat_identifier(&mut i));
        assert!(!i.has_next());

        let ascii = IdentifierSyntax::new(CharacterClassification::Ascii);
        let mut i = CodePointCharacterIterator::with_start(&text, 0, text.len(), 5).unwrap();
        assert_eq!(1, ascii.eat_white_spaces(&mut i, false));
        assert_eq!(2, ascii.eat_white_spaces(&mut i, true));
    }
}
