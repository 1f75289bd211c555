//! Derived properties for text segmentation (UAX #29).
//!
//! These are computed from the General_Category, Script and a few binary
//! properties rather than read from the segmentation property files, so that
//! word analysis can follow the identifier syntax in use.

use crate::ucd::{BinaryProperty, GeneralCategory, HangulSyllableType, Script};
use crate::{CodePoint, IdentifierSyntax, Locale};

const ZERO_WIDTH_NON_JOINER: CodePoint = 0x200C;
const ZERO_WIDTH_JOINER: CodePoint = 0x200D;
const NO_BREAK_SPACE: CodePoint = 0x00A0;
const HEBREW_PUNCTUATION_GERESH: CodePoint = 0x05F3;

/// Values of the Grapheme_Cluster_Break property.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphemeClusterBreak {
    /// Carriage return.
    CR,
    /// Line feed.
    LF,
    /// Other control and format characters, and line/paragraph separators.
    Control,
    /// Grapheme extenders.
    Extend,
    /// Hangul leading jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing jamo.
    T,
    /// Hangul LV syllables.
    LV,
    /// Hangul LVT syllables.
    LVT,
    /// Anything else.
    Other,
}

impl GraphemeClusterBreak {
    /// Returns the Grapheme_Cluster_Break of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        use GeneralCategory::*;
        match cp {
            0x000D => return GraphemeClusterBreak::CR,
            0x000A => return GraphemeClusterBreak::LF,
            _ => {}
        }
        if cp != ZERO_WIDTH_NON_JOINER
            && cp != ZERO_WIDTH_JOINER
            && matches!(
                GeneralCategory::of(cp),
                LineSeparator | ParagraphSeparator | Control | Format
            )
        {
            return GraphemeClusterBreak::Control;
        }
        if BinaryProperty::GraphemeExtend.contains(cp) {
            return GraphemeClusterBreak::Extend;
        }
        match HangulSyllableType::of(cp) {
            HangulSyllableType::LeadingJamo => GraphemeClusterBreak::L,
            HangulSyllableType::VowelJamo => GraphemeClusterBreak::V,
            HangulSyllableType::TrailingJamo => GraphemeClusterBreak::T,
            HangulSyllableType::LvSyllable => GraphemeClusterBreak::LV,
            HangulSyllableType::LvtSyllable => GraphemeClusterBreak::LVT,
            HangulSyllableType::NotApplicable => GraphemeClusterBreak::Other,
        }
    }
}

/// Values of the Word_Break property.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordBreak {
    /// Carriage return.
    CR,
    /// Line feed.
    LF,
    /// Format characters other than the joiners.
    Format,
    /// Katakana, and the kana marks shared with Hiragana.
    Katakana,
    /// Grapheme extenders.
    Extend,
    /// Letters, as decided by the identifier syntax.
    ALetter,
    /// Punctuation allowed between letters.
    MidLetter,
    /// Punctuation allowed between digits.
    MidNum,
    /// Digits.
    Numeric,
    /// Connector punctuation.
    ExtendNumLet,
    /// Anything else.
    Other,
}

impl WordBreak {
    /// Returns the Word_Break of `cp`.
    ///
    /// Letters are the identifier start characters of `syntax`. The colon is a
    /// mid-letter under Swedish locales.
    pub fn of(cp: CodePoint, syntax: &IdentifierSyntax, locale: &Locale) -> Self {
        match cp {
            0x000D => return WordBreak::CR,
            0x000A => return WordBreak::LF,
            _ => {}
        }
        if is_format(cp) {
            return WordBreak::Format;
        }
        if Script::of(cp) == Script::Katakana
            || matches!(
                cp,
                0x3031..=0x3035 | 0x309B | 0x309C | 0x30A0 | 0x30FC | 0xFF70 | 0xFF9E | 0xFF9F
            )
        {
            return WordBreak::Katakana;
        }
        if BinaryProperty::GraphemeExtend.contains(cp) {
            return WordBreak::Extend;
        }
        if syntax.is_identifier_start_character(cp)
            || cp == NO_BREAK_SPACE
            || cp == HEBREW_PUNCTUATION_GERESH
        {
            return WordBreak::ALetter;
        }
        if matches!(cp, 0x0027 | 0x00B7 | 0x05F4 | 0x2019 | 0x2027)
            || (cp == 0x003A && locale.is_swedish())
        {
            return WordBreak::MidLetter;
        }
        if matches!(
            cp,
            0x002C | 0x002E | 0x003B | 0x037E | 0x0589 | 0x060D | 0x2044 | 0xFE10 | 0xFE13 | 0xFE14
        ) {
            return WordBreak::MidNum;
        }
        if is_numeric(cp) {
            return WordBreak::Numeric;
        }
        if GeneralCategory::of(cp) == GeneralCategory::ConnectorPunctuation {
            return WordBreak::ExtendNumLet;
        }
        WordBreak::Other
    }
}

/// Values of the Sentence_Break property.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SentenceBreak {
    /// Grapheme extenders.
    Extend,
    /// Line and paragraph separators.
    Sep,
    /// Format characters other than the joiners.
    Format,
    /// White space other than NO-BREAK SPACE.
    Sp,
    /// Lowercase characters.
    Lower,
    /// Uppercase and titlecase characters.
    Upper,
    /// Other alphabetic characters.
    OLetter,
    /// Digits.
    Numeric,
    /// FULL STOP, which may end an abbreviation.
    ATerm,
    /// Other sentence terminators.
    STerm,
    /// Brackets and quotation marks.
    Close,
    /// Anything else.
    Other,
}

impl SentenceBreak {
    /// Returns the Sentence_Break of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        if BinaryProperty::GraphemeExtend.contains(cp) {
            return SentenceBreak::Extend;
        }
        if matches!(cp, 0x000A | 0x000D | 0x0085 | 0x2028 | 0x2029) {
            return SentenceBreak::Sep;
        }
        if is_format(cp) {
            return SentenceBreak::Format;
        }
        if BinaryProperty::WhiteSpace.contains(cp) && cp != NO_BREAK_SPACE {
            return SentenceBreak::Sp;
        }
        if BinaryProperty::Lowercase.contains(cp) {
            return SentenceBreak::Lower;
        }
        let gc = GeneralCategory::of(cp);
        if gc == GeneralCategory::TitlecaseLetter || BinaryProperty::Uppercase.contains(cp) {
            return SentenceBreak::Upper;
        }
        if BinaryProperty::Alphabetic.contains(cp)
            || cp == NO_BREAK_SPACE
            || cp == HEBREW_PUNCTUATION_GERESH
        {
            return SentenceBreak::OLetter;
        }
        if is_numeric(cp) {
            return SentenceBreak::Numeric;
        }
        if cp == 0x002E {
            return SentenceBreak::ATerm;
        }
        if BinaryProperty::SentenceTerminal.contains(cp) {
            return SentenceBreak::STerm;
        }
        if matches!(
            gc,
            GeneralCategory::OpenPunctuation | GeneralCategory::ClosePunctuation
        ) || is_quotation(cp, gc)
        {
            return SentenceBreak::Close;
        }
        SentenceBreak::Other
    }
}

fn is_format(cp: CodePoint) -> bool {
    cp != ZERO_WIDTH_NON_JOINER
        && cp != ZERO_WIDTH_JOINER
        && GeneralCategory::of(cp) == GeneralCategory::Format
}

// full-width digits are excluded
fn is_numeric(cp: CodePoint) -> bool {
    (GeneralCategory::of(cp) == GeneralCategory::DecimalNumber && !(0xFF00..=0xFFEF).contains(&cp))
        || cp == 0x066B
        || cp == 0x066C
}

fn is_quotation(cp: CodePoint, gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::InitialPunctuation | GeneralCategory::FinalPunctuation
    ) || matches!(cp, 0x0022 | 0x0027 | 0x275B..=0x275E)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_cluster_break() {
        assert_eq!(GraphemeClusterBreak::CR, GraphemeClusterBreak::of(0x0D));
        assert_eq!(GraphemeClusterBreak::LF, GraphemeClusterBreak::of(0x0A));
        assert_eq!(GraphemeClusterBreak::Control, GraphemeClusterBreak::of(0x2028));
        assert_eq!(GraphemeClusterBreak::Control, GraphemeClusterBreak::of(0x00AD));
        assert_eq!(GraphemeClusterBreak::Extend, GraphemeClusterBreak::of(0x200C));
        assert_eq!(GraphemeClusterBreak::Other, GraphemeClusterBreak::of(0x200D));
        assert_eq!(GraphemeClusterBreak::Extend, GraphemeClusterBreak::of(0x0301));
        assert_eq!(GraphemeClusterBreak::LVT, GraphemeClusterBreak::of(0xAC01));
        assert_eq!(GraphemeClusterBreak::Other, GraphemeClusterBreak::of('a' as u32));
    }

    #[test]
    fn test_word_break() {
        let syntax = IdentifierSyntax::default();
        let classic = Locale::classic();
        let of = |cp| WordBreak::of(cp, &syntax, &classic);
        assert_eq!(WordBreak::Katakana, of(0x30FC));
        assert_eq!(WordBreak::Katakana, of(0x30A2));
        assert_eq!(WordBreak::Katakana, of(0x309B));
        assert_eq!(WordBreak::Extend, of(0x3099));
        assert_eq!(WordBreak::ALetter, of(0x3042));
        assert_eq!(WordBreak::ALetter, of(0x00A0));
        assert_eq!(WordBreak::MidLetter, of('\'' as u32));
        assert_eq!(WordBreak::MidNum, of('.' as u32));
        assert_eq!(WordBreak::Numeric, of('7' as u32));
        assert_eq!(WordBreak::Other, of(0xFF17));
        assert_eq!(WordBreak::ExtendNumLet, of('_' as u32));
        assert_eq!(WordBreak::Format, of(0x200E));
        assert_eq!(WordBreak::Other, of(':' as u32));
        assert_eq!(
            WordBreak::MidLetter,
            WordBreak::of(':' as u32, &syntax, &Locale::new("sv"))
        );
    }

    #[test]
    fn test_sentence_break() {
        assert_eq!(SentenceBreak::ATerm, SentenceBreak::of('.' as u32));
        assert_eq!(SentenceBreak::STerm, SentenceBreak::of('?' as u32));
        assert_eq!(SentenceBreak::STerm, SentenceBreak::of(0x3002));
        assert_eq!(SentenceBreak::Sep, SentenceBreak::of(0x2029));
        assert_eq!(SentenceBreak::Sp, SentenceBreak::of(' ' as u32));
        assert_eq!(SentenceBreak::OLetter, SentenceBreak::of(0x00A0));
        assert_eq!(SentenceBreak::Upper, SentenceBreak::of(0x01C5));
        assert_eq!(SentenceBreak::Lower, SentenceBreak::of('q' as u32));
        assert_eq!(SentenceBreak::OLetter, SentenceBreak::of(0x3042));
        assert_eq!(SentenceBreak::Close, SentenceBreak::of(')' as u32));
        assert_eq!(SentenceBreak::Close, SentenceBreak::of('"' as u32));
        assert_eq!(SentenceBreak::Close, SentenceBreak::of(0x00BB));
        assert_eq!(SentenceBreak::Numeric, SentenceBreak::of('0' as u32));
        assert_eq!(SentenceBreak::Other, SentenceBreak::of(',' as u32));
    }

    #[test]
    fn test_numeric_outside_fullwidth_forms() {
        let syntax = IdentifierSyntax::default();
        let classic = Locale::classic();
        // MATHEMATICAL BOLD DIGIT ZERO
        assert_eq!(SentenceBreak::Numeric, SentenceBreak::of(0x1D7CE));
        assert_eq!(WordBreak::Numeric, WordBreak::of(0x1D7CE, &syntax, &classic));
        assert_eq!(SentenceBreak::Other, SentenceBreak::of(0xFF10));
        // symbols past the fullwidth forms are not digits
        assert_eq!(SentenceBreak::Other, SentenceBreak::of(0x1F600));
        assert_eq!(WordBreak::Other, WordBreak::of(0x1F600, &syntax, &classic));
        assert_eq!(SentenceBreak::Other, SentenceBreak::of(0x10_FFFD));
    }
}
