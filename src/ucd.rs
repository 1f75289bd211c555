//! Lookups into the Unicode Character Database.
//!
//! Every function here is total: code points that are unassigned, surrogates,
//! or even outside of the Unicode codespace map to the property's default value.

use crate::tables::{binary_property, canonical_combining_class, general_category, script};
use crate::CodePoint;
use std::cmp::Ordering;

pub use crate::tables::general_category::GeneralCategory;
pub use crate::tables::script::Script;

fn bsearch_range_value_table<T: Copy>(cp: CodePoint, table: &[(u32, u32, T)], default: T) -> T {
    match table.binary_search_by(|&(lo, hi, _)| {
        if hi < cp {
            Ordering::Less
        } else if lo > cp {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }) {
        Ok(idx) => table[idx].2,
        Err(_) => default,
    }
}

pub(crate) fn bsearch_range_table(cp: CodePoint, table: &[(u32, u32)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Folds a property value name for loose matching (UAX44-LM3).
fn loose_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn lookup_name<T: Copy>(name: &str, names: &[(&str, T)]) -> Option<T> {
    let key = loose_name(name);
    names
        .binary_search_by(|&(n, _)| n.cmp(key.as_str()))
        .ok()
        .map(|idx| names[idx].1)
}

impl GeneralCategory {
    /// Returns the General_Category of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        bsearch_range_value_table(
            cp,
            general_category::GENERAL_CATEGORY_TABLE,
            GeneralCategory::Unassigned,
        )
    }

    /// Looks up a value by its long or short alias, e.g. `"Lu"` or `"uppercase letter"`.
    pub fn for_name(name: &str) -> Option<Self> {
        lookup_name(name, general_category::GENERAL_CATEGORY_NAMES)
    }

    /// `L`: Lu, Ll, Lt, Lm or Lo.
    pub fn is_letter(self) -> bool {
        use GeneralCategory::*;
        matches!(
            self,
            UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
        )
    }

    /// `LC`: Lu, Ll or Lt.
    pub fn is_cased_letter(self) -> bool {
        use GeneralCategory::*;
        matches!(self, UppercaseLetter | LowercaseLetter | TitlecaseLetter)
    }

    /// `M`: Mn, Mc or Me.
    pub fn is_mark(self) -> bool {
        use GeneralCategory::*;
        matches!(self, NonspacingMark | SpacingMark | EnclosingMark)
    }

    /// `N`: Nd, Nl or No.
    pub fn is_number(self) -> bool {
        use GeneralCategory::*;
        matches!(self, DecimalNumber | LetterNumber | OtherNumber)
    }

    /// `P`: any punctuation.
    pub fn is_punctuation(self) -> bool {
        use GeneralCategory::*;
        matches!(
            self,
            ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
        )
    }

    /// `S`: Sm, Sc, Sk or So.
    pub fn is_symbol(self) -> bool {
        use GeneralCategory::*;
        matches!(self, MathSymbol | CurrencySymbol | ModifierSymbol | OtherSymbol)
    }

    /// `Z`: Zs, Zl or Zp.
    pub fn is_separator(self) -> bool {
        use GeneralCategory::*;
        matches!(self, SpaceSeparator | LineSeparator | ParagraphSeparator)
    }

    /// `C`: Cc, Cf, Cs, Co or Cn.
    pub fn is_other(self) -> bool {
        use GeneralCategory::*;
        matches!(self, Control | Format | Surrogate | PrivateUse | Unassigned)
    }
}

impl Script {
    /// Returns the Script of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        bsearch_range_value_table(cp, script::SCRIPT_TABLE, Script::Unknown)
    }

    /// Looks up a value by its long name or ISO 15924 code, e.g. `"Hira"` or `"hiragana"`.
    pub fn for_name(name: &str) -> Option<Self> {
        lookup_name(name, script::SCRIPT_NAMES)
    }
}

/// A value of the Canonical_Combining_Class property.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalCombiningClass(pub u8);

impl CanonicalCombiningClass {
    /// Spacing and enclosing marks; also many vowel and consonant signs.
    pub const NOT_REORDERED: Self = CanonicalCombiningClass(0);
    /// Marks which overlay a base letter or symbol.
    pub const OVERLAY: Self = CanonicalCombiningClass(1);
    /// Diacritic nukta marks in Brahmi-derived scripts.
    pub const NUKTA: Self = CanonicalCombiningClass(7);
    /// Hiragana/Katakana voicing marks.
    pub const KANA_VOICING: Self = CanonicalCombiningClass(8);
    /// Viramas.
    pub const VIRAMA: Self = CanonicalCombiningClass(9);
    /// Marks attached at the bottom left.
    pub const ATTACHED_BELOW_LEFT: Self = CanonicalCombiningClass(200);
    /// Marks attached directly below.
    pub const ATTACHED_BELOW: Self = CanonicalCombiningClass(202);
    /// Marks attached directly above.
    pub const ATTACHED_ABOVE: Self = CanonicalCombiningClass(214);
    /// Marks attached at the top right.
    pub const ATTACHED_ABOVE_RIGHT: Self = CanonicalCombiningClass(216);
    /// Distinct marks at the bottom left.
    pub const BELOW_LEFT: Self = CanonicalCombiningClass(218);
    /// Distinct marks directly below.
    pub const BELOW: Self = CanonicalCombiningClass(220);
    /// Distinct marks at the bottom right.
    pub const BELOW_RIGHT: Self = CanonicalCombiningClass(222);
    /// Distinct marks to the left.
    pub const LEFT: Self = CanonicalCombiningClass(224);
    /// Distinct marks to the right.
    pub const RIGHT: Self = CanonicalCombiningClass(226);
    /// Distinct marks at the top left.
    pub const ABOVE_LEFT: Self = CanonicalCombiningClass(228);
    /// Distinct marks directly above.
    pub const ABOVE: Self = CanonicalCombiningClass(230);
    /// Distinct marks at the top right.
    pub const ABOVE_RIGHT: Self = CanonicalCombiningClass(232);
    /// Distinct marks subtending two bases.
    pub const DOUBLE_BELOW: Self = CanonicalCombiningClass(233);
    /// Distinct marks extending above two bases.
    pub const DOUBLE_ABOVE: Self = CanonicalCombiningClass(234);
    /// Greek iota subscript only.
    pub const IOTA_SUBSCRIPT: Self = CanonicalCombiningClass(240);

    /// Returns the Canonical_Combining_Class of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        CanonicalCombiningClass(bsearch_range_value_table(
            cp,
            canonical_combining_class::CANONICAL_COMBINING_CLASS_TABLE,
            0,
        ))
    }

    /// Returns `true` for class 0, the class of starters.
    pub fn is_starter(self) -> bool {
        self == Self::NOT_REORDERED
    }
}

pub(crate) mod hangul {
    use crate::CodePoint;

    pub(crate) const S_BASE: u32 = 0xAC00;
    pub(crate) const L_BASE: u32 = 0x1100;
    pub(crate) const V_BASE: u32 = 0x1161;
    pub(crate) const T_BASE: u32 = 0x11A7;
    pub(crate) const L_COUNT: u32 = 19;
    pub(crate) const V_COUNT: u32 = 21;
    pub(crate) const T_COUNT: u32 = 28;
    pub(crate) const N_COUNT: u32 = V_COUNT * T_COUNT;
    pub(crate) const S_COUNT: u32 = L_COUNT * N_COUNT;

    #[inline]
    pub(crate) fn is_syllable(cp: CodePoint) -> bool {
        (S_BASE..S_BASE + S_COUNT).contains(&cp)
    }

    /// Leading consonants that take part in composition.
    #[inline]
    pub(crate) fn is_modern_l(cp: CodePoint) -> bool {
        (L_BASE..L_BASE + L_COUNT).contains(&cp)
    }

    #[inline]
    pub(crate) fn is_modern_v(cp: CodePoint) -> bool {
        (V_BASE..V_BASE + V_COUNT).contains(&cp)
    }

    /// Trailing consonants that take part in composition; `T_BASE` itself is not one.
    #[inline]
    pub(crate) fn is_modern_t(cp: CodePoint) -> bool {
        (T_BASE + 1..T_BASE + T_COUNT).contains(&cp)
    }

    pub(crate) fn decompose(cp: CodePoint) -> Option<(CodePoint, CodePoint, Option<CodePoint>)> {
        if !is_syllable(cp) {
            return None;
        }
        let s_index = cp - S_BASE;
        let l = L_BASE + s_index / N_COUNT;
        let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
        let t = match s_index % T_COUNT {
            0 => None,
            t_index => Some(T_BASE + t_index),
        };
        Some((l, v, t))
    }

    pub(crate) fn compose_lv(l: CodePoint, v: CodePoint) -> Option<CodePoint> {
        if is_modern_l(l) && is_modern_v(v) {
            Some(S_BASE + ((l - L_BASE) * V_COUNT + (v - V_BASE)) * T_COUNT)
        } else {
            None
        }
    }

    pub(crate) fn compose_lvt(lv: CodePoint, t: CodePoint) -> Option<CodePoint> {
        if is_syllable(lv) && (lv - S_BASE) % T_COUNT == 0 && is_modern_t(t) {
            Some(lv + (t - T_BASE))
        } else {
            None
        }
    }
}

/// Values of the Hangul_Syllable_Type property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HangulSyllableType {
    /// Not a Hangul jamo or syllable.
    NotApplicable,
    /// `L`: choseong.
    LeadingJamo,
    /// `V`: jungseong.
    VowelJamo,
    /// `T`: jongseong.
    TrailingJamo,
    /// `LV`: a precomposed syllable without a trailing consonant.
    LvSyllable,
    /// `LVT`: a precomposed syllable with a trailing consonant.
    LvtSyllable,
}

impl HangulSyllableType {
    /// Returns the Hangul_Syllable_Type of `cp`.
    pub fn of(cp: CodePoint) -> Self {
        match cp {
            0x1100..=0x115F | 0xA960..=0xA97C => HangulSyllableType::LeadingJamo,
            0x1160..=0x11A7 | 0xD7B0..=0xD7C6 => HangulSyllableType::VowelJamo,
            0x11A8..=0x11FF | 0xD7CB..=0xD7FB => HangulSyllableType::TrailingJamo,
            _ if hangul::is_syllable(cp) => {
                if (cp - hangul::S_BASE) % hangul::T_COUNT == 0 {
                    HangulSyllableType::LvSyllable
                } else {
                    HangulSyllableType::LvtSyllable
                }
            }
            _ => HangulSyllableType::NotApplicable,
        }
    }
}

/// The binary properties the text algorithms of this crate are built on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryProperty {
    /// `Alpha`
    Alphabetic,
    /// `Gr_Ext`
    GraphemeExtend,
    /// `Hex`
    HexDigit,
    /// `IDC`
    IdContinue,
    /// `IDS`
    IdStart,
    /// `Lower`
    Lowercase,
    /// `Pat_Syn`
    PatternSyntax,
    /// `Pat_WS`
    PatternWhiteSpace,
    /// `STerm`
    SentenceTerminal,
    /// `Upper`
    Uppercase,
    /// `WSpace`
    WhiteSpace,
}

impl BinaryProperty {
    /// Returns `true` if `cp` has this property.
    pub fn contains(self, cp: CodePoint) -> bool {
        let table = match self {
            BinaryProperty::Alphabetic => binary_property::ALPHABETIC,
            BinaryProperty::GraphemeExtend => binary_property::GRAPHEME_EXTEND,
            BinaryProperty::HexDigit => binary_property::HEX_DIGIT,
            BinaryProperty::IdContinue => binary_property::ID_CONTINUE,
            BinaryProperty::IdStart => binary_property::ID_START,
            BinaryProperty::Lowercase => binary_property::LOWERCASE,
            BinaryProperty::PatternSyntax => binary_property::PATTERN_SYNTAX,
            BinaryProperty::PatternWhiteSpace => binary_property::PATTERN_WHITE_SPACE,
            BinaryProperty::SentenceTerminal => binary_property::SENTENCE_TERMINAL,
            BinaryProperty::Uppercase => binary_property::UPPERCASE,
            BinaryProperty::WhiteSpace => binary_property::WHITE_SPACE,
        };
        bsearch_range_table(cp, table)
    }
}

/// Character classes in the manner of `<ctype.h>`, defined over Unicode properties.
pub mod legacy_ctype {
    use super::{BinaryProperty, GeneralCategory};
    use crate::CodePoint;

    /// Alphabetic characters.
    pub fn is_alpha(cp: CodePoint) -> bool {
        BinaryProperty::Alphabetic.contains(cp)
    }

    /// Decimal digits (`Nd`).
    pub fn is_digit(cp: CodePoint) -> bool {
        GeneralCategory::of(cp) == GeneralCategory::DecimalNumber
    }

    /// Alphabetic characters or decimal digits.
    pub fn is_alnum(cp: CodePoint) -> bool {
        is_alpha(cp) || is_digit(cp)
    }

    /// Control characters (`Cc`).
    pub fn is_cntrl(cp: CodePoint) -> bool {
        GeneralCategory::of(cp) == GeneralCategory::Control
    }

    /// Lowercase characters.
    pub fn is_lower(cp: CodePoint) -> bool {
        BinaryProperty::Lowercase.contains(cp)
    }

    /// Uppercase characters.
    pub fn is_upper(cp: CodePoint) -> bool {
        BinaryProperty::Uppercase.contains(cp)
    }

    /// White space characters.
    pub fn is_space(cp: CodePoint) -> bool {
        BinaryProperty::WhiteSpace.contains(cp)
    }

    /// Punctuation characters (`P*`).
    pub fn is_punct(cp: CodePoint) -> bool {
        GeneralCategory::of(cp).is_punctuation()
    }

    /// White space characters which do not end a line.
    pub fn is_blank(cp: CodePoint) -> bool {
        if matches!(cp, 0x000A..=0x000D | 0x0085) {
            return false;
        }
        let gc = GeneralCategory::of(cp);
        is_space(cp)
            && gc != GeneralCategory::LineSeparator
            && gc != GeneralCategory::ParagraphSeparator
    }

    /// Visible characters.
    pub fn is_graph(cp: CodePoint) -> bool {
        use GeneralCategory::*;
        !is_space(cp)
            && !matches!(
                GeneralCategory::of(cp),
                Control | Format | Surrogate | Unassigned
            )
    }

    /// Visible characters and blanks.
    pub fn is_print(cp: CodePoint) -> bool {
        (is_graph(cp) || is_blank(cp)) && !is_cntrl(cp)
    }

    /// Characters that make up words: alphanumerics, marks and connector punctuation.
    pub fn is_word(cp: CodePoint) -> bool {
        let gc = GeneralCategory::of(cp);
        is_alnum(cp) || gc.is_mark() || gc == GeneralCategory::ConnectorPunctuation
    }

    /// Hexadecimal digits.
    pub fn is_xdigit(cp: CodePoint) -> bool {
        is_digit(cp) || BinaryProperty::HexDigit.contains(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_category() {
        assert_eq!(GeneralCategory::UppercaseLetter, GeneralCategory::of('A' as u32));
        assert_eq!(GeneralCategory::ModifierLetter, GeneralCategory::of(0x30FC));
        assert_eq!(GeneralCategory::Surrogate, GeneralCategory::of(0xDC00));
        assert_eq!(GeneralCategory::Unassigned, GeneralCategory::of(0x0378));
        assert_eq!(GeneralCategory::Unassigned, GeneralCategory::of(0x11_0000));
        assert!(GeneralCategory::of(0x0301).is_mark());
    }

    #[test]
    fn test_names() {
        assert_eq!(Some(GeneralCategory::UppercaseLetter), GeneralCategory::for_name("Lu"));
        assert_eq!(
            Some(GeneralCategory::DecimalNumber),
            GeneralCategory::for_name("Decimal_Number")
        );
        assert_eq!(Some(GeneralCategory::Format), GeneralCategory::for_name("format"));
        assert_eq!(None, GeneralCategory::for_name("Letter-ish"));
        assert_eq!(Some(Script::Hiragana), Script::for_name("Hira"));
        assert_eq!(Some(Script::OldItalic), Script::for_name("old italic"));
    }

    #[test]
    fn test_script() {
        assert_eq!(Script::Hiragana, Script::of(0x3042));
        assert_eq!(Script::Katakana, Script::of(0x30A2));
        assert_eq!(Script::Common, Script::of(0x30FC));
        assert_eq!(Script::Inherited, Script::of(0x0301));
        assert_eq!(Script::Han, Script::of(0x6F22));
        assert_eq!(Script::Unknown, Script::of(0xE000));
    }

    #[test]
    fn test_canonical_combining_class() {
        assert_eq!(CanonicalCombiningClass::ATTACHED_BELOW, CanonicalCombiningClass::of(0x0327));
        assert_eq!(CanonicalCombiningClass::ABOVE, CanonicalCombiningClass::of(0x0301));
        assert_eq!(CanonicalCombiningClass::KANA_VOICING, CanonicalCombiningClass::of(0x3099));
        assert!(CanonicalCombiningClass::of('a' as u32).is_starter());
    }

    #[test]
    fn test_hangul_syllable_type() {
        assert_eq!(HangulSyllableType::LvSyllable, HangulSyllableType::of(0xAC00));
        assert_eq!(HangulSyllableType::LvtSyllable, HangulSyllableType::of(0xAC01));
        assert_eq!(HangulSyllableType::LeadingJamo, HangulSyllableType::of(0x1100));
        assert_eq!(HangulSyllableType::VowelJamo, HangulSyllableType::of(0x1161));
        assert_eq!(HangulSyllableType::TrailingJamo, HangulSyllableType::of(0x11A8));
        assert_eq!(HangulSyllableType::NotApplicable, HangulSyllableType::of(0xD7A4));
    }

    #[test]
    fn test_hangul_arithmetic() {
        assert_eq!(Some((0x1100, 0x1161, None)), hangul::decompose(0xAC00));
        assert_eq!(Some((0x1100, 0x1161, Some(0x11A8))), hangul::decompose(0xAC01));
        assert_eq!(Some(0xAC00), hangul::compose_lv(0x1100, 0x1161));
        assert_eq!(Some(0xAC01), hangul::compose_lvt(0xAC00, 0x11A8));
        assert_eq!(None, hangul::compose_lvt(0xAC01, 0x11A8));
        assert_eq!(None, hangul::compose_lvt(0xAC00, 0x11A7));
    }

    #[test]
    fn test_legacy_ctype() {
        use super::legacy_ctype::*;
        assert!(is_alpha(0x00E9));
        assert!(is_digit(0x0663));
        assert!(is_blank(0x0009));
        assert!(!is_blank(0x000A));
        assert!(!is_blank(0x2028));
        assert!(is_graph('!' as u32));
        assert!(!is_graph(' ' as u32));
        assert!(is_print(' ' as u32));
        assert!(!is_print(0x0007));
        assert!(is_word('_' as u32));
        assert!(is_word(0x0301));
        assert!(is_xdigit('f' as u32));
        assert!(!is_xdigit('g' as u32));
    }
}
