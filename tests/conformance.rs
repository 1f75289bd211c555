use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use unitext::break_iterator::{
    GraphemeBreakIterator, SentenceBreakIterator, SentenceComponent, WordBreakIterator,
};
use unitext::break_property::{GraphemeClusterBreak, SentenceBreak, WordBreak};
use unitext::ucd::{
    BinaryProperty, CanonicalCombiningClass, GeneralCategory, HangulSyllableType, Script,
};
use unitext::{
    normalize_str, BreakIterator, CharacterIterator, CodePoint, CodePointCharacterIterator,
    Form, IdentifierSyntax, Locale, DONE,
};

const NORMALIZATION_SAMPLES: &[&str] = &[
    "Caf\u{00E9}",
    "Cafe\u{0301}",
    "e\u{0301}\u{0323}",
    "\u{1E9B}\u{0323}",
    "\u{212B}ngstr\u{00F6}m",
    "\u{1100}\u{1161}\u{11A8}\u{1100}\u{1161}",
    "\u{D55C}\u{AD6D}\u{C5B4}",
    "\u{FB01}ve \u{2460} \u{00BD} \u{FF21}",
    "\u{0958}\u{0959}",
    "a\u{0308}\u{0301}o\u{0327}\u{0308}",
    "\u{0F73}\u{0F75}\u{0F81}",
    "\u{1D15E}\u{1D160}",
    "\u{00C5}\u{0327}\u{0301}",
    "\u{03D3}\u{0385}",
    "\u{2126}\u{212A}",
];

fn code_points(s: &str) -> Vec<CodePoint> {
    s.chars().map(CodePoint::from).collect()
}

/// Boundary offsets in code points, from byte offsets into `s`.
fn char_offsets(s: &str, byte_offsets: impl Iterator<Item = usize>) -> Vec<isize> {
    let mut offsets: Vec<isize> = byte_offsets
        .map(|byte| s[..byte].chars().count() as isize)
        .collect();
    offsets.push(s.chars().count() as isize);
    offsets
}

fn boundaries<B: BreakIterator>(b: &mut B) -> Vec<isize> {
    b.character_iterator_mut().first();
    let mut found = vec![0];
    while b.next(1) == 1 {
        found.push(b.character_iterator().offset());
    }
    found
}

#[test]
fn normalization_matches_reference() {
    for s in NORMALIZATION_SAMPLES {
        assert_eq!(s.nfc().collect::<String>(), normalize_str(s, Form::C), "NFC of {:?}", s);
        assert_eq!(s.nfd().collect::<String>(), normalize_str(s, Form::D), "NFD of {:?}", s);
        assert_eq!(s.nfkc().collect::<String>(), normalize_str(s, Form::KC), "NFKC of {:?}", s);
        assert_eq!(s.nfkd().collect::<String>(), normalize_str(s, Form::KD), "NFKD of {:?}", s);
    }
}

#[test]
fn graphemes_match_reference() {
    for s in [
        "e\u{0301}x\r\ny",
        "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{11A8}",
        "\u{0915}\u{094D}",
        "abc\u{0300}\u{0301} d",
    ] {
        let text = code_points(s);
        let mut b = GraphemeBreakIterator::new(CodePointCharacterIterator::new(&text));
        let expected = char_offsets(s, s.grapheme_indices(true).map(|(i, _)| i));
        assert_eq!(expected, boundaries(&mut b), "graphemes of {:?}", s);
    }
}

#[test]
fn words_match_reference() {
    for s in [
        "The quick (\"brown\") fox can't jump 32.3 feet, right?",
        "foo_bar 1,234.5 it's",
        "line one\r\nline two",
    ] {
        let text = code_points(s);
        let mut b = WordBreakIterator::new(CodePointCharacterIterator::new(&text));
        let expected = char_offsets(s, s.split_word_bound_indices().map(|(i, _)| i));
        assert_eq!(expected, boundaries(&mut b), "words of {:?}", s);
    }
}

#[test]
fn sentences_match_reference() {
    for s in [
        "Hello there. How are you? I am fine.",
        "He said (quietly.) Then he left!",
        "Pi is 3.14 or so. Really.",
    ] {
        let text = code_points(s);
        let mut b = SentenceBreakIterator::with_options(
            CodePointCharacterIterator::new(&text),
            SentenceComponent::START_OF_SEGMENT,
            &IdentifierSyntax::default(),
            &Locale::classic(),
        )
        .unwrap();
        let expected = char_offsets(s, s.split_sentence_bound_indices().map(|(i, _)| i));
        assert_eq!(expected, boundaries(&mut b), "sentences of {:?}", s);
    }
}

#[test]
fn properties_are_total() {
    const BINARY_PROPERTIES: [BinaryProperty; 11] = [
        BinaryProperty::Alphabetic,
        BinaryProperty::GraphemeExtend,
        BinaryProperty::HexDigit,
        BinaryProperty::IdContinue,
        BinaryProperty::IdStart,
        BinaryProperty::Lowercase,
        BinaryProperty::PatternSyntax,
        BinaryProperty::PatternWhiteSpace,
        BinaryProperty::SentenceTerminal,
        BinaryProperty::Uppercase,
        BinaryProperty::WhiteSpace,
    ];
    let syntax = IdentifierSyntax::default();
    let locale = Locale::classic();
    let mut hangul_syllables = 0;
    for cp in (0..=0x10FFFF).chain([0x11_0000, DONE]) {
        let _ = GeneralCategory::of(cp);
        let _ = Script::of(cp);
        let _ = CanonicalCombiningClass::of(cp);
        let _ = GraphemeClusterBreak::of(cp);
        let _ = WordBreak::of(cp, &syntax, &locale);
        let _ = SentenceBreak::of(cp);
        if matches!(
            HangulSyllableType::of(cp),
            HangulSyllableType::LvSyllable | HangulSyllableType::LvtSyllable
        ) {
            hangul_syllables += 1;
        }
        for property in BINARY_PROPERTIES {
            let _ = property.contains(cp);
        }
    }
    assert_eq!(11172, hangul_syllables);

    assert_eq!(GraphemeClusterBreak::Other, GraphemeClusterBreak::of(DONE));
    assert_eq!(WordBreak::Other, WordBreak::of(DONE, &syntax, &locale));
    assert_eq!(SentenceBreak::Other, SentenceBreak::of(DONE));
    assert_eq!(HangulSyllableType::NotApplicable, HangulSyllableType::of(DONE));
    assert!(BINARY_PROPERTIES.iter().all(|p| !p.contains(DONE)));
    assert_eq!(GeneralCategory::Unassigned, GeneralCategory::of(DONE));
    assert_eq!(GeneralCategory::Surrogate, GeneralCategory::of(0xD800));
    assert_eq!(GeneralCategory::Unassigned, GeneralCategory::of(0x11_0000));
    assert_eq!(Script::Unknown, Script::of(0x10FFFF));
    assert_eq!(CanonicalCombiningClass::ABOVE, CanonicalCombiningClass::of(0x0301));
}
