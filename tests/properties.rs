use proptest::prelude::*;
use std::cmp::Ordering;
use unitext::break_iterator::{GraphemeBreakIterator, SentenceBreakIterator, WordBreakIterator};
use unitext::{
    compare, is_normalized, normalize, normalize_str, BreakIterator, CaseSensitivity,
    CharacterIterator, CodePoint, CodePointCharacterIterator, Form, Normalizer,
};

const ALPHABET: &[char] = &[
    'a', 'e', 'o', 'i', 'A', 'S', 'K', '1', ' ', '.', '?', '\'', ',', '\n', '\r', '(', ')',
    '\u{00C5}', '\u{212B}', '\u{0300}', '\u{0301}', '\u{0308}', '\u{0323}', '\u{0327}',
    '\u{0345}', '\u{1E9B}', '\u{FB01}', '\u{1100}', '\u{1161}', '\u{11A8}', '\u{AC00}',
    '\u{0958}', '\u{0F73}', '\u{1D15E}', '\u{3072}', '\u{30FC}', '\u{30AB}', '\u{200D}',
];

const FORMS: [Form; 4] = [Form::C, Form::D, Form::KC, Form::KD];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

fn code_points(s: &str) -> Vec<CodePoint> {
    s.chars().map(CodePoint::from).collect()
}

fn forward<B: BreakIterator>(b: &mut B) -> Vec<isize> {
    b.character_iterator_mut().first();
    let mut found = vec![0];
    while b.next(1) == 1 {
        found.push(b.character_iterator().offset());
    }
    found
}

fn backward<B: BreakIterator>(b: &mut B) -> Vec<isize> {
    b.character_iterator_mut().first();
    while b.character_iterator_mut().next() {}
    let mut found = vec![b.character_iterator().offset()];
    while b.previous(1) == 1 {
        found.push(b.character_iterator().offset());
    }
    found.reverse();
    found
}

proptest! {
    #[test]
    fn normalization_is_idempotent(s in text()) {
        for form in FORMS {
            let once = normalize_str(&s, form);
            prop_assert_eq!(&once, &normalize_str(&once, form));
            prop_assert!(is_normalized(&once, form));
        }
    }

    #[test]
    fn composition_ignores_prior_decomposition(s in text()) {
        prop_assert_eq!(
            normalize_str(&normalize_str(&s, Form::D), Form::C),
            normalize_str(&s, Form::C)
        );
        prop_assert_eq!(
            normalize_str(&normalize_str(&s, Form::KD), Form::KC),
            normalize_str(&s, Form::KC)
        );
    }

    #[test]
    fn normalizer_walks_both_ways(s in text()) {
        let text = code_points(&s);
        for form in FORMS {
            let mut source = CodePointCharacterIterator::new(&text);
            let expected = normalize(&source, form);
            source.last();
            let mut n = Normalizer::new(&source, form);
            let mut reversed = Vec::new();
            while n.has_previous() {
                n.previous().unwrap();
                reversed.push(n.current());
            }
            reversed.reverse();
            prop_assert_eq!(expected, reversed);
            prop_assert!(n.previous().is_err());
        }
    }

    #[test]
    fn comparison_is_canonical(s in text(), t in text()) {
        let decomposed = normalize_str(&s, Form::D);
        prop_assert_eq!(Ordering::Equal, compare(&s, &decomposed, CaseSensitivity::CaseSensitive));
        prop_assert_eq!(
            compare(&s, &t, CaseSensitivity::CaseSensitive),
            compare(&t, &s, CaseSensitivity::CaseSensitive).reverse()
        );
        prop_assert_eq!(
            compare(&s, &t, CaseSensitivity::CaseInsensitive),
            compare(&t, &s, CaseSensitivity::CaseInsensitive).reverse()
        );
    }

    #[test]
    fn breaks_agree_in_both_directions(s in text()) {
        let text = code_points(&s);
        let mut g = GraphemeBreakIterator::new(CodePointCharacterIterator::new(&text));
        prop_assert_eq!(forward(&mut g), backward(&mut g));
        let mut w = WordBreakIterator::new(CodePointCharacterIterator::new(&text));
        prop_assert_eq!(forward(&mut w), backward(&mut w));
        let mut b = SentenceBreakIterator::new(CodePointCharacterIterator::new(&text));
        prop_assert_eq!(forward(&mut b), backward(&mut b));
    }

    #[test]
    fn grapheme_boundaries_refine_words(s in text()) {
        let text = code_points(&s);
        let mut g = GraphemeBreakIterator::new(CodePointCharacterIterator::new(&text));
        let graphemes = forward(&mut g);
        let mut w = WordBreakIterator::new(CodePointCharacterIterator::new(&text));
        for boundary in forward(&mut w) {
            prop_assert!(graphemes.contains(&boundary));
        }
    }
}
