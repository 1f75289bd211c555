//! Unicode normalization forms (UAX #15).
//!
//! [`Normalizer`] converts the text under a [`CharacterIterator`] lazily, one
//! normalization segment at a time. A segment starts at a code point whose
//! decomposition begins with a starter (and, for the composing forms, one that
//! never combines with a preceding character), so segments can be normalized
//! independently and the same segments are found walking in either direction.

use crate::case_folder::{CaseFolder, CaseSensitivity};
use crate::character_iterator::{CodePointCharacterIterator, StringCharacterIterator, DONE};
use crate::tables::normalization::{
    CANONICAL_COMPOSITION, CANONICAL_DECOMPOSITION, COMBINES_BACKWARD, COMPATIBILITY_DECOMPOSITION,
};
use crate::ucd::{hangul, CanonicalCombiningClass};
use crate::{utf16, CharacterIterator, CodePoint, Error, Result};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Unicode normalization forms.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    /// Canonical decomposition followed by canonical composition (NFC).
    C,
    /// Canonical decomposition (NFD).
    D,
    /// Compatibility decomposition followed by canonical composition (NFKC).
    KC,
    /// Compatibility decomposition (NFKD).
    KD,
}

impl Form {
    /// Returns `true` for the forms which recompose, C and KC.
    pub fn is_composing(self) -> bool {
        matches!(self, Form::C | Form::KC)
    }

    /// Returns `true` for the forms which apply compatibility mappings, KC and KD.
    pub fn is_compatibility(self) -> bool {
        matches!(self, Form::KC | Form::KD)
    }
}

pub(crate) type SegmentBuffer = SmallVec<[CodePoint; 32]>;

fn lookup_decomposition(table: &[(u32, &'static [u32])], cp: CodePoint) -> Option<&'static [u32]> {
    table
        .binary_search_by_key(&cp, |&(key, _)| key)
        .ok()
        .map(|idx| table[idx].1)
}

/// The single-level decomposition mapping of `cp`, not counting Hangul syllables.
fn decomposition_mapping(cp: CodePoint, compatibility: bool) -> Option<&'static [CodePoint]> {
    match lookup_decomposition(CANONICAL_DECOMPOSITION, cp) {
        Some(mapping) => Some(mapping),
        None if compatibility => lookup_decomposition(COMPATIBILITY_DECOMPOSITION, cp),
        None => None,
    }
}

fn decompose_into(cp: CodePoint, compatibility: bool, out: &mut SegmentBuffer) {
    if let Some((l, v, t)) = hangul::decompose(cp) {
        out.push(l);
        out.push(v);
        out.extend(t);
        return;
    }
    match decomposition_mapping(cp, compatibility) {
        Some(mapping) => {
            for &c in mapping {
                decompose_into(c, compatibility, out);
            }
        }
        None => out.push(cp),
    }
}

/// The first code point of the full decomposition of `cp`.
fn lead_of_decomposition(mut cp: CodePoint, compatibility: bool) -> CodePoint {
    loop {
        if let Some((l, _, _)) = hangul::decompose(cp) {
            return l;
        }
        match decomposition_mapping(cp, compatibility) {
            Some(&[first, ..]) => cp = first,
            _ => return cp,
        }
    }
}

/// The last code point of the full canonical decomposition of `cp`.
fn trail_of_canonical_decomposition(mut cp: CodePoint) -> CodePoint {
    loop {
        if let Some((_, v, t)) = hangul::decompose(cp) {
            return t.unwrap_or(v);
        }
        match decomposition_mapping(cp, false) {
            Some(&[.., last]) => cp = last,
            _ => return cp,
        }
    }
}

fn combines_backward(cp: CodePoint) -> bool {
    hangul::is_modern_v(cp) || hangul::is_modern_t(cp) || COMBINES_BACKWARD.binary_search(&cp).is_ok()
}

/// Returns `true` if a segment of `form` may start at `cp`.
fn has_boundary_before(cp: CodePoint, form: Form) -> bool {
    let lead = lead_of_decomposition(cp, form.is_compatibility());
    CanonicalCombiningClass::of(lead).is_starter() && !(form.is_composing() && combines_backward(lead))
}

/// Stable-sorts every run of non-starters by combining class.
fn reorder(buf: &mut [CodePoint]) {
    let mut start = 0;
    while start < buf.len() {
        if CanonicalCombiningClass::of(buf[start]).is_starter() {
            start += 1;
            continue;
        }
        let end = buf[start..]
            .iter()
            .position(|&cp| CanonicalCombiningClass::of(cp).is_starter())
            .map_or(buf.len(), |len| start + len);
        if end - start > 1 {
            buf[start..end].sort_by_key(|&cp| CanonicalCombiningClass::of(cp));
        }
        start = end;
    }
}

fn compose_pair(first: CodePoint, second: CodePoint) -> Option<CodePoint> {
    hangul::compose_lv(first, second)
        .or_else(|| hangul::compose_lvt(first, second))
        .or_else(|| {
            CANONICAL_COMPOSITION
                .binary_search_by_key(&(first, second), |&(pair, _)| pair)
                .ok()
                .map(|idx| CANONICAL_COMPOSITION[idx].1)
        })
}

/// Canonical composition of a decomposed, reordered sequence.
fn compose(buf: &mut SegmentBuffer) {
    let mut starter = None;
    // combining class of the last character kept since the starter
    let mut last_class: Option<CanonicalCombiningClass> = None;
    let mut len = 0;
    for i in 0..buf.len() {
        let cp = buf[i];
        let class = CanonicalCombiningClass::of(cp);
        if let Some(s) = starter {
            let blocked = last_class.is_some_and(|last| last.is_starter() || last >= class);
            if !blocked {
                if let Some(composite) = compose_pair(buf[s], cp) {
                    buf[s] = composite;
                    continue;
                }
            }
        }
        if class.is_starter() {
            starter = Some(len);
            last_class = None;
        } else {
            last_class = Some(class);
        }
        buf[len] = cp;
        len += 1;
    }
    buf.truncate(len);
}

fn normalize_segment(source: &[CodePoint], form: Form, out: &mut SegmentBuffer) {
    out.clear();
    for &cp in source {
        decompose_into(cp, form.is_compatibility(), out);
    }
    reorder(out);
    if form.is_composing() {
        compose(out);
    }
}

/// A lazy, bidirectional iterator over the normalized form of a text.
///
/// Only the segment under the cursor is kept normalized. Stepping off either
/// end of it normalizes the adjacent segment of the source.
#[derive(Clone, Debug)]
pub struct Normalizer<I> {
    form: Form,
    segment_start: I,
    segment_end: I,
    buffer: SegmentBuffer,
    index: usize,
}

impl<I: CharacterIterator> Normalizer<I> {
    /// Creates a normalizer over the text of `text`, starting at its position.
    pub fn new(text: &I, form: Form) -> Self {
        let mut normalizer = Normalizer {
            form,
            segment_start: text.clone(),
            segment_end: text.clone(),
            buffer: SegmentBuffer::new(),
            index: 0,
        };
        normalizer.derive_next_segment();
        normalizer
    }

    /// Returns the normalization form.
    pub fn form(&self) -> Form {
        self.form
    }

    /// Returns the code point at the cursor, or [`DONE`] at the end.
    pub fn current(&self) -> CodePoint {
        self.buffer.get(self.index).copied().unwrap_or(DONE)
    }

    /// Returns `true` unless the cursor is at the end.
    pub fn has_next(&self) -> bool {
        self.index < self.buffer.len()
    }

    /// Returns `true` unless the cursor is at the beginning.
    pub fn has_previous(&self) -> bool {
        self.index > 0 || self.segment_start.has_previous()
    }

    /// Moves to the next normalized code point.
    pub fn next(&mut self) -> Result<()> {
        if !self.has_next() {
            return Err(Error::OutOfRange("the normalizer is at the end"));
        }
        self.index += 1;
        if self.index == self.buffer.len() {
            self.segment_start = self.segment_end.clone();
            self.derive_next_segment();
        }
        Ok(())
    }

    /// Moves to the previous normalized code point.
    pub fn previous(&mut self) -> Result<()> {
        if !self.has_previous() {
            return Err(Error::OutOfRange("the normalizer is at the beginning"));
        }
        if self.index > 0 {
            self.index -= 1;
        } else {
            self.segment_end = self.segment_start.clone();
            self.derive_previous_segment();
            self.index = self.buffer.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Returns the offset of the source iterator at the beginning of the current segment.
    pub fn offset(&self) -> isize {
        self.segment_start.offset()
    }

    /// Returns the source iterator positioned at the beginning of the current segment.
    pub fn segment_start(&self) -> &I {
        &self.segment_start
    }

    /// Returns the source iterator positioned at the end of the current segment.
    pub fn segment_end(&self) -> &I {
        &self.segment_end
    }

    fn derive_next_segment(&mut self) {
        self.buffer.clear();
        self.index = 0;
        self.segment_end = self.segment_start.clone();
        if !self.segment_end.has_next() {
            return;
        }
        let mut source = SegmentBuffer::new();
        source.push(self.segment_end.current());
        self.segment_end.next();
        while self.segment_end.has_next() {
            let cp = self.segment_end.current();
            if has_boundary_before(cp, self.form) {
                break;
            }
            source.push(cp);
            self.segment_end.next();
        }
        normalize_segment(&source, self.form, &mut self.buffer);
        log::trace!(
            "normalized {} code points forward at offset {} into {} code points ({:?})",
            source.len(),
            self.segment_start.offset(),
            self.buffer.len(),
            self.form
        );
    }

    fn derive_previous_segment(&mut self) {
        self.buffer.clear();
        self.segment_start = self.segment_end.clone();
        let mut source = SegmentBuffer::new();
        while self.segment_start.previous() {
            let cp = self.segment_start.current();
            source.push(cp);
            if has_boundary_before(cp, self.form) {
                break;
            }
        }
        source.reverse();
        normalize_segment(&source, self.form, &mut self.buffer);
        log::trace!(
            "normalized {} code points backward at offset {} into {} code points ({:?})",
            source.len(),
            self.segment_start.offset(),
            self.buffer.len(),
            self.form
        );
    }
}

/// Normalizes the text of `text` from its position to its end.
pub fn normalize<I: CharacterIterator>(text: &I, form: Form) -> Vec<CodePoint> {
    let mut normalizer = Normalizer::new(text, form);
    let mut out = Vec::new();
    while !normalizer.buffer.is_empty() {
        out.extend_from_slice(&normalizer.buffer);
        normalizer.segment_start = normalizer.segment_end.clone();
        normalizer.derive_next_segment();
    }
    out
}

/// Normalizes a string.
pub fn normalize_str(s: &str, form: Form) -> String {
    let code_points: Vec<CodePoint> = s.chars().map(CodePoint::from).collect();
    normalize(&CodePointCharacterIterator::new(&code_points), form)
        .into_iter()
        .filter_map(char::from_u32)
        .collect()
}

/// Normalizes UTF-16 text. Isolated surrogates are kept as they are.
pub fn normalize_utf16(text: &[u16], form: Form) -> Vec<u16> {
    utf16::encode_all(&normalize(&StringCharacterIterator::new(text), form))
}

/// Returns `true` if `s` is already in the given form.
pub fn is_normalized(s: &str, form: Form) -> bool {
    normalize_str(s, form) == s
}

/// Returns `true` if the text is in "Fast C or D" form: its canonical
/// decomposition, taken code point by code point, is already canonically ordered.
pub fn is_fcd<T: IntoIterator<Item = CodePoint>>(text: T) -> bool {
    let mut previous_trail = CanonicalCombiningClass::NOT_REORDERED;
    for cp in text {
        let lead = CanonicalCombiningClass::of(lead_of_decomposition(cp, false));
        if !lead.is_starter() && lead < previous_trail {
            return false;
        }
        previous_trail = CanonicalCombiningClass::of(trail_of_canonical_decomposition(cp));
    }
    true
}

fn decompose_without_reordering(text: &[CodePoint]) -> Vec<CodePoint> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = SegmentBuffer::new();
    for &cp in text {
        buf.clear();
        decompose_into(cp, false, &mut buf);
        out.extend_from_slice(&buf);
    }
    out
}

fn nfd(text: &[CodePoint]) -> Vec<CodePoint> {
    normalize(&CodePointCharacterIterator::new(text), Form::D)
}

/// Compares two texts by code point, treating canonically equivalent texts as equal.
pub fn compare_code_points(
    s1: &[CodePoint],
    s2: &[CodePoint],
    case_sensitivity: CaseSensitivity,
) -> Ordering {
    if case_sensitivity.is_case_insensitive() {
        // folding may produce text which is not FCD
        log::debug!("comparing case folded canonical decompositions");
        let turkic = case_sensitivity.is_turkic();
        let folded1 = CaseFolder::fold_code_points(&nfd(s1), turkic);
        let folded2 = CaseFolder::fold_code_points(&nfd(s2), turkic);
        return nfd(&folded1).cmp(&nfd(&folded2));
    }
    if is_fcd(s1.iter().copied()) && is_fcd(s2.iter().copied()) {
        log::debug!("comparing FCD text without reordering");
        decompose_without_reordering(s1).cmp(&decompose_without_reordering(s2))
    } else {
        log::debug!("comparing canonical decompositions");
        nfd(s1).cmp(&nfd(s2))
    }
}

/// Compares two strings by code point, treating canonically equivalent strings as equal.
pub fn compare(s1: &str, s2: &str, case_sensitivity: CaseSensitivity) -> Ordering {
    let s1: Vec<CodePoint> = s1.chars().map(CodePoint::from).collect();
    let s2: Vec<CodePoint> = s2.chars().map(CodePoint::from).collect();
    compare_code_points(&s1, &s2, case_sensitivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_points(s: &str) -> Vec<CodePoint> {
        s.chars().map(CodePoint::from).collect()
    }

    fn normalize_cps(text: &[CodePoint], form: Form) -> Vec<CodePoint> {
        normalize(&CodePointCharacterIterator::new(text), form)
    }

    #[test]
    fn test_hangul() {
        assert_eq!(vec![0x1100, 0x1161], normalize_cps(&[0xAC00], Form::D));
        assert_eq!(vec![0x1100, 0x1161, 0x11A8], normalize_cps(&[0xAC01], Form::D));
        assert_eq!(vec![0xAC00], normalize_cps(&[0x1100, 0x1161], Form::C));
        assert_eq!(vec![0xAC01], normalize_cps(&[0x1100, 0x1161, 0x11A8], Form::C));
        assert_eq!(vec![0xAC01], normalize_cps(&[0xAC00, 0x11A8], Form::C));
        // old jamo do not compose
        assert_eq!(vec![0x1100, 0x1176], normalize_cps(&[0x1100, 0x1176], Form::C));
    }

    #[test]
    fn test_canonical_ordering() {
        let expected = vec![0x43, 0x327, 0x301];
        assert_eq!(expected, normalize_cps(&[0x43, 0x327, 0x301], Form::D));
        assert_eq!(expected, normalize_cps(&[0x43, 0x301, 0x327], Form::D));
        assert_eq!(
            normalize_str("\u{0043}\u{0327}\u{0301}", Form::C),
            normalize_str("\u{0043}\u{0301}\u{0327}", Form::C)
        );
        assert_eq!("\u{1E08}", normalize_str("C\u{0301}\u{0327}", Form::C));
    }

    #[test]
    fn test_forms() {
        assert_eq!("\u{00C5}", normalize_str("\u{212B}", Form::C));
        assert_eq!("A\u{030A}", normalize_str("\u{212B}", Form::D));
        assert_eq!("D\u{0323}\u{0307}", normalize_str("\u{1E0A}\u{0323}", Form::D));
        assert_eq!("\u{1E0C}\u{0307}", normalize_str("\u{1E0A}\u{0323}", Form::C));
        assert_eq!("\u{FB01}", normalize_str("\u{FB01}", Form::C));
        assert_eq!("fi", normalize_str("\u{FB01}", Form::KC));
        assert_eq!("1", normalize_str("\u{2460}", Form::KD));
        assert_eq!("\u{30AC}", normalize_str("\u{FF76}\u{FF9E}", Form::KC));
        // composition exclusions stay decomposed
        assert_eq!("\u{0915}\u{093C}", normalize_str("\u{0958}", Form::C));
        assert_eq!("\u{0308}\u{0301}", normalize_str("\u{0344}", Form::C));
    }

    #[test]
    fn test_blocking() {
        // the second acute is blocked by the first
        assert_eq!("\u{00E1}\u{0301}", normalize_str("a\u{0301}\u{0301}", Form::C));
        // a mark of a lower class does not block
        assert_eq!("\u{1EA1}\u{0301}", normalize_str("a\u{0301}\u{0323}", Form::C));
        // an intervening starter blocks
        assert_eq!("ab\u{0301}", normalize_str("ab\u{0301}", Form::C));
    }

    #[test]
    fn test_idempotence() {
        let text = "\u{1E9B}\u{0323} \u{AC00}\u{11A8} \u{FB01}\u{0958}e\u{0301}\u{0327}";
        for form in [Form::C, Form::D, Form::KC, Form::KD] {
            let once = normalize_str(text, form);
            assert_eq!(once, normalize_str(&once, form));
            assert!(is_normalized(&once, form));
        }
    }

    #[test]
    fn test_iteration() {
        let text = code_points("e\u{0301}\u{0327}x\u{AC01}\u{212B}");
        let source = CodePointCharacterIterator::new(&text);
        let mut n = Normalizer::new(&source, Form::C);
        let mut forward = Vec::new();
        while n.has_next() {
            forward.push(n.current());
            n.next().unwrap();
        }
        assert_eq!(code_points("\u{0229}\u{0301}x\u{AC01}\u{00C5}"), forward);
        assert_eq!(DONE, n.current());
        assert_eq!(Err(Error::OutOfRange("the normalizer is at the end")), n.next());

        let mut backward = Vec::new();
        while n.has_previous() {
            n.previous().unwrap();
            backward.push(n.current());
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert!(n.previous().is_err());
    }

    #[test]
    fn test_iteration_from_end() {
        let text = code_points("a\u{0300}o\u{0300}");
        let mut source = CodePointCharacterIterator::new(&text);
        source.last();
        let mut n = Normalizer::new(&source, Form::C);
        assert!(!n.has_next());
        n.previous().unwrap();
        assert_eq!(0x00F2, n.current());
        assert_eq!(-2, n.offset());
        n.previous().unwrap();
        assert_eq!(0x00E0, n.current());
        assert_eq!(-4, n.offset());
        assert!(!n.has_previous());
    }

    #[test]
    fn test_utf16() {
        let text: Vec<u16> = vec![0x0041, 0x030A, 0xD800, 0x0041];
        assert_eq!(vec![0x00C5, 0xD800, 0x0041], normalize_utf16(&text, Form::C));
        let text: Vec<u16> = "\u{1D15E}".encode_utf16().collect();
        let expected: Vec<u16> = "\u{1D157}\u{1D165}".encode_utf16().collect();
        assert_eq!(expected, normalize_utf16(&text, Form::C));
    }

    #[test]
    fn test_fcd() {
        assert!(is_fcd(code_points("a\u{0327}\u{0301}")));
        assert!(!is_fcd(code_points("a\u{0301}\u{0327}")));
        // U+1E09 decomposes to c + cedilla + acute
        assert!(!is_fcd(code_points("\u{1E09}\u{0323}")));
        assert!(is_fcd(code_points("\u{1E09}\u{0301}")));
        assert!(is_fcd(code_points("\u{AC00}\u{1100}")));
    }

    #[test]
    fn test_compare() {
        use CaseSensitivity::*;
        assert_eq!(Ordering::Equal, compare("\u{00C5}", "A\u{030A}", CaseSensitive));
        assert_eq!(Ordering::Equal, compare("\u{212B}", "\u{00C5}", CaseSensitive));
        assert_eq!(
            Ordering::Equal,
            compare("a\u{0301}\u{0327}", "a\u{0327}\u{0301}", CaseSensitive)
        );
        assert_eq!(Ordering::Less, compare("a", "b", CaseSensitive));
        assert_eq!(Ordering::Greater, compare("a", "A", CaseSensitive));
        assert_eq!(Ordering::Equal, compare("\u{00C5}", "a\u{030A}", CaseInsensitive));
        assert_eq!(Ordering::Equal, compare("Stra\u{00DF}e", "STRASSE", CaseInsensitive));
        assert_eq!(Ordering::Equal, compare("I", "i", CaseInsensitive));
        assert_ne!(Ordering::Equal, compare("I", "i", CaseInsensitiveExcludingTurkishI));
        assert_eq!(
            Ordering::Equal,
            compare("I", "\u{0131}", CaseInsensitiveExcludingTurkishI)
        );
    }
}
