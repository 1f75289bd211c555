use crate::tables::case_folding::{COMMON_FOLDING, FULL_FOLDING, SIMPLE_FOLDING};
use crate::CodePoint;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// How [`compare`](crate::compare) treats letter case.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// Case is significant.
    #[default]
    CaseSensitive,
    /// Text is compared after full case folding.
    CaseInsensitive,
    /// Text is compared after full case folding, with the dotted and dotless
    /// capital I folded the Turkic way.
    CaseInsensitiveExcludingTurkishI,
}

impl CaseSensitivity {
    pub(crate) fn is_case_insensitive(self) -> bool {
        self != CaseSensitivity::CaseSensitive
    }

    pub(crate) fn is_turkic(self) -> bool {
        self == CaseSensitivity::CaseInsensitiveExcludingTurkishI
    }
}

/// The largest number of code points a full case folding maps one code point to.
pub(crate) const MAX_EXPANSION_LENGTH: usize = 3;

pub(crate) type FoldedCodePoints = SmallVec<[CodePoint; MAX_EXPANSION_LENGTH]>;

/// Case folding as defined by `CaseFolding.txt`.
///
/// With `turkic` set, U+0049 folds to U+0131 and U+0130 folds to U+0069 instead
/// of the default mappings.
#[derive(Copy, Clone, Debug)]
pub struct CaseFolder;

impl CaseFolder {
    /// Applies the simple (one to one) case folding to `cp`.
    pub fn fold(cp: CodePoint, turkic: bool) -> CodePoint {
        if let Some(folded) = fold_turkic_i(cp, turkic) {
            return folded;
        }
        lookup(COMMON_FOLDING, cp)
            .or_else(|| lookup(SIMPLE_FOLDING, cp))
            .unwrap_or(cp)
    }

    /// Applies the full case folding to `cp`, which may expand it to several code points.
    pub fn fold_full(cp: CodePoint, turkic: bool) -> FoldedCodePointsIter {
        let mut folded = FoldedCodePoints::new();
        if let Some(c) = fold_turkic_i(cp, turkic).or_else(|| lookup(COMMON_FOLDING, cp)) {
            folded.push(c);
        } else if let Some(mapping) = lookup(FULL_FOLDING, cp) {
            folded.extend_from_slice(mapping);
        } else {
            folded.push(cp);
        }
        FoldedCodePointsIter(folded.into_iter())
    }

    /// Applies the full case folding to every code point of `text`.
    pub fn fold_code_points(text: &[CodePoint], turkic: bool) -> Vec<CodePoint> {
        text.iter()
            .flat_map(|&cp| Self::fold_full(cp, turkic))
            .collect()
    }

    /// Applies the full case folding to `text`.
    pub fn fold_str(text: &str, turkic: bool) -> String {
        text.chars()
            .flat_map(|c| Self::fold_full(c as CodePoint, turkic))
            .filter_map(char::from_u32)
            .collect()
    }

    /// Compares `s1` and `s2` after full case folding, code point by code point.
    pub fn compare(s1: &str, s2: &str, turkic: bool) -> Ordering {
        let folded1 = s1.chars().flat_map(|c| Self::fold_full(c as CodePoint, turkic));
        let folded2 = s2.chars().flat_map(|c| Self::fold_full(c as CodePoint, turkic));
        folded1.cmp(folded2)
    }
}

/// The code points [`CaseFolder::fold_full`] folds a code point into.
#[derive(Debug)]
pub struct FoldedCodePointsIter(smallvec::IntoIter<[CodePoint; MAX_EXPANSION_LENGTH]>);

impl Iterator for FoldedCodePointsIter {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for FoldedCodePointsIter {}

fn fold_turkic_i(cp: CodePoint, turkic: bool) -> Option<CodePoint> {
    match (turkic, cp) {
        (true, 0x0049) => Some(0x0131),
        (true, 0x0130) => Some(0x0069),
        _ => None,
    }
}

fn lookup<T: Copy>(table: &[(u32, T)], cp: CodePoint) -> Option<T> {
    table
        .binary_search_by_key(&cp, |&(key, _)| key)
        .ok()
        .map(|idx| table[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_folding() {
        assert_eq!('a' as u32, CaseFolder::fold('A' as u32, false));
        assert_eq!('a' as u32, CaseFolder::fold('a' as u32, false));
        assert_eq!(0x03C3, CaseFolder::fold(0x03A3, false));
        assert_eq!(0x03C3, CaseFolder::fold(0x03C2, false));
        // U+1E9E only has a simple mapping besides its full one
        assert_eq!(0x00DF, CaseFolder::fold(0x1E9E, false));
        assert_eq!(0x00DF, CaseFolder::fold(0x00DF, false));
    }

    #[test]
    fn test_full_folding() {
        assert_eq!(
            vec![0x73, 0x73],
            CaseFolder::fold_full(0x00DF, false).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![0x69, 0x307],
            CaseFolder::fold_full(0x0130, false).collect::<Vec<_>>()
        );
        assert_eq!("strasse", CaseFolder::fold_str("Straße", false));
        assert_eq!("ffi", CaseFolder::fold_str("\u{FB03}", false));
    }

    #[test]
    fn test_turkic() {
        assert_eq!(0x0069, CaseFolder::fold('I' as u32, false));
        assert_eq!(0x0131, CaseFolder::fold('I' as u32, true));
        assert_eq!(0x0069, CaseFolder::fold(0x0130, true));
        assert_eq!("ıi", CaseFolder::fold_str("I\u{0130}", true));
    }

    #[test]
    fn test_compare() {
        assert_eq!(Ordering::Equal, CaseFolder::compare("MASSE", "maße", false));
        assert_eq!(Ordering::Less, CaseFolder::compare("apple", "Banana", false));
        assert_eq!(Ordering::Greater, CaseFolder::compare("I", "i", true));
    }
}
