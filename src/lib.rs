#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Unicode normalization forms (UAX #15) and text boundary analysis (UAX #29).
//!
//! Text is seen through a [`CharacterIterator`], a bidirectional cursor over
//! code points. The crate ships cursors over UTF-16 buffers
//! ([`StringCharacterIterator`]) and over code point slices
//! ([`CodePointCharacterIterator`]); anything else can implement the trait.
//!
//! # Normalization
//!
//! [`Normalizer`] walks a cursor and yields the code points of one of the four
//! normalization [`Form`]s, one segment at a time, in either direction.
//! [`normalize`], [`normalize_str`] and [`normalize_utf16`] convert whole texts.
//! [`compare`] orders strings by their canonical decomposition, optionally
//! ignoring case.
//!
//! # Boundaries
//!
//! The [`break_iterator`] module finds grapheme cluster, word and sentence
//! boundaries. Words are tailored by an [`IdentifierSyntax`], which decides
//! what a letter is, and by a [`Locale`].
//!
//! # Character properties
//!
//! The [`ucd`] module looks up the properties the algorithms are built on.
//! Tables are generated from the Unicode Character Database, version
//! [`UNICODE_VERSION`].

/// A Unicode code point. Cursors may produce isolated surrogates, which are
/// treated as unassigned characters.
pub type CodePoint = u32;

pub(crate) mod tables;

pub mod break_iterator;

pub mod break_property;

pub(crate) mod case_folder;

pub(crate) mod character_iterator;

pub(crate) mod error;

pub(crate) mod identifier_syntax;

pub(crate) mod locale;

pub(crate) mod normalizer;

pub mod ucd;

pub mod utf16;

pub use break_iterator::BreakIterator;

pub use case_folder::{CaseFolder, CaseSensitivity, FoldedCodePointsIter};

pub use character_iterator::{
    CharacterIterator, CodePointCharacterIterator, StringCharacterIterator, DONE,
};

pub use error::{Error, Result};

pub use identifier_syntax::{CharacterClassification, IdentifierSyntax};

pub use locale::Locale;

pub use normalizer::{
    compare, compare_code_points, is_fcd, is_normalized, normalize, normalize_str,
    normalize_utf16, Form, Normalizer,
};

pub use tables::UNICODE_VERSION;
