use std::fmt;

/// A language tag, as far as text segmentation cares about it.
///
/// Only the language subtag takes part in boundary analysis. Tags are
/// accepted in POSIX (`sv_SE.UTF-8`) or BCP 47 (`ja-JP`) form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The neutral locale, which enables no language specific rules.
    pub fn classic() -> Self {
        Locale::default()
    }

    /// Parses a locale tag. `"C"`, `"POSIX"` and the empty tag yield the classic locale.
    pub fn new(tag: &str) -> Self {
        // drop the codeset and modifier of a POSIX locale name
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return Locale::classic();
        }
        let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty());
        let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
        // the region is the first two-letter or three-digit subtag after the language
        let region = subtags
            .find(|s| {
                (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
                    || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
            })
            .map(|s| s.to_ascii_uppercase());
        Locale { language, region }
    }

    /// Returns the lowercased language subtag, empty for the classic locale.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the uppercased region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub(crate) fn is_swedish(&self) -> bool {
        self.language == "sv"
    }

    pub(crate) fn is_japanese(&self) -> bool {
        self.language == "ja"
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.language.as_str(), &self.region) {
            ("", _) => write!(f, "C"),
            (language, None) => write!(f, "{}", language),
            (language, Some(region)) => write!(f, "{}-{}", language, region),
        }
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn test_parse() {
        let sv = Locale::new("sv_SE.UTF-8");
        assert_eq!("sv", sv.language());
        assert_eq!(Some("SE"), sv.region());
        assert!(sv.is_swedish());

        let ja = Locale::new("ja-Jpan-JP");
        assert_eq!("ja", ja.language());
        assert_eq!(Some("JP"), ja.region());
        assert!(ja.is_japanese());

        assert_eq!(Locale::classic(), Locale::new("C"));
        assert_eq!(Locale::classic(), Locale::new(""));
        assert_eq!("C", Locale::classic().to_string());
        assert_eq!("es-419", Locale::new("es_419").to_string());
    }
}
