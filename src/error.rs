use crate::CodePoint;

/// Errors reported by the iterators and configuration objects of this crate.
///
/// Property lookups, normalization and boundary analysis never fail on their
/// input data; only contract violations by the caller are reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument was outside of the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A code point was a surrogate or greater than U+10FFFF.
    #[error("invalid scalar value: U+{0:04X}")]
    InvalidScalarValue(CodePoint),
    /// An iterator was advanced past one of its ends.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
}

/// A specialized `Result` type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            "invalid scalar value: U+D800",
            Error::InvalidScalarValue(0xD800).to_string()
        );
        assert_eq!(
            "out of range: the normalizer is at the end",
            Error::OutOfRange("the normalizer is at the end").to_string()
        );
    }
}
