/// Errors that can occur while parsing URLs or loading suffix rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string cannot be decomposed into any URL structure
    /// (empty input, empty authority after a scheme, bad port)
    InvalidUrl,
    /// The suffix list source yielded zero usable rules
    EmptySuffixList,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidUrl => "Invalid URL",
            Self::EmptySuffixList => "Suffix list contains no usable rules",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
