/// Errors from converting a capture to a number.
///
/// "No match" is never an error: pattern and table lookups report it through
/// `Option` and the fallback token instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The capture contains no parseable digits in the requested base.
    #[error("invalid number format")]
    InvalidFormat,

    /// The parsed value does not fit in an `i32`.
    #[error("number out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, ParseError>;
