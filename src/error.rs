//! All errors related to parsing and building commit messages.

use std::fmt;

/// The error returned when parsing or constructing a commit fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    commit: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, commit: None }
    }

    /// Attach the message that failed to parse.
    pub(crate) fn with_commit(kind: ErrorKind, commit: &str) -> Self {
        Self {
            kind,
            commit: Some(commit.to_owned()),
        }
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The raw message that was rejected, if the error came from parsing.
    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    /// Whether this error was raised while validating fields, rather than
    /// while parsing text.
    pub fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// All possible error kinds returned when parsing or building a commit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The first line is not a header built from one of the allowed types.
    MalformedMessage,

    /// The commit type is missing, empty or only whitespace.
    MissingType,

    /// The commit description is missing, empty or only whitespace.
    MissingDescription,

    /// The set of allowed types is empty or contains a blank token.
    InvalidTypes,
}

impl ErrorKind {
    fn is_validation(self) -> bool {
        match self {
            ErrorKind::MalformedMessage => false,
            ErrorKind::MissingType | ErrorKind::MissingDescription | ErrorKind::InvalidTypes => {
                true
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedMessage => f.write_str("malformed conventional commit message"),
            ErrorKind::MissingType => f.write_str("type is missing or empty"),
            ErrorKind::MissingDescription => f.write_str("description is missing or empty"),
            ErrorKind::InvalidTypes => f.write_str("allowed types must be non-empty tokens"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_follows_kind() {
        let err = Error::with_commit(ErrorKind::MalformedMessage, "My commit message");

        assert_eq!(err.to_string(), "malformed conventional commit message");
        assert_eq!(err.commit(), Some("My commit message"));
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_kinds() {
        assert!(Error::new(ErrorKind::MissingType).is_validation());
        assert!(Error::new(ErrorKind::MissingDescription).is_validation());
        assert!(Error::new(ErrorKind::InvalidTypes).is_validation());
        assert_eq!(Error::new(ErrorKind::MissingType).commit(), None);
    }
}
