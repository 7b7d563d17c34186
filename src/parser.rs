//! Message parsing against a configured set of commit types.

use crate::grammar;
use crate::{Commit, Error, ErrorKind, Footers, DEFAULT_TYPES};

/// Parses commit messages whose type is one of an ordered set of tokens.
///
/// ```rust
/// use conventional_message::Parser;
///
/// let parser = Parser::new(["feat", "fix", "release"]).unwrap();
/// let commit = parser.parse("release: 1.2.0").unwrap();
///
/// assert_eq!(commit.type_(), "release");
/// assert!(parser.parse("chore: tidy").is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parser {
    types: Vec<String>,
}

impl Parser {
    /// A parser accepting `types`, tried in the given order.
    ///
    /// Repeated tokens are dropped after their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidTypes`] when `types` is empty or contains
    /// a blank token.
    pub fn new<I, S>(types: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ty in types {
            let ty = ty.into();
            if ty.trim().is_empty() {
                return Err(Error::new(ErrorKind::InvalidTypes));
            }
            if !unique.contains(&ty) {
                unique.push(ty);
            }
        }
        if unique.is_empty() {
            return Err(Error::new(ErrorKind::InvalidTypes));
        }
        Ok(Self { types: unique })
    }

    /// The accepted types, in matching order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Parse a single commit message.
    ///
    /// The header and the footer block are matched independently against the
    /// whole message; the trimmed text between them is the body.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedMessage`] if the first line is not a
    /// header built from one of the configured types. A missing body or
    /// footer block is not an error.
    pub fn parse(&self, message: &str) -> Result<Commit, Error> {
        let Some(header) = grammar::header(message, &self.types) else {
            tracing::debug!(types = ?self.types, "rejected malformed commit message");
            return Err(Error::with_commit(ErrorKind::MalformedMessage, message));
        };
        let footer_block = grammar::footer_block(message);

        let body_end = footer_block
            .as_ref()
            .map_or(message.len(), |block| block.span.start);
        let body = message[header.span.end..body_end].trim();

        tracing::trace!(
            header = ?header.span,
            footers = ?footer_block.as_ref().map(|block| block.span.clone()),
            "parsed commit message"
        );

        let footers: Footers = footer_block
            .map(|block| block.entries.into_iter().collect())
            .unwrap_or_default();

        Ok(Commit::new_unchecked(
            header.ty.to_owned(),
            header.scope.map(str::to_owned),
            header.exclamation,
            header.description.to_owned(),
            (!body.is_empty()).then(|| body.to_owned()),
            footers,
        ))
    }
}

impl Default for Parser {
    /// A parser for the recommended types.
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(|ty| (*ty).to_owned()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Parser {
    type Error = Error;

    fn try_from(types: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(types)
    }
}

impl From<Parser> for Vec<String> {
    fn from(parser: Parser) -> Self {
        parser.types
    }
}
