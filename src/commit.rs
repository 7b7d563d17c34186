//! The conventional commit record and its canonical rendering.

use std::fmt;

use crate::footer::BREAKING_PHRASE;
use crate::{CommitBuilder, Error, ErrorKind, Footers, Parser};

/// A conventional commit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: String,
    scope: Option<String>,
    exclamation: bool,
    description: String,
    body: Option<String>,
    #[cfg_attr(
        feature = "schemars",
        schemars(with = "std::collections::BTreeMap<String, String>")
    )]
    footers: Footers,
}

impl Commit {
    /// Parse a commit message using the recommended types.
    ///
    /// See [`Parser::parse`] to configure the allowed types.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedMessage`] if the first line is not a
    /// conventional commit header.
    pub fn parse(message: &str) -> Result<Self, Error> {
        Parser::default().parse(message)
    }

    /// A commit with only a type and a description.
    ///
    /// # Errors
    ///
    /// Fails when `type_` or `description` is empty or only whitespace.
    pub fn new(type_: impl Into<String>, description: impl Into<String>) -> Result<Self, Error> {
        Self::builder()
            .type_(type_)
            .description(description)
            .build()
    }

    /// Assemble a commit field by field.
    pub fn builder() -> CommitBuilder {
        CommitBuilder::new()
    }

    /// Validate and assemble a commit.
    pub(crate) fn validated(
        ty: Option<String>,
        scope: Option<String>,
        exclamation: bool,
        description: Option<String>,
        body: Option<String>,
        footers: Footers,
    ) -> Result<Self, Error> {
        let ty = ty
            .filter(|t| !is_blank(t))
            .ok_or_else(|| Error::new(ErrorKind::MissingType))?;
        let description = description
            .filter(|d| !is_blank(d))
            .ok_or_else(|| Error::new(ErrorKind::MissingDescription))?;
        Ok(Self::new_unchecked(
            ty,
            scope,
            exclamation,
            description,
            body,
            footers,
        ))
    }

    /// Internal constructor that skips the type and description checks.
    ///
    /// Callers guarantee both are non-blank. Empty scopes are normalized to
    /// `None`; bodies are trimmed, and blank ones become `None`.
    pub(crate) fn new_unchecked(
        ty: String,
        scope: Option<String>,
        exclamation: bool,
        description: String,
        body: Option<String>,
        footers: Footers,
    ) -> Self {
        debug_assert!(!is_blank(&ty), "type must not be blank");
        debug_assert!(!is_blank(&description), "description must not be blank");
        Self {
            ty,
            scope: scope.filter(|s| !s.is_empty()),
            exclamation,
            description,
            body: body
                .map(|b| b.trim().to_owned())
                .filter(|b| !b.is_empty()),
            footers,
        }
    }

    /// The type of the commit.
    pub fn type_(&self) -> &str {
        &self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Whether the header carries the `!` marker.
    pub fn exclamation(&self) -> bool {
        self.exclamation
    }

    /// The commit description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The commit body, containing a more detailed explanation of the commit
    /// changes.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The footers of the commit, empty when there are none.
    pub fn footers(&self) -> &Footers {
        &self.footers
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the commit has an exclamation mark after
    /// the message type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when the `BREAKING CHANGE: ` footer is defined:
    /// ```text
    /// feat: my commit description
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn is_breaking_change(&self) -> bool {
        self.exclamation || self.footers.contains_key(BREAKING_PHRASE)
    }

    /// Explanation for the breaking change.
    ///
    /// Note: if no `BREAKING CHANGE` footer is provided, the `description` is expected to describe
    /// the breaking change.
    pub fn breaking_description(&self) -> Option<&str> {
        self.footers
            .get(BREAKING_PHRASE)
            .or_else(|| self.exclamation.then_some(self.description.as_str()))
    }

    /// Render the canonical commit message.
    pub fn render(&self) -> String {
        let mut message = self.ty.clone();

        if let Some(scope) = &self.scope {
            message.push('(');
            message.push_str(scope);
            message.push(')');
        }
        if self.exclamation {
            message.push('!');
        }
        message.push_str(": ");
        message.push_str(&self.description);

        if let Some(body) = &self.body {
            message.push_str("\n\n");
            message.push_str(body);
        }

        if !self.footers.is_empty() {
            message.push_str("\n\n");
            let lines: Vec<_> = self.footers.iter().map(ToString::to_string).collect();
            message.push_str(&lines.join("\n"));
        }

        message.trim().to_owned()
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
