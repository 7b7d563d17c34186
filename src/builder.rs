//! Field-by-field construction of a [`Commit`].

use crate::{Commit, Error, Footers};

/// Accumulates commit fields, validated once by [`CommitBuilder::build`].
///
/// ```rust
/// let commit = conventional_message::Commit::builder()
///     .type_("fix")
///     .scope("parser")
///     .description("accept CRLF line endings")
///     .footer("Refs", "#42")
///     .build()
///     .unwrap();
///
/// assert_eq!(commit.render(), "fix(parser): accept CRLF line endings\n\nRefs: #42");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CommitBuilder {
    ty: Option<String>,
    scope: Option<String>,
    exclamation: bool,
    description: Option<String>,
    body: Option<String>,
    footers: Footers,
}

impl CommitBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the commit type.
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.ty = Some(type_.into());
        self
    }

    /// Set the scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set or clear the `!` marker.
    pub fn exclamation(mut self, exclamation: bool) -> Self {
        self.exclamation = exclamation;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a footer; a repeated token replaces the earlier value.
    pub fn footer(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.footers.insert(token, value);
        self
    }

    /// Build the commit.
    ///
    /// # Errors
    ///
    /// Fails when the type or description is missing, empty or only
    /// whitespace.
    pub fn build(self) -> Result<Commit, Error> {
        Commit::validated(
            self.ty,
            self.scope,
            self.exclamation,
            self.description,
            self.body,
            self.footers,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn build_all_fields() {
        let commit = CommitBuilder::new()
            .type_("feat")
            .scope("scope")
            .exclamation(true)
            .description("desc")
            .body("Body text")
            .footer("Reviewed-by", "Me")
            .footer("Refs", "#123")
            .build()
            .unwrap();

        assert_eq!(commit.type_(), "feat");
        assert_eq!(commit.scope(), Some("scope"));
        assert!(commit.exclamation());
        assert_eq!(commit.description(), "desc");
        assert_eq!(commit.body(), Some("Body text"));
        assert_eq!(commit.footers().get("Refs"), Some("#123"));
        assert!(commit.is_breaking_change());
    }

    #[test]
    fn repeated_footer_keeps_last_value() {
        let commit = CommitBuilder::new()
            .type_("fix")
            .description("desc")
            .footer("Refs", "#1")
            .footer("Refs", "#2")
            .build()
            .unwrap();

        assert_eq!(commit.footers().len(), 1);
        assert_eq!(commit.render(), "fix: desc\n\nRefs: #2");
    }

    #[test]
    fn missing_fields() {
        let err = CommitBuilder::new().description("desc").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingType);

        let err = CommitBuilder::new().type_("fix").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDescription);
        assert!(err.is_validation());
    }
}
