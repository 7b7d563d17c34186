//! A parser and renderer for [Conventional Commit] messages.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     docs(example)!: add tested usage example
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     BREAKING CHANGE: Going from nothing to something
//!     Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>
//! ");
//!
//! let commit = conventional_message::Commit::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! assert_eq!(commit.type_(), conventional_message::DOCS);
//! assert_eq!(commit.scope(), Some("example"));
//! assert_eq!(commit.description(), "add tested usage example");
//!
//! // And the free-form commit body.
//! assert!(commit.body().unwrap().contains("helps people understand"));
//!
//! // If a commit is marked with a bang (`!`) OR has a footer with the key
//! // "BREAKING CHANGE", it is considered a breaking change.
//! assert!(commit.is_breaking_change());
//!
//! // Footers keep the order they were written in.
//! let footers = commit.footers();
//! assert_eq!(footers.get("Co-Authored-By"), Some("Lisa Simpson <lisa@simpsons.fam>"));
//! assert_eq!(footers.iter().next().unwrap().token(), "BREAKING CHANGE");
//!
//! // Rendering gives back the canonical message.
//! assert!(commit.render().starts_with("docs(example)!: add tested usage example\n\n"));
//! ```
//!
//! Only the recommended types are accepted by [`Commit::parse`]; use a
//! [`Parser`] to choose your own.

#![warn(missing_docs)]

mod builder;
mod commit;
mod error;
mod footer;
mod grammar;
mod parser;

pub use builder::CommitBuilder;
pub use commit::Commit;
pub use error::{Error, ErrorKind};
pub use footer::{Footer, Footers};
pub use parser::Parser;

/// Commit type when patching a bug (correlates with `patch` in semver)
pub const FIX: &str = "fix";
/// Commit type when introducing new features (correlates with `minor` in semver)
pub const FEAT: &str = "feat";
/// Possible commit type for build system or dependency changes.
pub const BUILD: &str = "build";
/// Possible commit type for other things.
pub const CHORE: &str = "chore";
/// Possible commit type for continuous integration changes.
pub const CI: &str = "ci";
/// Possible commit type for changing documentation.
pub const DOCS: &str = "docs";
/// Possible commit type for changing code style.
pub const STYLE: &str = "style";
/// Possible commit type for refactoring code structure.
pub const REFACTOR: &str = "refactor";
/// Possible commit type for performance optimizations.
pub const PERF: &str = "perf";
/// Possible commit type for addressing tests.
pub const TEST: &str = "test";

/// The recommended types, in the order [`Parser::default`] tries them.
pub const DEFAULT_TYPES: [&str; 10] = [
    FIX, FEAT, BUILD, CHORE, CI, DOCS, STYLE, REFACTOR, PERF, TEST,
];

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
