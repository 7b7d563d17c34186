use std::collections::BTreeMap;

use conventional_message::{Commit, ErrorKind, Parser};
use rstest::rstest;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    message: String,
    #[serde(default)]
    types: Option<Vec<String>>,
    #[serde(default)]
    malformed: bool,
    #[serde(default)]
    expected: Option<Expected>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Expected {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    exclamation: bool,
    #[serde(default)]
    breaking_change: bool,
    description: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    footer: BTreeMap<String, String>,
}

fn test_cases() -> Vec<TestCase> {
    serde_yaml::from_str(include_str!("fixtures/test-cases.yaml")).unwrap()
}

#[test]
fn parse_fixtures() {
    let cases = test_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let parser = match &case.types {
            Some(types) => Parser::new(types.clone()).unwrap(),
            None => Parser::default(),
        };
        let result = parser.parse(&case.message);

        if case.malformed {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedMessage, "{}", case.name);
            continue;
        }

        let commit = result.unwrap_or_else(|err| panic!("{}: {err}", case.name));
        let expected = case.expected.expect("non-malformed cases have expectations");
        let name = &case.name;

        assert_eq!(commit.type_(), expected.ty, "type: {name}");
        assert_eq!(commit.scope(), expected.scope.as_deref(), "scope: {name}");
        assert_eq!(commit.exclamation(), expected.exclamation, "exclamation: {name}");
        assert_eq!(commit.description(), expected.description, "description: {name}");
        assert_eq!(
            commit.body(),
            expected.body.as_deref().map(str::trim),
            "body: {name}"
        );
        let footer: BTreeMap<String, String> = commit
            .footers()
            .iter()
            .map(|f| (f.token().to_owned(), f.value().to_owned()))
            .collect();
        assert_eq!(footer, expected.footer, "footer: {name}");
        assert_eq!(
            commit.is_breaking_change(),
            expected.breaking_change,
            "breaking change: {name}"
        );
    }
}

#[rstest]
fn parses_each_recommended_type(
    #[values("fix", "feat", "build", "chore", "ci", "docs", "style", "refactor", "perf", "test")]
    ty: &str,
) {
    let commit = Commit::parse(&format!("{ty}: My commit description")).unwrap();

    assert_eq!(commit.type_(), ty);
    assert_eq!(commit.scope(), None);
    assert!(!commit.exclamation());
    assert_eq!(commit.description(), "My commit description");
}

#[rstest]
#[case("feat: My new feature")]
#[case("feat(feature-scope): My new feature")]
#[case("fix!: drop support\n\nBREAKING CHANGE: gone")]
#[case("docs: readme\n\nFirst line\nsecond line\n\nRefs: #1\nAcked-by: Me")]
fn canonical_messages_render_unchanged(#[case] message: &str) {
    assert_eq!(Commit::parse(message).unwrap().render(), message);
}
