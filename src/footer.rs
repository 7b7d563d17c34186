//! Footer entries of a commit message.

use std::fmt;

pub(crate) const BREAKING_PHRASE: &str = "BREAKING CHANGE";

/// A single footer.
///
/// A footer is a `token: value` line in the trailing block of a commit
/// message, similar to a Git trailer.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Footer {
    token: String,
    value: String,
}

impl Footer {
    /// The token of the footer.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The value of the footer.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn is_breaking(&self) -> bool {
        self.token == BREAKING_PHRASE
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.value)
    }
}

/// Footer tokens mapped to their values.
///
/// Tokens are unique: inserting a token that is already present replaces its
/// value but keeps its original position. Iteration follows insertion order,
/// while equality ignores it.
#[derive(Debug, Clone, Default, Eq)]
pub struct Footers {
    entries: Vec<Footer>,
}

impl Footers {
    /// An empty set of footers.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a footer, returning the value it replaced.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let token = token.into();
        let value = value.into();
        match self.entries.iter_mut().find(|f| f.token == token) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.entries.push(Footer { token, value });
                None
            }
        }
    }

    /// The value for `token`, if present.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|f| f.token == token)
            .map(Footer::value)
    }

    /// Whether a footer with `token` is present.
    pub fn contains_key(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Number of footers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no footers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate footers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Footer> {
        self.entries.iter()
    }
}

impl PartialEq for Footers {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|f| other.get(f.token()) == Some(f.value()))
    }
}

impl<'a> IntoIterator for &'a Footers {
    type Item = &'a Footer;
    type IntoIter = std::slice::Iter<'a, Footer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Footers {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (token, value) in iter {
            self.insert(token, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Footers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut footers = Self::new();
        footers.extend(iter);
        footers
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Footers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for footer in self {
            map.serialize_entry(footer.token(), footer.value())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn last_write_wins_in_place() {
        let mut footers = Footers::new();
        assert_eq!(footers.insert("Refs", "#1"), None);
        assert_eq!(footers.insert("Reviewed-by", "Me"), None);
        assert_eq!(footers.insert("Refs", "#2"), Some("#1".to_owned()));

        let tokens: Vec<_> = footers.iter().map(Footer::token).collect();
        assert_eq!(tokens, ["Refs", "Reviewed-by"]);
        assert_eq!(footers.get("Refs"), Some("#2"));
        assert_eq!(footers.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Footers = [("Refs", "#123"), ("Reviewed-by", "Me")].into_iter().collect();
        let b: Footers = [("Reviewed-by", "Me"), ("Refs", "#123")].into_iter().collect();
        let c: Footers = [("Reviewed-by", "You"), ("Refs", "#123")].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Footers::new());
    }

    #[test]
    fn breaking_token() {
        let footers: Footers = [("BREAKING CHANGE", "gone"), ("BREAKING-CHANGE", "also")]
            .into_iter()
            .collect();

        let breaking: Vec<_> = footers.iter().map(Footer::is_breaking).collect();
        assert_eq!(breaking, [true, false]);
        assert!(footers.contains_key("BREAKING CHANGE"));
        assert!(!footers.contains_key("breaking change"));
    }

    #[test]
    fn display_footer() {
        let footers: Footers = [("Refs", "#123")].into_iter().collect();
        let footer = footers.iter().next().unwrap();

        assert_eq!(footer.to_string(), "Refs: #123");
    }
}
