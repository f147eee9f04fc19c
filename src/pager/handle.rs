use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::PagerError;

/// Stable identifier scoping one pager instance.
///
/// Non-empty, ASCII alphanumerics plus `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PagerId(String);

impl PagerId {
    pub fn new(id: impl Into<String>) -> Result<Self, PagerError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if valid {
            Ok(Self(id))
        } else {
            Err(PagerError::InvalidId { id })
        }
    }

    /// Accept a host locator: a bare id or a `#id` selector.
    pub fn from_locator(locator: &str) -> Result<Self, PagerError> {
        let trimmed = locator.trim();
        Self::new(trimmed.strip_prefix('#').unwrap_or(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PagerId {
    type Error = PagerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PagerId> for String {
    fn from(id: PagerId) -> Self {
        id.0
    }
}

/// Typed reference to a registered pager.
///
/// Obtained from [`PagerRegistry::create`](super::PagerRegistry::create) or
/// [`PagerRegistry::resolve`](super::PagerRegistry::resolve); every
/// registry operation takes one of these instead of a raw locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PagerHandle {
    id: PagerId,
}

impl PagerHandle {
    pub(crate) fn new(id: PagerId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &PagerId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_prefix_is_stripped() {
        let id = PagerId::from_locator(" #results-pager ").unwrap();
        assert_eq!(id.as_str(), "results-pager");
    }

    #[test]
    fn rejects_selector_syntax_beyond_a_single_id() {
        assert!(PagerId::from_locator("#a .page-current").is_err());
        assert!(PagerId::from_locator("#").is_err());
        assert!(PagerId::new("").is_err());
    }
}
