use thiserror::Error;

use super::handle::PagerId;

/// Errors from pager registration and lookup.
///
/// Clicks and renders never fail; only the host-facing registry does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("Invalid pager id '{id}': expected ASCII letters, digits, '-' or '_'")]
    InvalidId { id: String },

    #[error("Pager '{id}' is already registered")]
    DuplicateId { id: PagerId },

    #[error("No pager registered as '{id}'")]
    UnknownPager { id: PagerId },
}
