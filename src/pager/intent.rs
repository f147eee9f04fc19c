use serde::Serialize;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PagerIntent {
    /// A numbered button was clicked. Always re-renders, even for the
    /// page that is already current.
    PageNumberClicked(u32),
    PreviousClicked,
    NextClicked,
    /// Programmatic page jump from the host.
    SetCurrentPage(u32),
    /// The host learned a new page count.
    SetTotalPages(u32),
}

impl Intent for PagerIntent {}
