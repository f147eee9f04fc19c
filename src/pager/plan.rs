//! Page-button selection: which page numbers are shown and where the
//! collapsed ranges go.
//!
//! ```text
//! N <= 10      [1][2][3][4][5]
//! near start   [1][2][3][4] ... [N]
//! middle       [1] ... [p-1][p][p+1] ... [N]
//! near end     [1] ... [N-3][N-2][N-1][N]
//! ```

use serde::Serialize;

/// Largest page count rendered without truncation.
pub const FULL_RANGE_LIMIT: u32 = 10;

/// Size of the fixed page sets at either end used for zone classification.
pub const EDGE_SPAN: u32 = 3;

/// A single rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlDescriptor {
    /// Numbered button. Clickable unless it is the current page.
    PageButton { page: u32, is_current: bool },
    /// Non-interactive placeholder for a collapsed run of pages.
    Ellipsis,
}

impl ControlDescriptor {
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::PageButton { page, .. } => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// True for buttons that produce an intent when clicked.
    pub fn is_clickable(&self) -> bool {
        matches!(self, Self::PageButton { is_current: false, .. })
    }
}

/// Ordered controls for one render. Built fresh every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "controls", rename_all = "snake_case")]
pub enum RenderPlan {
    /// "no pages" placeholder, shown when the total is zero.
    Empty,
    Controls(Vec<ControlDescriptor>),
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        match self {
            Self::Empty => &[],
            Self::Controls(controls) => controls,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.controls().iter()
    }

    /// Rendered page numbers in display order.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.iter().filter_map(ControlDescriptor::page).collect()
    }

    pub fn ellipsis_count(&self) -> usize {
        self.iter()
            .filter(|control| matches!(control, ControlDescriptor::Ellipsis))
            .count()
    }

    /// Page of the button flagged current, if any.
    pub fn current_page(&self) -> Option<u32> {
        self.iter().find_map(|control| match control {
            ControlDescriptor::PageButton {
                page,
                is_current: true,
            } => Some(*page),
            _ => None,
        })
    }
}

/// Truncation layout for page counts above [`FULL_RANGE_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    NearStart,
    Middle,
    NearEnd,
}

/// Classify `current` for a truncated layout.
///
/// Returns `None` when every page fits (`total <= 10`). Membership only
/// looks at the fixed sets `{1,2,3}` and `{N-2,N-1,N}`, so page 3 is near
/// start (and still renders page 4) while page 4 is already middle.
pub fn classify_zone(current: u32, total: u32) -> Option<Zone> {
    if total <= FULL_RANGE_LIMIT {
        return None;
    }

    let in_low = (1..=EDGE_SPAN).contains(&current);
    let in_high = (total - (EDGE_SPAN - 1)..=total).contains(&current);

    Some(match (in_low, in_high) {
        (true, _) => Zone::NearStart,
        (false, true) => Zone::NearEnd,
        (false, false) => Zone::Middle,
    })
}

/// Compute the controls for `(current_page, total_pages)`.
///
/// `current_page` must lie in `1..=total_pages` when the total is non-zero.
/// Violations trip a debug assertion; release builds clamp into range.
pub fn compute_render_plan(current_page: u32, total_pages: u32) -> RenderPlan {
    if total_pages == 0 {
        return RenderPlan::Empty;
    }

    debug_assert!(
        (1..=total_pages).contains(&current_page),
        "current page {current_page} outside 1..={total_pages}"
    );
    let current = current_page.clamp(1, total_pages);

    let button = |page: u32| ControlDescriptor::PageButton {
        page,
        is_current: page == current,
    };

    let Some(zone) = classify_zone(current, total_pages) else {
        return RenderPlan::Controls((1..=total_pages).map(button).collect());
    };

    let mut controls = Vec::with_capacity(7);
    match zone {
        Zone::NearStart => {
            let mut pages: Vec<u32> = (1..=EDGE_SPAN).collect();
            pages.push(current + 1);
            pages.sort_unstable();
            pages.dedup();

            controls.extend(pages.into_iter().map(button));
            controls.push(ControlDescriptor::Ellipsis);
            controls.push(button(total_pages));
        }
        Zone::NearEnd => {
            let mut pages: Vec<u32> = (total_pages - (EDGE_SPAN - 1)..=total_pages).collect();
            pages.push(current - 1);
            pages.sort_unstable();
            pages.dedup();

            controls.push(button(1));
            controls.push(ControlDescriptor::Ellipsis);
            controls.extend(pages.into_iter().map(button));
        }
        Zone::Middle => {
            controls.push(button(1));
            controls.push(ControlDescriptor::Ellipsis);
            controls.extend((current - 1..=current + 1).map(button));
            controls.push(ControlDescriptor::Ellipsis);
            controls.push(button(total_pages));
        }
    }

    tracing::trace!(current, total_pages, ?zone, "computed render plan");
    RenderPlan::Controls(controls)
}
