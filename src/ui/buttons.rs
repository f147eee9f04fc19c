//! Terminal rendition of a [`RenderPlan`].
//!
//! Controls are laid out on a single row: `‹ Prev`, the numbered group, then
//! `Next ›`. The same layout drives drawing and mouse hit-testing, so a click
//! can only produce an intent for a control that is actually enabled.

use std::cmp::Reverse;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::pager::{ControlDescriptor, PagerIntent, PaginationState, RenderPlan};
use crate::ui::theme::{BUTTON_BG, CURRENT_BG, HEADER_TEXT, MUTED_TEXT};

/// Columns between adjacent controls.
const GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTarget {
    Previous,
    Next,
    Page(u32),
    Ellipsis,
    /// "no pages" text for an empty plan.
    Placeholder,
}

impl ControlTarget {
    fn from_descriptor(control: &ControlDescriptor) -> Self {
        match control {
            ControlDescriptor::PageButton { page, .. } => Self::Page(*page),
            ControlDescriptor::Ellipsis => Self::Ellipsis,
        }
    }
}

/// Screen area occupied by one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlArea {
    pub rect: Rect,
    pub target: ControlTarget,
    pub enabled: bool,
}

impl ControlArea {
    /// Intent produced by clicking this control.
    pub fn intent(&self) -> Option<PagerIntent> {
        if !self.enabled {
            return None;
        }
        match self.target {
            ControlTarget::Previous => Some(PagerIntent::PreviousClicked),
            ControlTarget::Next => Some(PagerIntent::NextClicked),
            ControlTarget::Page(page) => Some(PagerIntent::PageNumberClicked(page)),
            ControlTarget::Ellipsis | ControlTarget::Placeholder => None,
        }
    }
}

/// Labels and styles used to draw controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTemplate {
    pub button: Style,
    pub current: Style,
    pub disabled: Style,
    pub ellipsis: Style,
    pub placeholder: Style,
}

impl Default for ButtonTemplate {
    fn default() -> Self {
        Self {
            button: Style::default().fg(HEADER_TEXT).bg(BUTTON_BG),
            current: Style::default()
                .fg(HEADER_TEXT)
                .bg(CURRENT_BG)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(MUTED_TEXT)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::DIM),
            ellipsis: Style::default().fg(MUTED_TEXT),
            placeholder: Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        }
    }
}

impl ButtonTemplate {
    pub fn label(&self, target: ControlTarget) -> String {
        match target {
            ControlTarget::Previous => " ‹ Prev ".to_string(),
            ControlTarget::Next => " Next › ".to_string(),
            ControlTarget::Page(page) => format!(" {page} "),
            ControlTarget::Ellipsis => " ... ".to_string(),
            ControlTarget::Placeholder => "no pages".to_string(),
        }
    }

    pub fn style(&self, area: &ControlArea) -> Style {
        match (area.target, area.enabled) {
            (ControlTarget::Ellipsis, _) => self.ellipsis,
            (ControlTarget::Placeholder, _) => self.placeholder,
            (ControlTarget::Page(_), false) => self.current,
            (_, false) => self.disabled,
            (_, true) => self.button,
        }
    }

    fn width(&self, target: ControlTarget) -> u16 {
        self.label(target).chars().count() as u16
    }
}

/// Place the controls of `plan` on the first row of `area`.
///
/// When the row is too narrow, controls are shed in this order: inner page
/// buttons (farthest from the current page first), `‹ Prev`, `Next ›`, then
/// ellipses. Page 1, the last page and the current page go last.
pub fn layout_controls(
    plan: &RenderPlan,
    state: PaginationState,
    area: Rect,
    template: &ButtonTemplate,
) -> Vec<ControlArea> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let mut targets: Vec<(ControlTarget, bool)> = match plan {
        RenderPlan::Empty => vec![(ControlTarget::Placeholder, false)],
        RenderPlan::Controls(controls) => {
            let mut targets = Vec::with_capacity(controls.len() + 2);
            targets.push((ControlTarget::Previous, state.has_previous()));
            targets.extend(controls.iter().map(|control| {
                (ControlTarget::from_descriptor(control), control.is_clickable())
            }));
            targets.push((ControlTarget::Next, state.has_next()));
            targets
        }
    };

    let row_width = |targets: &[(ControlTarget, bool)]| -> u32 {
        let labels: u32 = targets
            .iter()
            .map(|(target, _)| u32::from(template.width(*target)))
            .sum();
        labels + u32::from(GAP) * targets.len().saturating_sub(1) as u32
    };
    while targets.len() > 1 && row_width(&targets) > u32::from(area.width) {
        let Some((index, _)) = targets
            .iter()
            .enumerate()
            .min_by_key(|(_, (target, _))| shed_rank(*target, state))
        else {
            break;
        };
        targets.remove(index);
    }

    let mut areas = Vec::with_capacity(targets.len());
    let mut x = area.x;
    for (target, enabled) in targets {
        let width = template.width(target);
        if x.saturating_add(width) > area.right() {
            break;
        }
        areas.push(ControlArea {
            rect: Rect::new(x, area.y, width, 1),
            target,
            enabled,
        });
        x = x.saturating_add(width + GAP);
    }
    areas
}

/// Lower ranks are shed first when a row overflows.
fn shed_rank(target: ControlTarget, state: PaginationState) -> (u8, Reverse<u32>) {
    let current = state.current_page();
    let rank = match target {
        ControlTarget::Page(page) if page == current => 5,
        ControlTarget::Page(page) if page == 1 || page == state.total_pages() => 4,
        ControlTarget::Page(page) => return (0, Reverse(page.abs_diff(current))),
        ControlTarget::Previous => 1,
        ControlTarget::Next => 2,
        ControlTarget::Ellipsis => 3,
        ControlTarget::Placeholder => 6,
    };
    (rank, Reverse(0))
}

/// Intent for a click at `(column, row)`, if it landed on an enabled control.
pub fn hit_test(areas: &[ControlArea], column: u16, row: u16) -> Option<PagerIntent> {
    let position = Position::new(column, row);
    areas
        .iter()
        .find(|area| area.rect.contains(position))
        .and_then(ControlArea::intent)
}

pub struct PageButtons<'a> {
    plan: &'a RenderPlan,
    state: PaginationState,
    template: &'a ButtonTemplate,
}

impl<'a> PageButtons<'a> {
    pub fn new(
        plan: &'a RenderPlan,
        state: PaginationState,
        template: &'a ButtonTemplate,
    ) -> Self {
        Self {
            plan,
            state,
            template,
        }
    }
}

impl Widget for PageButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for control in layout_controls(self.plan, self.state, area, self.template) {
            buf.set_string(
                control.rect.x,
                control.rect.y,
                self.template.label(control.target),
                self.template.style(&control),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_widths_count_columns_not_bytes() {
        let template = ButtonTemplate::default();
        assert_eq!(template.width(ControlTarget::Previous), 8);
        assert_eq!(template.width(ControlTarget::Page(100)), 5);
        assert_eq!(template.width(ControlTarget::Ellipsis), 5);
    }
}
