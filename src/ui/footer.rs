use crate::pager::PaginationState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One key binding shown in the footer. Disabled hints are drawn muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: &'static str,
    pub action: &'static str,
    pub enabled: bool,
}

/// Bindings for the focused pager; moves that would be no-ops are disabled.
pub fn key_hints(focused: Option<PaginationState>, pager_count: usize) -> Vec<KeyHint> {
    let state = focused.unwrap_or_default();
    let hint = |keys, action, enabled| KeyHint {
        keys,
        action,
        enabled,
    };
    vec![
        hint("←", "Prev", state.has_previous()),
        hint("→", "Next", state.has_next()),
        hint("Home/End", "Jump", state.total_pages() > 1),
        hint("Tab", "Focus", pager_count > 1),
        hint("+/-", "Pages", focused.is_some()),
        hint("q", "Quit", true),
    ]
}

pub struct Footer {
    focused: Option<PaginationState>,
    pager_count: usize,
}

impl Footer {
    pub fn new(focused: Option<PaginationState>, pager_count: usize) -> Self {
        Self {
            focused,
            pager_count,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let muted = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (i, hint) in key_hints(self.focused, self.pager_count).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", text_style));
            }
            let (keys, action) = if hint.enabled {
                (key_style, text_style)
            } else {
                (muted, muted)
            };
            spans.push(Span::styled(hint.keys, keys));
            spans.push(Span::styled(format!(" {}", hint.action), action));
        }

        let status = match self.focused {
            Some(state) if state.has_pages() => format!(
                "page {} of {} · v{} ",
                state.current_page(),
                state.total_pages(),
                VERSION
            ),
            _ => format!("v{} ", VERSION),
        };

        // Char count, not bytes: the separators are multi-byte.
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(status.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(status, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(hints: &[KeyHint], action: &str) -> bool {
        hints
            .iter()
            .find(|hint| hint.action == action)
            .map(|hint| hint.enabled)
            .unwrap_or(false)
    }

    #[test]
    fn first_page_disables_prev_only() {
        let hints = key_hints(Some(PaginationState::new(1, 20)), 2);
        assert!(!enabled(&hints, "Prev"));
        assert!(enabled(&hints, "Next"));
        assert!(enabled(&hints, "Focus"));
    }

    #[test]
    fn single_pager_disables_focus_cycling() {
        let hints = key_hints(Some(PaginationState::new(20, 20)), 1);
        assert!(enabled(&hints, "Prev"));
        assert!(!enabled(&hints, "Next"));
        assert!(!enabled(&hints, "Focus"));
    }

    #[test]
    fn no_pages_leaves_page_count_and_quit() {
        let hints = key_hints(Some(PaginationState::default()), 1);
        let live: Vec<_> = hints
            .iter()
            .filter(|hint| hint.enabled)
            .map(|hint| hint.action)
            .collect();
        assert_eq!(live, vec!["Pages", "Quit"]);
    }
}
