use crate::ui::app::PagerView;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, focused: Option<&PagerView>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("pagerline", Style::default().fg(ACCENT)),
        ];
        if let Some(view) = focused {
            let position = if view.state.has_pages() {
                format!(
                    "page {} of {}",
                    view.state.current_page(),
                    view.state.total_pages()
                )
            } else {
                "no pages".to_string()
            };
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(view.handle.id().to_string(), text_style));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(position, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
