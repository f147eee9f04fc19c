use crate::ui::app::App;
use crate::ui::buttons::PageButtons;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{activity_rect, button_row, layout_regions, pager_blocks};
use crate::ui::theme::{ACCENT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let views = app.pager_views();
    let focused = views.iter().find(|view| view.focused);
    frame.render_widget(Header::new().widget(focused), header);

    let blocks = pager_blocks(body, views.len());
    for (view, block_area) in views.iter().zip(blocks.iter()) {
        let (title_color, border_color) = if view.focused {
            (ACCENT, FOCUSED_BORDER)
        } else {
            (HEADER_TEXT, GLOBAL_BORDER)
        };
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", view.handle.id()),
                Style::default().fg(title_color),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        frame.render_widget(block, *block_area);
        frame.render_widget(
            PageButtons::new(&view.plan, view.state, app.template()),
            button_row(*block_area),
        );
    }

    let activity_area = activity_rect(body, blocks.len());
    if activity_area.height > 2 {
        let mut lines: Vec<Line> = app.activity().into_iter().map(Line::from).collect();
        if lines.is_empty() {
            lines.push(Line::styled("No changes yet.", Style::default().fg(MUTED_TEXT)));
        }
        let visible = activity_area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        let widget = Paragraph::new(lines.split_off(skip)).block(
            Block::default()
                .title(Span::styled(" Activity ", Style::default().fg(HEADER_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(widget, activity_area);
    }

    let footer_widget = Footer::new(focused.map(|view| view.state), views.len()).widget(footer);
    frame.render_widget(footer_widget, footer);
}
