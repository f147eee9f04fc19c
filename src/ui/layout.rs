use ratatui::layout::Rect;

/// Height of one pager block: border, button row, border.
pub const PAGER_BLOCK_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Stack up to `count` pager blocks from the top of `body`.
///
/// Blocks that would not fit entirely are omitted.
pub fn pager_blocks(body: Rect, count: usize) -> Vec<Rect> {
    let fits = (body.height / PAGER_BLOCK_HEIGHT) as usize;
    (0..count.min(fits))
        .map(|idx| Rect {
            x: body.x,
            y: body.y + idx as u16 * PAGER_BLOCK_HEIGHT,
            width: body.width,
            height: PAGER_BLOCK_HEIGHT,
        })
        .collect()
}

/// Row inside a pager block where its buttons go (inside the border, one
/// column of padding on each side).
pub fn button_row(block: Rect) -> Rect {
    Rect {
        x: block.x.saturating_add(2),
        y: block.y.saturating_add(1),
        width: block.width.saturating_sub(4),
        height: block.height.saturating_sub(2).min(1),
    }
}

/// Space left in `body` below `blocks` pager blocks.
pub fn activity_rect(body: Rect, blocks: usize) -> Rect {
    let used = (blocks as u16).saturating_mul(PAGER_BLOCK_HEIGHT).min(body.height);
    Rect {
        x: body.x,
        y: body.y + used,
        width: body.width,
        height: body.height - used,
    }
}
