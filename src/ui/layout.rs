use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

pub struct ThreeBox {
    pub top: Rect,
    pub middle: Rect,
    pub bottom: Rect,
    pub top_inner: Rect,
    pub middle_inner: Rect,
    pub bottom_inner: Rect,
}

/// Title box over a content box over a footer box, each bordered, with one
/// row of breathing room inside. The content box absorbs whatever height
/// the title and footer leave behind.
pub fn three_box_layout(size: Rect, top_height: u16, footer_height: u16) -> ThreeBox {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(top_height),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(size);

    let inner = |r: Rect| r.inner(&Margin { horizontal: 2, vertical: 1 });

    ThreeBox {
        top: chunks[0],
        middle: chunks[1],
        bottom: chunks[2],
        top_inner: inner(chunks[0]),
        middle_inner: inner(chunks[1]),
        bottom_inner: inner(chunks[2]),
    }
}
