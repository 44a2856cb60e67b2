use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

/// Section headings ("Waste Management System", "Add New Waste Item") and
/// the table header row.
pub fn title() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0x7d, 0x56, 0xf4))
        .add_modifier(Modifier::BOLD)
}

/// The selected table row while browsing.
pub fn selected_row() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

/// The last-error line under the content.
pub fn error() -> Style {
    Style::default().fg(Color::LightRed)
}
