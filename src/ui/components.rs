use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::fields::TextField;
use crate::types::WasteItem;

/// Column header matching [`item_row`]'s widths.
pub fn table_header() -> String {
    format!(
        "{:<10} | {:<10} | {:<8} | {:<10} | {:<15}",
        "Name", "Type", "Quantity", "Location", "Disposal Method"
    )
}

/// One fixed-width table row.
pub fn item_row(item: &WasteItem) -> String {
    format!(
        "{:<10} | {:<10} | {:<8.2} | {:<10} | {:<15}",
        item.name, item.waste_type, item.quantity, item.location, item.method
    )
}

// Bash-style block cursor that covers the char (no shifting)
pub fn field_line<'a>(label: &str, field: &TextField, focused: bool) -> Line<'a> {
    let label_s = format!("{label}: ");
    let text = field.text.as_str();
    let cur = field.cursor.min(text.len());
    let label_span = Span::styled(label_s, Style::default().fg(Color::Yellow));

    if !focused {
        return Line::from(vec![label_span, Span::raw(text.to_string())]);
    }

    let (left, rest) = text.split_at(cur);
    let block = |s: &str| {
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    if let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        Line::from(vec![
            label_span,
            Span::raw(left.to_string()),
            block(&ch.to_string()),
            Span::raw(after.to_string()),
        ])
    } else {
        Line::from(vec![label_span, Span::raw(left.to_string()), block(" ")])
    }
}
