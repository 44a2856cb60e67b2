//! Pure rendering: reads the application state, draws one frame, changes
//! nothing.

use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use textwrap::wrap;

use crate::app::{App, Mode};
use crate::store::WasteStore;
use crate::ui::components::{field_line, item_row, table_header};
use crate::ui::layout::three_box_layout;
use crate::ui::style::{self, span_key, span_sep, span_text};

pub fn draw<S: WasteStore>(f: &mut Frame<'_>, size: Rect, app: &App<S>) {
    let regions = three_box_layout(size, 3, 3);

    // title bar
    f.render_widget(Block::default().borders(Borders::ALL), regions.top);
    let title = Paragraph::new(Line::from(Span::styled(
        " Waste Management System ",
        style::title(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, regions.top_inner);

    // item table, then the form and the error line when present
    f.render_widget(Block::default().borders(Borders::ALL), regions.middle);

    let mut rows: Vec<ListItem> = Vec::new();

    if app.items.is_empty() {
        rows.push(ListItem::new(Line::from("No waste items recorded.")));
    } else {
        rows.push(ListItem::new(Line::from(Span::styled(
            " Current Waste Items ",
            style::title(),
        ))));
        rows.push(ListItem::new(Line::from(Span::styled(
            table_header(),
            style::title(),
        ))));
        for (i, item) in app.items.iter().enumerate() {
            let text = item_row(item);
            // the selection only means something while browsing
            let line = if app.mode == Mode::Browsing && app.cursor == i {
                Line::from(Span::styled(text, style::selected_row()))
            } else {
                Line::from(text)
            };
            rows.push(ListItem::new(line));
        }
    }

    if app.mode == Mode::Filling {
        rows.push(ListItem::new(Line::from("")));
        rows.push(ListItem::new(Line::from(Span::styled(
            " Add New Waste Item ",
            style::title(),
        ))));
        for (i, field) in app.fields.iter().enumerate() {
            rows.push(ListItem::new(field_line(
                field.label,
                &field.editor,
                app.focus == i,
            )));
        }
    }

    if let Some(err) = &app.last_error {
        rows.push(ListItem::new(Line::from("")));
        let width = regions.middle_inner.width.max(1) as usize;
        for seg in wrap(&format!("Error: {err}"), width) {
            rows.push(ListItem::new(Line::from(Span::styled(
                seg.to_string(),
                style::error(),
            ))));
        }
    }

    f.render_widget(List::new(rows), regions.middle_inner);

    // key legend
    f.render_widget(Block::default().borders(Borders::ALL), regions.bottom);
    let legend = match app.mode {
        Mode::Browsing => Line::from(vec![
            span_key("a"), span_text(" Add"), span_sep(),
            span_key("d"), span_text(" Delete"), span_sep(),
            span_key("↑/↓"), span_text(" Move"), span_sep(),
            span_key("q"), span_text(" Quit"),
        ]),
        Mode::Filling => Line::from(vec![
            span_key("Enter"), span_text(" Next Field"), span_sep(),
            span_key("←/→/Home/End"), span_text(" Cursor"), span_sep(),
            span_key("Backspace/Delete"), span_text(" Edit"), span_sep(),
            span_key("Esc"), span_text(" Cancel"),
        ]),
    };
    f.render_widget(
        Paragraph::new(legend).wrap(Wrap { trim: true }),
        regions.bottom_inner,
    );
}
