//! The navigation/focus state machine: one `handle` call per input event,
//! mutating the item list, the form, or nothing at all. Rendering and
//! persistence stay behind their own seams (`ui`, `store`).

use std::fmt;

use anyhow::{Context, Result};

use crate::fields::FieldSet;
use crate::input::Input;
use crate::store::WasteStore;
use crate::types::WasteItem;

/// Which half of the editor the user is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the selection through the item list.
    Browsing,
    /// Typing into the add-item form.
    Filling,
}

/// What the event loop should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Quit,
}

/// The most recent recoverable failure, shown until the next transition
/// succeeds. One slot, no history.
#[derive(Debug)]
pub enum AppError {
    InvalidQuantity(String),
    Insert(anyhow::Error),
    Delete(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidQuantity(text) => {
                write!(f, "invalid quantity {text:?}: expected a finite number")
            }
            AppError::Insert(err) => write!(f, "failed to add item: {err:#}"),
            AppError::Delete(err) => write!(f, "failed to delete item: {err:#}"),
        }
    }
}

/// The whole editor: item list, selection, form, and the store handle.
///
/// The store comes in through the constructor so tests can substitute an
/// in-memory fake; everything else is plain state the renderer reads.
pub struct App<S> {
    store: S,
    pub items: Vec<WasteItem>,
    /// Selected row while browsing. Kept at 0 when the list is empty, where
    /// it is ignored.
    pub cursor: usize,
    pub mode: Mode,
    /// Focused form field while filling; 0 otherwise.
    pub focus: usize,
    pub fields: FieldSet,
    pub last_error: Option<AppError>,
}

impl<S: WasteStore> App<S> {
    /// Load every stored record and start browsing. A store that cannot be
    /// read is fatal; the caller reports it and exits.
    pub fn new(store: S) -> Result<Self> {
        let items = store.load_all().context("loading waste items")?;
        Ok(Self {
            store,
            items,
            cursor: 0,
            mode: Mode::Browsing,
            focus: 0,
            fields: FieldSet::new(),
            last_error: None,
        })
    }

    /// Process one input event to completion.
    pub fn handle(&mut self, input: Input) -> Transition {
        match self.mode {
            Mode::Browsing => self.handle_browsing(input),
            Mode::Filling => self.handle_filling(input),
        }
    }

    fn handle_browsing(&mut self, input: Input) -> Transition {
        match input {
            Input::Quit => return Transition::Quit,
            Input::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
                self.last_error = None;
            }
            Input::MoveDown => {
                // clamp at the last valid index; no wraparound
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                self.last_error = None;
            }
            Input::Add => {
                self.fields.clear_all();
                self.focus = 0;
                self.mode = Mode::Filling;
                self.last_error = None;
            }
            Input::Delete => self.delete_selected(),
            // form inputs mean nothing while browsing
            _ => {}
        }
        Transition::Stay
    }

    fn handle_filling(&mut self, input: Input) -> Transition {
        match input {
            Input::Quit => return Transition::Quit,
            Input::Cancel => {
                self.fields.clear_all();
                self.focus = 0;
                self.mode = Mode::Browsing;
                self.last_error = None;
            }
            Input::Confirm => self.confirm_field(),
            Input::Char(c) => {
                self.fields.editor_mut(self.focus).insert_char(c);
                self.last_error = None;
            }
            Input::Backspace => {
                self.fields.editor_mut(self.focus).backspace();
                self.last_error = None;
            }
            Input::DeleteChar => {
                self.fields.editor_mut(self.focus).delete();
                self.last_error = None;
            }
            Input::CursorLeft => self.fields.editor_mut(self.focus).move_left(),
            Input::CursorRight => self.fields.editor_mut(self.focus).move_right(),
            Input::Home => self.fields.editor_mut(self.focus).home(),
            Input::End => self.fields.editor_mut(self.focus).end(),
            // list navigation means nothing while filling; the form is a
            // one-way linear entry
            Input::MoveUp | Input::MoveDown | Input::Add | Input::Delete => {}
        }
        Transition::Stay
    }

    /// Delete the selected item. The store is the authority: the list entry
    /// goes away only after the store confirms.
    fn delete_selected(&mut self) {
        if self.items.is_empty() {
            return;
        }
        match self.store.delete_by_id(self.items[self.cursor].id) {
            Ok(()) => {
                self.items.remove(self.cursor);
                self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(AppError::Delete(err)),
        }
    }

    /// Enter on a field: validate numeric fields, advance, and submit once
    /// the last field confirms.
    fn confirm_field(&mut self) {
        if self.fields.is_numeric(self.focus) {
            let text = self.fields.text(self.focus);
            if parse_finite(text).is_none() {
                self.last_error = Some(AppError::InvalidQuantity(text.to_string()));
                return; // stay put until it parses
            }
        }
        self.last_error = None;
        if self.focus + 1 < self.fields.len() {
            self.focus += 1;
        } else {
            self.submit();
        }
    }

    /// Build the record from the form and hand it to the store. Success
    /// returns to browsing; failure keeps the form intact for retry.
    fn submit(&mut self) {
        // the quantity field was validated when it was confirmed; re-read
        // rather than trust
        let quantity = match parse_finite(self.fields.text(1)) {
            Some(q) => q,
            None => {
                self.last_error =
                    Some(AppError::InvalidQuantity(self.fields.text(1).to_string()));
                return;
            }
        };
        let mut item = WasteItem {
            id: 0,
            name: self.fields.text(0).to_string(),
            quantity,
            waste_type: self.fields.text(2).to_string(),
            location: self.fields.text(3).to_string(),
            method: self.fields.text(4).to_string(),
        };
        match self.store.insert(&item) {
            Ok(id) => {
                item.id = id;
                self.items.push(item);
                self.fields.clear_all();
                self.focus = 0;
                self.mode = Mode::Browsing; // the selection stays where it was
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(AppError::Insert(err)),
        }
    }
}

/// Commit-time read of a user-typed number: trimmed and finite, nothing
/// else. Bare `f64::from_str` would accept "inf" and "NaN".
fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
