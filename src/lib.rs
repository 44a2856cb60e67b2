//! # Introduction
//!
//! wmtui is a terminal editor for a small waste-disposal inventory.  Records
//! live in a local SQLite file; the UI is built with
//! [ratatui](https://docs.rs/ratatui) and offers a browsable list, a
//! five-field entry form, and single-key deletion.
//!
//! ## Event pipeline
//!
//! ```text
//! KeyEvent → map_key → Input → App::handle → WasteStore → redraw
//! ```
//!
//! 1. [`input`] translates raw key events into editor [`input::Input`]s,
//!    mode by mode.
//! 2. [`app`] is the state machine: list cursor, form focus, error slot,
//!    and every transition between browsing and filling.
//! 3. [`fields`] is the form model: labelled [`fields::TextField`]s with a
//!    movable cursor.
//! 4. [`store`] holds the [`store::WasteStore`] trait and its SQLite
//!    implementation, the only layer that touches disk.
//! 5. [`ui`] renders one frame from the current state, mutating nothing.
//! 6. [`tui`] owns terminal setup, the poll loop, and teardown.

pub mod app;
pub mod defaults;
pub mod fields;
pub mod input;
pub mod store;
pub mod tui;
pub mod types;
pub mod ui;
