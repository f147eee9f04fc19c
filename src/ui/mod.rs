//! Terminal host for pager instances.
//!
//! [`buttons`] turns a render plan into ratatui output and maps clicks back
//! to intents; the rest wires pagers into an interactive terminal app.

pub mod app;
pub mod buttons;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
