//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `ui` so the widget tree and its driver can run headless without depending on
//! terminal crates.

pub mod crossterm;
pub mod event_loop;
pub mod terminal_guard;
