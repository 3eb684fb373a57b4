//! UI layer: the widget tree, its stock widgets, the painting backends and the driver that runs
//! them.
//!
//! Nothing under `core` or `widgets` depends on a terminal crate; `backend::terminal` and the
//! `tui` module adapt the tree to a real terminal.

pub mod core;

pub mod backend;

pub mod driver;

pub mod widgets;
