//! trellis: a retained-mode widget tree for terminals, and a column file browser built on it.
//!
//! Modules:
//! - core: input event types
//! - ui: widget protocol, stock widgets, driver and paint backends
//! - files: the column file browser
//! - config / logging: process setup for the binaries
//! - tui: terminal integration (feature `tui`)

pub mod config;
pub mod core;
pub mod files;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
