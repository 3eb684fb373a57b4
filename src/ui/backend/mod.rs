//! Painting backends.
//!
//! Widgets only ever record `PaintCmd`s. The `Surface` replays them into a persistent cell grid,
//! so a partial draw pass only touches the cells it repaints; the terminal backend copies that
//! grid to the screen.

use crate::ui::core::geom::Pos;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

pub mod surface;

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
