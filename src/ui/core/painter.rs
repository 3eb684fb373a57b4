use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        style: Style,
    },
    HLine {
        pos: Pos,
        len: i32,
        ch: char,
        style: Style,
    },
    VLine {
        pos: Pos,
        len: i32,
        ch: char,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
    },
    /// Restrict every following command to `Some(rect)`, or lift the restriction.
    Clip(Option<Rect>),
}

/// Records paint commands for one draw pass; a backend replays them.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
    clip: Option<Rect>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
        self.clip = None;
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn take(&mut self) -> Vec<PaintCmd> {
        self.clip = None;
        std::mem::take(&mut self.cmds)
    }

    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Run `f` with painting restricted to `rect` (intersected with any enclosing clip).
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Painter) -> R) -> R {
        let prev = self.clip;
        let next = match prev {
            Some(outer) => outer.intersect(rect),
            None => rect,
        };
        self.clip = Some(next);
        self.cmds.push(PaintCmd::Clip(Some(next)));
        let out = f(self);
        self.clip = prev;
        self.cmds.push(PaintCmd::Clip(prev));
        out
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn hline(&mut self, pos: Pos, len: i32, ch: char, style: Style) {
        self.cmds.push(PaintCmd::HLine {
            pos,
            len,
            ch,
            style,
        });
    }

    pub fn vline(&mut self, pos: Pos, len: i32, ch: char, style: Style) {
        self.cmds.push(PaintCmd::VLine {
            pos,
            len,
            ch,
            style,
        });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
