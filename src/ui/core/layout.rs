use super::geom::{Pos, Rect, Size};

/// Space around content, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn all(v: i32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub const fn xy(x: i32, y: i32) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }

    pub fn dx(&self) -> i32 {
        self.left + self.right
    }

    pub fn dy(&self) -> i32 {
        self.top + self.bottom
    }

    pub fn top_left(&self) -> Pos {
        Pos::new(self.left, self.top)
    }
}

impl Size {
    pub fn inset(self, insets: Insets) -> Size {
        Size::new(
            (self.w - insets.dx()).max(0),
            (self.h - insets.dy()).max(0),
        )
    }

    pub fn outset(self, insets: Insets) -> Size {
        Size::new(self.w + insets.dx(), self.h + insets.dy())
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.w - insets.dx()).max(0),
            (self.h - insets.dy()).max(0),
        )
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, (x2 - x1).max(0), (y2 - y1).max(0))
    }

    pub fn split_left(self, w: i32) -> (Rect, Rect) {
        let left_w = w.clamp(0, self.w.max(0));
        let left = Rect::new(self.x, self.y, left_w, self.h);
        let rest = Rect::new(self.x + left_w, self.y, self.w - left_w, self.h);
        (left, rest)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
