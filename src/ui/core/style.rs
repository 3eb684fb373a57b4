//! Cell styles. An unset color is transparent: text and lines painted with it keep the color of
//! the cell underneath, so a leaf fills its background once and draws on top with a
//! foreground-only style. Fills replace the cell's style outright.

use std::ops::BitOr;

/// A terminal color. `Reset` is the terminal's own default, which is not the same as unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

/// Text attributes, one bit each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Attrs(u8);

impl Attrs {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const DIM: Self = Self(2);
    pub const UNDERLINE: Self = Self(4);
    pub const REVERSE: Self = Self(8);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Attrs {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attrs,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attrs::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.union(attrs);
        self
    }

    /// `self` laid on top of `under`: set colors replace, unset ones show through, attributes
    /// accumulate.
    pub const fn over(self, under: Style) -> Style {
        Style {
            fg: match self.fg {
                Some(c) => Some(c),
                None => under.fg,
            },
            bg: match self.bg {
                Some(c) => Some(c),
                None => under.bg,
            },
            attrs: self.attrs.union(under.attrs),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
