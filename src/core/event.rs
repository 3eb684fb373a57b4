//! Input events, as produced by the driver and consumed by the widget tree.
//!
//! These types do not depend on any terminal crate; `tui::crossterm` converts into them.

use crate::ui::core::geom::Pos;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Mouse(Mouse),
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// The printable character this key inserts, if any.
    pub fn text_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch)
                if !self.modifiers.contains(KeyModifiers::CONTROL)
                    && !self.modifiers.contains(KeyModifiers::ALT)
                    && !ch.is_control() =>
            {
                Some(ch)
            }
            _ => None,
        }
    }
}

/// Pointer button bitmask. Bit values follow the usual 1/2/4 numbering of left, middle and
/// right buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const MIDDLE: Self = Self(1 << 1);
    pub const RIGHT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Move,
    /// The named button went down; `Mouse::buttons` already includes it.
    Press(Buttons),
    /// The named button went up; `Mouse::buttons` no longer includes it.
    Release(Buttons),
    /// Wheel motion in rows; negative scrolls up.
    Scroll(i32),
}

/// Pointer state at one instant: held buttons, position and what just happened.
///
/// `pos` is absolute when produced by the driver. Containers hand children a copy translated
/// into the child's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouse {
    pub buttons: Buttons,
    pub pos: Pos,
    pub kind: MouseKind,
}

impl Mouse {
    pub fn at(pos: Pos) -> Self {
        Self {
            buttons: Buttons::NONE,
            pos,
            kind: MouseKind::Move,
        }
    }

    pub fn press(pos: Pos, button: Buttons) -> Self {
        Self {
            buttons: button,
            pos,
            kind: MouseKind::Press(button),
        }
    }

    pub fn release(pos: Pos, button: Buttons) -> Self {
        Self {
            buttons: Buttons::NONE,
            pos,
            kind: MouseKind::Release(button),
        }
    }

    pub fn scroll(pos: Pos, delta: i32) -> Self {
        Self {
            buttons: Buttons::NONE,
            pos,
            kind: MouseKind::Scroll(delta),
        }
    }

    /// This event, expressed relative to a child placed at `offset`.
    pub fn translated(&self, offset: Pos) -> Mouse {
        Mouse {
            pos: self.pos - offset,
            ..*self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
