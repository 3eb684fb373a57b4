use crate::core::event::{Buttons, InputEvent, Key, KeyCode, KeyModifiers, Mouse, MouseKind};
use crate::ui::core::geom::Pos;

/// Converts crossterm events into the crate's input events.
///
/// Terminals report one button per mouse event; the translator remembers which buttons are
/// held so every pointer event carries the full bitmask.
#[derive(Debug, Default)]
pub struct InputTranslator {
    held: Buttons,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Buttons {
        self.held
    }

    /// `None` for events the tree has no use for (key releases, focus changes, paste,
    /// horizontal wheel).
    pub fn translate(&mut self, event: crossterm::event::Event) -> Option<InputEvent> {
        match event {
            crossterm::event::Event::Key(key) => into_key(key).map(InputEvent::Key),
            crossterm::event::Event::Mouse(mouse) => self.mouse(mouse).map(InputEvent::Mouse),
            crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
            _ => None,
        }
    }

    fn mouse(&mut self, event: crossterm::event::MouseEvent) -> Option<Mouse> {
        use crossterm::event::MouseEventKind as K;

        let pos = Pos::new(event.column as i32, event.row as i32);
        let kind = match event.kind {
            K::Down(button) => {
                let b = into_button(button);
                self.held |= b;
                MouseKind::Press(b)
            }
            K::Up(button) => {
                let b = into_button(button);
                self.held = self.held.without(b);
                MouseKind::Release(b)
            }
            K::Drag(_) | K::Moved => MouseKind::Move,
            K::ScrollUp => MouseKind::Scroll(-1),
            K::ScrollDown => MouseKind::Scroll(1),
            K::ScrollLeft | K::ScrollRight => return None,
        };
        Some(Mouse {
            buttons: self.held,
            pos,
            kind,
        })
    }
}

pub fn into_key(event: crossterm::event::KeyEvent) -> Option<Key> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    Some(Key::new(code, modifiers))
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(crossterm::event::KeyModifiers::SUPER) {
        out |= KeyModifiers::SUPER;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    use crossterm::event::KeyCode as C;

    match code {
        C::Char(ch) => KeyCode::Char(ch),
        C::Enter => KeyCode::Enter,
        C::Tab => KeyCode::Tab,
        C::BackTab => KeyCode::BackTab,
        C::Esc => KeyCode::Esc,
        C::Backspace => KeyCode::Backspace,
        C::Delete => KeyCode::Delete,
        C::Up => KeyCode::Up,
        C::Down => KeyCode::Down,
        C::Left => KeyCode::Left,
        C::Right => KeyCode::Right,
        C::Home => KeyCode::Home,
        C::End => KeyCode::End,
        C::PageUp => KeyCode::PageUp,
        C::PageDown => KeyCode::PageDown,
        C::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl-Space as NUL.
        C::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

fn into_button(button: crossterm::event::MouseButton) -> Buttons {
    match button {
        crossterm::event::MouseButton::Left => Buttons::LEFT,
        crossterm::event::MouseButton::Middle => Buttons::MIDDLE,
        crossterm::event::MouseButton::Right => Buttons::RIGHT,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
