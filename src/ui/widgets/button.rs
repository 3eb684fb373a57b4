use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::text;
use crate::ui::core::widget::{print_ui, Env, EventResult, NoticeKind, Update, Widget};

/// `[ text ]`. A left press and release inside it, or Enter/Space while it holds the pointer,
/// emits `Clicked`.
pub struct Button {
    id: Id,
    text: String,
    hover: bool,
    pressed: bool,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Id::next(),
            text: text.into(),
            hover: false,
            pressed: false,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    fn label(&self) -> String {
        format!("[ {} ]", self.text)
    }
}

impl Widget for Button {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Button", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        slot.set_size(Size::new(text::width(&self.label()), 1).clamp_to(avail));
    }

    fn draw(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        painter: &mut Painter,
        orig: Pos,
        _m: &Mouse,
        force: bool,
    ) {
        env.trace_draw("Button", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let size = slot.size();
        let style = if self.hover || self.pressed {
            env.theme.button_hover
        } else {
            env.theme.button
        };
        painter.fill_rect(Rect::from_parts(orig, size), style);
        painter.text(orig, text::fit(&self.label(), size.w), style);
    }

    fn mouse(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        m: &Mouse,
        _orig_m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        let inside = Rect::from_parts(Pos::ZERO, slot.size()).contains(m.pos);
        let mut r = EventResult::ignored();
        if inside != self.hover {
            self.hover = inside;
            r = r.with_draw();
        }
        match m.kind {
            MouseKind::Press(b) if inside && b == Buttons::LEFT => {
                self.pressed = true;
                r.consumed = true;
                r.with_draw()
            }
            MouseKind::Release(b) if b == Buttons::LEFT && self.pressed => {
                self.pressed = false;
                if inside {
                    env.notify(self.id, NoticeKind::Clicked { buttons: b });
                    r.consumed = true;
                }
                r.with_draw()
            }
            _ => r,
        }
    }

    fn key(
        &mut self,
        env: &mut Env,
        _slot: &mut Slot,
        key: Key,
        _m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if key.modifiers.is_empty() => {
                env.notify(
                    self.id,
                    NoticeKind::Clicked {
                        buttons: Buttons::LEFT,
                    },
                );
                EventResult::consumed()
            }
            _ => EventResult::ignored(),
        }
    }

    fn first_focus(&mut self, _env: &mut Env, slot: &mut Slot) -> Option<Pos> {
        Some(Pos::new(2.min(slot.size().w - 1).max(0), 0))
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Button", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Text(text) => {
                self.text = text;
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
