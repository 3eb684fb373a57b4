use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{print_ui, Env, EventResult, NoticeKind, Update, Widget};

/// `[x]` or `[ ]`. A left press or Space toggles it and emits `Toggled`.
pub struct Checkbox {
    id: Id,
    checked: bool,
    hover: bool,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self {
            id: Id::next(),
            checked,
            hover: false,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self, env: &mut Env) -> EventResult {
        self.checked = !self.checked;
        env.notify(
            self.id,
            NoticeKind::Toggled {
                checked: self.checked,
            },
        );
        EventResult::consumed().with_draw()
    }
}

impl Widget for Checkbox {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Checkbox", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        slot.set_size(Size::new(3, 1).clamp_to(avail));
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
        env.trace_draw("Checkbox", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let style = if self.hover {
            env.theme.hovered
        } else {
            env.theme.normal
        };
        painter.fill_rect(Rect::from_parts(orig, slot.size()), style);
        painter.text(orig, if self.checked { "[x]" } else { "[ ]" }, style);
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
        if m.kind == MouseKind::Press(Buttons::LEFT) && inside {
            r.merge(self.toggle(env));
        }
        r
    }

    fn key(
        &mut self,
        env: &mut Env,
        _slot: &mut Slot,
        key: Key,
        _m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        if key.code == KeyCode::Char(' ') && key.modifiers.is_empty() {
            return self.toggle(env);
        }
        EventResult::ignored()
    }

    fn first_focus(&mut self, _env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        Some(Pos::new(1, 0))
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Checkbox", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Checked(checked) => {
                self.checked = checked;
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/checkbox.rs"]
mod tests;
