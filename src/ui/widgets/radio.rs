use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{print_ui, Env, EventResult, Notice, NoticeKind, Update, Widget};
use crate::ui::driver::Command;

/// `(*)` or `( )`. A left press or Space on an unselected radio selects it and emits `Chosen`
/// with its group; the other members are cleared by the `RadioGroup` that made them.
pub struct Radio {
    id: Id,
    group: Id,
    selected: bool,
    hover: bool,
}

impl Radio {
    pub fn new(group: Id, selected: bool) -> Self {
        Self {
            id: Id::next(),
            group,
            selected,
            hover: false,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn group(&self) -> Id {
        self.group
    }

    fn choose(&mut self, env: &mut Env) -> EventResult {
        if self.selected {
            return EventResult::consumed();
        }
        self.selected = true;
        env.notify(self.id, NoticeKind::Chosen { group: self.group });
        EventResult::consumed().with_draw()
    }
}

impl Widget for Radio {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Radio", slot, avail, force);
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
        env.trace_draw("Radio", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let style = if self.hover {
            env.theme.hovered
        } else {
            env.theme.normal
        };
        painter.fill_rect(Rect::from_parts(orig, slot.size()), style);
        painter.text(orig, if self.selected { "(*)" } else { "( )" }, style);
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
            r.merge(self.choose(env));
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
            return self.choose(env);
        }
        EventResult::ignored()
    }

    fn first_focus(&mut self, _env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        Some(Pos::new(1, 0))
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Radio", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Checked(selected) => {
                self.selected = selected;
                Ok(())
            }
            other => Err(other),
        }
    }
}

/// One exclusive set of radios.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    id: Id,
    members: Vec<Id>,
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioGroup {
    pub fn new() -> Self {
        Self {
            id: Id::next(),
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn members(&self) -> &[Id] {
        &self.members
    }

    /// A new member of this group.
    pub fn radio(&mut self, selected: bool) -> Radio {
        let radio = Radio::new(self.id, selected);
        self.members.push(radio.id);
        radio
    }

    /// Clear every other member once one of ours was chosen.
    pub fn handle(&self, notice: &Notice) -> Vec<Command> {
        match notice.kind {
            NoticeKind::Chosen { group } if group == self.id => self
                .members
                .iter()
                .filter(|&&id| id != notice.source)
                .map(|&id| Command::Update {
                    target: id,
                    update: Update::Checked(false),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/radio.rs"]
mod tests;
