use crate::core::event::{Key, Mouse};
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{accept_logged, print_ui, Env, EventResult, Update, Widget};

/// Chooses an alternative from the available size.
pub type PickFn = Box<dyn Fn(Size) -> usize>;

/// Shows exactly one of several owned alternatives, re-chosen on every layout.
///
/// The chosen alternative shares this widget's slot. Switching to a different alternative is a
/// structural change: the newcomer is laid out with `force` set and the slot is marked for
/// drawing. Every other operation goes straight to the current alternative.
pub struct Pick {
    id: Id,
    alternatives: Vec<Box<dyn Widget>>,
    pick: PickFn,
    current: Option<usize>,
}

impl Pick {
    pub fn new(alternatives: Vec<Box<dyn Widget>>, pick: PickFn) -> Self {
        Self {
            id: Id::next(),
            alternatives,
            pick,
            current: None,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    /// Index of the alternative chosen by the last layout.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    fn ui(&mut self) -> Option<&mut Box<dyn Widget>> {
        let i = self.current?;
        self.alternatives.get_mut(i)
    }
}

impl Widget for Pick {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Pick", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        if self.alternatives.is_empty() {
            slot.set_size(Size::ZERO);
            return;
        }
        let next = (self.pick)(avail).min(self.alternatives.len() - 1);
        let swapped = self.current != Some(next);
        if swapped {
            tracing::debug!(pick = %self.id, from = ?self.current, to = next, "pick swapped");
            slot.mark_draw();
        }
        self.current = Some(next);
        self.alternatives[next].layout(env, slot, avail, force || swapped);
    }

    fn draw(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        painter: &mut Painter,
        orig: Pos,
        m: &Mouse,
        force: bool,
    ) {
        env.trace_draw("Pick", slot, orig, force);
        if let Some(ui) = self.ui() {
            ui.draw(env, slot, painter, orig, m, force);
        }
    }

    fn mouse(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        m: &Mouse,
        orig_m: &Mouse,
        orig: Pos,
    ) -> EventResult {
        match self.ui() {
            Some(ui) => ui.mouse(env, slot, m, orig_m, orig),
            None => EventResult::ignored(),
        }
    }

    fn key(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        key: Key,
        m: &Mouse,
        orig: Pos,
    ) -> EventResult {
        match self.ui() {
            Some(ui) => ui.key(env, slot, key, m, orig),
            None => EventResult::ignored(),
        }
    }

    fn first_focus(&mut self, env: &mut Env, slot: &mut Slot) -> Option<Pos> {
        self.ui()?.first_focus(env, slot)
    }

    fn focus(&mut self, env: &mut Env, slot: &mut Slot, target: Id) -> Option<Pos> {
        if target == self.id {
            return self.first_focus(env, slot);
        }
        self.ui()?.focus(env, slot, target)
    }

    /// Alternatives not on screen are searched too, against a scratch slot: they are laid out
    /// with `force` whenever they come back.
    fn mark(&mut self, slot: &mut Slot, target: Id, for_layout: bool) -> bool {
        if target == self.id {
            slot.mark(for_layout);
            return true;
        }
        let current = self.current;
        self.alternatives.iter_mut().enumerate().any(|(i, ui)| {
            if Some(i) == current {
                ui.mark(slot, target, for_layout)
            } else {
                ui.mark(&mut Slot::new(), target, for_layout)
            }
        })
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Pick", self.id, slot, indent);
        if let Some(ui) = self.current.and_then(|i| self.alternatives.get(i)) {
            ui.print(slot, indent + 1);
        }
    }

    fn apply(&mut self, slot: &mut Slot, target: Id, update: &mut Option<Update>) -> bool {
        if target == self.id {
            accept_logged(self, update);
            return true;
        }
        let current = self.current;
        self.alternatives.iter_mut().enumerate().any(|(i, ui)| {
            if Some(i) == current {
                ui.apply(slot, target, update)
            } else {
                ui.apply(&mut Slot::new(), target, update)
            }
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/pick.rs"]
mod tests;
