use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::text;
use crate::ui::core::widget::{print_ui, Env, EventResult, NoticeKind, Update, Widget};

/// One row of a `List`: what is shown, what it stands for, and whether it is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListValue {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl ListValue {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// A row whose text is also its value.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Selectable rows, one per line, filling the available width.
///
/// A left press toggles a row (in single mode selecting a row clears the others) and emits
/// `Selected`. Other buttons emit `RowClicked` without touching the selection. Up/Down move a
/// single selection. Keys listed with `intercepting` are consumed and reported as `ListKey`.
pub struct List {
    id: Id,
    values: Vec<ListValue>,
    multiple: bool,
    intercept: Vec<KeyCode>,
    hover: Option<usize>,
}

impl List {
    pub fn new(values: Vec<ListValue>) -> Self {
        Self {
            id: Id::next(),
            values,
            multiple: false,
            intercept: Vec::new(),
            hover: None,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn intercepting(mut self, codes: impl IntoIterator<Item = KeyCode>) -> Self {
        self.intercept.extend(codes);
        self
    }

    pub fn values(&self) -> &[ListValue] {
        &self.values
    }

    pub fn selection(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.selected)
            .map(|(i, _)| i)
            .collect()
    }

    fn select_only(&mut self, index: usize) {
        for (i, v) in self.values.iter_mut().enumerate() {
            v.selected = i == index;
        }
    }

    fn toggle(&mut self, env: &mut Env, index: usize) -> EventResult {
        let selected = !self.values[index].selected;
        if selected && !self.multiple {
            self.select_only(index);
        } else {
            self.values[index].selected = selected;
        }
        env.notify(self.id, NoticeKind::Selected { index, selected });
        EventResult::consumed().with_draw()
    }

    fn step(&mut self, env: &mut Env, down: bool) -> EventResult {
        if self.values.is_empty() {
            return EventResult::consumed();
        }
        let last = self.values.len() - 1;
        let next = match (self.selection().first().copied(), down) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        };
        if self.values[next].selected && self.selection().len() == 1 {
            return EventResult::consumed();
        }
        self.select_only(next);
        env.notify(
            self.id,
            NoticeKind::Selected {
                index: next,
                selected: true,
            },
        );
        EventResult::consumed().with_draw()
    }
}

impl Widget for List {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("List", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        slot.set_size(Size::new(avail.w, self.values.len() as i32).clamp_to(avail));
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
        env.trace_draw("List", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let size = slot.size();
        painter.fill_rect(Rect::from_parts(orig, size), env.theme.normal);
        for (i, v) in self.values.iter().enumerate().take(size.h.max(0) as usize) {
            let style = if v.selected {
                env.theme.selected
            } else if self.hover == Some(i) {
                env.theme.hovered
            } else {
                env.theme.normal
            };
            let row = Pos::new(orig.x, orig.y + i as i32);
            painter.fill_rect(Rect::from_parts(row, Size::new(size.w, 1)), style);
            painter.text(row, text::fit(&v.text, size.w), style);
        }
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
        let row = (inside && (m.pos.y as usize) < self.values.len()).then_some(m.pos.y as usize);
        let mut r = EventResult::ignored();
        if row != self.hover {
            self.hover = row;
            r = r.with_draw();
        }
        let (MouseKind::Press(b), Some(index)) = (m.kind, row) else {
            return r;
        };
        if b == Buttons::LEFT {
            r.merge(self.toggle(env, index));
        } else {
            env.notify(self.id, NoticeKind::RowClicked { index, buttons: b });
            r.consumed = true;
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
        if self.intercept.contains(&key.code) {
            env.notify(
                self.id,
                NoticeKind::ListKey {
                    key,
                    selection: self.selection(),
                },
            );
            return EventResult::consumed();
        }
        match key.code {
            KeyCode::Down if !self.multiple => self.step(env, true),
            KeyCode::Up if !self.multiple => self.step(env, false),
            _ => EventResult::ignored(),
        }
    }

    fn first_focus(&mut self, _env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        let row = self.selection().first().copied().unwrap_or(0);
        Some(Pos::new(0, row as i32))
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("List", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Values(values) => {
                self.values = values;
                self.hover = None;
                Ok(())
            }
            Update::Select(indices) => {
                for (i, v) in self.values.iter_mut().enumerate() {
                    v.selected = indices.contains(&i);
                }
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/list.rs"]
mod tests;
