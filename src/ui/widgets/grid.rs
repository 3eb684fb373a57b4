use crate::core::event::{Key, Mouse};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::{Kid, Slot};
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{
    accept_logged, kids_apply, kids_first_focus, kids_focus, kids_key, kids_mark, kids_mouse,
    print_ui, Env, EventResult, KidsUpdate, Update, Widget,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Halign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Valign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Kids in row-major order over a fixed number of columns.
///
/// Every column is as wide as its widest kid and every row as tall as its tallest, both plus
/// the cell `padding`. Kids align within their cell per column; a column without an entry in
/// `halign`/`valign` uses the default.
pub struct Grid {
    id: Id,
    columns: usize,
    padding: Insets,
    halign: Vec<Halign>,
    valign: Vec<Valign>,
    kids: Vec<Kid>,
    widths: Vec<i32>,
    heights: Vec<i32>,
}

impl Grid {
    pub fn new(columns: usize, kids: Vec<Box<dyn Widget>>) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        Self {
            id: Id::next(),
            columns,
            padding: Insets::default(),
            halign: Vec::new(),
            valign: Vec::new(),
            kids: crate::ui::core::kid::kids(kids),
            widths: Vec::new(),
            heights: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_halign(mut self, halign: Vec<Halign>) -> Self {
        self.halign = halign;
        self
    }

    pub fn with_valign(mut self, valign: Vec<Valign>) -> Self {
        self.valign = valign;
        self
    }

    pub fn kids(&self) -> &[Kid] {
        &self.kids
    }

    /// Cell widths from the last layout, padding included.
    pub fn widths(&self) -> &[i32] {
        &self.widths
    }

    /// Cell heights from the last layout, padding included.
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }
}

impl Halign {
    fn offset(self, free: i32) -> i32 {
        match self {
            Halign::Left => 0,
            Halign::Center => free / 2,
            Halign::Right => free,
        }
    }
}

impl Valign {
    fn offset(self, free: i32) -> i32 {
        match self {
            Valign::Top => 0,
            Valign::Middle => free / 2,
            Valign::Bottom => free,
        }
    }
}

impl Widget for Grid {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Grid", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        let room = avail.inset(self.padding);
        let rows = self.kids.len().div_ceil(self.columns);
        self.widths = vec![0; self.columns];
        self.heights = vec![0; rows];
        for (i, kid) in self.kids.iter_mut().enumerate() {
            let kid_force = force || kid.slot.avail != room;
            kid.layout(env, room, kid_force);
            let cell = kid.slot.size().outset(self.padding);
            let (col, row) = (i % self.columns, i / self.columns);
            self.widths[col] = self.widths[col].max(cell.w);
            self.heights[row] = self.heights[row].max(cell.h);
        }

        let mut y = 0;
        for (row, line) in self.kids.chunks_mut(self.columns).enumerate() {
            let mut x = 0;
            for (col, kid) in line.iter_mut().enumerate() {
                let inner = Size::new(self.widths[col], self.heights[row]).inset(self.padding);
                let size = kid.slot.size();
                let h = self.halign.get(col).copied().unwrap_or_default();
                let v = self.valign.get(col).copied().unwrap_or_default();
                let align = Pos::new(h.offset(inner.w - size.w), v.offset(inner.h - size.h));
                kid.slot.set_pos(Pos::new(x, y) + self.padding.top_left() + align);
                x += self.widths[col];
            }
            y += self.heights[row];
        }

        let total = Size::new(self.widths.iter().sum(), self.heights.iter().sum());
        slot.set_size(total.clamp_to(avail));
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
        env.trace_draw("Grid", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        if force {
            painter.fill_rect(Rect::from_parts(orig, slot.size()), env.theme.normal);
        }
        for kid in self.kids.iter_mut() {
            let at = orig + kid.slot.pos();
            kid.draw(env, painter, at, m, force);
        }
    }

    fn mouse(
        &mut self,
        env: &mut Env,
        _slot: &mut Slot,
        m: &Mouse,
        orig_m: &Mouse,
        orig: Pos,
    ) -> EventResult {
        kids_mouse(env, &mut self.kids, m, orig_m, orig)
    }

    fn key(
        &mut self,
        env: &mut Env,
        _slot: &mut Slot,
        key: Key,
        m: &Mouse,
        orig: Pos,
    ) -> EventResult {
        kids_key(env, &mut self.kids, key, m, orig)
    }

    fn first_focus(&mut self, env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        kids_first_focus(env, &mut self.kids)
    }

    fn focus(&mut self, env: &mut Env, slot: &mut Slot, target: Id) -> Option<Pos> {
        if target == self.id {
            return self.first_focus(env, slot);
        }
        kids_focus(env, &mut self.kids, target)
    }

    fn mark(&mut self, slot: &mut Slot, target: Id, for_layout: bool) -> bool {
        kids_mark(self.id, slot, &mut self.kids, target, for_layout)
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Grid", self.id, slot, indent);
        for kid in &self.kids {
            kid.print(indent + 1);
        }
    }

    fn apply(&mut self, _slot: &mut Slot, target: Id, update: &mut Option<Update>) -> bool {
        if target == self.id {
            accept_logged(self, update);
            return true;
        }
        kids_apply(&mut self.kids, target, update)
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Kids(KidsUpdate { keep, append, .. }) => {
                KidsUpdate {
                    keep,
                    append,
                    split: None,
                }
                .apply_to(&mut self.kids);
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/grid.rs"]
mod tests;
