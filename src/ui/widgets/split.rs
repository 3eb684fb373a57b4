use crate::core::event::{Key, Mouse};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::{Kid, Slot};
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{
    accept_logged, kids_apply, kids_first_focus, kids_focus, kids_key, kids_mark, kids_mouse,
    print_ui, Env, EventResult, KidsUpdate, Update, Widget,
};

/// Divides an extent (the split's width or height minus its gutters) into one extent per kid.
/// The result must have exactly one entry per kid and sum to the input.
pub type SplitFn = Box<dyn Fn(i32) -> Vec<i32>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Kids side by side, extents are widths.
    Horizontal,
    /// Kids stacked, extents are heights.
    Vertical,
}

/// `n` equal extents, the last one absorbing the remainder.
pub fn equal_split(n: usize) -> SplitFn {
    Box::new(move |total| {
        if n == 0 {
            return Vec::new();
        }
        let each = total / n as i32;
        let mut out = vec![each; n];
        out[n - 1] = total - each * (n as i32 - 1);
        out
    })
}

/// Kids laid out along one axis, each given the full cross extent and the slice its split
/// function assigns, separated by `gutter` cells.
pub struct Split {
    id: Id,
    axis: Axis,
    gutter: i32,
    split: SplitFn,
    kids: Vec<Kid>,
}

impl Split {
    pub fn new(axis: Axis, split: SplitFn, kids: Vec<Box<dyn Widget>>) -> Self {
        Self {
            id: Id::next(),
            axis,
            gutter: 1,
            split,
            kids: crate::ui::core::kid::kids(kids),
        }
    }

    pub fn horizontal(split: SplitFn, kids: Vec<Box<dyn Widget>>) -> Self {
        Self::new(Axis::Horizontal, split, kids)
    }

    pub fn vertical(split: SplitFn, kids: Vec<Box<dyn Widget>>) -> Self {
        Self::new(Axis::Vertical, split, kids)
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn with_gutter(mut self, gutter: i32) -> Self {
        self.gutter = gutter.max(0);
        self
    }

    pub fn kids(&self) -> &[Kid] {
        &self.kids
    }

    fn main(&self, s: Size) -> i32 {
        match self.axis {
            Axis::Horizontal => s.w,
            Axis::Vertical => s.h,
        }
    }

    fn slice(&self, offset: i32, extent: i32, avail: Size) -> (Pos, Size) {
        match self.axis {
            Axis::Horizontal => (Pos::new(offset, 0), Size::new(extent, avail.h)),
            Axis::Vertical => (Pos::new(0, offset), Size::new(avail.w, extent)),
        }
    }
}

impl Widget for Split {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Split", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        let force = force || slot.avail != avail;
        let n = self.kids.len() as i32;
        let total = (self.main(avail) - self.gutter * (n - 1).max(0)).max(0);
        let extents = (self.split)(total);
        assert_eq!(
            extents.len(),
            self.kids.len(),
            "split function returned {} extents for {} kids",
            extents.len(),
            self.kids.len()
        );
        debug_assert_eq!(extents.iter().sum::<i32>(), total);

        let mut offset = 0;
        for i in 0..self.kids.len() {
            let (pos, size) = self.slice(offset, extents[i].max(0), avail);
            let kid = &mut self.kids[i];
            let kid_force = force || kid.slot.avail != size;
            kid.slot.set_pos(pos);
            kid.layout(env, size, kid_force);
            offset += extents[i].max(0) + self.gutter;
        }
        slot.set_size(avail);
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
        env.trace_draw("Split", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let size = slot.size();
        if force {
            painter.fill_rect(Rect::from_parts(orig, size), env.theme.normal);
            if self.gutter > 0 {
                for kid in self.kids.iter().take(self.kids.len().saturating_sub(1)) {
                    let r = kid.slot.avail;
                    match self.axis {
                        Axis::Horizontal => painter.vline(
                            Pos::new(orig.x + kid.slot.pos().x + r.w, orig.y),
                            size.h,
                            '│',
                            env.theme.gutter,
                        ),
                        Axis::Vertical => painter.hline(
                            Pos::new(orig.x, orig.y + kid.slot.pos().y + r.h),
                            size.w,
                            '─',
                            env.theme.gutter,
                        ),
                    }
                }
            }
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
        print_ui("Split", self.id, slot, indent);
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
            Update::Kids(KidsUpdate { keep, append, split }) => {
                if let Some(split) = split {
                    self.split = split;
                }
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
#[path = "../../../tests/unit/ui/widgets/split.rs"]
mod tests;
