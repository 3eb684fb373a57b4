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

/// Flow layout: kids left to right, wrapping to a new line when the next kid does not fit.
///
/// `padding` surrounds the content, `margin` separates neighbouring kids horizontally and lines
/// vertically. A kid is offered the full content width and the height below its line; one
/// that wraps is laid out again with the height left below the new line.
pub struct BoxUi {
    id: Id,
    padding: Insets,
    margin: Size,
    kids: Vec<Kid>,
    /// Room each kid was offered on its first try, before any wrap.
    offered: Vec<Size>,
}

impl BoxUi {
    pub fn new(kids: Vec<Box<dyn Widget>>) -> Self {
        Self {
            id: Id::next(),
            padding: Insets::default(),
            margin: Size::ZERO,
            kids: crate::ui::core::kid::kids(kids),
            offered: Vec::new(),
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

    pub fn with_margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    pub fn kids(&self) -> &[Kid] {
        &self.kids
    }
}

impl Widget for BoxUi {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Box", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        let content = avail.inset(self.padding);
        let (mut x, mut y, mut line_h, mut max_w) = (0, 0, 0, 0);
        self.offered.resize(self.kids.len(), Size::ZERO);
        for (kid, offered) in self.kids.iter_mut().zip(self.offered.iter_mut()) {
            let room = Size::new(content.w, (content.h - y).max(0));
            let settled = kid.slot.avail;
            kid.layout(env, room, force || *offered != room);
            *offered = room;

            if x > 0 && x + kid.slot.size().w > content.w {
                y += line_h + self.margin.h;
                x = 0;
                line_h = 0;
                let room = Size::new(content.w, (content.h - y).max(0));
                kid.layout(env, room, force || settled != room);
            }
            kid.slot.set_pos(self.padding.top_left() + Pos::new(x, y));

            let size = kid.slot.size();
            max_w = max_w.max(x + size.w);
            line_h = line_h.max(size.h);
            x += size.w + self.margin.w;
        }
        slot.set_size(Size::new(max_w, y + line_h).outset(self.padding).clamp_to(avail));
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
        env.trace_draw("Box", slot, orig, force);
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
        print_ui("Box", self.id, slot, indent);
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
                self.offered.truncate(keep);
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/boxed.rs"]
mod tests;
