use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::{Kid, Slot};
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{accept_logged, print_ui, Env, EventResult, Update, Widget};

/// Height offered to the scrolled kid: effectively unbounded, small enough not to overflow when
/// offsets are added to it.
const UNBOUNDED: i32 = i32::MAX / 4;

/// A vertical viewport over one kid.
///
/// The kid gets the available width minus one scrollbar column and unbounded height; the
/// scroll itself takes all available space. Wheel, PageUp/PageDown and presses on the scrollbar
/// move the offset.
pub struct Scroll {
    id: Id,
    kid: Kid,
    offset: i32,
    /// The offset moved since the last draw, so the kid must be repainted in full.
    moved: bool,
}

impl Scroll {
    pub fn new(ui: impl Widget + 'static) -> Self {
        Self::boxed(Box::new(ui))
    }

    pub fn boxed(ui: Box<dyn Widget>) -> Self {
        Self {
            id: Id::next(),
            kid: Kid::boxed(ui),
            offset: 0,
            moved: false,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    fn max_offset(&self, view_h: i32) -> i32 {
        (self.kid.slot.size().h - view_h).max(0)
    }

    fn scroll_to(&mut self, offset: i32, view_h: i32) -> EventResult {
        let offset = offset.clamp(0, self.max_offset(view_h));
        if offset == self.offset {
            return EventResult::consumed();
        }
        self.offset = offset;
        self.moved = true;
        self.kid.slot.set_pos(Pos::new(0, -offset));
        EventResult::consumed().with_draw()
    }

    /// Scroll so that `p` (in this widget's frame) is visible, returning where it ends up.
    fn reveal(&mut self, p: Pos, view_h: i32) -> Pos {
        let content_y = p.y + self.offset;
        if p.y < 0 {
            self.scroll_to(content_y, view_h);
        } else if p.y >= view_h {
            self.scroll_to(content_y - view_h + 1, view_h);
        }
        Pos::new(p.x, content_y - self.offset)
    }
}

impl Widget for Scroll {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Scroll", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        let room = Size::new((avail.w - 1).max(0), UNBOUNDED);
        let kid_force = force || self.kid.slot.avail != room;
        self.kid.layout(env, room, kid_force);
        slot.set_size(avail);
        self.offset = self.offset.clamp(0, self.max_offset(avail.h));
        self.kid.slot.set_pos(Pos::new(0, -self.offset));
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
        env.trace_draw("Scroll", slot, orig, force);
        if slot.draw_clean() && !force && !self.moved {
            return;
        }
        let size = slot.size();
        if size.is_empty() {
            return;
        }
        let force = force || self.moved;
        self.moved = false;

        let view = Rect::from_parts(orig, Size::new(size.w - 1, size.h));
        if force {
            painter.fill_rect(view, env.theme.normal);
        }
        let at = orig + self.kid.slot.pos();
        let kid = &mut self.kid;
        painter.with_clip(view, |p| kid.draw(env, p, at, m, force));

        let bar = Pos::new(orig.x + size.w - 1, orig.y);
        painter.vline(bar, size.h, '│', env.theme.scrollbar);
        let content_h = self.kid.slot.size().h;
        if content_h > size.h {
            let thumb_h = (size.h * size.h / content_h).max(1);
            let thumb_y = self.offset * (size.h - thumb_h) / self.max_offset(size.h).max(1);
            painter.vline(
                Pos::new(bar.x, bar.y + thumb_y),
                thumb_h,
                '█',
                env.theme.scroll_thumb,
            );
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
        let size = slot.size();
        let inside = Rect::from_parts(Pos::ZERO, size).contains(m.pos);
        match m.kind {
            MouseKind::Scroll(delta) if inside => {
                return self.scroll_to(self.offset + delta * 3, size.h);
            }
            MouseKind::Press(b) if inside && m.pos.x == size.w - 1 => {
                // Left pages up, right pages down, middle jumps to the pointer.
                let target = match b {
                    Buttons::LEFT => self.offset - size.h,
                    Buttons::RIGHT => self.offset + size.h,
                    _ => m.pos.y * self.max_offset(size.h) / (size.h - 1).max(1),
                };
                return self.scroll_to(target, size.h);
            }
            _ => {}
        }
        self.kid.mouse(env, m, orig_m, orig)
    }

    fn key(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        key: Key,
        m: &Mouse,
        orig: Pos,
    ) -> EventResult {
        let h = slot.size().h;
        match key.code {
            KeyCode::PageUp => self.scroll_to(self.offset - h, h),
            KeyCode::PageDown => self.scroll_to(self.offset + h, h),
            _ => self.kid.key(env, key, m, orig),
        }
    }

    fn first_focus(&mut self, env: &mut Env, slot: &mut Slot) -> Option<Pos> {
        let p = self.kid.first_focus(env)?;
        Some(self.reveal(p, slot.size().h))
    }

    fn focus(&mut self, env: &mut Env, slot: &mut Slot, target: Id) -> Option<Pos> {
        if target == self.id {
            return self.first_focus(env, slot);
        }
        let p = self.kid.focus(env, target)?;
        Some(self.reveal(p, slot.size().h))
    }

    fn mark(&mut self, slot: &mut Slot, target: Id, for_layout: bool) -> bool {
        if target == self.id || self.kid.mark(target, for_layout) {
            slot.mark(for_layout);
            return true;
        }
        false
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Scroll", self.id, slot, indent);
        self.kid.print(indent + 1);
    }

    fn apply(&mut self, _slot: &mut Slot, target: Id, update: &mut Option<Update>) -> bool {
        if target == self.id {
            accept_logged(self, update);
            return true;
        }
        self.kid.apply(target, update)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/scroll.rs"]
mod tests;
