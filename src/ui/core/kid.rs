//! Child slots: one owned widget plus the geometry and dirty markers its parent caches for it.

use super::geom::{Pos, Rect, Size};
use super::id::Id;
use super::painter::Painter;
use super::widget::{Env, EventResult, Update, Widget};
use crate::core::event::{Key, Mouse};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Dirty,
    Clean,
}

/// Cached geometry and dirty markers for one child.
///
/// `rect` holds the position the parent assigned (relative to the parent's origin) and the size
/// the child's last layout settled on. It is only meaningful while `layout` is `Clean`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    pub rect: Rect,
    /// Available size handed to the last layout call.
    pub avail: Size,
    pub layout: State,
    pub draw: State,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn set_size(&mut self, size: Size) {
        self.rect.w = size.w;
        self.rect.h = size.h;
    }

    pub fn pos(&self) -> Pos {
        self.rect.pos()
    }

    pub fn set_pos(&mut self, pos: Pos) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    /// New geometry always means new pixels, so a layout mark implies a draw mark.
    pub fn mark_layout(&mut self) {
        self.layout = State::Dirty;
        self.draw = State::Dirty;
    }

    pub fn mark_draw(&mut self) {
        self.draw = State::Dirty;
    }

    pub fn mark(&mut self, for_layout: bool) {
        if for_layout {
            self.mark_layout();
        } else {
            self.mark_draw();
        }
    }

    pub fn reset_layout(&mut self) {
        self.layout = State::Clean;
    }

    pub fn reset_draw(&mut self) {
        self.draw = State::Clean;
    }

    pub fn layout_clean(&self) -> bool {
        self.layout == State::Clean
    }

    pub fn draw_clean(&self) -> bool {
        self.draw == State::Clean
    }

    /// Fold a dispatch result into the markers: the subtree that produced it must be revisited.
    pub fn absorb(&mut self, r: &EventResult) {
        if r.needs_layout {
            self.mark_layout();
        } else if r.needs_draw {
            self.mark_draw();
        }
    }
}

/// One child of a container: the widget it owns and the slot its parent caches for it.
pub struct Kid {
    pub ui: Box<dyn Widget>,
    pub slot: Slot,
}

impl Kid {
    pub fn new(ui: impl Widget + 'static) -> Self {
        Self::boxed(Box::new(ui))
    }

    pub fn boxed(ui: Box<dyn Widget>) -> Self {
        Self {
            ui,
            slot: Slot::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.ui.id()
    }

    /// Lay the child out; its layout marker is cleared once the call returns.
    pub fn layout(&mut self, env: &mut Env, avail: Size, force: bool) {
        self.ui.layout(env, &mut self.slot, avail, force);
        self.slot.avail = avail;
        self.slot.reset_layout();
    }

    /// Draw the child at `orig` (its absolute top-left). `m` is in the parent's frame.
    pub fn draw(&mut self, env: &mut Env, painter: &mut Painter, orig: Pos, m: &Mouse, force: bool) {
        let local = m.translated(self.slot.pos());
        self.ui.draw(env, &mut self.slot, painter, orig, &local, force);
        self.slot.reset_draw();
    }

    /// Deliver a pointer event. `m` is in the parent's frame, `parent_orig` is the parent's
    /// absolute origin.
    pub fn mouse(&mut self, env: &mut Env, m: &Mouse, orig_m: &Mouse, parent_orig: Pos) -> EventResult {
        let local = m.translated(self.slot.pos());
        let at = parent_orig + self.slot.pos();
        let r = self.ui.mouse(env, &mut self.slot, &local, orig_m, at);
        self.slot.absorb(&r);
        r
    }

    pub fn key(&mut self, env: &mut Env, key: Key, m: &Mouse, parent_orig: Pos) -> EventResult {
        let local = m.translated(self.slot.pos());
        let at = parent_orig + self.slot.pos();
        let r = self.ui.key(env, &mut self.slot, key, &local, at);
        self.slot.absorb(&r);
        r
    }

    /// Warp targets come back in the parent's frame.
    pub fn first_focus(&mut self, env: &mut Env) -> Option<Pos> {
        let p = self.ui.first_focus(env, &mut self.slot)?;
        Some(p + self.slot.pos())
    }

    pub fn focus(&mut self, env: &mut Env, target: Id) -> Option<Pos> {
        let p = self.ui.focus(env, &mut self.slot, target)?;
        Some(p + self.slot.pos())
    }

    pub fn mark(&mut self, target: Id, for_layout: bool) -> bool {
        self.ui.mark(&mut self.slot, target, for_layout)
    }

    pub fn apply(&mut self, target: Id, update: &mut Option<Update>) -> bool {
        self.ui.apply(&mut self.slot, target, update)
    }

    pub fn print(&self, indent: usize) {
        self.ui.print(&self.slot, indent);
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.slot.rect.contains(p)
    }
}

/// Wrap freshly built widgets into dirty slots.
pub fn kids(uis: Vec<Box<dyn Widget>>) -> Vec<Kid> {
    uis.into_iter().map(Kid::boxed).collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/kid.rs"]
mod tests;
