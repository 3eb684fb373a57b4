//! The top-level driver: owns the root slot, the logical pointer and the cell surface, and turns
//! input events and application commands into layout and draw passes.

use crate::core::event::{InputEvent, Key, Mouse, MouseKind};
use crate::ui::backend::surface::Surface;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Kid;
use crate::ui::core::painter::Painter;
use crate::ui::core::widget::{Env, EventResult, Notice, Update, Widget};

/// Something the application asks the driver to do between dispatch passes.
pub enum Command {
    /// Apply `update` to `target`, then mark it for layout.
    Update { target: Id, update: Update },
    /// Move the pointer so that `target` holds focus.
    Focus(Id),
    /// Forced layout and draw of the whole tree.
    Render,
    /// Dump the tree to the log.
    Print,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Update { target, update } => f
                .debug_struct("Update")
                .field("target", target)
                .field("update", &update.name())
                .finish(),
            Command::Focus(id) => f.debug_tuple("Focus").field(id).finish(),
            Command::Render => f.write_str("Render"),
            Command::Print => f.write_str("Print"),
        }
    }
}

pub struct Driver {
    root: Kid,
    env: Env,
    surface: Surface,
    painter: Painter,
    /// Last known pointer state, absolute. Keys are routed by its position.
    pointer: Mouse,
    need_layout: bool,
    need_draw: bool,
    /// A layout pass ran since the last draw, so the next draw must repaint everything.
    full_draw: bool,
}

impl Driver {
    pub fn new(root: Box<dyn Widget>, env: Env, size: Size) -> Self {
        Self {
            root: Kid::boxed(root),
            env,
            surface: Surface::new(size),
            painter: Painter::new(),
            pointer: Mouse::at(Pos::ZERO),
            need_layout: true,
            need_draw: true,
            full_draw: true,
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn pointer(&self) -> Pos {
        self.pointer.pos
    }

    pub fn root_id(&self) -> Id {
        self.root.id()
    }

    /// Whether a layout or draw pass is pending.
    pub fn pending(&self) -> bool {
        self.need_layout || self.need_draw
    }

    /// Route one input event. Returns whether it was consumed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.key(*key).consumed,
            InputEvent::Mouse(m) => self.mouse(*m).consumed,
            InputEvent::Resize(w, h) => {
                self.resize(Size::new(*w as i32, *h as i32));
                false
            }
        }
    }

    pub fn mouse(&mut self, m: Mouse) -> EventResult {
        self.pointer = m;
        if m.kind == MouseKind::Move {
            self.need_draw = true;
        }
        let r = self.root.mouse(&mut self.env, &m, &m, Pos::ZERO);
        self.absorb(r);
        r
    }

    pub fn key(&mut self, key: Key) -> EventResult {
        let m = Mouse {
            kind: MouseKind::Move,
            ..self.pointer
        };
        let r = self.root.key(&mut self.env, key, &m, Pos::ZERO);
        self.absorb(r);
        r
    }

    pub fn resize(&mut self, size: Size) {
        tracing::debug!(?size, "resize");
        self.surface.resize(size);
        self.root.slot.mark_layout();
        self.need_layout = true;
        self.full_draw = true;
    }

    /// Forced layout and draw of the whole tree.
    pub fn render(&mut self) {
        self.root.layout(&mut self.env, self.surface.size(), true);
        self.need_layout = false;
        self.draw_pass(true);
    }

    /// Run whatever passes are pending. Layout is never forced; a draw following a layout is.
    /// Returns whether the surface changed.
    pub fn frame(&mut self) -> bool {
        if self.need_layout {
            self.layout_pass();
        }
        if !self.need_draw && !self.full_draw {
            return false;
        }
        let force = self.full_draw;
        self.draw_pass(force);
        true
    }

    /// Put `target` under the pointer. Any pending layout runs first so the warp lands on the
    /// geometry the user will see.
    pub fn focus(&mut self, target: Id) -> bool {
        if self.need_layout || !self.root.slot.layout_clean() {
            self.layout_pass();
        }
        match self.root.focus(&mut self.env, target) {
            Some(p) => {
                tracing::debug!(target = %target, pos = ?p, "focus");
                self.warp(p);
                true
            }
            None => {
                tracing::warn!(target = %target, "focus target not found");
                false
            }
        }
    }

    pub fn apply(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            tracing::trace!(?command, "apply");
            match command {
                Command::Update { target, update } => {
                    let mut update = Some(update);
                    if self.root.apply(target, &mut update) {
                        self.root.mark(target, true);
                        self.need_layout = true;
                    } else {
                        tracing::warn!(target = %target, "update target not found");
                    }
                }
                Command::Focus(target) => {
                    self.focus(target);
                }
                Command::Render => self.render(),
                Command::Print => self.print(),
            }
        }
    }

    pub fn print(&self) {
        self.root.print(0);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.env.take_notices()
    }

    fn absorb(&mut self, r: EventResult) {
        self.need_layout |= r.needs_layout;
        self.need_draw |= r.needs_draw;
        if let Some(p) = r.warp {
            self.warp(p);
        }
    }

    /// Move the pointer and tell the tree about it, so hover state follows focus.
    fn warp(&mut self, p: Pos) {
        let m = Mouse {
            pos: p,
            kind: MouseKind::Move,
            ..self.pointer
        };
        self.pointer = m;
        let r = self.root.mouse(&mut self.env, &m, &m, Pos::ZERO);
        self.need_layout |= r.needs_layout;
        self.need_draw = true;
    }

    fn layout_pass(&mut self) {
        self.root.layout(&mut self.env, self.surface.size(), false);
        self.need_layout = false;
        self.full_draw = true;
    }

    fn draw_pass(&mut self, force: bool) {
        self.painter.clear();
        let orig = self.root.slot.pos();
        let pointer = self.pointer;
        self.root.draw(&mut self.env, &mut self.painter, orig, &pointer, force);
        self.surface.draw(self.painter.cmds());
        self.surface.set_cursor(Some(self.pointer.pos));
        self.need_draw = false;
        self.full_draw = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/driver.rs"]
mod tests;
