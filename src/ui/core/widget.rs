//! The widget protocol: the operations every node in the tree implements, the result value
//! dispatch calls return, and the messages that flow between widgets and the application.

use super::geom::{Pos, Size};
use super::id::Id;
use super::kid::{Kid, Slot};
use super::painter::Painter;
use super::theme::Theme;
use crate::core::event::{Buttons, Key, Mouse};
use crate::ui::widgets::list::ListValue;
use crate::ui::widgets::split::SplitFn;

/// What a mouse or key dispatch did.
///
/// Results from several children merge additively: flags are OR-ed, and the first warp wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResult {
    /// Stop offering this event to siblings and ancestors.
    pub consumed: bool,
    pub needs_layout: bool,
    pub needs_draw: bool,
    /// Ask the driver to move the pointer here (absolute cell position).
    pub warp: Option<Pos>,
}

impl EventResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }

    pub fn with_layout(mut self) -> Self {
        self.needs_layout = true;
        self
    }

    pub fn with_draw(mut self) -> Self {
        self.needs_draw = true;
        self
    }

    pub fn with_warp(mut self, warp: Pos) -> Self {
        self.warp = Some(warp);
        self
    }

    pub fn merge(&mut self, other: EventResult) {
        self.consumed |= other.consumed;
        self.needs_layout |= other.needs_layout;
        self.needs_draw |= other.needs_draw;
        if self.warp.is_none() {
            self.warp = other.warp;
        }
    }
}

/// A widget telling the application that something happened to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub source: Id,
    pub kind: NoticeKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Clicked { buttons: Buttons },
    Edited { text: String },
    Toggled { checked: bool },
    /// A radio became the selected member of `group`.
    Chosen { group: Id },
    /// A list row changed selection state.
    Selected { index: usize, selected: bool },
    /// A list row was pressed with a non-primary button.
    RowClicked { index: usize, buttons: Buttons },
    /// An intercepted key reached a list, with the selection at that moment.
    ListKey { key: Key, selection: Vec<usize> },
}

/// A change the application wants applied to one widget between dispatch passes.
pub enum Update {
    Text(String),
    Values(Vec<ListValue>),
    Select(Vec<usize>),
    Checked(bool),
    Kids(KidsUpdate),
}

impl Update {
    pub fn name(&self) -> &'static str {
        match self {
            Update::Text(_) => "text",
            Update::Values(_) => "values",
            Update::Select(_) => "select",
            Update::Checked(_) => "checked",
            Update::Kids(_) => "kids",
        }
    }
}

/// A structural change to a container's children, applied atomically: keep the first `keep`
/// kids, append `append`, and (for splits) install `split`, which must produce one extent per
/// resulting kid.
pub struct KidsUpdate {
    pub keep: usize,
    pub append: Vec<Box<dyn Widget>>,
    pub split: Option<SplitFn>,
}

impl KidsUpdate {
    /// Apply to `kids`, returning whether anything changed.
    pub fn apply_to(self, kids: &mut Vec<Kid>) -> bool {
        let before = kids.len();
        kids.truncate(self.keep);
        let changed = kids.len() != before || !self.append.is_empty();
        kids.extend(self.append.into_iter().map(Kid::boxed));
        changed
    }
}

/// Per-tree context threaded through every protocol call.
#[derive(Debug, Default)]
pub struct Env {
    pub theme: Theme,
    pub debug_layout: bool,
    pub debug_draw: bool,
    notices: Vec<Notice>,
}

impl Env {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn notify(&mut self, source: Id, kind: NoticeKind) {
        self.notices.push(Notice { source, kind });
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn trace_layout(&self, name: &str, slot: &Slot, avail: Size, force: bool) {
        if self.debug_layout {
            tracing::trace!(
                widget = name,
                ?avail,
                force,
                layout = ?slot.layout,
                "layout"
            );
        }
    }

    pub fn trace_draw(&self, name: &str, slot: &Slot, orig: Pos, force: bool) {
        if self.debug_draw {
            tracing::trace!(
                widget = name,
                ?orig,
                force,
                draw = ?slot.draw,
                "draw"
            );
        }
    }
}

/// The node protocol.
///
/// `slot` is the caller-owned slot wrapping this widget: layout writes the size it settles on
/// into `slot.rect`, and the dirty markers live there. Positions passed as `m` are relative to
/// the widget's own top-left; `orig` is that top-left in absolute cells.
pub trait Widget {
    fn id(&self) -> Id;

    /// Compute this widget's size within `avail`. With a clean slot and `force` unset this must
    /// return without doing anything; with `force` set it recomputes and forces every child it
    /// visits.
    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool);

    /// Paint within `slot.rect.size()` at `orig`. Skipped when clean unless `force`.
    fn draw(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        painter: &mut Painter,
        orig: Pos,
        m: &Mouse,
        force: bool,
    );

    fn mouse(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        m: &Mouse,
        orig_m: &Mouse,
        orig: Pos,
    ) -> EventResult;

    fn key(&mut self, env: &mut Env, slot: &mut Slot, key: Key, m: &Mouse, orig: Pos)
        -> EventResult;

    /// Where the pointer should go to focus this subtree, relative to this widget.
    fn first_focus(&mut self, _env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        None
    }

    /// Focus descendant `target`, returning the pointer position (relative to this widget)
    /// that puts it under the pointer.
    fn focus(&mut self, env: &mut Env, slot: &mut Slot, target: Id) -> Option<Pos> {
        if target == self.id() {
            self.first_focus(env, slot)
        } else {
            None
        }
    }

    /// Mark the path down to `target` dirty. Returns whether `target` lives in this subtree.
    fn mark(&mut self, slot: &mut Slot, target: Id, for_layout: bool) -> bool {
        if target != self.id() {
            return false;
        }
        slot.mark(for_layout);
        true
    }

    fn print(&self, slot: &Slot, indent: usize);

    /// Route `update` to `target`. Returns whether `target` lives in this subtree; the update
    /// is taken out of the option by whoever accepts it.
    fn apply(&mut self, _slot: &mut Slot, target: Id, update: &mut Option<Update>) -> bool {
        if target != self.id() {
            return false;
        }
        accept_logged(self, update);
        true
    }

    /// Take an update addressed to this widget. Widgets that do not support it hand it back.
    fn accept(&mut self, update: Update) -> Result<(), Update> {
        Err(update)
    }
}

/// Hand `update` to `ui`, logging updates the variant does not support.
pub fn accept_logged<W: Widget + ?Sized>(ui: &mut W, update: &mut Option<Update>) {
    if let Some(update) = update.take() {
        let name = update.name();
        if ui.accept(update).is_err() {
            tracing::warn!(widget = %ui.id(), update = name, "update not supported");
        }
    }
}

/// Shared Print body: one line per node, indented by depth.
pub fn print_ui(name: &str, id: Id, slot: &Slot, indent: usize) {
    tracing::debug!(
        "{:indent$}{} {} rect={:?} layout={:?} draw={:?}",
        "",
        name,
        id,
        slot.rect,
        slot.layout,
        slot.draw,
        indent = indent * 2
    );
}

/// Container helper for Mark: check this node, then each kid, dirtying this slot when the
/// target is found below.
pub fn kids_mark(
    id: Id,
    slot: &mut Slot,
    kids: &mut [Kid],
    target: Id,
    for_layout: bool,
) -> bool {
    if target == id {
        slot.mark(for_layout);
        return true;
    }
    for kid in kids.iter_mut() {
        if kid.mark(target, for_layout) {
            slot.mark(for_layout);
            return true;
        }
    }
    false
}

/// Container helper for Mouse: offer the event to the kid under the pointer, stopping at the
/// first that consumes it. Moves and releases also reach every other kid so hover and press
/// state can settle.
pub fn kids_mouse(
    env: &mut Env,
    kids: &mut [Kid],
    m: &Mouse,
    orig_m: &Mouse,
    orig: Pos,
) -> EventResult {
    let broadcast = !matches!(
        m.kind,
        crate::core::event::MouseKind::Press(_) | crate::core::event::MouseKind::Scroll(_)
    );
    let mut out = EventResult::ignored();
    for kid in kids.iter_mut() {
        if !broadcast && !kid.contains(m.pos) {
            continue;
        }
        let r = kid.mouse(env, m, orig_m, orig);
        out.merge(r);
        if r.consumed {
            break;
        }
    }
    out
}

/// Container helper for Key: the kid under the pointer gets the key.
pub fn kids_key(env: &mut Env, kids: &mut [Kid], key: Key, m: &Mouse, orig: Pos) -> EventResult {
    for kid in kids.iter_mut() {
        if kid.contains(m.pos) {
            return kid.key(env, key, m, orig);
        }
    }
    EventResult::ignored()
}

pub fn kids_first_focus(env: &mut Env, kids: &mut [Kid]) -> Option<Pos> {
    kids.iter_mut().find_map(|kid| kid.first_focus(env))
}

pub fn kids_focus(env: &mut Env, kids: &mut [Kid], target: Id) -> Option<Pos> {
    kids.iter_mut().find_map(|kid| kid.focus(env, target))
}

pub fn kids_apply(kids: &mut [Kid], target: Id, update: &mut Option<Update>) -> bool {
    kids.iter_mut().any(|kid| kid.apply(target, update))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/widget.rs"]
mod tests;
