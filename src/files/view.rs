//! Widget construction for the browser, and the column container that ties a filter field to
//! its list.

use crate::core::event::{Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::{Kid, Slot};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use crate::ui::core::widget::{
    accept_logged, kids_apply, kids_first_focus, kids_focus, kids_key, kids_mark, kids_mouse,
    print_ui, Env, EventResult, Update, Widget,
};
use crate::ui::widgets::{equal_split, Button, Field, Label, List, ListValue, Scroll, Split};

use super::favorites::Favorite;

/// Width of the favorites list on the left.
pub const FAVORITES_WIDTH: i32 = 24;
/// Width of the favorite toggle button, `[ + ]`.
const TOGGLE_WIDTH: i32 = 5;

/// Keys a column list reports to the browser instead of handling itself.
pub const COLUMN_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Right, KeyCode::Enter];

/// Identities of one column's widgets, allocated with the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnIds {
    pub column: Id,
    pub field: Id,
    pub list: Id,
}

impl ColumnIds {
    pub fn new() -> Self {
        Self {
            column: Id::next(),
            field: Id::next(),
            list: Id::next(),
        }
    }
}

impl Default for ColumnIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Identities of the fixed part of the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserIds {
    pub root: Id,
    pub toggle: Id,
    pub path: Id,
    pub favorites: Id,
    pub columns: Id,
}

impl BrowserIds {
    pub fn new() -> Self {
        Self {
            root: Id::next(),
            toggle: Id::next(),
            path: Id::next(),
            favorites: Id::next(),
            columns: Id::next(),
        }
    }
}

impl Default for BrowserIds {
    fn default() -> Self {
        Self::new()
    }
}

pub fn list_values(names: &[String], selected: &str) -> Vec<ListValue> {
    names
        .iter()
        .map(|name| {
            ListValue::plain(name.as_str()).selected(!selected.is_empty() && name == selected)
        })
        .collect()
}

pub fn favorite_values(favorites: &[Favorite]) -> Vec<ListValue> {
    favorites
        .iter()
        .map(|f| ListValue::new(f.name.as_str(), f.path.as_str()).selected(f.active))
        .collect()
}

/// A filter field above a scrolling list of entry names.
pub fn column(ids: ColumnIds, visible: &[String], selected: &str) -> Box<dyn Widget> {
    let field = Field::new("").with_id(ids.field).with_placeholder("filter");
    let list = List::new(list_values(visible, selected))
        .with_id(ids.list)
        .intercepting(COLUMN_KEYS);
    Box::new(ColumnUi::new(ids.column, Box::new(field), Box::new(Scroll::new(list))))
}

/// Stand-in for a column whose directory could not be listed.
pub fn failed_column(ids: ColumnIds, message: &str, style: Style) -> Box<dyn Widget> {
    Box::new(Label::new(message).with_id(ids.column).with_style(style))
}

/// Toggle and path on the top line; favorites and columns below.
pub fn browser(
    ids: &BrowserIds,
    toggle: &str,
    path: &str,
    favorites: &[Favorite],
    columns: Vec<Box<dyn Widget>>,
) -> Box<dyn Widget> {
    let header = Split::horizontal(
        Box::new(|w| {
            let t = TOGGLE_WIDTH.min(w);
            vec![t, w - t]
        }),
        vec![
            Box::new(Button::new(toggle).with_id(ids.toggle)),
            Box::new(Label::new(path).with_id(ids.path)),
        ],
    );
    let n = columns.len();
    let columns = Split::horizontal(equal_split(n), columns).with_id(ids.columns);
    let body = Split::horizontal(
        Box::new(|w| {
            let f = FAVORITES_WIDTH.min(w);
            vec![f, w - f]
        }),
        vec![
            Box::new(List::new(favorite_values(favorites)).with_id(ids.favorites)),
            Box::new(columns),
        ],
    );
    Box::new(
        Split::vertical(
            Box::new(|h| {
                let top = h.min(1);
                vec![top, h - top]
            }),
            vec![Box::new(header), Box::new(body)],
        )
        .with_id(ids.root),
    )
}

/// Field on the first row, list below it.
///
/// Navigation keys the field leaves alone (arrows at either end of its text, Up, Down, Enter)
/// are handed on to the list, so a column can be driven from the keyboard while the pointer
/// rests on its field.
pub struct ColumnUi {
    id: Id,
    kids: Vec<Kid>,
}

impl ColumnUi {
    const FIELD: usize = 0;
    const LIST: usize = 1;

    pub fn new(id: Id, field: Box<dyn Widget>, list: Box<dyn Widget>) -> Self {
        Self {
            id,
            kids: vec![Kid::boxed(field), Kid::boxed(list)],
        }
    }

    fn is_navigation(key: &Key) -> bool {
        matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Enter
        )
    }
}

impl Widget for ColumnUi {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Column", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        let force = force || slot.avail != avail;
        let field_h = avail.h.min(1);
        let rooms = [
            (Pos::ZERO, Size::new(avail.w, field_h)),
            (Pos::new(0, field_h), Size::new(avail.w, avail.h - field_h)),
        ];
        for (kid, (pos, room)) in self.kids.iter_mut().zip(rooms) {
            let kid_force = force || kid.slot.avail != room;
            kid.slot.set_pos(pos);
            kid.layout(env, room, kid_force);
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
        env.trace_draw("Column", slot, orig, force);
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
        let mut r = kids_key(env, &mut self.kids, key, m, orig);
        let on_list = self.kids[Self::LIST].contains(m.pos);
        if r.consumed || on_list || !Self::is_navigation(&key) {
            return r;
        }
        let at = Mouse {
            pos: self.kids[Self::LIST].slot.pos(),
            kind: MouseKind::Move,
            ..*m
        };
        r.merge(self.kids[Self::LIST].key(env, key, &at, orig));
        r
    }

    fn first_focus(&mut self, env: &mut Env, _slot: &mut Slot) -> Option<Pos> {
        self.kids[Self::FIELD]
            .first_focus(env)
            .or_else(|| kids_first_focus(env, &mut self.kids))
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
        print_ui("Column", self.id, slot, indent);
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
}

#[cfg(test)]
#[path = "../../tests/unit/files/view.rs"]
mod tests;
