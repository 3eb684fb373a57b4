use super::*;
use crate::ui::core::widget::{Notice, NoticeKind};
use crate::ui::driver::Driver;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn column_driver(ids: ColumnIds) -> Driver {
    let ui = column(ids, &names(&["a/", "b.txt", "c"]), "");
    let mut d = Driver::new(ui, Env::default(), Size::new(20, 6));
    d.render();
    assert!(d.focus(ids.column));
    d
}

fn kinds(notices: Vec<Notice>, source: Id) -> Vec<NoticeKind> {
    notices
        .into_iter()
        .filter(|n| n.source == source)
        .map(|n| n.kind)
        .collect()
}

#[test]
fn list_values_mark_only_the_named_entry() {
    let values = list_values(&names(&["a/", "b"]), "b");
    assert!(!values[0].selected);
    assert!(values[1].selected);
    assert!(list_values(&names(&["", "b"]), "").iter().all(|v| !v.selected));
}

#[test]
fn column_focus_lands_on_the_field() {
    let ids = ColumnIds::new();
    let d = column_driver(ids);
    assert_eq!(d.pointer(), Pos::new(0, 0));
}

#[test]
fn navigation_keys_pass_from_field_to_list() {
    let ids = ColumnIds::new();
    let mut d = column_driver(ids);

    assert!(d.key(Key::simple(KeyCode::Down)).consumed);
    assert_eq!(
        kinds(d.take_notices(), ids.list),
        vec![NoticeKind::Selected {
            index: 0,
            selected: true
        }]
    );

    assert!(d.key(Key::simple(KeyCode::Right)).consumed);
    assert_eq!(
        kinds(d.take_notices(), ids.list),
        vec![NoticeKind::ListKey {
            key: Key::simple(KeyCode::Right),
            selection: vec![0],
        }]
    );
}

#[test]
fn field_keeps_keys_it_can_use() {
    let ids = ColumnIds::new();
    let mut d = column_driver(ids);

    d.key(Key::simple(KeyCode::Char('a')));
    assert_eq!(
        kinds(d.take_notices(), ids.field),
        vec![NoticeKind::Edited {
            text: "a".to_string()
        }]
    );

    // Caret moves off the end first; only the second Left reaches the list.
    d.key(Key::simple(KeyCode::Left));
    assert!(d.take_notices().is_empty());
    d.key(Key::simple(KeyCode::Left));
    assert!(matches!(
        &kinds(d.take_notices(), ids.list)[..],
        [NoticeKind::ListKey { .. }]
    ));
}

#[test]
fn keys_over_the_list_go_straight_to_it() {
    let ids = ColumnIds::new();
    let mut d = column_driver(ids);
    d.mouse(Mouse::at(Pos::new(2, 2)));

    d.key(Key::simple(KeyCode::Enter));
    assert!(matches!(
        &kinds(d.take_notices(), ids.list)[..],
        [NoticeKind::ListKey { key, .. }] if key.code == KeyCode::Enter
    ));
}

#[test]
fn browser_layout_puts_header_above_favorites_and_columns() {
    let ids = BrowserIds::new();
    let col = ColumnIds::new();
    let favorites = crate::files::favorites::built_in("/home/ann/");
    let ui = browser(
        &ids,
        "-",
        "/home/ann/",
        &favorites,
        vec![column(col, &names(&["x"]), "")],
    );
    let mut d = Driver::new(ui, Env::default(), Size::new(60, 10));
    d.render();

    let top = d.surface().row_text(0);
    assert!(top.starts_with("[ - ]"), "{:?}", top);
    assert!(top.contains("/home/ann/"));
    assert!(d.surface().row_text(2).starts_with("home"));

    assert!(d.focus(col.field));
    assert_eq!(d.pointer(), Pos::new(FAVORITES_WIDTH + 1, 2));
}
