use super::*;
use crate::core::event::{Buttons, KeyCode};
use crate::test_support::Probe;
use crate::ui::core::layout::Insets;
use crate::ui::core::widget::NoticeKind;
use crate::ui::widgets::{equal_split, BoxUi, Button, Field, Label, Split};

fn driver(root: impl Widget + 'static, w: i32, h: i32) -> Driver {
    let mut d = Driver::new(Box::new(root), Env::default(), Size::new(w, h));
    d.render();
    d
}

#[test]
fn render_paints_the_tree() {
    let d = driver(Label::new("hello"), 10, 2);
    assert_eq!(d.surface().row_text(0), "hello     ");
    assert!(!d.pending());
}

#[test]
fn click_notices_reach_the_application() {
    let button = Button::new("go");
    let id = button.id();
    let mut d = driver(BoxUi::new(vec![Box::new(button)]), 20, 2);

    d.mouse(Mouse::press(Pos::new(1, 0), Buttons::LEFT));
    d.mouse(Mouse::release(Pos::new(1, 0), Buttons::LEFT));
    let notices = d.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].source, id);
    assert!(matches!(notices[0].kind, NoticeKind::Clicked { .. }));
}

#[test]
fn update_command_relays_and_repaints() {
    let label = Label::new("one");
    let id = label.id();
    let mut d = driver(BoxUi::new(vec![Box::new(label)]), 10, 1);
    d.apply([Command::Update {
        target: id,
        update: Update::Text("three".to_string()),
    }]);
    assert!(d.pending());
    assert!(d.frame());
    assert_eq!(d.surface().row_text(0), "three     ");
    assert!(!d.frame());
}

#[test]
fn draw_only_passes_repaint_just_the_dirty_kid() {
    let (a, log_a) = Probe::new(Size::new(2, 1));
    let (b, log_b) = Probe::new(Size::new(2, 1));
    let mut d = driver(
        Split::horizontal(equal_split(2), vec![Box::new(a.consuming()), Box::new(b)]),
        10,
        1,
    );

    d.mouse(Mouse::press(Pos::new(0, 0), Buttons::LEFT));
    assert!(d.frame());
    assert_eq!(log_a.borrow().draws, vec![true, false]);
    assert_eq!(log_b.borrow().draws, vec![true]);
}

#[test]
fn focus_warps_the_pointer_and_routes_keys() {
    let field = Field::new("");
    let field_id = field.id();
    let root = BoxUi::new(vec![Box::new(Label::new("name:")), Box::new(field)])
        .with_padding(Insets::all(1));
    let mut d = driver(root, 20, 5);

    assert!(d.focus(field_id));
    assert_eq!(d.pointer(), Pos::new(1, 2));

    d.key(Key::simple(KeyCode::Char('x')));
    let notices = d.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].source, field_id);
    assert_eq!(
        notices[0].kind,
        NoticeKind::Edited {
            text: "x".to_string()
        }
    );
}

#[test]
fn focus_on_an_unknown_target_leaves_the_pointer() {
    let mut d = driver(Label::new("x"), 5, 1);
    assert!(!d.focus(Id::raw(u64::MAX)));
    assert_eq!(d.pointer(), Pos::ZERO);
}

#[test]
fn resize_triggers_a_layout() {
    let (p, log) = Probe::new(Size::new(50, 1));
    let mut d = driver(p, 10, 1);
    d.handle(&InputEvent::Resize(30, 2));
    assert!(d.frame());
    let log = log.borrow();
    assert_eq!(log.avails.last(), Some(&Size::new(30, 2)));
    assert_eq!(log.draws.last(), Some(&true));
}
