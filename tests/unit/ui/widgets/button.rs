use super::*;
use crate::ui::core::kid::Kid;

fn laid_out(button: Button) -> (Kid, Env) {
    let mut env = Env::default();
    let mut kid = Kid::new(button);
    kid.layout(&mut env, Size::new(20, 1), false);
    (kid, env)
}

#[test]
fn button_width_includes_brackets() {
    let (kid, _env) = laid_out(Button::new("ok"));
    assert_eq!(kid.slot.size(), Size::new(6, 1));
}

#[test]
fn press_and_release_inside_clicks() {
    let button = Button::new("ok");
    let id = button.id();
    let (mut kid, mut env) = laid_out(button);

    let press = Mouse::press(Pos::new(1, 0), Buttons::LEFT);
    assert!(kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    assert!(env.take_notices().is_empty());

    let release = Mouse::release(Pos::new(2, 0), Buttons::LEFT);
    let r = kid.mouse(&mut env, &release, &release, Pos::ZERO);
    assert!(r.consumed);
    let notices = env.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].source, id);
    assert_eq!(
        notices[0].kind,
        NoticeKind::Clicked {
            buttons: Buttons::LEFT
        }
    );
}

#[test]
fn release_outside_cancels_the_click() {
    let (mut kid, mut env) = laid_out(Button::new("ok"));
    let press = Mouse::press(Pos::new(1, 0), Buttons::LEFT);
    kid.mouse(&mut env, &press, &press, Pos::ZERO);
    let release = Mouse::release(Pos::new(15, 0), Buttons::LEFT);
    let r = kid.mouse(&mut env, &release, &release, Pos::ZERO);
    assert!(!r.consumed);
    assert!(env.take_notices().is_empty());
}

#[test]
fn hover_changes_request_a_redraw_but_never_consume() {
    let (mut kid, mut env) = laid_out(Button::new("ok"));
    let m = Mouse::at(Pos::new(1, 0));
    let r = kid.mouse(&mut env, &m, &m, Pos::ZERO);
    assert!(r.needs_draw);
    assert!(!r.consumed);

    let r = kid.mouse(&mut env, &m, &m, Pos::ZERO);
    assert!(!r.needs_draw);
}

#[test]
fn enter_clicks() {
    let (mut kid, mut env) = laid_out(Button::new("ok"));
    let r = kid.key(
        &mut env,
        Key::simple(KeyCode::Enter),
        &Mouse::at(Pos::ZERO),
        Pos::ZERO,
    );
    assert!(r.consumed);
    assert_eq!(env.take_notices().len(), 1);
}
