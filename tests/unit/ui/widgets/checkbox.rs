use super::*;
use crate::ui::core::kid::Kid;

#[test]
fn click_and_space_toggle() {
    let mut env = Env::default();
    let mut kid = Kid::new(Checkbox::new(false));
    kid.layout(&mut env, Size::new(10, 1), false);

    let press = Mouse::press(Pos::new(1, 0), Buttons::LEFT);
    assert!(kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    kid.key(
        &mut env,
        Key::simple(KeyCode::Char(' ')),
        &Mouse::at(Pos::new(1, 0)),
        Pos::ZERO,
    );

    let states: Vec<bool> = env
        .take_notices()
        .into_iter()
        .map(|n| match n.kind {
            NoticeKind::Toggled { checked } => checked,
            other => panic!("unexpected notice {other:?}"),
        })
        .collect();
    assert_eq!(states, vec![true, false]);
}

#[test]
fn right_press_does_not_toggle() {
    let mut env = Env::default();
    let mut kid = Kid::new(Checkbox::new(true));
    kid.layout(&mut env, Size::new(10, 1), false);
    let press = Mouse::press(Pos::new(1, 0), Buttons::RIGHT);
    assert!(!kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    assert!(env.take_notices().is_empty());
}

#[test]
fn checked_update_sets_state() {
    let checkbox = Checkbox::new(false);
    let id = checkbox.id();
    let mut kid = Kid::new(checkbox);
    let mut update = Some(Update::Checked(true));
    assert!(kid.apply(id, &mut update));
    assert!(update.is_none());
}
