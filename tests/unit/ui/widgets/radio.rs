use super::*;
use crate::ui::core::kid::Kid;

fn chosen(env: &mut Env) -> Vec<(Id, Id)> {
    env.take_notices()
        .into_iter()
        .map(|n| match n.kind {
            NoticeKind::Chosen { group } => (n.source, group),
            other => panic!("unexpected notice {other:?}"),
        })
        .collect()
}

#[test]
fn press_selects_once() {
    let mut env = Env::default();
    let mut group = RadioGroup::new();
    let radio = group.radio(false);
    let id = radio.id();
    let mut kid = Kid::new(radio);
    kid.layout(&mut env, Size::new(10, 1), false);

    let press = Mouse::press(Pos::new(1, 0), Buttons::LEFT);
    assert!(kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    assert!(kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    assert_eq!(chosen(&mut env), vec![(id, group.id())]);
}

#[test]
fn space_selects_and_right_press_does_not() {
    let mut env = Env::default();
    let mut kid = Kid::new(Radio::new(Id::next(), false));
    kid.layout(&mut env, Size::new(10, 1), false);

    let press = Mouse::press(Pos::new(1, 0), Buttons::RIGHT);
    assert!(!kid.mouse(&mut env, &press, &press, Pos::ZERO).consumed);
    assert!(env.take_notices().is_empty());

    kid.key(
        &mut env,
        Key::simple(KeyCode::Char(' ')),
        &Mouse::at(Pos::new(1, 0)),
        Pos::ZERO,
    );
    assert_eq!(chosen(&mut env).len(), 1);
}

#[test]
fn group_clears_the_other_members() {
    let mut group = RadioGroup::new();
    let first = group.radio(true);
    let second = group.radio(false);
    let third = group.radio(false);
    let (first, second, third) = (first.id(), second.id(), third.id());
    assert_eq!(group.members(), &[first, second, third]);

    let cmds = group.handle(&Notice {
        source: second,
        kind: NoticeKind::Chosen { group: group.id() },
    });
    let cleared: Vec<Id> = cmds
        .iter()
        .map(|c| match c {
            Command::Update {
                target,
                update: Update::Checked(false),
            } => *target,
            other => panic!("unexpected command {other:?}"),
        })
        .collect();
    assert_eq!(cleared, vec![first, third]);
}

#[test]
fn group_ignores_other_groups() {
    let mut group = RadioGroup::new();
    let radio = group.radio(false);
    let cmds = group.handle(&Notice {
        source: radio.id(),
        kind: NoticeKind::Chosen { group: Id::next() },
    });
    assert!(cmds.is_empty());
}

#[test]
fn checked_update_clears_selection() {
    let radio = Radio::new(Id::next(), true);
    let id = radio.id();
    let mut kid = Kid::new(radio);
    let mut update = Some(Update::Checked(false));
    assert!(kid.apply(id, &mut update));
    assert!(update.is_none());
}
