use super::*;
use crate::core::event::{Buttons, KeyCode};
use crate::test_support::{probe, Probe};

#[test]
fn merge_ors_flags_and_keeps_first_warp() {
    let mut r = EventResult::ignored().with_warp(Pos::new(1, 1));
    r.merge(EventResult::consumed().with_draw().with_warp(Pos::new(9, 9)));
    assert!(r.consumed);
    assert!(r.needs_draw);
    assert!(!r.needs_layout);
    assert_eq!(r.warp, Some(Pos::new(1, 1)));

    let mut r = EventResult::ignored();
    r.merge(EventResult::ignored().with_layout().with_warp(Pos::new(2, 3)));
    assert!(r.needs_layout);
    assert_eq!(r.warp, Some(Pos::new(2, 3)));
}

#[test]
fn notices_drain_in_order() {
    let mut env = Env::default();
    env.notify(Id::raw(1), NoticeKind::Toggled { checked: true });
    env.notify(
        Id::raw(2),
        NoticeKind::Clicked {
            buttons: Buttons::LEFT,
        },
    );
    let notices = env.take_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].source, Id::raw(1));
    assert_eq!(notices[1].source, Id::raw(2));
    assert!(env.take_notices().is_empty());
}

#[test]
fn kids_update_keeps_prefix_and_appends() {
    let mut kids = crate::ui::core::kid::kids(vec![probe(1, 1).0, probe(1, 1).0, probe(1, 1).0]);
    let first = kids[0].id();
    let update = KidsUpdate {
        keep: 1,
        append: vec![probe(1, 1).0],
        split: None,
    };
    assert!(update.apply_to(&mut kids));
    assert_eq!(kids.len(), 2);
    assert_eq!(kids[0].id(), first);

    let noop = KidsUpdate {
        keep: 5,
        append: Vec::new(),
        split: None,
    };
    assert!(!noop.apply_to(&mut kids));
}

#[test]
fn consumed_press_stops_at_first_kid() {
    let mut env = Env::default();
    let (a, log_a) = Probe::new(Size::new(5, 1));
    let (b, log_b) = Probe::new(Size::new(5, 1));
    let mut kids = crate::ui::core::kid::kids(vec![Box::new(a.consuming()), Box::new(b.consuming())]);
    for kid in kids.iter_mut() {
        kid.layout(&mut env, Size::new(5, 1), false);
    }

    let m = Mouse::press(Pos::new(2, 0), Buttons::LEFT);
    let r = kids_mouse(&mut env, &mut kids, &m, &m, Pos::ZERO);
    assert!(r.consumed);
    assert_eq!(log_a.borrow().mice.len(), 1);
    assert!(log_b.borrow().mice.is_empty());
}

#[test]
fn moves_reach_every_kid() {
    let mut env = Env::default();
    let (a, log_a) = probe(2, 1);
    let (b, log_b) = probe(2, 1);
    let mut kids = crate::ui::core::kid::kids(vec![a, b]);
    for kid in kids.iter_mut() {
        kid.layout(&mut env, Size::new(2, 1), false);
    }
    kids[1].slot.set_pos(Pos::new(2, 0));

    let m = Mouse::at(Pos::new(0, 0));
    kids_mouse(&mut env, &mut kids, &m, &m, Pos::ZERO);
    assert_eq!(log_a.borrow().mice, vec![Pos::new(0, 0)]);
    assert_eq!(log_b.borrow().mice, vec![Pos::new(-2, 0)]);
}

#[test]
fn keys_go_to_the_kid_under_the_pointer() {
    let mut env = Env::default();
    let (a, log_a) = probe(2, 1);
    let (b, log_b) = probe(2, 1);
    let mut kids = crate::ui::core::kid::kids(vec![a, b]);
    for kid in kids.iter_mut() {
        kid.layout(&mut env, Size::new(2, 1), false);
    }
    kids[1].slot.set_pos(Pos::new(2, 0));

    let key = Key::simple(KeyCode::Char('x'));
    kids_key(&mut env, &mut kids, key, &Mouse::at(Pos::new(3, 0)), Pos::ZERO);
    assert!(log_a.borrow().keys.is_empty());
    assert_eq!(log_b.borrow().keys, vec![key]);
}

#[test]
fn apply_routes_to_target_and_takes_the_update() {
    let (p, log) = Probe::new(Size::new(1, 1));
    let id = p.id();
    let mut kids = crate::ui::core::kid::kids(vec![probe(1, 1).0, Box::new(p)]);

    let mut update = Some(Update::Text("hello".to_string()));
    assert!(kids_apply(&mut kids, id, &mut update));
    assert!(update.is_none());
    assert_eq!(log.borrow().texts, vec!["hello".to_string()]);

    let mut unsupported = Some(Update::Checked(true));
    assert!(kids_apply(&mut kids, id, &mut unsupported));
    assert!(unsupported.is_none());

    let mut missing = Some(Update::Text("x".to_string()));
    assert!(!kids_apply(&mut kids, Id::raw(u64::MAX), &mut missing));
    assert!(missing.is_some());
}
