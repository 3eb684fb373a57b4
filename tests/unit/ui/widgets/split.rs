use super::*;
use crate::test_support::{probe, Probe};

#[test]
fn equal_split_covers_the_extent() {
    for (n, total) in [(1, 10), (3, 100), (4, 7), (2, 0)] {
        let extents = equal_split(n)(total);
        assert_eq!(extents.len(), n);
        assert_eq!(extents.iter().sum::<i32>(), total);
    }
    assert_eq!(equal_split(3)(100), vec![33, 33, 34]);
}

#[test]
fn kids_are_placed_along_the_axis_with_gutters() {
    let mut env = Env::default();
    let (a, _) = probe(2, 1);
    let (b, _) = probe(2, 1);
    let (c, log_c) = probe(2, 1);
    let mut kid = Kid::new(Split::horizontal(equal_split(3), vec![a, b, c]));
    kid.layout(&mut env, Size::new(20, 5), false);
    assert_eq!(kid.slot.size(), Size::new(20, 5));
    assert_eq!(log_c.borrow().avails, vec![Size::new(6, 5)]);

    let mut painter = Painter::new();
    kid.draw(&mut env, &mut painter, Pos::ZERO, &Mouse::at(Pos::ZERO), true);
    assert_eq!(log_c.borrow().draw_origins, vec![Pos::new(14, 0)]);
}

#[test]
fn vertical_split_slices_heights() {
    let mut env = Env::default();
    let (a, log_a) = probe(4, 4);
    let (b, log_b) = probe(4, 4);
    let split = Split::vertical(Box::new(|h| vec![2, h - 2]), vec![a, b]).with_gutter(0);
    let mut kid = Kid::new(split);
    kid.layout(&mut env, Size::new(8, 10), false);
    assert_eq!(log_a.borrow().avails, vec![Size::new(8, 2)]);
    assert_eq!(log_b.borrow().avails, vec![Size::new(8, 8)]);
}

#[test]
#[should_panic(expected = "split function returned 1 extents for 2 kids")]
fn mismatched_split_function_is_a_programming_error() {
    let mut env = Env::default();
    let split = Split::horizontal(Box::new(|w| vec![w]), vec![probe(1, 1).0, probe(1, 1).0]);
    let mut kid = Kid::new(split);
    kid.layout(&mut env, Size::new(10, 1), false);
}

#[test]
fn second_layout_without_marks_does_nothing() {
    let mut env = Env::default();
    let (a, log_a) = probe(1, 1);
    let (b, log_b) = probe(1, 1);
    let mut kid = Kid::new(Split::horizontal(equal_split(2), vec![a, b]));
    kid.layout(&mut env, Size::new(10, 2), false);
    let before = kid.slot;
    kid.layout(&mut env, Size::new(10, 2), false);
    assert_eq!(kid.slot, before);
    assert_eq!(log_a.borrow().layouts.len(), 1);
    assert_eq!(log_b.borrow().layouts.len(), 1);
}

#[test]
fn marking_one_kid_relays_only_that_kid() {
    let mut env = Env::default();
    let (a, log_a) = probe(1, 1);
    let (pb, log_b) = Probe::new(Size::new(1, 1));
    let target = pb.id();
    let mut kid = Kid::new(Split::horizontal(equal_split(2), vec![a, Box::new(pb)]));
    kid.layout(&mut env, Size::new(10, 2), false);

    assert!(kid.mark(target, true));
    assert!(!kid.slot.layout_clean());
    kid.layout(&mut env, Size::new(10, 2), false);
    assert_eq!(log_a.borrow().layouts.len(), 1);
    assert_eq!(log_b.borrow().layouts, vec![true, false]);
}

#[test]
fn own_size_change_forces_kids() {
    let mut env = Env::default();
    let (a, log_a) = probe(1, 1);
    let mut kid = Kid::new(Split::horizontal(equal_split(1), vec![a]));
    kid.layout(&mut env, Size::new(10, 2), false);

    kid.slot.mark_layout();
    kid.layout(&mut env, Size::new(10, 2), false);
    assert_eq!(log_a.borrow().layouts.len(), 1);

    kid.slot.mark_layout();
    kid.layout(&mut env, Size::new(30, 2), false);
    assert_eq!(log_a.borrow().layouts, vec![true, true]);
}

#[test]
fn kids_update_installs_matching_split() {
    let mut env = Env::default();
    let split = Split::horizontal(equal_split(1), vec![probe(1, 1).0]);
    let id = split.id();
    let mut kid = Kid::new(split);
    kid.layout(&mut env, Size::new(10, 2), false);

    let (c, log_c) = probe(1, 1);
    let mut update = Some(Update::Kids(KidsUpdate {
        keep: 1,
        append: vec![c],
        split: Some(equal_split(2)),
    }));
    assert!(kid.apply(id, &mut update));
    assert!(kid.mark(id, true));
    kid.layout(&mut env, Size::new(10, 2), false);
    assert_eq!(log_c.borrow().avails, vec![Size::new(5, 2)]);
}
