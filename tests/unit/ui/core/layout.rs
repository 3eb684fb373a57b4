use super::*;

#[test]
fn inset_shrinks_rect() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 3));
}

#[test]
fn inset_saturates_to_empty() {
    let r = Rect::new(0, 0, 2, 2);
    assert_eq!(r.inset(Insets::all(3)), Rect::new(3, 3, 0, 0));
}

#[test]
fn size_inset_and_outset_are_inverse_for_large_sizes() {
    let insets = Insets::xy(2, 1);
    let s = Size::new(20, 10);
    assert_eq!(s.inset(insets), Size::new(16, 8));
    assert_eq!(s.inset(insets).outset(insets), s);
}

#[test]
fn intersect_returns_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
}

#[test]
fn split_left_clamps() {
    let r = Rect::new(0, 0, 10, 5);
    let (left, rest) = r.split_left(4);
    assert_eq!(left, Rect::new(0, 0, 4, 5));
    assert_eq!(rest, Rect::new(4, 0, 6, 5));

    let (left, rest) = r.split_left(40);
    assert_eq!(left, r);
    assert!(rest.is_empty());
}
