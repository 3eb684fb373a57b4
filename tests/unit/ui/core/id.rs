use super::*;

#[test]
fn next_ids_are_unique_and_increasing() {
    let a = Id::next();
    let b = Id::next();
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn raw_ids_compare_by_value() {
    assert_eq!(Id::raw(7), Id::raw(7));
    assert_eq!(Id::raw(7).get(), 7);
    assert_eq!(Id::raw(7).to_string(), "#7");
}
