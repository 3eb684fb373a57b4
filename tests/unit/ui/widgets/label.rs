use super::*;
use crate::ui::core::kid::Kid;
use crate::ui::core::painter::PaintCmd;

#[test]
fn label_is_as_wide_as_its_text_within_avail() {
    let mut env = Env::default();
    let mut kid = Kid::new(Label::new("hello"));
    kid.layout(&mut env, Size::new(20, 5), false);
    assert_eq!(kid.slot.size(), Size::new(5, 1));

    kid.layout(&mut env, Size::new(3, 5), true);
    assert_eq!(kid.slot.size(), Size::new(3, 1));
}

#[test]
fn text_update_is_accepted() {
    let label = Label::new("a");
    let id = label.id();
    let mut kid = Kid::new(label);
    let mut update = Some(Update::Text("changed".to_string()));
    assert!(kid.apply(id, &mut update));
    assert!(update.is_none());

    let mut env = Env::default();
    kid.layout(&mut env, Size::new(20, 1), true);
    assert_eq!(kid.slot.size(), Size::new(7, 1));
}

#[test]
fn draw_clips_text_to_assigned_width() {
    let mut env = Env::default();
    let mut kid = Kid::new(Label::new("abcdef"));
    kid.layout(&mut env, Size::new(4, 1), false);
    let mut painter = Painter::new();
    kid.draw(&mut env, &mut painter, Pos::new(2, 3), &Mouse::at(Pos::ZERO), false);
    let texts: Vec<&str> = painter
        .cmds()
        .iter()
        .filter_map(|c| match c {
            PaintCmd::Text { text, pos, .. } => {
                assert_eq!(*pos, Pos::new(2, 3));
                Some(text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["abcd"]);
    assert!(kid.slot.draw_clean());

    painter.clear();
    kid.draw(&mut env, &mut painter, Pos::new(2, 3), &Mouse::at(Pos::ZERO), false);
    assert!(painter.cmds().is_empty());
}
