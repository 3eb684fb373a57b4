use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.hline(Pos::new(0, 1), 3, '─', Style::default());
    assert_eq!(p.cmds().len(), 3);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn empty_fills_are_dropped() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 0, 4), Style::default());
    assert!(p.cmds().is_empty());
}

#[test]
fn nested_clips_intersect_and_restore() {
    let mut p = Painter::new();
    p.with_clip(Rect::new(0, 0, 10, 10), |p| {
        p.with_clip(Rect::new(5, 5, 10, 10), |p| {
            assert_eq!(p.clip(), Some(Rect::new(5, 5, 5, 5)));
        });
        assert_eq!(p.clip(), Some(Rect::new(0, 0, 10, 10)));
    });
    assert_eq!(p.clip(), None);
    assert_eq!(
        p.cmds(),
        &[
            PaintCmd::Clip(Some(Rect::new(0, 0, 10, 10))),
            PaintCmd::Clip(Some(Rect::new(5, 5, 5, 5))),
            PaintCmd::Clip(Some(Rect::new(0, 0, 10, 10))),
            PaintCmd::Clip(None),
        ]
    );
}
