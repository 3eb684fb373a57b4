use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

fn surface(w: i32, h: i32) -> Surface {
    Surface::new(Size::new(w, h))
}

#[test]
fn wide_glyphs_that_do_not_fit_are_skipped() {
    let mut s = surface(1, 1);
    draw_text(&mut s, Pos::new(0, 0), "你", Style::default());
    assert_eq!(s.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn wide_glyphs_occupy_two_cells_when_they_fit() {
    let mut s = surface(2, 1);
    draw_text(&mut s, Pos::new(0, 0), "你", Style::default());
    assert_eq!(s.cell(0, 0).unwrap().symbol, "你");
    assert_eq!(s.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn fill_rect_clips_to_surface() {
    let mut s = surface(2, 2);
    s.cell_mut(0, 0).unwrap().symbol = "A".to_string();
    let style = Style::default().bg(Color::Indexed(4));
    fill_rect(&mut s, Rect::new(-3, -3, 10, 10), style);
    assert_eq!(s.cell(0, 0).unwrap().symbol, " ");
    assert_eq!(s.cell(1, 1).unwrap().style, style);
}

#[test]
fn text_keeps_the_background_it_is_drawn_over() {
    let mut s = surface(3, 1);
    let fill = Style::new().fg(Color::Reset).bg(Color::Indexed(4));
    let ink = Style::new().fg(Color::Indexed(8));
    s.draw(&[
        PaintCmd::FillRect {
            rect: Rect::new(0, 0, 3, 1),
            style: fill,
        },
        PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "ab".to_string(),
            style: ink,
        },
    ]);
    assert_eq!(s.cell(0, 0).unwrap().style, ink.bg(Color::Indexed(4)));
    assert_eq!(s.cell(2, 0).unwrap().style, fill);

    fill_rect(&mut s, Rect::new(0, 0, 3, 1), Style::default());
    assert_eq!(s.cell(0, 0).unwrap().style, Style::default());
}

#[test]
fn lines_write_characters() {
    let mut s = surface(3, 3);
    s.draw(&[
        PaintCmd::HLine {
            pos: Pos::new(0, 0),
            len: 3,
            ch: '-',
            style: Style::default(),
        },
        PaintCmd::VLine {
            pos: Pos::new(0, 0),
            len: 3,
            ch: '|',
            style: Style::default(),
        },
    ]);
    assert_eq!(s.row_text(0), "|--");
    assert_eq!(s.row_text(2), "|  ");
}

#[test]
fn clip_commands_restrict_painting() {
    let mut s = surface(6, 1);
    let mut p = Painter::new();
    p.with_clip(Rect::new(1, 0, 3, 1), |p| {
        p.text(Pos::new(0, 0), "abcdef", Style::default());
    });
    p.text(Pos::new(5, 0), "z", Style::default());
    s.draw(p.cmds());
    assert_eq!(s.row_text(0), " bcd z");
}

#[test]
fn cells_persist_across_draws_until_resize() {
    let mut s = surface(4, 1);
    s.draw(&[PaintCmd::Text {
        pos: Pos::new(0, 0),
        text: "ab".to_string(),
        style: Style::default(),
    }]);
    s.draw(&[PaintCmd::Text {
        pos: Pos::new(3, 0),
        text: "c".to_string(),
        style: Style::default(),
    }]);
    assert_eq!(s.row_text(0), "ab c");

    s.resize(Size::new(4, 1));
    assert_eq!(s.row_text(0), "ab c");
    s.resize(Size::new(5, 1));
    assert_eq!(s.row_text(0), "     ");
}
