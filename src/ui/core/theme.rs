use crate::ui::core::style::{Attrs, Color, Style};

/// Styles the stock widgets paint with.
#[derive(Debug, Clone)]
pub struct Theme {
    pub normal: Style,
    pub muted: Style,
    pub selected: Style,
    pub hovered: Style,
    pub button: Style,
    pub button_hover: Style,
    pub field: Style,
    pub field_focus: Style,
    pub caret: Style,
    pub gutter: Style,
    pub scrollbar: Style,
    pub scroll_thumb: Style,
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: Style::new().fg(Color::Reset).bg(Color::Reset),
            muted: Style::new().fg(Color::Indexed(8)),
            selected: Style::new()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(Color::Rgb(0x26, 0x4f, 0x78)),
            hovered: Style::new().bg(Color::Rgb(0x2a, 0x2d, 0x2e)),
            button: Style::new()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(Color::Rgb(0x0e, 0x63, 0x9c)),
            button_hover: Style::new()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(Color::Rgb(0x11, 0x77, 0xbb))
                .attrs(Attrs::BOLD),
            field: Style::new()
                .fg(Color::Reset)
                .bg(Color::Rgb(0x3c, 0x3c, 0x3c)),
            field_focus: Style::new()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(Color::Rgb(0x1e, 0x1e, 0x1e))
                .attrs(Attrs::UNDERLINE),
            caret: Style::new().attrs(Attrs::REVERSE),
            gutter: Style::new().fg(Color::Indexed(8)).bg(Color::Reset),
            scrollbar: Style::new().fg(Color::Indexed(8)).bg(Color::Reset),
            scroll_thumb: Style::new().fg(Color::Indexed(7)).bg(Color::Reset),
            error: Style::new().fg(Color::Rgb(0xf4, 0x47, 0x47)).bg(Color::Reset),
        }
    }
}
