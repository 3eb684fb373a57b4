use crate::ui::backend::surface::Surface;
use crate::ui::core::geom::Size;
use crate::ui::core::style::{Attrs, Color, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn size(&self) -> io::Result<Size> {
        let r = self.terminal.size()?;
        Ok(Size::new(r.width as i32, r.height as i32))
    }

    /// Copy `surface` to the screen. ratatui diffs against the previous frame, so only cells
    /// that changed are written.
    pub fn present(&mut self, surface: &Surface) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(SurfaceWidget { surface }, area);
            if let Some(pos) = surface.cursor() {
                // If this is not called, ratatui hides the cursor for this frame.
                frame.set_cursor_position((pos.x.max(0) as u16, pos.y.max(0) as u16));
            }
        })?;
        Ok(())
    }
}

struct SurfaceWidget<'a> {
    surface: &'a Surface,
}

impl Widget for SurfaceWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let Some(src) = self.surface.cell(x as i32, y as i32) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(&src.symbol)
                        .set_style(to_ratatui_style(src.style));
                }
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_attrs(s.attrs))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_attrs(a: Attrs) -> RModifier {
    let mut out = RModifier::empty();
    if a.contains(Attrs::BOLD) {
        out |= RModifier::BOLD;
    }
    if a.contains(Attrs::DIM) {
        out |= RModifier::DIM;
    }
    if a.contains(Attrs::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if a.contains(Attrs::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

// Conversion into the surface is tested in `tests/unit/ui/backend/surface.rs`, which does not
// depend on `ratatui`.
