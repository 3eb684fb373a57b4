use crate::core::event::{Key, Mouse};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use crate::ui::core::text;
use crate::ui::core::widget::{print_ui, Env, EventResult, Update, Widget};

/// One line of text, as wide as the text (clipped to what is available).
pub struct Label {
    id: Id,
    text: String,
    style: Option<Style>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Id::next(),
            text: text.into(),
            style: None,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    /// Paint with `style` instead of the theme's normal style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Label", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        slot.set_size(Size::new(text::width(&self.text), 1).clamp_to(avail));
    }

    fn draw(
        &mut self,
        env: &mut Env,
        slot: &mut Slot,
        painter: &mut Painter,
        orig: Pos,
        _m: &Mouse,
        force: bool,
    ) {
        env.trace_draw("Label", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let size = slot.size();
        let style = self.style.unwrap_or(env.theme.normal);
        painter.fill_rect(Rect::from_parts(orig, size), style);
        painter.text(orig, text::fit(&self.text, size.w), style);
    }

    fn mouse(
        &mut self,
        _env: &mut Env,
        _slot: &mut Slot,
        _m: &Mouse,
        _orig_m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        EventResult::ignored()
    }

    fn key(
        &mut self,
        _env: &mut Env,
        _slot: &mut Slot,
        _key: Key,
        _m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        EventResult::ignored()
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Label", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Text(text) => {
                self.text = text;
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/label.rs"]
mod tests;
