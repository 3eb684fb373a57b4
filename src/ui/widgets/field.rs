use crate::core::event::{Buttons, Key, KeyCode, Mouse, MouseKind};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::Id;
use crate::ui::core::kid::Slot;
use crate::ui::core::painter::Painter;
use crate::ui::core::text;
use crate::ui::core::widget::{print_ui, Env, EventResult, NoticeKind, Update, Widget};

/// Single-line text input. Fills the available width; shows its caret while it holds the
/// pointer. Every edit emits `Edited` with the new text.
pub struct Field {
    id: Id,
    text: String,
    placeholder: String,
    /// Byte offset, always on a grapheme boundary.
    caret: usize,
    hover: bool,
}

impl Field {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: Id::next(),
            caret: text.len(),
            text,
            placeholder: String::new(),
            hover: false,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    fn caret_column(&self, w: i32) -> i32 {
        let start = text::window_start(&self.text, self.caret, w);
        text::width(&self.text[start..self.caret])
    }

    fn edited(&mut self, env: &mut Env) -> EventResult {
        env.notify(
            self.id,
            NoticeKind::Edited {
                text: self.text.clone(),
            },
        );
        EventResult::consumed().with_draw()
    }

    fn moved(&mut self, caret: usize) -> EventResult {
        self.caret = caret;
        EventResult::consumed().with_draw()
    }
}

impl Widget for Field {
    fn id(&self) -> Id {
        self.id
    }

    fn layout(&mut self, env: &mut Env, slot: &mut Slot, avail: Size, force: bool) {
        env.trace_layout("Field", slot, avail, force);
        if slot.layout_clean() && !force {
            return;
        }
        slot.set_size(Size::new(avail.w, 1).clamp_to(avail));
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
        env.trace_draw("Field", slot, orig, force);
        if slot.draw_clean() && !force {
            return;
        }
        let size = slot.size();
        if size.is_empty() {
            return;
        }
        let style = if self.hover {
            env.theme.field_focus
        } else {
            env.theme.field
        };
        painter.fill_rect(Rect::from_parts(orig, size), style);

        if self.text.is_empty() && !self.hover {
            painter.text(
                orig,
                text::fit(&self.placeholder, size.w),
                env.theme.muted.over(style),
            );
            return;
        }
        let start = text::window_start(&self.text, self.caret, size.w);
        painter.text(orig, text::fit(&self.text[start..], size.w), style);

        if self.hover {
            let col = self.caret_column(size.w);
            let end = text::next_boundary(&self.text, self.caret);
            let under = match &self.text[self.caret..end] {
                "" => " ",
                g => g,
            };
            painter.text(
                Pos::new(orig.x + col, orig.y),
                under,
                env.theme.caret.over(style),
            );
        }
    }

    fn mouse(
        &mut self,
        _env: &mut Env,
        slot: &mut Slot,
        m: &Mouse,
        _orig_m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        let size = slot.size();
        let inside = Rect::from_parts(Pos::ZERO, size).contains(m.pos);
        let mut r = EventResult::ignored();
        if inside != self.hover {
            self.hover = inside;
            r = r.with_draw();
        }
        if let MouseKind::Press(b) = m.kind {
            if inside && b == Buttons::LEFT {
                let start = text::window_start(&self.text, self.caret, size.w);
                let caret = start + text::offset_at_column(&self.text[start..], m.pos.x);
                r.merge(self.moved(caret));
            }
        }
        r
    }

    fn key(
        &mut self,
        env: &mut Env,
        _slot: &mut Slot,
        key: Key,
        _m: &Mouse,
        _orig: Pos,
    ) -> EventResult {
        if let Some(ch) = key.text_char() {
            self.text.insert(self.caret, ch);
            self.caret += ch.len_utf8();
            return self.edited(env);
        }
        match key.code {
            KeyCode::Backspace => {
                if self.caret == 0 {
                    return EventResult::consumed();
                }
                let prev = text::prev_boundary(&self.text, self.caret);
                self.text.replace_range(prev..self.caret, "");
                self.caret = prev;
                self.edited(env)
            }
            KeyCode::Delete => {
                if self.caret >= self.text.len() {
                    return EventResult::consumed();
                }
                let next = text::next_boundary(&self.text, self.caret);
                self.text.replace_range(self.caret..next, "");
                self.edited(env)
            }
            // At either end the arrow is left for an enclosing container.
            KeyCode::Left if self.caret > 0 => {
                self.moved(text::prev_boundary(&self.text, self.caret))
            }
            KeyCode::Right if self.caret < self.text.len() => {
                self.moved(text::next_boundary(&self.text, self.caret))
            }
            KeyCode::Home => self.moved(0),
            KeyCode::End => self.moved(self.text.len()),
            _ => EventResult::ignored(),
        }
    }

    fn first_focus(&mut self, _env: &mut Env, slot: &mut Slot) -> Option<Pos> {
        let w = slot.size().w;
        Some(Pos::new(self.caret_column(w).min(w - 1).max(0), 0))
    }

    fn print(&self, slot: &Slot, indent: usize) {
        print_ui("Field", self.id, slot, indent);
    }

    fn accept(&mut self, update: Update) -> Result<(), Update> {
        match update {
            Update::Text(text) => {
                self.caret = text.len();
                self.text = text;
                Ok(())
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/field.rs"]
mod tests;
