//! Labeled single-line text input box

use super::Theme;
use crate::text::{FontSize, Fonts};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Inner padding between the box border and its text
const PADDING: u32 = 6;
/// Gap between the label and the box
const LABEL_GAP: u32 = 4;

/// Layout of one input box
///
/// The widget is stateless: the text it shows is owned by the screen
/// state and passed in on every render.
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    pub label: &'a str,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, x: i32, y: i32, width: u32) -> Self {
        TextField {
            label,
            x,
            y,
            width,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Total height of label plus box
    pub fn height(&self, fonts: &Fonts) -> u32 {
        fonts.line_height(FontSize::Small) + LABEL_GAP + self.box_height(fonts)
    }

    fn box_height(&self, fonts: &Fonts) -> u32 {
        fonts.line_height(FontSize::Small) + PADDING * 2
    }

    /// Draws the label, the box and the end of `text` that fits inside it
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        theme: &Theme,
        text: &str,
    ) -> Result<(), String> {
        fonts.draw(canvas, self.label, self.x, self.y, theme.text_color, FontSize::Small)?;

        let box_y = self.y + (fonts.line_height(FontSize::Small) + LABEL_GAP) as i32;
        let box_rect = Rect::new(self.x, box_y, self.width, self.box_height(fonts));

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(theme.field_background);
        canvas.fill_rect(box_rect)?;
        canvas.set_blend_mode(BlendMode::None);

        // Focused box gets a double border
        if self.focused {
            canvas.set_draw_color(theme.focus_border);
            canvas.draw_rect(box_rect)?;
            canvas.draw_rect(Rect::new(
                self.x + 1,
                box_y + 1,
                self.width.saturating_sub(2),
                self.box_height(fonts).saturating_sub(2),
            ))?;
        } else {
            canvas.set_draw_color(theme.field_border);
            canvas.draw_rect(box_rect)?;
        }

        let cursor = if self.focused { "_" } else { "" };
        let inner_width = self
            .width
            .saturating_sub(PADDING * 2)
            .saturating_sub(fonts.text_width(cursor, FontSize::Small));
        let visible = fonts.visible_tail(text, FontSize::Small, inner_width);

        let text_x = self.x + PADDING as i32;
        let text_y = box_y + PADDING as i32;
        fonts.draw(canvas, visible, text_x, text_y, theme.input_color, FontSize::Small)?;

        if self.focused {
            let cursor_x = text_x + fonts.text_width(visible, FontSize::Small) as i32;
            fonts.draw(canvas, cursor, cursor_x, text_y, theme.focus_border, FontSize::Small)?;
        }

        Ok(())
    }
}
