//! Screen GUI
//!
//! Shared colors and the text input widget the screens are built from.
//! Everything is drawn procedurally with SDL2 primitives on top of the
//! background image.
//!
//! - [`Theme`] - colors used by every screen
//! - [`TextField`] - labeled single-line input box
//! - [`draw_centered`] - horizontally centered line of text

pub mod text_field;

pub use text_field::TextField;

use crate::text::{FontSize, Fonts};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Colors shared by all screens
#[derive(Debug, Clone)]
pub struct Theme {
    /// Fill used when the background image is missing
    pub background_fallback: Color,

    /// Screen titles
    pub title_color: Color,

    /// Labels and messages
    pub text_color: Color,

    /// Key hints at the bottom of the screen
    pub hint_color: Color,

    /// Input box fill (drawn with alpha blending)
    pub field_background: Color,

    /// Border of an unfocused input box
    pub field_border: Color,

    /// Border of the focused input box
    pub focus_border: Color,

    /// Text inside input boxes
    pub input_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background_fallback: Color::RGB(30, 30, 40),
            title_color: Color::RGB(255, 255, 255),
            text_color: Color::RGB(255, 255, 255),
            hint_color: Color::RGB(190, 190, 200),
            field_background: Color::RGBA(0, 0, 0, 170),
            field_border: Color::RGB(100, 100, 120),
            focus_border: Color::RGB(70, 150, 255),
            input_color: Color::RGB(255, 255, 255),
        }
    }
}

/// Draws `text` horizontally centered in the window at height `y`
pub fn draw_centered(
    canvas: &mut Canvas<Window>,
    fonts: &Fonts,
    text: &str,
    y: i32,
    color: Color,
    size: FontSize,
) -> Result<(), String> {
    let (screen_width, _) = canvas.window().size();
    let text_width = fonts.text_width(text, size);
    let x = (screen_width as i32 - text_width as i32) / 2;
    fonts.draw(canvas, text, x.max(0), y, color, size)
}
