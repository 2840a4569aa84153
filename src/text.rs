//! Text Rendering
//!
//! Screens draw text through [`Fonts`], which offers two sizes. By default
//! text is drawn with a built-in 5x7 bitmap font made of SDL2 rectangles.
//! With the `ttf` feature, a TrueType font is loaded at two point sizes and
//! the bitmap font is only used when loading it fails.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::marker::PhantomData;

/// Bitmap scale for [`FontSize::Small`] (10x14 pixel glyphs)
const SMALL_SCALE: u32 = 2;
/// Bitmap scale for [`FontSize::Large`] (15x21 pixel glyphs)
const LARGE_SCALE: u32 = 3;

/// The two text sizes used by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Large,
}

impl FontSize {
    fn bitmap_scale(&self) -> u32 {
        match self {
            FontSize::Small => SMALL_SCALE,
            FontSize::Large => LARGE_SCALE,
        }
    }
}

/// Width in pixels of `text` drawn with the bitmap font at `scale`
pub fn simple_text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * 6 * scale // 5 pixels + 1 spacing
}

/// 5x7 pattern for a character (1 = pixel on), case-insensitive
fn glyph(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        ';' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00100, 0b01000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '\\' => &[0b10000, 0b01000, 0b01000, 0b00100, 0b00010, 0b00010, 0b00001],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '=' => &[0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '*' => &[0b00000, 0b10101, 0b01110, 0b11111, 0b01110, 0b10101, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '\'' => &[0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => &[0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '_' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '%' => &[0b11001, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b10011],
        '#' => &[0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => &[0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => &[0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
    }
}

/// Renders bitmap text using procedural rectangles (5x7 font)
///
/// # Parameters
///
/// - `canvas`: SDL2 canvas to render to
/// - `text`: Text string to render (case-insensitive)
/// - `x`, `y`: Top-left position in pixels
/// - `color`: Text color
/// - `scale`: Scaling factor (1 = 5x7 pixels, 2 = 10x14 pixels, etc.)
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = 6 * scale;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + (i as i32 * char_width as i32);

        for (row, &pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + (col * pixel_size),
                        y + (row as i32 * pixel_size),
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "ttf")]
struct TrueTypeFonts<'ttf> {
    small: sdl2::ttf::Font<'ttf, 'static>,
    large: sdl2::ttf::Font<'ttf, 'static>,
}

#[cfg(feature = "ttf")]
impl<'ttf> TrueTypeFonts<'ttf> {
    fn get(&self, size: FontSize) -> &sdl2::ttf::Font<'ttf, 'static> {
        match size {
            FontSize::Small => &self.small,
            FontSize::Large => &self.large,
        }
    }
}

/// The fonts screens draw with
pub struct Fonts<'ttf> {
    #[cfg(feature = "ttf")]
    truetype: Option<TrueTypeFonts<'ttf>>,
    _ttf: PhantomData<&'ttf ()>,
}

impl<'ttf> Fonts<'ttf> {
    /// Bitmap-only fonts
    pub fn builtin() -> Self {
        Fonts {
            #[cfg(feature = "ttf")]
            truetype: None,
            _ttf: PhantomData,
        }
    }

    /// Loads the TrueType font at `path` in two point sizes
    ///
    /// Falls back to the bitmap font (with a warning) if the file can't be loaded.
    #[cfg(feature = "ttf")]
    pub fn load(
        ttf_context: &'ttf sdl2::ttf::Sdl2TtfContext,
        path: &std::path::Path,
        small_point_size: u16,
        large_point_size: u16,
    ) -> Self {
        let loaded = ttf_context.load_font(path, small_point_size).and_then(|small| {
            ttf_context
                .load_font(path, large_point_size)
                .map(|large| TrueTypeFonts { small, large })
        });

        match loaded {
            Ok(fonts) => {
                log::info!("Loaded font {}", path.display());
                Fonts {
                    truetype: Some(fonts),
                    _ttf: PhantomData,
                }
            }
            Err(e) => {
                log::warn!(
                    "Failed to load font {}: {}, using built-in font",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Width in pixels `text` takes up at `size`
    pub fn text_width(&self, text: &str, size: FontSize) -> u32 {
        #[cfg(feature = "ttf")]
        if let Some(fonts) = &self.truetype {
            return fonts.get(size).size_of(text).map(|(w, _)| w).unwrap_or(0);
        }

        simple_text_width(text, size.bitmap_scale())
    }

    /// Height in pixels of one line of text at `size`
    pub fn line_height(&self, size: FontSize) -> u32 {
        #[cfg(feature = "ttf")]
        if let Some(fonts) = &self.truetype {
            return fonts.get(size).height().max(0) as u32;
        }

        7 * size.bitmap_scale()
    }

    /// Longest suffix of `text` that fits in `max_width` pixels
    ///
    /// Input fields show the end of their buffer so the text being typed
    /// stays visible.
    pub fn visible_tail<'t>(&self, text: &'t str, size: FontSize, max_width: u32) -> &'t str {
        text.char_indices()
            .map(|(i, _)| &text[i..])
            .find(|tail| self.text_width(tail, size) <= max_width)
            .unwrap_or("")
    }

    /// Draws `text` with its top-left corner at (`x`, `y`)
    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        size: FontSize,
    ) -> Result<(), String> {
        if text.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "ttf")]
        if let Some(fonts) = &self.truetype {
            let surface = fonts
                .get(size)
                .render(text)
                .blended(color)
                .map_err(|e| e.to_string())?;
            let texture_creator = canvas.texture_creator();
            let texture = texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| e.to_string())?;
            let query = texture.query();
            return canvas.copy(&texture, None, Rect::new(x, y, query.width, query.height));
        }

        draw_simple_text(canvas, text, x, y, color, size.bitmap_scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_width() {
        assert_eq!(simple_text_width("", 2), 0);
        assert_eq!(simple_text_width("ABC", 1), 18);
        assert_eq!(simple_text_width("ABC", 3), 54);
    }

    #[test]
    fn test_builtin_text_width_matches_scale() {
        let fonts = Fonts::builtin();
        assert_eq!(fonts.text_width("quiz", FontSize::Small), 48);
        assert_eq!(fonts.text_width("quiz", FontSize::Large), 72);
        assert_eq!(fonts.line_height(FontSize::Small), 14);
    }

    #[test]
    fn test_visible_tail_keeps_end_of_text() {
        let fonts = Fonts::builtin();

        // 12 pixels per character at small size
        assert_eq!(fonts.visible_tail("quiz.txt", FontSize::Small, 1000), "quiz.txt");
        assert_eq!(fonts.visible_tail("quiz.txt", FontSize::Small, 48), ".txt");
        assert_eq!(fonts.visible_tail("quiz.txt", FontSize::Small, 50), ".txt");
        assert_eq!(fonts.visible_tail("quiz.txt", FontSize::Small, 5), "");
    }

    #[test]
    fn test_unknown_glyph_is_full_block() {
        assert_eq!(glyph('~'), &[0b11111; 7]);
        assert_eq!(glyph('a'), glyph('A'));
    }
}
