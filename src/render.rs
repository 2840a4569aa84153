//! Background rendering
//!
//! Every frame starts with the background: the configured image stretched
//! over the whole window, or a solid fill when the image couldn't be loaded.

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// What gets drawn behind the screen text
pub enum Background<'a> {
    Image(Texture<'a>),
    Solid(Color),
}

impl<'a> Background<'a> {
    /// Loads the background image, falling back to a solid `fallback` fill
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        path: &Path,
        fallback: Color,
    ) -> Self {
        match load_texture(texture_creator, path) {
            Ok(texture) => {
                log::info!("Loaded background {}", path.display());
                Background::Image(texture)
            }
            Err(e) => {
                log::warn!("{}, using a plain background", e);
                Background::Solid(fallback)
            }
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        match self {
            // No destination rect: stretched to the whole window
            Background::Image(texture) => canvas.copy(texture, None, None),
            Background::Solid(color) => {
                canvas.set_draw_color(*color);
                canvas.clear();
                Ok(())
            }
        }
    }
}
