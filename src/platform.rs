//! SDL2 subsystems, acquired once at startup
//!
//! `Platform` owns every SDL2 context the application needs. It is created
//! at the start of `main` and dropped on every exit path (normal quit,
//! Escape, or a startup error), which shuts the subsystems down.

use crate::config::AppConfig;
use crate::text::Fonts;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::{AudioSubsystem, Sdl, VideoSubsystem};
use thiserror::Error;

/// Fatal errors: the application can't start or keep its window open
#[derive(Error, Debug)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),
}

pub struct Platform {
    pub sdl: Sdl,
    pub video: VideoSubsystem,
    pub audio: AudioSubsystem,
    _image: Sdl2ImageContext,
    #[cfg(feature = "ttf")]
    ttf: Option<sdl2::ttf::Sdl2TtfContext>,
}

impl Platform {
    /// Initializes video, audio and image loading
    ///
    /// Failing to initialize any of them is fatal. The optional TrueType
    /// subsystem only logs a warning.
    pub fn init() -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Sdl)?;
        let video = sdl.video().map_err(AppError::Sdl)?;
        let audio = sdl.audio().map_err(AppError::Sdl)?;
        let image = sdl2::image::init(InitFlag::PNG | InitFlag::JPG).map_err(AppError::Sdl)?;

        #[cfg(feature = "ttf")]
        let ttf = match sdl2::ttf::init() {
            Ok(context) => Some(context),
            Err(e) => {
                log::warn!("Failed to initialize TrueType fonts: {}", e);
                None
            }
        };

        log::info!("SDL initialized (video driver: {})", video.current_video_driver());

        Ok(Platform {
            sdl,
            video,
            audio,
            _image: image,
            #[cfg(feature = "ttf")]
            ttf,
        })
    }

    /// Fonts for the screens: the configured TrueType font if available,
    /// otherwise the built-in bitmap font
    #[cfg_attr(not(feature = "ttf"), allow(unused_variables))]
    pub fn fonts(&self, config: &AppConfig) -> Fonts<'_> {
        #[cfg(feature = "ttf")]
        if let Some(ttf) = &self.ttf {
            return Fonts::load(
                ttf,
                &config.font_path,
                config.small_font_size,
                config.large_font_size,
            );
        }

        log::info!("Using built-in bitmap font");
        Fonts::builtin()
    }
}
