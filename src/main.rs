mod audio;
mod config;
mod gui;
mod input_system;
mod platform;
mod quiz;
mod render;
mod state;
mod text;

use audio::Music;
use config::AppConfig;
use gui::Theme;
use input_system::{AppAction, InputSystem};
use platform::{AppError, Platform};
use quiz::QuestionSaver;
use render::Background;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use state::{AppState, Transition};
use text::Fonts;

fn main() -> Result<(), AppError> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = AppConfig::load();
    let platform = Platform::init()?;

    let result = run(&platform, &config);
    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}

/// Opens the window and runs the event loop until the user quits
fn run(platform: &Platform, config: &AppConfig) -> Result<(), AppError> {
    let window = platform
        .video
        .window(&config.title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = platform.sdl.event_pump().map_err(AppError::Sdl)?;

    // Assets: each one falls back to something inert if it can't be loaded
    let theme = Theme::default();
    let background = Background::load(
        &texture_creator,
        &config.background_path,
        theme.background_fallback,
    );
    let fonts = platform.fonts(config);
    let _music = Music::start(&platform.audio, &config.music_path, config.music_volume);

    platform.video.text_input().start();

    let input = InputSystem::new();
    let saver = QuestionSaver::new();
    let mut state = AppState::initial();

    log::info!("Controls:");
    log::info!("  Type to fill in the focused field");
    log::info!("  TAB - Next field, ENTER - Continue / save, ESC - Quit");

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            let key = match action {
                AppAction::Quit => {
                    log::info!("Window closed");
                    break 'running;
                }
                AppAction::Key(key) => key,
            };

            match state.handle_key(key, &saver) {
                Transition::Stay => {}
                Transition::To(next) => {
                    log::info!("Screen: {} -> {}", state.name(), next.name());
                    state = next;
                }
                Transition::Quit => {
                    log::info!("Quitting from {} screen", state.name());
                    break 'running;
                }
            }
        }

        if let Err(e) = draw_frame(&mut canvas, &background, &state, &fonts, &theme) {
            log::error!("Failed to draw frame: {}", e);
        }
        canvas.present();

        std::thread::sleep(config.frame_duration());
    }

    Ok(())
}

/// Background first, then the active screen on top
fn draw_frame(
    canvas: &mut Canvas<Window>,
    background: &Background,
    state: &AppState,
    fonts: &Fonts,
    theme: &Theme,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    background.draw(canvas)?;
    state.render(canvas, fonts, theme)
}
