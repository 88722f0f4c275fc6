//! Triangle Transformations: interactive 2D affine transform demo
//!
//! A single triangle is moved, rotated and scaled from the keyboard:
//! - Arrows move it 5 px per press
//! - Q/E rotate it 5 degrees about its centroid
//! - Z/X scale it by 0.9 / 1.1 about its centroid
//! - Esc or closing the window exits
//!
//! Each frame the triangle is filled point by point into a software
//! framebuffer, outlined, and shown with a text overlay.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod app;
mod config;
mod input;
mod pacing;

use std::time::Duration;
use macroquad::prelude::*;
use rasterizer::{Color as RasterColor, Framebuffer, HEIGHT, WIDTH};
use app::AppState;
use config::{load_or_default, DemoConfig, CONFIG_FILE};
use pacing::FramePacer;

const HINT_TEXT: &str = "Arrows: Move | Q/E: Rotate | Z/X: Scale | Esc: Exit";

/// Startup failures; all of them end the process with exit code 1
#[derive(Debug)]
enum InitError {
    Font { path: String, source: macroquad::Error },
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::Font { path, source } => write!(f, "Font load error ({}): {}", path, source),
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Triangle Transformations".to_string(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn to_mq(c: RasterColor) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

async fn load_font(config: &DemoConfig) -> Result<Font, InitError> {
    load_ttf_font(&config.font_path)
        .await
        .map_err(|source| InitError::Font { path: config.font_path.clone(), source })
}

/// Rasterize the current frame into `fb`
fn render_scene(fb: &mut Framebuffer, app: &AppState, config: &DemoConfig) {
    fb.clear(config.background);
    let tri = app.transformed_triangle();
    fb.fill_triangle(&tri, config.fill);
    fb.draw_outline(&tri, config.outline);
}

fn present(fb: &Framebuffer, font: &Font, config: &DemoConfig) {
    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    draw_texture_ex(
        &texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(Vec2::new(screen_width(), screen_height())),
            ..Default::default()
        },
    );

    // hint_position is the top-left corner; draw_text_ex wants the baseline
    let dims = measure_text(HINT_TEXT, Some(font), config.font_size, 1.0);
    draw_text_ex(
        HINT_TEXT,
        config.hint_position.x as f32,
        config.hint_position.y as f32 + dims.offset_y,
        TextParams {
            font: Some(font),
            font_size: config.font_size,
            color: to_mq(config.text),
            ..Default::default()
        },
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Triangle Transformations v{}", VERSION);

    let config = load_or_default(CONFIG_FILE);

    let font = match load_font(&config).await {
        Ok(font) => {
            log::info!("Loaded font {}", config.font_path);
            font
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // Window close goes through the same Stopped transition as Escape
    prevent_quit();

    let mut fb = Framebuffer::new(WIDTH, HEIGHT);
    let mut app = AppState::new(config.triangle);
    let mut pacer = FramePacer::new(Duration::from_millis(config.frame_delay_ms));
    let mut events = input::InputQueue::new();

    while app.is_running() {
        pacer.begin();

        for action in events.poll_actions() {
            app.handle(action);
        }
        if !app.is_running() {
            break;
        }

        render_scene(&mut fb, &app, &config);
        clear_background(to_mq(config.background));
        present(&fb, &font, &config);

        next_frame().await;
        pacer.wait();
    }

    drop(fb);
    drop(font);
    log::info!("Exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterizer::{Point, Triangle};

    #[test]
    fn test_render_identity_frame() {
        let config = DemoConfig::default();
        let app = AppState::new(config.triangle);
        let mut fb = Framebuffer::new(WIDTH, HEIGHT);
        render_scene(&mut fb, &app, &config);

        // vertices sit on the outline
        for p in Triangle::default().points {
            assert_eq!(fb.get_pixel(p.x as usize, p.y as usize), Some(config.outline));
        }
        let c: Point = Triangle::default().centroid();
        assert_eq!(fb.get_pixel(c.x as usize, c.y as usize), Some(config.fill));
        assert_eq!(fb.get_pixel(5, 5), Some(config.background));
    }

    #[test]
    fn test_render_offscreen_triangle() {
        let config = DemoConfig::default();
        let mut app = AppState::new(config.triangle);
        for _ in 0..400 {
            app.handle(app::Action::Move { dx: app::MOVE_STEP, dy: 0 });
        }
        let mut fb = Framebuffer::new(WIDTH, HEIGHT);
        render_scene(&mut fb, &app, &config);
        assert!(fb.pixels.chunks_exact(4).all(|p| p == config.background.to_bytes()));
    }
}
