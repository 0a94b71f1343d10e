// What you SEE:
// • A white canvas. Hold Left Mouse and drag to draw black strokes.
// • Space (or Enter) classifies the drawing; the answer shows in the status line.
// • C clears the canvas. ESC quits.
// • Resizing the window starts a fresh, empty canvas.

use clap::Parser;
use stroke_canvas::config::{AppConfig, CliArgs};
use stroke_canvas::draw::{Drawer, draw_text_5x7};
use stroke_canvas::{DrawingShell, InkSummary, PointerTracker, Raster, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const HUD_COLOR: u32 = 0xFF_1E_5A_C8; // blue status text
const HUD_SHADOW: u32 = 0xFF_FF_FF_FF; // keeps it legible over ink

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "stroke_canvas=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from(CliArgs::parse());
    tracing::info!(width = config.width, height = config.height, "starting {}", config.title);

    /* --- Window + shell ---
       The classifier here only reports how much was drawn; a real one is
       plugged in the same way. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height)?;
    let background = config.style.background;
    let mut shell = DrawingShell::new(config.style, InkSummary { background });
    let mut pointer = PointerTracker::new();

    // The frame actually shown: canvas + live stroke + status line.
    let mut frame = Raster::new(config.width, config.height, background);
    let mut hud_dirty = true;

    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Keep the canvas the size of the window (a new size clears it). */
        let (w, h) = drawer.size();
        if shell.resize(w, h) {
            frame = Raster::new(w, h, background);
        }

        /* 2) Inputs */
        let event = if drawer.has_focus() {
            pointer.sample(drawer.left_mouse_down(), drawer.mouse_pos())
        } else {
            pointer.input_lost()
        };
        if let Some(event) = event {
            shell.pointer(event);
        }
        if drawer.clear_pressed_once() {
            shell.clear();
            hud_dirty = true;
        }
        if drawer.classify_pressed_once() {
            shell.classify();
            hud_dirty = true;
        }

        /* 3) Redraw only when something visible changed. */
        let canvas_dirty = shell.canvas_mut().take_redraw();
        if canvas_dirty || hud_dirty {
            shell.canvas().render(&mut frame);
            draw_text_5x7(&mut frame, 8, 8, shell.status(), HUD_COLOR, HUD_SHADOW);
            drawer.present(&frame)?;
            hud_dirty = false;
        } else {
            drawer.idle();
        }
    }

    Ok(())
}
