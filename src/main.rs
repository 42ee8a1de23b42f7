// src/main.rs
use log::info;
use nannou::prelude::*;
use std::time::Instant;

use pathvis::{
    config::Config,
    models::Palette,
    views::{BackgroundManager, PathSquareInstance},
};

struct Model {
    // Core components:
    instance: PathSquareInstance,
    background: BackgroundManager,

    // Frame timing
    last_update: Instant,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let palette = Palette::from_config(&config.palette).expect("Failed to parse palette");

    info!(
        "config loaded: {} colors, {} parts",
        palette.len(),
        config.animation.parts
    );

    // Create window
    app.new_window()
        .title("pathvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let background = BackgroundManager::new(palette.background());

    Model {
        instance: PathSquareInstance::new(&config, palette),
        background,
        last_update: Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.instance.handle_tap();
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // keyboard alias for the tap
        Key::Space => model.instance.handle_tap(),
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    if let Some(settlement) = model.instance.update(dt) {
        info!(
            "segment settled on node {}{}",
            settlement.index,
            if settlement.flipped {
                " (direction reversed)"
            } else {
                ""
            }
        );
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    model.background.draw(&draw);
    model.instance.draw(&draw, app.window_rect());

    draw.to_frame(app, &frame).unwrap();
}
