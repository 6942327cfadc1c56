use std::time::Duration;

use anyhow::{Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel::config::Config;
use carousel::discovery::{discover_groups, shuffle_groups};
use carousel::{CarouselError, Direction, SlideIndexTable, UiLayer, wrap_index};

mod gallery;
mod slide;
mod texture_loader;

use crate::gallery::{Gallery, Group, column_at};
use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;

const DIGIT_KEYS: [KeyboardKey; 10] = [
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// What the user asked for during one frame.
enum Input {
    Step(Direction, usize),
    Focus(usize),
    Reset(usize),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_args()?;
    run(config)
}

fn run(config: Config) -> Result<()> {
    let mut sources = discover_groups(&config.directory, config.max_groups)?;
    if config.shuffle {
        shuffle_groups(&mut sources, config.seed);
    }
    info!(directory = %config.directory.display(), groups = sources.len(), "loading carousels");

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Photo Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut groups = Vec::with_capacity(sources.len());
    for source in sources {
        let mut slides = Vec::with_capacity(source.paths.len());
        for path in &source.paths {
            match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => slides.push(Slide::new(texture)),
                Err(e) => warn!("skipping image: {:#}", e),
            }
        }
        info!(group = %source.name, slides = slides.len(), "group loaded");
        groups.push(Group { name: source.name, slides });
    }

    let mut gallery = Gallery::new(groups);
    if (0..gallery.group_count()).all(|g| gallery.group_items(g).is_empty()) {
        bail!("No slides could be loaded from {}", config.directory.display());
    }

    let mut table = SlideIndexTable::new(gallery.group_count());
    for group in 0..gallery.group_count() {
        if let Err(e) = table.sync(group, &mut gallery) {
            warn!("{}", e);
        }
    }

    let mut focus = 0;
    let mut autoplay_timer = Duration::ZERO;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        for input in poll_input(&rl, focus, gallery.group_count(), screen_width) {
            match input {
                Input::Step(direction, group) => {
                    focus = group;
                    if let Err(e) = table.step(direction, group, &mut gallery) {
                        warn!("{}", e);
                    }
                }
                Input::Focus(group) => focus = group,
                Input::Reset(group) => {
                    if let Err(e) = table.reset(group).and_then(|_| table.sync(group, &mut gallery)) {
                        warn!("{}", e);
                    }
                }
            }
        }

        if let Some(interval) = config.autoplay {
            autoplay_timer += Duration::from_secs_f32(rl.get_frame_time());
            if autoplay_timer >= interval {
                autoplay_timer = Duration::ZERO;
                for group in 0..gallery.group_count() {
                    match table.step(Direction::Next, group, &mut gallery) {
                        Ok(_) | Err(CarouselError::EmptyGroup { .. }) => {}
                        Err(e) => warn!("{}", e),
                    }
                }
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        gallery.draw(&mut d, &table, focus, screen_width, screen_height);
    }

    Ok(())
}

fn poll_input(rl: &RaylibHandle, focus: usize, groups: usize, screen_width: f32) -> Vec<Input> {
    let mut inputs = Vec::new();
    if groups == 0 {
        return inputs;
    }

    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        inputs.push(Input::Step(Direction::Next, focus));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        inputs.push(Input::Step(Direction::Previous, focus));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        inputs.push(Input::Focus(wrap_index(focus, 1, groups)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_UP) {
        inputs.push(Input::Focus(wrap_index(focus, -1, groups)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        inputs.push(Input::Reset(focus));
    }
    for (digit, key) in DIGIT_KEYS.iter().enumerate() {
        if digit < groups && rl.is_key_pressed(*key) {
            inputs.push(Input::Focus(digit));
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let position = rl.get_mouse_position();
        if let Some((group, right_half)) = column_at(position.x, groups, screen_width) {
            let direction = if right_half { Direction::Next } else { Direction::Previous };
            inputs.push(Input::Step(direction, group));
        }
    }

    inputs
}
