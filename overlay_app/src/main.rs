//! Overlay input demo application
//!
//! Opens a transparent, undecorated overlay window, polls input every
//! frame, and logs mouse and keyboard transitions until ESCAPE is pressed
//! or the window is closed.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use overlay_window::logging;
use overlay_window::prelude::*;

const CONFIG_PATH: &str = "overlay.toml";

fn main() -> ExitCode {
    logging::init();

    let mut platform = match Platform::init(&mut io::stderr()) {
        Ok(platform) => platform,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = load_config();
    let window = platform.create_window(&config);
    if !window.is_valid() {
        log::error!("Could not create the overlay window");
        return ExitCode::FAILURE;
    }

    run(&mut platform, &window);

    drop(window);
    platform.shutdown();
    ExitCode::SUCCESS
}

/// Load window parameters from `overlay.toml`, falling back to a
/// transparent full-default overlay when the file is absent or malformed.
fn load_config() -> WindowConfig {
    match WindowConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            log::info!("Loaded window configuration from {}", CONFIG_PATH);
            config
        }
        Err(err) => {
            log::debug!("No usable {} ({}), using defaults", CONFIG_PATH, err);
            WindowConfig::new(800, 600)
                .with_title("Overlay Demo")
                .with_opaque(false)
        }
    }
}

fn run(platform: &mut Platform, window: &WindowHandle) {
    log::info!("Entering poll loop; press ESCAPE to exit");

    while !window.should_close() {
        platform.poll_events();
        let (x, y) = window.mouse_position();

        let mouse = window.current_mouse_state();
        let was_down = window.previous_mouse_state().left_button_down;
        if mouse.left_button_down && !was_down {
            log::info!("Primary button pressed at ({:.0}, {:.0})", x, y);
        } else if !mouse.left_button_down && was_down {
            log::info!("Primary button released");
        }

        let keys = window.current_keyboard_state();
        let before = window.previous_keyboard_state();
        for identifier in keys.pressed.iter().filter(|id| !before.is_pressed(id.as_str())) {
            log::info!("Key down: {}", identifier);
        }

        if keys.is_pressed("ESCAPE") {
            window.set_should_close(true);
        }

        window.advance_mouse();
        window.advance_keyboard();

        std::thread::sleep(Duration::from_millis(16));
    }

    let (left, top) = window.get_position();
    let (width, height) = window.get_size();
    log::info!(
        "Window closed at ({}, {}), {}x{}",
        left,
        top,
        width,
        height
    );
}
