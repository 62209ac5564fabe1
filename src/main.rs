// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Error;
use log::{error, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use dejong::overlay::{draw_text, GLYPH_HEIGHT};
use dejong::{Config, Session};

const TITLE: &str = "Peter de Jong attractor";
const TEXT_COLOUR: u32 = 0x00ff_ffff;
const TEXT_SCALE: usize = 2;

fn run() -> Result<(), Error> {
    let config = Config::default();
    let mut rng = rand::thread_rng();
    let mut session = Session::new(config, &mut rng)?;

    let mut window = Window::new(TITLE, config.width, config.height, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut frame = session.buffer().to_argb_over_black();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Enter, KeyRepeat::No) {
            session.regenerate(&mut rng);
            frame = session.buffer().to_argb_over_black();
        }

        let mut screen = frame.clone();
        let line_height = (GLYPH_HEIGHT + 3) * TEXT_SCALE;
        for (i, line) in session.overlay_lines().iter().enumerate() {
            draw_text(
                &mut screen,
                config.width,
                config.height,
                0,
                i * line_height,
                line,
                TEXT_COLOUR,
                TEXT_SCALE,
            );
        }
        window.update_with_buffer(&screen, config.width, config.height)?;
    }
    info!("window closed");
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
