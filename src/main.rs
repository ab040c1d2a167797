//! Koch Snowflake entry point
//!
//! Native demo: walks one full level cycle, logging the stats and frame sizes a
//! host renderer would see after each click.
//!
//! Usage: `koch-snowflake [settings.json]`

use koch_snowflake::Settings;
use koch_snowflake::renderer::{self, Vertex, hud};
use koch_snowflake::sim::{FractalState, advance};

/// Canvas size the frames are laid out for
const CANVAS: (f32, f32) = (400.0, 400.0);

fn main() {
    env_logger::init();
    log::info!("Koch Snowflake (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    log::info!(
        "max_level={}, side_length={}, palette_mode={}",
        settings.max_level,
        settings.side_length,
        settings.palette_mode.as_str()
    );

    let layout = Vertex::desc();
    log::info!(
        "Vertex layout: stride={} bytes, {} attributes",
        layout.array_stride,
        layout.attributes.len()
    );
    println!("{}", hud::instructions().text);

    let palette = settings.palette();
    let mut styles = settings.style_sequence();
    let mut state = FractalState::from_settings(&settings, styles.as_mut());

    // One click per level, plus one to wrap back to the seed
    for _ in 0..=state.max_level() {
        let frame = renderer::frame(&state, &palette, &settings, CANVAS);
        let [area, perimeter] = hud::readout(&state, CANVAS.1);
        println!(
            "level {}: {:>5} segments/side, {:>6} vertices | {} | {}",
            state.level(),
            state.segments().len(),
            frame.len(),
            perimeter.text,
            area.text
        );
        advance(&mut state, styles.as_mut());
    }
}
