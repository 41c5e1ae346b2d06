//! Standalone demo: opens a window with the colour picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colour::{Colour, ColourPicker, Palette, PickerOptions};
use tracing::{info, Level};

fn main() {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(Level::DEBUG)
        .init();

    let palette = Palette::from_hex_rows([
        ["#FFFFFF", "#C0C0C0", "#808080", "#000000", "#FF0000", "#FFA500"],
        ["#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#800080", "#FF00FF"],
    ])
    .unwrap_or_default();

    let options = PickerOptions::default()
        .initial_colour(Colour::from_rgb(59, 130, 246))
        .show_alpha_control(true)
        .palette(palette)
        .show_recent_colours(true, 6);

    let picker = ColourPicker::new(|c| info!(colour = %c, hex = %c.to_hex(true), "changed"), options);

    floem::Application::new()
        .window(
            move |_| {
                picker
                    .view()
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 480.0))
                    .title("floem-colour"),
            ),
        )
        .run();
}
