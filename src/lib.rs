//! # floem-colour
//!
//! An embeddable colour picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Provides a saturation/value field, hue slider, optional alpha control,
//! hex and RGBA inputs with scrubbable labels, and preset/recent palettes.
//! Every edit made through the widget is reported to a change callback as a
//! [`Colour`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_colour::{colour_picker, Colour, PickerOptions};
//!
//! let options = PickerOptions::default().initial_colour(Colour::from_rgb(59, 130, 246));
//! let _view = colour_picker(|c| println!("picked {c}"), options);
//! ```

#[cfg(feature = "alpha")]
mod alpha_slider;
#[cfg(feature = "alpha")]
mod checkerboard;
mod colour;
mod colour_field;
mod constants;
mod drag;
mod error;
mod hue_slider;
mod inputs;
mod math;
mod model;
mod options;
mod palette;
mod picker;

pub use colour::{Channel, Colour, Hsl, Hsv, Rgba};
pub use error::{ColourError, ColourResult};
pub use model::PickerModel;
pub use options::{InputLabels, PickerOptions};
pub use palette::{Palette, RecentColours};
pub use picker::ColourPicker;

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates a colour picker view that reports every edit to `on_change`.
///
/// Use [`ColourPicker`] directly to read or set the colour from outside.
pub fn colour_picker(on_change: impl Fn(Colour) + 'static, options: PickerOptions) -> impl IntoView {
    ColourPicker::new(on_change, options).view()
}

/// Registers the icon font used by the copy button, once per process.
pub(crate) fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
