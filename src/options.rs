//! Picker configuration.

use crate::colour::{Channel, Colour};
use crate::constants;
use crate::palette::Palette;

/// Text shown beside the hex and channel inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLabels {
    pub hex: String,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

impl InputLabels {
    pub fn channel(&self, channel: Channel) -> &str {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }
}

impl Default for InputLabels {
    fn default() -> Self {
        Self {
            hex: "Hex".to_string(),
            red: Channel::Red.default_label().to_string(),
            green: Channel::Green.default_label().to_string(),
            blue: Channel::Blue.default_label().to_string(),
            alpha: Channel::Alpha.default_label().to_string(),
        }
    }
}

/// Options for [`ColourPicker`](crate::ColourPicker).
///
/// ```rust
/// use floem_colour::{Colour, PickerOptions};
///
/// let options = PickerOptions::default()
///     .initial_colour(Colour::from_rgb(59, 130, 246))
///     .show_alpha_control(true);
/// assert!(options.alpha_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub initial_colour: Colour,
    pub show_alpha_control: bool,
    pub labels: InputLabels,
    pub palette: Palette,
    pub show_recent_colours: bool,
    pub recent_capacity: usize,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            initial_colour: Colour::from_rgba(255, 0, 0, 100),
            show_alpha_control: false,
            labels: InputLabels::default(),
            palette: Palette::default(),
            show_recent_colours: false,
            recent_capacity: constants::RECENT_CAPACITY,
        }
    }
}

impl PickerOptions {
    pub fn initial_colour(mut self, colour: Colour) -> Self {
        self.initial_colour = colour;
        self
    }

    pub fn show_alpha_control(mut self, show: bool) -> Self {
        self.show_alpha_control = show;
        self
    }

    pub fn labels(mut self, labels: InputLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn show_recent_colours(mut self, show: bool, capacity: usize) -> Self {
        self.show_recent_colours = show;
        self.recent_capacity = capacity;
        self
    }

    /// Whether the alpha input (and slider) are shown.
    pub fn alpha_enabled(&self) -> bool {
        self.show_alpha_control
    }

    /// The channels that get a numeric input, in display order.
    pub(crate) fn channels(&self) -> &'static [Channel] {
        if self.alpha_enabled() {
            &Channel::ALL
        } else {
            &Channel::ALL[..3]
        }
    }
}
