//! Picker state shared by every control.
//!
//! The integer [`Colour`] is what gets reported; the float [`Hsv`] beside it
//! is what the field marker and hue thumb are drawn from. Keeping both means
//! the hue does not snap back to red when a colour loses its saturation or
//! brightness, and the marker does not jitter from 8-bit rounding while
//! dragging.

use tracing::trace;

use crate::colour::{Channel, Colour, Hsv, Rgba};
use crate::error::ColourResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerModel {
    colour: Colour,
    hsv: Hsv,
}

impl PickerModel {
    pub fn new(initial: Colour) -> Self {
        Self {
            colour: initial,
            hsv: initial.to_hsv(),
        }
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Replace the colour from outside the picker.
    pub fn set_colour(&mut self, colour: Colour) {
        self.take_rgb(colour);
    }

    /// Colour field moved: new saturation/value (and hue) with the current alpha.
    pub fn apply_hsv(&mut self, hsv: Hsv) -> Colour {
        self.hsv = Hsv {
            h: hsv.h.clamp(0.0, 1.0),
            s: hsv.s.clamp(0.0, 1.0),
            v: hsv.v.clamp(0.0, 1.0),
        };
        self.colour = Colour::from_hsv(self.hsv, self.colour.a());
        trace!(colour = %self.colour, "hsv applied");
        self.colour
    }

    /// Hue slider moved: saturation and value stay where the marker is.
    pub fn apply_hue(&mut self, hue: f64) -> Colour {
        self.apply_hsv(Hsv { h: hue, ..self.hsv })
    }

    /// All four numeric inputs at once.
    pub fn apply_rgba(&mut self, rgba: Rgba) -> Colour {
        self.take_rgb(Colour::from(rgba));
        trace!(colour = %self.colour, "rgba applied");
        self.colour
    }

    /// One numeric input, or a scrub over its label.
    pub fn apply_channel(&mut self, channel: Channel, value: u8) -> Colour {
        let next = self.colour.with_channel(channel, value);
        if channel == Channel::Alpha {
            // Alpha does not move the marker.
            self.colour = next;
        } else {
            self.take_rgb(next);
        }
        trace!(?channel, value, colour = %self.colour, "channel applied");
        self.colour
    }

    /// Alpha slider or alpha input, as a percentage.
    pub fn apply_alpha(&mut self, alpha: u8) -> Colour {
        self.apply_channel(Channel::Alpha, alpha)
    }

    /// Hex input. Hex without its own alpha byte keeps the current alpha.
    pub fn apply_hex(&mut self, hex: &str) -> ColourResult<Colour> {
        let mut parsed = Colour::from_hex(hex)?;
        if !Colour::hex_has_alpha(hex) {
            parsed.set_alpha(self.colour.a());
        }
        self.take_rgb(parsed);
        trace!(hex, colour = %self.colour, "hex applied");
        Ok(self.colour)
    }

    /// Take an RGB-derived colour, re-deriving HSV but keeping the hue when
    /// the new colour has none, and keeping saturation when it is black.
    fn take_rgb(&mut self, colour: Colour) {
        let derived = colour.to_hsv();
        let h = if derived.s == 0.0 || derived.v == 0.0 {
            self.hsv.h
        } else {
            derived.h
        };
        let s = if derived.v == 0.0 { self.hsv.s } else { derived.s };
        self.hsv = Hsv { h, s, v: derived.v };
        self.colour = colour;
    }
}

impl Default for PickerModel {
    fn default() -> Self {
        Self::new(Colour::from_rgb(255, 0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColourError;
    use assertables::assert_in_delta;

    fn red() -> PickerModel {
        PickerModel::new(Colour::from_rgb(255, 0, 0))
    }

    #[test]
    fn field_keeps_alpha() {
        let mut m = PickerModel::new(Colour::from_rgba(255, 0, 0, 40));
        let c = m.apply_hsv(Hsv { h: 0.0, s: 0.0, v: 1.0 });
        assert_eq!(c, Colour::from_rgba(255, 255, 255, 40));
    }

    #[test]
    fn hue_moves_with_marker_fixed() {
        let mut m = red();
        m.apply_hsv(Hsv { h: 0.0, s: 0.5, v: 0.5 });
        let c = m.apply_hue(0.5);
        assert_eq!(c, Colour::from_rgb(64, 128, 128));
        assert_eq!(m.hsv().s, 0.5);
        assert_eq!(m.hsv().v, 0.5);
    }

    #[test]
    fn field_input_is_clamped() {
        let mut m = red();
        m.apply_hsv(Hsv { h: 1.4, s: -0.2, v: 2.0 });
        assert_eq!(m.hsv(), Hsv { h: 1.0, s: 0.0, v: 1.0 });
    }

    #[test]
    fn grey_keeps_previous_hue() {
        let mut m = red();
        m.apply_hue(0.4);
        m.apply_rgba(Rgba { r: 90, g: 90, b: 90, a: 100 });
        assert_in_delta!(m.hsv().h, 0.4, 1e-9);
        assert_eq!(m.hsv().s, 0.0);
    }

    #[test]
    fn black_keeps_hue_and_saturation() {
        let mut m = red();
        m.apply_hsv(Hsv { h: 0.3, s: 0.7, v: 0.9 });
        m.apply_hex("#000").unwrap();
        assert_eq!(m.hsv(), Hsv { h: 0.3, s: 0.7, v: 0.0 });
    }

    #[test]
    fn hex_without_alpha_keeps_alpha() {
        let mut m = PickerModel::new(Colour::from_rgba(0, 0, 0, 25));
        assert_eq!(m.apply_hex("#00FF00").unwrap(), Colour::from_rgba(0, 255, 0, 25));
        assert_eq!(m.apply_hex("#00FF00FF").unwrap(), Colour::from_rgba(0, 255, 0, 100));
    }

    #[test]
    fn bad_hex_leaves_state_alone() {
        let mut m = red();
        assert_eq!(m.apply_hex("#12"), Err(ColourError::InvalidLength(2)));
        assert_eq!(m.colour(), Colour::from_rgb(255, 0, 0));
    }

    #[test]
    fn channel_edits() {
        let mut m = red();
        assert_eq!(m.apply_channel(Channel::Blue, 255), Colour::from_rgb(255, 0, 255));
        assert_in_delta!(m.hsv().h, 5.0 / 6.0, 1e-9);

        let before = m.hsv();
        assert_eq!(m.apply_alpha(150).a(), 100);
        assert_eq!(m.apply_alpha(30).a(), 30);
        assert_eq!(m.hsv(), before);
    }

    #[test]
    fn set_colour_rederives_hsv() {
        let mut m = PickerModel::default();
        m.set_colour(Colour::from_rgb(0, 0, 255));
        assert_in_delta!(m.hsv().h, 2.0 / 3.0, 1e-9);
        assert_eq!(m.colour(), Colour::from_rgb(0, 0, 255));
    }
}
