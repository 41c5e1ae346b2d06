//! `Colour` — the value reported by the picker.
//!
//! Stores 8-bit RGB plus alpha as a whole percentage, matching what the
//! numeric inputs display. HSV and HSL are available as normalized f64.

use std::fmt;
use std::str::FromStr;

use floem::peniko::Color;

use crate::error::{ColourError, ColourResult};
use crate::math;

/// Plain RGBA channels: 0–255 for colour, 0–100 for alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Hue, saturation and value, all 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue, saturation and lightness, all 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// One editable channel of a [`Colour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Largest value the channel accepts.
    pub fn max(self) -> u8 {
        match self {
            Channel::Alpha => 100,
            _ => 255,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
        }
    }
}

/// RGBA colour with 0–255 colour channels and 0–100 alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for Colour {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 100,
        }
    }
}

impl Colour {
    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Alpha as a percentage (0–100).
    pub fn a(&self) -> u8 {
        self.a
    }
}

impl Colour {
    /// Create from 0–255 RGB and 0–100 alpha. Alpha above 100 is clamped.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: a.min(100),
        }
    }

    /// Create from 0–255 RGB with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 100)
    }

    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }

    pub fn with_alpha(mut self, a: u8) -> Self {
        self.set_alpha(a);
        self
    }

    pub fn set_alpha(&mut self, a: u8) {
        self.a = a.min(100);
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Replace one channel, clamping to that channel's range.
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        let value = value.min(channel.max());
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::Alpha => self.a = value,
        }
        self
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Hex without an alpha byte is fully opaque. The alpha byte is
    /// converted to a percentage.
    pub fn from_hex(hex: &str) -> ColourResult<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if stripped.is_empty() {
            return Err(ColourError::Empty);
        }
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColourError::InvalidDigit(bad));
        }
        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&stripped[i..i + 1], 16).map(|n| n * 17);
        let parsed = match stripped.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            len => return Err(ColourError::InvalidLength(len)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_rgba(r, g, b, alpha_from_byte(a))),
            // Unreachable: every char is a hex digit.
            _ => Err(ColourError::InvalidLength(stripped.len())),
        }
    }

    /// Whether a hex string carries its own alpha byte.
    pub fn hex_has_alpha(hex: &str) -> bool {
        hex.strip_prefix('#').unwrap_or(hex).len() == 8
    }

    /// Format as uppercase `#RRGGBB`, or `#RRGGBBAA` with `include_alpha`.
    pub fn to_hex(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r,
                self.g,
                self.b,
                alpha_to_byte(self.a)
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// CSS colour: `rgb(r, g, b)` or `rgba(r, g, b, a%)`.
    pub fn to_css_string(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!("rgba({}, {}, {}, {}%)", self.r, self.g, self.b, self.a)
        } else {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }

    pub fn from_hsv(hsv: Hsv, a: u8) -> Self {
        let (r, g, b) = math::hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self::from_rgba(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), a)
    }

    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.unit_rgb();
        let (h, s, v) = math::rgb_to_hsv(r, g, b);
        Hsv { h, s, v }
    }

    pub fn from_hsl(hsl: Hsl, a: u8) -> Self {
        let (r, g, b) = math::hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::from_rgba(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), a)
    }

    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.unit_rgb();
        let (h, s, l) = math::rgb_to_hsl(r, g, b);
        Hsl { h, s, l }
    }

    /// The colour as the renderer's colour type.
    pub fn to_peniko(&self) -> Color {
        Color::rgba8(self.r, self.g, self.b, alpha_to_byte(self.a))
    }

    fn unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl From<Hsv> for Hsl {
    fn from(hsv: Hsv) -> Self {
        let (h, s, l) = math::hsv_to_hsl(hsv.h, hsv.s, hsv.v);
        Hsl { h, s, l }
    }
}

impl From<Hsl> for Hsv {
    fn from(hsl: Hsl) -> Self {
        let (h, s, v) = math::hsl_to_hsv(hsl.h, hsl.s, hsl.l);
        Hsv { h, s, v }
    }
}

impl From<Rgba> for Colour {
    fn from(rgba: Rgba) -> Self {
        Self::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        colour.to_peniko()
    }
}

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string(true))
    }
}

fn unit_to_byte(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

// Integer rounding keeps 50% at 0x80.
fn alpha_from_byte(byte: u8) -> u8 {
    ((byte as u32 * 100 + 127) / 255) as u8
}

fn alpha_to_byte(percent: u8) -> u8 {
    ((percent.min(100) as u32 * 255 + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_in_delta;
    use expect_test::expect;

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Colour::default().to_rgba(), Rgba { r: 255, g: 255, b: 255, a: 100 });
    }

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Colour::from_hex("#F0A").unwrap(), Colour::from_rgb(255, 0, 170));
        assert_eq!(Colour::from_hex("3b82f6").unwrap(), Colour::from_rgb(59, 130, 246));
        assert_eq!(
            Colour::from_hex("#3B82F680").unwrap(),
            Colour::from_rgba(59, 130, 246, 50)
        );
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(Colour::from_hex(""), Err(ColourError::Empty));
        assert_eq!(Colour::from_hex("#"), Err(ColourError::Empty));
        assert_eq!(Colour::from_hex("#12345"), Err(ColourError::InvalidLength(5)));
        assert_eq!(Colour::from_hex("#12345G"), Err(ColourError::InvalidDigit('G')));
        assert_eq!(Colour::from_hex("#é12"), Err(ColourError::InvalidDigit('é')));
    }

    #[test]
    fn error_messages() {
        expect!["invalid hex length 4, expected 3, 6 or 8 digits"]
            .assert_eq(&ColourError::InvalidLength(4).to_string());
        expect!["invalid hex digit 'z'"].assert_eq(&ColourError::InvalidDigit('z').to_string());
    }

    #[test]
    fn hex_output() {
        let c = Colour::from_rgba(18, 52, 171, 50);
        assert_eq!(c.to_hex(false), "#1234AB");
        assert_eq!(c.to_hex(true), "#1234AB80");
        assert_eq!(Colour::from_rgb(0, 0, 0).to_hex(true), "#000000FF");
    }

    #[test]
    fn alpha_percent_survives_hex() {
        for a in 0..=100 {
            let c = Colour::from_rgba(1, 2, 3, a);
            assert_eq!(Colour::from_hex(&c.to_hex(true)).unwrap().a(), a);
        }
    }

    #[test]
    fn css_strings() {
        let c = Colour::from_rgba(255, 128, 0, 40);
        expect!["rgb(255, 128, 0)"].assert_eq(&c.to_css_string(false));
        expect!["rgba(255, 128, 0, 40%)"].assert_eq(&c.to_string());
    }

    #[test]
    fn from_str_trims() {
        let c: Colour = "  #00ff00 ".parse().unwrap();
        assert_eq!(c, Colour::from_rgb(0, 255, 0));
    }

    #[test]
    fn hsv_round_trip_rounds_to_bytes() {
        let c = Colour::from_hsv(Hsv { h: 0.5, s: 0.5, v: 0.5 }, 70);
        assert_eq!(c.to_rgba(), Rgba { r: 64, g: 128, b: 128, a: 70 });
        let hsv = Colour::from_rgb(255, 0, 0).to_hsv();
        assert_eq!(hsv, Hsv { h: 0.0, s: 1.0, v: 1.0 });
    }

    #[test]
    fn hsl_of_light_grey() {
        let hsl = Colour::from_rgb(230, 230, 230).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_in_delta!(hsl.l, 230.0 / 255.0, 1e-9);
        assert_eq!(Colour::from_hsl(Hsl { h: 0.0, s: 1.0, l: 0.5 }, 100), Colour::from_rgb(255, 0, 0));
    }

    #[test]
    fn hsv_hsl_conversions() {
        let hsl = Hsl::from(Hsv { h: 0.25, s: 1.0, v: 1.0 });
        assert_eq!(hsl, Hsl { h: 0.25, s: 1.0, l: 0.5 });
        let hsv = Hsv::from(Hsl { h: 0.25, s: 0.0, l: 1.0 });
        assert_eq!(hsv, Hsv { h: 0.25, s: 0.0, v: 1.0 });
    }

    #[test]
    fn channel_edits_clamp() {
        let c = Colour::from_rgb(10, 20, 30)
            .with_channel(Channel::Green, 200)
            .with_channel(Channel::Alpha, 250);
        assert_eq!(c.to_rgba(), Rgba { r: 10, g: 200, b: 30, a: 100 });
        assert_eq!(c.channel(Channel::Green), 200);
        assert_eq!(Colour::from_rgba(0, 0, 0, 180).a(), 100);
    }

    #[test]
    fn hex_alpha_detection() {
        assert!(Colour::hex_has_alpha("#11223344"));
        assert!(!Colour::hex_has_alpha("112233"));
    }
}
