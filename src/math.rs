//! Conversions between RGB, HSV and HSL on normalised `f64` (0.0–1.0), plus
//! the keystroke sanitisers and channel parsing behind the text inputs.

/// Place chroma `c` and the secondary component `x` by hue sector.
fn sector(h6: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match h6.floor() as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

/// Shift a chroma/hue pair up by `m` to get RGB.
fn from_chroma(h: f64, c: f64, m: f64) -> (f64, f64, f64) {
    let h6 = (h * 6.0).rem_euclid(6.0);
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
    let (r, g, b) = sector(h6, c, x);
    (r + m, g + m, b + m)
}

/// HSV → RGB. A hue of 1.0 wraps back to red.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    from_chroma(h, c, v - c)
}

/// Hue term shared by the HSV and HSL conversions.
pub(crate) fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    }
}

/// RGB → HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue_from_rgb(r, g, b, max, delta), s, max)
}

/// HSL → RGB.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_chroma(h, c, l - c / 2.0)
}

/// RGB → HSL. All values 0.0–1.0. Achromatic input has hue and saturation 0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    if delta == 0.0 {
        return (0.0, 0.0, l);
    }
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    (hue_from_rgb(r, g, b, max, delta), s, l)
}

/// HSL → HSV, going through the shared chroma. Black has saturation 0.
pub(crate) fn hsl_to_hsv(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let v = l + c / 2.0;
    (h, if v == 0.0 { 0.0 } else { c / v }, v)
}

/// HSV → HSL. Black and white have saturation 0.
pub(crate) fn hsv_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let l = v - c / 2.0;
    let spread = 1.0 - (2.0 * l - 1.0).abs();
    (h, if spread <= 0.0 { 0.0 } else { c / spread }, l)
}

/// Keep hex digits only, at most eight of them, behind a `#`.
pub(crate) fn sanitize_hex(raw: &str) -> String {
    let mut out = String::with_capacity(9);
    out.push('#');
    out.extend(raw.chars().filter(|c| c.is_ascii_hexdigit()).take(8));
    out
}

/// Keep ASCII digits only.
pub(crate) fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a channel value typed by the user, clamped to `0..=max`.
///
/// Returns `None` when the text holds no digits at all.
pub(crate) fn parse_channel(raw: &str, max: u8) -> Option<u8> {
    let digits = sanitize_digits(raw);
    if digits.is_empty() {
        return None;
    }
    // Anything too long for u32 is past every channel max anyway.
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    Some(value.min(max as u32) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_in_delta;

    fn assert_rgb(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert_in_delta!(actual.0, expected.0, 1e-9);
        assert_in_delta!(actual.1, expected.1, 1e-9);
        assert_in_delta!(actual.2, expected.2, 1e-9);
    }

    #[test]
    fn hsv_primaries() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hue_one_wraps_to_red() {
        assert_rgb(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_rgb(hsv_to_rgb(0.42, 0.0, 0.25), (0.25, 0.25, 0.25));
    }

    #[test]
    fn rgb_to_hsv_secondaries() {
        let (h, s, v) = rgb_to_hsv(1.0, 1.0, 0.0);
        assert_in_delta!(h, 1.0 / 6.0, 1e-9);
        assert_in_delta!(s, 1.0, 1e-9);
        assert_in_delta!(v, 1.0, 1e-9);

        let (h, _, _) = rgb_to_hsv(1.0, 0.0, 1.0);
        assert_in_delta!(h, 5.0 / 6.0, 1e-9);
    }

    #[test]
    fn black_has_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hsl_sectors() {
        assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0));
        assert_rgb(hsl_to_rgb(0.5, 1.0, 0.5), (0.0, 1.0, 1.0));
        assert_rgb(hsl_to_rgb(0.0, 0.0, 0.75), (0.75, 0.75, 0.75));
        assert_rgb(hsl_to_rgb(2.0 / 3.0, 1.0, 0.25), (0.0, 0.0, 0.5));
    }

    #[test]
    fn rgb_to_hsl_light_and_dark_branches() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.5, 0.5);
        assert_in_delta!(h, 0.0, 1e-9);
        assert_in_delta!(s, 1.0, 1e-9);
        assert_in_delta!(l, 0.75, 1e-9);

        let (_, s, l) = rgb_to_hsl(0.5, 0.0, 0.0);
        assert_in_delta!(s, 1.0, 1e-9);
        assert_in_delta!(l, 0.25, 1e-9);
    }

    #[test]
    fn hsv_hsl_agree_through_rgb() {
        let (h, s, v) = (0.3, 0.6, 0.8);
        let (_, s_hsl, l) = hsv_to_hsl(h, s, v);
        assert_rgb(hsl_to_rgb(h, s_hsl, l), hsv_to_rgb(h, s, v));
        let (_, s_back, v_back) = hsl_to_hsv(h, s_hsl, l);
        assert_in_delta!(s_back, s, 1e-9);
        assert_in_delta!(v_back, v, 1e-9);
    }

    #[test]
    fn sanitize_hex_strips_and_truncates() {
        assert_eq!(sanitize_hex("#ff00zz11"), "#ff0011");
        assert_eq!(sanitize_hex("0123456789abcdef"), "#01234567");
        assert_eq!(sanitize_hex(""), "#");
    }

    #[test]
    fn parse_channel_clamps() {
        assert_eq!(parse_channel("12a3", 255), Some(123));
        assert_eq!(parse_channel("300", 255), Some(255));
        assert_eq!(parse_channel("150", 100), Some(100));
        assert_eq!(parse_channel("99999999999999999999", 255), Some(255));
        assert_eq!(parse_channel("-", 255), None);
        assert_eq!(parse_channel("", 100), None);
    }
}
