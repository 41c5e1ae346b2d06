//! Sizing, colour, and styling constants for the picker.

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Marker circle radius on the colour field
pub const MARKER_RADIUS: f64 = 7.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the field and slider tracks
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Minimum height of the colour field
pub const FIELD_MIN_HEIGHT: f32 = 120.0;

/// Side of the square raster the colour field is drawn from
pub const FIELD_RASTER_SIZE: u32 = 64;

/// Width of the hue strip raster
pub const HUE_RASTER_WIDTH: u32 = 360;

/// Channel input field width
pub const INPUT_WIDTH: f32 = 32.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Pixels of horizontal pointer travel per step when scrubbing a label
pub const SCRUB_STEP: f64 = 2.0;

/// Palette swatch side
pub const SWATCH_SIZE: f32 = 16.0;

/// Preview swatch side
pub const PREVIEW_SIZE: f32 = 32.0;

/// Swatches lighter than this get a border so they stay visible
pub const LIGHT_SWATCH_LIGHTNESS: f64 = 0.9;

/// Default number of recent colours kept
pub const RECENT_CAPACITY: usize = 8;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
