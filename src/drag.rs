//! Pointer-drag state machine and the pointer ↔ colour-space mappings.
//!
//! A drag starts on pointer-down over a control, follows every pointer move
//! (even outside the control, since the view holds the active pointer) and
//! ends on pointer-up or focus loss.

use floem::kurbo::{Point, Size};

use crate::colour::Hsv;
use crate::constants;

/// Where a drag is in its lifetime. `A` is whatever the control needs to
/// remember from the press (nothing for the sliders, the base value for a
/// scrub).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragState<A> {
    Idle,
    Dragging(A),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerDrag<A> {
    state: DragState<A>,
}

impl<A> PointerDrag<A> {
    pub(crate) fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Begin a drag. A second press while dragging restarts it.
    pub(crate) fn press(&mut self, anchor: A) {
        self.state = DragState::Dragging(anchor);
    }

    /// The press anchor, if a move at this point belongs to a drag.
    pub(crate) fn moved(&self) -> Option<&A> {
        match &self.state {
            DragState::Dragging(anchor) => Some(anchor),
            DragState::Idle => None,
        }
    }

    /// End the drag. Returns whether one was in progress.
    pub(crate) fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Focus loss ends a drag the same way a release does.
    pub(crate) fn cancel(&mut self) -> bool {
        self.release()
    }

    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }
}

/// Saturation/value under `pos` in a field of `size`, keeping `hue`.
///
/// The pointer is clamped into the field first. Left→right is saturation
/// 0→1, bottom→top is value 0→1.
pub(crate) fn field_hsv(size: Size, pos: Point, hue: f64) -> Option<Hsv> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }
    let x = pos.x.clamp(0.0, size.width);
    let y = pos.y.clamp(0.0, size.height);
    Some(Hsv {
        h: hue,
        s: x / size.width,
        v: 1.0 - y / size.height,
    })
}

/// Marker centre for `hsv` in a field of `size`.
pub(crate) fn field_marker(size: Size, hsv: Hsv) -> Point {
    Point::new(
        hsv.s.clamp(0.0, 1.0) * size.width,
        (1.0 - hsv.v.clamp(0.0, 1.0)) * size.height,
    )
}

/// Fraction 0.0–1.0 along a slider track of `width`, inset by the thumb
/// radius at both ends.
pub(crate) fn track_fraction(width: f64, x: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return None;
    }
    Some(((x - r) / usable).clamp(0.0, 1.0))
}

/// Thumb centre x for a fraction along a track of `width`.
pub(crate) fn track_thumb_x(width: f64, fraction: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + fraction.clamp(0.0, 1.0) * (width - 2.0 * r).max(0.0)
}

/// Hue under `x` on the hue slider.
pub(crate) fn hue_at(width: f64, x: f64) -> Option<f64> {
    track_fraction(width, x)
}

/// Alpha percentage under `x` on the alpha slider (left transparent, right
/// opaque).
#[cfg(feature = "alpha")]
pub(crate) fn alpha_at(width: f64, x: f64) -> Option<u8> {
    track_fraction(width, x).map(|f| (f * 100.0).round() as u8)
}

/// Horizontal scrub over a channel label: the value follows the pointer at
/// one step per [`constants::SCRUB_STEP`] pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scrub {
    pub(crate) base_value: u8,
    pub(crate) base_x: f64,
    pub(crate) max: u8,
}

impl Scrub {
    pub(crate) fn new(base_value: u8, base_x: f64, max: u8) -> Self {
        Self {
            base_value,
            base_x,
            max,
        }
    }

    pub(crate) fn value_at(&self, x: f64) -> u8 {
        let change = ((x - self.base_x) / constants::SCRUB_STEP).floor();
        (self.base_value as f64 + change).clamp(0.0, self.max as f64) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_in_delta;

    #[test]
    fn drag_lifecycle() {
        let mut drag = PointerDrag::<()>::new();
        assert!(drag.moved().is_none());
        assert!(!drag.release());

        drag.press(());
        assert!(drag.is_dragging());
        assert!(drag.moved().is_some());
        assert!(drag.release());
        assert!(drag.moved().is_none());

        drag.press(());
        assert!(drag.cancel());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn repress_replaces_anchor() {
        let mut drag = PointerDrag::new();
        drag.press(Scrub::new(10, 0.0, 255));
        drag.press(Scrub::new(20, 5.0, 255));
        assert_eq!(drag.moved().map(|s| s.base_value), Some(20));
    }

    #[test]
    fn field_corners() {
        let size = Size::new(200.0, 100.0);
        let top_right = field_hsv(size, Point::new(200.0, 0.0), 0.25).unwrap();
        assert_eq!(top_right, Hsv { h: 0.25, s: 1.0, v: 1.0 });
        let bottom_left = field_hsv(size, Point::new(0.0, 100.0), 0.25).unwrap();
        assert_eq!(bottom_left, Hsv { h: 0.25, s: 0.0, v: 0.0 });
    }

    #[test]
    fn field_clamps_outside_pointer() {
        let size = Size::new(100.0, 100.0);
        let hsv = field_hsv(size, Point::new(-40.0, 250.0), 0.0).unwrap();
        assert_eq!((hsv.s, hsv.v), (0.0, 0.0));
        let hsv = field_hsv(size, Point::new(130.0, -5.0), 0.0).unwrap();
        assert_eq!((hsv.s, hsv.v), (1.0, 1.0));
    }

    #[test]
    fn empty_field_has_no_colour() {
        assert!(field_hsv(Size::ZERO, Point::ORIGIN, 0.0).is_none());
    }

    #[test]
    fn marker_inverts_field() {
        let size = Size::new(160.0, 120.0);
        let pos = Point::new(40.0, 90.0);
        let hsv = field_hsv(size, pos, 0.6).unwrap();
        let back = field_marker(size, hsv);
        assert_in_delta!(back.x, pos.x, 1e-9);
        assert_in_delta!(back.y, pos.y, 1e-9);
    }

    #[test]
    fn hue_track_inset_and_clamp() {
        let w = 100.0 + 2.0 * constants::THUMB_RADIUS;
        assert_eq!(hue_at(w, 0.0), Some(0.0));
        assert_eq!(hue_at(w, w + 50.0), Some(1.0));
        assert_in_delta!(hue_at(w, constants::THUMB_RADIUS + 25.0).unwrap(), 0.25, 1e-9);
        assert_in_delta!(track_thumb_x(w, 0.25), constants::THUMB_RADIUS + 25.0, 1e-9);
        assert!(hue_at(constants::THUMB_RADIUS, 3.0).is_none());
    }

    #[cfg(feature = "alpha")]
    #[test]
    fn alpha_track_is_percent() {
        let w = 100.0 + 2.0 * constants::THUMB_RADIUS;
        assert_eq!(alpha_at(w, constants::THUMB_RADIUS + 37.0), Some(37));
        assert_eq!(alpha_at(w, w), Some(100));
    }

    #[test]
    fn scrub_steps_every_two_pixels() {
        let scrub = Scrub::new(100, 50.0, 255);
        assert_eq!(scrub.value_at(50.0), 100);
        assert_eq!(scrub.value_at(51.0), 100);
        assert_eq!(scrub.value_at(54.0), 102);
        assert_eq!(scrub.value_at(49.0), 99);
        assert_eq!(scrub.value_at(-1000.0), 0);
        assert_eq!(scrub.value_at(1000.0), 255);
    }

    #[test]
    fn scrub_respects_channel_max() {
        let scrub = Scrub::new(90, 0.0, 100);
        assert_eq!(scrub.value_at(40.0), 100);
    }
}
