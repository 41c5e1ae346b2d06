//! Hue slider (0.0–1.0, red → red).
//!
//! The hue strip does not depend on the picked colour, so it is rasterized
//! once and scaled to the track.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::debug;

use crate::constants;
use crate::drag::{self, PointerDrag};
use crate::math;
use crate::model::PickerModel;

/// Rasterize a one-pixel-high strip through every hue at full saturation.
fn rasterize_hue_strip(width: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * 4) as usize];
    let last = (width - 1).max(1) as f64;
    for px in 0..width {
        let (r, g, b) = math::hsv_to_rgb(px as f64 / last, 1.0, 1.0);
        let offset = (px * 4) as usize;
        buf[offset] = (r * 255.0 + 0.5) as u8;
        buf[offset + 1] = (g * 255.0 + 0.5) as u8;
        buf[offset + 2] = (b * 255.0 + 0.5) as u8;
        buf[offset + 3] = 255;
    }
    buf
}

pub(crate) struct HueSlider {
    id: ViewId,
    drag: PointerDrag<()>,
    hue: f64,
    width: f64,
    height: f64,
    on_change: Box<dyn Fn(f64)>,
    on_release: Box<dyn Fn()>,
    strip_img: Option<peniko::Image>,
    strip_hash: Vec<u8>,
}

/// Creates a horizontal hue slider reading its position from `state`.
pub(crate) fn hue_slider(
    state: RwSignal<PickerModel>,
    on_change: impl Fn(f64) + 'static,
    on_release: impl Fn() + 'static,
) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = state.get().hsv().h;
        id.update_state(h);
    });

    HueSlider {
        id,
        drag: PointerDrag::new(),
        hue: state.get_untracked().hsv().h,
        width: 0.0,
        height: 0.0,
        on_change: Box::new(on_change),
        on_release: Box::new(on_release),
        strip_img: None,
        strip_hash: Vec::new(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .width_full()
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(h) = drag::hue_at(self.width, x) {
            self.hue = h;
            (self.on_change)(h);
        }
    }

    fn ensure_strip_image(&mut self) {
        if self.strip_img.is_some() {
            return;
        }
        let width = constants::HUE_RASTER_WIDTH;
        let blob = Blob::new(Arc::new(rasterize_hue_strip(width)));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, width, 1);

        self.strip_hash = blob.id().to_le_bytes().to_vec();
        self.strip_img = Some(img);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hue) = state.downcast::<f64>() {
            self.hue = *hue;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.press(());
                debug!("hue drag started");
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag.moved().is_some() {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.drag.release() {
                    debug!(hue = self.hue, "hue drag ended");
                    (self.on_release)();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                if self.drag.cancel() {
                    (self.on_release)();
                }
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.width = layout.size.width as f64;
        self.height = layout.size.height as f64;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let (w, h) = (self.width, self.height);
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_strip_image();
        if let Some(ref img) = self.strip_img {
            // The track between the thumb centres spans the full hue range
            let r = constants::THUMB_RADIUS;
            cx.fill(&Rect::new(0.0, 0.0, r, h), Color::rgb8(255, 0, 0), 0.0);
            cx.fill(&Rect::new(w - r, 0.0, w, h), Color::rgb8(255, 0, 0), 0.0);
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.strip_hash,
                },
                Rect::new(r, 0.0, (w - r).max(r), h),
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = drag::track_thumb_x(w, self.hue);
        let thumb_cy = h / 2.0;
        let circle = Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_starts_and_ends_red() {
        let buf = rasterize_hue_strip(7);
        assert_eq!(&buf[0..4], &[255, 0, 0, 255]);
        assert_eq!(&buf[24..28], &[255, 0, 0, 255]);
        // One third of the way along is green
        assert_eq!(&buf[8..12], &[0, 255, 0, 255]);
    }
}
