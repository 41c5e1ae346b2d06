//! Saturation/value field for the current hue.
//!
//! Horizontal position is saturation, vertical position is value (top is
//! bright). The field is rasterized at a fixed resolution per hue and
//! scaled to the widget size by the renderer.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect, Size};
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

use crate::colour::Hsv;
use crate::constants;
use crate::drag::{self, PointerDrag};
use crate::math;
use crate::model::PickerModel;

/// Rasterize the field for `hue`: white→hue across, then darkened to black
/// going down.
fn rasterize_field(side: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (side * side * 4) as usize];
    let last = (side - 1).max(1) as f64;
    for py in 0..side {
        let v = 1.0 - py as f64 / last;
        let row_offset = (py * side * 4) as usize;
        for px in 0..side {
            let s = px as f64 / last;
            let (r, g, b) = math::hsv_to_rgb(hue, s, v);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct ColourField {
    id: ViewId,
    drag: PointerDrag<()>,
    hsv: Hsv,
    marker_colour: Color,
    size: Size,
    on_change: Box<dyn Fn(Hsv)>,
    on_release: Box<dyn Fn()>,
    field_img: Option<peniko::Image>,
    field_hash: Vec<u8>,
    /// Hue the cached image was rasterized for, in tenths of a degree.
    cached_hue: Option<u32>,
}

/// Creates the colour field.
///
/// `on_change` gets the hsv under the pointer on press and on every move of
/// a drag; `on_release` fires once when the drag ends.
pub(crate) fn colour_field(
    state: RwSignal<PickerModel>,
    on_change: impl Fn(Hsv) + 'static,
    on_release: impl Fn() + 'static,
) -> ColourField {
    let id = ViewId::new();

    create_effect(move |_| {
        let model = state.get();
        id.update_state(model);
    });

    let model = state.get_untracked();
    ColourField {
        id,
        drag: PointerDrag::new(),
        hsv: model.hsv(),
        marker_colour: model.colour().with_alpha(100).to_peniko(),
        size: Size::ZERO,
        on_change: Box::new(on_change),
        on_release: Box::new(on_release),
        field_img: None,
        field_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.width_full()
            .min_height(constants::FIELD_MIN_HEIGHT)
            .flex_grow(1.0)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColourField {
    fn update_from_pointer(&mut self, pos: Point) {
        if let Some(hsv) = drag::field_hsv(self.size, pos, self.hsv.h) {
            self.hsv = hsv;
            (self.on_change)(hsv);
        }
    }

    fn ensure_field_image(&mut self) {
        let key = (self.hsv.h * 3600.0).round() as u32;
        if self.cached_hue == Some(key) && self.field_img.is_some() {
            return;
        }
        let side = constants::FIELD_RASTER_SIZE;
        let pixels = rasterize_field(side, self.hsv.h);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.field_hash = blob.id().to_le_bytes().to_vec();
        self.field_img = Some(img);
        self.cached_hue = Some(key);
    }
}

impl View for ColourField {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(model) = state.downcast::<PickerModel>() {
            self.hsv = model.hsv();
            self.marker_colour = model.colour().with_alpha(100).to_peniko();
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.press(());
                debug!("colour field drag started");
                self.update_from_pointer(e.pos);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag.moved().is_some() {
                    self.update_from_pointer(e.pos);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.drag.release() {
                    debug!("colour field drag ended");
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
        self.size = Size::new(layout.size.width as f64, layout.size.height as f64);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width;
        let h = self.size.height;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_field_image();
        if let Some(ref img) = self.field_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.field_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Marker: filled with the picked colour, ringed so it shows on any background
        let centre = drag::field_marker(self.size, self.hsv);
        let marker = Circle::new(centre, constants::MARKER_RADIUS);
        cx.fill(&marker, self.marker_colour, 0.0);
        cx.stroke(&marker, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let outer = Circle::new(centre, constants::MARKER_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
