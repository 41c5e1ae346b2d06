//! Alpha slider with checkerboard background + transparent-to-opaque gradient.

use floem::kurbo::{Circle, Rect, Shape};
use floem::peniko::{Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::debug;

use crate::checkerboard;
use crate::colour::Colour;
use crate::constants;
use crate::drag::{self, PointerDrag};
use crate::model::PickerModel;

pub(crate) struct AlphaSlider {
    id: ViewId,
    drag: PointerDrag<()>,
    colour: Colour,
    width: f64,
    height: f64,
    on_change: Box<dyn Fn(u8)>,
    on_release: Box<dyn Fn()>,
}

/// Creates an alpha slider. Left is transparent, right is opaque.
pub(crate) fn alpha_slider(
    state: RwSignal<PickerModel>,
    on_change: impl Fn(u8) + 'static,
    on_release: impl Fn() + 'static,
) -> AlphaSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = state.get().colour();
        id.update_state(c);
    });

    AlphaSlider {
        id,
        drag: PointerDrag::new(),
        colour: state.get_untracked().colour(),
        width: 0.0,
        height: 0.0,
        on_change: Box::new(on_change),
        on_release: Box::new(on_release),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .width_full()
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl AlphaSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(a) = drag::alpha_at(self.width, x) {
            self.colour.set_alpha(a);
            (self.on_change)(a);
        }
    }
}

impl View for AlphaSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(colour) = state.downcast::<Colour>() {
            self.colour = *colour;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.press(());
                debug!("alpha drag started");
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
                    debug!(alpha = self.colour.a(), "alpha drag ended");
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
        checkerboard::paint_checkerboard(cx, rect);

        // Transparent (left) → opaque (right)
        let opaque = self.colour.with_alpha(100).to_peniko();
        let transparent = self.colour.with_alpha(0).to_peniko();
        let gradient =
            Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([transparent, opaque]);
        // Convert to BezPath so the vello renderer uses the general path
        // handler (its Rect fast-path only supports solid colors).
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        let radius = constants::THUMB_RADIUS;
        let thumb_x = drag::track_thumb_x(w, self.colour.a() as f64 / 100.0);
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
