//! Text inputs for hex and per-channel editing, plus the scrubbable channel
//! label and the copy button.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::{
    context::EventCx,
    event::Event,
    View, ViewId,
};
use tracing::{debug, warn};

use crate::colour::{Channel, Colour};
use crate::constants;
use crate::drag::{PointerDrag, Scrub};
use crate::math;
use crate::model::PickerModel;

/// Whether the hex text already shows `colour`, so rewriting it would only
/// disturb the user's typing. Alpha is only compared when the text has one.
pub(crate) fn hex_shows(text: &str, colour: Colour) -> bool {
    match Colour::from_hex(text) {
        Ok(shown) => {
            shown.r() == colour.r()
                && shown.g() == colour.g()
                && shown.b() == colour.b()
                && (!Colour::hex_has_alpha(text) || shown.a() == colour.a())
        }
        Err(_) => false,
    }
}

/// Whether a channel's text already shows `value`.
pub(crate) fn channel_shows(text: &str, channel: Channel, value: u8) -> bool {
    math::parse_channel(text, channel.max()) == Some(value)
}

/// Whether leaving an input picked a colour: its text parsed and the colour
/// moved since the input gained focus.
pub(crate) fn commit_picks(parsed: bool, focused_on: Option<Colour>, now: Colour) -> bool {
    parsed && focused_on.is_some_and(|before| before != now)
}

fn input_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(e: &Event) -> bool {
    match e {
        Event::KeyDown(ke) => {
            ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        }
        _ => false,
    }
}

/// The hex input.
///
/// Every keystroke that leaves a parseable hex string applies it through
/// `on_hex`. On Enter or focus loss the text is rewritten to its canonical
/// form (or back to the current colour when it does not parse). `on_commit`
/// fires only when the colour changed while the input had focus.
pub(crate) fn hex_input(
    state: RwSignal<PickerModel>,
    lbl: String,
    include_alpha: bool,
    on_hex: impl Fn(&str) + 'static,
    on_commit: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let text = RwSignal::new(state.get_untracked().colour().to_hex(include_alpha));

    // Model → text, unless the text already shows the colour
    create_effect(move |_| {
        let colour = state.get().colour();
        let current = text.get_untracked();
        if !hex_shows(&current, colour) {
            text.set(colour.to_hex(include_alpha));
        }
    });

    // Text → model on every keystroke that parses
    create_effect(move |_| {
        let sanitized = math::sanitize_hex(&text.get());
        let colour = state.get_untracked().colour();
        if Colour::from_hex(&sanitized).is_ok() && !hex_shows(&sanitized, colour) {
            on_hex(&sanitized);
        }
    });

    let focused_on = RwSignal::new(None::<Colour>);
    let commit = move || {
        let raw = text.get_untracked();
        let sanitized = math::sanitize_hex(&raw);
        let colour = state.get_untracked().colour();
        let parsed = match Colour::from_hex(&sanitized) {
            Ok(_) => true,
            Err(err) => {
                warn!(input = %raw, %err, "rejected hex input");
                false
            }
        };
        let canonical = colour.to_hex(include_alpha);
        if raw != canonical {
            text.set(canonical);
        }
        if commit_picks(parsed, focused_on.get_untracked(), colour) {
            on_commit();
        }
        focused_on.set(Some(colour));
    };
    let commit_on_enter = commit.clone();

    v_stack((
        text_input(text)
            .style(|s| input_style(s, constants::HEX_INPUT_WIDTH))
            .on_event(floem::event::EventListener::FocusGained, move |_| {
                focused_on.set(Some(state.get_untracked().colour()));
                EventPropagation::Continue
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    commit_on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || lbl.clone()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A numeric input for one channel with a scrubbable label underneath.
pub(crate) fn channel_input(
    state: RwSignal<PickerModel>,
    channel: Channel,
    lbl: String,
    on_value: impl Fn(Channel, u8) + Clone + 'static,
    on_commit: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let text = RwSignal::new(state.get_untracked().colour().channel(channel).to_string());

    create_effect(move |_| {
        let value = state.get().colour().channel(channel);
        if !channel_shows(&text.get_untracked(), channel, value) {
            text.set(value.to_string());
        }
    });

    let on_typed = on_value.clone();
    create_effect(move |_| {
        let raw = text.get();
        let current = state.get_untracked().colour().channel(channel);
        if let Some(value) = math::parse_channel(&raw, channel.max()) {
            if value != current {
                on_typed(channel, value);
            }
        }
    });

    let on_input_commit = on_commit.clone();
    let focused_on = RwSignal::new(None::<Colour>);
    let commit = move || {
        let raw = text.get_untracked();
        let colour = state.get_untracked().colour();
        let formatted = colour.channel(channel).to_string();
        let parsed = math::parse_channel(&raw, channel.max()).is_some();
        if !parsed {
            warn!(?channel, input = %raw, "rejected channel input");
        }
        if raw != formatted {
            text.set(formatted);
        }
        if commit_picks(parsed, focused_on.get_untracked(), colour) {
            on_input_commit();
        }
        focused_on.set(Some(colour));
    };
    let commit_on_enter = commit.clone();

    v_stack((
        text_input(text)
            .style(|s| input_style(s, constants::INPUT_WIDTH))
            .on_event(floem::event::EventListener::FocusGained, move |_| {
                focused_on.set(Some(state.get_untracked().colour()));
                EventPropagation::Continue
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    commit_on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        scrub_label(state, channel, lbl, on_value, on_commit),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A channel label that changes the channel when dragged sideways.
pub(crate) struct ScrubLabel {
    id: ViewId,
    channel: Channel,
    state: RwSignal<PickerModel>,
    drag: PointerDrag<Scrub>,
    on_value: Box<dyn Fn(Channel, u8)>,
    on_release: Box<dyn Fn()>,
}

fn scrub_label(
    state: RwSignal<PickerModel>,
    channel: Channel,
    lbl: String,
    on_value: impl Fn(Channel, u8) + 'static,
    on_release: impl Fn() + 'static,
) -> ScrubLabel {
    let id = ViewId::new();
    let text = label(move || lbl.clone()).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    });
    id.set_children(vec![text.into_any()]);

    ScrubLabel {
        id,
        channel,
        state,
        drag: PointerDrag::new(),
        on_value: Box::new(on_value),
        on_release: Box::new(on_release),
    }
    .style(|s| s.cursor(floem::style::CursorStyle::ColResize))
}

impl View for ScrubLabel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let base = self.state.get_untracked().colour().channel(self.channel);
                self.drag
                    .press(Scrub::new(base, e.pos.x, self.channel.max()));
                debug!(channel = ?self.channel, base, "scrub started");
                EventPropagation::Stop
            }
            Event::PointerMove(e) => match self.drag.moved() {
                Some(scrub) => {
                    let value = scrub.value_at(e.pos.x);
                    let current = self.state.get_untracked().colour().channel(self.channel);
                    if value != current {
                        (self.on_value)(self.channel, value);
                    }
                    EventPropagation::Stop
                }
                None => EventPropagation::Continue,
            },
            Event::PointerUp(_) => {
                if self.drag.release() {
                    debug!(channel = ?self.channel, "scrub ended");
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
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => debug!(text, "copied to clipboard"),
        Err(err) => warn!(%err, "clipboard unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_shows_ignores_form() {
        let c = Colour::from_rgba(0x33, 0xBB, 0x88, 40);
        assert!(hex_shows("#3b8", c));
        assert!(hex_shows("#33BB88", c));
        assert!(!hex_shows("#33BB88FF", c));
        assert!(hex_shows(&c.to_hex(true), c));
        assert!(!hex_shows("#33BB8", c));
        assert!(!hex_shows("#33BB89", c));
    }

    #[test]
    fn commit_needs_a_parsed_change_since_focus() {
        let red = Colour::from_rgb(255, 0, 0);
        let blue = Colour::from_rgb(0, 0, 255);
        assert!(commit_picks(true, Some(red), blue));
        // tabbed through without editing
        assert!(!commit_picks(true, Some(red), red));
        // rejected text
        assert!(!commit_picks(false, Some(red), blue));
        assert!(!commit_picks(true, None, blue));
    }

    #[test]
    fn channel_shows_clamped_value() {
        assert!(channel_shows("255", Channel::Red, 255));
        assert!(channel_shows("999", Channel::Red, 255));
        assert!(channel_shows("100", Channel::Alpha, 100));
        assert!(!channel_shows("", Channel::Green, 0));
        assert!(!channel_shows("12", Channel::Blue, 13));
    }
}
