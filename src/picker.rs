//! The picker widget: wires the field, sliders, inputs and palettes to one
//! shared [`PickerModel`] and reports user edits through the change callback.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use tracing::{debug, warn};

#[cfg(feature = "alpha")]
use crate::alpha_slider::alpha_slider;
use crate::colour::{Channel, Colour, Hsv};
use crate::colour_field::colour_field;
use crate::constants;
use crate::hue_slider::hue_slider;
use crate::inputs::{channel_input, copy_button, hex_input};
use crate::model::PickerModel;
use crate::options::PickerOptions;
use crate::palette::{palette_view, recent_view, RecentColours};

/// An embeddable colour picker.
///
/// Cloning is cheap and every clone drives the same picker. Edits made
/// through the UI are reported to the change callback; [`set_colour`]
/// is not.
///
/// [`set_colour`]: ColourPicker::set_colour
#[derive(Clone)]
pub struct ColourPicker {
    state: RwSignal<PickerModel>,
    recent: RwSignal<RecentColours>,
    options: Rc<PickerOptions>,
    on_change: Rc<dyn Fn(Colour)>,
}

impl ColourPicker {
    pub fn new(on_change: impl Fn(Colour) + 'static, options: PickerOptions) -> Self {
        debug!(initial = %options.initial_colour, "creating colour picker");
        Self {
            state: RwSignal::new(PickerModel::new(options.initial_colour)),
            recent: RwSignal::new(RecentColours::new(options.recent_capacity)),
            options: Rc::new(options),
            on_change: Rc::new(on_change),
        }
    }

    /// The colour currently shown.
    pub fn colour(&self) -> Colour {
        self.state.get_untracked().colour()
    }

    /// Show `colour` in every control without reporting it.
    pub fn set_colour(&self, colour: Colour) {
        debug!(%colour, "colour set");
        self.state.update(|m| m.set_colour(colour));
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn recent_colours(&self) -> RecentColours {
        self.recent.get_untracked()
    }

    /// Apply a user edit to the model and report the result.
    fn report(&self, edit: impl FnOnce(&mut PickerModel) -> Colour) -> Colour {
        let mut next = None;
        self.state.update(|m| next = Some(edit(m)));
        let colour = next.unwrap_or_else(|| self.colour());
        (self.on_change)(colour);
        colour
    }

    pub(crate) fn apply_hsv(&self, hsv: Hsv) -> Colour {
        self.report(|m| m.apply_hsv(hsv))
    }

    pub(crate) fn apply_hue(&self, hue: f64) -> Colour {
        self.report(|m| m.apply_hue(hue))
    }

    pub(crate) fn apply_channel(&self, channel: Channel, value: u8) -> Colour {
        self.report(|m| m.apply_channel(channel, value))
    }

    /// Reports only when `hex` parses.
    pub(crate) fn apply_hex(&self, hex: &str) -> Option<Colour> {
        let mut model = self.state.get_untracked();
        match model.apply_hex(hex) {
            Ok(_) => Some(self.report(|m| {
                *m = model;
                model.colour()
            })),
            Err(err) => {
                warn!(hex, %err, "hex not applied");
                None
            }
        }
    }

    /// A swatch was clicked: show it, report it, and remember it.
    pub(crate) fn pick(&self, colour: Colour) {
        self.report(|m| {
            m.set_colour(colour);
            colour
        });
        self.remember();
    }

    /// Record the current colour in the recent list (when shown).
    pub(crate) fn remember(&self) {
        if !self.options.show_recent_colours {
            return;
        }
        let colour = self.colour();
        self.recent.update(|r| {
            r.push(colour);
        });
    }

    /// Build the picker's view tree.
    pub fn view(&self) -> impl IntoView {
        crate::load_icon_font();
        let state = self.state;
        let options = self.options.clone();
        let show_alpha = options.alpha_enabled();

        let field = {
            let (p, q) = (self.clone(), self.clone());
            colour_field(
                state,
                move |hsv| {
                    p.apply_hsv(hsv);
                },
                move || q.remember(),
            )
        };

        let hue = {
            let (p, q) = (self.clone(), self.clone());
            hue_slider(
                state,
                move |h| {
                    p.apply_hue(h);
                },
                move || q.remember(),
            )
        };

        #[cfg(feature = "alpha")]
        let alpha = {
            let (p, q) = (self.clone(), self.clone());
            alpha_slider(
                state,
                move |a| {
                    p.apply_channel(Channel::Alpha, a);
                },
                move || q.remember(),
            )
            .style(move |s| s.apply_if(!show_alpha, |s| s.hide()))
        };

        let preview = empty().style(move |s| {
            s.size(constants::PREVIEW_SIZE, constants::PREVIEW_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(state.get().colour().to_peniko())
        });

        let hex = {
            let (p, q) = (self.clone(), self.clone());
            hex_input(
                state,
                options.labels.hex.clone(),
                show_alpha,
                move |hex| {
                    p.apply_hex(hex);
                },
                move || q.remember(),
            )
        };
        let copy = copy_button(move || state.get_untracked().colour().to_hex(show_alpha));

        let channels = {
            let picker = self.clone();
            stack_from_iter(options.channels().iter().map(move |&channel| {
                let (p, q) = (picker.clone(), picker.clone());
                channel_input(
                    state,
                    channel,
                    picker.options.labels.channel(channel).to_string(),
                    move |ch, v| {
                        p.apply_channel(ch, v);
                    },
                    move || q.remember(),
                )
            }))
            .style(|s| s.flex_row().gap(constants::GAP / 2.0).justify_center())
        };

        let palette = {
            let p = self.clone();
            let empty_palette = options.palette.is_empty();
            palette_view(&options.palette, move |c| p.pick(c))
                .style(move |s| s.apply_if(empty_palette, |s| s.hide()))
        };

        let recent = {
            let p = self.clone();
            let show_recent = options.show_recent_colours;
            recent_view(self.recent, move |c| p.pick(c))
                .style(move |s| s.apply_if(!show_recent, |s| s.hide()))
        };

        v_stack((
            field,
            hue,
            #[cfg(feature = "alpha")]
            alpha,
            h_stack((preview, hex, copy))
                .style(|s| s.gap(constants::GAP).items_center().justify_center()),
            channels,
            palette,
            recent,
        ))
        .style(|s| {
            s.gap(constants::GAP)
                .padding(constants::PADDING)
                .size_full()
                .background(Color::rgb8(242, 242, 242))
        })
    }
}
