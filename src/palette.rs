//! Preset palettes and the recent-colours row.

use std::collections::VecDeque;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::colour::Colour;
use crate::constants;
use crate::error::ColourResult;

/// Rows of preset colours.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    rows: Vec<Vec<Colour>>,
}

impl Palette {
    pub fn new(rows: Vec<Vec<Colour>>) -> Self {
        Self { rows }
    }

    /// Build from rows of hex strings; the first bad entry is the error.
    pub fn from_hex_rows<R, S>(rows: R) -> ColourResult<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|hex| Colour::from_hex(hex.as_ref()))
                    .collect::<ColourResult<Vec<_>>>()
            })
            .collect::<ColourResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<Colour>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }
}

/// Most-recent-first list of picked colours without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentColours {
    colours: VecDeque<Colour>,
    capacity: usize,
}

impl RecentColours {
    pub fn new(capacity: usize) -> Self {
        Self {
            colours: VecDeque::new(),
            capacity,
        }
    }

    /// Move `colour` to the front. Returns false when it was already there.
    pub fn push(&mut self, colour: Colour) -> bool {
        if self.capacity == 0 || self.colours.front() == Some(&colour) {
            return false;
        }
        self.colours.retain(|c| *c != colour);
        self.colours.push_front(colour);
        self.colours.truncate(self.capacity);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

/// Light swatches need an outline against the light picker background.
pub(crate) fn needs_outline(colour: Colour) -> bool {
    colour.to_hsl().l > constants::LIGHT_SWATCH_LIGHTNESS
}

fn swatch(colour: Colour, on_pick: impl Fn(Colour) + 'static) -> impl IntoView {
    empty()
        .style(move |s| {
            let s = s
                .size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(3.0)
                .background(colour.to_peniko())
                .cursor(floem::style::CursorStyle::Pointer);
            if needs_outline(colour) {
                s.border(1.0).border_color(Color::rgba8(200, 200, 200, 128))
            } else {
                s
            }
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            on_pick(colour);
        })
}

fn swatch_row(colours: Vec<Colour>, on_pick: impl Fn(Colour) + Clone + 'static) -> impl IntoView {
    stack_from_iter(colours.into_iter().map(move |c| swatch(c, on_pick.clone())))
        .style(|s| s.flex_row().gap(4.0))
}

/// The preset rows. Clicking a swatch picks it.
pub(crate) fn palette_view(
    palette: &Palette,
    on_pick: impl Fn(Colour) + Clone + 'static,
) -> impl IntoView {
    stack_from_iter(
        palette
            .rows()
            .iter()
            .cloned()
            .map(move |row| swatch_row(row, on_pick.clone())),
    )
    .style(|s| s.flex_col().gap(4.0))
}

/// The recent-colours row, rebuilt whenever the list changes.
pub(crate) fn recent_view(
    recent: RwSignal<RecentColours>,
    on_pick: impl Fn(Colour) + Clone + 'static,
) -> impl IntoView {
    dyn_stack(
        move || recent.get().iter().copied().collect::<Vec<_>>(),
        |c| *c,
        move |c| swatch(c, on_pick.clone()),
    )
    .style(|s| s.flex_row().gap(4.0).min_height(constants::SWATCH_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColourError;

    #[test]
    fn palette_from_hex() {
        let p = Palette::from_hex_rows([["#FFF", "#000"], ["#F00", "#0F0"]]).unwrap();
        assert_eq!(p.rows().len(), 2);
        assert_eq!(p.rows()[1][0], Colour::from_rgb(255, 0, 0));
        assert!(!p.is_empty());
    }

    #[test]
    fn palette_reports_first_bad_entry() {
        let err = Palette::from_hex_rows(vec![vec!["#FFF", "nope"]]).unwrap_err();
        assert_eq!(err, ColourError::InvalidDigit('n'));
    }

    #[test]
    fn empty_rows_count_as_empty() {
        assert!(Palette::new(vec![vec![]]).is_empty());
    }

    #[test]
    fn recent_is_mru_and_bounded() {
        let mut recent = RecentColours::new(3);
        let red = Colour::from_rgb(255, 0, 0);
        let green = Colour::from_rgb(0, 255, 0);
        let blue = Colour::from_rgb(0, 0, 255);
        let white = Colour::default();

        assert!(recent.push(red));
        assert!(recent.push(green));
        assert!(!recent.push(green));
        assert!(recent.push(blue));
        assert!(recent.push(red));
        assert_eq!(recent.iter().copied().collect::<Vec<_>>(), vec![red, blue, green]);

        recent.push(white);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent.iter().copied().collect::<Vec<_>>(), vec![white, red, blue]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut recent = RecentColours::new(0);
        assert!(!recent.push(Colour::default()));
        assert!(recent.is_empty());
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut recent = RecentColours::new(usize::MAX);
        assert!(recent.push(Colour::default()));
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn light_swatches_get_outlined() {
        assert!(needs_outline(Colour::from_rgb(250, 250, 250)));
        assert!(!needs_outline(Colour::from_rgb(200, 200, 200)));
        assert!(!needs_outline(Colour::from_rgb(255, 0, 0)));
    }
}
