//! One full refresh: items → sizes → placements → cards → one string.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{CARD_WIDTH, DEFAULT_URGENCY_MARKER, STATUS_TIME_FORMAT};
use crate::models::{AlertItem, CardSize, DisplayItem, Grid};

use super::ansi::CLEAR_SCREEN;
use super::card::CardRenderer;
use super::metrics::{card_size, hugging_width};
use super::placer::Placer;
use super::theme::ColorTheme;

/// Output of one refresh, ready to be written in a single flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedScreen {
    pub output: String,
    /// Cards drawn.
    pub placed: usize,
    /// Cards dropped because they did not fit.
    pub skipped: usize,
}

/// Builds a screen of cards from raw alert strings.
///
/// `split` turns a raw alert into `(category, body)`; the composer knows
/// nothing about the feed's text conventions beyond that.
pub struct ScreenComposer<'a, F> {
    theme: &'a ColorTheme,
    split: F,
    card_width: usize,
    urgency_marker: String,
}

impl<'a, F> ScreenComposer<'a, F>
where
    F: Fn(&str) -> (String, String),
{
    pub fn new(theme: &'a ColorTheme, split: F) -> Self {
        Self {
            theme,
            split,
            card_width: CARD_WIDTH,
            urgency_marker: DEFAULT_URGENCY_MARKER.to_string(),
        }
    }

    pub fn with_card_width(mut self, width: usize) -> Self {
        self.card_width = width;
        self
    }

    pub fn with_urgency_marker(mut self, marker: impl Into<String>) -> Self {
        self.urgency_marker = marker.into();
        self
    }

    /// Distinct alerts (sorted, exact-text dedup) plus the status card,
    /// shuffled into draw order.
    pub fn build_items<R: Rng + ?Sized>(
        &self,
        raw_alerts: &[String],
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<DisplayItem> {
        let distinct: BTreeSet<&str> = raw_alerts.iter().map(String::as_str).collect();

        let mut items: Vec<DisplayItem> = distinct
            .into_iter()
            .map(|raw| {
                let (category, body) = (self.split)(raw);
                DisplayItem::Alert(AlertItem::new(category, body, &self.urgency_marker))
            })
            .collect();
        items.push(DisplayItem::Status {
            body: format!("Last updated: {}", now.format(STATUS_TIME_FORMAT)),
        });

        items.shuffle(rng);
        items
    }

    /// Footprint of an item: alert cards use the configured width, the
    /// status card hugs its text.
    pub fn size_of(&self, item: &DisplayItem) -> CardSize {
        let width = match item {
            DisplayItem::Alert(_) => self.card_width,
            DisplayItem::Status { body } => hugging_width(body),
        };
        card_size(item.body(), width, item.is_urgent())
    }

    /// Clear the screen and draw every item that fits on `grid`.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        raw_alerts: &[String],
        grid: Grid,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> ComposedScreen {
        let items = self.build_items(raw_alerts, now, rng);
        let sizes: Vec<CardSize> = items.iter().map(|item| self.size_of(item)).collect();
        let spots = Placer::new(grid).place(&sizes, rng);

        let mut output = String::from(CLEAR_SCREEN);
        let mut placed = 0;
        for ((item, size), spot) in items.iter().zip(&sizes).zip(spots) {
            let Some(at) = spot else {
                continue;
            };
            let style = self.theme.resolve(item.category());
            let title = item.title();
            let card = CardRenderer::new(style, size.width);
            output.push_str(&card.render(title.as_deref(), item.body(), item.is_urgent(), at));
            placed += 1;
        }

        ComposedScreen {
            output,
            placed,
            skipped: items.len() - placed,
        }
    }
}
