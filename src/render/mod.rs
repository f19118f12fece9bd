//! Profile card rendering.
//!
//! This module turns a stats snapshot into:
//! - one SVG document per theme (dark and light)
//! - an ANSI text preview for the terminal
//!
//! Rendering is deterministic: the same snapshot and date always give the
//! same bytes, so the publish guard can compare files directly.

pub mod art;
pub mod layout;
pub mod svg;
pub mod terminal;
pub mod theme;

pub use layout::{
    build_card, build_preview, format_cost, format_cost_cents, format_number, group_thousands,
    stat_line, Line,
};
pub use svg::{escape_xml, generate_svg};
pub use terminal::render_terminal;
pub use theme::Theme;

use crate::stats::StatsSnapshot;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// One rendered SVG, not yet written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub theme: Theme,
    pub svg: String,
}

impl RenderedCard {
    pub fn file_name(&self) -> &'static str {
        self.theme.file_name()
    }
}

/// Render both themes from one snapshot
///
/// **Public** - both cards are always produced together
pub fn render_cards(snapshot: &StatsSnapshot, date: NaiveDate) -> Vec<RenderedCard> {
    let lines = build_card(snapshot, date);

    let (tight, normal, blank) = svg::spacing_counts(&lines);
    debug!("Card layout: {} art, {} text, {} blank lines", tight, normal, blank);

    Theme::ALL
        .iter()
        .map(|&theme| RenderedCard {
            theme,
            svg: generate_svg(&lines, theme),
        })
        .collect()
}

/// Render the detailed terminal preview from one snapshot
pub fn render_preview(
    snapshot: &StatsSnapshot,
    login: Option<&str>,
    generated_at: NaiveDateTime,
    color: bool,
) -> String {
    render_terminal(&build_preview(snapshot, login, generated_at), color)
}
