mod common;

use chrono::NaiveDate;
use common::sample_snapshot;
use nfo_stats::render::{render_cards, render_preview, Theme};
use nfo_stats::stats::StatsSnapshot;
use pretty_assertions::assert_eq;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_rendering_is_deterministic() {
    let first = render_cards(&sample_snapshot(), date());
    let second = render_cards(&sample_snapshot(), date());
    assert_eq!(first, second);
}

#[test]
fn test_both_themes_rendered() {
    let cards = render_cards(&sample_snapshot(), date());
    let themes: Vec<Theme> = cards.iter().map(|card| card.theme).collect();
    assert_eq!(themes, vec![Theme::Dark, Theme::Light]);
    assert_eq!(cards[0].file_name(), "dark_mode.svg");
    assert_eq!(cards[1].file_name(), "light_mode.svg");
}

#[test]
fn test_themes_differ_only_in_palette() {
    let cards = render_cards(&sample_snapshot(), date());
    assert_ne!(cards[0].svg, cards[1].svg);

    let text_of = |svg: &str| -> Vec<String> {
        svg.lines()
            .filter(|line| line.contains("<text"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(text_of(&cards[0].svg), text_of(&cards[1].svg));
}

#[test]
fn test_card_shows_date_and_stats() {
    let cards = render_cards(&sample_snapshot(), date());
    let svg = &cards[0].svg;

    assert!(svg.contains("Last Updated: 2026-10-19"));
    assert!(svg.contains("1,337") || svg.contains("1.3K"));
    assert!(svg.contains("987"));
    assert!(svg.contains("+150,000"));
    assert!(svg.contains("-40,000"));
}

#[test]
fn test_only_date_changes_between_days() {
    let today = render_cards(&sample_snapshot(), date());
    let tomorrow = render_cards(&sample_snapshot(), date().succ_opt().unwrap());

    let changed: Vec<(&str, &str)> = today[0]
        .svg
        .lines()
        .zip(tomorrow[0].svg.lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(changed.len(), 1);
    assert!(changed[0].1.contains("2026-10-20"));
}

#[test]
fn test_zero_snapshot_renders() {
    let cards = render_cards(&StatsSnapshot::default(), date());
    assert!(cards[0].svg.starts_with("<svg") || cards[0].svg.starts_with("<?xml"));
    assert!(cards[0].svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_preview_without_color_has_no_escapes() {
    let at = date().and_hms_opt(21, 15, 7).unwrap();
    let preview = render_preview(&sample_snapshot(), Some("octocat"), at, false);

    assert!(!preview.contains('\x1b'));
    assert!(preview.contains("Last Updated: 2026-10-19 21:15:07"));
}

#[test]
fn test_preview_shows_breakdown_missing_from_card() {
    let at = date().and_hms_opt(21, 15, 7).unwrap();
    let preview = render_preview(&sample_snapshot(), Some("octocat"), at, false);

    for expected in [
        "Input Tokens: ",
        " 1.2M",
        "Output Tokens: ",
        " 340.0K",
        "Cache Created: ",
        " 50.0K",
        "Cache Read: ",
        " 9.0M",
        "Est. API Cost: ",
        " $34.70",
        "Stars Earned: ",
        "Followers: ",
        "Following: ",
        "Issues: ",
        "github.com/octocat",
    ] {
        assert!(preview.contains(expected), "preview is missing {:?}", expected);
    }

    let card = &render_cards(&sample_snapshot(), date())[0].svg;
    assert!(!card.contains("Stars Earned"));
    assert!(!card.contains("Input Tokens"));
}
