//! Theme-independent line model of the profile card.
//!
//! The card is a vertical list of centered lines. ASCII art is packed
//! tightly, text lines get normal spacing, and blank lines advance half a
//! text line. Both the SVG renderer and the terminal preview consume the
//! same list, so they always show the same content.

use super::art::{BANNER, CONTACT_HEADER, GITHUB_HEADER, SESSIONS_HEADER, SYSTEM_INFO_HEADER};
use crate::stats::StatsSnapshot;
use chrono::{NaiveDate, NaiveDateTime};

/// Width in characters that dotted stat lines are padded to
pub const CONTENT_WIDTH: usize = 90;

/// Vertical advance per line kind, in pixels
pub const LINE_HEIGHT_TIGHT: usize = 13;
pub const LINE_HEIGHT_NORMAL: usize = 20;
pub const LINE_HEIGHT_BLANK: usize = LINE_HEIGHT_NORMAL / 2;

pub const TAGLINE: &str = "ai developer  ·  prompt whisperer  ·  token burner";
pub const FOOTER: &str = "// TODO: write great footer";

/// Static facts shown under the system info header
pub const PROFILE_FACTS: [(&str, &str); 4] = [
    ("Location", "NYC, NY"),
    ("Shell", "living tissue over metal endoskeleton"),
    ("Languages", "english, bad english, help files"),
    ("Focus", "AI/ML, Developer Tools, waning"),
];

const LOC_KEY: &str = "Lines of Code:";
const LOC_MIN_DOTS: usize = 3;

/// Colour role of a line; doubles as the SVG CSS class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Gray,
    Magenta,
    Green,
    Red,
    Orange,
    Yellow,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Text => "text",
            Tone::Gray => "gray",
            Tone::Magenta => "magenta",
            Tone::Green => "green",
            Tone::Red => "red",
            Tone::Orange => "orange",
            Tone::Yellow => "yellow",
        }
    }
}

/// How far a line advances the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Tight,
    Normal,
    Blank,
}

impl Spacing {
    pub fn advance(self) -> usize {
        match self {
            Spacing::Tight => LINE_HEIGHT_TIGHT,
            Spacing::Normal => LINE_HEIGHT_NORMAL,
            Spacing::Blank => LINE_HEIGHT_BLANK,
        }
    }
}

/// One line of the card
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    Text {
        text: String,
        tone: Tone,
        spacing: Spacing,
    },
    /// Dotted "Lines of Code" line; added/deleted are coloured separately
    LinesOfCode {
        total: String,
        added: String,
        deleted: String,
    },
}

impl Line {
    fn art(text: &str, tone: Tone) -> Self {
        Line::Text {
            text: text.to_string(),
            tone,
            spacing: Spacing::Tight,
        }
    }

    fn text(text: impl Into<String>, tone: Tone) -> Self {
        Line::Text {
            text: text.into(),
            tone,
            spacing: Spacing::Normal,
        }
    }

    pub fn spacing(&self) -> Spacing {
        match self {
            Line::Blank => Spacing::Blank,
            Line::Text { spacing, .. } => *spacing,
            Line::LinesOfCode { .. } => Spacing::Normal,
        }
    }

    /// Plain text of the line, as it reads on screen
    pub fn plain_text(&self) -> String {
        match self {
            Line::Blank => String::new(),
            Line::Text { text, .. } => text.clone(),
            Line::LinesOfCode { added, deleted, .. } => {
                format!("{}+{}, -{} )", self.loc_prefix(), added, deleted)
            }
        }
    }

    /// `"Lines of Code: ..... {total} ( "`, the part before the coloured numbers
    pub fn loc_prefix(&self) -> String {
        match self {
            Line::LinesOfCode {
                total,
                added,
                deleted,
            } => {
                let value = format!("{} ( +{}, -{} )", total, added, deleted);
                let dots = CONTENT_WIDTH
                    .saturating_sub(LOC_KEY.chars().count() + value.chars().count() + 2)
                    .max(LOC_MIN_DOTS);
                format!("{} {} {} ( ", LOC_KEY, ".".repeat(dots), total)
            }
            _ => String::new(),
        }
    }
}

/// Build the full card for a snapshot
///
/// **Public** - shared by the SVG renderer and the terminal preview
///
/// The only time-dependent content is the `Last Updated` date, which is
/// passed in so identical inputs always produce identical lines.
pub fn build_card(snapshot: &StatsSnapshot, date: NaiveDate) -> Vec<Line> {
    compose(
        snapshot,
        Detail::Card,
        format!("Last Updated: {}", date.format("%Y-%m-%d")),
    )
}

/// Build the terminal preview
///
/// **Public** - used by the `preview` command
///
/// Shows everything on the card plus the token breakdown, the cost to the
/// cent, the remaining GitHub counters and a contact block. `login` adds a
/// profile link to the contact block when known.
pub fn build_preview(
    snapshot: &StatsSnapshot,
    login: Option<&str>,
    generated_at: NaiveDateTime,
) -> Vec<Line> {
    compose(
        snapshot,
        Detail::Preview { login },
        format!("Last Updated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
    )
}

#[derive(Clone, Copy)]
enum Detail<'a> {
    Card,
    Preview { login: Option<&'a str> },
}

fn compose(snapshot: &StatsSnapshot, detail: Detail<'_>, updated: String) -> Vec<Line> {
    let claude = &snapshot.claude;
    let github = &snapshot.github;
    let mut lines = Vec::new();

    lines.extend(BANNER.iter().map(|art| Line::art(art, Tone::Yellow)));
    blanks(&mut lines, 2);
    lines.push(Line::text(TAGLINE, Tone::Gray));
    blanks(&mut lines, 2);

    lines.extend(SYSTEM_INFO_HEADER.iter().map(|art| Line::art(art, Tone::Orange)));
    blanks(&mut lines, 1);
    for (key, value) in PROFILE_FACTS {
        lines.push(Line::text(stat_line(key, value), Tone::Gray));
    }
    blanks(&mut lines, 2);

    lines.extend(SESSIONS_HEADER.iter().map(|art| Line::art(art, Tone::Magenta)));
    blanks(&mut lines, 1);
    let mut session_stats = vec![
        ("Sessions", format_number(claude.sessions)),
        ("Messages", format_number(claude.messages)),
    ];
    match detail {
        Detail::Card => session_stats.extend([
            ("Total Tokens", format_number(claude.total_tokens)),
            ("Est. API Cost Saved", format_cost(claude.cost_estimate)),
        ]),
        Detail::Preview { .. } => session_stats.extend([
            ("Input Tokens", format_number(claude.input_tokens)),
            ("Output Tokens", format_number(claude.output_tokens)),
            ("Cache Created", format_number(claude.cache_creation)),
            ("Cache Read", format_number(claude.cache_read)),
            ("Total Tokens", format_number(claude.total_tokens)),
            ("Est. API Cost", format_cost_cents(claude.cost_estimate)),
        ]),
    }
    for (key, value) in session_stats {
        lines.push(Line::text(stat_line(key, &value), Tone::Gray));
    }
    blanks(&mut lines, 2);

    lines.extend(GITHUB_HEADER.iter().map(|art| Line::art(art, Tone::Green)));
    blanks(&mut lines, 1);
    let github_stats = [
        ("Repositories", github.repos),
        ("Contributed To", github.contributed_repos),
        ("Total Commits", github.commits),
        ("Pull Requests", github.prs),
    ];
    for (key, value) in github_stats {
        lines.push(Line::text(stat_line(key, &value.to_string()), Tone::Gray));
    }
    lines.push(Line::LinesOfCode {
        total: group_thousands(github.loc_total),
        added: group_thousands(github.loc_added as i64),
        deleted: group_thousands(github.loc_deleted as i64),
    });

    if let Detail::Preview { login } = detail {
        let counters = [
            ("Stars Earned", github.stars),
            ("Followers", github.followers),
            ("Following", github.following),
            ("Issues", github.issues),
        ];
        for (key, value) in counters {
            lines.push(Line::text(stat_line(key, &value.to_string()), Tone::Gray));
        }
        blanks(&mut lines, 2);

        lines.extend(CONTACT_HEADER.iter().map(|art| Line::art(art, Tone::Yellow)));
        blanks(&mut lines, 1);
        if let Some(login) = login {
            let profile = format!("github.com/{}", login);
            lines.push(Line::text(stat_line("GitHub", &profile), Tone::Gray));
        }
        let (key, location) = PROFILE_FACTS[0];
        lines.push(Line::text(stat_line(key, location), Tone::Gray));
    }
    blanks(&mut lines, 1);

    lines.push(Line::text(FOOTER, Tone::Gray));
    blanks(&mut lines, 1);
    lines.push(Line::text(updated, Tone::Gray));

    lines
}

fn blanks(lines: &mut Vec<Line>, count: usize) {
    lines.extend(std::iter::repeat(Line::Blank).take(count));
}

/// `"{key}: {dots} {value}"`, dot-padded to [`CONTENT_WIDTH`]
pub fn stat_line(key: &str, value: &str) -> String {
    let key = format!("{}:", key);
    let dots = CONTENT_WIDTH.saturating_sub(key.chars().count() + value.chars().count() + 2);
    format!("{} {} {}", key, ".".repeat(dots), value)
}

/// Compact count: `1.2M`, `3.4K`, or the plain number
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Whole dollars with thousands separators; halves round to even
pub fn format_cost(dollars: f64) -> String {
    format!("${}", group_thousands(dollars.round_ties_even() as i64))
}

/// Dollars and cents with thousands separators, e.g. `$1,234.57`
pub fn format_cost_cents(dollars: f64) -> String {
    let cents = (dollars * 100.0).round_ties_even() as i64;
    format!("${}.{:02}", group_thousands(cents / 100), (cents % 100).abs())
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0.4), "$0");
        assert_eq!(format_cost(12_345.6), "$12,346");
    }

    #[test]
    fn test_format_cost_rounds_halves_to_even() {
        assert_eq!(format_cost(0.5), "$0");
        assert_eq!(format_cost(2.5), "$2");
        assert_eq!(format_cost(3.5), "$4");
    }

    #[test]
    fn test_format_cost_cents() {
        assert_eq!(format_cost_cents(0.0), "$0.00");
        assert_eq!(format_cost_cents(34.7), "$34.70");
        assert_eq!(format_cost_cents(1_234.567), "$1,234.57");
    }

    #[test]
    fn test_preview_adds_detail_lines() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        let text: Vec<String> = build_preview(&StatsSnapshot::default(), Some("octocat"), at)
            .iter()
            .map(Line::plain_text)
            .collect();

        for key in ["Input Tokens:", "Cache Read:", "Stars Earned:", "Issues:", "GitHub:"] {
            assert!(text.iter().any(|line| line.starts_with(key)), "missing {}", key);
        }
        assert!(text.iter().any(|line| line.ends_with(" github.com/octocat")));
        assert_eq!(text.last().map(String::as_str), Some("Last Updated: 2026-03-09 14:05:00"));
    }

    #[test]
    fn test_preview_without_login_has_no_profile_link() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let lines = build_preview(&StatsSnapshot::default(), None, at);
        assert!(!lines.iter().any(|line| line.plain_text().starts_with("GitHub:")));
    }

    #[test]
    fn test_stat_line_is_padded_to_content_width() {
        let line = stat_line("Sessions", "42");
        assert_eq!(line.chars().count(), CONTENT_WIDTH);
        assert!(line.starts_with("Sessions: ."));
        assert!(line.ends_with(". 42"));
    }

    #[test]
    fn test_stat_line_overlong_value_has_no_dots() {
        let value = "x".repeat(100);
        assert_eq!(stat_line("Key", &value), format!("Key:  {}", value));
    }

    #[test]
    fn test_loc_line_keeps_minimum_dots() {
        let line = Line::LinesOfCode {
            total: "9".repeat(80),
            added: "1".to_string(),
            deleted: "2".to_string(),
        };
        assert!(line.loc_prefix().starts_with("Lines of Code: ... "));
    }

    #[test]
    fn test_loc_line_plain_text() {
        let line = Line::LinesOfCode {
            total: "1,000".to_string(),
            added: "1,500".to_string(),
            deleted: "500".to_string(),
        };
        let text = line.plain_text();
        assert_eq!(text.chars().count(), CONTENT_WIDTH);
        assert!(text.ends_with(" 1,000 ( +1,500, -500 )"));
    }

    #[test]
    fn test_card_ends_with_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let lines = build_card(&StatsSnapshot::default(), date);
        assert_eq!(
            lines.last().map(Line::plain_text),
            Some("Last Updated: 2026-03-09".to_string())
        );
    }
}
