//! ANSI terminal preview of the card, framed in a double-line box.

use super::layout::{Line, Tone};

/// Outer width of the box, borders included
pub const BOX_WIDTH: usize = 98;

const RESET: &str = "\x1b[0m";
const BORDER: &str = "\x1b[96m";

fn ansi(tone: Tone) -> &'static str {
    match tone {
        Tone::Text => "\x1b[96m",    // Cyan
        Tone::Gray => "\x1b[90m",    // Gray
        Tone::Magenta => "\x1b[95m", // Magenta
        Tone::Green => "\x1b[92m",   // Green
        Tone::Red => "\x1b[91m",     // Red
        Tone::Orange => "\x1b[33m",  // Dark yellow
        Tone::Yellow => "\x1b[93m",  // Yellow
    }
}

/// Render the card for a terminal
///
/// With `color == false` the output is plain text (useful for pipes and
/// tests). Lines longer than the box are not truncated.
pub fn render_terminal(lines: &[Line], color: bool) -> String {
    let paint = |code: &'static str| if color { code } else { "" };
    let reset = paint(RESET);
    let border = paint(BORDER);
    let inner = BOX_WIDTH - 2;

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("{}╔{}╗{}", border, "═".repeat(inner), reset));

    for line in lines {
        let visible = line.plain_text().chars().count();
        let body = match line {
            Line::Blank => String::new(),
            Line::Text { text, tone, .. } => format!("{}{}{}", paint(ansi(*tone)), text, reset),
            Line::LinesOfCode { added, deleted, .. } => format!(
                "{gray}{prefix}{green}+{added}{gray}, {red}-{deleted}{gray} ){reset}",
                gray = paint(ansi(Tone::Gray)),
                green = paint(ansi(Tone::Green)),
                red = paint(ansi(Tone::Red)),
                prefix = line.loc_prefix(),
                added = added,
                deleted = deleted,
                reset = reset,
            ),
        };

        let padding = (inner - 2).saturating_sub(visible);
        let left = padding / 2;
        let right = padding - left;
        out.push(format!(
            "{border}║{reset} {}{}{} {border}║{reset}",
            " ".repeat(left),
            body,
            " ".repeat(right),
            border = border,
            reset = reset,
        ));
    }

    out.push(format!("{}╚{}╝{}", border, "═".repeat(inner), reset));
    out.join("\n")
}
