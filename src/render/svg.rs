//! SVG card generation.
//!
//! Lays out the card lines top to bottom, centered on a rounded background,
//! with a theme-specific stylesheet. Output is a pure function of the lines
//! and the theme.

use super::layout::{Line, Spacing};
use super::theme::{Theme, ORANGE, RED};
use log::debug;

/// Canvas width in pixels
pub const CARD_WIDTH: usize = 800;
pub const FONT_SIZE: usize = 14;

/// First baseline and bottom margin
const Y_START: usize = 30;
const BOTTOM_MARGIN: usize = 30;

/// Total canvas height for a list of lines
pub fn card_height(lines: &[Line]) -> usize {
    Y_START + lines.iter().map(|l| l.spacing().advance()).sum::<usize>() + BOTTOM_MARGIN
}

/// Render the card as a standalone SVG document
pub fn generate_svg(lines: &[Line], theme: Theme) -> String {
    let width = CARD_WIDTH;
    let height = card_height(lines);
    let center = width / 2;

    let mut svg = header(width, height, theme);

    let mut y = Y_START;
    for line in lines {
        match line {
            Line::Blank => {}
            Line::Text { text, tone, .. } => {
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"{}\">{}</text>\n",
                    center,
                    y,
                    tone.class(),
                    escape_xml(text)
                ));
            }
            Line::LinesOfCode { added, deleted, .. } => {
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">",
                    center, y
                ));
                svg.push_str(&format!(
                    "<tspan class=\"gray\">{}</tspan>",
                    escape_xml(&line.loc_prefix())
                ));
                svg.push_str(&format!("<tspan class=\"green\">+{}</tspan>", added));
                svg.push_str("<tspan class=\"gray\">, </tspan>");
                svg.push_str(&format!("<tspan class=\"red\">-{}</tspan>", deleted));
                svg.push_str("<tspan class=\"gray\"> )</tspan>");
                svg.push_str("</text>\n");
            }
        }

        y += line.spacing().advance();
    }

    svg.push_str("</svg>");

    debug!(
        "Generated {} card: {} lines, {}x{} ({} bytes)",
        theme,
        lines.len(),
        width,
        height,
        svg.len()
    );

    svg
}

fn header(width: usize, height: usize, theme: Theme) -> String {
    let c = theme.palette();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<style>
@font-face {{
    src: local('Consolas'), local('Monaco'), local('Menlo');
    font-family: 'MonoFallback';
    font-display: swap;
}}
text {{
    font-family: 'MonoFallback', ui-monospace, SFMono-Regular, 'SF Mono', Menlo, Consolas, monospace;
    font-size: {font_size}px;
    white-space: pre;
    dominant-baseline: text-before-edge;
}}
.text {{ fill: {text}; }}
.gray {{ fill: {gray}; }}
.magenta {{ fill: {magenta}; }}
.green {{ fill: {green}; }}
.red {{ fill: {red}; }}
.orange {{ fill: {orange}; }}
.yellow {{ fill: {yellow}; }}
</style>
<rect width="{width}" height="{height}" fill="{background}" rx="10"/>
"#,
        width = width,
        height = height,
        font_size = FONT_SIZE,
        text = c.text,
        gray = c.gray,
        magenta = c.magenta,
        green = c.green,
        red = RED,
        orange = ORANGE,
        yellow = c.yellow,
        background = c.background,
    )
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Number of lines of each spacing kind
pub fn spacing_counts(lines: &[Line]) -> (usize, usize, usize) {
    lines.iter().fold((0, 0, 0), |(tight, normal, blank), line| match line.spacing() {
        Spacing::Tight => (tight + 1, normal, blank),
        Spacing::Normal => (tight, normal + 1, blank),
        Spacing::Blank => (tight, normal, blank + 1),
    })
}
