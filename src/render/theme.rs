//! Colour themes for the two card variants.

use crate::utils::config::{DARK_MODE_FILE, LIGHT_MODE_FILE};
use std::fmt;

/// Card variant; one file is rendered per theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
}

/// Fill colours used by the SVG stylesheet
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub gray: &'static str,
    pub magenta: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
}

// Shared by both themes
pub const RED: &str = "#f85149";
pub const ORANGE: &str = "#f0883e";

impl Theme {
    /// Both themes, in render order
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: "#0d1117",
                text: "#39c5cf",
                gray: "#6e7681",
                magenta: "#bc8cff",
                green: "#3fb950",
                yellow: "#d29922",
            },
            Theme::Light => Palette {
                background: "#ffffff",
                text: "#0969da",
                gray: "#656d76",
                magenta: "#8250df",
                green: "#1a7f37",
                yellow: "#9a6700",
            },
        }
    }

    /// Output file name, relative to the work directory
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => DARK_MODE_FILE,
            Theme::Light => LIGHT_MODE_FILE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}
