//! Output writers for rendered cards.

pub mod svg;

// Re-export main functions
pub use svg::{write_cards, write_svg};
