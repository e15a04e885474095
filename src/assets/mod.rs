/// Hex color parsing.
pub mod color;
pub mod fonts;
