pub mod grid;
pub mod header;
/// Style and alignment types shared by both layers.
pub mod style;
