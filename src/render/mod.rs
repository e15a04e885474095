//! Display lists and their CPU rasterization.

pub(crate) mod cpu;
pub(crate) mod display_list;
/// Raster images produced by the renderers.
pub mod raster;
