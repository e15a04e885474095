use crate::assets::fonts::{FontRegistry, FontSource};
use crate::compose::request::CompositionRequest;
use crate::config::request::CreditsRequest;
use crate::foundation::error::CreditsResult;
use crate::layout::grid::{GridLayout, PatronGridParams, render_patrons};
use crate::layout::header::{HeaderLayout, HeaderParams, render_header};

/// Rendered layers and the geometry they were built from.
#[derive(Clone, Debug)]
pub struct CreditsOutput {
    /// Encoder input.
    pub composition: CompositionRequest,
    /// Header geometry.
    pub header_layout: HeaderLayout,
    /// Patron grid geometry.
    pub grid_layout: GridLayout,
    /// Where the header face was loaded from.
    pub header_font: FontSource,
    /// Where the patron face was loaded from.
    pub patron_font: FontSource,
}

/// Validate `req`, render both layers and plan the scroll.
///
/// Pure apart from reading font files through `fonts`; nothing is written to disk.
#[tracing::instrument(
    skip_all,
    fields(patrons = req.patrons.len(), resolution = %req.resolution, duration = req.duration)
)]
pub fn render_credits(req: &CreditsRequest, fonts: &FontRegistry) -> CreditsResult<CreditsOutput> {
    req.validate()?;

    let resolution = req.resolution;
    let scale = resolution.scale_factor();

    let header_style = req.message_style.to_spec();
    let header_font = fonts.resolve(header_style.font, header_style.bold);
    let header = render_header(
        &HeaderParams {
            message: &req.message,
            width: resolution.width(),
            style: header_style,
            align: req.message_style.align,
            background: req.background_color,
            scale,
        },
        header_font.face,
    )?;

    let patron_style = req.patron_style.to_spec();
    let patron_font = fonts.resolve(patron_style.font, patron_style.bold);
    let patrons = render_patrons(
        &PatronGridParams {
            names: &req.patrons,
            frame_width: resolution.width(),
            config: req.layout_config(),
            style: patron_style,
            scale,
        },
        patron_font.face,
    )?;

    let composition = CompositionRequest::new(
        header.image,
        patrons.image,
        resolution,
        req.background_color,
        req.duration_secs(),
    )?;
    tracing::info!(
        header_height = composition.header_height(),
        patron_height = composition.patron_height(),
        speed = composition.plan.speed_px_per_s,
        "credits layers ready"
    );

    Ok(CreditsOutput {
        composition,
        header_layout: header.layout,
        grid_layout: patrons.layout,
        header_font: header_font.source,
        patron_font: patron_font.source,
    })
}
