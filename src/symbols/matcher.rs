use super::overlap::resolve_overlaps;
use super::peaks::extract_peaks;
use super::{DetectedSymbol, MatchOptions, Template};
use crate::binarize::{flip180, invert, threshold, LIGHT};
use crate::convolve::{convolve_general, smooth, Kernel};
use crate::error::DetectResult;
use crate::image::PixelGrid;
use log::debug;
use std::time::Instant;

/// Binarized page and its inverse, shared by every template.
#[derive(Clone, Debug)]
pub struct PreparedPage {
    pub binary: PixelGrid,
    pub inverted: PixelGrid,
}

impl PreparedPage {
    /// Optionally blur, then binarize and invert a grayscale page.
    pub fn new(gray: &PixelGrid, options: &MatchOptions) -> DetectResult<Self> {
        let binary = match options.smoothing {
            Some(s) => threshold(&smooth(gray, s.size, s.sigma)?, options.binarize_threshold),
            None => threshold(gray, options.binarize_threshold),
        };
        let inverted = invert(&binary);
        Ok(Self { binary, inverted })
    }
}

/// Normalized matched-filter response of `template` over the page.
///
/// Each value is the fraction of template pixels agreeing with the page
/// (paper on paper, ink on ink) when the template is centred there. Pixels
/// closer to the border than the template radius are zero.
pub fn correlation_surface(
    page: &PreparedPage,
    template: &Template,
    binarize_threshold: f32,
) -> DetectResult<PixelGrid> {
    let t_binary = threshold(template.grid(), binarize_threshold);
    let t_inverted = invert(&t_binary);
    let paper = convolve_general(&page.binary, &Kernel::from_grid(&flip180(&t_binary))?)?;
    let ink = convolve_general(&page.inverted, &Kernel::from_grid(&flip180(&t_inverted))?)?;
    let max_score = LIGHT * LIGHT * (template.width() * template.height()) as f32;
    Ok((&paper + &ink).map(|v| v / max_score))
}

/// Every accepted instance of one template on the page.
pub fn match_template(
    page: &PreparedPage,
    template: &Template,
    options: &MatchOptions,
) -> DetectResult<Vec<DetectedSymbol>> {
    let start = Instant::now();
    let surface = correlation_surface(page, template, options.binarize_threshold)?;
    let (ry, rx) = (template.height() / 2, template.width() / 2);
    let peaks = extract_peaks(
        &surface,
        (template.height(), template.width()),
        (ry, rx),
        options.acceptance,
    );
    let symbols: Vec<DetectedSymbol> = peaks
        .into_iter()
        .map(|p| DetectedSymbol {
            row: p.row - ry,
            col: p.col - rx,
            width: template.width(),
            height: template.height(),
            kind: template.kind(),
            pitch: None,
            confidence: p.score.clamp(0.0, 1.0),
        })
        .collect();
    debug!(
        "match_template: kind={} size={}x{} matches={} elapsed_ms={:.3}",
        template.kind(),
        template.height(),
        template.width(),
        symbols.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(symbols)
}

/// Match all templates on a grayscale page.
///
/// Templates are validated against the page before any matching starts.
/// The result is in raster order of bounding-box corners; cross-template
/// overlaps are resolved when `options.overlap_fraction` is set.
pub fn detect_symbols(
    gray: &PixelGrid,
    templates: &[Template],
    options: &MatchOptions,
) -> DetectResult<Vec<DetectedSymbol>> {
    for t in templates {
        t.check_fits(gray.rows, gray.cols)?;
    }
    let page = PreparedPage::new(gray, options)?;

    #[cfg(feature = "parallel")]
    let per_template: Vec<Vec<DetectedSymbol>> = {
        use rayon::prelude::*;
        templates
            .par_iter()
            .map(|t| match_template(&page, t, options))
            .collect::<DetectResult<_>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let per_template: Vec<Vec<DetectedSymbol>> = templates
        .iter()
        .map(|t| match_template(&page, t, options))
        .collect::<DetectResult<_>>()?;

    let mut symbols: Vec<DetectedSymbol> = per_template.into_iter().flatten().collect();
    if let Some(fraction) = options.overlap_fraction {
        symbols = resolve_overlaps(symbols, fraction);
    }
    symbols.sort_by(|a, b| a.row.cmp(&b.row).then(a.col.cmp(&b.col)));
    Ok(symbols)
}
