//! Per-metric font and color selection
//!
//! Given a metric name and the overlay params, pick the font handle and text
//! color to draw that metric with. A metric-specific font wins when set,
//! otherwise the global font is used. Metric colors are always filled in by
//! the config layer, so a known metric returns its own color unconditionally.
//!
//! Both lookups are pure: they borrow the params for the duration of the call
//! and never fail. Unknown names resolve to the global defaults.

use hudstyle_types::Metric;
use tiny_skia::Color;

use crate::fonts::FontHandle;
use crate::params::OverlayParams;
use crate::utils::color_from_packed;

/// Font to render `name` with.
///
/// Returns `None` when there are no params, or when the global font itself is
/// unset and no metric override applies.
pub fn font_for(name: &str, params: Option<&OverlayParams>) -> Option<FontHandle> {
    params.and_then(|p| font_for_metric(Metric::from_name(name), p))
}

/// Text color to render `name` with. Opaque white when there are no params.
pub fn color_for(name: &str, params: Option<&OverlayParams>) -> Color {
    match params {
        Some(p) => color_for_metric(Metric::from_name(name), p),
        None => Color::WHITE,
    }
}

pub fn font_for_metric(metric: Metric, params: &OverlayParams) -> Option<FontHandle> {
    params
        .style(metric)
        .and_then(|style| style.font)
        .or(params.font)
}

pub fn color_for_metric(metric: Metric, params: &OverlayParams) -> Color {
    let packed = params
        .style(metric)
        .map_or(params.text_color, |style| style.color);
    color_from_packed(packed)
}
