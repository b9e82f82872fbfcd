//! Runtime text style settings
//!
//! [`OverlayParams`] is the resolved form of an [`OverlayStyleConfig`]: fonts
//! are loaded handles and every metric color is filled in.

use hudstyle_types::{FontSpec, Metric, OverlayStyleConfig, PackedColor, overlay_colors};
use tracing::warn;

use crate::fonts::{FontHandle, FontLibrary};

/// Font and color for one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricStyle {
    /// `None` means "use the global font"
    pub font: Option<FontHandle>,
    pub color: PackedColor,
}

impl MetricStyle {
    fn with_default_color(metric: Metric) -> Self {
        Self {
            font: None,
            color: overlay_colors::for_metric(metric),
        }
    }
}

/// Overlay text styling, one [`MetricStyle`] per metric plus global defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayParams {
    /// Global font. `None` if the configured font could not be loaded.
    pub font: Option<FontHandle>,
    pub text_color: PackedColor,
    pub cpu: MetricStyle,
    pub gpu: MetricStyle,
    pub vram: MetricStyle,
    pub ram: MetricStyle,
    pub fps: MetricStyle,
    pub frametime: MetricStyle,
    pub custom: MetricStyle,
    pub title: MetricStyle,
}

impl OverlayParams {
    /// Params with the given global defaults and default per-metric colors
    pub fn new(font: Option<FontHandle>, text_color: PackedColor) -> Self {
        Self {
            font,
            text_color,
            cpu: MetricStyle::with_default_color(Metric::Cpu),
            gpu: MetricStyle::with_default_color(Metric::Gpu),
            vram: MetricStyle::with_default_color(Metric::Vram),
            ram: MetricStyle::with_default_color(Metric::Ram),
            fps: MetricStyle::with_default_color(Metric::Fps),
            frametime: MetricStyle::with_default_color(Metric::Frametime),
            custom: MetricStyle::with_default_color(Metric::Custom),
            title: MetricStyle::with_default_color(Metric::Title),
        }
    }

    /// Load every font named in `config` and build the runtime params.
    ///
    /// Fonts that fail to load are logged and left unset, so those metrics
    /// fall back to the global font at resolve time.
    pub fn from_config(config: &OverlayStyleConfig, fonts: &mut FontLibrary) -> Self {
        let global = load_or_warn(fonts, &config.font, "global");
        let mut params = Self::new(global, config.text_color);

        for &metric in Metric::all() {
            let font = config
                .metric(metric)
                .and_then(|style| style.font.as_ref())
                .and_then(|spec| load_or_warn(fonts, spec, metric.name()));
            let color = config.metric_color(metric);

            if let Some(style) = params.style_mut(metric) {
                style.font = font;
                style.color = color;
            }
        }

        params
    }

    /// Style slot for a metric, `None` for `Metric::Unknown`
    pub fn style(&self, metric: Metric) -> Option<&MetricStyle> {
        match metric {
            Metric::Cpu => Some(&self.cpu),
            Metric::Gpu => Some(&self.gpu),
            Metric::Vram => Some(&self.vram),
            Metric::Ram => Some(&self.ram),
            Metric::Fps => Some(&self.fps),
            Metric::Frametime => Some(&self.frametime),
            Metric::Custom => Some(&self.custom),
            Metric::Title => Some(&self.title),
            Metric::Unknown => None,
        }
    }

    pub fn style_mut(&mut self, metric: Metric) -> Option<&mut MetricStyle> {
        match metric {
            Metric::Cpu => Some(&mut self.cpu),
            Metric::Gpu => Some(&mut self.gpu),
            Metric::Vram => Some(&mut self.vram),
            Metric::Ram => Some(&mut self.ram),
            Metric::Fps => Some(&mut self.fps),
            Metric::Frametime => Some(&mut self.frametime),
            Metric::Custom => Some(&mut self.custom),
            Metric::Title => Some(&mut self.title),
            Metric::Unknown => None,
        }
    }

    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_color(mut self, color: PackedColor) -> Self {
        self.text_color = color;
        self
    }

    /// Override one metric's font. No-op for `Metric::Unknown`.
    pub fn with_metric_font(mut self, metric: Metric, font: FontHandle) -> Self {
        if let Some(style) = self.style_mut(metric) {
            style.font = Some(font);
        }
        self
    }

    /// Override one metric's color. No-op for `Metric::Unknown`.
    pub fn with_metric_color(mut self, metric: Metric, color: PackedColor) -> Self {
        if let Some(style) = self.style_mut(metric) {
            style.color = color;
        }
        self
    }
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self::new(None, overlay_colors::WHITE)
    }
}

fn load_or_warn(fonts: &mut FontLibrary, spec: &FontSpec, slot: &str) -> Option<FontHandle> {
    match fonts.load(spec) {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, slot, family = %spec.family, "Font unavailable, using fallback");
            None
        }
    }
}
