//! Shared configuration types for hudstyle
//!
//! This crate contains the serializable style configuration for the performance
//! overlay: metric identifiers, packed colors and font specs. The runtime side
//! (loaded fonts, resolution) lives in hudstyle-overlay.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Metric Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// A statistic the overlay can display with its own text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Gpu,
    Vram,
    Ram,
    Fps,
    Frametime,
    Custom,
    Title,
    /// Any name outside the known set. Resolves to the global defaults.
    Unknown,
}

impl Metric {
    /// Parse a metric name. Matching is case-sensitive; anything else is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "cpu" => Self::Cpu,
            "gpu" => Self::Gpu,
            "vram" => Self::Vram,
            "ram" => Self::Ram,
            "fps" => Self::Fps,
            "frametime" => Self::Frametime,
            "custom" => Self::Custom,
            "title" => Self::Title,
            _ => Self::Unknown,
        }
    }

    /// Config key for this metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Vram => "vram",
            Self::Ram => "ram",
            Self::Fps => "fps",
            Self::Frametime => "frametime",
            Self::Custom => "custom",
            Self::Title => "title",
            Self::Unknown => "unknown",
        }
    }

    /// All known metrics in display order
    pub fn all() -> &'static [Metric] {
        &[
            Self::Cpu,
            Self::Gpu,
            Self::Vram,
            Self::Ram,
            Self::Fps,
            Self::Frametime,
            Self::Custom,
            Self::Title,
        ]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Packed Color
// ─────────────────────────────────────────────────────────────────────────────

/// Four 8-bit channels packed into a u32.
///
/// Layout matches `IM_COL32`: red in the low byte, then green, blue and alpha
/// in the high byte. `0xFF0000FF` is opaque red.
///
/// Serialized as a `#RRGGBBAA` string. Deserializes from that string form
/// (`RRGGBB` is accepted with full alpha) or from the raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24)
    }

    /// Unpack into [r, g, b, a] bytes
    pub const fn to_rgba8(self) -> [u8; 4] {
        let v = self.0;
        [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// Format as `#RRGGBBAA`
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

impl Default for PackedColor {
    fn default() -> Self {
        overlay_colors::WHITE
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PackedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PackedColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Packed(u32),
            Hex(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Packed(value) => Ok(Self(value)),
            Repr::Hex(text) => Self::from_hex(&text)
                .ok_or_else(|| D::Error::custom(format!("invalid color '{text}'"))),
        }
    }
}

/// Default colors per metric
pub mod overlay_colors {
    use super::{Metric, PackedColor};

    pub const WHITE: PackedColor = PackedColor::from_rgba8(255, 255, 255, 255);
    pub const CPU: PackedColor = PackedColor::from_rgba8(0x2E, 0x97, 0xCB, 255); // Blue
    pub const GPU: PackedColor = PackedColor::from_rgba8(0x2E, 0x97, 0x62, 255); // Green
    pub const VRAM: PackedColor = PackedColor::from_rgba8(0xAD, 0x64, 0xC1, 255); // Purple
    pub const RAM: PackedColor = PackedColor::from_rgba8(0xC2, 0x66, 0x93, 255); // Pink
    pub const FPS: PackedColor = PackedColor::from_rgba8(0xEB, 0x5B, 0x5B, 255); // Red
    pub const FRAMETIME: PackedColor = PackedColor::from_rgba8(0x00, 0xFF, 0x00, 255);

    /// Get the default text color for a metric
    pub fn for_metric(metric: Metric) -> PackedColor {
        match metric {
            Metric::Cpu => CPU,
            Metric::Gpu => GPU,
            Metric::Vram => VRAM,
            Metric::Ram => RAM,
            Metric::Fps => FPS,
            Metric::Frametime => FRAMETIME,
            Metric::Custom | Metric::Title | Metric::Unknown => WHITE,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Font Spec
// ─────────────────────────────────────────────────────────────────────────────

/// Font as written in the config file, before it is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name, or one of `sans-serif`, `serif`, `monospace`
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: f32,
    /// Font file to load. `family` is then matched against this file's faces only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_font_family() -> String {
    "Noto Sans".to_string()
}
fn default_font_size() -> f32 {
    24.0
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
            path: None,
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            path: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay Style Config
// ─────────────────────────────────────────────────────────────────────────────

/// Per-metric style overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricStyleConfig {
    /// Falls back to the global font when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    /// Falls back to the metric's default color when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PackedColor>,
}

/// Text styling for the overlay: a global font and color plus one table per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyleConfig {
    #[serde(default)]
    pub font: FontSpec,
    #[serde(default)]
    pub text_color: PackedColor,
    #[serde(default)]
    pub cpu: MetricStyleConfig,
    #[serde(default)]
    pub gpu: MetricStyleConfig,
    #[serde(default)]
    pub vram: MetricStyleConfig,
    #[serde(default)]
    pub ram: MetricStyleConfig,
    #[serde(default)]
    pub fps: MetricStyleConfig,
    #[serde(default)]
    pub frametime: MetricStyleConfig,
    #[serde(default)]
    pub custom: MetricStyleConfig,
    #[serde(default)]
    pub title: MetricStyleConfig,
}

impl Default for OverlayStyleConfig {
    fn default() -> Self {
        let with_color = |metric| MetricStyleConfig {
            font: None,
            color: Some(overlay_colors::for_metric(metric)),
        };
        Self {
            font: FontSpec::default(),
            text_color: overlay_colors::WHITE,
            cpu: with_color(Metric::Cpu),
            gpu: with_color(Metric::Gpu),
            vram: with_color(Metric::Vram),
            ram: with_color(Metric::Ram),
            fps: with_color(Metric::Fps),
            frametime: with_color(Metric::Frametime),
            custom: with_color(Metric::Custom),
            title: with_color(Metric::Title),
        }
    }
}

impl OverlayStyleConfig {
    /// Style table for a metric, `None` for `Unknown`
    pub fn metric(&self, metric: Metric) -> Option<&MetricStyleConfig> {
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

    pub fn metric_mut(&mut self, metric: Metric) -> Option<&mut MetricStyleConfig> {
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

    /// Effective color for a metric after defaults are applied
    pub fn metric_color(&self, metric: Metric) -> PackedColor {
        match self.metric(metric) {
            Some(style) => style
                .color
                .unwrap_or_else(|| overlay_colors::for_metric(metric)),
            None => self.text_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_name() {
        for metric in Metric::all() {
            assert_eq!(Metric::from_name(metric.name()), *metric);
        }
        assert_eq!(Metric::from_name("unknown_metric"), Metric::Unknown);
        assert_eq!(Metric::from_name(""), Metric::Unknown);
    }

    #[test]
    fn test_metric_names_are_case_sensitive() {
        assert_eq!(Metric::from_name("CPU"), Metric::Unknown);
        assert_eq!(Metric::from_name("FrameTime"), Metric::Unknown);
        assert_eq!(Metric::from_name(" fps"), Metric::Unknown);
    }

    #[test]
    fn test_is_known() {
        assert!(Metric::all().iter().all(Metric::is_known));
        assert!(!Metric::Unknown.is_known());
        assert!(!Metric::from_name("gpu_load").is_known());
    }

    #[test]
    fn test_metric_mut_edits_matching_table() {
        let mut config = OverlayStyleConfig::default();
        config.metric_mut(Metric::Frametime).unwrap().color = Some(PackedColor(0xFF123456));
        config.metric_mut(Metric::Custom).unwrap().font = Some(FontSpec::new("serif", 16.0));

        assert_eq!(config.frametime.color, Some(PackedColor(0xFF123456)));
        assert_eq!(config.metric_color(Metric::Frametime), PackedColor(0xFF123456));
        assert_eq!(config.custom.font, Some(FontSpec::new("serif", 16.0)));
        assert!(config.metric_mut(Metric::Unknown).is_none());
    }

    #[test]
    fn test_packed_layout() {
        let red = PackedColor(0xFF0000FF);
        assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(PackedColor::from_rgba8(255, 0, 0, 255), red);
        assert_eq!(PackedColor::from_rgba8(1, 2, 3, 4).0, 0x04030201);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(
            PackedColor::from_hex("#2E97CB"),
            Some(PackedColor::from_rgba8(0x2E, 0x97, 0xCB, 255))
        );
        assert_eq!(
            PackedColor::from_hex("ff000080"),
            Some(PackedColor::from_rgba8(255, 0, 0, 0x80))
        );
        assert_eq!(PackedColor::from_hex("#FFF"), None);
        assert_eq!(PackedColor::from_hex("#GG0000"), None);
        assert_eq!(PackedColor::from_hex("#ÿÿÿ"), None);
        assert_eq!(
            PackedColor::from_rgba8(0xAD, 0x64, 0xC1, 0x7F).to_hex(),
            "#AD64C17F"
        );
    }

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config: OverlayStyleConfig = toml::from_str(
            r##"
            text_color = "#101010"

            [gpu]
            color = "#FF0000"

            [cpu.font]
            family = "DejaVu Sans"
            "##,
        )
        .unwrap();

        assert_eq!(config.font, FontSpec::default());
        assert_eq!(config.text_color, PackedColor::from_rgba8(16, 16, 16, 255));
        assert_eq!(config.cpu.font, Some(FontSpec::new("DejaVu Sans", 24.0)));
        assert_eq!(config.metric_color(Metric::Gpu), PackedColor(0xFF0000FF));
        // Missing tables fall back to the per-metric default color
        assert_eq!(config.metric_color(Metric::Vram), overlay_colors::VRAM);
        assert_eq!(config.metric_color(Metric::Unknown), config.text_color);
    }

    #[test]
    fn test_color_accepts_raw_integer() {
        let style: MetricStyleConfig = toml::from_str("color = 4278190335").unwrap();
        assert_eq!(style.color, Some(PackedColor(0xFF0000FF)));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = OverlayStyleConfig::default();
        config.title.font = Some(FontSpec::new("monospace", 32.0));
        let text = toml::to_string(&config).unwrap();
        let parsed: OverlayStyleConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
