//! hudstyle overlay library
//!
//! Text styling for the performance overlay: which font and color each metric
//! (cpu, gpu, vram, ram, fps, frametime, custom, title) is drawn with.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     style                           │
//! │          font_for / color_for (pure lookups)        │
//! ├─────────────────────────────────────────────────────┤
//! │                     params                          │
//! │        OverlayParams (resolved per-metric styles)   │
//! ├─────────────────────────────────────────────────────┤
//! │               fonts          config                 │
//! │      FontLibrary (cosmic-text)   confy persistence  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod fonts;
pub mod params;
pub mod style;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, FontError};
pub use fonts::{FontHandle, FontLibrary};
pub use params::{MetricStyle, OverlayParams};
pub use style::{color_for, color_for_metric, font_for, font_for_metric};

pub use hudstyle_types::{Metric, OverlayStyleConfig, PackedColor};

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
