use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use hudstyle_overlay::{
    FontHandle, FontLibrary, Metric, OverlayParams, OverlayStyleConfig, color_for, config,
    font_for, utils::pack_color,
};

mod logging;

#[derive(Parser)]
#[command(version, about = "Show the font and color each overlay metric is drawn with")]
struct Cli {
    /// Style config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default style config as TOML and exit
    #[arg(long)]
    dump_default: bool,

    /// Metric names to resolve; all known metrics when empty
    metrics: Vec<String>,
}

fn main() -> Result<(), String> {
    logging::init();
    let cli = Cli::parse();

    if cli.dump_default {
        let text = toml::to_string_pretty(&OverlayStyleConfig::default())
            .map_err(|e| e.to_string())?;
        print!("{text}");
        return Ok(());
    }

    let style_config = config::load(cli.config.as_deref()).map_err(|e| describe(&e))?;
    let mut fonts = FontLibrary::new();
    let params = OverlayParams::from_config(&style_config, &mut fonts);
    tracing::info!(fonts = fonts.len(), "Style config loaded");

    let names = if cli.metrics.is_empty() {
        Metric::all().iter().map(|m| m.name().to_string()).collect()
    } else {
        cli.metrics
    };

    for name in &names {
        if !Metric::from_name(name).is_known() {
            tracing::warn!(metric = %name, "Unknown metric, showing global style");
        }
        let font = describe_font(&fonts, font_for(name, Some(&params)));
        let color = pack_color(color_for(name, Some(&params)));
        println!("{name:<10} {font:<28} {color}");
    }

    Ok(())
}

fn describe_font(fonts: &FontLibrary, handle: Option<FontHandle>) -> String {
    match handle.and_then(|h| Some((fonts.family(h)?, fonts.size(h)?))) {
        Some((family, size)) => format!("{family} {size}px"),
        None => "<no font>".to_string(),
    }
}

/// Flatten an error and its sources into one line
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
