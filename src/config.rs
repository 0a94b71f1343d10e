// Command line configuration for the desktop host.

use clap::Parser;

use crate::types::{LineShape, StrokeStyle, argb};

/// Draw a shape, press Space to classify it, C to clear, Esc to quit.
#[derive(Debug, Clone, Parser)]
#[command(name = "stroke-canvas")]
#[command(version)]
pub struct CliArgs {
    /// Canvas width in pixels
    #[arg(long, default_value = "480")]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value = "480")]
    pub height: usize,

    /// Stroke width in pixels
    #[arg(long, default_value = "20")]
    pub stroke_width: f32,

    /// Ink colour (any CSS colour)
    #[arg(long, default_value = "black", value_parser = parse_color)]
    pub color: u32,

    /// Background colour (any CSS colour)
    #[arg(long, default_value = "white", value_parser = parse_color)]
    pub background: u32,

    /// Draw hard-edged strokes
    #[arg(long)]
    pub no_anti_alias: bool,

    /// Window title
    #[arg(long, default_value = "Stroke Canvas")]
    pub title: String,
}

/// Parse a CSS colour into 0xAARRGGBB.
pub fn parse_color(s: &str) -> Result<u32, String> {
    let c = csscolorparser::parse(s).map_err(|e| format!("invalid colour {s:?}: {e}"))?;
    let [r, g, b, a] = c.to_rgba8();
    Ok(argb(a, r, g, b))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    pub title: String,
    pub style: StrokeStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            title: "Stroke Canvas".to_string(),
            style: StrokeStyle::default(),
        }
    }
}

impl From<CliArgs> for AppConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            width: args.width.max(1),
            height: args.height.max(1),
            title: args.title,
            style: StrokeStyle {
                color: args.color,
                width: args.stroke_width.max(0.0),
                cap: LineShape::Round,
                join: LineShape::Round,
                anti_alias: !args.no_anti_alias,
                background: args.background,
            },
        }
    }
}
