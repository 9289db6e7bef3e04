//! Video filter chain assembly
//!
//! The stages are rendered as ffmpeg filter-graph text. Expressions such as
//! `iw`, `W` or `tw` are left for ffmpeg to evaluate.

use std::fmt;

use crate::domain::model::{OptionSet, WatermarkPlacement};

/// Fixed drawtext styling: translucent pink text with a dark drop shadow
const TEXT_STYLE: &str = "fontcolor=pink@0.7:shadowcolor=black@0.7:shadowx=5:shadowy=5";

/// Downscale so neither side exceeds its maximum, keeping the aspect ratio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleStage {
    pub max_width: u32,
    pub max_height: u32,
}

impl fmt::Display for ScaleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.max_width, self.max_height);
        write!(
            f,
            "scale='if(gt(iw\\,{w})\\,{w}\\,iw):if(gt(ih\\,{h})\\,{h}\\,ih):force_original_aspect_ratio=decrease'"
        )
    }
}

/// Pixel format conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatStage {
    pub pixel_format: &'static str,
}

impl fmt::Display for FormatStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}", self.pixel_format)
    }
}

/// Text overlay
///
/// The text goes in verbatim between single quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawTextStage {
    pub text: String,
    pub placement: WatermarkPlacement,
    pub font_path: String,
    pub font_size: u32,
}

impl fmt::Display for DrawTextStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "drawtext=text='{}':x={}:y={}:fontfile={}:fontsize={}:{}",
            self.text, self.placement.x, self.placement.y, self.font_path, self.font_size, TEXT_STYLE
        )
    }
}

/// scale, then format, then the optional overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChain {
    pub scale: ScaleStage,
    pub format: FormatStage,
    pub overlay: Option<DrawTextStage>,
}

impl FilterChain {
    /// Build the chain for an option set and an already resolved placement
    pub fn build(options: &OptionSet, placement: WatermarkPlacement) -> Self {
        let overlay = options.enable_watermark.then(|| DrawTextStage {
            text: options.watermark_text.clone(),
            placement,
            font_path: options.font_path.clone(),
            font_size: options.watermark_fontsize,
        });

        Self {
            scale: ScaleStage {
                max_width: options.max_width,
                max_height: options.max_height,
            },
            format: FormatStage {
                pixel_format: options.pixel_format(),
            },
            overlay,
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.scale, self.format)?;
        if let Some(overlay) = &self.overlay {
            write!(f, ",{}", overlay)?;
        }
        Ok(())
    }
}
