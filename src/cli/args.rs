//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::config::{ConfigFormat, PartialOptions};
use crate::domain::model::{OutputContainer, WatermarkPosition};

/// Option overrides shared by the planning commands
///
/// Every flag can also be set through its `NVENC_PLAN_*` environment
/// variable; flags win over the environment, which wins over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Config file (.toml, .yaml or .yml)
    #[arg(long, env = "NVENC_PLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output container format (mkv, mp4, mov, avi)
    #[arg(long, env = "NVENC_PLAN_OUTPUT_CONTAINER")]
    pub output_container: Option<OutputContainer>,

    /// Constant QP value (19-28 recommended)
    #[arg(long, env = "NVENC_PLAN_TARGET_CQP")]
    pub target_cqp: Option<u32>,

    /// Rate control lookahead frames (0-32 recommended)
    #[arg(long, env = "NVENC_PLAN_RC_LOOKAHEAD")]
    pub rc_lookahead: Option<u32>,

    /// Maximum output width in pixels
    #[arg(long, env = "NVENC_PLAN_MAX_WIDTH")]
    pub max_width: Option<u32>,

    /// Maximum output height in pixels
    #[arg(long, env = "NVENC_PLAN_MAX_HEIGHT")]
    pub max_height: Option<u32>,

    /// Encode 10-bit (yuv420p10le) instead of 8-bit (yuv420p)
    #[arg(long = "enable-10bit", env = "NVENC_PLAN_ENABLE_10BIT")]
    pub enable_10bit: Option<bool>,

    /// Drop cover art and thumbnails
    #[arg(long, env = "NVENC_PLAN_REMOVE_IMAGES")]
    pub remove_images: Option<bool>,

    /// Burn a text watermark into the video
    #[arg(long, env = "NVENC_PLAN_ENABLE_WATERMARK")]
    pub enable_watermark: Option<bool>,

    /// Watermark text
    #[arg(long, env = "NVENC_PLAN_WATERMARK_TEXT", allow_hyphen_values = true)]
    pub watermark_text: Option<String>,

    /// Watermark position (top_left, top_right, bottom_left, bottom_right, center, custom)
    #[arg(long, env = "NVENC_PLAN_WATERMARK_POSITION")]
    pub watermark_position: Option<WatermarkPosition>,

    /// X expression for the custom position
    #[arg(long, env = "NVENC_PLAN_WATERMARK_X", allow_hyphen_values = true)]
    pub watermark_x: Option<String>,

    /// Y expression for the custom position
    #[arg(long, env = "NVENC_PLAN_WATERMARK_Y", allow_hyphen_values = true)]
    pub watermark_y: Option<String>,

    /// Watermark font size (8-72 recommended)
    #[arg(long, env = "NVENC_PLAN_WATERMARK_FONTSIZE")]
    pub watermark_fontsize: Option<u32>,

    /// Font file used for the watermark
    #[arg(long, env = "NVENC_PLAN_FONT_PATH")]
    pub font_path: Option<String>,
}

impl OptionArgs {
    /// Override layer built from flags and environment
    pub fn overrides(&self) -> PartialOptions {
        PartialOptions {
            output_container: self.output_container,
            target_cqp: self.target_cqp,
            rc_lookahead: self.rc_lookahead,
            max_width: self.max_width,
            max_height: self.max_height,
            enable_10bit: self.enable_10bit,
            remove_images: self.remove_images,
            enable_watermark: self.enable_watermark,
            watermark_text: self.watermark_text.clone(),
            watermark_position: self.watermark_position,
            watermark_x: self.watermark_x.clone(),
            watermark_y: self.watermark_y.clone(),
            watermark_fontsize: self.watermark_fontsize,
            font_path: self.font_path.clone(),
        }
    }
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// ffprobe JSON file, or - for stdin
    #[arg(short, long)]
    pub probe: String,

    /// Print the host response object as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// ffprobe JSON file, or - for stdin
    #[arg(short, long)]
    pub probe: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the details command
#[derive(Args, Debug)]
pub struct DetailsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the defaults command
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Config file format to print
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory searched recursively for ffprobe JSON files
    #[arg(short, long)]
    pub dir: PathBuf,

    #[command(flatten)]
    pub options: OptionArgs,
}
