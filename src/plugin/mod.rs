//! Static plugin descriptor for host registration
//!
//! The descriptor only describes the planner: its identity, tags and the
//! options it accepts with their defaults and UI hints. It has no runtime
//! behavior.

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::model::{OptionSet, OutputContainer, WatermarkPosition};

pub const PLUGIN_ID: &str = "hevc_nvenc_watermark_scaling";
pub const PLUGIN_VERSION: &str = "1.1";

const DESCRIPTION: &str = "\
Converts videos to HEVC (H.265) with NVIDIA NVENC hardware acceleration.

Features:
- Hardware-accelerated encoding with CUDA
- Constant Quantization Parameter (CQP) for consistent quality
- Automatic scaling to max. 1280x720 (if larger)
- 10-bit YUV420 color format
- Optional: Watermark with configurable position and size
- Preserves audio and subtitle streams
- Retains all metadata";

const TAGS: [&str; 8] = [
    "pre-processing",
    "ffmpeg",
    "nvenc",
    "hevc",
    "h265",
    "hardware",
    "nvidia",
    "watermark",
];

/// Value type of an input as the host understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    String,
    Number,
    Boolean,
}

/// How the host renders an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputUi {
    Text,
    Dropdown { options: Vec<String> },
}

/// One configurable input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(rename = "defaultValue")]
    pub default_value: Value,
    #[serde(rename = "inputUI")]
    pub input_ui: InputUi,
    pub tooltip: &'static str,
}

/// Full descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginDetails {
    #[serde(rename = "id")]
    pub id: &'static str,
    pub stage: &'static str,
    pub name: &'static str,
    #[serde(rename = "Type")]
    pub media_type: &'static str,
    pub operation: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    /// Comma separated, as the host expects
    pub tags: String,
    pub inputs: Vec<InputDescriptor>,
}

impl PluginDetails {
    pub fn input(&self, name: &str) -> Option<&InputDescriptor> {
        self.inputs.iter().find(|i| i.name == name)
    }
}

fn bool_dropdown() -> InputUi {
    InputUi::Dropdown {
        options: vec!["true".to_string(), "false".to_string()],
    }
}

fn input(
    name: &'static str,
    input_type: InputType,
    default_value: Value,
    input_ui: InputUi,
    tooltip: &'static str,
) -> InputDescriptor {
    InputDescriptor {
        name,
        input_type,
        default_value,
        input_ui,
        tooltip,
    }
}

/// Build the descriptor; defaults are taken from [`OptionSet::default`]
pub fn details() -> PluginDetails {
    let d = OptionSet::default();
    let containers = OutputContainer::ALL.iter().map(|c| c.as_str().to_string()).collect();
    let positions = WatermarkPosition::ALL.iter().map(|p| p.as_str().to_string()).collect();

    let inputs = vec![
        input(
            "output_container",
            InputType::String,
            json!(d.output_container.as_str()),
            InputUi::Dropdown { options: containers },
            "Output container format",
        ),
        input(
            "target_cqp",
            InputType::Number,
            json!(d.target_cqp),
            InputUi::Text,
            "CQP value for quality (lower = better quality, larger file)\nRecommended: 19-28\nDefault: 23",
        ),
        input(
            "rc_lookahead",
            InputType::Number,
            json!(d.rc_lookahead),
            InputUi::Text,
            "Rate Control Lookahead frames\nHigher values improve quality but require more VRAM\nRecommended: 0-32\nDefault: 20",
        ),
        input(
            "max_width",
            InputType::Number,
            json!(d.max_width),
            InputUi::Text,
            "Maximum width in pixels",
        ),
        input(
            "max_height",
            InputType::Number,
            json!(d.max_height),
            InputUi::Text,
            "Maximum height in pixels",
        ),
        input(
            "enable_10bit",
            InputType::Boolean,
            json!(d.enable_10bit),
            bool_dropdown(),
            "Enable 10-bit color depth (yuv420p10le). Disable for 8-bit (yuv420p)",
        ),
        input(
            "remove_images",
            InputType::Boolean,
            json!(d.remove_images),
            bool_dropdown(),
            "Remove embedded images (cover art, thumbnails) from video file",
        ),
        input(
            "enable_watermark",
            InputType::Boolean,
            json!(d.enable_watermark),
            bool_dropdown(),
            "Enable/disable watermark",
        ),
        input(
            "watermark_text",
            InputType::String,
            json!(d.watermark_text),
            InputUi::Text,
            "Text for the watermark",
        ),
        input(
            "watermark_position",
            InputType::String,
            json!(d.watermark_position.as_str()),
            InputUi::Dropdown { options: positions },
            "Position of the watermark",
        ),
        input(
            "watermark_x",
            InputType::String,
            json!(d.watermark_x),
            InputUi::Text,
            "X-position (only for 'custom' position). Examples: 10, W-tw-10, (W-tw)/2",
        ),
        input(
            "watermark_y",
            InputType::String,
            json!(d.watermark_y),
            InputUi::Text,
            "Y-position (only for 'custom' position). Examples: 10, H-th-10, (H-th)/2",
        ),
        input(
            "watermark_fontsize",
            InputType::Number,
            json!(d.watermark_fontsize),
            InputUi::Text,
            "Font size of the watermark (8-72)",
        ),
        input(
            "font_path",
            InputType::String,
            json!(d.font_path),
            InputUi::Text,
            "Path to font file (TTF)",
        ),
    ];

    PluginDetails {
        id: PLUGIN_ID,
        stage: "Pre-processing",
        name: "HEVC NVENC Encoding with Watermark and Scaling",
        media_type: "Video",
        operation: "Transcode",
        description: DESCRIPTION,
        version: PLUGIN_VERSION,
        tags: TAGS.join(","),
        inputs,
    }
}
