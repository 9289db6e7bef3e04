// Domain models - Core types and data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlannerError;

/// Stream kind as reported by the prober
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    /// Data, attachment and anything else the prober reports
    #[default]
    #[serde(other)]
    Other,
}

impl CodecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Other => "other",
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream disposition flags we care about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposition {
    /// Non-zero for cover art and thumbnails stored as a video stream
    #[serde(default, deserialize_with = "null_as_default")]
    pub attached_pic: u8,
}

/// A single probed stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream index inside the source container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codec_type: CodecType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codec_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disposition: Disposition,
}

/// Probers emit `null` for fields they could not determine
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StreamDescriptor {
    /// Create a descriptor with just a type and codec name
    pub fn new(codec_type: CodecType, codec_name: impl Into<String>) -> Self {
        Self {
            index: None,
            codec_type,
            codec_name: codec_name.into(),
            disposition: Disposition::default(),
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn as_attached_picture(mut self) -> Self {
        self.disposition.attached_pic = 1;
        self
    }

    pub fn is_video(&self) -> bool {
        self.codec_type == CodecType::Video
    }

    pub fn is_attached_picture(&self) -> bool {
        self.disposition.attached_pic != 0
    }
}

/// Output container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputContainer {
    #[default]
    Mkv,
    Mp4,
    Mov,
    Avi,
}

impl OutputContainer {
    pub const ALL: [OutputContainer; 4] = [
        OutputContainer::Mkv,
        OutputContainer::Mp4,
        OutputContainer::Mov,
        OutputContainer::Avi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputContainer::Mkv => "mkv",
            OutputContainer::Mp4 => "mp4",
            OutputContainer::Mov => "mov",
            OutputContainer::Avi => "avi",
        }
    }

    /// File extension including the leading dot, as the host expects it
    pub fn extension(&self) -> String {
        format!(".{}", self.as_str())
    }
}

impl fmt::Display for OutputContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputContainer {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| PlannerError::InvalidOption {
                name: "output_container".to_string(),
                value: s.to_string(),
            })
    }
}

/// Where the watermark text is anchored on the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
    Center,
    /// Use the raw `watermark_x` / `watermark_y` expressions
    Custom,
}

impl WatermarkPosition {
    pub const ALL: [WatermarkPosition; 6] = [
        WatermarkPosition::TopLeft,
        WatermarkPosition::TopRight,
        WatermarkPosition::BottomLeft,
        WatermarkPosition::BottomRight,
        WatermarkPosition::Center,
        WatermarkPosition::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkPosition::TopLeft => "top_left",
            WatermarkPosition::TopRight => "top_right",
            WatermarkPosition::BottomLeft => "bottom_left",
            WatermarkPosition::BottomRight => "bottom_right",
            WatermarkPosition::Center => "center",
            WatermarkPosition::Custom => "custom",
        }
    }
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatermarkPosition {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| PlannerError::InvalidOption {
                name: "watermark_position".to_string(),
                value: s.to_string(),
            })
    }
}

/// Font shipped with the host's config directory
pub const DEFAULT_FONT_PATH: &str = "./app/configs/royalcocktail.ttf";

/// Complete, resolved option set handed to the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub output_container: OutputContainer,
    /// Constant QP value, 19-28 recommended
    pub target_cqp: u32,
    /// Rate control lookahead frames, 0-32 recommended
    pub rc_lookahead: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub enable_10bit: bool,
    /// Drop cover art and thumbnails by mapping streams explicitly
    pub remove_images: bool,
    pub enable_watermark: bool,
    pub watermark_text: String,
    pub watermark_position: WatermarkPosition,
    /// Only read when `watermark_position` is custom
    pub watermark_x: String,
    /// Only read when `watermark_position` is custom
    pub watermark_y: String,
    pub watermark_fontsize: u32,
    pub font_path: String,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            output_container: OutputContainer::Mkv,
            target_cqp: 23,
            rc_lookahead: 20,
            max_width: 1280,
            max_height: 720,
            enable_10bit: true,
            remove_images: false,
            enable_watermark: false,
            watermark_text: "Sample".to_string(),
            watermark_position: WatermarkPosition::BottomLeft,
            watermark_x: "10".to_string(),
            watermark_y: "H-th-10".to_string(),
            watermark_fontsize: 14,
            font_path: DEFAULT_FONT_PATH.to_string(),
        }
    }
}

impl OptionSet {
    /// Pixel format token for the format filter
    pub fn pixel_format(&self) -> &'static str {
        if self.enable_10bit {
            "yuv420p10le"
        } else {
            "yuv420p"
        }
    }

    pub fn color_depth_label(&self) -> &'static str {
        if self.enable_10bit {
            "10-bit"
        } else {
            "8-bit"
        }
    }
}

/// Resolved drawtext coordinates
///
/// Both values are filter-graph expressions (`W`, `H`, `tw`, `th` are
/// evaluated by ffmpeg), so they stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatermarkPlacement {
    pub x: String,
    pub y: String,
}

impl WatermarkPlacement {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Default for WatermarkPlacement {
    fn default() -> Self {
        Self::new("10", "H-th-10")
    }
}

#[cfg(test)]
mod tests;
