// Domain rules - Eligibility and watermark placement policies

use std::fmt;

use crate::domain::model::*;

/// Codec name the encoder produces; sources already in it are skipped
pub const TARGET_CODEC: &str = "hevc";

/// Why a file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The host supplied no stream list at all
    NoStreamInfo,
    /// Streams exist but none is video
    NoVideoStream,
    /// The first video stream is already HEVC
    AlreadyHevc,
}

impl SkipReason {
    /// Info log line reported to the host for this outcome
    pub fn log_line(&self) -> &'static str {
        match self {
            SkipReason::NoStreamInfo => "☒ No stream information found\n",
            SkipReason::NoVideoStream => "☒ No video stream found\n",
            SkipReason::AlreadyHevc => "☑ Video is already HEVC encoded\n",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NoStreamInfo => "no stream information found",
            SkipReason::NoVideoStream => "no video stream found",
            SkipReason::AlreadyHevc => "already HEVC encoded",
        };
        f.write_str(text)
    }
}

/// Result of the eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility<'a> {
    /// Transcode, using this stream as the source video
    Eligible { video: &'a StreamDescriptor },
    Skip(SkipReason),
}

/// Business rules deciding whether a file needs transcoding
pub struct EligibilityCheck;

impl EligibilityCheck {
    /// Evaluate the skip rules in order; the first match wins
    pub fn evaluate(streams: Option<&[StreamDescriptor]>) -> Eligibility<'_> {
        let Some(streams) = streams else {
            return Eligibility::Skip(SkipReason::NoStreamInfo);
        };

        let Some(video) = Self::first_video_stream(streams) else {
            return Eligibility::Skip(SkipReason::NoVideoStream);
        };

        if video.codec_name == TARGET_CODEC {
            return Eligibility::Skip(SkipReason::AlreadyHevc);
        }

        Eligibility::Eligible { video }
    }

    /// First video-typed entry in probe order
    pub fn first_video_stream(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
        streams.iter().find(|s| s.is_video())
    }
}

/// Business rules for drawtext placement
pub struct WatermarkPlacer;

impl WatermarkPlacer {
    /// Resolve x/y expressions for the configured position
    ///
    /// With the watermark disabled the bottom-left default is returned; it
    /// is never rendered in that case.
    pub fn resolve(options: &OptionSet) -> WatermarkPlacement {
        if !options.enable_watermark {
            return WatermarkPlacement::default();
        }

        Self::placement_for(
            options.watermark_position,
            &options.watermark_x,
            &options.watermark_y,
        )
    }

    /// Coordinates for a position; the custom expressions are only read for
    /// `WatermarkPosition::Custom`
    pub fn placement_for(
        position: WatermarkPosition,
        custom_x: &str,
        custom_y: &str,
    ) -> WatermarkPlacement {
        match position {
            WatermarkPosition::TopLeft => WatermarkPlacement::new("10", "10"),
            WatermarkPosition::TopRight => WatermarkPlacement::new("W-tw-10", "10"),
            WatermarkPosition::BottomLeft => WatermarkPlacement::new("10", "H-th-10"),
            WatermarkPosition::BottomRight => WatermarkPlacement::new("W-tw-10", "H-th-10"),
            WatermarkPosition::Center => WatermarkPlacement::new("(W-tw)/2", "(H-th)/2"),
            WatermarkPosition::Custom => WatermarkPlacement::new(custom_x, custom_y),
        }
    }
}
