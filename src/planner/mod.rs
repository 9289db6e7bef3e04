//! Transcode decision planning
//!
//! [`plan`] inspects the probed streams and the resolved options and returns
//! a [`Decision`]: either "leave the file alone" with a reason, or the full
//! NVENC argument block plus a summary log. It never fails and never touches
//! the file system.

use serde::Serialize;
use tracing::debug;

use crate::domain::model::{OptionSet, StreamDescriptor};
use crate::domain::rules::{Eligibility, EligibilityCheck, SkipReason, WatermarkPlacer};
use crate::streams::mapper::StreamMapper;

pub mod filters;
pub mod preset;
pub mod report;

use filters::FilterChain;
use preset::ArgumentBlock;

/// Outcome handed back to the host pipeline
///
/// Serializes to the host's response object. Only [`plan`] constructs one;
/// callers read it through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Gate for the downstream executor
    #[serde(rename = "processFile")]
    should_process: bool,
    /// Argument block; empty unless `should_process`
    #[serde(rename = "preset")]
    argument_block: String,
    /// Output extension with leading dot
    #[serde(rename = "container")]
    output_container: String,
    #[serde(rename = "handBrakeMode")]
    handbrake_mode: bool,
    #[serde(rename = "FFmpegMode")]
    ffmpeg_mode: bool,
    #[serde(rename = "reQueueAfter")]
    requeue: bool,
    #[serde(rename = "infoLog")]
    log: String,
    #[serde(skip)]
    skip_reason: Option<SkipReason>,
    #[serde(skip)]
    arguments: Vec<String>,
}

impl Decision {
    fn base(options: &OptionSet) -> Self {
        Self {
            should_process: false,
            argument_block: String::new(),
            output_container: options.output_container.extension(),
            handbrake_mode: false,
            ffmpeg_mode: true,
            requeue: false,
            log: String::new(),
            skip_reason: None,
            arguments: Vec::new(),
        }
    }

    fn skip(options: &OptionSet, reason: SkipReason) -> Self {
        let mut decision = Self::base(options);
        decision.log.push_str(reason.log_line());
        decision.skip_reason = Some(reason);
        decision
    }

    fn transcode(options: &OptionSet, block: &ArgumentBlock, log: String) -> Self {
        let mut decision = Self::base(options);
        decision.should_process = true;
        decision.argument_block = block.render();
        decision.arguments = block.to_args();
        decision.log = log;
        decision
    }

    /// Gate for the downstream executor
    pub fn should_process(&self) -> bool {
        self.should_process
    }

    /// Multiline preset handed to ffmpeg; empty for skip outcomes
    pub fn argument_block(&self) -> &str {
        &self.argument_block
    }

    /// Output extension with leading dot
    pub fn output_container(&self) -> &str {
        &self.output_container
    }

    pub fn handbrake_mode(&self) -> bool {
        self.handbrake_mode
    }

    pub fn ffmpeg_mode(&self) -> bool {
        self.ffmpeg_mode
    }

    pub fn requeue(&self) -> bool {
        self.requeue
    }

    /// Info log shown to the user
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Why nothing will be done, for skip outcomes
    pub fn skip_reason(&self) -> Option<SkipReason> {
        self.skip_reason
    }

    /// Argument vector form of the argument block; empty for skip outcomes
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// Decide whether to transcode and build the encoder arguments
///
/// `streams` is `None` when the host has no probe data for the file.
pub fn plan(streams: Option<&[StreamDescriptor]>, options: &OptionSet) -> Decision {
    let video = match EligibilityCheck::evaluate(streams) {
        Eligibility::Eligible { video } => video,
        Eligibility::Skip(reason) => {
            debug!(%reason, "Skipping file");
            return Decision::skip(options, reason);
        }
    };

    let placement = WatermarkPlacer::resolve(options);
    let filters = FilterChain::build(options, placement);
    debug!(source_codec = %video.codec_name, filters = %filters, "Built filter chain");

    let mapping = StreamMapper::create_mapping(options);
    let block = ArgumentBlock::new(options, mapping, filters);
    let log = report::transcode_summary(video, options);

    Decision::transcode(options, &block, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CodecType, OutputContainer};

    #[test]
    fn test_skip_outcome_has_no_arguments() {
        let streams = vec![StreamDescriptor::new(CodecType::Video, "hevc")];
        let options = OptionSet {
            output_container: OutputContainer::Mp4,
            ..OptionSet::default()
        };
        let decision = plan(Some(streams.as_slice()), &options);

        assert!(!decision.should_process());
        assert!(decision.argument_block().is_empty());
        assert!(decision.arguments().is_empty());
        assert_eq!(decision.output_container(), ".mp4");
        assert_eq!(decision.skip_reason(), Some(SkipReason::AlreadyHevc));
        assert_eq!(decision.log(), "☑ Video is already HEVC encoded\n");
    }

    #[test]
    fn test_transcode_outcome_fields() {
        let streams = vec![StreamDescriptor::new(CodecType::Video, "h264")];
        let decision = plan(Some(streams.as_slice()), &OptionSet::default());

        assert!(decision.should_process());
        assert!(decision.ffmpeg_mode());
        assert!(!decision.handbrake_mode());
        assert!(!decision.requeue());
        assert_eq!(decision.skip_reason(), None);
        assert!(decision.argument_block().contains("-c:v hevc_nvenc"));
        assert_eq!(decision.arguments().first().map(String::as_str), Some("-hwaccel"));
    }

    #[test]
    fn test_preset_and_argument_vector_agree() {
        let streams = vec![StreamDescriptor::new(CodecType::Video, "h264")];
        let options = OptionSet {
            remove_images: true,
            ..OptionSet::default()
        };
        let decision = plan(Some(streams.as_slice()), &options);

        let tokens: Vec<&str> = decision.argument_block().split_whitespace().collect();
        assert_eq!(tokens, decision.arguments());
    }

    #[test]
    fn test_serializes_to_host_response() {
        let decision = plan(None, &OptionSet::default());
        let value = serde_json::to_value(&decision).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "processFile": false,
                "preset": "",
                "container": ".mkv",
                "handBrakeMode": false,
                "FFmpegMode": true,
                "reQueueAfter": false,
                "infoLog": "☒ No stream information found\n",
            })
        );
    }
}
