//! Probe document loading and stream inspection

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::model::CodecType;
use crate::domain::rules::{EligibilityCheck, TARGET_CODEC};
use crate::error::{PlannerError, PlannerResult};
use crate::probe::{HostFile, ProbeData};

/// Source name that selects standard input
pub const STDIN_SOURCE: &str = "-";

/// Reads probe documents and summarizes their streams
pub struct ProbeInspector;

impl ProbeInspector {
    /// Load a probe document from a file, or from stdin when `source` is `-`
    ///
    /// Returns `None` when the document carries no probe data at all.
    pub fn load(source: &str) -> PlannerResult<Option<ProbeData>> {
        let content = if source == STDIN_SOURCE {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PlannerError::ProbeRead {
                    source_name: "stdin".to_string(),
                    source: e,
                })?;
            buf
        } else {
            Self::read_file(Path::new(source))?
        };

        Self::parse(source, &content)
    }

    fn read_file(path: &Path) -> PlannerResult<String> {
        info!("Reading probe data: {}", path.display());
        std::fs::read_to_string(path).map_err(|e| PlannerError::ProbeRead {
            source_name: path.display().to_string(),
            source: e,
        })
    }

    /// Parse ffprobe JSON, bare or wrapped in a host file object
    pub fn parse(source_name: &str, content: &str) -> PlannerResult<Option<ProbeData>> {
        let parse_err = |e: serde_json::Error| PlannerError::ProbeParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        };

        let value: Value = serde_json::from_str(content).map_err(parse_err)?;
        let probe = if value.is_null() {
            None
        } else if value.get("ffProbeData").is_some() {
            let host: HostFile = serde_json::from_value(value).map_err(parse_err)?;
            host.ffprobe_data
        } else {
            Some(serde_json::from_value::<ProbeData>(value).map_err(parse_err)?)
        };

        debug!(
            source = source_name,
            streams = probe.as_ref().and_then(|p| p.streams()).map(|s| s.len()),
            "Parsed probe data"
        );
        Ok(probe)
    }

    /// Summarize the streams of a probe document
    pub fn summarize(probe: Option<&ProbeData>) -> StreamSummary {
        let Some(streams) = probe.and_then(ProbeData::streams) else {
            return StreamSummary::default();
        };

        let count = |kind: CodecType| streams.iter().filter(|s| s.codec_type == kind).count();
        let first_video_codec =
            EligibilityCheck::first_video_stream(streams).map(|s| s.codec_name.clone());

        StreamSummary {
            has_stream_info: true,
            total_streams: streams.len(),
            video_streams: count(CodecType::Video),
            audio_streams: count(CodecType::Audio),
            subtitle_streams: count(CodecType::Subtitle),
            other_streams: count(CodecType::Other),
            attached_pictures: streams
                .iter()
                .filter(|s| s.is_attached_picture())
                .count(),
            already_hevc: first_video_codec.as_deref() == Some(TARGET_CODEC),
            first_video_codec,
        }
    }
}

/// Stream counts and codec facts for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub has_stream_info: bool,
    pub total_streams: usize,
    pub video_streams: usize,
    pub audio_streams: usize,
    pub subtitle_streams: usize,
    pub other_streams: usize,
    /// Cover art and thumbnails
    pub attached_pictures: usize,
    pub first_video_codec: Option<String>,
    pub already_hevc: bool,
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_stream_info {
            return writeln!(f, "No stream information");
        }

        writeln!(f, "Streams: {}", self.total_streams)?;
        writeln!(f, "  Video: {}", self.video_streams)?;
        writeln!(f, "  Audio: {}", self.audio_streams)?;
        writeln!(f, "  Subtitle: {}", self.subtitle_streams)?;
        writeln!(f, "  Other: {}", self.other_streams)?;
        writeln!(f, "Embedded images: {}", self.attached_pictures)?;
        match &self.first_video_codec {
            Some(codec) => writeln!(f, "Video codec: {}", codec)?,
            None => writeln!(f, "Video codec: none")?,
        }
        writeln!(f, "Already HEVC: {}", if self.already_hevc { "yes" } else { "no" })
    }
}
