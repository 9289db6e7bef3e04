//! Stream selection for the transcoded output

use std::fmt;

use serde::Serialize;

pub mod mapper;

/// One `-map` target on the first (and only) input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapSelector {
    /// Every stream, attachments and cover art included
    AllStreams,
    /// The first video stream only
    FirstVideo,
    /// All audio streams
    AllAudio,
    /// All subtitle streams, if there are any
    OptionalSubtitles,
}

impl MapSelector {
    /// Stream specifier as ffmpeg spells it
    pub fn specifier(&self) -> &'static str {
        match self {
            MapSelector::AllStreams => "0",
            MapSelector::FirstVideo => "0:v:0",
            MapSelector::AllAudio => "0:a",
            MapSelector::OptionalSubtitles => "0:s?",
        }
    }
}

/// Ordered list of map directives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamMapping {
    pub selectors: Vec<MapSelector>,
}

impl StreamMapping {
    /// True when the output carries every source stream
    pub fn maps_everything(&self) -> bool {
        self.selectors.contains(&MapSelector::AllStreams)
    }

    /// `-map` flag/value pairs in directive order
    pub fn to_args(&self) -> Vec<String> {
        self.selectors
            .iter()
            .flat_map(|s| ["-map".to_string(), s.specifier().to_string()])
            .collect()
    }
}

impl fmt::Display for StreamMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_args().join(" "))
    }
}
