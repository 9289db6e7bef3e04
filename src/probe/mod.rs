//! Probe data supplied by the host pipeline

use serde::{Deserialize, Serialize};

use crate::domain::model::StreamDescriptor;

pub mod inspector;

/// ffprobe `-show_streams` output, or the parts of it the planner reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeData {
    /// Absent when the prober produced no stream list
    #[serde(default)]
    pub streams: Option<Vec<StreamDescriptor>>,
}

impl ProbeData {
    /// Stream list in probe order, if any was supplied
    pub fn streams(&self) -> Option<&[StreamDescriptor]> {
        self.streams.as_deref()
    }
}

/// Host file object wrapping the probe data
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HostFile {
    #[serde(rename = "ffProbeData", default)]
    pub ffprobe_data: Option<ProbeData>,
}
