//! NVENC Transcode Planner Library
//!
//! Inspects probed stream metadata and decides whether a media file needs an
//! HEVC NVENC transcode. When it does, the planner derives the complete
//! ffmpeg argument block (stream mapping, CQP rate control, scaling, pixel
//! format and an optional text watermark) for a downstream executor.
//!
//! ```
//! use nvenc_planner::{plan, CodecType, OptionSet, StreamDescriptor};
//!
//! let streams = vec![
//!     StreamDescriptor::new(CodecType::Video, "h264"),
//!     StreamDescriptor::new(CodecType::Audio, "aac"),
//! ];
//! let decision = plan(Some(streams.as_slice()), &OptionSet::default());
//!
//! assert!(decision.should_process());
//! assert!(decision.argument_block().contains("-c:v hevc_nvenc"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod planner;
pub mod plugin;
pub mod probe;
pub mod streams;
pub mod utils;

// Re-export commonly used types
pub use config::PartialOptions;
pub use domain::model::{
    CodecType, OptionSet, OutputContainer, StreamDescriptor, WatermarkPlacement, WatermarkPosition,
};
pub use domain::rules::SkipReason;
pub use error::{PlannerError, PlannerResult};
pub use planner::{plan, Decision};
pub use probe::ProbeData;
