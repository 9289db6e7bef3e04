//! Option defaulting and configuration hierarchy
//!
//! Options come from, highest precedence first: command-line flags,
//! `NVENC_PLAN_*` environment variables, a config file, and the built-in
//! defaults. Each layer is a [`PartialOptions`]; they are merged field by
//! field and resolved against [`OptionSet::default`] once, before planning.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::model::{OptionSet, OutputContainer, WatermarkPosition};

pub mod file;

pub use file::{load_config_file, render_defaults, ConfigFormat};

/// An option set where any field may be left unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialOptions {
    pub output_container: Option<OutputContainer>,
    pub target_cqp: Option<u32>,
    pub rc_lookahead: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub enable_10bit: Option<bool>,
    pub remove_images: Option<bool>,
    pub enable_watermark: Option<bool>,
    pub watermark_text: Option<String>,
    pub watermark_position: Option<WatermarkPosition>,
    pub watermark_x: Option<String>,
    pub watermark_y: Option<String>,
    pub watermark_fontsize: Option<u32>,
    pub font_path: Option<String>,
}

impl PartialOptions {
    /// Fill unset fields of `self` from `lower`
    pub fn merge(self, lower: PartialOptions) -> PartialOptions {
        PartialOptions {
            output_container: self.output_container.or(lower.output_container),
            target_cqp: self.target_cqp.or(lower.target_cqp),
            rc_lookahead: self.rc_lookahead.or(lower.rc_lookahead),
            max_width: self.max_width.or(lower.max_width),
            max_height: self.max_height.or(lower.max_height),
            enable_10bit: self.enable_10bit.or(lower.enable_10bit),
            remove_images: self.remove_images.or(lower.remove_images),
            enable_watermark: self.enable_watermark.or(lower.enable_watermark),
            watermark_text: self.watermark_text.or(lower.watermark_text),
            watermark_position: self.watermark_position.or(lower.watermark_position),
            watermark_x: self.watermark_x.or(lower.watermark_x),
            watermark_y: self.watermark_y.or(lower.watermark_y),
            watermark_fontsize: self.watermark_fontsize.or(lower.watermark_fontsize),
            font_path: self.font_path.or(lower.font_path),
        }
    }

    /// Produce a complete option set, taking unset fields from `defaults`
    pub fn resolve(self, defaults: &OptionSet) -> OptionSet {
        let d = defaults.clone();
        OptionSet {
            output_container: self.output_container.unwrap_or(d.output_container),
            target_cqp: self.target_cqp.unwrap_or(d.target_cqp),
            rc_lookahead: self.rc_lookahead.unwrap_or(d.rc_lookahead),
            max_width: self.max_width.unwrap_or(d.max_width),
            max_height: self.max_height.unwrap_or(d.max_height),
            enable_10bit: self.enable_10bit.unwrap_or(d.enable_10bit),
            remove_images: self.remove_images.unwrap_or(d.remove_images),
            enable_watermark: self.enable_watermark.unwrap_or(d.enable_watermark),
            watermark_text: self.watermark_text.unwrap_or(d.watermark_text),
            watermark_position: self.watermark_position.unwrap_or(d.watermark_position),
            watermark_x: self.watermark_x.unwrap_or(d.watermark_x),
            watermark_y: self.watermark_y.unwrap_or(d.watermark_y),
            watermark_fontsize: self.watermark_fontsize.unwrap_or(d.watermark_fontsize),
            font_path: self.font_path.unwrap_or(d.font_path),
        }
    }

    /// Number of fields that carry a value
    pub fn set_count(&self) -> usize {
        [
            self.output_container.is_some(),
            self.target_cqp.is_some(),
            self.rc_lookahead.is_some(),
            self.max_width.is_some(),
            self.max_height.is_some(),
            self.enable_10bit.is_some(),
            self.remove_images.is_some(),
            self.enable_watermark.is_some(),
            self.watermark_text.is_some(),
            self.watermark_position.is_some(),
            self.watermark_x.is_some(),
            self.watermark_y.is_some(),
            self.watermark_fontsize.is_some(),
            self.font_path.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Merge the override layer over the file layer and resolve against defaults
pub fn resolve_options(overrides: PartialOptions, from_file: Option<PartialOptions>) -> OptionSet {
    info!(
        "Resolving options: {} overrides, {} from config file",
        overrides.set_count(),
        from_file.as_ref().map_or(0, PartialOptions::set_count)
    );

    let merged = overrides.merge(from_file.unwrap_or_default());
    let options = merged.resolve(&OptionSet::default());

    for message in check_recommended_ranges(&options) {
        warn!("{}", message);
    }
    options
}

/// Recommended bounds; values outside them are accepted with a warning
const RECOMMENDED_CQP: (u32, u32) = (19, 28);
const RECOMMENDED_LOOKAHEAD: (u32, u32) = (0, 32);
const RECOMMENDED_FONTSIZE: (u32, u32) = (8, 72);

/// Describe every option that lies outside its recommended range
pub fn check_recommended_ranges(options: &OptionSet) -> Vec<String> {
    let checks = [
        ("target_cqp", options.target_cqp, RECOMMENDED_CQP),
        ("rc_lookahead", options.rc_lookahead, RECOMMENDED_LOOKAHEAD),
        ("watermark_fontsize", options.watermark_fontsize, RECOMMENDED_FONTSIZE),
    ];

    let mut messages: Vec<String> = checks
        .iter()
        .filter(|(_, value, (min, max))| value < min || value > max)
        .map(|(name, value, (min, max))| {
            format!("{} = {} is outside the recommended range {}-{}", name, value, min, max)
        })
        .collect();

    if options.max_width == 0 || options.max_height == 0 {
        messages.push(format!(
            "max resolution {}x{} has a zero dimension",
            options.max_width, options.max_height
        ));
    }
    messages
}
