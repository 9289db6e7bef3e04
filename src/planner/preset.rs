//! Encoder argument block handed to the transcode executor

use std::fmt;

use crate::domain::model::OptionSet;
use crate::planner::filters::FilterChain;
use crate::streams::StreamMapping;

/// CUDA decode path
pub const HWACCEL: &str = "cuda";
/// NVENC HEVC encoder
pub const VIDEO_ENCODER: &str = "hevc_nvenc";
/// Constant QP rate control
pub const RATE_CONTROL: &str = "constqp";

/// Line indent used by the host's preset template
const INDENT: &str = "    ";

/// Full set of encoder directives for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentBlock {
    pub mapping: StreamMapping,
    pub qp: u32,
    pub lookahead: u32,
    pub filters: FilterChain,
}

/// A flag with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub flag: &'static str,
    pub value: String,
}

impl ArgumentBlock {
    pub fn new(options: &OptionSet, mapping: StreamMapping, filters: FilterChain) -> Self {
        Self {
            mapping,
            qp: options.target_cqp,
            lookahead: options.rc_lookahead,
            filters,
        }
    }

    /// Template lines in their fixed order
    fn lines(&self) -> Vec<Vec<Directive>> {
        let one = |flag: &'static str, value: String| vec![Directive { flag, value }];

        let map_line: Vec<Directive> = self
            .mapping
            .selectors
            .iter()
            .map(|s| Directive {
                flag: "-map",
                value: s.specifier().to_string(),
            })
            .collect();

        vec![
            one("-hwaccel", HWACCEL.to_string()),
            map_line,
            one("-c:v", VIDEO_ENCODER.to_string()),
            one("-rc", RATE_CONTROL.to_string()),
            one("-qp", self.qp.to_string()),
            one("-rc-lookahead", self.lookahead.to_string()),
            one("-c:a", "copy".to_string()),
            one("-c:s", "copy".to_string()),
            one("-map_metadata", "0".to_string()),
            one("-vf", self.filters.to_string()),
        ]
    }

    /// Argument vector, one element per flag and per value
    pub fn to_args(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .flatten()
            .flat_map(|d| [d.flag.to_string(), d.value])
            .collect()
    }

    /// Render the preset string in the host's template layout
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArgumentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in self.lines() {
            let rendered: Vec<String> = line
                .iter()
                .map(|d| format!("{} {}", d.flag, d.value))
                .collect();
            writeln!(f, "{INDENT}{}", rendered.join(" "))?;
        }
        f.write_str("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::WatermarkPlacer;
    use crate::streams::mapper::StreamMapper;

    fn block_for(options: &OptionSet) -> ArgumentBlock {
        ArgumentBlock::new(
            options,
            StreamMapper::create_mapping(options),
            FilterChain::build(options, WatermarkPlacer::resolve(options)),
        )
    }

    #[test]
    fn test_render_matches_template_layout() {
        let options = OptionSet {
            remove_images: true,
            target_cqp: 21,
            rc_lookahead: 8,
            enable_10bit: false,
            ..OptionSet::default()
        };
        let expected = "\n    -hwaccel cuda\n    -map 0:v:0 -map 0:a -map 0:s?\n    -c:v hevc_nvenc\n    -rc constqp\n    -qp 21\n    -rc-lookahead 8\n    -c:a copy\n    -c:s copy\n    -map_metadata 0\n    -vf scale='if(gt(iw\\,1280)\\,1280\\,iw):if(gt(ih\\,720)\\,720\\,ih):force_original_aspect_ratio=decrease',format=yuv420p\n  ";
        assert_eq!(block_for(&options).render(), expected);
    }

    #[test]
    fn test_args_keep_filter_chain_as_one_value() {
        let block = block_for(&OptionSet::default());
        let args = block.to_args();

        assert_eq!(&args[..4], ["-hwaccel", "cuda", "-map", "0"]);
        let vf = args.iter().position(|a| a == "-vf").unwrap();
        assert_eq!(args[vf + 1], block.filters.to_string());
        assert_eq!(vf + 2, args.len());
        assert!(args.windows(2).any(|w| w == ["-c:a", "copy"]));
        assert!(args.windows(2).any(|w| w == ["-c:s", "copy"]));
        assert!(args.windows(2).any(|w| w == ["-map_metadata", "0"]));
    }
}
