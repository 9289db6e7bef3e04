//! Human-readable info log for a transcode decision

use crate::domain::model::{OptionSet, StreamDescriptor};
use crate::domain::rules::TARGET_CODEC;

/// Fixed label for the acceleration hardware
pub const HARDWARE_LABEL: &str = "NVIDIA CUDA Acceleration";

/// Build the info log for a file that will be transcoded
pub fn transcode_summary(source: &StreamDescriptor, options: &OptionSet) -> String {
    let mut log = format!(
        "☒ Converting video to HEVC\n\
         Codec: {} → {} (NVENC)\n\
         Container: {}\n\
         Color Depth: {}\n\
         CQP: {}\n\
         RC Lookahead: {} frames\n\
         Max Resolution: {}x{}\n\
         Remove Images: {}\n\
         Watermark: {}\n",
        source.codec_name,
        TARGET_CODEC,
        options.output_container,
        options.color_depth_label(),
        options.target_cqp,
        options.rc_lookahead,
        options.max_width,
        options.max_height,
        yes_no(options.remove_images),
        if options.enable_watermark { "Enabled" } else { "Disabled" },
    );

    if options.enable_watermark {
        log.push_str(&format!(
            "  - Text: \"{}\"\n  - Position: {}\n  - Font Size: {}px\n",
            options.watermark_text, options.watermark_position, options.watermark_fontsize
        ));
    }

    log.push_str(&format!("Hardware: {}\n", HARDWARE_LABEL));
    log
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CodecType, WatermarkPosition};

    #[test]
    fn test_summary_without_watermark() {
        let source = StreamDescriptor::new(CodecType::Video, "h264");
        let log = transcode_summary(&source, &OptionSet::default());
        assert_eq!(
            log,
            "☒ Converting video to HEVC\n\
             Codec: h264 → hevc (NVENC)\n\
             Container: mkv\n\
             Color Depth: 10-bit\n\
             CQP: 23\n\
             RC Lookahead: 20 frames\n\
             Max Resolution: 1280x720\n\
             Remove Images: No\n\
             Watermark: Disabled\n\
             Hardware: NVIDIA CUDA Acceleration\n"
        );
    }

    #[test]
    fn test_summary_with_watermark_details() {
        let source = StreamDescriptor::new(CodecType::Video, "mpeg4");
        let options = OptionSet {
            enable_watermark: true,
            watermark_text: "My Channel".to_string(),
            watermark_position: WatermarkPosition::Center,
            watermark_fontsize: 30,
            remove_images: true,
            enable_10bit: false,
            ..OptionSet::default()
        };
        let log = transcode_summary(&source, &options);

        assert!(log.contains("Color Depth: 8-bit\n"));
        assert!(log.contains("Remove Images: Yes\n"));
        assert!(log.contains(
            "Watermark: Enabled\n  - Text: \"My Channel\"\n  - Position: center\n  - Font Size: 30px\nHardware:"
        ));
    }
}
