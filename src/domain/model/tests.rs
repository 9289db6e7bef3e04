// Unit tests for domain models

use super::*;

#[test]
fn test_option_set_defaults() {
    let options = OptionSet::default();
    assert_eq!(options.output_container, OutputContainer::Mkv);
    assert_eq!(options.target_cqp, 23);
    assert_eq!(options.rc_lookahead, 20);
    assert_eq!((options.max_width, options.max_height), (1280, 720));
    assert!(options.enable_10bit);
    assert!(!options.remove_images);
    assert!(!options.enable_watermark);
    assert_eq!(options.watermark_text, "Sample");
    assert_eq!(options.watermark_position, WatermarkPosition::BottomLeft);
    assert_eq!(options.watermark_x, "10");
    assert_eq!(options.watermark_y, "H-th-10");
    assert_eq!(options.watermark_fontsize, 14);
    assert_eq!(options.font_path, DEFAULT_FONT_PATH);
}

#[test]
fn test_pixel_format_follows_bit_depth() {
    let mut options = OptionSet::default();
    assert_eq!(options.pixel_format(), "yuv420p10le");
    assert_eq!(options.color_depth_label(), "10-bit");

    options.enable_10bit = false;
    assert_eq!(options.pixel_format(), "yuv420p");
    assert_eq!(options.color_depth_label(), "8-bit");
}

#[test]
fn test_container_parse_and_extension() {
    assert_eq!("mp4".parse::<OutputContainer>().unwrap(), OutputContainer::Mp4);
    assert_eq!(OutputContainer::Mov.extension(), ".mov");
    assert!("webm".parse::<OutputContainer>().is_err());
}

#[test]
fn test_watermark_position_parse() {
    for position in WatermarkPosition::ALL {
        assert_eq!(position.as_str().parse::<WatermarkPosition>().unwrap(), position);
    }

    let err = "middle".parse::<WatermarkPosition>().unwrap_err();
    assert!(err.to_string().contains("watermark_position"));
}

#[test]
fn test_stream_descriptor_deserialize_ffprobe_entry() {
    let json = r#"{
        "index": 2,
        "codec_name": "mjpeg",
        "codec_type": "video",
        "disposition": { "default": 0, "attached_pic": 1 }
    }"#;
    let stream: StreamDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(stream.index, Some(2));
    assert!(stream.is_video());
    assert!(stream.is_attached_picture());
}

#[test]
fn test_unknown_codec_type_maps_to_other() {
    let stream: StreamDescriptor =
        serde_json::from_str(r#"{"codec_type": "attachment", "codec_name": "ttf"}"#).unwrap();
    assert_eq!(stream.codec_type, CodecType::Other);

    let untyped: StreamDescriptor = serde_json::from_str(r#"{"codec_name": "bin_data"}"#).unwrap();
    assert_eq!(untyped.codec_type, CodecType::Other);
    assert!(!untyped.is_attached_picture());
}
