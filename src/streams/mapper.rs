//! Stream mapping policy

use tracing::debug;

use crate::domain::model::OptionSet;
use crate::streams::{MapSelector, StreamMapping};

/// Stream mapper for choosing which source streams reach the output
pub struct StreamMapper;

impl StreamMapper {
    /// Create stream mapping from the option set
    ///
    /// Removing images maps the first video, every audio and any subtitle
    /// stream explicitly, which leaves attached pictures behind. Otherwise
    /// everything is carried over.
    pub fn create_mapping(options: &OptionSet) -> StreamMapping {
        let selectors = if options.remove_images {
            vec![
                MapSelector::FirstVideo,
                MapSelector::AllAudio,
                MapSelector::OptionalSubtitles,
            ]
        } else {
            vec![MapSelector::AllStreams]
        };

        let mapping = StreamMapping { selectors };
        debug!(remove_images = options.remove_images, mapping = %mapping, "Selected stream mapping");
        mapping
    }
}
