use crate::{Pt, Size};
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WordCloudError {
    #[error("invalid word weight for {word:?}: {reason}")]
    /// A [WordWeight](crate::WordWeight) had an empty word or a zero / non-finite weight
    InvalidWordWeight { word: String, reason: &'static str },

    #[error("invalid font reference {name:?}: {reason}")]
    /// A [FontRef](crate::FontRef) had an empty name or an empty source url
    InvalidFontRef { name: String, reason: &'static str },

    #[error("invalid styled word {word:?}: {reason}")]
    /// A styling policy produced a word with a missing or out-of-range field
    InvalidStyledWord { word: String, reason: &'static str },

    #[error("invalid colour {0:?}")]
    /// A colour string could not be parsed
    InvalidColour(String),

    #[error("invalid canvas size {width}x{height}, both dimensions must be positive")]
    /// The requested canvas was empty, negative, or not finite
    InvalidCanvas { width: Pt, height: Pt },

    #[error("failed to provision font {font:?} from {url}")]
    /// A font with a source url could not be made available to the metrics service.
    /// This aborts the layout run; there is no fallback font.
    FontProvisioning {
        font: String,
        url: String,
        #[source]
        source: Box<WordCloudError>,
    },

    #[error("no font named {0:?} is available for measuring")]
    /// The metrics service was asked about a font it does not know
    UnknownFont(String),

    #[error("font {0:?} could not be loaded: {1}")]
    /// A font file parsed but is unusable for measuring text
    FontLoad(String, &'static str),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("gave up placing {word:?} after {attempts} candidates")]
    /// The candidate generator produced `attempts` candidates for one word without
    /// the search ever finishing
    PlacementExhausted { word: String, attempts: usize },

    #[error("growth strategy did not grow the canvas ({current:?} -> {grown:?})")]
    /// The growth strategy returned a canvas that is not strictly larger than the
    /// current one, so growing would never converge
    GrowthStalled { current: Size, grown: Size },
}
