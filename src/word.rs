use crate::{Colour, FontRef, Pt, Rect, WordCloudError};

/// A raw input word and how important it is. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct WordWeight {
    word: String,
    weight: f32,
}

impl WordWeight {
    /// Create a word; fails if the word is empty or the weight is zero or not finite
    pub fn new<S: Into<String>>(word: S, weight: f32) -> Result<WordWeight, WordCloudError> {
        let word = word.into();
        if word.is_empty() {
            return Err(WordCloudError::InvalidWordWeight {
                word,
                reason: "word is required",
            });
        }
        if weight == 0.0 || !weight.is_finite() {
            return Err(WordCloudError::InvalidWordWeight {
                word,
                reason: "weight must be a non-zero number",
            });
        }
        Ok(WordWeight { word, weight })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }
}

/// A word after styling: everything needed to measure and draw it
#[derive(Debug, Clone, PartialEq)]
pub struct StyledWord {
    pub word: String,
    pub font: FontRef,
    pub font_size: Pt,
    pub colour: Colour,
}

impl StyledWord {
    /// Create a styled word, validating every field. Styling policies must build their
    /// output through this constructor.
    pub fn new<S: Into<String>>(
        word: S,
        font: FontRef,
        font_size: Pt,
        colour: Colour,
    ) -> Result<StyledWord, WordCloudError> {
        let word = word.into();
        let invalid = |word: String, reason| WordCloudError::InvalidStyledWord { word, reason };

        if word.is_empty() {
            return Err(invalid(word, "word is required"));
        }
        if font.validate().is_err() {
            return Err(invalid(word, "font must be a valid font reference"));
        }
        if !font_size.is_finite() || font_size <= Pt(0.0) {
            return Err(invalid(word, "font size must be positive"));
        }
        if !colour.is_valid() {
            return Err(invalid(word, "colour components must lie within 0.0..=1.0"));
        }

        Ok(StyledWord {
            word,
            font,
            font_size,
            colour,
        })
    }
}

/// A word that has found its spot. The offset is relative to the canvas center, so the
/// placement stays valid while the canvas grows around it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub offset: (Pt, Pt),
    pub word: StyledWord,
}

impl PlacedWord {
    /// The absolute center of the word on a canvas centered at `center`
    pub fn center_on(&self, center: (Pt, Pt)) -> (Pt, Pt) {
        (center.0 + self.offset.0, center.1 + self.offset.1)
    }
}

/// A placed word in absolute canvas coordinates, ready for a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedWord {
    pub word: StyledWord,
    /// Absolute center of the word's box on the final canvas
    pub center: (Pt, Pt),
    /// Offset of the center from the canvas center
    pub offset: (Pt, Pt),
    /// The measured box of the word around `center`, without the buffer margin
    pub bounds: Rect,
}
