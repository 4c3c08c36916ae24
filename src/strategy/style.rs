use crate::colour::{colours, Colour};
use crate::{FontRef, Pt, StyledWord, WordCloudError, WordWeight};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Turns a raw word into a styled one. The engine calls this once per word, in input
/// order, when the cloud is built.
pub trait StylePolicy {
    fn style(&mut self, word: &WordWeight) -> Result<StyledWord, WordCloudError>;
}

impl<F> StylePolicy for F
where
    F: FnMut(&WordWeight) -> Result<StyledWord, WordCloudError>,
{
    fn style(&mut self, word: &WordWeight) -> Result<StyledWord, WordCloudError> {
        self(word)
    }
}

/// Weights are expected on a 0 to 10 scale; this maps them linearly onto a font size
/// range, so a weight of 0 would get `min` and a weight of 10 gets `max`.
fn linear_size(weight: f32, min: Pt, max: Pt) -> Pt {
    (max - min) * (weight / 10.0) + min
}

/// The default policy: one font and colour for every word, with the font size growing
/// linearly with the weight
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSizeStyle {
    pub font: FontRef,
    pub min_size: Pt,
    pub max_size: Pt,
    pub colour: Colour,
}

impl Default for LinearSizeStyle {
    fn default() -> Self {
        LinearSizeStyle {
            font: FontRef {
                name: "TrebuchetMS-Bold".to_string(),
                css_url: None,
            },
            min_size: Pt(10.0),
            max_size: Pt(60.0),
            colour: colours::BLACK,
        }
    }
}

impl LinearSizeStyle {
    /// The default style with white text, for dark backgrounds
    pub fn dark() -> LinearSizeStyle {
        LinearSizeStyle {
            colour: colours::WHITE,
            ..Default::default()
        }
    }

    pub fn with_font(mut self, font: FontRef) -> LinearSizeStyle {
        self.font = font;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> LinearSizeStyle {
        self.colour = colour;
        self
    }

    pub fn with_size_range(mut self, min: Pt, max: Pt) -> LinearSizeStyle {
        self.min_size = min;
        self.max_size = max;
        self
    }
}

impl StylePolicy for LinearSizeStyle {
    fn style(&mut self, word: &WordWeight) -> Result<StyledWord, WordCloudError> {
        StyledWord::new(
            word.word(),
            self.font.clone(),
            linear_size(word.weight(), self.min_size, self.max_size),
            self.colour,
        )
    }
}

/// Every word gets the same size; the weight shows through the colour's opacity instead
/// (a weight of 10 is fully opaque).
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSizeStyle {
    pub font: FontRef,
    pub size: Pt,
    pub colour: Colour,
}

impl Default for FixedSizeStyle {
    fn default() -> Self {
        FixedSizeStyle {
            font: FontRef {
                name: "CourierNewPS-BoldMT".to_string(),
                css_url: None,
            },
            size: Pt(60.0),
            colour: colours::GREEN,
        }
    }
}

impl StylePolicy for FixedSizeStyle {
    fn style(&mut self, word: &WordWeight) -> Result<StyledWord, WordCloudError> {
        let alpha = self.colour.alpha() * (word.weight() / 10.0);
        StyledWord::new(
            word.word(),
            self.font.clone(),
            self.size,
            self.colour.with_alpha(alpha),
        )
    }
}

/// Linear sizing with each word's colour drawn at random from a palette
#[derive(Debug, Clone)]
pub struct PaletteStyle<R = ChaCha8Rng> {
    pub sizing: LinearSizeStyle,
    pub palette: Vec<Colour>,
    rng: R,
}

impl PaletteStyle<ChaCha8Rng> {
    /// A palette style whose colour choices are reproducible for a given seed
    pub fn seeded(sizing: LinearSizeStyle, palette: Vec<Colour>, seed: u64) -> Self {
        PaletteStyle::with_rng(sizing, palette, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Red and forest green, in the given font
    pub fn festive(font: FontRef, seed: u64) -> Self {
        PaletteStyle::seeded(
            LinearSizeStyle::default().with_font(font),
            vec![colours::RED, colours::FOREST_GREEN],
            seed,
        )
    }
}

impl<R: Rng> PaletteStyle<R> {
    pub fn with_rng(sizing: LinearSizeStyle, palette: Vec<Colour>, rng: R) -> Self {
        PaletteStyle {
            sizing,
            palette,
            rng,
        }
    }
}

impl<R: Rng> StylePolicy for PaletteStyle<R> {
    fn style(&mut self, word: &WordWeight) -> Result<StyledWord, WordCloudError> {
        let colour = if self.palette.is_empty() {
            self.sizing.colour
        } else {
            self.palette[self.rng.random_range(0..self.palette.len())]
        };
        StyledWord::new(
            word.word(),
            self.sizing.font.clone(),
            linear_size(word.weight(), self.sizing.min_size, self.sizing.max_size),
            colour,
        )
    }
}
