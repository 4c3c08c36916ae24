use crate::{Pt, Size, WordCloudError};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};

/// Identifies the font a word is styled with.
///
/// Fonts that are already available to the metrics service (system fonts, or faces
/// registered up front) only need a name. Fonts that must be fetched or installed
/// before they can be measured also carry a `css_url`; the metrics cache provisions
/// each url once, the first time a word in that font is measured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRef {
    pub name: String,
    pub css_url: Option<String>,
}

impl FontRef {
    /// Refer to a font that the metrics service already knows by name
    pub fn new<S: Into<String>>(name: S) -> Result<FontRef, WordCloudError> {
        let font = FontRef {
            name: name.into(),
            css_url: None,
        };
        font.validate()?;
        Ok(font)
    }

    /// Refer to a font that must be provisioned from `css_url` before first use
    pub fn with_css_url<S: Into<String>, U: Into<String>>(
        name: S,
        css_url: U,
    ) -> Result<FontRef, WordCloudError> {
        let font = FontRef {
            name: name.into(),
            css_url: Some(css_url.into()),
        };
        font.validate()?;
        Ok(font)
    }

    pub(crate) fn validate(&self) -> Result<(), WordCloudError> {
        if self.name.is_empty() {
            return Err(WordCloudError::InvalidFontRef {
                name: self.name.clone(),
                reason: "font name is required",
            });
        }
        if matches!(&self.css_url, Some(url) if url.is_empty()) {
            return Err(WordCloudError::InvalidFontRef {
                name: self.name.clone(),
                reason: "css url must not be empty when present",
            });
        }
        Ok(())
    }
}

/// A parsed TrueType / OpenType face, used by [TtfMetrics](crate::TtfMetrics) to
/// measure words with real glyph metrics.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WordCloudError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        if face.as_face_ref().units_per_em() == 0 {
            return Err(WordCloudError::FontLoad(
                "<unnamed>".to_string(),
                "font has no units per em",
            ));
        }

        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if the face carries one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if the face carries one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the
    /// given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the
    /// given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().descender() as f32
    }

    fn glyph(&self, ch: char) -> Option<GlyphId> {
        self.face()
            .glyph_index(ch)
            .or_else(|| self.face().glyph_index('\u{FFFD}'))
            .or_else(|| self.face().glyph_index('?'))
    }

    /// Measure the tight box of `text` at `size`: the summed horizontal advances for
    /// the width, and the ink extent of the glyphs (highest ascender to lowest
    /// descender actually drawn) for the height. Text without any inked glyphs, such
    /// as a lone space, falls back to the font's ascent and descent.
    pub fn measure(&self, text: &str, size: Pt) -> Size {
        let scaling = self.scaling(size);
        let mut advance: u32 = 0;
        let mut ink: Option<(i16, i16)> = None;

        for ch in text.chars() {
            let Some(gid) = self.glyph(ch) else {
                // no glyph and no replacement glyph: reserve half an em
                advance += self.face().units_per_em() as u32 / 2;
                continue;
            };

            advance += self.face().glyph_hor_advance(gid).unwrap_or_default() as u32;
            if let Some(bbox) = self.face().glyph_bounding_box(gid) {
                ink = Some(match ink {
                    Some((low, high)) => (low.min(bbox.y_min), high.max(bbox.y_max)),
                    None => (bbox.y_min, bbox.y_max),
                });
            }
        }

        let height = match ink {
            Some((low, high)) => scaling * (high as f32 - low as f32),
            None => self.ascent(size) - self.descent(size),
        };

        Size {
            width: scaling * advance as f32,
            height,
        }
    }
}
