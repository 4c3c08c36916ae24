use crate::{Font, FontRef, Pt, Size, WordCloudError};
use id_arena::{Arena, Id};
use std::collections::HashMap;
use std::path::Path;

/// The text metrics service the layout engine measures words with.
///
/// Implementations must be deterministic: the same text, font, and size always
/// measure the same. Services backed by something asynchronous should block inside
/// these methods; the engine has a single logical thread of execution and nothing
/// else touches its state while a measurement is in flight.
pub trait TextMetrics {
    /// Make a font that carries a source url available for measuring. Called at most
    /// once per url and engine, right before the first measurement in that font.
    fn provision_font(&mut self, font: &FontRef, url: &str) -> Result<(), WordCloudError>;

    /// The rendered width and height of `text` in `font` at `size`
    fn measure(&mut self, text: &str, font: &FontRef, size: Pt) -> Result<Size, WordCloudError>;
}

/// Estimates text size from character counts alone: every character is
/// `glyph_width_em` wide and lines are `line_height_em` tall. Needs no font files, which
/// makes it handy for previews and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMetrics {
    pub glyph_width_em: f32,
    pub line_height_em: f32,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        HeuristicMetrics {
            glyph_width_em: 0.6,
            line_height_em: 1.0,
        }
    }
}

impl TextMetrics for HeuristicMetrics {
    fn provision_font(&mut self, _font: &FontRef, _url: &str) -> Result<(), WordCloudError> {
        Ok(())
    }

    fn measure(&mut self, text: &str, _font: &FontRef, size: Pt) -> Result<Size, WordCloudError> {
        Ok(Size {
            width: size * self.glyph_width_em * text.chars().count() as f32,
            height: size * self.line_height_em,
        })
    }
}

/// Measures words with real glyph metrics from TrueType / OpenType faces.
///
/// Faces are stored once and referred to by the names they were registered under, so
/// the same face can answer for both its family name and any alias a styling policy
/// uses. Fonts with a source url are provisioned by reading the url as a local file
/// path (`file://` prefixes are accepted).
#[derive(Default)]
pub struct TtfMetrics {
    pub fonts: Arena<Font>,
    names: HashMap<String, Id<Font>>,
}

impl TtfMetrics {
    pub fn new() -> TtfMetrics {
        TtfMetrics::default()
    }

    /// Add a font, registering it under its family and full names. Returns the id of
    /// the font within the arena.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let names: Vec<String> = font.family().into_iter().chain(font.name()).collect();
        let id = self.fonts.alloc(font);
        for name in names {
            self.names.entry(name).or_insert(id);
        }
        id
    }

    /// Register an additional name for an already added font
    pub fn alias<S: Into<String>>(&mut self, name: S, id: Id<Font>) {
        self.names.insert(name.into(), id);
    }

    /// Load a font file from disk and register it under `name` as well as its own names
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        name: &str,
        path: P,
    ) -> Result<Id<Font>, WordCloudError> {
        let bytes = std::fs::read(path)?;
        let id = self.add_font(Font::load(bytes)?);
        self.alias(name, id);
        Ok(id)
    }

    pub fn font(&self, name: &str) -> Option<&Font> {
        self.names.get(name).map(|&id| &self.fonts[id])
    }
}

impl TextMetrics for TtfMetrics {
    fn provision_font(&mut self, font: &FontRef, url: &str) -> Result<(), WordCloudError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        self.load_file(&font.name, path).map(|_| ())
    }

    fn measure(&mut self, text: &str, font: &FontRef, size: Pt) -> Result<Size, WordCloudError> {
        self.font(&font.name)
            .map(|face| face.measure(text, size))
            .ok_or_else(|| WordCloudError::UnknownFont(font.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_metrics_scale_with_length_and_size() {
        let font = FontRef::new("TrebuchetMS-Bold").unwrap();
        let mut metrics = HeuristicMetrics::default();
        let size = metrics.measure("Boise", &font, Pt(20.0)).unwrap();
        assert!((size.width.0 - 60.0).abs() < 1e-3);
        assert_eq!(size.height, Pt(20.0));
    }

    #[test]
    fn ttf_metrics_reject_unknown_fonts() {
        let font = FontRef::new("Missing").unwrap();
        let mut metrics = TtfMetrics::new();
        assert!(matches!(
            metrics.measure("Tokyo", &font, Pt(12.0)),
            Err(WordCloudError::UnknownFont(name)) if name == "Missing"
        ));
    }

    #[test]
    fn ttf_provisioning_surfaces_missing_files() {
        let font = FontRef::with_css_url("Lacquer", "file:///definitely/not/here.ttf").unwrap();
        let mut metrics = TtfMetrics::new();
        let url = font.css_url.clone().unwrap();
        assert!(matches!(
            metrics.provision_font(&font, &url),
            Err(WordCloudError::Io(_))
        ));
    }

    const DEJAVU_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSansMono.ttf");

    #[test]
    fn added_fonts_answer_to_their_names_and_aliases() {
        let bytes = include_bytes!("../assets/DejaVuSansMono.ttf");
        let mut metrics = TtfMetrics::new();
        let id = metrics.add_font(Font::load(bytes.to_vec()).unwrap());
        metrics.alias("Terminal", id);

        let family = FontRef::new("DejaVu Sans Mono").unwrap();
        let alias = FontRef::new("Terminal").unwrap();
        let by_family = metrics.measure("Budapest", &family, Pt(24.0)).unwrap();
        let by_alias = metrics.measure("Budapest", &alias, Pt(24.0)).unwrap();
        assert_eq!(by_family, by_alias);
        assert!(by_family.width > Pt(0.0) && by_family.height > Pt(0.0));
        assert_eq!(metrics.fonts.len(), 1);
    }

    #[test]
    fn provisioning_a_file_url_makes_the_font_measurable() {
        let url = format!("file://{DEJAVU_PATH}");
        let font = FontRef::with_css_url("Retro", url.as_str()).unwrap();
        let mut metrics = TtfMetrics::new();
        assert!(metrics.measure("Venice", &font, Pt(30.0)).is_err());

        metrics.provision_font(&font, &url).unwrap();
        let size = metrics.measure("Venice", &font, Pt(30.0)).unwrap();
        assert!(size.width > Pt(0.0));
        assert!(metrics.font("DejaVu Sans Mono").is_some());
    }

    #[test]
    fn files_can_be_loaded_under_any_name() {
        let mut metrics = TtfMetrics::new();
        metrics.load_file("Mono", DEJAVU_PATH).unwrap();
        let short = metrics.measure("Oslo", &FontRef::new("Mono").unwrap(), Pt(20.0)).unwrap();
        let long = metrics.measure("Amsterdam", &FontRef::new("Mono").unwrap(), Pt(20.0)).unwrap();
        assert!(long.width > short.width);
    }
}
