use crate::{FontRef, Pt, Size, TextMetrics, WordCloudError};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    word: String,
    font_size: u32,
    font_name: String,
}

impl MetricsKey {
    fn new(word: &str, font: &FontRef, font_size: Pt) -> MetricsKey {
        MetricsKey {
            word: word.to_string(),
            font_size: font_size.0.to_bits(),
            font_name: font.name.clone(),
        }
    }
}

/// Memoizes a [TextMetrics] service by word, font size, and font name, and makes
/// sure every font source url is provisioned exactly once before it is first needed.
///
/// A layout run measures the same words over and over (preflight sizing, every
/// placement round, every replay of placed words), so only the first measurement of
/// each key reaches the service.
pub struct MetricsCache<M> {
    service: M,
    sizes: HashMap<MetricsKey, Size>,
    provisioned: HashSet<String>,
}

impl<M: TextMetrics> MetricsCache<M> {
    pub fn new(service: M) -> MetricsCache<M> {
        MetricsCache {
            service,
            sizes: HashMap::new(),
            provisioned: HashSet::new(),
        }
    }

    /// Measure `word` in `font` at `font_size`, consulting the service only on a miss
    pub fn measure(
        &mut self,
        word: &str,
        font: &FontRef,
        font_size: Pt,
    ) -> Result<Size, WordCloudError> {
        let key = MetricsKey::new(word, font, font_size);
        if let Some(size) = self.sizes.get(&key) {
            return Ok(*size);
        }

        self.ensure_provisioned(font)?;
        let size = self.service.measure(word, font, font_size)?;
        self.sizes.insert(key, size);
        Ok(size)
    }

    fn ensure_provisioned(&mut self, font: &FontRef) -> Result<(), WordCloudError> {
        let Some(url) = &font.css_url else {
            return Ok(());
        };
        if self.provisioned.contains(url) {
            return Ok(());
        }

        log::debug!("provisioning font {:?} from {}", font.name, url);
        self.service
            .provision_font(font, url)
            .map_err(|source| WordCloudError::FontProvisioning {
                font: font.name.clone(),
                url: url.clone(),
                source: Box::new(source),
            })?;
        self.provisioned.insert(url.clone());
        Ok(())
    }

    pub fn is_provisioned(&self, url: &str) -> bool {
        self.provisioned.contains(url)
    }

    /// Number of distinct measurements held
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn service(&self) -> &M {
        &self.service
    }

    pub fn into_inner(self) -> M {
        self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingMetrics {
        measured: Vec<String>,
        provisioned: Vec<String>,
        fail_provisioning: bool,
    }

    impl TextMetrics for CountingMetrics {
        fn provision_font(&mut self, _font: &FontRef, url: &str) -> Result<(), WordCloudError> {
            if self.fail_provisioning {
                return Err(WordCloudError::UnknownFont(url.to_string()));
            }
            self.provisioned.push(url.to_string());
            Ok(())
        }

        fn measure(
            &mut self,
            text: &str,
            _font: &FontRef,
            size: Pt,
        ) -> Result<Size, WordCloudError> {
            self.measured.push(text.to_string());
            Ok(Size {
                width: size * text.len() as f32,
                height: size,
            })
        }
    }

    #[test]
    fn repeated_measurements_hit_the_service_once() {
        let font = FontRef::new("TrebuchetMS-Bold").unwrap();
        let mut cache = MetricsCache::new(CountingMetrics::default());

        let first = cache.measure("Denver", &font, Pt(12.5)).unwrap();
        let second = cache.measure("Denver", &font, Pt(12.5)).unwrap();
        assert_eq!(first.width.0.to_bits(), second.width.0.to_bits());
        assert_eq!(first.height.0.to_bits(), second.height.0.to_bits());
        assert_eq!(cache.service().measured, vec!["Denver"]);

        cache.measure("Denver", &font, Pt(13.0)).unwrap();
        let other_font = FontRef::new("CourierNewPS-BoldMT").unwrap();
        cache.measure("Denver", &other_font, Pt(12.5)).unwrap();
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.service().measured.len(), 3);
    }

    #[test]
    fn fonts_with_urls_are_provisioned_once_on_first_use() {
        let url = "https://fonts.googleapis.com/css2?family=Lacquer&display=swap";
        let font = FontRef::with_css_url("Lacquer", url).unwrap();
        let mut cache = MetricsCache::new(CountingMetrics::default());
        assert!(!cache.is_provisioned(url));

        cache.measure("Boo", &font, Pt(30.0)).unwrap();
        cache.measure("Spooky", &font, Pt(30.0)).unwrap();
        cache.measure("Boo", &font, Pt(40.0)).unwrap();

        assert!(cache.is_provisioned(url));
        assert_eq!(cache.into_inner().provisioned, vec![url]);
    }

    #[test]
    fn provisioning_failures_are_reported_and_not_remembered() {
        let font =
            FontRef::with_css_url("Cinzel Decorative", "https://example.invalid/cinzel.css")
                .unwrap();
        let mut cache = MetricsCache::new(CountingMetrics {
            fail_provisioning: true,
            ..Default::default()
        });

        let err = cache.measure("Holly", &font, Pt(20.0)).unwrap_err();
        assert!(matches!(
            err,
            WordCloudError::FontProvisioning { ref font, .. } if font == "Cinzel Decorative"
        ));
        assert!(!cache.is_provisioned("https://example.invalid/cinzel.css"));
        assert!(cache.is_empty());
        assert!(cache.service().measured.is_empty());
    }
}
