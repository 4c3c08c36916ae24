use crate::{Size, WordCloudError};

/// Decides how much larger the canvas gets when the words don't fit.
///
/// `current` is the canvas that was too small; `original` is the size the caller
/// asked for. The result must be at least as large as `current` in both dimensions
/// and strictly larger in one of them, otherwise the layout would never converge.
pub trait GrowthStrategy {
    fn grow(&mut self, current: Size, original: Size) -> Size;
}

impl<F> GrowthStrategy for F
where
    F: FnMut(Size, Size) -> Size,
{
    fn grow(&mut self, current: Size, original: Size) -> Size {
        self(current, original)
    }
}

/// The default: scale both dimensions by the same factor (1.1, i.e. 10% per step)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleGrowth {
    pub factor: f32,
}

impl Default for ScaleGrowth {
    fn default() -> Self {
        ScaleGrowth { factor: 1.1 }
    }
}

impl ScaleGrowth {
    pub fn new(factor: f32) -> ScaleGrowth {
        ScaleGrowth { factor }
    }
}

impl GrowthStrategy for ScaleGrowth {
    fn grow(&mut self, current: Size, _original: Size) -> Size {
        Size {
            width: current.width * self.factor,
            height: current.height * self.factor,
        }
    }
}

/// Apply one growth step, refusing results that would stall the layout
pub(crate) fn grow_checked<G: GrowthStrategy + ?Sized>(
    growth: &mut G,
    current: Size,
    original: Size,
) -> Result<Size, WordCloudError> {
    let grown = growth.grow(current, original);
    let finite = grown.width.is_finite() && grown.height.is_finite();
    let monotonic = grown.width >= current.width && grown.height >= current.height;
    let larger = grown.width > current.width || grown.height > current.height;

    if finite && monotonic && larger {
        Ok(grown)
    } else {
        Err(WordCloudError::GrowthStalled { current, grown })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt;

    #[test]
    fn scale_growth_adds_ten_percent() {
        let original = Size::new(100.0, 50.0);
        let grown = grow_checked(&mut ScaleGrowth::default(), original, original).unwrap();
        assert!((grown.width.0 - 110.0).abs() < 1e-3);
        assert!((grown.height.0 - 55.0).abs() < 1e-3);
    }

    #[test]
    fn growing_one_side_is_enough() {
        let mut taller = |current: Size, _original: Size| Size {
            width: current.width,
            height: current.height + Pt(20.0),
        };
        let start = Size::new(100.0, 100.0);
        let grown = grow_checked(&mut taller, start, start).unwrap();
        assert_eq!(grown, Size::new(100.0, 120.0));
    }

    #[test]
    fn stalled_or_shrinking_growth_is_an_error() {
        let start = Size::new(100.0, 100.0);
        let mut same = |current: Size, _original: Size| current;
        assert!(matches!(
            grow_checked(&mut same, start, start),
            Err(WordCloudError::GrowthStalled { .. })
        ));

        let mut lopsided = |current: Size, _original: Size| Size {
            width: current.width * 2.0,
            height: current.height * 0.5,
        };
        assert!(grow_checked(&mut lopsided, start, start).is_err());
        assert!(grow_checked(&mut ScaleGrowth::new(f32::INFINITY), start, start).is_err());
    }
}
