use crate::collision::{CollisionIndex, DEFAULT_BUFFER};
use crate::preflight::preflight_grow;
use crate::strategy::{
    grow_checked, Candidate, CandidateGenerator, GrowthStrategy, LinearSizeStyle, ScaleGrowth,
    SearchFrame, SpiralCandidates, StylePolicy,
};
use crate::trace::{LayoutTrace, RejectedCandidate, Rejection, SearchOutcome, SearchTrace};
use crate::{
    HeuristicMetrics, MetricsCache, PlacedWord, PositionedWord, Pt, Rect, Size, StyledWord,
    TextMetrics, WordCloudError, WordWeight,
};
use std::collections::VecDeque;

/// Candidates drawn for one word before the search is abandoned with
/// [WordCloudError::PlacementExhausted]
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Knobs for a layout run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Grow the canvas until every word fits. When off, the requested canvas is used
    /// as-is and words that don't fit are reported in [Layout::unplaced].
    pub grow_to_fit: bool,
    /// Record every search into a [LayoutTrace] for visualization
    pub debug: bool,
    /// Space kept between words, and between words and the canvas edge
    pub buffer: Pt,
    /// Upper bound on candidates per word search; `None` searches until the candidate
    /// generator has been seen past every canvas edge, however long that takes
    pub max_attempts: Option<usize>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            grow_to_fit: true,
            debug: false,
            buffer: DEFAULT_BUFFER,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// The result of a layout run: the final canvas and every word on it, in the order
/// the words were placed
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub words: Vec<PositionedWord>,
    /// Words that found no spot. Always empty when growing to fit.
    pub unplaced: Vec<StyledWord>,
    /// The canvas size used by each placement round, in order
    pub canvas_history: Vec<Size>,
    pub trace: Option<LayoutTrace>,
}

impl Layout {
    /// Whether every input word was placed
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// The rectangle of the whole canvas
    pub fn canvas(&self) -> Rect {
        Rect::canvas(self.size)
    }
}

/// Configures a [WordCloud] before its words are styled
pub struct WordCloudBuilder<S = LinearSizeStyle, C = SpiralCandidates, G = ScaleGrowth> {
    size: Size,
    options: LayoutOptions,
    style: S,
    placement: C,
    growth: G,
}

impl WordCloudBuilder {
    /// Start a cloud on a canvas of the given size, with the default strategies
    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> WordCloudBuilder {
        WordCloudBuilder {
            size: Size::new(width, height),
            options: LayoutOptions::default(),
            style: LinearSizeStyle::default(),
            placement: SpiralCandidates::default(),
            growth: ScaleGrowth::default(),
        }
    }
}

impl<S, C, G> WordCloudBuilder<S, C, G> {
    /// Use `style` to turn weights into fonts, sizes, and colours
    pub fn style<S2: StylePolicy>(self, style: S2) -> WordCloudBuilder<S2, C, G> {
        WordCloudBuilder {
            size: self.size,
            options: self.options,
            style,
            placement: self.placement,
            growth: self.growth,
        }
    }

    /// Use `placement` to propose the points each word is tried at
    pub fn placement<C2: CandidateGenerator>(self, placement: C2) -> WordCloudBuilder<S, C2, G> {
        WordCloudBuilder {
            size: self.size,
            options: self.options,
            style: self.style,
            placement,
            growth: self.growth,
        }
    }

    /// Use `growth` to decide how the canvas grows when words don't fit
    pub fn growth<G2: GrowthStrategy>(self, growth: G2) -> WordCloudBuilder<S, C, G2> {
        WordCloudBuilder {
            size: self.size,
            options: self.options,
            style: self.style,
            placement: self.placement,
            growth,
        }
    }

    /// Replace every layout option at once
    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Grow the canvas until every word fits (on by default)
    pub fn grow_to_fit(mut self, grow_to_fit: bool) -> Self {
        self.options.grow_to_fit = grow_to_fit;
        self
    }

    /// Record a [LayoutTrace] of every search (off by default)
    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Space kept between words and around the canvas edge
    pub fn buffer<B: Into<Pt>>(mut self, buffer: B) -> Self {
        self.options.buffer = buffer.into();
        self
    }

    /// Cap the candidates tried per word, `None` for no cap
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.options.max_attempts = max_attempts;
        self
    }
}

impl<S: StylePolicy, C: CandidateGenerator, G: GrowthStrategy> WordCloudBuilder<S, C, G> {
    /// Style every word and set up the engine. Words keep their input order, which is
    /// also the order they are placed in.
    pub fn build<M: TextMetrics>(
        mut self,
        words: &[WordWeight],
        metrics: M,
    ) -> Result<WordCloud<M, C, G>, WordCloudError> {
        if !self.size.is_positive() {
            return Err(WordCloudError::InvalidCanvas {
                width: self.size.width,
                height: self.size.height,
            });
        }

        let style = &mut self.style;
        let styled = words
            .iter()
            .map(|word| style.style(word))
            .collect::<Result<Vec<StyledWord>, WordCloudError>>()?;

        let (x_ratio, y_ratio) = self.size.aspect_ratios();
        Ok(WordCloud {
            original: self.size,
            options: self.options,
            x_ratio,
            y_ratio,
            pending: styled.iter().cloned().collect(),
            words: styled,
            placed: Vec::new(),
            metrics: MetricsCache::new(metrics),
            hitboxes: CollisionIndex::new(self.options.buffer),
            placement: self.placement,
            growth: self.growth,
            trace: self.options.debug.then(LayoutTrace::default),
        })
    }
}

enum Attempt {
    Placed { x: Pt, y: Pt },
    NeedsGrowth,
    Exhausted,
}

impl Attempt {
    fn outcome(&self) -> SearchOutcome {
        match self {
            Attempt::Placed { .. } => SearchOutcome::Placed,
            Attempt::NeedsGrowth => SearchOutcome::NeedsGrowth,
            Attempt::Exhausted => SearchOutcome::Exhausted,
        }
    }
}

enum Verdict {
    Fits(Rect),
    Rejected(Rejection),
}

/// Which canvas edges the candidates of one search have crossed so far
#[derive(Default)]
struct Breaches {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl Breaches {
    fn observe(&mut self, x: Pt, y: Pt, canvas: Size) {
        self.left |= x < Pt(0.0);
        self.right |= x > canvas.width;
        self.top |= y < Pt(0.0);
        self.bottom |= y > canvas.height;
    }

    fn all(&self) -> bool {
        self.left && self.right && self.top && self.bottom
    }
}

/// The layout engine.
///
/// Words are placed one at a time, in input order, at the first candidate point
/// (from the [CandidateGenerator]) where the word's box neither overlaps an already
/// placed word nor reaches into the canvas border. When growing to fit, a round ends
/// as soon as a word can't be placed; the canvas then grows, the words placed so far
/// are replayed at the same offsets from the new center, and the remaining words are
/// tried again. Before the first round, the canvas is grown by
/// [preflight sizing](crate::preflight) so rounds that could never succeed are skipped.
///
/// Termination: the growth strategy is checked on every step, and each word search is
/// capped by [LayoutOptions::max_attempts]. With the cap disabled, a candidate
/// generator that never moves past all four canvas edges searches forever.
///
/// # Example
///
/// ```
/// use word_cloud::strategy::SpiralCandidates;
/// use word_cloud::{HeuristicMetrics, WordCloud, WordWeight};
///
/// let words = vec![
///     WordWeight::new("A", 10.0)?,
///     WordWeight::new("BB", 5.0)?,
///     WordWeight::new("CCC", 1.0)?,
/// ];
///
/// let layout = WordCloud::builder(100.0, 100.0)
///     .placement(SpiralCandidates::seeded(7))
///     .build(&words, HeuristicMetrics::default())?
///     .layout()?;
///
/// assert_eq!(layout.words.len(), 3);
/// assert!(layout.size.width.0 >= 100.0);
/// # Ok::<(), word_cloud::WordCloudError>(())
/// ```
pub struct WordCloud<M, C = SpiralCandidates, G = ScaleGrowth> {
    original: Size,
    options: LayoutOptions,
    x_ratio: f32,
    y_ratio: f32,
    words: Vec<StyledWord>,
    pending: VecDeque<StyledWord>,
    placed: Vec<PlacedWord>,
    metrics: MetricsCache<M>,
    hitboxes: CollisionIndex,
    placement: C,
    growth: G,
    trace: Option<LayoutTrace>,
}

impl WordCloud<HeuristicMetrics> {
    /// Start configuring a word cloud on a canvas of the given size
    pub fn builder<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> WordCloudBuilder {
        WordCloudBuilder::new(width, height)
    }
}

impl<M: TextMetrics, C: CandidateGenerator, G: GrowthStrategy> WordCloud<M, C, G> {
    /// The styled words, in input order
    pub fn words(&self) -> &[StyledWord] {
        &self.words
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Run the layout to completion
    pub fn layout(mut self) -> Result<Layout, WordCloudError> {
        let mut canvas = self.original;
        if self.options.grow_to_fit {
            canvas = preflight_grow(
                &self.words,
                &mut self.metrics,
                &mut self.growth,
                canvas,
                self.original,
            )?;
            log::debug!("preflight sized the canvas to {canvas:?}");
        }

        let mut history = Vec::new();
        loop {
            history.push(canvas);
            let complete = self.place_pending(canvas)?;
            if complete || !self.options.grow_to_fit {
                break;
            }

            canvas = grow_checked(&mut self.growth, canvas, self.original)?;
            log::debug!("growing canvas to {canvas:?} because words couldn't fit");
        }

        if self.options.debug {
            let frame = self.frame(canvas);
            let (_, probe) = self.search(None, &frame)?;
            if let Some(trace) = self.trace.as_mut() {
                trace.probe = probe;
            }
        }

        self.finish(canvas, history)
    }

    fn frame(&self, canvas: Size) -> SearchFrame {
        SearchFrame {
            size: canvas,
            center: canvas.center(),
            x_ratio: self.x_ratio,
            y_ratio: self.y_ratio,
        }
    }

    /// One placement round. Returns whether every pending word was placed.
    fn place_pending(&mut self, canvas: Size) -> Result<bool, WordCloudError> {
        let frame = self.frame(canvas);
        log::debug!(
            "placing {} pending words around {} placed words on {canvas:?}",
            self.pending.len(),
            self.placed.len()
        );

        self.hitboxes.clear();
        for placed in &self.placed {
            let (x, y) = placed.center_on(frame.center);
            let word = &placed.word;
            let size = self.metrics.measure(&word.word, &word.font, word.font_size)?;
            self.hitboxes.add(Rect::centered(x, y, size));
        }

        let mut unplaced = VecDeque::new();
        let mut complete = true;
        while let Some(word) = self.pending.pop_front() {
            let (attempt, search) = self.search(Some(&word), &frame)?;
            if let (Some(search), Some(trace)) = (search, self.trace.as_mut()) {
                trace.searches.push(search);
            }

            if let Attempt::Placed { x, y } = attempt {
                log::trace!("placed {:?} at ({x}, {y})", word.word);
                self.placed.push(PlacedWord {
                    offset: (x - frame.center.0, y - frame.center.1),
                    word,
                });
                continue;
            }

            log::trace!("could not place {:?}: {:?}", word.word, attempt.outcome());
            complete = false;
            unplaced.push_back(word);
            if self.options.grow_to_fit {
                unplaced.extend(self.pending.drain(..));
                break;
            }
        }

        self.pending = unplaced;
        Ok(complete)
    }

    /// Search for a spot for `word`. With no word, just walks the candidate generator
    /// over the canvas until it has crossed every edge.
    fn search(
        &mut self,
        word: Option<&StyledWord>,
        frame: &SearchFrame,
    ) -> Result<(Attempt, Option<SearchTrace>), WordCloudError> {
        let mut record = self
            .options
            .debug
            .then(|| SearchTrace::new(word.map(|w| w.word.as_str()), frame.size));
        let cap = match word {
            Some(_) => self.options.max_attempts,
            None => Some(self.options.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)),
        };

        let mut breaches = Breaches::default();
        let mut state: Option<C::State> = None;
        let mut attempts = 0;

        let attempt = loop {
            if breaches.all() {
                break Attempt::Exhausted;
            }
            if cap.is_some_and(|max| attempts >= max) {
                match word {
                    Some(word) => {
                        return Err(WordCloudError::PlacementExhausted {
                            word: word.word.clone(),
                            attempts,
                        })
                    }
                    None => break Attempt::Exhausted,
                }
            }

            attempts += 1;
            let Candidate { x, y, state: next } = self.placement.next(frame, state.as_ref());
            state = Some(next);
            if let Some(record) = record.as_mut() {
                record.path.push((x, y));
            }

            if let Some(word) = word {
                match self.evaluate(word, x, y, frame.size)? {
                    Verdict::Fits(bounds) => {
                        self.hitboxes.add(bounds);
                        break Attempt::Placed { x, y };
                    }
                    Verdict::Rejected(reason) => {
                        if let Some(record) = record.as_mut() {
                            record.rejections.push(RejectedCandidate { x, y, reason });
                        }
                        // stop at the border so the canvas grows and the cloud stays tight
                        if reason == Rejection::OutsideBorders && self.options.grow_to_fit {
                            break Attempt::NeedsGrowth;
                        }
                    }
                }
            }

            breaches.observe(x, y, frame.size);
        };

        if let Some(record) = record.as_mut() {
            record.outcome = attempt.outcome();
        }
        Ok((attempt, record))
    }

    fn evaluate(
        &mut self,
        word: &StyledWord,
        x: Pt,
        y: Pt,
        canvas: Size,
    ) -> Result<Verdict, WordCloudError> {
        if self.hitboxes.collides_point(x, y) {
            return Ok(Verdict::Rejected(Rejection::PointCollision));
        }

        let size = self.metrics.measure(&word.word, &word.font, word.font_size)?;
        let bounds = Rect::centered(x, y, size);
        if self.hitboxes.collides_rect(&bounds) {
            Ok(Verdict::Rejected(Rejection::RectCollision))
        } else if self.hitboxes.outside_borders(&bounds, canvas) {
            Ok(Verdict::Rejected(Rejection::OutsideBorders))
        } else {
            Ok(Verdict::Fits(bounds))
        }
    }

    fn finish(mut self, canvas: Size, canvas_history: Vec<Size>) -> Result<Layout, WordCloudError> {
        let center = canvas.center();
        let mut words = Vec::with_capacity(self.placed.len());
        for placed in self.placed.drain(..) {
            let (x, y) = placed.center_on(center);
            let word = placed.word;
            let size = self.metrics.measure(&word.word, &word.font, word.font_size)?;
            words.push(PositionedWord {
                center: (x, y),
                offset: placed.offset,
                bounds: Rect::centered(x, y, size),
                word,
            });
        }

        if !self.pending.is_empty() {
            log::warn!(
                "{} of {} words did not fit on the {canvas:?} canvas",
                self.pending.len(),
                self.words.len()
            );
        }

        Ok(Layout {
            size: canvas,
            words,
            unplaced: self.pending.drain(..).collect(),
            canvas_history,
            trace: self.trace.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::PolarCurveCandidates;
    use crate::{colours, FontRef};

    fn words(list: &[(&str, f32)]) -> Vec<WordWeight> {
        list.iter()
            .map(|(word, weight)| WordWeight::new(*word, *weight).unwrap())
            .collect()
    }

    /// Always proposes the same point, so a search only ends through the attempt cap
    struct Stuck;

    impl CandidateGenerator for Stuck {
        type State = ();

        fn next(&mut self, frame: &SearchFrame, _previous: Option<&()>) -> Candidate<()> {
            Candidate {
                x: frame.center.0,
                y: frame.center.1,
                state: (),
            }
        }
    }

    #[test]
    fn builder_rejects_empty_canvases() {
        let result = WordCloud::builder(0.0, 100.0)
            .build(&words(&[("X", 1.0)]), HeuristicMetrics::default());
        assert!(matches!(result, Err(WordCloudError::InvalidCanvas { .. })));
    }

    #[test]
    fn builder_surfaces_styling_failures() {
        let result = WordCloud::builder(100.0, 100.0)
            .build(&words(&[("Gone", -5.0)]), HeuristicMetrics::default());
        assert!(matches!(result, Err(WordCloudError::InvalidStyledWord { .. })));
    }

    #[test]
    fn words_are_styled_once_in_input_order() {
        let cloud = WordCloud::builder(100.0, 100.0)
            .placement(SpiralCandidates::seeded(1))
            .build(
                &words(&[("Seattle", 10.0), ("Boston", 10.0), ("Fort", 1.0)]),
                HeuristicMetrics::default(),
            )
            .unwrap();
        let styled: Vec<&str> = cloud.words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(styled, vec!["Seattle", "Boston", "Fort"]);
        assert_eq!(cloud.words()[0].font_size, cloud.words()[1].font_size);
    }

    #[test]
    fn single_word_lands_on_the_center() {
        let layout = WordCloud::builder(50.0, 50.0)
            .placement(SpiralCandidates::seeded(3))
            .build(&words(&[("X", 1.0)]), HeuristicMetrics::default())
            .unwrap()
            .layout()
            .unwrap();
        assert_eq!(layout.words.len(), 1);
        assert_eq!(layout.size, Size::new(50.0, 50.0));
        assert_eq!(layout.words[0].center, (Pt(25.0), Pt(25.0)));
        assert_eq!(layout.words[0].offset, (Pt(0.0), Pt(0.0)));
    }

    #[test]
    fn stuck_generators_hit_the_attempt_cap() {
        let result = WordCloud::builder(100.0, 100.0)
            .placement(Stuck)
            .max_attempts(Some(500))
            .build(&words(&[("A", 5.0), ("B", 5.0)]), HeuristicMetrics::default())
            .unwrap()
            .layout();
        match result {
            Err(WordCloudError::PlacementExhausted { word, attempts }) => {
                assert_eq!(word, "B");
                assert_eq!(attempts, 500);
            }
            other => panic!("expected the search to be exhausted, got {other:?}"),
        }
    }

    #[test]
    fn stalled_growth_is_reported() {
        let result = WordCloud::builder(60.0, 60.0)
            .growth(|current: Size, _original: Size| current)
            .placement(SpiralCandidates::seeded(3))
            .build(&words(&[("Enormous", 10.0)]), HeuristicMetrics::default())
            .unwrap()
            .layout();
        assert!(matches!(result, Err(WordCloudError::GrowthStalled { .. })));
    }

    #[test]
    fn traces_are_only_kept_when_debugging() {
        let list = words(&[("A", 10.0), ("BB", 5.0)]);
        let quiet = WordCloud::builder(100.0, 100.0)
            .placement(SpiralCandidates::seeded(11))
            .build(&list, HeuristicMetrics::default())
            .unwrap()
            .layout()
            .unwrap();
        assert!(quiet.trace.is_none());

        let loud = WordCloud::builder(100.0, 100.0)
            .placement(SpiralCandidates::seeded(11))
            .debug(true)
            .build(&list, HeuristicMetrics::default())
            .unwrap()
            .layout()
            .unwrap();
        let trace = loud.trace.expect("debug layouts carry a trace");
        assert_eq!(loud.words, quiet.words);

        let first = trace.searches_for("A").next().unwrap();
        assert_eq!(first.outcome, SearchOutcome::Placed);
        assert_eq!(first.path.len(), 1);

        // every round's search for BB except the last gave up at the border
        let bb: Vec<&SearchTrace> = trace.searches_for("BB").collect();
        assert_eq!(bb.last().unwrap().outcome, SearchOutcome::Placed);
        assert!(bb[..bb.len() - 1].iter().all(|s| s.outcome == SearchOutcome::NeedsGrowth));
        assert!(bb
            .iter()
            .flat_map(|s| &s.rejections)
            .any(|r| r.reason == Rejection::PointCollision));

        let probe = trace.probe.expect("debug layouts probe the generator");
        assert_eq!(probe.word, None);
        assert!(probe.path.iter().any(|(x, _)| *x < Pt(0.0)));
        assert!(probe.path.iter().any(|(_, y)| *y > loud.size.height));
    }

    #[test]
    fn alternative_generators_and_styles_plug_in() {
        let style = |word: &WordWeight| -> Result<StyledWord, WordCloudError> {
            StyledWord::new(
                word.word(),
                FontRef::new("Lacquer")?,
                Pt(8.0 + word.weight()),
                colours::ORANGE,
            )
        };
        let layout = WordCloud::builder(120.0, 80.0)
            .style(style)
            .placement(PolarCurveCandidates::star())
            .build(
                &words(&[("pumpkin", 9.0), ("ghost", 6.0), ("bat", 3.0)]),
                HeuristicMetrics::default(),
            )
            .unwrap()
            .layout()
            .unwrap();
        assert!(layout.is_complete());
        assert!(layout.words.iter().all(|w| w.word.colour == colours::ORANGE));
    }
}
