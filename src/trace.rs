use crate::{Pt, Size};

/// Why a candidate point was not used
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The point itself fell inside an already placed word (or its buffer); the word
    /// was not even measured
    PointCollision,
    /// The word's box at this point overlapped an already placed word
    RectCollision,
    /// The word's box at this point reached into the canvas border
    OutsideBorders,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RejectedCandidate {
    pub x: Pt,
    pub y: Pt,
    pub reason: Rejection,
}

/// How a single word's search ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Placed,
    /// Gave up at the border so the canvas can grow and the cloud stays tight
    NeedsGrowth,
    /// Candidates were seen past every canvas edge without finding a spot
    Exhausted,
}

/// Everything one word's search tried, in order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace {
    /// The word searched for, `None` for the probe search
    pub word: Option<String>,
    pub canvas: Size,
    /// Every candidate point, in the order the generator produced them
    pub path: Vec<(Pt, Pt)>,
    pub rejections: Vec<RejectedCandidate>,
    pub outcome: SearchOutcome,
}

impl SearchTrace {
    pub(crate) fn new(word: Option<&str>, canvas: Size) -> SearchTrace {
        SearchTrace {
            word: word.map(str::to_string),
            canvas,
            path: Vec::new(),
            rejections: Vec::new(),
            outcome: SearchOutcome::Exhausted,
        }
    }
}

/// Debug record of a layout run, for visualizing how the candidate generator and the
/// collision checks behaved. Only collected when
/// [LayoutOptions::debug](crate::LayoutOptions::debug) is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTrace {
    /// One entry per word search, across all rounds
    pub searches: Vec<SearchTrace>,
    /// The path of one search without any word, run on the final canvas, showing the
    /// shape the candidate generator traces
    pub probe: Option<SearchTrace>,
}

impl LayoutTrace {
    /// All searches made for `word`, one per round in which it was pending
    pub fn searches_for<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a SearchTrace> + 'a {
        self.searches
            .iter()
            .filter(move |search| search.word.as_deref() == Some(word))
    }
}
