use crate::{Pt, Size};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::PI;

/// What a candidate generator knows about the canvas it is searching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchFrame {
    /// The current canvas size, after any growth
    pub size: Size,
    /// The center of the current canvas
    pub center: (Pt, Pt),
    /// `width / max(width, height)` of the requested canvas
    pub x_ratio: f32,
    /// `height / max(width, height)` of the requested canvas
    pub y_ratio: f32,
}

/// A proposed center point for the word being placed, plus whatever the generator needs
/// to carry over to its next proposal
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<S> {
    pub x: Pt,
    pub y: Pt,
    pub state: S,
}

/// Produces the points tried, one after another, as the center of a word.
///
/// Each word starts a fresh search: the first call receives `None`, and every later
/// call receives the state returned with the previous candidate. Searches are never
/// continued across words. The engine stops asking once a candidate has been seen
/// beyond each of the four canvas edges, so generators should move steadily outwards.
pub trait CandidateGenerator {
    type State;

    fn next(
        &mut self,
        frame: &SearchFrame,
        previous: Option<&Self::State>,
    ) -> Candidate<Self::State>;
}

/// Where a spiral search currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralState {
    pub radius: f32,
    pub angle: f32,
    pub radius_direction: f32,
    pub angle_direction: f32,
}

/// The default generator: a spiral starting at the canvas center, stretched to the
/// canvas aspect ratio.
///
/// Each step moves `radius_step` further out and turns by `2π / angle_steps`. The
/// direction of both is picked at random at the start of every word's search, so
/// consecutive words don't all trace the same arm.
#[derive(Debug, Clone)]
pub struct SpiralCandidates<R = ChaCha8Rng> {
    pub radius_step: f32,
    pub angle_steps: f32,
    rng: R,
}

impl SpiralCandidates<ChaCha8Rng> {
    /// A spiral with directions seeded from the operating system
    pub fn new() -> Self {
        SpiralCandidates::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// A spiral whose directions are reproducible for a given seed
    pub fn seeded(seed: u64) -> Self {
        SpiralCandidates::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SpiralCandidates<ChaCha8Rng> {
    fn default() -> Self {
        SpiralCandidates::new()
    }
}

impl<R: Rng> SpiralCandidates<R> {
    pub fn with_rng(rng: R) -> Self {
        SpiralCandidates {
            radius_step: 0.75,
            angle_steps: 50.0,
            rng,
        }
    }

    /// Tighter or looser spirals: a smaller radius step and more angle steps per turn
    /// search more finely at the cost of more candidates
    pub fn with_steps(mut self, radius_step: f32, angle_steps: f32) -> Self {
        self.radius_step = radius_step;
        self.angle_steps = angle_steps;
        self
    }

    fn direction(&mut self) -> f32 {
        if self.rng.random_bool(0.5) {
            -1.0
        } else {
            1.0
        }
    }
}

impl<R: Rng> CandidateGenerator for SpiralCandidates<R> {
    type State = SpiralState;

    fn next(
        &mut self,
        frame: &SearchFrame,
        previous: Option<&SpiralState>,
    ) -> Candidate<SpiralState> {
        let state = match previous {
            Some(prev) => SpiralState {
                radius: prev.radius + self.radius_step * prev.radius_direction,
                angle: prev.angle + (2.0 * PI / self.angle_steps) * prev.angle_direction,
                ..*prev
            },
            None => SpiralState {
                radius: 0.0,
                angle: 0.0,
                radius_direction: self.direction(),
                angle_direction: self.direction(),
            },
        };

        Candidate {
            x: frame.center.0 + Pt(state.radius * state.angle.cos() * frame.x_ratio),
            y: frame.center.1 + Pt(state.radius * state.angle.sin() * frame.y_ratio),
            state,
        }
    }
}

/// Points along the curve `r = scale·θ` sampled at `θ = π·range/500·i` and wound
/// `dots` times faster around the center. Depending on the parameters the samples
/// form spiral arms or a star of rays. Ignores the canvas aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCurveCandidates {
    pub scale: f32,
    pub dots: f32,
    pub range: f32,
}

impl PolarCurveCandidates {
    /// Ten swirling arms
    pub fn galaxy() -> Self {
        PolarCurveCandidates {
            scale: 2.0,
            dots: 10.0,
            range: 234.0,
        }
    }

    /// A dense star of rays
    pub fn star() -> Self {
        PolarCurveCandidates {
            scale: 0.25,
            dots: 100.0,
            range: 336.0,
        }
    }
}

impl CandidateGenerator for PolarCurveCandidates {
    /// The index of the sample
    type State = u64;

    fn next(&mut self, frame: &SearchFrame, previous: Option<&u64>) -> Candidate<u64> {
        let i = previous.map_or(0, |i| i + 1);
        let angle = PI * self.range / 500.0 * i as f32;
        let radius = self.scale * angle;

        Candidate {
            x: frame.center.0 + Pt(radius * (self.dots * angle).cos()),
            y: frame.center.1 + Pt(radius * (self.dots * angle).sin()),
            state: i,
        }
    }
}
