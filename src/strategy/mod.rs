//! Pluggable strategies that shape a word cloud.
//!
//! The engine delegates three decisions to strategies chosen by the caller:
//!
//! - [`StylePolicy`](crate::strategy::StylePolicy) - how a word's weight turns into a
//!   font, size, and colour. Applied once per word when the cloud is built.
//! - [`CandidateGenerator`](crate::strategy::CandidateGenerator) - the sequence of
//!   points tried, one after another, as the center of the word being placed.
//! - [`GrowthStrategy`](crate::strategy::GrowthStrategy) - how much larger the canvas
//!   becomes when the words don't fit.
//!
//! Each has a default ([`LinearSizeStyle`](crate::strategy::LinearSizeStyle),
//! [`SpiralCandidates`](crate::strategy::SpiralCandidates),
//! [`ScaleGrowth`](crate::strategy::ScaleGrowth)) plus a few alternatives.
//!
//! # Example
//!
//! ```
//! use word_cloud::strategy::{PolarCurveCandidates, ScaleGrowth, LinearSizeStyle};
//! use word_cloud::{HeuristicMetrics, WordCloud, WordWeight};
//!
//! let words = vec![
//!     WordWeight::new("Seattle", 10.0)?,
//!     WordWeight::new("Boston", 8.0)?,
//! ];
//!
//! let layout = WordCloud::builder(250.0, 250.0)
//!     .style(LinearSizeStyle::dark())
//!     .placement(PolarCurveCandidates::galaxy())
//!     .growth(ScaleGrowth::new(1.25))
//!     .build(&words, HeuristicMetrics::default())?
//!     .layout()?;
//!
//! assert_eq!(layout.words.len(), 2);
//! # Ok::<(), word_cloud::WordCloudError>(())
//! ```

mod candidates;
mod growth;
mod style;

pub use candidates::*;
pub use growth::*;
pub use style::*;
