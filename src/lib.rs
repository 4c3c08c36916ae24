//! Word cloud layout.
//!
//! Give the engine a list of weighted words and a canvas size; it styles each word,
//! measures it with a [TextMetrics] service, and packs the words around the center of
//! the canvas without overlaps, growing the canvas when they don't fit. The result is a
//! [Layout] of positioned words for any renderer to draw.

mod cache;
pub use cache::*;

mod collision;
pub use collision::*;

mod colour;
pub use colour::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod metrics;
pub use metrics::*;

/// Canvas sizing checks run before the first placement round
pub mod preflight;

mod rect;
pub use rect::*;

pub mod strategy;

mod trace;
pub use trace::*;

mod units;
pub use units::*;

mod word;
pub use word::*;
