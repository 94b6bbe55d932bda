// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven reveal engine.
//!
//! [`observer`] decides which elements entered the viewport, [`sequencer`]
//! turns those entries into staggered reveals, and the remaining modules hold
//! the small animations started by a reveal.

pub mod bars;
pub mod counter;
pub mod lazy;
pub mod observer;
pub mod pulse;
pub mod sequencer;

pub use bars::BarGrowth;
pub use counter::CounterAnimation;
pub use lazy::{ImageLibrary, ImageSlot};
pub use observer::{Change, Mode, ObserverOptions, VisibilityObserver};
pub use pulse::Pulse;
pub use sequencer::Sequencer;
