//! Text fitting and placement planning.
//!
//! This module contains the two halves of the text engine: the fitting
//! search, which picks a font size (and, when wrapping, a set of lines) that
//! fits a bounding box, and the placement planner, which turns a fitted
//! block of text into one pixel coordinate per line under a placement mode.
//!
//! Both halves are pure given their inputs: the fitter measures text only
//! through the [`crate::TextMeasurer`] seam, and the planner takes its
//! randomness as an explicit [`rand::Rng`]. That is what lets them be tested
//! against fixed metric tables and fixed seeds, without any font files.

mod fit;
mod place;

pub use fit::*;
pub use place::*;
