//! Continuous random variable distributions for probabilistic models.
//!
//! Distributions evaluate elementwise log-densities over arrays and draw samples.
//! Their parameters may themselves be random variables, resolved either by sampling
//! or from a fixed [`Point`]. Values or parameters outside a distribution's support
//! have a log-density of negative infinity rather than producing an error,
//! so that an enclosing inference procedure can treat them as having zero probability.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod defs;
pub mod distributions;
mod error;
pub mod math;
pub mod params;
pub mod utils;

pub use defs::ContinuousDef;
pub use distributions::{Bound, Bounded, Continuous, Moments};
pub use error::{DistributionError, Result};
pub use math::bound;
pub use params::{draw_value, draw_values, resolve_values, Param, Point, RandomVariable};

/// Pseudo-random number generator used for sampling.
pub type Prng = rand_chacha::ChaCha8Rng;
