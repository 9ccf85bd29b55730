//! Business logic and service layer modules.
//!
//! This module contains the core of the application: the segment
//! classifier, the path normalizer built on top of it, and the metrics
//! collector that consumes normalized path groups.

pub mod classifier;
pub mod metrics;
pub mod normalizer;

pub use classifier::*;
pub use metrics::*;
pub use normalizer::*;
