//! Reconstruction of images cut into equal-width vertical strips and shuffled
//!
//! Every ordered pair of shreds is scored by how well the trailing column of
//! one continues into the leading column of the other. The cheapest seams are
//! accepted greedily and the resulting links are walked from the one shred
//! without a left neighbour to recover the original left-to-right order.

#![forbid(unsafe_code)]

/// Edge costs, greedy matching, chain building and the pipeline that runs them
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Shred geometry and pixel access
pub mod spatial;

pub use io::error::{Result, UnshredError};
