/// Cooperative cancellation of long computations
pub mod cancellation;
/// Turning accepted links into a shred order
pub mod chain;
/// Pixel metrics and edge cost between two shreds
pub mod cost;
/// Pipeline configuration and orchestration
pub mod executor;
/// Greedy successor/predecessor matching
pub mod matching;
/// Edge cost table over every pair of shreds
pub mod table;
