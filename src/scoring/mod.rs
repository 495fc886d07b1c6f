//! Hybrid candidate scoring.
//!
//! `score = min(1.0, 0.70 * cosine + boost)`, where `boost` is the sum of the
//! adapter's deterministic signals (identifier matches, name similarity tiers,
//! location matches). Each fired signal is kept as a [`Signal`] so the accepted
//! match can be logged with its reasons. The reasons never feed back into the
//! decision.
//!
//! Cosine is not clamped. A negative cosine lowers the score but strong
//! identifier boosts can still lift a candidate over the acceptance threshold.

pub mod scorer;
pub mod types;


pub use scorer::{CandidateScorer, scorable_count};
pub use types::{ScoreTrace, ScoredCandidate, Signal};
