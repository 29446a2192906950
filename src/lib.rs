// src/lib.rs
// Public library surface for the reliability engine.
//
// The engine is a pure library call: given the retrieval context and the
// generated answer, return a confidence score with an explainable breakdown.
// It owns no HTTP surface, no persistence and no retrieval — those live in
// the surrounding application.

pub mod breakdown;
pub mod score;
pub mod search;
pub mod service;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::breakdown::{
    ConfidenceBreakdown, ConfidenceResult, Criteria, ScoreComponent, ScoreRange, ScoreRanges,
    Tier, LOW_CONFIDENCE_THRESHOLD,
};
pub use crate::score::{
    ContentConsistencyScorer, Criterion, CurrencyScorer, Scorer, SourceReliabilityScorer,
    TechnicalAccuracyScorer,
};
pub use crate::search::SearchResult;
pub use crate::service::ReliabilityService;
