// src/service.rs
//! # Reliability Service
//! Orchestrates the four criterion scorers over one `(search_results,
//! answer)` pair: fan out (parallel or sequential), substitute documented
//! fallbacks for failed scorers, combine into the weighted overall score and
//! assemble the explainable breakdown.
//!
//! Contract: this service never propagates an error or panic to its caller.
//! The score feeds a user-facing trust signal and a credit-refund decision,
//! so "scoring unavailable" degrades to the neutral midpoint instead of a
//! crashed request.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::{error, warn};

use crate::breakdown::{
    ConfidenceBreakdown, ConfidenceResult, Criteria, ScoreComponent, ScoreRanges, EXPLANATION,
    FALLBACK_EXPLANATION,
};
use crate::score::{
    to_score, ContentConsistencyScorer, Criterion, CurrencyScorer, Scorer,
    SourceReliabilityScorer, TechnicalAccuracyScorer,
};
use crate::search::SearchResult;

/// Stateless orchestrator. The scorer instances hold only fixed vocabulary
/// and weight constants, so one service is safely shared across concurrent
/// calls. Construct it once at the composition root and pass it by reference.
pub struct ReliabilityService {
    scorers: Vec<Arc<dyn Scorer>>,
}

impl ReliabilityService {
    /// The standard four-criterion engine.
    pub fn new() -> Self {
        Self::with_scorers(vec![
            Arc::new(SourceReliabilityScorer::new()),
            Arc::new(ContentConsistencyScorer::new()),
            Arc::new(TechnicalAccuracyScorer::new()),
            Arc::new(CurrencyScorer::new()),
        ])
    }

    /// Injection seam: callers (and tests) may supply their own scorer set.
    pub fn with_scorers(scorers: Vec<Arc<dyn Scorer>>) -> Self {
        Self { scorers }
    }

    /// Grade one answer against its retrieval context.
    ///
    /// `use_parallel` selects the dispatch strategy only; the scorers are
    /// pure functions of their inputs, so both paths produce identical
    /// results and the sequential path stays available as a correctness
    /// cross-check.
    pub async fn calculate_comprehensive_confidence(
        &self,
        search_results: &[SearchResult],
        ai_answer: &str,
        use_parallel: bool,
    ) -> ConfidenceResult {
        let components = if use_parallel {
            self.run_parallel(search_results, ai_answer).await
        } else {
            self.run_sequential(search_results, ai_answer)
        };

        match assemble(&components) {
            Ok(result) => result,
            Err(err) => {
                error!(
                    target: "reliability",
                    error = %err,
                    "confidence assembly failed, returning full fallback"
                );
                full_fallback()
            }
        }
    }

    /// Fan out one task per scorer and join them all. A panicking scorer
    /// surfaces as a join error and is replaced by its fallback.
    async fn run_parallel(
        &self,
        search_results: &[SearchResult],
        ai_answer: &str,
    ) -> Vec<(Criterion, ScoreComponent)> {
        let shared_results: Arc<Vec<SearchResult>> = Arc::new(search_results.to_vec());
        let shared_answer: Arc<str> = Arc::from(ai_answer);

        let handles: Vec<_> = self
            .scorers
            .iter()
            .map(|scorer| {
                let scorer = Arc::clone(scorer);
                let criterion = scorer.criterion();
                let results = Arc::clone(&shared_results);
                let answer = Arc::clone(&shared_answer);
                let handle =
                    tokio::task::spawn_blocking(move || scorer.score(&results, &answer));
                (criterion, handle)
            })
            .collect();

        let mut components = Vec::with_capacity(handles.len());
        for (criterion, handle) in handles {
            let component = match handle.await {
                Ok(component) => component,
                Err(err) => {
                    warn!(
                        target: "reliability",
                        criterion = criterion.key(),
                        error = %err,
                        "scorer task failed, substituting fallback"
                    );
                    criterion.fallback_component()
                }
            };
            components.push((criterion, component));
        }
        components
    }

    /// Run the scorers in order on the caller's thread, guarding each one
    /// against panics the same way the parallel path does.
    fn run_sequential(
        &self,
        search_results: &[SearchResult],
        ai_answer: &str,
    ) -> Vec<(Criterion, ScoreComponent)> {
        self.scorers
            .iter()
            .map(|scorer| {
                let criterion = scorer.criterion();
                let component =
                    match catch_unwind(AssertUnwindSafe(|| scorer.score(search_results, ai_answer)))
                    {
                        Ok(component) => component,
                        Err(_) => {
                            warn!(
                                target: "reliability",
                                criterion = criterion.key(),
                                "scorer panicked, substituting fallback"
                            );
                            criterion.fallback_component()
                        }
                    };
                (criterion, component)
            })
            .collect()
    }
}

impl Default for ReliabilityService {
    fn default() -> Self {
        Self::new()
    }
}

/// Weight-weighted average of the collected components, assembled into the
/// full breakdown. Criteria no scorer produced fall back to their documented
/// neutral component, so a partial scorer set still yields a complete shape.
fn assemble(components: &[(Criterion, ScoreComponent)]) -> Result<ConfidenceResult> {
    if components.is_empty() {
        bail!("no scorer components produced");
    }

    let total_weight: u32 = components.iter().map(|(_, c)| c.weight as u32).sum();
    let overall_score = if total_weight == 0 {
        50
    } else {
        let weighted: f64 = components
            .iter()
            .map(|(_, c)| c.score as f64 * c.weight as f64)
            .sum();
        to_score(weighted / total_weight as f64)
    };

    let criteria = Criteria {
        source_reliability: pick(components, Criterion::SourceReliability),
        content_consistency: pick(components, Criterion::ContentConsistency),
        technical_accuracy: pick(components, Criterion::TechnicalAccuracy),
        currency: pick(components, Criterion::Currency),
    };

    Ok(ConfidenceResult {
        confidence_score: overall_score as f64 / 100.0,
        confidence_breakdown: ConfidenceBreakdown {
            overall_score,
            explanation: EXPLANATION.to_string(),
            criteria,
            score_ranges: ScoreRanges::table(),
        },
    })
}

fn pick(components: &[(Criterion, ScoreComponent)], criterion: Criterion) -> ScoreComponent {
    components
        .iter()
        .find(|(c, _)| *c == criterion)
        .map(|(_, component)| component.clone())
        .unwrap_or_else(|| criterion.fallback_component())
}

/// The outermost safety net: one hardcoded neutral result.
fn full_fallback() -> ConfidenceResult {
    ConfidenceResult {
        confidence_score: 0.5,
        confidence_breakdown: ConfidenceBreakdown {
            overall_score: 50,
            explanation: FALLBACK_EXPLANATION.to_string(),
            criteria: Criteria {
                source_reliability: Criterion::SourceReliability.fallback_component(),
                content_consistency: Criterion::ContentConsistency.fallback_component(),
                technical_accuracy: Criterion::TechnicalAccuracy.fallback_component(),
                currency: Criterion::Currency.fallback_component(),
            },
            score_ranges: ScoreRanges::table(),
        },
    }
}
