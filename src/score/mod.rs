// src/score/mod.rs
//! The four scoring criteria and the trait the orchestrator drives them
//! through. Per-criterion constants (weight, label, fallback) live in one
//! table here so every consumer agrees on them.

pub mod accuracy;
pub mod consistency;
pub mod currency;
pub mod source;

use crate::breakdown::ScoreComponent;
use crate::search::SearchResult;

// Re-export the concrete scorers.
pub use accuracy::TechnicalAccuracyScorer;
pub use consistency::ContentConsistencyScorer;
pub use currency::CurrencyScorer;
pub use source::SourceReliabilityScorer;

/// The four fixed criteria. Weights sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    SourceReliability,
    ContentConsistency,
    TechnicalAccuracy,
    Currency,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::SourceReliability,
        Criterion::ContentConsistency,
        Criterion::TechnicalAccuracy,
        Criterion::Currency,
    ];

    /// Contract key used in the serialized breakdown.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::SourceReliability => "source_reliability",
            Criterion::ContentConsistency => "content_consistency",
            Criterion::TechnicalAccuracy => "technical_accuracy",
            Criterion::Currency => "currency",
        }
    }

    /// Fixed weight percentage; the four values sum to 100.
    pub fn weight(self) -> u8 {
        match self {
            Criterion::SourceReliability => 30,
            Criterion::ContentConsistency => 25,
            Criterion::TechnicalAccuracy => 25,
            Criterion::Currency => 20,
        }
    }

    /// Fixed human-readable label of what the criterion measures.
    pub fn description(self) -> &'static str {
        match self {
            Criterion::SourceReliability => {
                "Kaynak güvenilirliği: bulunan kaynakların sayısı, benzerliği ve çeşitliliği"
            }
            Criterion::ContentConsistency => {
                "İçerik tutarlılığı: yanıtın kaynaklarla örtüşmesi, bütünlüğü ve akıcılığı"
            }
            Criterion::TechnicalAccuracy => {
                "Teknik doğruluk: hukuki terminoloji, madde/kanun atıfları ve resmi dil"
            }
            Criterion::Currency => {
                "Güncellik: kaynakların ve yanıtın yürürlükteki mevzuatı yansıtması"
            }
        }
    }

    /// Neutral score substituted when the scorer cannot run. Currency
    /// defaults higher: absent evidence about age is weak evidence of
    /// staleness.
    pub fn fallback_score(self) -> u8 {
        match self {
            Criterion::Currency => 60,
            _ => 50,
        }
    }

    pub fn fallback_detail(self) -> &'static str {
        match self {
            Criterion::SourceReliability => "Kaynak güvenilirliği değerlendirilemedi",
            Criterion::ContentConsistency => "İçerik tutarlılığı değerlendirilemedi",
            Criterion::TechnicalAccuracy => "Teknik doğruluk değerlendirilemedi",
            Criterion::Currency => "Güncellik değerlendirilemedi",
        }
    }

    /// The documented fallback component for this criterion.
    pub fn fallback_component(self) -> ScoreComponent {
        ScoreComponent {
            score: self.fallback_score(),
            weight: self.weight(),
            description: self.description().to_string(),
            details: vec![self.fallback_detail().to_string()],
        }
    }

    /// Builds a component for this criterion from a raw 0–100 score.
    pub(crate) fn component(self, score: f64, details: Vec<String>) -> ScoreComponent {
        ScoreComponent {
            score: to_score(score),
            weight: self.weight(),
            description: self.description().to_string(),
            details,
        }
    }
}

/// One scoring criterion. Implementations must be pure functions of their
/// inputs: no I/O, no shared mutable state, safe to call concurrently.
/// `score` itself should not panic; the orchestrator still guards against
/// panics and substitutes `Criterion::fallback_component` when one escapes.
pub trait Scorer: Send + Sync {
    fn criterion(&self) -> Criterion;

    fn score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent;
}

/// Round and clamp a raw score into the 0–100 contract range.
pub(crate) fn to_score(x: f64) -> u8 {
    x.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_hundred() {
        let total: u32 = Criterion::ALL.iter().map(|c| c.weight() as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn fallback_components_carry_single_detail() {
        for c in Criterion::ALL {
            let f = c.fallback_component();
            assert_eq!(f.details.len(), 1);
            assert_eq!(f.weight, c.weight());
        }
        assert_eq!(Criterion::Currency.fallback_score(), 60);
        assert_eq!(Criterion::TechnicalAccuracy.fallback_score(), 50);
    }

    #[test]
    fn to_score_rounds_and_clamps() {
        assert_eq!(to_score(84.5), 85);
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(140.0), 100);
    }
}
