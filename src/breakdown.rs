// src/breakdown.rs
//! Output contract: the confidence score plus the structured breakdown
//! handed back to the query-answering caller. Shapes here are serialized
//! as-is to the API layer, so field names are part of the contract.

use serde::{Deserialize, Serialize};

/// Confidence below this value is what the surrounding product treats as
/// "low confidence" when deciding whether to refund credits. The engine
/// only exposes the constant; refund issuance is a caller-side rule.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Fixed narrative shown next to every breakdown.
pub(crate) const EXPLANATION: &str = "Güven skoru dört kritere göre hesaplandı: \
kaynak güvenilirliği (%30), içerik tutarlılığı (%25), teknik doğruluk (%25) ve \
güncellik (%20). Yüksek skor, yanıtın güçlü ve güncel kaynaklarla desteklendiğini gösterir.";

/// Narrative used when the whole calculation failed and the hardcoded
/// neutral result is returned instead.
pub(crate) const FALLBACK_EXPLANATION: &str =
    "Güven skoru hesaplanamadı; varsayılan orta düzey değer kullanıldı.";

/// Output of one scorer: the 0–100 score, its fixed weight, a fixed label
/// and the short observations explaining how the score came about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub score: u8,
    pub weight: u8,
    pub description: String,
    pub details: Vec<String>,
}

/// The four criteria, keyed by their contract names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub source_reliability: ScoreComponent,
    pub content_consistency: ScoreComponent,
    pub technical_accuracy: ScoreComponent,
    pub currency: ScoreComponent,
}

/// One row of the static score-range table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
    pub desc: String,
}

/// Static descriptive table: which band an overall score falls in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRanges {
    pub high: ScoreRange,
    pub medium: ScoreRange,
    pub low: ScoreRange,
}

impl ScoreRanges {
    pub fn table() -> Self {
        Self {
            high: ScoreRange {
                min: 80,
                max: 100,
                desc: "Yüksek güvenilirlik - bilgiler güçlü kaynaklarla destekleniyor".into(),
            },
            medium: ScoreRange {
                min: 60,
                max: 79,
                desc: "Orta güvenilirlik - bilgiler kısmen doğrulanabiliyor".into(),
            },
            low: ScoreRange {
                min: 0,
                max: 59,
                desc: "Düşük güvenilirlik - bilgileri ek kaynaklardan doğrulayın".into(),
            },
        }
    }
}

/// Trust band derived from the overall score; matches `ScoreRanges::table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub overall_score: u8,
    pub explanation: String,
    pub criteria: Criteria,
    pub score_ranges: ScoreRanges,
}

impl ConfidenceBreakdown {
    pub fn tier(&self) -> Tier {
        match self.overall_score {
            80..=100 => Tier::High,
            60..=79 => Tier::Medium,
            _ => Tier::Low,
        }
    }
}

/// Complete engine output: the normalized confidence plus its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// Always `overall_score / 100.0`.
    pub confidence_score: f64,
    pub confidence_breakdown: ConfidenceBreakdown,
}

impl ConfidenceResult {
    pub fn is_low_confidence(&self) -> bool {
        self.confidence_score < LOW_CONFIDENCE_THRESHOLD
    }
}
