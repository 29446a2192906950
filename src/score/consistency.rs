// src/score/consistency.rs
//! Content consistency: does the answer actually reflect the retrieved
//! passages, and does it present them completely and coherently?

use crate::breakdown::ScoreComponent;
use crate::score::{Criterion, Scorer};
use crate::search::SearchResult;
use crate::text;

const W_ALIGNMENT: f64 = 0.5;
const W_COMPLETENESS: f64 = 0.3;
const W_COHERENCE: f64 = 0.2;

/// Passages shorter than this carry too little vocabulary to compare against.
const MIN_CONTEXT_CHARS: usize = 10;

/// Phrases signalling the answer grounds itself in the sources.
const GROUNDING_PHRASES: &[&str] = &["göre", "uyarınca", "kapsamında", "belirtilen"];

/// Structural legal vocabulary expected in a complete answer.
const STRUCTURE_WORDS: &[&str] = &["madde", "fıkra", "bent", "kanun"];

/// "No information" phrases that undercut completeness.
const NO_INFO_PHRASES: &[&str] = &["bilgi yok", "bulunamadı", "belirtilmemiş"];

/// Connectors indicating the answer argues rather than lists.
const CONNECTOR_WORDS: &[&str] = &[
    "ancak", "fakat", "lakin", "ayrıca", "buna göre", "bu nedenle", "dolayısıyla",
];

/// Markers that, when heavily repeated, suggest the answer contradicts itself.
const CONTRADICTION_MARKERS: &[&str] = &["ancak", "fakat", "ama", "aksine", "buna rağmen"];

#[derive(Debug, Clone, Default)]
pub struct ContentConsistencyScorer;

impl ContentConsistencyScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent {
        let criterion = Criterion::ContentConsistency;

        if results.is_empty() || answer.trim().is_empty() {
            return criterion.fallback_component();
        }

        let context = combined_context(results);
        let lower = text::lowercase_turkish(answer);

        let alignment = alignment_score(&context, answer);
        let completeness = completeness_score(answer, &lower);
        let coherence = coherence_score(answer, &lower);

        let combined =
            alignment * W_ALIGNMENT + completeness * W_COMPLETENESS + coherence * W_COHERENCE;

        let details = vec![
            tier_detail(
                alignment,
                "Yanıt kaynaklarla güçlü örtüşüyor",
                "Yanıt kaynaklarla kısmen örtüşüyor",
                "Yanıt ile kaynaklar arasında zayıf örtüşme",
            ),
            tier_detail(
                completeness,
                "Yanıt kapsamlı ve dayanaklı",
                "Yanıt yeterli uzunlukta",
                "Yanıt kısa veya eksik",
            ),
            tier_detail(
                coherence,
                "Yanıt akıcı ve tutarlı",
                "Yanıt genel olarak tutarlı",
                "Yanıt tutarlılığı zayıf",
            ),
        ];

        criterion.component(combined, details)
    }
}

impl Scorer for ContentConsistencyScorer {
    fn criterion(&self) -> Criterion {
        Criterion::ContentConsistency
    }

    fn score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent {
        self.calculate_score(results, answer)
    }
}

/// Concatenate passage texts, skipping near-empty fragments.
fn combined_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| r.content.as_str())
        .filter(|c| c.chars().count() >= MIN_CONTEXT_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Share of answer keywords that also occur in the combined context.
/// 50 when either keyword set is empty (cannot assess).
fn alignment_score(context: &str, answer: &str) -> f64 {
    let answer_keywords = text::keywords(answer);
    let context_keywords = text::keywords(context);
    if answer_keywords.is_empty() || context_keywords.is_empty() {
        return 50.0;
    }
    let overlap = answer_keywords
        .iter()
        .filter(|k| context_keywords.contains(*k))
        .count();
    (overlap as f64 / answer_keywords.len() as f64 * 100.0).min(100.0)
}

/// Length-based base plus fixed bonuses/penalties for grounding language.
fn completeness_score(answer: &str, lower: &str) -> f64 {
    let len = answer.chars().count();
    let mut score: f64 = match len {
        200.. => 100.0,
        100..=199 => 80.0,
        50..=99 => 60.0,
        _ => 30.0,
    };

    if GROUNDING_PHRASES.iter().any(|p| lower.contains(p)) {
        score += 10.0;
    }
    if STRUCTURE_WORDS.iter().any(|p| lower.contains(p)) {
        score += 10.0;
    }
    if NO_INFO_PHRASES.iter().any(|p| lower.contains(p)) {
        score -= 20.0;
    }

    score.clamp(0.0, 100.0)
}

/// Base 70; sentence structure and connectors raise it, heavy repetition of
/// contradiction markers lowers it.
fn coherence_score(answer: &str, lower: &str) -> f64 {
    let mut score: f64 = 70.0;

    if text::sentence_count(answer) >= 2 {
        score += 15.0;
    }
    if CONNECTOR_WORDS.iter().any(|w| lower.contains(w)) {
        score += 10.0;
    }

    let repeated_markers = CONTRADICTION_MARKERS
        .iter()
        .filter(|m| lower.matches(*m).count() > 1)
        .count();
    if repeated_markers > 2 {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

fn tier_detail(score: f64, high: &str, mid: &str, low: &str) -> String {
    if score >= 80.0 {
        high.to_string()
    } else if score >= 60.0 {
        mid.to_string()
    } else {
        low.to_string()
    }
}
