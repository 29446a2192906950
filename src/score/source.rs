// src/score/source.rs
//! Source reliability: is there enough, strong enough, and diverse enough
//! evidence behind the answer?

use std::collections::HashSet;

use crate::breakdown::ScoreComponent;
use crate::score::{Criterion, Scorer};
use crate::search::SearchResult;

// Sub-score blend: similarity carries the most signal.
const W_QUANTITY: f64 = 0.3;
const W_SIMILARITY: f64 = 0.4;
const W_DIVERSITY: f64 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct SourceReliabilityScorer;

impl SourceReliabilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, results: &[SearchResult]) -> ScoreComponent {
        let criterion = Criterion::SourceReliability;

        // No retrieval context at all: nothing to verify against.
        if results.is_empty() {
            return criterion.component(
                0.0,
                vec![
                    "Hiç kaynak bulunamadı".to_string(),
                    "Bilgi doğrulanamadı".to_string(),
                ],
            );
        }

        let quantity = quantity_score(results.len());
        let similarity = similarity_score(results);
        let unique = unique_documents(results);
        let diversity = diversity_score(unique, results.len());

        let combined =
            quantity * W_QUANTITY + similarity * W_SIMILARITY + diversity * W_DIVERSITY;

        let details = vec![
            quantity_detail(results.len()),
            similarity_detail(similarity),
            diversity_detail(unique, diversity),
        ];

        criterion.component(combined, details)
    }
}

impl Scorer for SourceReliabilityScorer {
    fn criterion(&self) -> Criterion {
        Criterion::SourceReliability
    }

    fn score(&self, results: &[SearchResult], _answer: &str) -> ScoreComponent {
        self.calculate_score(results)
    }
}

/// Monotonic step function of result count.
fn quantity_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 50.0,
        2 => 70.0,
        3..=4 => 85.0,
        _ => 100.0,
    }
}

/// Average similarity × 100, capped at 100. Missing or zero similarity
/// values are excluded from the average, not counted as zero.
fn similarity_score(results: &[SearchResult]) -> f64 {
    let scores: Vec<f64> = results
        .iter()
        .filter_map(|r| r.similarity_score)
        .filter(|s| *s > 0.0)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    (avg * 100.0).min(100.0)
}

fn unique_documents(results: &[SearchResult]) -> usize {
    results
        .iter()
        .map(|r| r.document_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Discrete steps over the distinct-document ratio.
fn diversity_score(unique: usize, total: usize) -> f64 {
    if unique == total {
        return 100.0;
    }
    let ratio = unique as f64 / total as f64;
    if ratio >= 0.7 {
        85.0
    } else if ratio >= 0.4 {
        70.0
    } else {
        50.0
    }
}

fn quantity_detail(count: usize) -> String {
    if count >= 3 {
        format!("{count} farklı kaynaktan bilgi")
    } else if count == 2 {
        "İki kaynaktan bilgi".to_string()
    } else {
        "Tek kaynaktan bilgi".to_string()
    }
}

fn similarity_detail(similarity: f64) -> String {
    if similarity >= 80.0 {
        "Kaynaklar soruyla yüksek benzerlik gösteriyor".to_string()
    } else if similarity >= 60.0 {
        "Kaynaklar soruyla orta düzeyde benzerlik gösteriyor".to_string()
    } else {
        "Kaynak benzerliği düşük".to_string()
    }
}

fn diversity_detail(unique: usize, diversity: f64) -> String {
    if diversity >= 85.0 {
        format!("{unique} benzersiz dokümandan çeşitli bilgi")
    } else if diversity >= 70.0 {
        format!("{unique} benzersiz doküman, kısmi çeşitlilik")
    } else {
        format!("{unique} benzersiz doküman, sınırlı çeşitlilik")
    }
}
