// src/score/accuracy.rs
//! Technical accuracy: legal terminology density, structured references
//! (article/law/date citations) and formality of the answer's language.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::breakdown::ScoreComponent;
use crate::score::{Criterion, Scorer};
use crate::search::SearchResult;
use crate::text;

const W_TERMINOLOGY: f64 = 0.4;
const W_REFERENCE: f64 = 0.4;
const W_FORMAL: f64 = 0.2;

/// Core Turkish legal vocabulary, matched by presence.
const LEGAL_TERMS: &[&str] = &[
    "kanun", "yönetmelik", "tebliğ", "genelge", "madde", "fıkra", "bent", "uyarınca", "göre",
    "kapsamında", "hükümleri", "düzenlemesi", "mevzuat", "yürürlük", "resmi gazete", "sayılı",
    "tarihli",
];

/// Formal single-word/phrase indicators of official register.
const FORMAL_INDICATORS: &[&str] = &[
    "gereğince", "mucibince", "çerçevesinde", "doğrultusunda", "hükmü", "ilgili mevzuat",
];

/// Formal sentence endings typical of legislative prose.
const FORMAL_STRUCTURES: &[&str] = &[
    "düzenlenmiştir",
    "öngörülmüştür",
    "belirtilmiştir",
    "hüküm altına alınmıştır",
    "yürürlüğe girmiştir",
    "tanımlanmıştır",
];

static ARTICLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"madde\s*\d+",
        r"md\.\s*\d+",
        r"\d+\.\s*madde",
        r"fıkra\s*\d+",
        r"\d+\.\s*fıkra",
    ])
});

static LAW_NUMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"\d{4}\s*sayılı", r"kanun\s*no\s*\d+", r"yönetmelik\s*no\s*\d+"])
});

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d{1,2}/\d{1,2}/\d{4}",
        r"\d{1,2}\.\d{1,2}\.\d{4}",
        r"\d{4}\s*yılı",
        r"\b(ocak|şubat|mart|nisan|mayıs|haziran|temmuz|ağustos|eylül|ekim|kasım|aralık)\b",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static accuracy pattern"))
        .collect()
}

fn count_matches(text: &str, patterns: &[Regex]) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

#[derive(Debug, Clone, Default)]
pub struct TechnicalAccuracyScorer;

impl TechnicalAccuracyScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, _results: &[SearchResult], answer: &str) -> ScoreComponent {
        let criterion = Criterion::TechnicalAccuracy;

        if answer.trim().is_empty() {
            return criterion.fallback_component();
        }

        let lower = text::lowercase_turkish(answer);

        let terminology = terminology_score(&lower);
        let reference = reference_score(&lower);
        let formal = formal_score(&lower);

        let combined = terminology * W_TERMINOLOGY + reference * W_REFERENCE + formal * W_FORMAL;

        let details = vec![
            tier_detail(
                terminology,
                "Hukuki terminoloji yoğun kullanılmış",
                "Hukuki terminoloji yeterli düzeyde",
                "Hukuki terminoloji zayıf",
            ),
            tier_detail(
                reference,
                "Madde ve kanun atıfları belirgin",
                "Kısmi madde/kanun atıfları var",
                "Yapılandırılmış atıf bulunmuyor",
            ),
            tier_detail(
                formal,
                "Resmi dil kullanımı güçlü",
                "Resmi dil kullanımı orta düzeyde",
                "Resmi dil kullanımı sınırlı",
            ),
        ];

        criterion.component(combined, details)
    }
}

impl Scorer for TechnicalAccuracyScorer {
    fn criterion(&self) -> Criterion {
        Criterion::TechnicalAccuracy
    }

    fn score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent {
        self.calculate_score(results, answer)
    }
}

/// Distinct legal terms present, mapped to a tier.
fn terminology_score(lower: &str) -> f64 {
    match text::presence_count(lower, LEGAL_TERMS) {
        n if n >= 5 => 100.0,
        n if n >= 3 => 85.0,
        2 => 70.0,
        1 => 60.0,
        _ => 30.0,
    }
}

/// Base 50 plus bonuses for article, law-number and date citations.
fn reference_score(lower: &str) -> f64 {
    let mut score: f64 = 50.0;

    let articles = count_matches(lower, &ARTICLE_PATTERNS);
    if articles >= 2 {
        score += 30.0;
    } else if articles >= 1 {
        score += 20.0;
    }

    if count_matches(lower, &LAW_NUMBER_PATTERNS) >= 1 {
        score += 20.0;
    }

    if count_matches(lower, &DATE_PATTERNS) >= 1 {
        score += 10.0;
    }

    score.min(100.0)
}

/// Combined presence count over formal indicators and structures.
fn formal_score(lower: &str) -> f64 {
    let count =
        text::presence_count(lower, FORMAL_INDICATORS) + text::presence_count(lower, FORMAL_STRUCTURES);
    match count {
        n if n >= 3 => 100.0,
        2 => 80.0,
        1 => 60.0,
        _ => 40.0,
    }
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
