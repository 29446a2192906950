// src/score/currency.rs
//! Currency: do the cited material and the answer reflect legislation that
//! is still in force, judged by date extraction and recency vocabulary?

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::breakdown::ScoreComponent;
use crate::score::{Criterion, Scorer};
use crate::search::SearchResult;
use crate::text;

const W_DOCUMENT: f64 = 0.4;
const W_CONTENT: f64 = 0.3;
const W_LEGISLATION: f64 = 0.3;

/// Earliest publish year treated as plausible.
const MIN_YEAR: i32 = 1990;

/// Vocabulary suggesting the answer speaks about legislation in force.
const CURRENT_TERMS: &[&str] = &[
    "güncel",
    "yürürlük",
    "yürürlükte",
    "geçerli",
    "mevcut",
    "son değişiklik",
    "değişiklik",
    "güncellenmiş",
    "revize",
];

/// Vocabulary suggesting superseded or repealed legislation.
const OUTDATED_TERMS: &[&str] = &["yürürlükten", "mülga", "iptal", "değiştirilmiş", "kaldırılmış"];

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(199\d|20[0-4]\d)\b").expect("year pattern"));

static CURRENT_LAW_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d{4}\s*sayılı.*kanun",
        r"yürürlükteki.*kanun",
        r"güncel.*yönetmelik",
        r"mevcut.*düzenleme",
    ])
});

static AMENDMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"değiştirilen.*madde", r"eklenen.*fıkra", r"son.*değişiklik"])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static currency pattern"))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CurrencyScorer;

impl CurrencyScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent {
        let criterion = Criterion::Currency;

        if answer.trim().is_empty() {
            return criterion.fallback_component();
        }

        let current_year = Utc::now().year();
        let lower = text::lowercase_turkish(answer);

        let document = document_score(results, current_year);
        let content = content_score(&lower, current_year);
        let legislation = legislation_score(&lower);

        let combined = document * W_DOCUMENT + content * W_CONTENT + legislation * W_LEGISLATION;

        let details = vec![
            tier_detail(
                document,
                "Kaynaklar güncel tarihli",
                "Kaynak tarihleri orta yaşta",
                "Kaynaklar eski tarihli olabilir",
            ),
            tier_detail(
                content,
                "Yanıt güncellik vurgusu taşıyor",
                "Yanıtta sınırlı güncellik işareti var",
                "Yanıt güncelliği belirsiz",
            ),
            tier_detail(
                legislation,
                "Yürürlükteki mevzuata atıf güçlü",
                "Mevzuat güncelliğine kısmi atıf var",
                "Yürürlük durumu doğrulanamadı",
            ),
        ];

        criterion.component(combined, details)
    }
}

impl Scorer for CurrencyScorer {
    fn criterion(&self) -> Criterion {
        Criterion::Currency
    }

    fn score(&self, results: &[SearchResult], answer: &str) -> ScoreComponent {
        self.calculate_score(results, answer)
    }
}

/// First plausible 4-digit year in the passage metadata: publish date first,
/// title as fallback.
fn extract_year(result: &SearchResult, current_year: i32) -> Option<i32> {
    let fields = [result.publish_date.as_deref(), result.document_title.as_deref()];
    for field in fields.into_iter().flatten() {
        for m in YEAR_RE.find_iter(field) {
            if let Ok(year) = m.as_str().parse::<i32>() {
                if (MIN_YEAR..=current_year + 5).contains(&year) {
                    return Some(year);
                }
            }
        }
    }
    None
}

/// Average document age mapped to discrete recency steps. 50 when there is
/// nothing to date at all, 60 when results carry no usable year.
fn document_score(results: &[SearchResult], current_year: i32) -> f64 {
    if results.is_empty() {
        return 50.0;
    }

    let years: Vec<i32> = results
        .iter()
        .filter_map(|r| extract_year(r, current_year))
        .collect();
    if years.is_empty() {
        return 60.0;
    }

    let avg = years.iter().map(|y| *y as f64).sum::<f64>() / years.len() as f64;
    let age = current_year as f64 - avg;
    if age <= 1.0 {
        100.0
    } else if age <= 3.0 {
        90.0
    } else if age <= 5.0 {
        80.0
    } else if age <= 10.0 {
        60.0
    } else {
        30.0
    }
}

/// Recency vocabulary in the answer, on a moderate base of 60. Outdated
/// terms are blanked out before the current-term count: "yürürlükten"
/// embeds "yürürlük"/"yürürlükte" and must not double as currency evidence.
fn content_score(lower: &str, current_year: i32) -> f64 {
    let mut score: f64 = 60.0;

    let without_outdated = OUTDATED_TERMS
        .iter()
        .fold(lower.to_string(), |acc, term| acc.replace(term, " "));
    match text::presence_count(&without_outdated, CURRENT_TERMS) {
        n if n >= 2 => score += 30.0,
        1 => score += 20.0,
        _ => {}
    }

    if OUTDATED_TERMS.iter().any(|t| lower.contains(t)) {
        score -= 25.0;
    }

    let recent_years =
        [current_year, current_year - 1, current_year - 2].map(|y| y.to_string());
    if recent_years.iter().any(|y| lower.contains(y.as_str())) {
        score += 15.0;
    }

    score.clamp(0.0, 100.0)
}

/// Citations of in-force law and amendments, on a base of 50.
fn legislation_score(lower: &str) -> f64 {
    let mut score: f64 = 50.0;

    let current_refs: usize = CURRENT_LAW_PATTERNS
        .iter()
        .map(|re| re.find_iter(lower).count())
        .sum();
    if current_refs >= 2 {
        score += 35.0;
    } else if current_refs >= 1 {
        score += 25.0;
    }

    let amendment_refs: usize = AMENDMENT_PATTERNS
        .iter()
        .map(|re| re.find_iter(lower).count())
        .sum();
    if amendment_refs >= 1 {
        score += 15.0;
    }

    score.min(100.0)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn year_now() -> i32 {
        Utc::now().year()
    }

    fn dated(id: &str, date: &str) -> SearchResult {
        SearchResult::new("Mevzuat içeriği burada yer alır.", id).with_publish_date(date)
    }

    #[test]
    fn empty_answer_falls_back_to_sixty() {
        let c = CurrencyScorer::new().calculate_score(&[], "");
        assert_eq!(c.score, 60);
        assert_eq!(c.details, vec!["Güncellik değerlendirilemedi"]);
    }

    #[test]
    fn document_score_without_results_is_neutral_fifty() {
        assert_eq!(document_score(&[], year_now()), 50.0);
    }

    #[test]
    fn document_score_without_years_is_sixty() {
        let results = vec![dated("a", "tarih belirtilmemiş")];
        assert_eq!(document_score(&results, year_now()), 60.0);
    }

    #[test]
    fn document_score_steps_by_average_age() {
        let now = year_now();
        let fresh = vec![dated("a", &format!("{now}-01-15"))];
        assert_eq!(document_score(&fresh, now), 100.0);

        let mid = vec![dated("a", &(now - 4).to_string())];
        assert_eq!(document_score(&mid, now), 80.0);

        let stale = vec![dated("a", "2005 basımı"), dated("b", "2007 basımı")];
        assert_eq!(document_score(&stale, now), 30.0);
    }

    #[test]
    fn title_year_used_when_publish_date_missing() {
        let now = year_now();
        let r = SearchResult::new("içerik metni yeterince uzun", "a")
            .with_title(format!("İş Kanunu Şerhi {now}"));
        assert_eq!(extract_year(&r, now), Some(now));
    }

    #[test]
    fn implausible_years_rejected() {
        let now = year_now();
        let r = SearchResult::new("içerik metni yeterince uzun", "a").with_publish_date("1907");
        assert_eq!(extract_year(&r, now), None);
    }

    #[test]
    fn outdated_terms_cost_fixed_penalty() {
        let now = year_now();
        let base = content_score("bu düzenleme halen uygulanmaktadır", now);
        let stale = content_score("bu düzenleme mülga olup yürürlükten kaldırılmıştır", now);
        // Outdated wording never doubles as currency evidence, so the drop
        // is the full fixed penalty even though "yürürlükten" embeds
        // current-term spellings.
        assert_eq!(base - stale, 25.0);
        assert_eq!(content_score("bu düzenleme mülga sayılmıştır", now), 35.0);
    }

    #[test]
    fn genuine_in_force_wording_still_counts_as_current() {
        let now = year_now();
        // "yürürlükte" matches two current-term entries, "güncel" a third:
        // +30 on the base, with no outdated term in sight.
        assert_eq!(content_score("bu kanun yürürlükte ve günceldir", now), 90.0);
    }

    #[test]
    fn current_year_mention_earns_bonus() {
        let now = year_now();
        let with_year = content_score(&format!("düzenleme {now} itibarıyla uygulanır"), now);
        let without = content_score("düzenleme halen uygulanır", now);
        assert_eq!(with_year - without, 15.0);
    }

    #[test]
    fn legislation_patterns_accumulate() {
        assert_eq!(legislation_score("4857 sayılı iş kanunu uygulanır"), 75.0);
        assert_eq!(
            legislation_score("4857 sayılı kanun ve yürürlükteki kanun hükümleri"),
            85.0
        );
        assert_eq!(
            legislation_score("değiştirilen madde hükümleri dikkate alınır"),
            65.0
        );
        assert_eq!(legislation_score("genel bir açıklama"), 50.0);
    }

    #[test]
    fn fresh_sources_and_current_language_score_high() {
        let now = year_now();
        let results = vec![
            dated("a", &now.to_string()),
            dated("b", &(now - 1).to_string()),
        ];
        let answer = format!(
            "4857 sayılı İş Kanunu yürürlükte olup {now} yılı itibarıyla günceldir."
        );
        let c = CurrencyScorer::new().calculate_score(&results, &answer);
        assert!(c.score >= 85, "expected recent material to score high, got {}", c.score);
        assert_eq!(c.weight, 20);
    }
}
