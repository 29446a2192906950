// src/text.rs
//! Turkish text primitives shared by the scorers: diacritic folding,
//! normalization, tokenization, keyword extraction, and the stop-word set.

use std::collections::HashSet;

/// Fixed Turkish stop-word set used when extracting content keywords.
/// Kept as a plain table so the list stays auditable.
pub const STOP_WORDS: &[&str] = &[
    "acaba", "ama", "ancak", "artik", "az", "bazi", "belki", "bir", "biri", "birkac", "biz", "bu",
    "cok", "cunku", "da", "daha", "de", "defa", "diye", "eger", "en", "gibi", "hem", "hep",
    "hepsi", "her", "hic", "icin", "ile", "ise", "kez", "ki", "kim", "mi", "mu", "nasil", "ne",
    "neden", "nerede", "nereye", "nicin", "niye", "sanki", "sey", "siz", "su", "tum", "ve",
    "veya", "ya", "yani",
];

/// Fold one Turkish character to its ASCII base, lowercasing on the way.
/// Covers both cases of the six special letters plus the dotted/dotless I pair.
fn fold_char(c: char) -> char {
    match c {
        'ı' | 'İ' | 'I' => 'i',
        'ğ' | 'Ğ' => 'g',
        'ü' | 'Ü' => 'u',
        'ş' | 'Ş' => 's',
        'ö' | 'Ö' => 'o',
        'ç' | 'Ç' => 'c',
        _ => c.to_ascii_lowercase(),
    }
}

/// Normalize free text for keyword comparison: fold Turkish characters to
/// ASCII, lowercase, replace punctuation with spaces, collapse whitespace.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .map(fold_char)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the content-keyword set from raw text: normalize, tokenize,
/// drop stop words and tokens shorter than 3 characters.
pub fn keywords(s: &str) -> HashSet<String> {
    normalize(s)
        .split_whitespace()
        .filter(|t| t.chars().count() >= 3)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Lowercase without ASCII-folding the Turkish letters. Used for substring
/// matching against vocabulary tables that keep their native spelling
/// ("fıkra", "sayılı", ...).
pub fn lowercase_turkish(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'İ' => 'i',
            'I' => 'ı',
            'Ğ' => 'ğ',
            'Ü' => 'ü',
            'Ş' => 'ş',
            'Ö' => 'ö',
            'Ç' => 'ç',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Count how many entries of a vocabulary table occur in `haystack`
/// (presence, not frequency). Caller passes already-lowercased text.
pub fn presence_count(haystack: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|term| haystack.contains(*term)).count()
}

/// Split into non-empty sentences on `.`, `!`, `?` boundaries.
pub fn sentence_count(s: &str) -> usize {
    s.split(['.', '!', '?'])
        .filter(|part| !part.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_turkish_characters() {
        assert_eq!(normalize("İş Kanunu'na GÖRE"), "is kanunu na gore");
        assert_eq!(normalize("yönetmelik   hükümleri!"), "yonetmelik hukumleri");
    }

    #[test]
    fn keywords_drop_stop_words_and_short_tokens() {
        let ks = keywords("Bu kanun ve madde ile iş");
        assert!(ks.contains("kanun"));
        assert!(ks.contains("madde"));
        assert!(!ks.contains("bu"));
        assert!(!ks.contains("ve"));
        // "iş" folds to "is" — only 2 chars, dropped
        assert!(!ks.contains("is"));
    }

    #[test]
    fn lowercase_turkish_keeps_native_letters() {
        assert_eq!(lowercase_turkish("FIKRA SAYILI"), "fıkra sayılı");
        assert_eq!(lowercase_turkish("İptal"), "iptal");
    }

    #[test]
    fn presence_counts_distinct_terms_once() {
        let text = "madde madde kanun";
        assert_eq!(presence_count(text, &["madde", "kanun", "tebliğ"]), 2);
    }

    #[test]
    fn sentences_split_on_terminators() {
        assert_eq!(sentence_count("Bir. İki! Üç?"), 3);
        assert_eq!(sentence_count("Tek cümle"), 1);
        assert_eq!(sentence_count("..."), 0);
    }
}
