// src/search.rs
//! Input contract: one retrieved passage as handed over by the retrieval
//! subsystem. The engine only reads these fields; it never mutates them.

use serde::{Deserialize, Serialize};

/// One retrieved passage from the vector-search layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Passage text used for consistency checks.
    pub content: String,
    /// Opaque identifier; only compared for diversity counting.
    pub document_id: String,
    /// Free-text title, secondary source for year extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// Free-text publish date, primary source for year extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    /// Cosine similarity against the query, expected in [0.0, 1.0].
    /// The retrieval layer does not always populate it; missing or zero
    /// values are excluded from averages rather than counted as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl SearchResult {
    pub fn new(content: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            document_id: document_id.into(),
            document_title: None,
            publish_date: None,
            similarity_score: None,
        }
    }

    /// Builder-style setters for the optional metadata.
    pub fn with_similarity(mut self, score: f64) -> Self {
        self.similarity_score = Some(score);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    pub fn with_publish_date(mut self, date: impl Into<String>) -> Self {
        self.publish_date = Some(date.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"content": "Madde 5 uygulanır.", "document_id": "doc-1"}"#;
        let r: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.document_id, "doc-1");
        assert!(r.similarity_score.is_none());
        assert!(r.publish_date.is_none());
    }

    #[test]
    fn builder_populates_metadata() {
        let r = SearchResult::new("içerik", "doc-2")
            .with_similarity(0.87)
            .with_title("İş Kanunu 2023")
            .with_publish_date("2023-05-01");
        assert!((r.similarity_score.unwrap() - 0.87).abs() < 1e-9);
        assert_eq!(r.document_title.as_deref(), Some("İş Kanunu 2023"));
    }
}
