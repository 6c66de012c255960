use serde::{Deserialize, Serialize};

use crate::sentiment::{self, SentimentLabel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub sentiment: SentimentScores,
}

impl Article {
    pub fn sentiment_label(&self) -> SentimentLabel {
        sentiment::classify(self.sentiment.compound)
    }
}

/// VADER-style polarity scores attached to every article by the feed backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub compound: f64,
    #[serde(default)]
    pub neg: f64,
    #[serde(default)]
    pub neu: f64,
    #[serde(default)]
    pub pos: f64,
}

/// Response wrapper returned by the feed endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Article>,
}

impl Envelope {
    pub fn ok(data: Vec<Article>) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Vec::new(),
        }
    }

    /// Failure text for an unsuccessful envelope. Missing and empty messages
    /// both fall back to "Unknown error".
    pub fn failure_message(&self) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => "Unknown error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let json = r#"{
            "success": true,
            "data": [{
                "title": "Rain returns",
                "summary": "Forecast for the week.",
                "link": "https://example.com/rain",
                "keywords": ["weather", "rain"],
                "sentiment": {"neg": 0.0, "neu": 0.8, "pos": 0.2, "compound": 0.42}
            }]
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert_eq!(envelope.data.len(), 1);

        let article = &envelope.data[0];
        assert_eq!(article.keywords, vec!["weather", "rain"]);
        assert_eq!(article.sentiment.compound, 0.42);
        assert_eq!(article.sentiment_label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_decode_failure_envelope_without_data() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success": false, "message": "bad date"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.failure_message(), "bad date");
    }

    #[test]
    fn test_failure_message_defaults() {
        let mut envelope: Envelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(envelope.failure_message(), "Unknown error");

        envelope.message = Some(String::new());
        assert_eq!(envelope.failure_message(), "Unknown error");
    }

    #[test]
    fn test_missing_keywords_and_scores_default() {
        let json = r#"{"title": "t", "summary": "s", "link": "l", "sentiment": {"compound": -0.3}}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.keywords.is_empty());
        assert_eq!(article.sentiment.pos, 0.0);
        assert_eq!(article.sentiment_label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_missing_compound_is_rejected() {
        let json = r#"{"title": "t", "summary": "s", "link": "l", "sentiment": {}}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }
}
