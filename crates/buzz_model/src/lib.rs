//! Wire model for the buzz backend's JSON responses.
//!
//! The backend aggregates per-platform sentiment server side; these types
//! mirror its `/analyze` and `/health` payloads. Unknown wire fields
//! (ids, timestamps, like counts) are ignored on deserialization.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SentimentCounts {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub negative: u64,
}

impl SentimentCounts {
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// Average VADER component scores, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SentimentScores {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Backends occasionally omit text; treat that as empty rather than a
    /// decode failure.
    #[serde(default)]
    pub text: String,
    pub sentiment: Sentiment,
    pub score: Option<f64>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlatformAggregate {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub sentiment_counts: SentimentCounts,
    pub sentiment_scores: Option<SentimentScores>,
    #[serde(default)]
    pub top_keywords: Vec<String>,
    pub sample_items: Option<Vec<Item>>,
    pub all_items: Option<Vec<Item>>,
}

impl PlatformAggregate {
    /// The items available for keyword filtering: the full set when the
    /// backend sent one, else the display samples, else nothing.
    pub fn items(&self) -> &[Item] {
        match (&self.all_items, &self.sample_items) {
            (Some(items), _) => items,
            (None, Some(items)) => items,
            (None, None) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Aggregate {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub sentiment_counts: SentimentCounts,
    pub sentiment_scores: Option<SentimentScores>,
    #[serde(default)]
    pub top_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisResult {
    pub query: String,
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformAggregate>,
    #[serde(default)]
    pub combined: Aggregate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub mode: String,
    #[serde(default)]
    pub apis: BTreeMap<String, bool>,
    #[serde(default)]
    pub message: String,
}
