use buzz_model::{AnalysisResult, Sentiment, SentimentCounts};

/// Platform cards show at most this many of the backend's top keywords.
pub const CARD_KEYWORD_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub loading: bool,
    pub query_input: String,
    pub error: Option<String>,
    pub result: Option<ResultView>,
    pub filtered: Option<crate::FilteredView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub query: String,
    pub summary: String,
    pub total_items: u64,
    pub sentiment_rows: Vec<SentimentRow>,
    pub platform_series: Vec<PlatformSeries>,
    pub platform_cards: Vec<PlatformCard>,
    pub keywords: Vec<KeywordChip>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentRow {
    pub sentiment: Sentiment,
    pub count: u64,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSeries {
    pub name: String,
    pub counts: SentimentCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCard {
    /// Wire key of the platform, used for icon lookup.
    pub platform: String,
    /// Display name, first letter upper-cased.
    pub name: String,
    pub total: u64,
    pub counts: SentimentCounts,
    pub top_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordChip {
    pub keyword: String,
    pub active: bool,
}

impl ResultView {
    pub(crate) fn build(result: &AnalysisResult, selected_keyword: Option<&str>) -> Self {
        let combined = &result.combined;

        let mut platform_series = Vec::with_capacity(result.platforms.len());
        let mut platform_cards = Vec::with_capacity(result.platforms.len());
        for (platform, aggregate) in &result.platforms {
            let name = display_platform_name(platform);
            platform_series.push(PlatformSeries {
                name: name.clone(),
                counts: aggregate.sentiment_counts,
            });
            platform_cards.push(PlatformCard {
                platform: platform.clone(),
                name,
                total: aggregate.total,
                counts: aggregate.sentiment_counts,
                top_keywords: aggregate
                    .top_keywords
                    .iter()
                    .take(CARD_KEYWORD_LIMIT)
                    .cloned()
                    .collect(),
            });
        }

        let keywords = combined
            .top_keywords
            .iter()
            .map(|keyword| KeywordChip {
                active: selected_keyword == Some(keyword.as_str()),
                keyword: keyword.clone(),
            })
            .collect();

        ResultView {
            query: result.query.clone(),
            summary: combined.summary.clone(),
            total_items: combined.total_items,
            sentiment_rows: sentiment_rows(&combined.sentiment_counts, combined.total_items),
            platform_series,
            platform_cards,
            keywords,
        }
    }
}

fn sentiment_rows(counts: &SentimentCounts, total: u64) -> Vec<SentimentRow> {
    Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            let count = counts.count(sentiment);
            SentimentRow {
                sentiment,
                count,
                percent: percentage(count, total),
            }
        })
        .collect()
}

/// Rounded share of `part` in `total`, zero when there is no data.
pub fn percentage(part: u64, total: u64) -> u8 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u8
    }
}

/// First letter upper-cased, the rest untouched ("reddit" -> "Reddit").
pub fn display_platform_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
