use buzz_model::{AnalysisResult, Item};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub keyword: String,
    pub platforms: BTreeMap<String, PlatformMatches>,
    pub total_items: usize,
    pub items: Vec<MatchedItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformMatches {
    pub items: Vec<MatchedItem>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedItem {
    pub platform: String,
    pub item: Item,
}

/// Collects every item whose text contains the keyword, case insensitively,
/// grouped by source platform. Returns `None` when nothing matches.
pub fn filter_by_keyword(result: &AnalysisResult, keyword: &str) -> Option<FilteredView> {
    let needle = keyword.to_lowercase();
    let mut platforms = BTreeMap::new();
    let mut items = Vec::new();

    for (platform, aggregate) in &result.platforms {
        let matches: Vec<MatchedItem> = aggregate
            .items()
            .iter()
            .filter(|item| item.text.to_lowercase().contains(&needle))
            .map(|item| MatchedItem {
                platform: platform.clone(),
                item: item.clone(),
            })
            .collect();
        if matches.is_empty() {
            continue;
        }
        items.extend(matches.iter().cloned());
        platforms.insert(
            platform.clone(),
            PlatformMatches {
                count: matches.len(),
                items: matches,
            },
        );
    }

    if items.is_empty() {
        return None;
    }
    Some(FilteredView {
        keyword: keyword.to_string(),
        total_items: items.len(),
        platforms,
        items,
    })
}
