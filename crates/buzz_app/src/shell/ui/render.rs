//! Renders view models into styled terminal text.
//!
//! Every function returns a plain `String`; console styling degrades to
//! unstyled text when stdout is not a terminal, so the output stays
//! greppable and testable.

use buzz_core::{
    display_platform_name, AppViewModel, FilteredView, KeywordChip, PlatformCard, PlatformMatches,
    PlatformSeries, ResultView, SentimentRow,
};
use buzz_model::{HealthStatus, Sentiment};
use console::style;

use super::constants::*;

pub fn render_view(view: &AppViewModel, base_url: &str) -> String {
    if let Some(message) = &view.error {
        return error_banner(message, base_url);
    }
    match &view.result {
        Some(result) => {
            let mut out = result_view(result);
            if let Some(filtered) = &view.filtered {
                out.push('\n');
                out.push_str(&filtered_section(filtered));
            }
            out
        }
        None => welcome(base_url),
    }
}

pub fn welcome(base_url: &str) -> String {
    let lines = vec![
        style("📡 Buzzboard").bold().cyan().to_string(),
        "Social media sentiment, one query at a time.".to_string(),
        format!("Backend: {base_url}"),
        String::new(),
        "Type a product name to analyze the buzz, or pick a popular search:".to_string(),
        popular_list(),
        "Run /p <number> for a popular search, /help for all commands.".to_string(),
    ];
    lines.join("\n")
}

pub fn popular_list() -> String {
    POPULAR_SEARCHES
        .iter()
        .enumerate()
        .map(|(position, query)| format!("  [{}] {}", position + 1, style(query).bold()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn help() -> String {
    let lines = vec![
        style("Commands").bold().to_string(),
        style("─".repeat(RULE_WIDTH)).dim().to_string(),
        "  <query>           analyze the buzz for a product or topic".to_string(),
        "  /k <n|keyword>    toggle the keyword filter (chip number or text)".to_string(),
        "  /clear            drop the keyword filter".to_string(),
        "  /p [n]            list popular searches, or run one by number".to_string(),
        "  /health           check the backend status".to_string(),
        "  /help             show this help".to_string(),
        "  /quit             leave".to_string(),
    ];
    lines.join("\n")
}

pub fn searching(query: &str) -> String {
    format!("Analyzing buzz for '{query}'...")
}

pub fn error_banner(message: &str, base_url: &str) -> String {
    let lines = vec![
        format!("{} {}", style("✗").red().bold(), style(message).red()),
        style(format!(
            "Check that the analysis backend is running at {base_url} (set {API_BASE_ENV} to override)."
        ))
        .dim()
        .to_string(),
    ];
    lines.join("\n")
}

pub fn result_view(view: &ResultView) -> String {
    let mut sections = vec![header(view), sentiment_section(view)];
    if !view.platform_series.is_empty() {
        sections.push(platform_chart(&view.platform_series));
    }
    if !view.platform_cards.is_empty() {
        sections.push(platform_cards(&view.platform_cards));
    }
    if !view.keywords.is_empty() {
        sections.push(keyword_chips(&view.keywords));
    }
    sections.join("\n\n")
}

fn header(view: &ResultView) -> String {
    let mut lines = vec![
        style("─".repeat(RULE_WIDTH)).dim().to_string(),
        style(format!("Buzz for '{}'", view.query))
            .bold()
            .cyan()
            .to_string(),
    ];
    if !view.summary.is_empty() {
        lines.push(view.summary.clone());
    }
    lines.join("\n")
}

fn sentiment_section(view: &ResultView) -> String {
    let mut lines = vec![format!(
        "{} ({} items)",
        style("Overall sentiment").bold(),
        format_count(view.total_items)
    )];
    for row in &view.sentiment_rows {
        lines.push(sentiment_line(row));
    }
    if let Some(bar) = distribution_bar(&view.sentiment_rows, view.total_items) {
        lines.push(format!("  {bar}"));
    }
    lines.join("\n")
}

fn sentiment_line(row: &SentimentRow) -> String {
    format!(
        "  {} {:>6} ({}%)",
        paint(row.sentiment, &format!("{:<8}", sentiment_label(row.sentiment))),
        format_count(row.count),
        row.percent
    )
}

/// One proportional bar for the whole result. Cells lost to flooring,
/// and items the backend left unscored, show as dim padding.
fn distribution_bar(rows: &[SentimentRow], total: u64) -> Option<String> {
    if total == 0 {
        return None;
    }
    let mut bar = String::new();
    let mut used = 0;
    for row in rows {
        let width = (row.count * DISTRIBUTION_WIDTH as u64 / total) as usize;
        if width > 0 {
            bar.push_str(&paint(row.sentiment, &"█".repeat(width)));
            used += width;
        }
    }
    if used < DISTRIBUTION_WIDTH {
        bar.push_str(
            &style("░".repeat(DISTRIBUTION_WIDTH - used))
                .dim()
                .to_string(),
        );
    }
    Some(bar)
}

fn platform_chart(series: &[PlatformSeries]) -> String {
    let mut lines = vec![style("By platform").bold().to_string()];
    let peak = series
        .iter()
        .flat_map(|entry| Sentiment::ALL.iter().map(|&sentiment| entry.counts.count(sentiment)))
        .max()
        .unwrap_or(0);
    let name_width = series
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);
    for entry in series {
        lines.push(chart_line(entry, peak, name_width));
    }
    lines.join("\n")
}

fn chart_line(entry: &PlatformSeries, peak: u64, name_width: usize) -> String {
    let mut line = format!("  {:<name_width$}", entry.name);
    for sentiment in Sentiment::ALL {
        let count = entry.counts.count(sentiment);
        let bar = "█".repeat(scaled_width(count, peak));
        line.push_str(&format!("  {} {}", paint(sentiment, &bar), count));
    }
    line
}

fn scaled_width(count: u64, peak: u64) -> usize {
    if peak == 0 || count == 0 {
        return 0;
    }
    ((count * CHART_BAR_WIDTH).div_ceil(peak)) as usize
}

fn platform_cards(cards: &[PlatformCard]) -> String {
    let mut blocks = vec![style("Platforms").bold().to_string()];
    for card in cards {
        blocks.push(platform_card(card));
    }
    blocks.join("\n")
}

fn platform_card(card: &PlatformCard) -> String {
    let mut lines = vec![format!(
        "  {} {} · {} items",
        platform_icon(&card.platform),
        style(&card.name).bold(),
        format_count(card.total)
    )];
    let counts = Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            paint(
                sentiment,
                &format!("{} {}", card.counts.count(sentiment), sentiment.label()),
            )
        })
        .collect::<Vec<_>>()
        .join(" · ");
    lines.push(format!("     {counts}"));
    if !card.top_keywords.is_empty() {
        lines.push(
            style(format!("     keywords: {}", card.top_keywords.join(", ")))
                .dim()
                .to_string(),
        );
    }
    lines.join("\n")
}

fn keyword_chips(chips: &[KeywordChip]) -> String {
    let rendered: Vec<String> = chips
        .iter()
        .enumerate()
        .map(|(position, chip)| {
            let label = format!("[{}] {}", position + 1, chip.keyword);
            if chip.active {
                style(format!("«{label}»")).bold().cyan().to_string()
            } else {
                label
            }
        })
        .collect();
    format!(
        "{} (toggle with /k <n>)\n  {}",
        style("Keywords").bold(),
        rendered.join("  ")
    )
}

pub fn filtered_section(filtered: &FilteredView) -> String {
    let unit = if filtered.total_items == 1 {
        "item"
    } else {
        "items"
    };
    let mut sections = vec![
        style("─".repeat(RULE_WIDTH)).dim().to_string(),
        format!(
            "{} · {} matching {unit}",
            style(format!("Mentions of '{}'", filtered.keyword))
                .bold()
                .cyan(),
            filtered.total_items
        ),
    ];
    for (platform, matches) in &filtered.platforms {
        sections.push(platform_matches(platform, matches));
    }
    sections.join("\n")
}

fn platform_matches(platform: &str, matches: &PlatformMatches) -> String {
    let mut lines = vec![format!(
        "  {} {} ({})",
        platform_icon(platform),
        style(display_platform_name(platform)).bold(),
        matches.count
    )];
    for matched in &matches.items {
        lines.push(format!(
            "    {} {}",
            sentiment_glyph(matched.item.sentiment),
            matched.item.text
        ));
        if let Some(video_url) = &matched.item.video_url {
            lines.push(
                style(format!("      Watch Video → {video_url}"))
                    .dim()
                    .to_string(),
            );
        }
    }
    lines.join("\n")
}

pub fn health_report(health: &HealthStatus, base_url: &str) -> String {
    let mut lines = vec![format!(
        "{} {} ({} mode)",
        style("Backend:").bold(),
        health.status,
        health.mode
    )];
    if !health.message.is_empty() {
        lines.push(format!("  {}", health.message));
    }
    if !health.apis.is_empty() {
        let apis = health
            .apis
            .iter()
            .map(|(name, configured)| {
                if *configured {
                    format!("{name} {}", style("✓").green())
                } else {
                    format!("{name} {}", style("✗").red())
                }
            })
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(format!("  apis: {apis}"));
    }
    lines.push(style(format!("  url: {base_url}")).dim().to_string());
    lines.join("\n")
}

fn sentiment_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Neutral => "Neutral",
        Sentiment::Negative => "Negative",
    }
}

fn sentiment_glyph(sentiment: Sentiment) -> String {
    match sentiment {
        Sentiment::Positive => style("▲").green().to_string(),
        Sentiment::Neutral => style("●").yellow().to_string(),
        Sentiment::Negative => style("▼").red().to_string(),
    }
}

fn paint(sentiment: Sentiment, text: &str) -> String {
    match sentiment {
        Sentiment::Positive => style(text).green().to_string(),
        Sentiment::Neutral => style(text).yellow().to_string(),
        Sentiment::Negative => style(text).red().to_string(),
    }
}

fn platform_icon(platform: &str) -> &'static str {
    match platform {
        "twitter" => "🐦",
        "reddit" => "🔴",
        _ => "📺",
    }
}

fn format_count(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use buzz_core::MatchedItem;
    use buzz_model::{Item, SentimentCounts};
    use std::collections::BTreeMap;

    fn counts(positive: u64, neutral: u64, negative: u64) -> SentimentCounts {
        SentimentCounts {
            positive,
            neutral,
            negative,
        }
    }

    fn sample_view() -> ResultView {
        ResultView {
            query: "Poco F7".to_string(),
            summary: "Analysis of 6 items across 2 platforms for 'Poco F7': mostly positive."
                .to_string(),
            total_items: 6,
            sentiment_rows: vec![
                SentimentRow {
                    sentiment: Sentiment::Positive,
                    count: 4,
                    percent: 67,
                },
                SentimentRow {
                    sentiment: Sentiment::Neutral,
                    count: 1,
                    percent: 17,
                },
                SentimentRow {
                    sentiment: Sentiment::Negative,
                    count: 1,
                    percent: 17,
                },
            ],
            platform_series: vec![
                PlatformSeries {
                    name: "Reddit".to_string(),
                    counts: counts(3, 1, 0),
                },
                PlatformSeries {
                    name: "Twitter".to_string(),
                    counts: counts(1, 0, 1),
                },
            ],
            platform_cards: vec![
                PlatformCard {
                    platform: "reddit".to_string(),
                    name: "Reddit".to_string(),
                    total: 4,
                    counts: counts(3, 1, 0),
                    top_keywords: vec!["battery".to_string(), "price".to_string()],
                },
                PlatformCard {
                    platform: "twitter".to_string(),
                    name: "Twitter".to_string(),
                    total: 2,
                    counts: counts(1, 0, 1),
                    top_keywords: Vec::new(),
                },
            ],
            keywords: vec![
                KeywordChip {
                    keyword: "battery".to_string(),
                    active: false,
                },
                KeywordChip {
                    keyword: "price".to_string(),
                    active: true,
                },
            ],
        }
    }

    fn matched(platform: &str, text: &str, sentiment: Sentiment, video_url: Option<&str>) -> MatchedItem {
        MatchedItem {
            platform: platform.to_string(),
            item: Item {
                text: text.to_string(),
                sentiment,
                score: None,
                video_url: video_url.map(str::to_string),
            },
        }
    }

    #[test]
    fn result_view_shows_counts_and_percentages() {
        console::set_colors_enabled(false);
        let text = result_view(&sample_view());
        assert!(text.contains("Buzz for 'Poco F7'"), "{text}");
        assert!(text.contains("Positive"), "{text}");
        assert!(text.contains("(67%)"), "{text}");
        assert!(text.contains("Overall sentiment (6 items)"), "{text}");
    }

    #[test]
    fn welcome_lists_popular_searches() {
        console::set_colors_enabled(false);
        let text = welcome("http://127.0.0.1:5000");
        assert!(text.contains("[1] iPhone 16"), "{text}");
        assert!(text.contains("[5] Nothing CMF"), "{text}");
        assert!(text.contains("Backend: http://127.0.0.1:5000"), "{text}");
    }

    #[test]
    fn error_banner_names_the_backend() {
        console::set_colors_enabled(false);
        let text = error_banner("server error: 502 Bad Gateway", "http://10.0.0.2:5000");
        assert!(text.contains("server error: 502 Bad Gateway"), "{text}");
        assert!(text.contains("http://10.0.0.2:5000"), "{text}");
        assert!(text.contains("BUZZ_API_BASE"), "{text}");
    }

    #[test]
    fn active_keyword_chip_is_marked() {
        console::set_colors_enabled(false);
        let text = result_view(&sample_view());
        assert!(text.contains("«[2] price»"), "{text}");
        assert!(text.contains("[1] battery"), "{text}");
        assert!(!text.contains("«[1] battery»"), "{text}");
    }

    #[test]
    fn platform_cards_show_icons_and_keywords() {
        console::set_colors_enabled(false);
        let text = result_view(&sample_view());
        assert!(text.contains("🔴 Reddit · 4 items"), "{text}");
        assert!(text.contains("🐦 Twitter · 2 items"), "{text}");
        assert!(text.contains("3 positive · 1 neutral · 0 negative"), "{text}");
        assert!(text.contains("keywords: battery, price"), "{text}");
    }

    #[test]
    fn filtered_section_groups_by_platform() {
        console::set_colors_enabled(false);
        let mut platforms = BTreeMap::new();
        platforms.insert(
            "reddit".to_string(),
            PlatformMatches {
                items: vec![matched(
                    "reddit",
                    "Price point is unbeatable",
                    Sentiment::Positive,
                    None,
                )],
                count: 1,
            },
        );
        platforms.insert(
            "youtube".to_string(),
            PlatformMatches {
                items: vec![matched(
                    "youtube",
                    "Price hike ruined it for me",
                    Sentiment::Negative,
                    Some("https://youtube.com/watch?v=abc"),
                )],
                count: 1,
            },
        );
        let filtered = FilteredView {
            keyword: "price".to_string(),
            total_items: 2,
            items: platforms
                .values()
                .flat_map(|matches| matches.items.iter().cloned())
                .collect(),
            platforms,
        };

        let text = filtered_section(&filtered);
        assert!(text.contains("Mentions of 'price'"), "{text}");
        assert!(text.contains("2 matching items"), "{text}");
        assert!(text.contains("🔴 Reddit (1)"), "{text}");
        assert!(text.contains("📺 Youtube (1)"), "{text}");
        assert!(text.contains("▲ Price point is unbeatable"), "{text}");
        assert!(text.contains("▼ Price hike ruined it for me"), "{text}");
        assert!(
            text.contains("Watch Video → https://youtube.com/watch?v=abc"),
            "{text}"
        );
    }

    #[test]
    fn icons_fall_back_to_video() {
        assert_eq!(platform_icon("twitter"), "🐦");
        assert_eq!(platform_icon("reddit"), "🔴");
        assert_eq!(platform_icon("youtube"), "📺");
        assert_eq!(platform_icon("mastodon"), "📺");
    }

    #[test]
    fn counts_render_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn distribution_bar_fills_by_share() {
        console::set_colors_enabled(false);
        let rows = vec![
            SentimentRow {
                sentiment: Sentiment::Positive,
                count: 2,
                percent: 50,
            },
            SentimentRow {
                sentiment: Sentiment::Neutral,
                count: 1,
                percent: 25,
            },
            SentimentRow {
                sentiment: Sentiment::Negative,
                count: 1,
                percent: 25,
            },
        ];
        let bar = distribution_bar(&rows, 4).expect("bar");
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 29);
        assert_eq!(bar.chars().filter(|&c| c == '░').count(), 1);

        assert!(distribution_bar(&rows, 0).is_none());
    }

    #[test]
    fn chart_bars_scale_to_the_peak() {
        assert_eq!(scaled_width(4, 4), 12);
        assert_eq!(scaled_width(1, 4), 3);
        assert_eq!(scaled_width(0, 4), 0);
        assert_eq!(scaled_width(5, 0), 0);
        // A tiny nonzero count still gets one visible cell.
        assert_eq!(scaled_width(1, 100), 1);
    }

    #[test]
    fn health_report_lists_apis() {
        console::set_colors_enabled(false);
        let health = HealthStatus {
            status: "ok".to_string(),
            mode: "mock".to_string(),
            apis: BTreeMap::from([
                ("reddit".to_string(), true),
                ("twitter".to_string(), false),
            ]),
            message: "Running with sample data".to_string(),
        };
        let text = health_report(&health, "http://127.0.0.1:5000");
        assert!(text.contains("ok (mock mode)"), "{text}");
        assert!(text.contains("Running with sample data"), "{text}");
        assert!(text.contains("reddit ✓"), "{text}");
        assert!(text.contains("twitter ✗"), "{text}");
    }
}
