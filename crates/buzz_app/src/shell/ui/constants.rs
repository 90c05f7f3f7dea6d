/// Environment variable naming the backend base URL.
pub const API_BASE_ENV: &str = "BUZZ_API_BASE";

/// Environment variable selecting the log destination (`file`, `term`, `both`).
pub const LOG_ENV: &str = "BUZZ_LOG";

/// Searches offered on the welcome screen.
pub const POPULAR_SEARCHES: [&str; 5] = [
    "iPhone 16",
    "Poco F7",
    "MacBook Air",
    "Samsung S24",
    "Nothing CMF",
];

pub(crate) const RULE_WIDTH: usize = 40;
pub(crate) const DISTRIBUTION_WIDTH: usize = 30;
pub(crate) const CHART_BAR_WIDTH: u64 = 12;
