//! Buzz core: the pure state machine and the keyword filter behind it.
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{filter_by_keyword, FilteredView, MatchedItem, PlatformMatches};
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{
    display_platform_name, percentage, AppViewModel, KeywordChip, PlatformCard, PlatformSeries,
    ResultView, SentimentRow, CARD_KEYWORD_LIMIT,
};
