//! Value objects - immutable types that represent domain concepts

mod ids;
mod pagination;
mod ranking;
mod sort_mode;

pub use ids::{ChannelId, IdParseError, PostId, UserId};
pub use pagination::PaginationWindow;
pub use ranking::{PostOrdering, ReplyRanking};
pub use sort_mode::SortMode;
