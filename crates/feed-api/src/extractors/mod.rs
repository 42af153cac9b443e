//! Axum extractors for request handling
//!
//! Custom extractors for the viewer identity, validation, paging and path ids.

mod pagination;
mod path;
mod validated;
mod viewer;

pub use pagination::{PageParams, PageRequest};
pub use path::{ChannelPath, ChannelPostPath, PostActionPath, PostPath};
pub use validated::ValidatedJson;
pub use viewer::{Viewer, XUserId};
