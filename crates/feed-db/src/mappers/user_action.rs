//! UserAction entity <-> model mapper

use feed_core::entities::{ActionKind, UserAction};
use feed_core::error::DomainError;
use feed_core::value_objects::{PostId, UserId};

use crate::models::UserActionModel;

/// Convert ActionKind enum to database string
pub fn action_kind_to_str(kind: ActionKind) -> &'static str {
    kind.as_str()
}

/// Rows with an unrecognised action name are rejected
impl TryFrom<UserActionModel> for UserAction {
    type Error = DomainError;

    fn try_from(model: UserActionModel) -> Result<Self, Self::Error> {
        Ok(UserAction {
            post_id: PostId::new(model.post_id),
            user_id: UserId::new(model.user_id),
            kind: model.action.parse()?,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
