//! UserProfile entity <-> model mapper

use feed_core::entities::UserProfile;
use feed_core::value_objects::UserId;

use crate::models::UserDetailsModel;

impl From<UserDetailsModel> for UserProfile {
    fn from(model: UserDetailsModel) -> Self {
        UserProfile {
            user_id: UserId::new(model.user_id),
            first_name: model.first_name.unwrap_or_default(),
            middle_name: model.middle_name.unwrap_or_default(),
            last_name: model.last_name.unwrap_or_default(),
            phone: model.user_phone.unwrap_or_default(),
            avatar_url: model.profile_image_url.unwrap_or_default(),
        }
    }
}
