//! User details database model (synced from the identity service)

use sqlx::FromRow;

/// Database model for user_details table; name columns are nullable upstream
#[derive(Debug, Clone, FromRow)]
pub struct UserDetailsModel {
    pub user_id: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub user_phone: Option<String>,
    pub profile_image_url: Option<String>,
}
