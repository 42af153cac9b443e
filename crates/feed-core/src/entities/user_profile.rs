//! UserProfile - author display fields joined onto posts at read time

use crate::value_objects::UserId;

/// Author details synced from the identity service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub user_id: UserId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// First, middle and last name joined by single spaces, skipping empty parts
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
