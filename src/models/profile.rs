use serde::{Deserialize, Serialize};

/// Flat view of a public profile, built only from a fully parsed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub screen_name: String,
    pub full_name: String,
    pub is_private: bool,
    pub is_verified: bool,
    pub profile_image: String,
    /// Empty when the profile has no external link.
    pub website_url: String,
    pub follower_count: u64,
    pub friend_count: u64,
}
