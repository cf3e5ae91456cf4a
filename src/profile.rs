use serde::{Deserialize, Deserializer};
use url::Url;

use crate::api::requests::{ApiResponse, request_api};
use crate::error::{InstagramError, Result};
use crate::http_client::{FetchOptions, HttpClientExt, StatusCode};
use crate::models::ProfileRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRaw {
    pub user: UserRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRaw {
    pub username: String,
    pub full_name: String,
    pub is_private: bool,
    pub is_verified: bool,
    pub profile_pic_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub external_url: String,
    pub followed_by: EdgeCount,
    pub follows: EdgeCount,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EdgeCount {
    pub count: u64,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn parse_profile(user: UserRaw) -> ProfileRecord {
    ProfileRecord {
        screen_name: user.username,
        full_name: user.full_name,
        is_private: user.is_private,
        is_verified: user.is_verified,
        profile_image: user.profile_pic_url,
        website_url: user.external_url,
        follower_count: user.followed_by.count,
        friend_count: user.follows.count,
    }
}

/// Decodes a 200 body into a record, naming the JSON path that broke on failure.
pub fn parse_profile_response(body: &[u8]) -> Result<ProfileRecord> {
    let de = &mut serde_json::Deserializer::from_slice(body);

    let raw: ProfileRaw = serde_path_to_error::deserialize(&mut *de)
        .map_err(|err| InstagramError::MalformedResponse(err.to_string()))?;
    de.end()
        .map_err(|err| InstagramError::MalformedResponse(err.to_string()))?;

    Ok(parse_profile(raw.user))
}

/// Requests `url` and projects the answer.
///
/// Only status 200 is treated as a profile. Any other status, or a muted
/// transport failure, logs one warning and yields `None`.
pub async fn get_profile<C>(
    client: &C,
    url: &Url,
    handle: &str,
    options: FetchOptions,
) -> Result<Option<ProfileRecord>>
where
    C: HttpClientExt,
{
    tracing::debug!(handle, %url, "Requesting profile");

    match request_api(client, url, options).await? {
        ApiResponse::Received(response) if response.status() == StatusCode::OK => {
            let profile = parse_profile_response(response.body())?;
            tracing::debug!(handle, ?profile, "Parsed profile");
            Ok(Some(profile))
        }
        ApiResponse::Received(response) => {
            tracing::warn!(
                handle,
                reason = "status",
                status = %response.status(),
                "User not found"
            );
            Ok(None)
        }
        ApiResponse::Unreachable(err) => {
            tracing::warn!(handle, reason = "unreachable", error = %err, "User not found");
            Ok(None)
        }
    }
}
