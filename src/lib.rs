//! Fetch public Instagram profile statistics as flat, typed records.
//!
//! A [`ProfileFetcher`] requests a profile's embedded-data endpoint
//! (`https://www.instagram.com/<handle>/?__a=1`) and projects the JSON answer
//! into a [`ProfileRecord`].
//!
//! # Example
//! ```
//! use rig_instagram::ProfileFetcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rig_instagram::error::InstagramError> {
//!     let fetcher = ProfileFetcher::new()?;
//!
//!     match fetcher.fetch_profile(Some("nasa")).await? {
//!         Some(profile) => println!("{} has {} followers", profile.screen_name, profile.follower_count),
//!         None => println!("nasa was not found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Outcomes
//! - status 200 with a profile payload: `Ok(Some(record))`
//! - any other status, or a transport failure while HTTP exceptions are muted
//!   (the default): `Ok(None)` and one `tracing` warning
//! - status 200 with a body that is not a profile payload:
//!   [`InstagramError::MalformedResponse`](error::InstagramError::MalformedResponse)
//!
//! The crate never installs a `tracing` subscriber; that is left to the binary.

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod models;
pub mod profile;

pub use config::{DEFAULT_HANDLE, FetcherConfig};
pub use error::{InstagramError, Result};
pub use fetcher::{ProfileFetcher, ProfileFetcherBuilder};
pub use models::ProfileRecord;
