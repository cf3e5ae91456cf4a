use std::time::Duration;

use url::Url;

use crate::api::profile_url;
use crate::config::FetcherConfig;
use crate::error::{InstagramError, Result};
use crate::http_client::{FetchOptions, HttpClientExt, instance_error};
use crate::models::ProfileRecord;

pub struct ProfileFetcherBuilder {
    config: FetcherConfig,
}

impl Default for ProfileFetcherBuilder {
    fn default() -> Self {
        Self::from_config(FetcherConfig::default())
    }
}

impl ProfileFetcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: FetcherConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Handle used when `fetch_profile` is called without one.
    pub fn default_handle(mut self, handle: &str) -> Self {
        self.config.default_handle = handle.to_string();
        self
    }

    /// Request timeout for the `reqwest` client created by [`Self::build`].
    /// Clients passed to [`Self::build_with_client`] keep their own settings.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn mute_http_exceptions(mut self, mute: bool) -> Self {
        self.config.mute_http_exceptions = mute;
        self
    }

    pub fn build(self) -> Result<ProfileFetcher> {
        let http_client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(instance_error)?;

        self.build_with_client(http_client)
    }

    pub fn build_with_client<T>(self, http_client: T) -> Result<ProfileFetcher<T>>
    where
        T: HttpClientExt,
    {
        let base_url = Url::parse(&self.config.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(InstagramError::Config(format!(
                "Unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        let default_handle = self.config.default_handle.trim();
        if default_handle.is_empty() {
            return Err(InstagramError::Config(
                "Default handle must not be empty".into(),
            ));
        }

        Ok(ProfileFetcher {
            base_url,
            default_handle: default_handle.to_string(),
            options: FetchOptions {
                mute_http_exceptions: self.config.mute_http_exceptions,
            },
            http_client,
        })
    }
}

/// Fetches public profiles from the embedded-data endpoint.
///
/// Holds no per-call state, so clones can be used from concurrent tasks.
#[derive(Clone, Debug)]
pub struct ProfileFetcher<T = reqwest::Client> {
    base_url: Url,
    default_handle: String,
    options: FetchOptions,
    http_client: T,
}

impl ProfileFetcher<reqwest::Client> {
    pub fn builder() -> ProfileFetcherBuilder {
        ProfileFetcherBuilder::new()
    }

    /// Create a fetcher with the default settings. For more control, use the `builder` method.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a fetcher configured from the `INSTAGRAM_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ProfileFetcherBuilder::from_config(FetcherConfig::from_env()?).build()
    }
}

impl<T> ProfileFetcher<T>
where
    T: HttpClientExt,
{
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_handle(&self) -> &str {
        &self.default_handle
    }

    pub fn options(&self) -> FetchOptions {
        self.options
    }

    /// The URL `fetch_profile(handle)` would request.
    pub fn profile_url(&self, handle: Option<&str>) -> Result<Url> {
        profile_url(&self.base_url, self.resolve_handle(handle))
    }

    /// Fetch `handle` (or the default handle when absent or blank).
    ///
    /// Returns `Ok(None)` when the endpoint answers anything but 200, or when
    /// the request fails in transit and HTTP exceptions are muted. A 200 whose
    /// body is not a profile payload is reported as
    /// [`InstagramError::MalformedResponse`].
    pub async fn fetch_profile(&self, handle: Option<&str>) -> Result<Option<ProfileRecord>> {
        let handle = self.resolve_handle(handle);
        let url = profile_url(&self.base_url, handle)?;

        crate::profile::get_profile(&self.http_client, &url, handle, self.options).await
    }

    pub async fn fetch_default_profile(&self) -> Result<Option<ProfileRecord>> {
        self.fetch_profile(None).await
    }

    fn resolve_handle<'a>(&'a self, handle: Option<&'a str>) -> &'a str {
        handle
            .map(str::trim)
            .filter(|handle| !handle.is_empty())
            .unwrap_or(self.default_handle.as_str())
    }
}
