use bytes::Bytes;
use url::Url;

use crate::error::Result;
use crate::http_client::{self, FetchOptions, HttpClientExt, Method, NoBody, Request, Response};

/// What came back from a single request to the endpoint.
#[derive(Debug)]
pub enum ApiResponse {
    /// The server answered, with any status code.
    Received(Response<Bytes>),
    /// The request never produced a response and the failure was muted.
    Unreachable(http_client::Error),
}

pub async fn request_api<C>(client: &C, url: &Url, options: FetchOptions) -> Result<ApiResponse>
where
    C: HttpClientExt,
{
    let req = Request::builder()
        .method(Method::GET)
        .uri(url.as_str())
        .body(NoBody)
        .map_err(http_client::Error::from)?;

    match client.send(req).await {
        Ok(response) => Ok(ApiResponse::Received(response)),
        Err(err) if options.mute_http_exceptions => Ok(ApiResponse::Unreachable(err)),
        Err(err) => Err(err.into()),
    }
}
