use bytes::Bytes;
pub use http::{Method, Request, Response, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Http error: {0}")]
    Protocol(#[from] http::Error),
    #[error("Http client error: {0}")]
    Instance(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn instance_error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Error {
    Error::Instance(error.into())
}

pub struct NoBody;

impl From<NoBody> for Bytes {
    fn from(_: NoBody) -> Self {
        Bytes::new()
    }
}

/// Per-request behaviour of the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// When set, transport failures (connection refused, DNS, timeouts) are
    /// reported as an unreachable outcome instead of an error.
    pub mute_http_exceptions: bool,
}

/// A minimal HTTP client abstraction so the fetch logic can run against
/// `reqwest` in production and against canned responses in tests.
pub trait HttpClientExt: Send + Sync {
    /// Send a HTTP request and buffer the whole response body.
    ///
    /// Every status code is returned as a response; only transport failures
    /// are reported as errors.
    fn send<T>(
        &self,
        req: Request<T>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send + 'static
    where
        T: Into<Bytes>,
        T: Send;
}

impl HttpClientExt for reqwest::Client {
    fn send<T>(
        &self,
        req: Request<T>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send + 'static
    where
        T: Into<Bytes>,
        T: Send,
    {
        let (parts, body) = req.into_parts();
        let body: Bytes = body.into();
        let req = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body);

        async move {
            let response = req.send().await.map_err(instance_error)?;

            let mut res = Response::builder().status(response.status());

            if let Some(hs) = res.headers_mut() {
                *hs = response.headers().clone();
            }

            let bytes = response.bytes().await.map_err(instance_error)?;

            res.body(bytes).map_err(Error::Protocol)
        }
    }
}
