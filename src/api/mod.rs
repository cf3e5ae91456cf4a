pub mod endpoints;
pub mod requests;
pub use endpoints::{INSTAGRAM_BASE_URL, profile_url};
pub use requests::{ApiResponse, request_api};
