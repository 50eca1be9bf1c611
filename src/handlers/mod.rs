pub mod health;
pub mod put;
pub mod get;

pub use health::{health_handler, root_handler};
pub use put::put_handler;
pub use get::get_handler;

use axum::http::{header, HeaderName};

/// Every response body is plain text with exactly this content type
pub type PlainText = ([(HeaderName, &'static str); 1], String);

pub fn plain_text(body: impl Into<String>) -> PlainText {
    ([(header::CONTENT_TYPE, "text/plain")], body.into())
}
