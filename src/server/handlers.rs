use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

pub const HELLO_BODY: &str = "Hello world\n";
pub const HELLO_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Answers any method on any path.
pub async fn hello() -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(HELLO_CONTENT_TYPE)),
            (header::CONTENT_LENGTH, HeaderValue::from(HELLO_BODY.len())),
        ],
        HELLO_BODY,
    )
        .into_response()
}
