//! HelpBridge API Bindings
//!
//! HTTP calls to the external HelpBridge service, organized by domain.

mod auth;
mod needs;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

pub use auth::*;
pub use needs::*;

/// Send a request and decode its JSON body
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> ApiResult<T> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode_response(status, &body)
}

/// Success bodies decode into `T`, anything else into an `ApiError`
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
