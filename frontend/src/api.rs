//! HTTP access to the coupon endpoints.
//!
//! The coupon dialog talks to the server only through the [`CouponApi`]
//! trait so its submission flow can be exercised without a browser.
//! [`HttpCouponApi`] is the `gloo-net` implementation used at runtime.

use common::model::coupon::Coupon;
use common::responses::ErrorMessage;
use common::routes;
use gloo_net::http::{Request, Response};
use thiserror::Error;

/// Failure of a remote coupon request.
///
/// Only [`ApiError::Rejected`] can carry a message meant for the user; the
/// other variants describe problems the server never got to explain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, msg: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// The server-supplied `msg`, if the error body had one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { msg, .. } => msg.as_deref(),
            _ => None,
        }
    }
}

/// Builds the error for a non-2xx answer from its raw body text.
pub fn rejection(status: u16, body: &str) -> ApiError {
    let msg = serde_json::from_str::<ErrorMessage>(body)
        .ok()
        .map(|e| e.msg);
    ApiError::Rejected { status, msg }
}

#[allow(async_fn_in_trait)]
pub trait CouponApi {
    /// POSTs an already JSON-encoded body to `url` and decodes the coupon it
    /// answers with.
    async fn post_json(&self, url: &str, body: String) -> Result<Coupon, ApiError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCouponApi;

impl CouponApi for HttpCouponApi {
    async fn post_json(&self, url: &str, body: String) -> Result<Coupon, ApiError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode(response).await
    }
}

/// Loads every coupon owned by `user_id`.
pub async fn fetch_user_coupons(user_id: &str) -> Result<Vec<Coupon>, ApiError> {
    let response = Request::get(&routes::by_user_url(user_id))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    decode(response).await
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(rejection(response.status(), &body))
    }
}
