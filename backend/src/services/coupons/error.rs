use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorMessage;
use thiserror::Error;

/// Every way a coupon request can be rejected.
///
/// The `Display` text is what the client sees in the `msg` field.
#[derive(Debug, Error)]
pub enum CouponError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD form")]
    InvalidDate(&'static str),
    #[error("Duplicate code")]
    DuplicateCode,
    #[error("Coupon not found")]
    NotFound,
    #[error("Coupon belongs to another user")]
    NotOwner,
}

impl ResponseError for CouponError {
    fn status_code(&self) -> StatusCode {
        match self {
            CouponError::MissingField(_) | CouponError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            CouponError::DuplicateCode => StatusCode::CONFLICT,
            CouponError::NotFound => StatusCode::NOT_FOUND,
            CouponError::NotOwner => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.to_string()))
    }
}
