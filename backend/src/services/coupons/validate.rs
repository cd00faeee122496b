//! Turns a raw [`CouponSubmission`] into a [`Coupon`].
//!
//! Blank strings count as missing. Optional fields left blank become `None`.
//! Dates are stored normalized to `YYYY-MM-DD`.

use chrono::NaiveDate;
use common::model::coupon::{parse_date, Coupon, DATE_FORMAT};
use common::requests::CouponSubmission;

use super::error::CouponError;

pub fn into_coupon(submission: &CouponSubmission, id: String) -> Result<Coupon, CouponError> {
    let user_id = required("userId", &submission.user_id)?;
    let title = required("title", &submission.title)?;
    let provider = required("provider", &submission.provider)?;
    let target_app = required("targetApp", &submission.target_app)?;
    let expiry = required("expiryDate", &submission.expiry_date)?;
    let expiry_date = date("expiryDate", &expiry)?;
    let used_date = match optional(&submission.used_date) {
        Some(raw) => Some(date("usedDate", &raw)?),
        None => None,
    };

    Ok(Coupon {
        id,
        user_id,
        title,
        provider,
        target_app,
        coupon_code: optional(&submission.coupon_code),
        expiry_date: format_date(expiry_date),
        used_date: used_date.map(format_date),
    })
}

/// The coupon id an update refers to.
pub fn coupon_id(submission: &CouponSubmission) -> Result<String, CouponError> {
    required("id", submission.id.as_deref().unwrap_or_default())
}

fn required(name: &'static str, value: &str) -> Result<String, CouponError> {
    optional(value).ok_or(CouponError::MissingField(name))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn date(name: &'static str, value: &str) -> Result<NaiveDate, CouponError> {
    parse_date(value).ok_or(CouponError::InvalidDate(name))
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
