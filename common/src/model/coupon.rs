use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used on the wire and by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A coupon record as stored by the backend and rendered by the frontend.
///
/// Serialized in camelCase so the JSON matches the dialog's form field names
/// (`targetApp`, `couponCode`, `expiryDate`, `usedDate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    pub provider: String,
    pub target_app: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub expiry_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_date: Option<String>,
}

/// Parses the date part of `raw`.
///
/// Accepts a bare `YYYY-MM-DD` as well as any longer text starting with one,
/// such as an ISO-8601 timestamp (`2024-03-01T00:00:00.000Z`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Normalizes a date to the `YYYY-MM-DD` form expected by date inputs.
///
/// Text that does not start with a valid date is returned trimmed and
/// otherwise untouched, so the user can still see and correct it.
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => raw.trim().to_string(),
    }
}
