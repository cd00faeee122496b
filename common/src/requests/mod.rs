use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the dialog injects the current user's identifier.
pub const USER_ID_KEY: &str = "userId";

/// Key under which the dialog injects the edited coupon's identifier.
pub const COUPON_ID_KEY: &str = "id";

/// Flat field-name to value mapping posted by the coupon dialog.
///
/// Built fresh on every submission and serialized as a JSON object.
pub type CouponFormBody = BTreeMap<String, String>;

/// Typed view of a [`CouponFormBody`] as the backend reads it.
///
/// Every field defaults to empty so the server can report *which* required
/// field is missing instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub provider: String,
    pub target_app: String,
    pub coupon_code: String,
    pub expiry_date: String,
    pub used_date: String,
}
