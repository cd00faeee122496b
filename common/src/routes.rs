/// Scope under which every coupon endpoint lives.
pub const COUPON_SCOPE: &str = "/coupon";

/// Relative path (inside [`COUPON_SCOPE`]) of the create endpoint.
pub const ADD: &str = "/add";

/// Relative path (inside [`COUPON_SCOPE`]) of the update endpoint.
pub const UPDATE: &str = "/update";

/// Relative path (inside [`COUPON_SCOPE`]) listing the coupons owned by a user.
pub const BY_USER: &str = "/user/{user_id}";

pub fn add_url() -> String {
    format!("{}{}", COUPON_SCOPE, ADD)
}

pub fn update_url() -> String {
    format!("{}{}", COUPON_SCOPE, UPDATE)
}

pub fn by_user_url(user_id: &str) -> String {
    format!("{}/user/{}", COUPON_SCOPE, user_id)
}
