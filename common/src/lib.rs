//! Types shared by the coupons frontend and backend: the `Coupon` wire model,
//! the flat form body posted by the coupon dialog, the `{ msg }` error body and
//! the API paths both sides agree on.

pub mod model;
pub mod requests;
pub mod responses;
pub mod routes;
