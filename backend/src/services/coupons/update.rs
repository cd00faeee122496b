use actix_web::{web, HttpResponse};
use common::model::coupon::Coupon;
use common::requests::CouponSubmission;
use log::{info, warn};

use super::error::CouponError;
use super::validate;
use crate::store::state::CouponsState;

/// `POST /coupon/update`: replaces the coupon named by the body's `id`.
pub async fn process(
    state: web::Data<CouponsState>,
    payload: web::Json<CouponSubmission>,
) -> Result<HttpResponse, CouponError> {
    match update_coupon(&state, &payload).await {
        Ok(coupon) => {
            info!("coupon {} updated", coupon.id);
            Ok(HttpResponse::Ok().json(coupon))
        }
        Err(e) => {
            warn!("coupon update rejected for user {}: {}", payload.user_id, e);
            Err(e)
        }
    }
}

async fn update_coupon(
    state: &CouponsState,
    payload: &CouponSubmission,
) -> Result<Coupon, CouponError> {
    let id = validate::coupon_id(payload)?;
    let coupon = validate::into_coupon(payload, id)?;
    state.replace(coupon).await
}
