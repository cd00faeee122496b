use actix_web::{web, HttpResponse};
use common::model::coupon::Coupon;
use common::requests::CouponSubmission;
use log::{info, warn};
use uuid::Uuid;

use super::error::CouponError;
use super::validate;
use crate::store::state::CouponsState;

/// `POST /coupon/add`: validates the form body and stores it under a new id.
pub async fn process(
    state: web::Data<CouponsState>,
    payload: web::Json<CouponSubmission>,
) -> Result<HttpResponse, CouponError> {
    match add_coupon(&state, &payload).await {
        Ok(coupon) => {
            info!("coupon {} added for user {}", coupon.id, coupon.user_id);
            Ok(HttpResponse::Ok().json(coupon))
        }
        Err(e) => {
            warn!("coupon add rejected for user {}: {}", payload.user_id, e);
            Err(e)
        }
    }
}

async fn add_coupon(
    state: &CouponsState,
    payload: &CouponSubmission,
) -> Result<Coupon, CouponError> {
    let coupon = validate::into_coupon(payload, Uuid::new_v4().to_string())?;
    state.insert(coupon).await
}
