use actix_web::{web, HttpResponse};

use crate::store::state::CouponsState;

/// `GET /coupon/user/{user_id}`: every coupon owned by the user.
pub async fn process(state: web::Data<CouponsState>, user_id: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(state.list_for_user(&user_id).await)
}
