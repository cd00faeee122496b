//! # Coupon Service Module
//!
//! Routes every request under `/coupon` to its handler. Bodies are the flat
//! field mapping posted by the frontend's coupon dialog; responses are either
//! the stored [`common::model::coupon::Coupon`] or `{ "msg": ... }`.
//!
//! ## Sub-modules:
//! - `add`: creates a coupon under a fresh id.
//! - `update`: replaces an existing coupon of the same user.
//! - `list`: returns the coupons owned by one user.
//! - `validate`: required-field and date checks shared by `add` and `update`.
//! - `error`: the `CouponError` taxonomy and its HTTP rendering.

mod add;
pub mod error;
mod list;
mod update;
mod validate;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{self, get, post, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use common::responses::ErrorMessage;
use common::routes::{ADD, BY_USER, COUPON_SCOPE, UPDATE};

/// Largest accepted request body.
const BODY_LIMIT: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for all coupon routes.
///
/// # Registered Routes:
///
/// *   **`POST /add`**: `add::process`
/// *   **`POST /update`**: `update::process`
/// *   **`GET /user/{user_id}`**: `list::process`
pub fn configure_routes() -> Scope {
    scope(COUPON_SCOPE)
        .route(ADD, post().to(add::process))
        .route(UPDATE, post().to(update::process))
        .route(BY_USER, get().to(list::process))
}

/// JSON extractor settings: body limit, and malformed bodies answered with
/// the same `{ "msg": ... }` shape as every other rejection.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorMessage::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::CouponsState;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::coupon::Coupon;
    use serde_json::{json, Value};

    fn add_body(code: &str) -> Value {
        json!({
            "title": "Pizza night",
            "provider": "Slice",
            "targetApp": "Wolt",
            "couponCode": code,
            "expiryDate": "2030-05-01",
            "usedDate": "",
            "userId": "u1"
        })
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(json_config())
                    .app_data(web::Data::new($state.clone()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn add_returns_the_stored_coupon() {
        let state = CouponsState::new();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(add_body("SAVE10"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let coupon: Coupon = test::read_body_json(resp).await;
        assert!(!coupon.id.is_empty());
        assert_eq!(coupon.user_id, "u1");
        assert_eq!(coupon.coupon_code.as_deref(), Some("SAVE10"));
        assert_eq!(coupon.used_date, None);
        assert_eq!(state.list_for_user("u1").await, vec![coupon]);
    }

    #[actix_web::test]
    async fn duplicate_code_is_rejected_with_a_message() {
        let state = CouponsState::new();
        let app = app!(state);

        let first = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(add_body("SAVE10"))
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let second = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(add_body("SAVE10"))
            .to_request();
        let resp = test::call_service(&app, second).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.msg, "Duplicate code");
    }

    #[actix_web::test]
    async fn missing_required_field_is_a_bad_request() {
        let app = app!(CouponsState::new());
        let mut body = add_body("");
        body["title"] = json!("");

        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.msg, "title is required");
    }

    #[actix_web::test]
    async fn malformed_json_still_answers_with_msg() {
        let app = app!(CouponsState::new());
        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert!(!body.msg.is_empty());
    }

    #[actix_web::test]
    async fn update_replaces_by_id_and_unknown_id_is_not_found() {
        let state = CouponsState::new();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(add_body("SAVE10"))
            .to_request();
        let created: Coupon = test::read_body_json(test::call_service(&app, req).await).await;

        let mut body = add_body("SAVE10");
        body["id"] = json!(created.id);
        body["title"] = json!("Pizza night (family)");
        body["usedDate"] = json!("2030-04-02");
        let req = test::TestRequest::post()
            .uri("/coupon/update")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Coupon = test::read_body_json(resp).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Pizza night (family)");
        assert_eq!(updated.used_date.as_deref(), Some("2030-04-02"));

        body["id"] = json!("does-not-exist");
        let req = test::TestRequest::post()
            .uri("/coupon/update")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(err.msg, "Coupon not found");
    }

    #[actix_web::test]
    async fn list_returns_only_the_users_coupons() {
        let state = CouponsState::new();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(add_body("A"))
            .to_request();
        test::call_service(&app, req).await;
        let mut other = add_body("B");
        other["userId"] = json!("u2");
        let req = test::TestRequest::post()
            .uri("/coupon/add")
            .set_json(other)
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/coupon/user/u1").to_request();
        let coupons: Vec<Coupon> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].coupon_code.as_deref(), Some("A"));
    }
}
