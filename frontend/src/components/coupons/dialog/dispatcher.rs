//! Effectful side of the coupon dialog: sends one form body to the mode's
//! endpoint and turns the answer into a store action plus the success
//! message, or into the [`ApiError`] to surface.
//!
//! One call issues exactly one request. There are no retries or timeouts and
//! nothing stops a second submission while the first is in flight.

use common::requests::CouponFormBody;
use yew::Callback;

use super::mode::FormMode;
use crate::api::{ApiError, CouponApi};
use crate::store::CouponAction;

/// A successful submission, ready to be published.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub action: CouponAction,
    pub message: &'static str,
}

pub type SubmitOutcome = Result<Dispatched, ApiError>;

pub async fn submit<A: CouponApi>(
    api: &A,
    mode: FormMode,
    body: &CouponFormBody,
) -> SubmitOutcome {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let coupon = api.post_json(&mode.endpoint(), json).await?;

    Ok(Dispatched {
        action: mode.store_action(coupon),
        message: mode.success_message(),
    })
}

/// [`submit`], then hands a successful store action to `on_store`.
///
/// The action is published as soon as the response arrives, whether or not
/// the dialog that sent it is still mounted.
pub async fn submit_and_publish<A: CouponApi>(
    api: &A,
    mode: FormMode,
    body: &CouponFormBody,
    on_store: &Callback<CouponAction>,
) -> SubmitOutcome {
    let outcome = submit(api, mode, body).await;
    if let Ok(dispatched) = &outcome {
        on_store.emit(dispatched.action.clone());
    }
    outcome
}

/// Starts the request, then clears the form if `mode` asks for it.
///
/// The reset never waits for the response.
pub fn dispatch_then_reset(mode: FormMode, start: impl FnOnce(), reset: impl FnOnce()) {
    start();
    if mode.resets_after_dispatch() {
        reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::coupons::dialog::presenter::Feedback;
    use common::model::coupon::Coupon;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Answers every request with a canned result and records what was sent.
    struct FakeApi {
        answer: Result<Coupon, ApiError>,
        sent: RefCell<Vec<(String, Value)>>,
    }

    impl FakeApi {
        fn answering(answer: Result<Coupon, ApiError>) -> Self {
            Self {
                answer,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl CouponApi for FakeApi {
        async fn post_json(&self, url: &str, body: String) -> Result<Coupon, ApiError> {
            let json = serde_json::from_str(&body).expect("body is JSON");
            self.sent.borrow_mut().push((url.to_string(), json));
            self.answer.clone()
        }
    }

    fn recording_store() -> (Callback<CouponAction>, Rc<RefCell<Vec<CouponAction>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let callback = Callback::from(move |action| sink.borrow_mut().push(action));
        (callback, received)
    }

    fn returned() -> Coupon {
        Coupon {
            id: "c1".into(),
            user_id: "u1".into(),
            title: "T".into(),
            provider: "P".into(),
            target_app: "App".into(),
            coupon_code: Some("SAVE10".into()),
            expiry_date: "2030-05-01".into(),
            used_date: None,
        }
    }

    fn body(with_id: bool) -> CouponFormBody {
        let mut body: CouponFormBody = [
            ("title", "T"),
            ("provider", "P"),
            ("targetApp", "App"),
            ("couponCode", "SAVE10"),
            ("expiryDate", "2030-05-01"),
            ("usedDate", ""),
            ("userId", "u1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        if with_id {
            body.insert("id".into(), "c1".into());
        }
        body
    }

    #[tokio::test]
    async fn add_posts_once_to_the_create_endpoint_and_appends() {
        let api = FakeApi::answering(Ok(returned()));

        let outcome = submit(&api, FormMode::Add, &body(false)).await;

        let sent = api.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/coupon/add");
        assert_eq!(sent[0].1["userId"], "u1");
        assert!(sent[0].1.get("id").is_none());

        let dispatched = outcome.unwrap();
        assert_eq!(dispatched.message, "Success! Coupon Added");
        assert_eq!(dispatched.action, CouponAction::Added(returned()));
    }

    #[tokio::test]
    async fn edit_posts_to_the_update_endpoint_and_replaces() {
        let api = FakeApi::answering(Ok(returned()));

        let outcome = submit(&api, FormMode::Edit, &body(true)).await;

        let sent = api.sent.borrow();
        assert_eq!(sent[0].0, "/coupon/update");
        assert_eq!(sent[0].1["id"], "c1");

        let dispatched = outcome.unwrap();
        assert_eq!(dispatched.message, "Success! Coupon Updated");
        assert_eq!(dispatched.action, CouponAction::Updated(returned()));
    }

    #[tokio::test]
    async fn successful_response_is_published_without_a_mounted_dialog() {
        let api = FakeApi::answering(Ok(returned()));
        let (on_store, received) = recording_store();

        submit_and_publish(&api, FormMode::Add, &body(false), &on_store).await.unwrap();
        submit_and_publish(&api, FormMode::Edit, &body(true), &on_store).await.unwrap();

        assert_eq!(
            *received.borrow(),
            vec![
                CouponAction::Added(returned()),
                CouponAction::Updated(returned()),
            ]
        );
    }

    #[tokio::test]
    async fn failed_response_publishes_nothing() {
        let api = FakeApi::answering(Err(crate::api::rejection(500, "")));
        let (on_store, received) = recording_store();

        let outcome = submit_and_publish(&api, FormMode::Add, &body(false), &on_store).await;

        assert!(outcome.is_err());
        assert!(received.borrow().is_empty());
    }

    #[tokio::test]
    async fn server_message_becomes_the_error_and_success_stays_unset() {
        let api = FakeApi::answering(Err(ApiError::Rejected {
            status: 409,
            msg: Some("Duplicate code".into()),
        }));

        let outcome = submit(&api, FormMode::Add, &body(false)).await;
        let mut feedback = Feedback::default();
        feedback.apply(&outcome);

        assert_eq!(feedback.error.as_deref(), Some("Duplicate code"));
        assert_eq!(feedback.success, None);
    }

    #[tokio::test]
    async fn failure_without_a_body_leaves_the_error_unset() {
        let api = FakeApi::answering(Err(crate::api::rejection(500, "")));

        let outcome = submit(&api, FormMode::Edit, &body(true)).await;
        let mut feedback = Feedback::default();
        feedback.apply(&outcome);

        assert!(outcome.is_err());
        assert_eq!(feedback, Feedback::default());
    }

    #[test]
    fn add_resets_right_after_the_request_starts_and_edit_never_resets() {
        let steps = RefCell::new(Vec::new());
        dispatch_then_reset(
            FormMode::Add,
            || steps.borrow_mut().push("request"),
            || steps.borrow_mut().push("reset"),
        );
        assert_eq!(*steps.borrow(), vec!["request", "reset"]);

        let steps = RefCell::new(Vec::new());
        dispatch_then_reset(
            FormMode::Edit,
            || steps.borrow_mut().push("request"),
            || steps.borrow_mut().push("reset"),
        );
        assert_eq!(*steps.borrow(), vec!["request"]);
    }
}
