//! Update function for the coupon dialog.
//!
//! - `Submit`: reads the form, builds the body, spawns the single request
//!   (which publishes to the store itself) and, in add mode, resets the form
//!   right away.
//! - `Resolved`: records the success or error message.
//! - `Dismiss*`: clears one of the two messages.

use gloo_console as console;
use web_sys::{FormData, HtmlFormElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::dispatcher;
use super::messages::Msg;
use super::presenter::{build_body, SubmitContext};
use super::state::CouponDialogComponent;
use crate::api::HttpCouponApi;

pub fn update(
    component: &mut CouponDialogComponent,
    ctx: &Context<CouponDialogComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Submit(event) => {
            event.prevent_default();

            let Some(form) = component.form_ref.cast::<HtmlFormElement>() else {
                return false;
            };
            let props = ctx.props();
            let submit_ctx = SubmitContext {
                mode: component.mode,
                user_id: &props.user_id,
                coupon: props.coupon.as_ref(),
            };

            let form_data = FormData::new_with_form(&form).ok();
            let body = build_body(&submit_ctx, |name| {
                form_data.as_ref().and_then(|data| data.get(name).as_string())
            });

            let body = match body {
                Ok(body) => body,
                Err(err) => {
                    component.feedback.fail(Some(err.to_string().as_str()));
                    return true;
                }
            };

            let mode = component.mode;
            let link = ctx.link().clone();
            let on_store = ctx.props().on_store.clone();
            console::log!(format!("submitting coupon to {}", mode.endpoint()));
            dispatcher::dispatch_then_reset(
                mode,
                move || {
                    spawn_local(async move {
                        let outcome =
                            dispatcher::submit_and_publish(&HttpCouponApi, mode, &body, &on_store)
                                .await;
                        if let Err(err) = &outcome {
                            console::warn!(format!("coupon submission failed: {}", err));
                        }
                        link.send_message(Msg::Resolved(outcome));
                    })
                },
                || form.reset(),
            );
            false
        }
        Msg::Resolved(outcome) => {
            component.feedback.apply(&outcome);
            true
        }
        Msg::DismissSuccess => {
            component.feedback.dismiss_success();
            true
        }
        Msg::DismissError => {
            component.feedback.dismiss_error();
            true
        }
    }
}
