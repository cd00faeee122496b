//! View rendering for the coupon dialog.
//!
//! A modal with the title, six labelled inputs pre-filled by the presenter,
//! the success/error alerts, and the Close / Reset / submit buttons. Inputs
//! are uncontrolled: their values are only read back on submit.

use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::presenter::CouponField;
use super::state::CouponDialogComponent;

pub fn view(component: &CouponDialogComponent, ctx: &Context<CouponDialogComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let mode = component.mode;
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-label={mode.title()}>
                <form
                    ref={component.form_ref.clone()}
                    onsubmit={link.callback(Msg::Submit)}
                >
                    <h2 class="dialog-title">{ mode.title() }</h2>
                    <button type="button" class="dialog-close" aria-label="close" onclick={on_close.clone()}>
                        { "✕" }
                    </button>

                    <div class="dialog-fields">
                        { for CouponField::ALL.iter().map(|field| field_input(*field, ctx)) }
                    </div>

                    { build_alerts(component, link) }

                    <div class="dialog-actions">
                        <button type="button" class="btn btn-error" onclick={on_close}>{ "Close" }</button>
                        {
                            if mode.resets_after_dispatch() {
                                html! { <button type="reset" class="btn btn-warning">{ "Reset" }</button> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="btn btn-primary">{ mode.button_text() }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input(field: CouponField, ctx: &Context<CouponDialogComponent>) -> Html {
    let name = field.name();
    let required = field.required();
    let label = if required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    html! {
        <label class="coupon-field">
            <span>{ label }</span>
            <input
                id={name}
                name={name}
                type={field.input_type()}
                required={required}
                autofocus={field == CouponField::Title}
                value={field.initial_value(ctx.props().coupon.as_ref())}
            />
        </label>
    }
}

fn build_alerts(component: &CouponDialogComponent, link: &Scope<CouponDialogComponent>) -> Html {
    let feedback = &component.feedback;
    html! {
        <>
            if let Some(msg) = &feedback.success {
                <div class="alert alert-success" role="alert">
                    <span>{ msg.clone() }</span>
                    <button type="button" aria-label="dismiss" onclick={link.callback(|_| Msg::DismissSuccess)}>{ "✕" }</button>
                </div>
            }
            if let Some(msg) = &feedback.error {
                <div class="alert alert-error" role="alert">
                    <span>{ msg.clone() }</span>
                    <button type="button" aria-label="dismiss" onclick={link.callback(|_| Msg::DismissError)}>{ "✕" }</button>
                </div>
            }
        </>
    }
}
