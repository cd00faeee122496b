use common::model::coupon::{normalize_date, Coupon};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CouponListProps {
    pub coupons: Vec<Coupon>,
    pub on_add: Callback<()>,
    pub on_edit: Callback<Coupon>,
}

/// Table of the user's coupons with an add button and a per-row edit button.
pub struct CouponListComponent;

impl Component for CouponListComponent {
    type Message = ();
    type Properties = CouponListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CouponListComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_add = props.on_add.reform(|_: MouseEvent| ());

        html! {
            <div class="coupon-list">
                <button class="btn btn-primary" onclick={on_add}>{ "Add Coupon" }</button>
                {
                    if props.coupons.is_empty() {
                        html! { <p>{ "No coupons yet." }</p> }
                    } else {
                        html! {
                            <table class="coupons-table">
                                <thead>
                                    <tr>
                                        <th>{ "Title" }</th>
                                        <th>{ "Provider" }</th>
                                        <th>{ "Target App" }</th>
                                        <th>{ "Coupon Code" }</th>
                                        <th>{ "Expiry Date" }</th>
                                        <th>{ "Used Date" }</th>
                                        <th />
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.coupons.iter().map(|coupon| row(coupon, &props.on_edit)) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }
}

fn row(coupon: &Coupon, on_edit: &Callback<Coupon>) -> Html {
    let on_click = {
        let coupon = coupon.clone();
        on_edit.reform(move |_: MouseEvent| coupon.clone())
    };

    html! {
        <tr key={coupon.id.clone()}>
            <td>{ coupon.title.clone() }</td>
            <td>{ coupon.provider.clone() }</td>
            <td>{ coupon.target_app.clone() }</td>
            <td>{ coupon.coupon_code.clone().unwrap_or_default() }</td>
            <td>{ normalize_date(&coupon.expiry_date) }</td>
            <td>{ coupon.used_date.as_deref().map(normalize_date).unwrap_or_default() }</td>
            <td><button class="btn btn-warning" onclick={on_click}>{ "Edit" }</button></td>
        </tr>
    }
}
