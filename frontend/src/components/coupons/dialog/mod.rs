//! Coupon add/edit dialog: root module wiring the Yew `Component`
//! implementation with submodules for props, state, update logic, view
//! rendering, and the pure presenter/dispatcher pieces they share.
//!
//! Responsibilities
//! - Re-export the types parents use (`CouponDialogComponent`,
//!   `CouponDialogProps`, `FormMode`).
//! - Fix the dialog's mode at creation; later prop changes to `mode` are
//!   ignored until the component is remounted.

pub mod dispatcher;
mod messages;
pub mod mode;
pub mod presenter;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use mode::FormMode;
pub use props::CouponDialogProps;
pub use state::CouponDialogComponent;

impl Component for CouponDialogComponent {
    type Message = Msg;
    type Properties = CouponDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        CouponDialogComponent::new(ctx.props().mode)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
