use common::model::coupon::Coupon;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::fetch_user_coupons;
use crate::components::coupons::dialog::{CouponDialogComponent, FormMode};
use crate::components::coupons::list::CouponListComponent;
use crate::helpers::show_toast;
use crate::session::Session;
use crate::store::{CouponAction, CouponStore};

pub enum Msg {
    Store(CouponAction),
    OpenAdd,
    OpenEdit(Coupon),
    CloseDialog,
}

/// Which dialog is open, if any.
struct OpenDialog {
    mode: FormMode,
    coupon: Option<Coupon>,
    /// Bumped on every open so the dialog remounts with fresh state.
    generation: u32,
}

pub struct App {
    session: Session,
    store: CouponStore,
    dialog: Option<OpenDialog>,
    opened: u32,
}

impl App {
    fn open(&mut self, mode: FormMode, coupon: Option<Coupon>) {
        self.opened += 1;
        self.dialog = Some(OpenDialog {
            mode,
            coupon,
            generation: self.opened,
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::load(),
            store: CouponStore::default(),
            dialog: None,
            opened: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Store(action) => self.store.apply(action),
            Msg::OpenAdd => self.open(FormMode::Add, None),
            Msg::OpenEdit(coupon) => self.open(FormMode::Edit, Some(coupon)),
            Msg::CloseDialog => self.dialog = None,
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        let user_id = self.session.user_id.clone();
        spawn_local(async move {
            match fetch_user_coupons(&user_id).await {
                Ok(coupons) => link.send_message(Msg::Store(CouponAction::Loaded(coupons))),
                Err(err) => {
                    gloo_console::error!(format!("loading coupons failed: {}", err));
                    show_toast("Could not load your coupons.");
                }
            }
        });
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="coupons-root">
                <h1>{ "Coupons" }</h1>
                <CouponListComponent
                    coupons={self.store.coupons().to_vec()}
                    on_add={link.callback(|_: ()| Msg::OpenAdd)}
                    on_edit={link.callback(Msg::OpenEdit)}
                />
                {
                    match &self.dialog {
                        Some(dialog) => html! {
                            <CouponDialogComponent
                                key={dialog.generation}
                                mode={dialog.mode}
                                coupon={dialog.coupon.clone()}
                                user_id={self.session.user_id.clone()}
                                on_close={link.callback(|_: ()| Msg::CloseDialog)}
                                on_store={link.callback(Msg::Store)}
                            />
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}
