//! Properties of the `CouponDialogComponent`.
//!
//! The session and the store are passed in here rather than looked up, so
//! the dialog only knows what its parent hands it.

use common::model::coupon::Coupon;
use yew::prelude::*;

use super::mode::FormMode;
use crate::store::CouponAction;

#[derive(Properties, PartialEq, Clone)]
pub struct CouponDialogProps {
    /// Add or edit. Read once, when the component is created.
    pub mode: FormMode,

    /// Coupon being edited; pre-fills the inputs. `None` in add mode.
    #[prop_or_default]
    pub coupon: Option<Coupon>,

    /// Current user's id, injected into every submitted body as `userId`.
    pub user_id: String,

    /// Emitted by the close icon and the "Close" button.
    pub on_close: Callback<()>,

    /// Receives the store action for every successful submission.
    pub on_store: Callback<CouponAction>,
}
