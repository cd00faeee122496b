//! The two ways the coupon dialog can be opened.
//!
//! Everything that differs between adding and editing is looked up here, so
//! the presenter and dispatcher run a single flow for both.

use common::model::coupon::Coupon;
use common::routes;

use crate::store::CouponAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

struct ModeTable {
    title: &'static str,
    button_text: &'static str,
    success_message: &'static str,
    resets_after_dispatch: bool,
}

const ADD: ModeTable = ModeTable {
    title: "Add Coupon",
    button_text: "Add",
    success_message: "Success! Coupon Added",
    resets_after_dispatch: true,
};

const EDIT: ModeTable = ModeTable {
    title: "Edit Coupon",
    button_text: "Update",
    success_message: "Success! Coupon Updated",
    resets_after_dispatch: false,
};

impl FormMode {
    fn table(self) -> &'static ModeTable {
        match self {
            FormMode::Add => &ADD,
            FormMode::Edit => &EDIT,
        }
    }

    pub fn title(self) -> &'static str {
        self.table().title
    }

    pub fn button_text(self) -> &'static str {
        self.table().button_text
    }

    pub fn success_message(self) -> &'static str {
        self.table().success_message
    }

    /// Whether the form is cleared right after the request is sent. The
    /// "Reset" button is only offered in the same mode.
    pub fn resets_after_dispatch(self) -> bool {
        self.table().resets_after_dispatch
    }

    pub fn endpoint(self) -> String {
        match self {
            FormMode::Add => routes::add_url(),
            FormMode::Edit => routes::update_url(),
        }
    }

    /// How a coupon returned by this mode's endpoint enters the store.
    pub fn store_action(self, coupon: Coupon) -> CouponAction {
        match self {
            FormMode::Add => CouponAction::Added(coupon),
            FormMode::Edit => CouponAction::Updated(coupon),
        }
    }
}
