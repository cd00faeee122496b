use yew::prelude::*;

use super::mode::FormMode;
use super::presenter::Feedback;

/// Runtime state of the coupon dialog.
pub struct CouponDialogComponent {
    /// Fixed when the component is created.
    pub mode: FormMode,

    /// Success/error messages shown under the inputs.
    pub feedback: Feedback,

    /// Reference to the `<form>` element, read on submit and reset in add mode.
    pub form_ref: NodeRef,
}

impl CouponDialogComponent {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            feedback: Feedback::default(),
            form_ref: NodeRef::default(),
        }
    }
}
