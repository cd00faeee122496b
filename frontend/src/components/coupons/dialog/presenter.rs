//! Pure side of the coupon dialog: which fields exist, what they start
//! with, how a submission becomes a [`CouponFormBody`], and the
//! success/error messages shown under the fields.
//!
//! Nothing here touches the DOM, so it is tested natively.

use common::model::coupon::{normalize_date, Coupon};
use common::requests::{CouponFormBody, COUPON_ID_KEY, USER_ID_KEY};
use thiserror::Error;

use super::dispatcher::SubmitOutcome;
use super::mode::FormMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponField {
    Title,
    Provider,
    TargetApp,
    CouponCode,
    ExpiryDate,
    UsedDate,
}

impl CouponField {
    /// Render order of the inputs.
    pub const ALL: [CouponField; 6] = [
        CouponField::Title,
        CouponField::Provider,
        CouponField::TargetApp,
        CouponField::CouponCode,
        CouponField::ExpiryDate,
        CouponField::UsedDate,
    ];

    /// Form field name, identical to the JSON key of the [`Coupon`].
    pub fn name(self) -> &'static str {
        match self {
            CouponField::Title => "title",
            CouponField::Provider => "provider",
            CouponField::TargetApp => "targetApp",
            CouponField::CouponCode => "couponCode",
            CouponField::ExpiryDate => "expiryDate",
            CouponField::UsedDate => "usedDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CouponField::Title => "Title",
            CouponField::Provider => "Provider",
            CouponField::TargetApp => "Target App",
            CouponField::CouponCode => "Coupon Code",
            CouponField::ExpiryDate => "Expiry Date",
            CouponField::UsedDate => "Used Date",
        }
    }

    pub fn input_type(self) -> &'static str {
        if self.is_date() {
            "date"
        } else {
            "text"
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, CouponField::CouponCode | CouponField::UsedDate)
    }

    fn is_date(self) -> bool {
        matches!(self, CouponField::ExpiryDate | CouponField::UsedDate)
    }

    /// Value the input starts with: the existing coupon's value, dates cut
    /// down to `YYYY-MM-DD`, or empty.
    pub fn initial_value(self, coupon: Option<&Coupon>) -> String {
        let Some(coupon) = coupon else {
            return String::new();
        };
        let raw = match self {
            CouponField::Title => Some(coupon.title.as_str()),
            CouponField::Provider => Some(coupon.provider.as_str()),
            CouponField::TargetApp => Some(coupon.target_app.as_str()),
            CouponField::CouponCode => coupon.coupon_code.as_deref(),
            CouponField::ExpiryDate => Some(coupon.expiry_date.as_str()),
            CouponField::UsedDate => coupon.used_date.as_deref(),
        };
        match raw {
            Some(value) if self.is_date() => normalize_date(value),
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("No coupon selected for editing")]
    MissingCoupon,
}

/// Who is submitting and in which mode. Passed in explicitly on every submit.
#[derive(Debug, Clone, Copy)]
pub struct SubmitContext<'a> {
    pub mode: FormMode,
    pub user_id: &'a str,
    pub coupon: Option<&'a Coupon>,
}

/// Collects the six named fields through `read` and injects `userId`, plus
/// the coupon `id` in edit mode.
///
/// A field `read` knows nothing about is sent as an empty string. Required
/// fields left blank are reported instead of sent.
pub fn build_body(
    ctx: &SubmitContext<'_>,
    mut read: impl FnMut(&str) -> Option<String>,
) -> Result<CouponFormBody, FormError> {
    let mut body = CouponFormBody::new();
    for field in CouponField::ALL {
        let value = read(field.name()).unwrap_or_default();
        if field.required() && value.trim().is_empty() {
            return Err(FormError::MissingField(field.label()));
        }
        body.insert(field.name().to_string(), value);
    }

    body.insert(USER_ID_KEY.to_string(), ctx.user_id.to_string());

    if ctx.mode == FormMode::Edit {
        let coupon = ctx.coupon.ok_or(FormError::MissingCoupon)?;
        body.insert(COUPON_ID_KEY.to_string(), coupon.id.clone());
    }

    Ok(body)
}

/// Messages shown under the form after a submission.
///
/// At most one of the two is set after any submission; each can be
/// dismissed on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Feedback {
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            Ok(dispatched) => self.succeed(dispatched.message),
            Err(err) => self.fail(err.server_message()),
        }
    }

    pub fn succeed(&mut self, message: &str) {
        self.success = Some(message.to_string());
        self.error = None;
    }

    /// Records a failure. A missing or empty message leaves the error unset.
    pub fn fail(&mut self, message: Option<&str>) {
        self.success = None;
        self.error = message.filter(|m| !m.is_empty()).map(str::to_string);
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
