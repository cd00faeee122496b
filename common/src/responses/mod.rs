use serde::{Deserialize, Serialize};

/// Error body returned by the coupon endpoints on any rejected request.
///
/// The frontend shows `msg` verbatim in the dialog's error alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub msg: String,
}

impl ErrorMessage {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
