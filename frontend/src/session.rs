//! The signed-in user as far as the coupon UI is concerned.
//!
//! There is no login screen: the user id lives in `localStorage` and is
//! minted on first visit.

use uuid::Uuid;

const USER_ID_STORAGE_KEY: &str = "userId";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

        let stored = storage
            .as_ref()
            .and_then(|s| s.get_item(USER_ID_STORAGE_KEY).ok().flatten())
            .filter(|id| !id.trim().is_empty());
        if let Some(user_id) = stored {
            return Self { user_id };
        }

        let user_id = Uuid::new_v4().to_string();
        if let Some(storage) = storage {
            let _ = storage.set_item(USER_ID_STORAGE_KEY, &user_id);
        }
        Self { user_id }
    }
}
