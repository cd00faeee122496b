//! In-memory coupon storage shared by all request handlers.
//!
//! - `CouponsState`: a clonable, thread-safe map of every coupon keyed by id.
//!   It is injected into the Actix application state in `main.rs`.
//! - The duplicate-code rule is checked under the same write lock that
//!   inserts or replaces the coupon, so two concurrent submissions with the
//!   same code cannot both succeed.
//!
//! Nothing is written to disk; restarting the server empties the store.

use common::model::coupon::{parse_date, Coupon};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::services::coupons::error::CouponError;

#[derive(Clone, Default)]
pub struct CouponsState {
    /// Map from coupon id to the stored record.
    coupons: Arc<RwLock<HashMap<String, Coupon>>>,
}

impl CouponsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly created coupon.
    pub async fn insert(&self, coupon: Coupon) -> Result<Coupon, CouponError> {
        let mut coupons = self.coupons.write().await;
        if has_duplicate_code(&coupons, &coupon) {
            return Err(CouponError::DuplicateCode);
        }
        coupons.insert(coupon.id.clone(), coupon.clone());
        Ok(coupon)
    }

    /// Replaces an existing coupon owned by the same user.
    pub async fn replace(&self, coupon: Coupon) -> Result<Coupon, CouponError> {
        let mut coupons = self.coupons.write().await;
        match coupons.get(&coupon.id) {
            None => return Err(CouponError::NotFound),
            Some(existing) if existing.user_id != coupon.user_id => {
                return Err(CouponError::NotOwner)
            }
            Some(_) => {}
        }
        if has_duplicate_code(&coupons, &coupon) {
            return Err(CouponError::DuplicateCode);
        }
        coupons.insert(coupon.id.clone(), coupon.clone());
        Ok(coupon)
    }

    /// Coupons owned by `user_id`, soonest expiry first.
    pub async fn list_for_user(&self, user_id: &str) -> Vec<Coupon> {
        let coupons = self.coupons.read().await;
        let mut owned: Vec<Coupon> = coupons
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            parse_date(&a.expiry_date)
                .cmp(&parse_date(&b.expiry_date))
                .then_with(|| a.title.cmp(&b.title))
        });
        owned
    }
}

/// True when another coupon of the same user already carries `candidate`'s code.
fn has_duplicate_code(coupons: &HashMap<String, Coupon>, candidate: &Coupon) -> bool {
    let Some(code) = candidate.coupon_code.as_deref() else {
        return false;
    };
    coupons.values().any(|c| {
        c.id != candidate.id
            && c.user_id == candidate.user_id
            && c.coupon_code.as_deref() == Some(code)
    })
}
