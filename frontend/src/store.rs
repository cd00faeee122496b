//! Client-side list of the user's coupons.
//!
//! Owned by the root `App` component. Every mutation goes through
//! [`CouponStore::apply`] with a [`CouponAction`].

use common::model::coupon::Coupon;

#[derive(Debug, Clone, PartialEq)]
pub enum CouponAction {
    /// Replace the whole list, e.g. after the initial fetch.
    Loaded(Vec<Coupon>),
    /// A coupon was created on the server.
    Added(Coupon),
    /// A coupon was updated on the server.
    Updated(Coupon),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponStore {
    coupons: Vec<Coupon>,
}

impl CouponStore {
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn apply(&mut self, action: CouponAction) {
        match action {
            CouponAction::Loaded(coupons) => self.coupons = coupons,
            CouponAction::Added(coupon) => self.coupons.push(coupon),
            CouponAction::Updated(coupon) => {
                // Unknown ids are ignored: the list only shows what was loaded or added.
                if let Some(slot) = self.coupons.iter_mut().find(|c| c.id == coupon.id) {
                    *slot = coupon;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(id: &str, title: &str) -> Coupon {
        Coupon {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: title.to_string(),
            provider: "P".to_string(),
            target_app: "App".to_string(),
            coupon_code: None,
            expiry_date: "2030-01-01".to_string(),
            used_date: None,
        }
    }

    #[test]
    fn added_appends_and_updated_replaces_in_place() {
        let mut store = CouponStore::default();
        store.apply(CouponAction::Loaded(vec![coupon("a", "A"), coupon("b", "B")]));
        store.apply(CouponAction::Added(coupon("c", "C")));
        store.apply(CouponAction::Updated(coupon("a", "A2")));

        let titles: Vec<&str> = store.coupons().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A2", "B", "C"]);
    }

    #[test]
    fn updating_an_unknown_id_changes_nothing() {
        let mut store = CouponStore::default();
        store.apply(CouponAction::Added(coupon("a", "A")));
        let before = store.clone();

        store.apply(CouponAction::Updated(coupon("zz", "Z")));
        assert_eq!(store, before);
    }
}
