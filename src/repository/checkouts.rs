//! Equipment checkout repository
//!
//! A checkout and the instance it claims move together: the record append
//! and the `is_checked_out` flip happen under one write guard, never one
//! without the other.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::EquipmentCheckout,
};

use super::Store;

#[derive(Clone)]
pub struct CheckoutsRepository {
    store: Store,
}

impl CheckoutsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All currently active checkouts
    pub async fn list_active(&self) -> AppResult<Vec<EquipmentCheckout>> {
        Ok(self
            .store
            .read()
            .checkouts
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    /// Record a checkout of the target item.
    ///
    /// The record is stored as given. Only an active record claims the item;
    /// an inactive one is a historical entry and leaves the instance alone.
    pub async fn create(&self, checkout: &EquipmentCheckout) -> AppResult<EquipmentCheckout> {
        let mut tables = self.store.write();

        let item = tables
            .equipment
            .get_mut(&checkout.equipment_id)
            .ok_or(AppError::EquipmentNotFound(checkout.equipment_id))?;
        if item.is_checked_out {
            return Err(AppError::AlreadyCheckedOut(checkout.equipment_id));
        }

        if checkout.is_active {
            item.is_checked_out = true;
        }
        tables.checkouts.push(checkout.clone());
        Ok(checkout.clone())
    }

    /// Return an active checkout: release the item and close the record.
    ///
    /// The stored record is matched against the input's still-true active
    /// flag before anything is flipped; matching after the flip would never
    /// find it. Every lookup runs before the first mutation so a failure
    /// leaves both tables untouched.
    pub async fn return_checkout(
        &self,
        checkout: &EquipmentCheckout,
    ) -> AppResult<EquipmentCheckout> {
        if !checkout.is_active {
            return Err(AppError::NotActive(checkout.equipment_id));
        }

        let mut tables = self.store.write();

        let position = tables
            .checkouts
            .iter()
            .position(|c| c.equipment_id == checkout.equipment_id && c.is_active == checkout.is_active)
            .ok_or(AppError::CheckoutNotFound(checkout.equipment_id))?;

        // started_at is the record's identity; a disagreeing input is some
        // other checkout and must not close this one
        if tables.checkouts[position].started_at != checkout.started_at {
            return Err(AppError::IdentityMismatch(format!(
                "checkout start time does not match the stored record for equipment {}",
                checkout.equipment_id
            )));
        }

        let holder = tables.checkouts[position].pid;
        let item = tables
            .equipment
            .get_mut(&checkout.equipment_id)
            .ok_or(AppError::EquipmentNotFound(checkout.equipment_id))?;
        item.is_checked_out = false;
        item.checkout_history.push(holder);

        let stored = &mut tables.checkouts[position];
        stored.is_active = false;
        stored.end_at = Utc::now();
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Equipment;
    use crate::repository::Repository;

    fn quest(id: i32) -> Equipment {
        Equipment {
            equipment_id: id,
            model: "Meta Quest 3".to_string(),
            equipment_image: "placeholder".to_string(),
            condition: 10,
            is_checked_out: false,
            condition_notes: vec![],
            checkout_history: vec![],
        }
    }

    fn checkout(equipment_id: i32, pid: i32) -> EquipmentCheckout {
        let now = Utc::now();
        EquipmentCheckout {
            user_name: "Sally Student".to_string(),
            pid,
            equipment_id,
            model: "Meta Quest 3".to_string(),
            is_active: true,
            started_at: now,
            end_at: now,
        }
    }

    #[tokio::test]
    async fn create_claims_the_item() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();

        repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();

        assert!(repo.inventory.get_by_id(1).await.unwrap().is_checked_out);
        assert_eq!(repo.checkouts.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_on_checked_out_item_fails_and_changes_nothing() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();
        repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();

        let err = repo.checkouts.create(&checkout(1, 999999999)).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyCheckedOut(1)));
        assert_eq!(repo.checkouts.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_on_unknown_equipment_fails() {
        let repo = Repository::new(Store::new());
        let err = repo.checkouts.create(&checkout(42, 111111111)).await.unwrap_err();
        assert!(matches!(err, AppError::EquipmentNotFound(42)));
        assert!(repo.checkouts.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn inactive_historical_record_leaves_item_available() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();

        let mut historical = checkout(1, 111111111);
        historical.is_active = false;
        repo.checkouts.create(&historical).await.unwrap();

        assert!(!repo.inventory.get_by_id(1).await.unwrap().is_checked_out);
        assert!(repo.checkouts.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn return_round_trip() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();
        let created = repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();

        let returned = repo.checkouts.return_checkout(&created).await.unwrap();

        assert!(!returned.is_active);
        assert!(returned.end_at > returned.started_at);
        let item = repo.inventory.get_by_id(1).await.unwrap();
        assert!(!item.is_checked_out);
        assert_eq!(item.checkout_history, vec![111111111]);
        assert!(repo.checkouts.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn item_can_be_checked_out_again_after_return() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();
        let first = repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();
        repo.checkouts.return_checkout(&first).await.unwrap();

        repo.checkouts.create(&checkout(1, 999999999)).await.unwrap();

        // only the new checkout is active for this item
        let active = repo.checkouts.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].pid, 999999999);
    }

    #[tokio::test]
    async fn returning_an_inactive_input_fails_without_mutation() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();
        let created = repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();

        let mut inactive = created.clone();
        inactive.is_active = false;
        let err = repo.checkouts.return_checkout(&inactive).await.unwrap_err();

        assert!(matches!(err, AppError::NotActive(1)));
        assert!(repo.inventory.get_by_id(1).await.unwrap().is_checked_out);
        assert_eq!(repo.checkouts.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn returning_without_active_record_is_not_found() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();

        let err = repo.checkouts.return_checkout(&checkout(1, 111111111)).await.unwrap_err();
        assert!(matches!(err, AppError::CheckoutNotFound(1)));
        assert!(!repo.inventory.get_by_id(1).await.unwrap().is_checked_out);
    }

    #[tokio::test]
    async fn return_with_wrong_start_time_is_identity_mismatch() {
        let repo = Repository::new(Store::new());
        repo.inventory.create(&quest(1)).await.unwrap();
        let created = repo.checkouts.create(&checkout(1, 111111111)).await.unwrap();

        let mut forged = created.clone();
        forged.started_at = created.started_at + chrono::Duration::seconds(1);
        let err = repo.checkouts.return_checkout(&forged).await.unwrap_err();

        assert!(matches!(err, AppError::IdentityMismatch(_)));
        // still checked out, record still active
        assert!(repo.inventory.get_by_id(1).await.unwrap().is_checked_out);
        assert_eq!(repo.checkouts.list_active().await.unwrap().len(), 1);
    }
}
