//! Checkouts service
//!
//! Checkout lifecycle over the checkouts repository, which couples each
//! transition with the claimed item's availability flag.

use crate::{error::AppResult, models::EquipmentCheckout, repository::Repository};

#[derive(Clone)]
pub struct CheckoutsService {
    repository: Repository,
}

impl CheckoutsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All currently active checkouts
    pub async fn get_all_active(&self) -> AppResult<Vec<EquipmentCheckout>> {
        self.repository.checkouts.list_active().await
    }

    /// Hand an item to a user
    pub async fn create_checkout(
        &self,
        checkout: &EquipmentCheckout,
    ) -> AppResult<EquipmentCheckout> {
        let created = self.repository.checkouts.create(checkout).await?;
        tracing::info!(
            equipment_id = created.equipment_id,
            pid = created.pid,
            model = %created.model,
            "equipment checked out"
        );
        Ok(created)
    }

    /// Take an item back and close its checkout record
    pub async fn return_checkout(
        &self,
        checkout: &EquipmentCheckout,
    ) -> AppResult<EquipmentCheckout> {
        let returned = self.repository.checkouts.return_checkout(checkout).await?;
        tracing::info!(
            equipment_id = returned.equipment_id,
            pid = returned.pid,
            "equipment returned"
        );
        Ok(returned)
    }
}
