//! Equipment inventory repository

use crate::{
    error::{AppError, AppResult},
    models::Equipment,
};

use super::Store;

#[derive(Clone)]
pub struct InventoryRepository {
    store: Store,
}

impl InventoryRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all equipment in provisioning order
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        Ok(self.store.read().equipment.values().cloned().collect())
    }

    /// Get an equipment item by its equipment id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.store
            .read()
            .equipment
            .get(&id)
            .cloned()
            .ok_or(AppError::EquipmentNotFound(id))
    }

    /// Provision a new equipment item.
    ///
    /// `equipment_id` must be unused; the id stays unique across the pool.
    pub async fn create(&self, item: &Equipment) -> AppResult<Equipment> {
        let mut tables = self.store.write();
        if tables.equipment.contains_key(&item.equipment_id) {
            return Err(AppError::Conflict(format!(
                "Equipment item with id {} already exists",
                item.equipment_id
            )));
        }
        tables.equipment.insert(item.equipment_id, item.clone());
        Ok(item.clone())
    }

    /// Replace the item stored under `id` with `item`.
    ///
    /// The equipment id is the record's identity and cannot be rewritten
    /// through an update.
    pub async fn update(&self, id: i32, item: &Equipment) -> AppResult<Equipment> {
        if item.equipment_id != id {
            return Err(AppError::IdentityMismatch(format!(
                "cannot change equipment_id from {} to {}",
                id, item.equipment_id
            )));
        }
        let mut tables = self.store.write();
        match tables.equipment.get_mut(&id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(stored.clone())
            }
            None => Err(AppError::EquipmentNotFound(id)),
        }
    }

    /// All items of the given model that are not checked out
    pub async fn list_available_by_model(&self, model: &str) -> AppResult<Vec<Equipment>> {
        Ok(self
            .store
            .read()
            .equipment
            .values()
            .filter(|item| item.model == model && !item.is_checked_out)
            .cloned()
            .collect())
    }
}
