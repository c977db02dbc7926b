//! Inventory service
//!
//! Owns the equipment pool view: listings, administrative updates and the
//! per-model availability summary the reservation flow is driven by.

use indexmap::IndexMap;

use crate::{
    error::AppResult,
    models::{Equipment, EquipmentType},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All equipment in the pool
    pub async fn get_all(&self) -> AppResult<Vec<Equipment>> {
        self.repository.inventory.list().await
    }

    /// One equipment item by id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.inventory.get_by_id(id).await
    }

    /// Replace the stored item under `id`
    pub async fn update(&self, id: i32, item: &Equipment) -> AppResult<Equipment> {
        let updated = self.repository.inventory.update(id, item).await?;
        tracing::debug!(equipment_id = id, "equipment record updated");
        Ok(updated)
    }

    /// Provision a new item into the pool
    pub async fn create(&self, item: &Equipment) -> AppResult<Equipment> {
        let created = self.repository.inventory.create(item).await?;
        tracing::info!(equipment_id = created.equipment_id, model = %created.model, "equipment provisioned");
        Ok(created)
    }

    /// Available items of one model, for offering choices to a request
    pub async fn get_equipment_for_request(&self, model: &str) -> AppResult<Vec<Equipment>> {
        self.repository.inventory.list_available_by_model(model).await
    }

    /// Summarize the pool per model.
    ///
    /// Single pass in pool order: the first instance of a model seen opens
    /// its entry and donates the image, every later available instance of
    /// that model bumps the count. Checked-out instances never count.
    pub async fn get_all_types(&self) -> AppResult<Vec<EquipmentType>> {
        let all_equipment = self.repository.inventory.list().await?;

        let mut types: IndexMap<String, EquipmentType> = IndexMap::new();
        for item in all_equipment {
            match types.get_mut(&item.model) {
                Some(entry) => {
                    if !item.is_checked_out {
                        entry.num_available += 1;
                    }
                }
                None => {
                    types.insert(
                        item.model.clone(),
                        EquipmentType {
                            model: item.model.clone(),
                            num_available: if item.is_checked_out { 0 } else { 1 },
                            equipment_img_url: item.equipment_image.clone(),
                        },
                    );
                }
            }
        }

        Ok(types.into_values().collect())
    }
}
