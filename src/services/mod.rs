//! Business logic services

pub mod checkouts;
pub mod claims;
pub mod directory;
pub mod inventory;
pub mod permission;
pub mod reservations;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub claims: claims::ClaimsService,
    pub checkouts: checkouts::CheckoutsService,
    pub reservations: reservations::ReservationService,
}

impl Services {
    /// Create all services with the given repository and external seams
    pub fn new(
        repository: Repository,
        gate: Arc<dyn permission::PermissionGate>,
        directory: Arc<dyn directory::UserDirectory>,
    ) -> Self {
        let inventory = inventory::InventoryService::new(repository.clone());
        let claims = claims::ClaimsService::new(repository.clone());
        let checkouts = checkouts::CheckoutsService::new(repository);
        let reservations = reservations::ReservationService::new(
            inventory.clone(),
            claims.clone(),
            checkouts.clone(),
            gate,
            directory,
        );
        Self {
            inventory,
            claims,
            checkouts,
            reservations,
        }
    }
}
