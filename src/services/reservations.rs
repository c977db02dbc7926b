//! Reservation engine façade
//!
//! The one surface external callers drive. Every mutating operation runs
//! the permission gate before any state change; ambassador-facing listings
//! run the view gate; plain inventory reads are unrestricted. Failures from
//! the gate surface as `PermissionDenied` with the tables untouched.

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::AppResult,
    models::{CheckoutRequest, Equipment, EquipmentCheckout, EquipmentType, StagedCheckoutRequest, User},
};

use super::{
    checkouts::CheckoutsService,
    claims::ClaimsService,
    directory::UserDirectory,
    inventory::InventoryService,
    permission::{PermissionGate, CHECKOUT_CRUD, CHECKOUT_VIEW, EQUIPMENT_RESOURCE},
};

#[derive(Clone)]
pub struct ReservationService {
    inventory: InventoryService,
    claims: ClaimsService,
    checkouts: CheckoutsService,
    gate: Arc<dyn PermissionGate>,
    directory: Arc<dyn UserDirectory>,
}

impl ReservationService {
    pub fn new(
        inventory: InventoryService,
        claims: ClaimsService,
        checkouts: CheckoutsService,
        gate: Arc<dyn PermissionGate>,
        directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            inventory,
            claims,
            checkouts,
            gate,
            directory,
        }
    }

    async fn enforce(&self, subject: &User, action: &str) -> AppResult<()> {
        self.gate.enforce(subject, action, EQUIPMENT_RESOURCE).await
    }

    /// List the whole equipment pool. Unrestricted.
    pub async fn get_all(&self) -> AppResult<Vec<Equipment>> {
        self.inventory.get_all().await
    }

    /// Per-model availability summary. Unrestricted.
    pub async fn get_all_types(&self) -> AppResult<Vec<EquipmentType>> {
        self.inventory.get_all_types().await
    }

    /// Look one item up by id. Ambassador view.
    pub async fn get_equipment_by_id(&self, subject: &User, id: i32) -> AppResult<Equipment> {
        self.enforce(subject, CHECKOUT_VIEW).await?;
        self.inventory.get_by_id(id).await
    }

    /// Administrative update of one item
    pub async fn update(&self, subject: &User, id: i32, item: &Equipment) -> AppResult<Equipment> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        item.validate()?;
        self.inventory.update(id, item).await
    }

    /// Submit a checkout request for the calling user
    pub async fn add_request(
        &self,
        subject: &User,
        request: &CheckoutRequest,
    ) -> AppResult<CheckoutRequest> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        request.validate()?;
        self.claims.add_request(request, subject.signed_waiver).await
    }

    /// Delete a pending checkout request
    pub async fn delete_request(&self, subject: &User, request: &CheckoutRequest) -> AppResult<()> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        self.claims.delete_request(&request.model, request.pid).await
    }

    /// All pending checkout requests. Ambassador view.
    pub async fn get_all_requests(&self, subject: &User) -> AppResult<Vec<CheckoutRequest>> {
        self.enforce(subject, CHECKOUT_VIEW).await?;
        self.claims.get_all_requests().await
    }

    /// Available items matching a request's model. Unrestricted read.
    pub async fn get_equipment_for_request(&self, model: &str) -> AppResult<Vec<Equipment>> {
        self.inventory.get_equipment_for_request(model).await
    }

    /// Mark the calling user's liability waiver as signed
    pub async fn update_waiver_field(&self, subject: &User) -> AppResult<User> {
        let mut user = self.directory.get_by_pid(subject.pid).await?;
        user.signed_waiver = true;
        let updated = self.directory.update(&user).await?;
        tracing::info!(pid = updated.pid, "liability waiver signed");
        Ok(updated)
    }

    /// All staged requests. Ambassador view.
    pub async fn get_all_staged_requests(
        &self,
        subject: &User,
    ) -> AppResult<Vec<StagedCheckoutRequest>> {
        self.enforce(subject, CHECKOUT_VIEW).await?;
        self.claims.get_all_staged_requests().await
    }

    /// Stage a request for pickup
    pub async fn create_staged_request(
        &self,
        subject: &User,
        staged: &StagedCheckoutRequest,
    ) -> AppResult<StagedCheckoutRequest> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        staged.validate()?;
        self.claims.create_staged_request(staged).await
    }

    /// Delete a staged request
    pub async fn delete_staged_request(
        &self,
        subject: &User,
        staged: &StagedCheckoutRequest,
    ) -> AppResult<()> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        self.claims.delete_staged_request(&staged.model, staged.pid).await
    }

    /// All active checkouts. Ambassador view.
    pub async fn get_all_active_checkouts(
        &self,
        subject: &User,
    ) -> AppResult<Vec<EquipmentCheckout>> {
        self.enforce(subject, CHECKOUT_VIEW).await?;
        self.checkouts.get_all_active().await
    }

    /// Hand an item to a user
    pub async fn create_checkout(
        &self,
        subject: &User,
        checkout: &EquipmentCheckout,
    ) -> AppResult<EquipmentCheckout> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        checkout.validate()?;
        self.checkouts.create_checkout(checkout).await
    }

    /// Take an item back
    pub async fn return_checkout(
        &self,
        subject: &User,
        checkout: &EquipmentCheckout,
    ) -> AppResult<EquipmentCheckout> {
        self.enforce(subject, CHECKOUT_CRUD).await?;
        self.checkouts.return_checkout(checkout).await
    }
}
