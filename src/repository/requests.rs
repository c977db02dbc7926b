//! Checkout request and staged request repository

use crate::{
    error::{AppError, AppResult},
    models::{CheckoutRequest, StagedCheckoutRequest},
};

use super::Store;

#[derive(Clone)]
pub struct RequestsRepository {
    store: Store,
}

impl RequestsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Insert a checkout request unless the user already holds a claim on
    /// the model.
    ///
    /// The claim check spans all three record kinds (pending requests,
    /// staged requests, active checkouts) and runs under the same write
    /// guard as the insert, so two racing callers cannot both pass it.
    pub async fn create(&self, request: &CheckoutRequest) -> AppResult<CheckoutRequest> {
        let mut tables = self.store.write();
        let key = (request.model.clone(), request.pid);

        let prior_request = tables.requests.contains_key(&key);
        let prior_staged = tables.staged_requests.contains_key(&key);
        let prior_checkout = tables
            .checkouts
            .iter()
            .any(|c| c.is_active && c.model == request.model && c.pid == request.pid);

        if prior_request || prior_staged || prior_checkout {
            return Err(AppError::DuplicateClaim(request.model.clone()));
        }

        tables.requests.insert(key, request.clone());
        Ok(request.clone())
    }

    /// Delete the checkout request identified by `(model, pid)`
    pub async fn delete(&self, model: &str, pid: i32) -> AppResult<()> {
        let mut tables = self.store.write();
        match tables.requests.shift_remove(&(model.to_string(), pid)) {
            Some(_) => Ok(()),
            None => Err(AppError::RequestNotFound {
                model: model.to_string(),
                pid,
            }),
        }
    }

    /// All pending checkout requests in submission order
    pub async fn list(&self) -> AppResult<Vec<CheckoutRequest>> {
        Ok(self.store.read().requests.values().cloned().collect())
    }

    /// Stage a request, snapshotting the ids currently available for its
    /// model.
    ///
    /// Whatever `id_choices` the caller supplied is discarded: the snapshot
    /// is taken from the equipment table under the same guard as the insert,
    /// so it reflects availability at staging time exactly.
    pub async fn create_staged(
        &self,
        staged: &StagedCheckoutRequest,
    ) -> AppResult<StagedCheckoutRequest> {
        let mut tables = self.store.write();

        let id_choices: Vec<i32> = tables
            .equipment
            .values()
            .filter(|item| item.model == staged.model && !item.is_checked_out)
            .map(|item| item.equipment_id)
            .collect();

        let staged = StagedCheckoutRequest {
            id_choices,
            ..staged.clone()
        };
        tables
            .staged_requests
            .insert((staged.model.clone(), staged.pid), staged.clone());
        Ok(staged)
    }

    /// Delete the staged request identified by `(model, pid)`
    pub async fn delete_staged(&self, model: &str, pid: i32) -> AppResult<()> {
        let mut tables = self.store.write();
        match tables.staged_requests.shift_remove(&(model.to_string(), pid)) {
            Some(_) => Ok(()),
            None => Err(AppError::StagedRequestNotFound {
                model: model.to_string(),
                pid,
            }),
        }
    }

    /// All staged requests in staging order
    pub async fn list_staged(&self) -> AppResult<Vec<StagedCheckoutRequest>> {
        Ok(self.store.read().staged_requests.values().cloned().collect())
    }
}
