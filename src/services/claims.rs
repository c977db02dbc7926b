//! Claims service
//!
//! Front door for checkout requests and staged requests. Enforces the
//! waiver precondition and the one-claim-per-(user, model) rule; the latter
//! is checked and committed atomically by the requests repository.

use crate::{
    error::{AppError, AppResult},
    models::{CheckoutRequest, StagedCheckoutRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClaimsService {
    repository: Repository,
}

impl ClaimsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Submit a checkout request on behalf of a user.
    ///
    /// The user must have signed the liability waiver and must not already
    /// hold a request, a staged request or an active checkout for the model.
    pub async fn add_request(
        &self,
        request: &CheckoutRequest,
        waiver_signed: bool,
    ) -> AppResult<CheckoutRequest> {
        if !waiver_signed {
            return Err(AppError::WaiverNotSigned);
        }

        let created = self.repository.requests.create(request).await?;
        tracing::info!(model = %created.model, pid = created.pid, "checkout request submitted");
        Ok(created)
    }

    /// Delete a pending checkout request
    pub async fn delete_request(&self, model: &str, pid: i32) -> AppResult<()> {
        self.repository.requests.delete(model, pid).await?;
        tracing::info!(model, pid, "checkout request deleted");
        Ok(())
    }

    /// All pending checkout requests in submission order
    pub async fn get_all_requests(&self) -> AppResult<Vec<CheckoutRequest>> {
        self.repository.requests.list().await
    }

    /// Stage a request for pickup, snapshotting the available instance ids
    pub async fn create_staged_request(
        &self,
        staged: &StagedCheckoutRequest,
    ) -> AppResult<StagedCheckoutRequest> {
        let created = self.repository.requests.create_staged(staged).await?;
        tracing::info!(
            model = %created.model,
            pid = created.pid,
            choices = created.id_choices.len(),
            "checkout request staged"
        );
        Ok(created)
    }

    /// Delete a staged request
    pub async fn delete_staged_request(&self, model: &str, pid: i32) -> AppResult<()> {
        self.repository.requests.delete_staged(model, pid).await?;
        tracing::info!(model, pid, "staged request deleted");
        Ok(())
    }

    /// All staged requests in staging order
    pub async fn get_all_staged_requests(&self) -> AppResult<Vec<StagedCheckoutRequest>> {
        self.repository.requests.list_staged().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Store;

    fn request(model: &str, pid: i32) -> CheckoutRequest {
        CheckoutRequest {
            user_name: "Sally Student".to_string(),
            model: model.to_string(),
            pid,
        }
    }

    #[tokio::test]
    async fn unsigned_waiver_blocks_request() {
        let service = ClaimsService::new(Repository::new(Store::new()));

        let err = service
            .add_request(&request("Meta Quest 3", 111111111), false)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::WaiverNotSigned));
        assert!(service.get_all_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn signed_waiver_admits_request() {
        let service = ClaimsService::new(Repository::new(Store::new()));

        let created = service
            .add_request(&request("Meta Quest 3", 111111111), true)
            .await
            .unwrap();

        assert_eq!(created.model, "Meta Quest 3");
        assert_eq!(service.get_all_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_request_is_rejected() {
        let service = ClaimsService::new(Repository::new(Store::new()));
        service.add_request(&request("Meta Quest 3", 111111111), true).await.unwrap();

        let err = service
            .add_request(&request("Meta Quest 3", 111111111), true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateClaim(_)));
    }
}
