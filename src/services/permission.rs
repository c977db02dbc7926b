//! Permission gate seam

use async_trait::async_trait;

use crate::{error::AppResult, models::User};

/// Action name for mutating equipment operations
pub const CHECKOUT_CRUD: &str = "equipment.crud.checkout";
/// Action name for ambassador-restricted listings
pub const CHECKOUT_VIEW: &str = "equipment.view.checkout";
/// Resource name every equipment action is checked against
pub const EQUIPMENT_RESOURCE: &str = "equipment";

/// Decides whether a subject may perform an action on a resource.
///
/// Evaluation lives outside the engine; the engine only ever calls
/// `enforce` before touching state and propagates a denial as
/// `AppError::PermissionDenied`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionGate: Send + Sync {
    async fn enforce(&self, subject: &User, action: &str, resource: &str) -> AppResult<()>;
}

/// Gate that grants every action.
///
/// For embeddings that authorize upstream of the engine, and for tests that
/// are not about permissions.
pub struct PermissiveGate;

#[async_trait]
impl PermissionGate for PermissiveGate {
    async fn enforce(&self, _subject: &User, _action: &str, _resource: &str) -> AppResult<()> {
        Ok(())
    }
}
