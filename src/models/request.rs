//! Checkout request and staged request models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's pending request to check out one item of a model.
///
/// Identified by `(model, pid)`; a user holds at most one claim per model
/// across requests, staged requests and active checkouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: String,
    #[validate(length(min = 1, max = 64, message = "Model name must be 1-64 characters"))]
    pub model: String,
    pub pid: i32,
}

/// A request an ambassador has staged for pickup.
///
/// `id_choices` is a snapshot of the instances available for the model at
/// staging time, not a live view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StagedCheckoutRequest {
    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: String,
    #[validate(length(min = 1, max = 64, message = "Model name must be 1-64 characters"))]
    pub model: String,
    #[serde(default)]
    pub id_choices: Vec<i32>,
    pub pid: i32,
}
