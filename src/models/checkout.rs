//! Equipment checkout model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// An equipment checkout, active while the item is out and kept as history
/// once returned.
///
/// `started_at` never changes after creation; together with `equipment_id`
/// and the active flag it identifies the record for later lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EquipmentCheckout {
    #[validate(length(min = 1, max = 64, message = "User name must be 1-64 characters"))]
    pub user_name: String,
    pub pid: i32,
    pub equipment_id: i32,
    #[validate(length(min = 1, max = 64, message = "Model name must be 1-64 characters"))]
    pub model: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub started_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}
