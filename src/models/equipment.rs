//! Equipment model and derived availability view

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_condition() -> i32 {
    10
}

/// A single physical equipment item in the shared pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Equipment {
    /// Unique per item, immutable once provisioned
    pub equipment_id: i32,
    /// Name of the model of the item ex. Meta Quest 3
    #[validate(length(min = 1, max = 64, message = "Model name must be 1-64 characters"))]
    pub model: String,
    /// Image to represent the item
    pub equipment_image: String,
    /// Condition score of the item
    #[serde(default = "default_condition")]
    pub condition: i32,
    /// Whether the item is currently checked out
    #[serde(default)]
    pub is_checked_out: bool,
    /// Notes on how the condition of the item has changed throughout checkouts
    #[serde(default)]
    pub condition_notes: Vec<String>,
    /// PIDs of the holders this item has been through
    #[serde(default)]
    pub checkout_history: Vec<i32>,
}

/// Per-model availability summary, derived from the equipment pool.
///
/// Never stored; rebuilt on demand by `InventoryService::get_all_types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub model: String,
    pub num_available: i32,
    /// Field name kept as the frontend consumes it
    #[serde(rename = "equipment_img_URL")]
    pub equipment_img_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_type_keeps_the_frontend_field_name() {
        let summary = EquipmentType {
            model: "Meta Quest 3".to_string(),
            num_available: 1,
            equipment_img_url: "quest.png".to_string(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["equipment_img_URL"], "quest.png");
    }

    #[test]
    fn equipment_defaults_apply_on_deserialize() {
        let item: Equipment = serde_json::from_str(
            r#"{"equipment_id": 1, "model": "Arduino Uno", "equipment_image": "arduino.png"}"#,
        )
        .unwrap();
        assert_eq!(item.condition, 10);
        assert!(!item.is_checked_out);
        assert!(item.condition_notes.is_empty());
        assert!(item.checkout_history.is_empty());
    }
}
