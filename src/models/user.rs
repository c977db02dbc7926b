//! User model

use serde::{Deserialize, Serialize};

/// A registered user as the directory stores it.
///
/// The engine itself only ever reads `pid` and `signed_waiver`; the rest of
/// the record rides along for the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>,
    pub pid: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub pronouns: String,
    /// Whether the user has signed the liability waiver
    #[serde(default)]
    pub signed_waiver: bool,
}
