//! Repository layer over the shared keyed store
//!
//! All records live in one table set behind a single `RwLock`. Each
//! repository method takes the lock exactly once and performs its whole
//! check-then-act sequence under that guard, so every mutating call behaves
//! as one storage transaction: concurrent callers touching the same
//! `(model, pid)` pair or the same `equipment_id` serialize on the lock, and
//! a failed call leaves the tables untouched.

pub mod checkouts;
pub mod inventory;
pub mod requests;
pub mod users;

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::models::{CheckoutRequest, Equipment, EquipmentCheckout, StagedCheckoutRequest, User};

/// Key for request-shaped records: one claim per user and model.
pub(crate) type ClaimKey = (String, i32);

/// The full table set. Insertion order of every map is observable through
/// the listing operations, hence `IndexMap` rather than `HashMap`.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub equipment: IndexMap<i32, Equipment>,
    pub requests: IndexMap<ClaimKey, CheckoutRequest>,
    pub staged_requests: IndexMap<ClaimKey, StagedCheckoutRequest>,
    pub checkouts: Vec<EquipmentCheckout>,
    pub users: IndexMap<i32, User>,
}

/// Shared handle to the in-memory table set.
///
/// Durable persistence stays behind this boundary; any keyed store that can
/// load and flush the table set can back it.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> parking_lot::RwLockReadGuard<'_, Tables> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> parking_lot::RwLockWriteGuard<'_, Tables> {
        self.inner.write()
    }
}

/// Main repository struct holding the shared store
#[derive(Clone)]
pub struct Repository {
    pub store: Store,
    pub inventory: inventory::InventoryRepository,
    pub requests: requests::RequestsRepository,
    pub checkouts: checkouts::CheckoutsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given store
    pub fn new(store: Store) -> Self {
        Self {
            inventory: inventory::InventoryRepository::new(store.clone()),
            requests: requests::RequestsRepository::new(store.clone()),
            checkouts: checkouts::CheckoutsRepository::new(store.clone()),
            users: users::UsersRepository::new(store.clone()),
            store,
        }
    }
}
