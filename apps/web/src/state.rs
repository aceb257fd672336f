//! Shared application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::session::Session;
use drill_core::{Card, CardStore};

/// Everything the handlers share: the store handle, the in-memory deck,
/// and the per-browser quiz sessions.
#[derive(Clone)]
pub struct AppState {
    store: Arc<CardStore>,
    deck: Arc<Mutex<Vec<Card>>>,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new(store: CardStore, deck: Vec<Card>) -> Self {
        Self {
            store: Arc::new(store),
            deck: Arc::new(Mutex::new(deck)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn deck(&self) -> MutexGuard<'_, Vec<Card>> {
        self.deck.lock().expect("deck mutex poisoned")
    }

    pub fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().expect("session mutex poisoned")
    }
}
