use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Fixed key under which the chat session identifier is stored.
pub const SESSION_KEY: &str = "chat_session_id";

/// Client-local, session-lifetime key-value slot.
///
/// Injected so the identity logic runs against any storage scope; the
/// lifetime of an implementation's data defines the session scope.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store. Data lives for the lifetime of the process and is
/// not shared across instances.
#[derive(Default)]
pub struct MemorySessionStore {
    slots: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .expect("session store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .expect("session store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

/// Conversation identity correlating chat turns with the upstream
/// assistant. The identifier is owned here and merely passed along; all
/// conversation state keyed by it lives upstream.
#[derive(Clone)]
pub struct SessionIdentity {
    store: Arc<dyn SessionStore>,
}

impl SessionIdentity {
    /// Attaching a storage scope is an explicit step; there is no
    /// identity without one.
    pub fn attach(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Raw slot value. `None` until the first `get_or_create`.
    pub fn current(&self) -> Option<String> {
        self.store.get(SESSION_KEY)
    }

    /// Returns the stored identifier, generating and storing one first if
    /// the slot is empty. Stable across calls until a reset.
    pub fn get_or_create(&self) -> String {
        if let Some(id) = self.store.get(SESSION_KEY) {
            return id;
        }
        let id = Uuid::new_v4().to_string();
        self.store.set(SESSION_KEY, &id);
        id
    }

    /// Unconditionally mints a new identifier and overwrites the slot.
    /// The upstream treats the next chat turn as a fresh conversation;
    /// correlation with the prior identifier is gone.
    pub fn reset(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.store.set(SESSION_KEY, &id);
        id
    }
}
