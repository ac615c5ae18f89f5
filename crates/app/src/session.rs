use client::SessionStore;
use dioxus::prelude::*;
use shared_types::Session;

/// Signed-in doctor, mirrored from the session store.
///
/// The store stays the source of truth: the route guard reads it directly,
/// the signal only feeds the dashboard header.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
    pub store: SessionStore,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        let current = Signal::new(store.read_doctor());
        Self { current, store }
    }

    /// Drop the in-memory copy after the store was cleared.
    pub fn forget(&mut self) {
        self.current.set(None);
    }

    pub fn sign_out(&mut self) {
        client::actions::sign_out(&self.store);
        self.forget();
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
