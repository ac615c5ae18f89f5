//! REST client, session storage and screen actions for the doctor portal.

pub mod actions;
pub mod api;
pub mod config;
pub mod session;

pub use actions::{ActionOutcome, Redirect};
pub use api::{HttpPortalApi, PortalApi};
pub use session::{KeyValueStore, MemoryStore, SessionStore};
