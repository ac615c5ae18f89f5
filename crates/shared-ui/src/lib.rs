//! Component kit for the doctor portal screens.

pub mod components;

pub use components::*;
