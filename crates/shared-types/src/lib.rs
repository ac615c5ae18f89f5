pub mod common;
pub mod config;
pub mod error;
pub mod validation;

// Portal domain modules
pub mod case;
pub mod report;
pub mod session;

pub use common::*;
pub use config::*;
pub use error::*;
pub use validation::*;

pub use case::*;
pub use report::*;
pub use session::*;
