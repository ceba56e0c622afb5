//! Line-oriented menu front end for the catalog

pub mod config;
pub mod menu;
pub mod session;

pub use config::SessionConfig;
pub use menu::{InvalidChoice, MenuChoice};
pub use session::Session;
