//! Headless client for the BuildWise construction planner page.
//!
//! The page is modelled as an in-memory element store (`ui::page`). Handlers
//! in `ui`, `report` and the HTTP clients in `client` act on it the same way
//! the browser script acts on the DOM.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod logging;
pub mod render;
pub mod report;
pub mod ui;

pub use app::AppState;
pub use error::{ClientError, ClientResult};
