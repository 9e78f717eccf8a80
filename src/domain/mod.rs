//! Domain types and DTOs
//!
//! Request/response shapes for the estimate API and the login endpoint.

pub mod auth;
pub mod estimate;
pub mod request;

pub use auth::{AuthMode, LoginForm, LoginOutcome};
pub use estimate::{Estimate, RawEstimate, Scalar};
pub use request::{EstimateForm, EstimateRequest};
