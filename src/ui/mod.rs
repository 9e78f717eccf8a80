//! Page handlers.
//!
//! Each handler corresponds to one user action on the BuildWise page.

pub mod auth_modal;
pub mod ids;
pub mod page;
pub mod submit;
pub mod view;

pub use page::{Display, Element, Fragment, Page, SharedPage};
pub use view::View;
