//! Reusable view components: page chrome and the route guard.

pub mod layout;
pub mod navbar;
pub mod protected;
