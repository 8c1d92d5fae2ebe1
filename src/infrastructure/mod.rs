//! Infrastructure layer - concrete collaborators and ambient setup

pub mod auth;
pub mod logging;
pub mod user;
