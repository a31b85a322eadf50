//! DTO shared between the admin console and the REST layer.

pub mod domain;
pub mod shared;
pub mod system;
