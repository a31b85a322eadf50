pub mod auth;
pub mod menus;
pub mod roles;
pub mod users;
