pub mod auth;
pub mod menus;
pub mod users;
