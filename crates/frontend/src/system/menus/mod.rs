//! Role-scoped dynamic menu: per-role snapshots, tree resolution, sidebar
//! expansion and click handling.

pub mod api;
pub mod context;
pub mod expansion;
pub mod snapshot;
pub mod store;
pub mod tree;
pub mod ui;

pub use context::{use_menus, MenuContext};
pub use expansion::ExpansionState;
pub use tree::{resolve_click, MenuAction, MenuTree, MenuTreeNode};
