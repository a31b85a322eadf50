use std::collections::HashSet;

use super::tree::{MenuAction, MenuTree};

/// Expand/collapse state of the sidebar entries.
///
/// User toggles persist until the route changes; a route change force-expands
/// every entry whose subtree holds the new route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    /// Applies the expansion part of a sidebar click and hands back the link
    /// to navigate to, if any
    pub fn apply(&mut self, action: MenuAction) -> Option<String> {
        match action {
            MenuAction::Navigate(link) => Some(link),
            MenuAction::Toggle(id) => {
                self.toggle(&id);
                None
            }
            MenuAction::NavigateAndExpand { link, expand } => {
                self.expand(&expand);
                Some(link)
            }
        }
    }

    pub fn sync_route(&mut self, tree: &MenuTree, route: &str) {
        for id in tree.active_path(route) {
            self.expanded.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::menus::snapshot::tests::node;
    use crate::system::menus::snapshot::MenuSnapshot;
    use crate::system::menus::tree::resolve_click;
    use contracts::system::roles::Role;

    #[test]
    fn test_route_forces_ancestors_open() {
        let snapshot = MenuSnapshot::new(vec![
            node("A", None, 0),
            node("B", Some("A"), 0),
            node("C", Some("B"), 0),
            node("D", None, 1),
            node("E", Some("D"), 0),
        ]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);
        let mut state = ExpansionState::default();
        state.toggle("D");

        state.sync_route(&tree, "/c");
        assert!(state.is_expanded("A"));
        assert!(state.is_expanded("B"));
        // untouched by the route: keeps the user's choice
        assert!(state.is_expanded("D"));

        state.toggle("A");
        assert!(!state.is_expanded("A"));
        state.sync_route(&tree, "/c");
        assert!(state.is_expanded("A"));
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut state = ExpansionState::default();
        state.toggle("X");
        state.toggle("X");
        assert!(!state.is_expanded("X"));
        state.expand("X");
        state.expand("X");
        assert!(state.is_expanded("X"));
    }

    #[test]
    fn test_linked_parent_collapses_through_chevron() {
        let mut users = node("Users", None, 0);
        users.link = "/users".into();
        let snapshot = MenuSnapshot::new(vec![users, node("Roles", Some("Users"), 0), node("Home", None, 1)]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);
        let mut state = ExpansionState::default();

        for _ in 0..3 {
            let action = resolve_click(&tree, "Users").unwrap();
            assert_eq!(state.apply(action), Some("/users".to_string()));
            assert!(state.is_expanded("Users"));
        }

        state.toggle("Users");
        assert!(!state.is_expanded("Users"));

        // leaving for a route outside the subtree keeps the collapse
        state.sync_route(&tree, "/home");
        assert!(!state.is_expanded("Users"));
    }

    #[test]
    fn test_apply_toggle_has_no_link() {
        let mut state = ExpansionState::default();
        assert_eq!(state.apply(MenuAction::Toggle("G".into())), None);
        assert!(state.is_expanded("G"));
        assert_eq!(state.apply(MenuAction::Navigate("/x".into())), Some("/x".to_string()));
        assert!(state.is_expanded("G"));
    }
}
