use contracts::system::menus::MenuNode;
use contracts::system::roles::Role;

use super::snapshot::MenuSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuTreeNode {
    pub node: MenuNode,
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The node's own link is the route, or one of its descendants' is
    pub fn is_active(&self, route: &str) -> bool {
        (self.node.has_real_link() && self.node.link == route)
            || self.children.iter().any(|c| c.is_active(route))
    }

    fn find(&self, id: &str) -> Option<&MenuTreeNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn parent_of(&self, id: &str) -> Option<&MenuTreeNode> {
        if self.children.iter().any(|c| c.id() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.parent_of(id))
    }
}

/// Role-scoped navigation tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    pub roots: Vec<MenuTreeNode>,
}

impl MenuTree {
    /// Roots are visible records without an existing parent. A record whose
    /// parent exists but is hidden for `role` is hidden as well.
    pub fn build(snapshot: &MenuSnapshot, role: &Role) -> Self {
        let mut visited = vec![false; snapshot.len()];
        let roots = snapshot
            .root_indices()
            .iter()
            .filter_map(|&i| grow(snapshot, role, i, &mut visited))
            .collect();
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MenuTreeNode> {
        self.roots.iter().find_map(|r| r.find(id))
    }

    pub fn parent_of(&self, id: &str) -> Option<&MenuTreeNode> {
        self.roots.iter().find_map(|r| r.parent_of(id))
    }

    /// Ids from the root down to the deepest node containing `route`
    pub fn active_path(&self, route: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut level = &self.roots;
        while let Some(hit) = level.iter().find(|n| n.is_active(route)) {
            path.push(hit.node.id.clone());
            level = &hit.children;
        }
        path
    }
}

fn grow(snapshot: &MenuSnapshot, role: &Role, index: usize, visited: &mut [bool]) -> Option<MenuTreeNode> {
    let node = snapshot.node(index);
    if !node.is_visible_to(role) || std::mem::replace(&mut visited[index], true) {
        return None;
    }
    let children = snapshot
        .child_indices(&node.id)
        .iter()
        .filter_map(|&c| grow(snapshot, role, c, visited))
        .collect();
    Some(MenuTreeNode {
        node: node.clone(),
        children,
    })
}

/// What a click on a sidebar entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(String),
    Toggle(String),
    NavigateAndExpand { link: String, expand: String },
}

/// Parents without a real link only toggle. Entries under a parent that has
/// its own link lead to the parent's link and keep it expanded.
pub fn resolve_click(tree: &MenuTree, id: &str) -> Option<MenuAction> {
    let entry = tree.find(id)?;
    if !entry.is_leaf() {
        return Some(if entry.node.has_real_link() {
            MenuAction::NavigateAndExpand {
                link: entry.node.link.clone(),
                expand: entry.node.id.clone(),
            }
        } else {
            MenuAction::Toggle(entry.node.id.clone())
        });
    }
    match tree.parent_of(id) {
        Some(parent) if parent.node.has_real_link() => Some(MenuAction::NavigateAndExpand {
            link: parent.node.link.clone(),
            expand: parent.node.id.clone(),
        }),
        _ if entry.node.has_real_link() => Some(MenuAction::Navigate(entry.node.link.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::menus::snapshot::tests::node;

    fn ids(nodes: &[MenuTreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id()).collect()
    }

    fn chain() -> MenuSnapshot {
        MenuSnapshot::new(vec![
            node("A", None, 0),
            node("B", Some("A"), 0),
            node("C", Some("B"), 0),
        ])
    }

    #[test]
    fn test_active_path_through_chain() {
        let tree = MenuTree::build(&chain(), &Role::Admin);
        assert_eq!(tree.active_path("/c"), vec!["A", "B", "C"]);
        let a = &tree.roots[0];
        let b = &a.children[0];
        assert!(a.is_active("/c"));
        assert!(b.is_active("/c"));
        assert!(b.children[0].is_active("/c"));
        assert!(tree.active_path("/elsewhere").is_empty());
    }

    #[test]
    fn test_role_excluded_node_never_appears() {
        let mut only_cms = node("Banners", None, 1);
        only_cms.roles = vec![Role::Cms];
        let snapshot = MenuSnapshot::new(vec![node("Home", None, 0), only_cms]);

        let admin = MenuTree::build(&snapshot, &Role::Admin);
        assert_eq!(ids(&admin.roots), vec!["Home"]);
        assert!(admin.find("Banners").is_none());

        let cms = MenuTree::build(&snapshot, &Role::Cms);
        assert_eq!(ids(&cms.roots), vec!["Home", "Banners"]);
    }

    #[test]
    fn test_hidden_parent_hides_children() {
        let mut parent = node("P", None, 0);
        parent.is_active = false;
        let snapshot = MenuSnapshot::new(vec![parent, node("K", Some("P"), 0)]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_siblings_follow_order() {
        let snapshot = MenuSnapshot::new(vec![
            node("Root", None, 0),
            node("Third", Some("Root"), 3),
            node("First", Some("Root"), 1),
            node("Second", Some("Root"), 2),
        ]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);
        assert_eq!(ids(&tree.roots[0].children), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_cycle_does_not_recurse() {
        let snapshot = MenuSnapshot::new(vec![
            node("A", None, 0),
            node("X", Some("Y"), 0),
            node("Y", Some("X"), 0),
        ]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);
        assert_eq!(ids(&tree.roots), vec!["A"]);
        assert!(tree.active_path("/x").is_empty());
    }

    #[test]
    fn test_click_semantics() {
        let mut group = node("Catalog", None, 0);
        group.link = "#".into();
        let mut live = node("Users", None, 1);
        live.link = "/users".into();
        let snapshot = MenuSnapshot::new(vec![
            group,
            node("Products", Some("Catalog"), 0),
            live,
            node("Roles", Some("Users"), 0),
            node("Dashboard", None, 2),
        ]);
        let tree = MenuTree::build(&snapshot, &Role::Admin);

        assert_eq!(
            resolve_click(&tree, "Catalog"),
            Some(MenuAction::Toggle("Catalog".into()))
        );
        assert_eq!(
            resolve_click(&tree, "Products"),
            Some(MenuAction::Navigate("/products".into()))
        );
        assert_eq!(
            resolve_click(&tree, "Roles"),
            Some(MenuAction::NavigateAndExpand {
                link: "/users".into(),
                expand: "Users".into()
            })
        );
        assert_eq!(
            resolve_click(&tree, "Users"),
            Some(MenuAction::NavigateAndExpand {
                link: "/users".into(),
                expand: "Users".into()
            })
        );
        assert_eq!(
            resolve_click(&tree, "Dashboard"),
            Some(MenuAction::Navigate("/dashboard".into()))
        );
        assert_eq!(resolve_click(&tree, "missing"), None);
    }

    #[test]
    fn test_placeholder_link_never_matches_route() {
        let mut group = node("G", None, 0);
        group.link = "#".into();
        let tree = MenuTree::build(&MenuSnapshot::new(vec![group]), &Role::Admin);
        assert!(!tree.roots[0].is_active("#"));
    }
}
