use super::roles::Role;
use serde::{Deserialize, Serialize};

/// Links that do not navigate: the node only opens its submenu.
pub const PLACEHOLDER_LINKS: [&str; 2] = ["#", ""];

/// One record of the flat menu snapshot served per role.
///
/// Children are not stored; they are derived from `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
}

fn default_active() -> bool {
    true
}

impl MenuNode {
    /// `false` for the placeholder values that only toggle a submenu
    pub fn has_real_link(&self) -> bool {
        !PLACEHOLDER_LINKS.contains(&self.link.trim())
    }

    pub fn is_visible_to(&self, role: &Role) -> bool {
        self.is_active && self.roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_node_from_backend_json() {
        let json = r##"{
            "id": "m1",
            "name": "Catalog",
            "link": "#",
            "icon": "layers",
            "parentId": null,
            "order": 2,
            "isActive": true,
            "roles": ["ADMIN", "CMS"]
        }"##;
        let node: MenuNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.parent_id, None);
        assert_eq!(node.roles, vec![Role::Admin, Role::Cms]);
        assert!(!node.has_real_link());
        assert!(node.is_visible_to(&Role::Cms));
        assert!(!node.is_visible_to(&Role::User));
    }

    #[test]
    fn test_inactive_node_is_hidden() {
        let node = MenuNode {
            id: "m2".into(),
            name: "Banners".into(),
            link: "/cms/banners".into(),
            icon: String::new(),
            parent_id: Some("m1".into()),
            order: 0,
            is_active: false,
            roles: vec![Role::Cms],
        };
        assert!(node.has_real_link());
        assert!(!node.is_visible_to(&Role::Cms));
    }
}
