use contracts::system::menus::MenuNode;
use std::collections::HashMap;

/// Flat menu list of one role plus its adjacency index.
///
/// The index is built once per applied fetch; trees are derived from it on
/// every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    nodes: Vec<MenuNode>,
    roots: Vec<usize>,
    children: HashMap<String, Vec<usize>>,
    detached: Vec<usize>,
}

impl MenuSnapshot {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        let mut first_by_id: HashMap<&str, usize> = HashMap::new();
        for (i, node) in nodes.iter().enumerate() {
            if first_by_id.contains_key(node.id.as_str()) {
                log::warn!("menu: duplicate id {:?}, later record ignored as a parent", node.id);
                continue;
            }
            first_by_id.insert(node.id.as_str(), i);
        }

        let mut roots = Vec::new();
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, node) in nodes.iter().enumerate() {
            match node.parent_id.as_deref() {
                Some(parent) if first_by_id.contains_key(parent) => {
                    children.entry(parent.to_string()).or_default().push(i);
                }
                // missing parent: top-level
                _ => roots.push(i),
            }
        }

        let by_order = |a: &usize, b: &usize| {
            let (a, b) = (&nodes[*a], &nodes[*b]);
            a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name))
        };
        roots.sort_by(by_order);
        for list in children.values_mut() {
            list.sort_by(by_order);
        }

        let mut snapshot = Self {
            nodes,
            roots,
            children,
            detached: Vec::new(),
        };
        snapshot.detached = snapshot.find_detached();
        if !snapshot.detached.is_empty() {
            let ids: Vec<&str> = snapshot
                .detached
                .iter()
                .map(|&i| snapshot.nodes[i].id.as_str())
                .collect();
            log::warn!("menu: parent cycle, dropping {:?}", ids);
        }
        snapshot
    }

    /// Records that no root reaches: members of `parent_id` cycles and
    /// everything hanging below them.
    fn find_detached(&self) -> Vec<usize> {
        let mut reached = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = self.roots.clone();
        while let Some(i) = stack.pop() {
            if std::mem::replace(&mut reached[i], true) {
                continue;
            }
            stack.extend(self.child_indices(&self.nodes[i].id));
        }
        reached
            .iter()
            .enumerate()
            .filter(|(_, r)| !**r)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn root_indices(&self) -> &[usize] {
        &self.roots
    }

    pub(crate) fn child_indices(&self, id: &str) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn node(&self, index: usize) -> &MenuNode {
        &self.nodes[index]
    }

    pub fn detached(&self) -> impl Iterator<Item = &MenuNode> {
        self.detached.iter().map(|&i| &self.nodes[i])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::system::roles::Role;

    pub(crate) fn node(id: &str, parent: Option<&str>, order: u32) -> MenuNode {
        MenuNode {
            id: id.to_string(),
            name: id.to_string(),
            link: format!("/{}", id.to_lowercase()),
            icon: String::new(),
            parent_id: parent.map(str::to_string),
            order,
            is_active: true,
            roles: vec![Role::Admin, Role::Cms],
        }
    }

    fn ids(snapshot: &MenuSnapshot, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| snapshot.node(i).id.clone()).collect()
    }

    #[test]
    fn test_adjacency_sorted_by_order() {
        let snapshot = MenuSnapshot::new(vec![
            node("Z", None, 2),
            node("A", None, 1),
            node("A2", Some("A"), 5),
            node("A1", Some("A"), 0),
        ]);
        assert_eq!(ids(&snapshot, snapshot.root_indices()), vec!["A", "Z"]);
        assert_eq!(ids(&snapshot, snapshot.child_indices("A")), vec!["A1", "A2"]);
        assert!(snapshot.child_indices("Z").is_empty());
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let snapshot = MenuSnapshot::new(vec![node("B", Some("gone"), 0)]);
        assert_eq!(ids(&snapshot, snapshot.root_indices()), vec!["B"]);
    }

    #[test]
    fn test_cycle_is_detached() {
        let snapshot = MenuSnapshot::new(vec![
            node("R", None, 0),
            node("X", Some("Y"), 0),
            node("Y", Some("X"), 0),
            node("Self", Some("Self"), 0),
            node("Below", Some("X"), 1),
        ]);
        let mut detached: Vec<&str> = snapshot.detached().map(|n| n.id.as_str()).collect();
        detached.sort();
        assert_eq!(detached, vec!["Below", "Self", "X", "Y"]);
        assert_eq!(ids(&snapshot, snapshot.root_indices()), vec!["R"]);
    }
}
