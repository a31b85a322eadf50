use contracts::shared::api::ApiResponse;
use contracts::system::menus::MenuNode;
use contracts::system::roles::Role;
use std::collections::HashMap;

use super::snapshot::MenuSnapshot;

/// Issued when a fetch for `role` starts; only the newest ticket per role may
/// commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    role: Role,
    generation: u64,
}

impl FetchTicket {
    pub fn role(&self) -> &Role {
        &self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// `outcome = false` or no data: the previous snapshot stays
    Rejected,
    /// A newer fetch for the same role was started meanwhile
    Stale,
}

/// Menu snapshots partitioned by role
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    snapshots: HashMap<Role, MenuSnapshot>,
    generations: HashMap<Role, u64>,
    known: Vec<Role>,
}

impl MenuStore {
    pub fn begin_fetch(&mut self, role: Role) -> FetchTicket {
        let generation = self.generations.entry(role.clone()).or_insert(0);
        *generation += 1;
        let generation = *generation;
        if !self.known.contains(&role) {
            self.known.push(role.clone());
        }
        FetchTicket { role, generation }
    }

    pub fn apply(&mut self, ticket: FetchTicket, response: ApiResponse<Vec<MenuNode>>) -> ApplyOutcome {
        if self.generations.get(&ticket.role) != Some(&ticket.generation) {
            return ApplyOutcome::Stale;
        }
        match response.into_data() {
            Some(nodes) => {
                self.snapshots.insert(ticket.role, MenuSnapshot::new(nodes));
                ApplyOutcome::Applied
            }
            None => ApplyOutcome::Rejected,
        }
    }

    pub fn snapshot(&self, role: &Role) -> Option<&MenuSnapshot> {
        self.snapshots.get(role)
    }

    /// Every role a fetch was ever started for
    pub fn known_roles(&self) -> &[Role] {
        &self.known
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::menus::snapshot::tests::node;

    fn fetched(store: &mut MenuStore, role: Role, ids: &[&str]) -> ApplyOutcome {
        let ticket = store.begin_fetch(role);
        let nodes = ids.iter().map(|id| node(id, None, 0)).collect();
        store.apply(ticket, ApiResponse::ok(nodes))
    }

    fn snapshot_ids(store: &MenuStore, role: &Role) -> Vec<String> {
        store
            .snapshot(role)
            .map(|s| s.nodes().iter().map(|n| n.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_roles_are_isolated() {
        let mut store = MenuStore::default();
        assert_eq!(fetched(&mut store, Role::Cms, &["Banners"]), ApplyOutcome::Applied);
        let cms_before = store.snapshot(&Role::Cms).cloned();

        assert_eq!(fetched(&mut store, Role::Admin, &["Users", "Menus"]), ApplyOutcome::Applied);
        assert_eq!(store.snapshot(&Role::Cms).cloned(), cms_before);
        assert_eq!(snapshot_ids(&store, &Role::Admin), vec!["Users", "Menus"]);
        assert_eq!(store.known_roles(), &[Role::Cms, Role::Admin]);
    }

    #[test]
    fn test_failed_outcome_keeps_previous_snapshot() {
        let mut store = MenuStore::default();
        fetched(&mut store, Role::Admin, &["Users"]);

        let ticket = store.begin_fetch(Role::Admin);
        let outcome = store.apply(ticket, ApiResponse::failed("backend down"));
        assert_eq!(outcome, ApplyOutcome::Rejected);
        assert_eq!(snapshot_ids(&store, &Role::Admin), vec!["Users"]);
    }

    #[test]
    fn test_late_answer_of_older_fetch_is_stale() {
        let mut store = MenuStore::default();
        let older = store.begin_fetch(Role::Admin);
        let newer = store.begin_fetch(Role::Admin);

        let fresh = vec![node("Fresh", None, 0)];
        assert_eq!(store.apply(newer, ApiResponse::ok(fresh)), ApplyOutcome::Applied);
        let old = vec![node("Old", None, 0)];
        assert_eq!(store.apply(older, ApiResponse::ok(old)), ApplyOutcome::Stale);
        assert_eq!(snapshot_ids(&store, &Role::Admin), vec!["Fresh"]);
        assert_eq!(store.known_roles(), &[Role::Admin]);
    }

    #[test]
    fn test_tickets_of_other_roles_do_not_interfere() {
        let mut store = MenuStore::default();
        let admin = store.begin_fetch(Role::Admin);
        let cms = store.begin_fetch(Role::Cms);
        assert_eq!(cms.role(), &Role::Cms);
        assert_eq!(store.apply(admin, ApiResponse::ok(vec![])), ApplyOutcome::Applied);
        assert_eq!(store.apply(cms, ApiResponse::ok(vec![])), ApplyOutcome::Applied);
    }
}
