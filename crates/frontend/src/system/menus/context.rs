use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::store::{ApplyOutcome, MenuStore};
use super::tree::MenuTree;
use crate::layout::notifications::Notifications;

/// Shared per-role menu state. Readers only go through `tree_for`; the store is
/// mutated by `fetch_menus` / `refresh_menus` alone.
#[derive(Clone, Copy)]
pub struct MenuContext {
    store: RwSignal<MenuStore>,
    notifications: Option<Notifications>,
}

impl MenuContext {
    pub fn new(notifications: Option<Notifications>) -> Self {
        Self {
            store: RwSignal::new(MenuStore::default()),
            notifications,
        }
    }

    /// Replaces the snapshot of `role` once the request resolves
    pub fn fetch_menus(&self, role: Role) {
        let Some(ticket) = self.store.try_update(|s| s.begin_fetch(role.clone())) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::fetch_menus_by_role(&role).await {
                Ok(response) => {
                    let message = response.message.clone();
                    let outcome = this
                        .store
                        .try_update(|s| s.apply(ticket, response))
                        .unwrap_or(ApplyOutcome::Stale);
                    match outcome {
                        ApplyOutcome::Applied => log::debug!("menu: {} snapshot applied", role),
                        ApplyOutcome::Stale => {
                            log::debug!("menu: dropped stale {} snapshot", role)
                        }
                        ApplyOutcome::Rejected => {
                            log::warn!("menu: {} fetch refused, keeping previous", role);
                            this.notify_error(message.as_deref());
                        }
                    }
                }
                Err(e) => {
                    log::error!("menu: {} fetch failed: {}", role, e);
                    this.notify_error(Some(&e));
                }
            }
        });
    }

    /// Re-fetches every role requested so far; each role commits on its own
    pub fn refresh_menus(&self) {
        let roles = self.store.with_untracked(|s| s.known_roles().to_vec());
        log::info!("menu: refreshing {} role(s)", roles.len());
        for role in roles {
            self.fetch_menus(role);
        }
    }

    /// Tree for `role`, rebuilt from the stored snapshot (empty until loaded)
    pub fn tree_for(&self, role: &Role) -> MenuTree {
        self.store.with(|s| {
            s.snapshot(role)
                .map(|snapshot| MenuTree::build(snapshot, role))
                .unwrap_or_default()
        })
    }

    pub fn is_loaded(&self, role: &Role) -> bool {
        self.store.with(|s| s.snapshot(role).is_some())
    }

    fn notify_error(&self, message: Option<&str>) {
        if let Some(n) = self.notifications {
            n.error(message);
        }
    }
}

pub fn use_menus() -> MenuContext {
    use_context::<MenuContext>().expect("MenuContext not provided in context")
}
