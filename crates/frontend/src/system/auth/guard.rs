use contracts::system::roles::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for users holding one of `roles`
#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let allowed = StoredValue::new(roles);

    view! {
        <Show
            when=move || {
                auth_state.with(|s| {
                    s.role().map(|r| allowed.with_value(|roles| roles.contains(r))).unwrap_or(false)
                })
            }
            fallback=|| view! { <div class="alert alert--error">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}
