use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::Notifications;
use crate::system::auth::context::AuthProvider;
use crate::system::menus::MenuContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared stores for the whole app
    provide_context(AppGlobalContext::new());

    let notifications = Notifications::new();
    provide_context(notifications);

    // Per-role menu store, read by the sidebar, refreshed by menu management
    provide_context(MenuContext::new(Some(notifications)));

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
