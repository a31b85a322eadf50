use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Session restore finished (successfully or not)
    pub checked: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<&Role> {
        self.user_info.as_ref().map(|u| &u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                log::info!("auth: no stored session");
                set_auth_state.set(AuthState {
                    checked: true,
                    ..AuthState::default()
                });
                return;
            };
            match api::get_current_user().await {
                Ok(user_info) => {
                    log::info!("auth: signed in as {} ({})", user_info.username, user_info.role);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                        checked: true,
                    });
                }
                Err(e) => {
                    log::warn!("auth: stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState {
                        checked: true,
                        ..AuthState::default()
                    });
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Role of the signed-in user, tracked
pub fn current_role() -> Signal<Option<Role>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.role().cloned()))
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let result = api::logout().await;
    storage::clear_tokens();
    set_auth_state.set(AuthState {
        checked: true,
        ..AuthState::default()
    });
    result
}
