//! Sidebar rendering the role-scoped menu tree

use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::icons::icon;
use crate::system::auth::context::current_role;
use crate::system::menus::{resolve_click, use_menus, ExpansionState, MenuTree, MenuTreeNode};
use leptos::prelude::*;
use thaw::Spinner;

fn render_entry(
    entry: MenuTreeNode,
    depth: usize,
    ctx: AppGlobalContext,
    expansion: RwSignal<ExpansionState>,
    on_click: Callback<String>,
) -> AnyView {
    let id = entry.node.id.clone();
    let has_children = !entry.is_leaf();
    let padding = format!("{}px", 12 + depth * 14);
    let link = entry.node.link.clone();
    let name = entry.node.name.clone();
    let glyph = icon(&entry.node.icon);
    let children = entry.children.clone();
    let entry = StoredValue::new(entry);

    let id_for_click = id.clone();
    let id_for_chevron = id.clone();
    let id_for_children = id;

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || {
                    ctx.route.with(|route| entry.with_value(|e| e.is_active(route)))
                }
                class:app-sidebar__item--current=move || ctx.route.with(|route| route == &link)
                style:padding-left=padding
                on:click=move |_| on_click.run(id_for_click.clone())
            >
                <div class="app-sidebar__item-content">
                    {glyph}
                    <span>{name}</span>
                </div>
                {has_children.then(|| {
                    view! {
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded={
                                let id = id_for_chevron.clone();
                                move || expansion.with(|e| e.is_expanded(&id))
                            }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                expansion.update(|e| e.toggle(&id_for_chevron));
                            }
                        >
                            {icon("chevron-right")}
                        </div>
                    }
                })}
            </div>

            {has_children.then(|| {
                let children = StoredValue::new(children);
                view! {
                    <Show when=move || expansion.with(|e| e.is_expanded(&id_for_children))>
                        <div class="app-sidebar__children">
                            {move || {
                                children
                                    .get_value()
                                    .into_iter()
                                    .map(|child| render_entry(child, depth + 1, ctx, expansion, on_click))
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                }
            })}
        </div>
    }
    .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let menus = use_menus();
    let role = current_role();
    let expansion = RwSignal::new(ExpansionState::default());

    // first visit of a role loads its menus
    Effect::new(move |_| {
        if let Some(role) = role.get() {
            untrack(move || {
                if !menus.is_loaded(&role) {
                    menus.fetch_menus(role);
                }
            });
        }
    });

    let tree = Memo::new(move |_| {
        role.get()
            .map(|r| menus.tree_for(&r))
            .unwrap_or_else(MenuTree::default)
    });

    Effect::new(move |_| {
        let route = ctx.route.get();
        tree.with(|t| expansion.update(|e| e.sync_route(t, &route)));
    });

    let on_click = Callback::new(move |id: String| {
        let Some(action) = tree.with_untracked(|t| resolve_click(t, &id)) else {
            log::debug!("sidebar: '{}' has nothing to do", id);
            return;
        };
        if let Some(link) = expansion.try_update(|e| e.apply(action)).flatten() {
            ctx.navigate(&link);
        }
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                let current = tree.get();
                if current.is_empty() {
                    let loaded = role.get().map(|r| menus.is_loaded(&r)).unwrap_or(false);
                    return if loaded {
                        view! { <div class="app-sidebar__empty">"No menu entries"</div> }.into_any()
                    } else {
                        view! { <div class="app-sidebar__empty"><Spinner /></div> }.into_any()
                    };
                }
                current
                    .roots
                    .into_iter()
                    .map(|entry| render_entry(entry, 0, ctx, expansion, on_click))
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
