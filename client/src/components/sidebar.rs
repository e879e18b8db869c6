//! Dashboard sidebar: signed-in user, role tag, and the role's menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Menu contents come from `session::menu::menu_for`; selecting the logout
//! entry calls `SessionStore::logout`, whose `Navigate` event moves the router.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use session::menu::{MenuAction, MenuItem, menu_for};
use session::{Route, SessionStore};

use crate::state::auth::AuthState;

/// Key of the entry whose route best matches `pathname`.
///
/// The longest matching route path wins so `/dashboard/programs` selects
/// "programs" rather than "dashboard".
fn selected_key(menu: &[MenuItem], pathname: &str) -> Option<&'static str> {
    let pathname = pathname.trim_end_matches('/');
    menu.iter()
        .filter_map(|item| item.route().map(|route| (item.key, route.path())))
        .filter(|(_, path)| pathname == *path || pathname.starts_with(&format!("{path}/")))
        .max_by_key(|(_, path)| path.len())
        .map(|(key, _)| key)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let collapsed = RwSignal::new(false);

    let name = move || auth.with(|state| state.identity().map(session::Identity::display_name).unwrap_or_default());
    let role = move || auth.with(AuthState::role);
    let selected = move || {
        let menu = menu_for(role());
        pathname.with(|pathname| selected_key(&menu, pathname))
    };

    let entry = move |item: MenuItem| {
        let class = move || {
            if selected() == Some(item.key) { "sidebar__item sidebar__item--selected" } else { "sidebar__item" }
        };
        match item.action {
            MenuAction::Navigate(route) => view! {
                <li class=class>
                    <A href=route.path()>{item.label}</A>
                </li>
            }
            .into_any(),
            MenuAction::Logout => {
                let store = store.clone();
                view! {
                    <li class=class>
                        <button class="sidebar__logout" on:click=move |_| store.logout()>
                            {item.label}
                        </button>
                    </li>
                }
                .into_any()
            }
        }
    };

    view! {
        <aside class={move || if collapsed.get() { "sidebar sidebar--collapsed" } else { "sidebar" }}>
            <div class="sidebar__toggle">
                <button on:click=move |_| collapsed.update(|c| *c = !*c)>
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <Show when=move || !collapsed.get()>
                <div class="sidebar__profile">
                    <p class="sidebar__name">{name}</p>
                    <span class="sidebar__role-tag">{move || role().as_str()}</span>
                    <A href=Route::Profile.path()>"Edit Profile"</A>
                </div>
            </Show>
            <ul class="sidebar__menu">
                {move || menu_for(role()).into_iter().map(entry.clone()).collect_view()}
            </ul>
        </aside>
    }
}
