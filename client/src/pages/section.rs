//! Placeholder view for dashboard sections (`/dashboard/:section`).

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use session::menu::label_for;
use session::{Role, Route};

use crate::state::auth::AuthState;

/// Heading for `segment`, using the role's menu wording when it has one.
fn section_title(role: Role, segment: &str) -> Option<String> {
    let route = Route::dashboard_section(segment)?;
    let title = label_for(role, route)
        .map_or_else(|| segment.split('-').map(capitalize).collect::<Vec<_>>().join(" "), str::to_owned);
    Some(title)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map(|first| first.to_uppercase().chain(chars).collect()).unwrap_or_default()
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let title = move || {
        let segment = params.with(|p| p.get("section").unwrap_or_default());
        auth.with(|state| section_title(state.role(), &segment))
    };

    view! {
        <section class="dashboard-section">
            {move || match title() {
                Some(title) => view! {
                    <div>
                        <h1>{title}</h1>
                        <p class="dashboard-section__placeholder">"This section is coming soon."</p>
                    </div>
                }
                .into_any(),
                None => view! { <p class="dashboard-section__missing">"Page not found."</p> }.into_any(),
            }}
        </section>
    }
}
