//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;
use session::Route;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(|state| state.snapshot.is_authenticated());

    view! {
        <div class="home-page">
            <h1>"Welcome to AHH"</h1>
            <p>"Empowering organizations with modern solutions"</p>
            <Show
                when=signed_in
                fallback=|| view! {
                    <nav class="home-page__actions">
                        <A href=Route::Login.path()>"Login"</A>
                        <A href=Route::Register.path()>"Sign up"</A>
                    </nav>
                }
            >
                <nav class="home-page__actions">
                    <A href=Route::Dashboard.path()>"Go to dashboard"</A>
                </nav>
            </Show>
        </div>
    }
}
