//! Public landing page.

use leptos::prelude::*;

use crate::util::auth::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let state = ctx.state;

    view! {
        <div class="home-page">
            <h1>"Workspace"</h1>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| {
                    view! {
                        <nav class="home-page__links">
                            <a href="/login">"Sign in"</a>
                            <a href="/register">"Create account"</a>
                        </nav>
                    }
                }
            >
                <p>"Welcome back, " {move || state.get().display_name()}</p>
                <a href="/dashboard">"Open dashboard"</a>
            </Show>
        </div>
    }
}
