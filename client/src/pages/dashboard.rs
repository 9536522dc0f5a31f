//! Dashboard page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. The router guard keeps signed-out
//! visitors away; the page itself only renders the profile and session actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use auth::UserProfile;
use leptos::prelude::*;

use crate::util::auth::{AuthContext, should_redirect_unauth};

/// Pretty-printed profile JSON for the details panel.
fn profile_details(user: Option<&UserProfile>) -> String {
    user.and_then(|user| serde_json::to_string_pretty(user.as_value()).ok())
        .unwrap_or_else(|| "No profile loaded.".to_owned())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let state = ctx.state;
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_refresh = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = ctx.session();
        leptos::task::spawn_local(async move {
            match session.refresh_profile().await {
                Ok(_) => info.set("Profile refreshed.".to_owned()),
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let on_logout = move |_| ctx.session().logout();

    view! {
        <Show
            when=move || !should_redirect_unauth(&state.get())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="dashboard-page__user">{move || state.get().display_name()}</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn" on:click=on_refresh disabled=move || busy.get()>
                        "Refresh profile"
                    </button>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <pre class="dashboard-page__profile">
                    {move || profile_details(state.get().session.user.as_ref())}
                </pre>
                <Show when=move || !info.get().is_empty()>
                    <p class="dashboard-page__message">{move || info.get()}</p>
                </Show>
            </div>
        </Show>
    }
}
