//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::api::build_api_client;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::util::auth::{AuthContext, install_route_guard, install_session_redirects, provide_auth};

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth(build_api_client());

    view! {
        <Title text="Workspace"/>

        <Router>
            <AuthGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Router-scoped effects: guard every navigation and apply session redirects.
#[component]
fn AuthGuard() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let navigate = use_navigate();
    install_route_guard(ctx, navigate.clone());
    install_session_redirects(ctx.redirect, navigate);
}
