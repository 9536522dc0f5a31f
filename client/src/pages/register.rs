//! Registration page: creates an account via `POST /api/register`.
//!
//! When the server answers without a session the page asks the user to sign
//! in; otherwise the session redirect takes over.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use auth::RegisterOutcome;
use leptos::prelude::*;

use crate::util::auth::AuthContext;

struct RegisterInput {
    email: String,
    password: String,
    name: String,
}

fn validate_register_input(email: &str, password: &str, name: &str) -> Result<RegisterInput, &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err("Fill in every field.");
    }
    Ok(RegisterInput {
        email: email.to_owned(),
        password: password.to_owned(),
        name: name.to_owned(),
    })
}

fn registered_message(server_message: Option<&str>) -> String {
    match server_message {
        Some(message) if !message.trim().is_empty() => format!("{message}. Sign in to continue."),
        _ => "Account created. Sign in to continue.".to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let registered = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&email.get(), &password.get(), &name.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        registered.set(false);
        info.set("Creating account...".to_owned());

        let session = ctx.session();
        leptos::task::spawn_local(async move {
            match session.register(&input.email, &input.password, &input.name).await {
                Ok(RegisterOutcome::SignedIn) => info.set(String::new()),
                Ok(RegisterOutcome::Registered { message }) => {
                    registered.set(true);
                    info.set(registered_message(message.as_deref()));
                }
                Err(e) => info.set(e.to_string()),
            }
            password.set(String::new());
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || registered.get()>
                    <a href="/login" class="login-button">"Go to sign in"</a>
                </Show>
            </div>
        </div>
    }
}
